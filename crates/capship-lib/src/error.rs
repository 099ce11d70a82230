use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the capital ship verifier.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors raised while loading reference data or resolving a design.
///
/// Rule violations are never reported through this type; they are diagnostics on a
/// [`ValidationResult`](crate::verifier::ValidationResult).
#[derive(Debug, Error)]
pub enum Error {
    /// A mount references an equipment id that the catalog does not know.
    #[error("unknown equipment id: {id}{}", format_location(.location))]
    UnknownEquipment { id: String, location: Option<String> },

    /// The design names an armor type the catalog does not carry.
    #[error("unknown armor type: {id}")]
    UnknownArmorType { id: String },

    /// A primitive hull requires the primitive armor record, which is missing.
    #[error("catalog has no primitive capital armor record")]
    MissingPrimitiveArmor,

    /// Raised when catalog data fails validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Raised when duplicate ids are encountered during catalog load.
    #[error("duplicate catalog id encountered: {id}")]
    DuplicateCatalogId { id: String },

    /// Raised when a design snapshot is internally inconsistent.
    #[error("invalid design: {message}")]
    DesignValidation { message: String },

    /// Raised when a design file could not be decoded.
    #[error("failed to parse design {}: {source}", display_path(.path))]
    DesignParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when a verifier options file could not be decoded.
    #[error("failed to parse verifier options {}: {source}", display_path(.path))]
    OptionsParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_location(location: &Option<String>) -> String {
    match location {
        Some(location) => format!(" (in {location})"),
        None => String::new(),
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<reader>".to_string(),
    }
}
