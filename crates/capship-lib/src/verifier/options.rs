use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tech::TechContext;

/// Switches controlling which optional checks run and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierOptions {
    /// Run the armor check.
    pub check_armor: bool,
    /// Report mounts listed in `failed_equipment`.
    pub check_failed_equipment: bool,
    /// Treat a design lighter than its declared tonnage as a failure.
    pub show_underweight: bool,
    /// Equipment ids known to be broken or unavailable.
    pub failed_equipment: Vec<String>,
    /// Ruleset context handed to the tech oracle.
    pub tech: TechContext,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        Self {
            check_armor: true,
            check_failed_equipment: true,
            show_underweight: false,
            failed_equipment: Vec::new(),
            tech: TechContext::default(),
        }
    }
}

impl VerifierOptions {
    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        serde_json::from_reader(file).map_err(|source| Error::OptionsParse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|source| Error::OptionsParse { path: None, source })
    }

    /// Whether `id` is on the failed equipment list (case-insensitive).
    pub fn is_failed(&self, id: &str) -> bool {
        self.failed_equipment
            .iter()
            .any(|failed| failed.trim().eq_ignore_ascii_case(id.trim()))
    }
}
