//! Reference catalog discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use capship_lib::Catalog;

pub const EQUIPMENT_ENV: &str = "CAPSHIP_EQUIPMENT_DATA";
pub const ARMOR_ENV: &str = "CAPSHIP_ARMOR_DATA";

/// Candidate locations for a catalog file, most specific first:
/// 1. Path given on the command line
/// 2. Environment variable
/// 3. Debug fixture path (only in debug builds)
pub fn catalog_candidates(explicit: Option<&Path>, env_var: &str, fixture: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
        return candidates;
    }

    if let Ok(env_path) = std::env::var(env_var) {
        candidates.push(PathBuf::from(env_path));
    }

    if cfg!(debug_assertions) {
        candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures").join(fixture));
    }

    candidates
}

fn resolve(explicit: Option<&Path>, env_var: &str, fixture: &str) -> Result<PathBuf> {
    catalog_candidates(explicit, env_var, fixture)
        .into_iter()
        .find(|path| path.exists())
        .ok_or_else(|| anyhow::anyhow!("{fixture} not found; pass a path or set {env_var}"))
}

/// Locate and load the equipment and armor catalogs.
pub fn load_catalog(equipment: Option<&Path>, armor: Option<&Path>) -> Result<Catalog> {
    let equipment = resolve(equipment, EQUIPMENT_ENV, "equipment.csv")?;
    let armor = resolve(armor, ARMOR_ENV, "armor.csv")?;
    Catalog::from_paths(&equipment, &armor).with_context(|| {
        format!(
            "failed to load reference catalog from {} and {}",
            equipment.display(),
            armor.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let candidates = catalog_candidates(Some(Path::new("/tmp/eq.csv")), EQUIPMENT_ENV, "equipment.csv");
        assert_eq!(candidates, vec![PathBuf::from("/tmp/eq.csv")]);
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let err = load_catalog(Some(Path::new("/nonexistent/equipment.csv")), None).unwrap_err();
        assert!(err.to_string().contains("equipment.csv not found"));
    }
}
