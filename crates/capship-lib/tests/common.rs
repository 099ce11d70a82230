#![allow(dead_code)]

use std::path::PathBuf;

use capship_lib::Catalog;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_catalog() -> Catalog {
    let dir = fixtures_dir();
    Catalog::from_paths(&dir.join("equipment.csv"), &dir.join("armor.csv"))
        .expect("fixture catalog loads")
}

pub fn design_path(name: &str) -> PathBuf {
    fixtures_dir().join("designs").join(name)
}
