//! CSV loading for the equipment and armor catalogs.
//!
//! Headers are normalized before matching so that minor spelling differences
//! between exports (`Ammo Family`, `ammo_family`, `ammofamily`) are accepted.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::tech::{TechBase, TechRecord};

use super::armor::{ArmorType, PointsPerTon};
use super::equipment::{EquipmentFlags, EquipmentKind, EquipmentType, MassDriverClass};
use super::ReferenceCatalog;

const EQUIPMENT_COLUMNS: &[(&str, &[&str], bool)] = &[
    ("id", &["id", "internal_name", "internalname", "lookup"], true),
    ("name", &["name", "display_name"], true),
    ("kind", &["kind", "type", "category"], true),
    ("tonnage", &["tonnage", "tons", "weight"], true),
    ("ammo_family", &["ammo_family", "ammofamily", "ammo_type", "ammotype"], false),
    ("long_range", &["long_range", "longrange", "range_long"], false),
    ("shots_per_ton", &["shots_per_ton", "shotsperton", "shots"], false),
    ("crew", &["crew", "crew_required"], false),
    ("mass_driver", &["mass_driver", "massdriver"], false),
    ("flags", &["flags"], false),
    ("tech_base", &["tech_base", "techbase"], false),
    ("intro_year", &["intro_year", "introyear", "year"], false),
    ("unofficial", &["unofficial"], false),
];

const ARMOR_COLUMNS: &[(&str, &[&str], bool)] = &[
    ("id", &["id", "internal_name", "internalname"], true),
    ("name", &["name"], true),
    ("ppt_jump_ship", &["ppt_jump_ship", "ppt_jumpship", "ppt_js"], true),
    ("ppt_war_ship", &["ppt_war_ship", "ppt_warship", "ppt_ws"], true),
    ("ppt_space_station", &["ppt_space_station", "ppt_station", "ppt_ss"], true),
    ("clan_ppt_jump_ship", &["clan_ppt_jump_ship", "clan_ppt_jumpship", "clan_ppt_js"], false),
    ("clan_ppt_war_ship", &["clan_ppt_war_ship", "clan_ppt_warship", "clan_ppt_ws"], false),
    ("clan_ppt_space_station", &["clan_ppt_space_station", "clan_ppt_station", "clan_ppt_ss"], false),
    ("flags", &["flags"], false),
    ("tech_base", &["tech_base", "techbase"], false),
    ("intro_year", &["intro_year", "introyear", "year"], false),
    ("unofficial", &["unofficial"], false),
];

/// Equipment and armor reference data loaded from CSV files.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    equipment: HashMap<String, EquipmentType>,
    armor: HashMap<String, ArmorType>,
    sources: Vec<PathBuf>,
}

impl Catalog {
    /// Load both catalogs from file paths.
    pub fn from_paths(equipment: &Path, armor: &Path) -> Result<Self> {
        let mut catalog = Self::from_readers(fs::File::open(equipment)?, fs::File::open(armor)?)?;
        catalog.sources = vec![equipment.to_path_buf(), armor.to_path_buf()];
        Ok(catalog)
    }

    /// Load both catalogs from readers (e.g., files or in-memory buffers).
    pub fn from_readers<E: Read, A: Read>(equipment: E, armor: A) -> Result<Self> {
        let equipment = load_equipment(equipment)?;
        let armor = load_armor(armor)?;
        debug!(
            equipment = equipment.len(),
            armor = armor.len(),
            "loaded reference catalog"
        );
        Ok(Self {
            equipment,
            armor,
            sources: Vec::new(),
        })
    }

    /// Build a catalog from already constructed records.
    pub fn from_records(
        equipment: impl IntoIterator<Item = EquipmentType>,
        armor: impl IntoIterator<Item = ArmorType>,
    ) -> Result<Self> {
        let mut catalog = Self::default();
        for record in equipment {
            record.validate()?;
            insert_unique(&mut catalog.equipment, record.id.clone(), record)?;
        }
        for record in armor {
            record.validate()?;
            insert_unique(&mut catalog.armor, record.id.clone(), record)?;
        }
        Ok(catalog)
    }

    /// All equipment records sorted by name.
    pub fn equipment_sorted(&self) -> Vec<&EquipmentType> {
        let mut items: Vec<&EquipmentType> = self.equipment.values().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Paths the catalog was loaded from, if any.
    pub fn source_paths(&self) -> &[PathBuf] {
        &self.sources
    }
}

impl ReferenceCatalog for Catalog {
    fn lookup_equipment(&self, id: &str) -> Option<&EquipmentType> {
        self.equipment.get(&normalize_id(id))
    }

    fn armor_type(&self, id: &str) -> Option<&ArmorType> {
        self.armor.get(&normalize_id(id))
    }

    fn armor_types(&self) -> Vec<&ArmorType> {
        let mut armor: Vec<&ArmorType> = self.armor.values().collect();
        armor.sort_by(|a, b| a.name.cmp(&b.name));
        armor
    }
}

fn insert_unique<T>(map: &mut HashMap<String, T>, id: String, value: T) -> Result<()> {
    let key = normalize_id(&id);
    if map.contains_key(&key) {
        return Err(Error::DuplicateCatalogId { id: key });
    }
    map.insert(key, value);
    Ok(())
}

/// Normalize a catalog id for case-insensitive lookup.
fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

/// Normalize a header for robust matching.
fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Column positions resolved from a CSV header row.
struct Columns {
    index: BTreeMap<&'static str, usize>,
    kind: &'static str,
}

impl Columns {
    fn resolve(
        headers: &StringRecord,
        wanted: &[(&'static str, &[&str], bool)],
        kind: &'static str,
    ) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut index = BTreeMap::new();

        for (canon, alts) in wanted.iter().map(|(c, a, _)| (*c, *a)) {
            'outer: for alt in alts {
                let alt_n = normalize_header(alt);
                for (i, h) in normalized.iter().enumerate() {
                    if *h == alt_n {
                        index.insert(canon, i);
                        break 'outer;
                    }
                }
            }
        }

        let missing: Vec<&str> = wanted
            .iter()
            .filter(|(canon, _, required)| *required && !index.contains_key(canon))
            .map(|(canon, _, _)| *canon)
            .collect();
        if !missing.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!(
                    "{kind} catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        Ok(Self { index, kind })
    }

    fn get<'r>(&self, record: &'r StringRecord, field: &str) -> Option<&'r str> {
        self.index
            .get(field)
            .and_then(|&i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn text(&self, record: &StringRecord, field: &str, row: u64) -> Result<String> {
        self.get(record, field)
            .map(str::to_string)
            .ok_or_else(|| Error::CatalogValidation {
                message: format!("missing {field} for {} at row {row}", self.kind),
            })
    }

    fn number<T>(&self, record: &StringRecord, field: &str, row: u64, default: Option<T>) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(record, field) {
            Some(raw) => raw.parse::<T>().map_err(|e| Error::CatalogValidation {
                message: format!("invalid {field} for {} at row {row}: {e}", self.kind),
            }),
            None => default.ok_or_else(|| Error::CatalogValidation {
                message: format!("missing {field} for {} at row {row}", self.kind),
            }),
        }
    }

    fn flag(&self, record: &StringRecord, field: &str) -> bool {
        matches!(
            self.get(record, field).map(str::to_ascii_lowercase).as_deref(),
            Some("1" | "true" | "yes" | "y")
        )
    }

    fn tech(&self, record: &StringRecord, row: u64) -> Result<TechRecord> {
        Ok(TechRecord {
            tech_base: self
                .get(record, "tech_base")
                .map(str::parse::<TechBase>)
                .transpose()?
                .unwrap_or_default(),
            intro_year: self.number(record, "intro_year", row, Some(0))?,
            unofficial: self.flag(record, "unofficial"),
        })
    }
}

fn load_equipment<R: Read>(reader: R) -> Result<HashMap<String, EquipmentType>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|err| Error::CatalogValidation {
            message: format!("failed to read equipment catalog headers: {err}"),
        })?
        .clone();
    let cols = Columns::resolve(&headers, EQUIPMENT_COLUMNS, "equipment")?;

    let mut equipment = HashMap::new();
    for (offset, result) in csv_reader.records().enumerate() {
        // header is line 1
        let row = offset as u64 + 2;
        let record = result.map_err(|e| Error::CatalogValidation {
            message: e.to_string(),
        })?;

        let item = EquipmentType {
            id: cols.text(&record, "id", row)?,
            name: cols.text(&record, "name", row)?,
            kind: cols.text(&record, "kind", row)?.parse::<EquipmentKind>()?,
            tonnage: cols.number(&record, "tonnage", row, None)?,
            ammo_family: cols.get(&record, "ammo_family").map(str::to_ascii_lowercase),
            long_range: cols.number(&record, "long_range", row, Some(0))?,
            shots_per_ton: cols.number(&record, "shots_per_ton", row, Some(0))?,
            crew: cols.number(&record, "crew", row, Some(0))?,
            mass_driver: cols
                .get(&record, "mass_driver")
                .map(str::parse::<MassDriverClass>)
                .transpose()?,
            flags: EquipmentFlags::parse_list(cols.get(&record, "flags").unwrap_or(""))?,
            tech: cols.tech(&record, row)?,
        };
        item.validate()?;
        insert_unique(&mut equipment, item.id.clone(), item)?;
    }

    Ok(equipment)
}

fn load_armor<R: Read>(reader: R) -> Result<HashMap<String, ArmorType>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|err| Error::CatalogValidation {
            message: format!("failed to read armor catalog headers: {err}"),
        })?
        .clone();
    let cols = Columns::resolve(&headers, ARMOR_COLUMNS, "armor")?;

    let mut armor = HashMap::new();
    for (offset, result) in csv_reader.records().enumerate() {
        let row = offset as u64 + 2;
        let record = result.map_err(|e| Error::CatalogValidation {
            message: e.to_string(),
        })?;

        let points_per_ton = PointsPerTon {
            jump_ship: cols.number(&record, "ppt_jump_ship", row, None)?,
            war_ship: cols.number(&record, "ppt_war_ship", row, None)?,
            space_station: cols.number(&record, "ppt_space_station", row, None)?,
        };
        let clan_points_per_ton = match cols.get(&record, "clan_ppt_jump_ship") {
            Some(_) => Some(PointsPerTon {
                jump_ship: cols.number(&record, "clan_ppt_jump_ship", row, None)?,
                war_ship: cols.number(&record, "clan_ppt_war_ship", row, None)?,
                space_station: cols.number(&record, "clan_ppt_space_station", row, None)?,
            }),
            None => None,
        };

        let item = ArmorType {
            id: cols.text(&record, "id", row)?,
            name: cols.text(&record, "name", row)?,
            flags: EquipmentFlags::parse_list(cols.get(&record, "flags").unwrap_or(""))?,
            points_per_ton,
            clan_points_per_ton,
            tech: cols.tech(&record, row)?,
        };
        item.validate()?;
        insert_unique(&mut armor, item.id.clone(), item)?;
    }

    Ok(armor)
}
