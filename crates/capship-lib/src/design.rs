//! Immutable design snapshot handed to the verifier by a loader.
//!
//! Designs are plain serde structs so a loader can build them from JSON. The
//! verifier never mutates a design; every derived value is recomputed per call.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hull::{Arc, DriveCore, Hull};

/// A fully specified capital ship design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDesign {
    pub name: String,
    pub tonnage: f64,
    pub hull: Hull,
    #[serde(default)]
    pub drive_core: DriveCore,
    /// Original safe thrust; zero means a station-keeping drive.
    #[serde(default)]
    pub safe_thrust: u32,
    /// Year the chassis was originally built.
    pub build_year: u32,
    pub structural_integrity: u32,
    #[serde(default)]
    pub fuel_tonnage: f64,
    #[serde(default)]
    pub sail: bool,
    #[serde(default)]
    pub lithium_fusion_battery: bool,
    #[serde(default)]
    pub armor: ArmorAllocation,
    pub heat_sinks: HeatSinks,
    #[serde(default)]
    pub crew: Crew,
    #[serde(default)]
    pub lifeboats: u32,
    #[serde(default)]
    pub escape_pods: u32,
    /// Weapons, misc equipment and ammo outside weapon bays.
    #[serde(default)]
    pub equipment: Vec<EquipmentMount>,
    #[serde(default)]
    pub weapon_bays: Vec<WeaponBay>,
    #[serde(default)]
    pub transport_bays: Vec<TransportBay>,
    #[serde(default)]
    pub docking_collars: u32,
    /// Diameter in meters of each gravity deck.
    #[serde(default)]
    pub grav_decks: Vec<u32>,
    #[serde(default)]
    pub overrides: Overrides,
}

impl UnitDesign {
    /// Load a design from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        serde_json::from_reader(file).map_err(|source| Error::DesignParse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Load a design from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|source| Error::DesignParse { path: None, source })
    }

    /// Check that the snapshot is well formed.
    ///
    /// These are broken preconditions rather than rule violations, so they are
    /// returned as errors instead of diagnostics.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::DesignValidation { message });

        if self.name.trim().is_empty() {
            return invalid("design name must not be empty".to_string());
        }
        if !self.tonnage.is_finite() || self.tonnage <= 0.0 {
            return invalid(format!("tonnage must be finite and positive, got {}", self.tonnage));
        }
        if self.structural_integrity == 0 {
            return invalid("structural integrity must be positive".to_string());
        }
        let weights = [
            (self.fuel_tonnage, "fuel_tonnage"),
            (self.armor.tonnage, "armor.tonnage"),
        ];
        for (value, field) in weights {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{field} must be finite and non-negative"));
            }
        }

        let arcs = self.hull.class.arcs();
        let check_arc = |arc: Arc, what: &str| -> Result<()> {
            if arcs.contains(&arc) {
                Ok(())
            } else {
                invalid(format!("{what} is placed in {arc}, which a {} does not have", self.hull.class))
            }
        };

        for facing in self.armor.points.keys() {
            if !facing.is_armor_facing() {
                return invalid(format!("armor cannot be allocated to {facing}"));
            }
        }
        for mount in self.all_mounts() {
            if let Some(tonnage) = mount.tonnage {
                if !tonnage.is_finite() || tonnage < 0.0 {
                    return invalid(format!("tonnage override for {} must be finite and non-negative", mount.equipment));
                }
            }
        }
        for mount in &self.equipment {
            if let Some(arc) = mount.arc {
                check_arc(arc, &mount.equipment)?;
            }
        }
        for bay in &self.weapon_bays {
            check_arc(bay.arc, &bay.name)?;
        }
        for bay in &self.transport_bays {
            if !bay.capacity.is_finite() || bay.capacity < 0.0 {
                return invalid(format!("capacity of {} bay must be finite and non-negative", bay.kind));
            }
        }

        Ok(())
    }

    /// Standalone mounts followed by every mount inside weapon bays.
    pub fn all_mounts(&self) -> impl Iterator<Item = &EquipmentMount> {
        self.equipment.iter().chain(
            self.weapon_bays
                .iter()
                .flat_map(|bay| bay.weapons.iter().chain(bay.ammo.iter())),
        )
    }

    /// Personnel assigned to transport bays rather than ship operations.
    pub fn bay_personnel(&self) -> u32 {
        self.transport_bays
            .iter()
            .fold(0, |total: u32, bay| total.saturating_add(bay.personnel))
    }
}

/// Armor purchase and placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArmorAllocation {
    /// Catalog id of the armor; `None` for unarmored designs or primitive hulls.
    #[serde(default)]
    pub armor_type: Option<String>,
    /// Clan-built armor.
    #[serde(default)]
    pub clan: bool,
    /// Armor tonnage purchased.
    #[serde(default)]
    pub tonnage: f64,
    /// Armor points placed on each facing.
    #[serde(default)]
    pub points: BTreeMap<Arc, u32>,
}

impl ArmorAllocation {
    pub fn total_points(&self) -> u32 {
        self.points.values().sum()
    }
}

/// Heat sink type as declared by the design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatSinkKind {
    Single,
    Double,
    /// Any value not recognised by the construction rules.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatSinks {
    pub count: u32,
    pub kind: HeatSinkKind,
}

/// Personnel carried aboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Crew {
    pub officers: u32,
    /// Enlisted crew, including personnel assigned to bays.
    pub enlisted: u32,
    pub passengers: u32,
    pub marines: u32,
    pub battle_armor: u32,
}

impl Crew {
    pub fn total(&self) -> u32 {
        self.officers.saturating_add(self.enlisted)
    }
}

/// An equipment item placed on the ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentMount {
    /// Catalog id.
    pub equipment: String,
    /// Firing arc; ignored inside weapon bays. Required for standalone weapons,
    /// optional for misc equipment and ammo.
    #[serde(default)]
    pub arc: Option<Arc>,
    /// Tonnage for variable-weight items; defaults to the catalog value.
    #[serde(default)]
    pub tonnage: Option<f64>,
    /// Shots of ammunition loaded.
    #[serde(default)]
    pub shots: u32,
    /// Destroyed or switched off.
    #[serde(default)]
    pub disabled: bool,
}

impl EquipmentMount {
    pub fn new(equipment: impl Into<String>, arc: Arc) -> Self {
        Self {
            equipment: equipment.into(),
            arc: Some(arc),
            tonnage: None,
            shots: 0,
            disabled: false,
        }
    }

    pub fn ammo(equipment: impl Into<String>, arc: Arc, shots: u32) -> Self {
        Self {
            shots,
            ..Self::new(equipment, arc)
        }
    }
}

/// Weapons sharing a firing arc, fire control and ammunition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponBay {
    pub name: String,
    pub arc: Arc,
    #[serde(default)]
    pub weapons: Vec<EquipmentMount>,
    #[serde(default)]
    pub ammo: Vec<EquipmentMount>,
}

/// Transport and facility bays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BayKind {
    Cargo,
    Infantry,
    BattleArmor,
    Mech,
    Vehicle,
    Fighter,
    SmallCraft,
    DropShuttle,
    NavalRepair,
    NavalRepairPressurized,
    CrewQuarters,
    OfficerQuarters,
    FirstClassQuarters,
    SecondClassQuarters,
    SteerageQuarters,
}

impl BayKind {
    pub fn label(self) -> &'static str {
        match self {
            BayKind::Cargo => "Cargo",
            BayKind::Infantry => "Infantry",
            BayKind::BattleArmor => "Battle Armor",
            BayKind::Mech => "Mech",
            BayKind::Vehicle => "Vehicle",
            BayKind::Fighter => "Fighter",
            BayKind::SmallCraft => "Small Craft",
            BayKind::DropShuttle => "Drop Shuttle Bay",
            BayKind::NavalRepair => "Naval Repair Facility",
            BayKind::NavalRepairPressurized => "Pressurized Naval Repair Facility",
            BayKind::CrewQuarters => "Crew Quarters",
            BayKind::OfficerQuarters => "Officer Quarters",
            BayKind::FirstClassQuarters => "First Class Quarters",
            BayKind::SecondClassQuarters => "Second Class Quarters",
            BayKind::SteerageQuarters => "Steerage Quarters",
        }
    }

    /// Tons per unit of capacity.
    pub fn weight_per_unit(self) -> f64 {
        match self {
            BayKind::Cargo => 1.0,
            BayKind::Infantry => 5.0,
            BayKind::BattleArmor => 10.0,
            BayKind::Mech => 150.0,
            BayKind::Vehicle => 100.0,
            BayKind::Fighter => 150.0,
            BayKind::SmallCraft => 200.0,
            BayKind::DropShuttle => 11_000.0,
            BayKind::NavalRepair => 0.025,
            BayKind::NavalRepairPressurized => 0.075,
            BayKind::CrewQuarters => 7.0,
            BayKind::OfficerQuarters => 10.0,
            BayKind::FirstClassQuarters => 10.0,
            BayKind::SecondClassQuarters => 7.0,
            BayKind::SteerageQuarters => 5.0,
        }
    }

    /// Docking hardpoints consumed by the bay.
    pub fn hardpoint_cost(self) -> u32 {
        match self {
            BayKind::DropShuttle | BayKind::NavalRepair | BayKind::NavalRepairPressurized => 2,
            _ => 0,
        }
    }

    pub fn is_repair_facility(self) -> bool {
        matches!(self, BayKind::NavalRepair | BayKind::NavalRepairPressurized)
    }

    pub fn is_quarters(self) -> bool {
        matches!(
            self,
            BayKind::CrewQuarters
                | BayKind::OfficerQuarters
                | BayKind::FirstClassQuarters
                | BayKind::SecondClassQuarters
                | BayKind::SteerageQuarters
        )
    }

    /// Cargo, infantry and quarters may be built without bay doors.
    pub fn requires_door(self) -> bool {
        !matches!(self, BayKind::Cargo | BayKind::Infantry) && !self.is_quarters()
    }
}

impl std::fmt::Display for BayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportBay {
    pub kind: BayKind,
    /// Units, tons, people or repairable tons depending on the kind.
    pub capacity: f64,
    #[serde(default)]
    pub doors: u32,
    /// Armor facing the bay opens onto.
    #[serde(default)]
    pub facing: Option<Arc>,
    /// Crew permanently assigned to the bay.
    #[serde(default)]
    pub personnel: u32,
}

impl TransportBay {
    pub fn weight(&self) -> f64 {
        self.capacity * self.kind.weight_per_unit()
    }
}

/// Design-level escape hatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Skip the weight budget check.
    pub allow_overweight: bool,
    /// Published design accepted as legal despite failing checks.
    pub canon_invalid_build: bool,
}
