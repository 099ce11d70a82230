//! The full set of derived budgets for a resolved vessel.

use serde::Serialize;
use tracing::debug;

use crate::rounding::ceil_half_ton;
use crate::vessel::Vessel;

use super::crew::{lifeboat_weight, minimum_base_crew, required_gunners};
use super::drive::{
    control_weight, engine_tonnage, free_heat_sinks, fuel_weight, heat_sink_weight,
    kf_drive_weight, lf_battery_weight, sail_weight,
};
use super::facilities::{
    carrying_space_weight, docking_hardpoint_weight, grav_deck_weight, max_bay_doors,
    max_docking_hardpoints, max_grav_deck_diameter, max_grav_decks, quarters_weight,
};
use super::fire_control::{fire_control_by_arc, fire_control_surcharge, ArcFireControl};
use super::loadout::{ammo_weight, equipment_crew, misc_weight, weapon_weight};
use super::structure::{armor_points_available, max_armor_points, max_armor_weight, structure_weight};

/// A line of the weight ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightItem {
    Structure,
    Engine,
    KfDrive,
    LfBattery,
    Sail,
    Controls,
    Fuel,
    HeatSinks,
    Armor,
    FireControl,
    CarryingSpace,
    DockingHardpoints,
    Quarters,
    GravDecks,
    LifeBoats,
    MiscEquipment,
    Weapons,
    Ammo,
}

impl WeightItem {
    /// Ledger order.
    pub const ALL: [WeightItem; 18] = [
        WeightItem::Structure,
        WeightItem::Engine,
        WeightItem::KfDrive,
        WeightItem::LfBattery,
        WeightItem::Sail,
        WeightItem::Controls,
        WeightItem::Fuel,
        WeightItem::HeatSinks,
        WeightItem::Armor,
        WeightItem::FireControl,
        WeightItem::CarryingSpace,
        WeightItem::DockingHardpoints,
        WeightItem::Quarters,
        WeightItem::GravDecks,
        WeightItem::LifeBoats,
        WeightItem::MiscEquipment,
        WeightItem::Weapons,
        WeightItem::Ammo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeightItem::Structure => "Structure",
            WeightItem::Engine => "Engine",
            WeightItem::KfDrive => "K/F Drive Core",
            WeightItem::LfBattery => "LF Battery",
            WeightItem::Sail => "Jump Sail",
            WeightItem::Controls => "Controls",
            WeightItem::Fuel => "Fuel",
            WeightItem::HeatSinks => "Heat Sinks",
            WeightItem::Armor => "Armor",
            WeightItem::FireControl => "Extra Fire Control",
            WeightItem::CarryingSpace => "Carrying Space",
            WeightItem::DockingHardpoints => "Docking Hard Points",
            WeightItem::Quarters => "Quarters",
            WeightItem::GravDecks => "Gravity Decks",
            WeightItem::LifeBoats => "Life Boats/Escape Pods",
            WeightItem::MiscEquipment => "Misc Equipment",
            WeightItem::Weapons => "Weapons",
            WeightItem::Ammo => "Ammunition",
        }
    }
}

/// One ledger row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub item: WeightItem,
    pub label: &'static str,
    pub tons: f64,
}

/// Subsystem weights, in tons.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Weights {
    pub structure: f64,
    pub engine: f64,
    pub kf_drive: f64,
    pub lf_battery: f64,
    pub sail: f64,
    pub controls: f64,
    pub fuel: f64,
    pub heat_sinks: f64,
    pub armor: f64,
    pub fire_control: f64,
    pub carrying_space: f64,
    pub docking_hardpoints: f64,
    pub quarters: f64,
    pub grav_decks: f64,
    pub life_boats: f64,
    pub misc_equipment: f64,
    pub weapons: f64,
    pub ammo: f64,
}

impl Weights {
    pub fn get(&self, item: WeightItem) -> f64 {
        match item {
            WeightItem::Structure => self.structure,
            WeightItem::Engine => self.engine,
            WeightItem::KfDrive => self.kf_drive,
            WeightItem::LfBattery => self.lf_battery,
            WeightItem::Sail => self.sail,
            WeightItem::Controls => self.controls,
            WeightItem::Fuel => self.fuel,
            WeightItem::HeatSinks => self.heat_sinks,
            WeightItem::Armor => self.armor,
            WeightItem::FireControl => self.fire_control,
            WeightItem::CarryingSpace => self.carrying_space,
            WeightItem::DockingHardpoints => self.docking_hardpoints,
            WeightItem::Quarters => self.quarters,
            WeightItem::GravDecks => self.grav_decks,
            WeightItem::LifeBoats => self.life_boats,
            WeightItem::MiscEquipment => self.misc_equipment,
            WeightItem::Weapons => self.weapons,
            WeightItem::Ammo => self.ammo,
        }
    }

    /// Sum of every ledger line, unrounded.
    pub fn sum(&self) -> f64 {
        WeightItem::ALL.iter().map(|&item| self.get(item)).sum()
    }
}

/// Every derived weight and limit for one vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSet {
    pub weights: Weights,
    /// Ledger total rounded up to the half ton.
    pub total_weight: f64,
    pub fire_control: Vec<ArcFireControl>,
    pub max_armor_weight: f64,
    pub max_armor_points: u32,
    /// Points bought by the armor tonnage actually allocated, plus free SI armor.
    pub armor_points_available: u32,
    pub free_heat_sinks: u32,
    pub minimum_base_crew: u32,
    pub required_gunners: u32,
    pub max_grav_decks: u32,
    pub max_grav_deck_diameter: u32,
    pub max_docking_hardpoints: u32,
    pub max_bay_doors: u32,
    pub min_tonnage: f64,
    pub weight_increment: f64,
}

impl AttributeSet {
    /// Compute every budget for `vessel`. Pure and infallible.
    pub fn compute(vessel: &Vessel<'_>) -> Self {
        let design = vessel.design;
        let hull = design.hull;
        let class = hull.class;
        let tonnage = design.tonnage;
        let si = design.structural_integrity;
        let points_per_ton = vessel
            .armor
            .map(|armor| armor.points_per_ton(class, design.armor.clan))
            .unwrap_or(0.0);

        let engine = engine_tonnage(hull, tonnage, design.safe_thrust, design.build_year);
        let free_heat_sinks = free_heat_sinks(hull.primitive, engine);
        let fire_control = fire_control_by_arc(vessel);

        let weights = Weights {
            structure: structure_weight(class, si, tonnage),
            engine,
            kf_drive: kf_drive_weight(design.drive_core, tonnage),
            lf_battery: lf_battery_weight(design.lithium_fusion_battery, tonnage),
            sail: sail_weight(hull, design.sail, tonnage, design.build_year),
            controls: control_weight(hull, tonnage, design.build_year),
            fuel: fuel_weight(design.fuel_tonnage),
            heat_sinks: heat_sink_weight(design.heat_sinks.count, free_heat_sinks),
            armor: design.armor.tonnage,
            fire_control: fire_control_surcharge(&fire_control),
            carrying_space: carrying_space_weight(&design.transport_bays),
            docking_hardpoints: docking_hardpoint_weight(design.docking_collars),
            quarters: quarters_weight(&design.transport_bays),
            grav_decks: grav_deck_weight(&design.grav_decks),
            life_boats: lifeboat_weight(design.lifeboats, design.escape_pods),
            misc_equipment: misc_weight(vessel),
            weapons: weapon_weight(vessel),
            ammo: ammo_weight(vessel),
        };
        let total_weight = ceil_half_ton(weights.sum());

        let attributes = Self {
            weights,
            total_weight,
            fire_control,
            max_armor_weight: max_armor_weight(class, si, tonnage),
            max_armor_points: max_armor_points(hull, si, tonnage, points_per_ton),
            armor_points_available: armor_points_available(hull, si, design.armor.tonnage, points_per_ton),
            free_heat_sinks,
            minimum_base_crew: minimum_base_crew(class, tonnage, equipment_crew(vessel)),
            required_gunners: required_gunners(vessel.weapons().map(|m| m.kind)),
            max_grav_decks: max_grav_decks(tonnage),
            max_grav_deck_diameter: max_grav_deck_diameter(class),
            max_docking_hardpoints: max_docking_hardpoints(tonnage, &design.transport_bays),
            max_bay_doors: max_bay_doors(tonnage),
            min_tonnage: design.drive_core.min_tonnage(),
            weight_increment: design.drive_core.weight_increment(),
        };

        debug!(
            design = %design.name,
            total_weight = attributes.total_weight,
            tonnage,
            "computed attribute set"
        );
        attributes
    }

    /// Ledger rows in display order.
    pub fn ledger(&self) -> Vec<LedgerEntry> {
        WeightItem::ALL
            .iter()
            .map(|&item| LedgerEntry {
                item,
                label: item.label(),
                tons: self.weights.get(item),
            })
            .collect()
    }

    /// Crew required to run the ship: base crew plus gunners.
    pub fn required_crew(&self) -> u32 {
        self.minimum_base_crew + self.required_gunners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{EquipmentMount, WeaponBay};
    use crate::hull::{Arc, HullClass};
    use crate::test_helpers;

    #[test]
    fn warship_budget() {
        let catalog = test_helpers::catalog();
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.structural_integrity = 100;
        design.armor.tonnage = 900.0;
        design.fuel_tonnage = 1000.0;
        design.sail = true;
        let vessel = Vessel::resolve(&design, &catalog).expect("resolve");
        let attrs = AttributeSet::compute(&vessel);

        assert_eq!(attrs.max_armor_weight, 1000.0);
        // 0.8 * 1000 + 60
        assert_eq!(attrs.max_armor_points, 860);
        // 0.8 * 900 + 60
        assert_eq!(attrs.armor_points_available, 780);
        assert_eq!(attrs.minimum_base_crew, 145);
        assert_eq!(attrs.required_gunners, 0);
        assert_eq!(attrs.weights.structure, 50_000.0);
        assert_eq!(attrs.weights.engine, 60_000.0);
        assert_eq!(attrs.weights.kf_drive, 226_250.0);
        assert_eq!(attrs.weights.controls, 1250.0);
        assert_eq!(attrs.weights.fuel, 1020.0);
        assert_eq!(attrs.weights.sail, 55.0);
        assert_eq!(attrs.weights.armor, 900.0);
        assert_eq!(attrs.total_weight, ceil_half_ton(attrs.weights.sum()));
        assert_eq!(attrs.ledger().len(), WeightItem::ALL.len());
        assert_eq!(attrs.ledger()[0].label, "Structure");
    }

    #[test]
    fn station_keeping_station() {
        let catalog = test_helpers::catalog();
        let design = test_helpers::design(HullClass::SpaceStation, 200_000.0);
        let vessel = Vessel::resolve(&design, &catalog).expect("resolve");
        let attrs = AttributeSet::compute(&vessel);

        assert_eq!(attrs.weights.engine, 2400.0);
        assert_eq!(attrs.weights.kf_drive, 0.0);
        assert_eq!(attrs.weights.controls, 200.0);
        assert_eq!(attrs.max_grav_deck_diameter, 1500);
        assert_eq!(attrs.max_docking_hardpoints, 4);
        assert_eq!(attrs.fire_control.len(), 6);
    }

    #[test]
    fn bay_weapons_count_for_gunners() {
        let catalog = test_helpers::catalog();
        let mut design = test_helpers::design(HullClass::WarShip, 500_000.0);
        design.equipment = vec![
            EquipmentMount::new("NL55", Arc::ForwardLeft),
            EquipmentMount::new("NL55", Arc::ForwardRight),
            EquipmentMount::new("NL55", Arc::Nose),
        ];
        design.weapon_bays = vec![WeaponBay {
            name: "Nose Lasers".to_string(),
            arc: Arc::Nose,
            weapons: (0..13)
                .map(|_| EquipmentMount::new("ERLargeLaser", Arc::Nose))
                .collect(),
            ammo: Vec::new(),
        }];
        let vessel = Vessel::resolve(&design, &catalog).expect("resolve");
        let attrs = AttributeSet::compute(&vessel);

        assert_eq!(attrs.required_gunners, 3 + 3);
        assert_eq!(attrs.required_crew(), 145 + 6);
    }
}
