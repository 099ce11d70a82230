//! Derived attribute calculator.
//!
//! Pure functions from a resolved [`Vessel`](crate::vessel::Vessel) to the
//! weights and limits the construction rules impose. Each formula names its
//! rounding explicitly through [`crate::rounding`].
//!
//! - [`structure`] - structure, armor tonnage and armor points
//! - [`drive`] - engine, K-F drive, controls, fuel, sail and heat sinks
//! - [`fire_control`] - per-arc fire control surcharge
//! - [`crew`] - crew, gunners, officers and quarters
//! - [`facilities`] - gravity decks, docking hardpoints and bays
//! - [`loadout`] - weapons, equipment and ammunition
//! - [`attributes`] - the assembled [`AttributeSet`]

pub mod attributes;
pub mod crew;
pub mod drive;
pub mod facilities;
pub mod fire_control;
pub mod loadout;
pub mod structure;
pub mod tables;

pub use attributes::{AttributeSet, LedgerEntry, WeightItem, Weights};
pub use crew::{lifeboat_weight, minimum_base_crew, quarters_capacity, required_gunners, required_officers};
pub use drive::{
    control_weight, engine_tonnage, free_heat_sinks, fuel_weight, heat_sink_weight,
    kf_drive_weight, lf_battery_weight, sail_weight,
};
pub use facilities::{
    carrying_space_weight, docking_hardpoint_weight, grav_deck_weight, max_bay_doors,
    max_docking_hardpoints, max_grav_deck_diameter, max_grav_decks, quarters_weight,
};
pub use fire_control::{arc_surcharge, fire_control_by_arc, fire_control_surcharge, ArcFireControl};
pub use loadout::{ammo_weight, equipment_crew, misc_weight, weapon_weight};
pub use structure::{
    armor_points_available, free_si_armor, max_armor_points, max_armor_weight, structure_weight,
};
