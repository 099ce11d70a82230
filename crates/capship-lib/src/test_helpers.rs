// Test-only helpers for `capship-lib` unit tests
#![allow(dead_code)]
use crate::catalog::{ArmorType, Catalog, EquipmentFlags, EquipmentKind, EquipmentType, MassDriverClass, PointsPerTon};
use crate::calc;
use crate::design::{
    ArmorAllocation, BayKind, Crew, HeatSinkKind, HeatSinks, Overrides, TransportBay, UnitDesign,
};
use crate::hull::{DriveCore, Hull, HullClass};
use crate::tech::{TechBase, TechRecord};

fn record(id: &str, name: &str, kind: EquipmentKind, tonnage: f64, flags: EquipmentFlags) -> EquipmentType {
    EquipmentType {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        tonnage,
        ammo_family: None,
        long_range: 0,
        shots_per_ton: 0,
        crew: 0,
        mass_driver: None,
        flags,
        tech: TechRecord::default(),
    }
}

pub fn weapon(id: &str, name: &str, tonnage: f64, long_range: u32, flags: EquipmentFlags) -> EquipmentType {
    EquipmentType {
        long_range,
        ..record(id, name, EquipmentKind::Weapon, tonnage, flags | EquipmentFlags::AERO)
    }
}

pub fn ammo_weapon(id: &str, name: &str, tonnage: f64, family: &str, flags: EquipmentFlags) -> EquipmentType {
    EquipmentType {
        ammo_family: Some(family.to_string()),
        ..weapon(id, name, tonnage, 20, flags)
    }
}

pub fn ammo(id: &str, family: &str, shots_per_ton: u32) -> EquipmentType {
    EquipmentType {
        ammo_family: Some(family.to_string()),
        shots_per_ton,
        ..record(id, id, EquipmentKind::Ammo, 1.0, EquipmentFlags::empty())
    }
}

pub fn misc(id: &str, name: &str, tonnage: f64, crew: u32, flags: EquipmentFlags) -> EquipmentType {
    EquipmentType {
        crew,
        ..record(id, name, EquipmentKind::Misc, tonnage, flags)
    }
}

fn mass_driver(id: &str, name: &str, tonnage: f64, class: MassDriverClass) -> EquipmentType {
    EquipmentType {
        mass_driver: Some(class),
        ..weapon(id, name, tonnage, 30, EquipmentFlags::CAPITAL)
    }
}

fn all_hulls() -> EquipmentFlags {
    EquipmentFlags::JS_EQUIPMENT | EquipmentFlags::WS_EQUIPMENT | EquipmentFlags::SS_EQUIPMENT
}

pub fn capital_armor() -> ArmorType {
    ArmorType {
        id: "capital-standard".to_string(),
        name: "Standard Capital Armor".to_string(),
        flags: EquipmentFlags::JS_EQUIPMENT,
        points_per_ton: PointsPerTon {
            jump_ship: 1.0,
            war_ship: 0.8,
            space_station: 1.0,
        },
        clan_points_per_ton: None,
        tech: TechRecord::default(),
    }
}

pub fn catalog() -> Catalog {
    let equipment = vec![
        weapon("NL55", "Naval Laser 55", 1100.0, 25, EquipmentFlags::CAPITAL),
        ammo_weapon("NAC10", "Naval Autocannon 10", 2000.0, "nac10", EquipmentFlags::CAPITAL),
        ammo("NAC10Ammo", "nac10", 10),
        weapon("ERLargeLaser", "ER Large Laser", 5.0, 19, EquipmentFlags::empty()),
        weapon("MG", "Machine Gun", 0.5, 1, EquipmentFlags::empty()),
        ammo_weapon("AC5", "AC/5", 8.0, "ac", EquipmentFlags::empty()),
        ammo("AC5Ammo", "ac", 20),
        ammo_weapon("UAC5", "Ultra AC/5", 9.0, "ac-ultra", EquipmentFlags::ULTRA),
        ammo("UAC5Ammo", "ac-ultra", 20),
        ammo_weapon("RAC5", "Rotary AC/5", 10.0, "ac-rotary", EquipmentFlags::ROTARY),
        ammo("RAC5Ammo", "ac-rotary", 20),
        ammo_weapon("LRM20OS", "LRM 20 (OS)", 10.5, "lrm", EquipmentFlags::ONE_SHOT),
        ammo_weapon("ScreenLauncher", "Screen Launcher", 40.0, "screen", EquipmentFlags::SCREEN_LAUNCHER),
        mass_driver("LightMassDriver", "Light Mass Driver", 30_000.0, MassDriverClass::Light),
        mass_driver("HeavyMassDriver", "Heavy Mass Driver", 80_000.0, MassDriverClass::Heavy),
        EquipmentType {
            flags: EquipmentFlags::empty(),
            ..weapon("MechFlamer", "Flamer", 1.0, 3, EquipmentFlags::empty())
        },
        misc("NavalC3", "Naval C3", 0.0, 0, all_hulls() | EquipmentFlags::NAVAL_C3),
        misc("HPG", "HPG", 50.0, 10, all_hulls()),
        misc("StationCrane", "Station Crane", 100.0, 2, EquipmentFlags::SS_EQUIPMENT),
    ];
    let armor = vec![
        capital_armor(),
        ArmorType {
            id: "primitive-capital".to_string(),
            name: "Primitive Capital Armor".to_string(),
            flags: EquipmentFlags::JS_EQUIPMENT | EquipmentFlags::PRIMITIVE,
            points_per_ton: PointsPerTon {
                jump_ship: 0.66,
                war_ship: 0.528,
                space_station: 0.66,
            },
            clan_points_per_ton: None,
            tech: TechRecord::default(),
        },
        ArmorType {
            id: "mech-standard".to_string(),
            name: "Standard Mech Armor".to_string(),
            flags: EquipmentFlags::empty(),
            points_per_ton: PointsPerTon {
                jump_ship: 16.0,
                war_ship: 16.0,
                space_station: 16.0,
            },
            clan_points_per_ton: None,
            tech: TechRecord {
                tech_base: TechBase::All,
                intro_year: 2470,
                unofficial: false,
            },
        },
    ];
    Catalog::from_records(equipment, armor).expect("test catalog is valid")
}

/// An empty hull of `class` with enough crew, quarters and heat sinks to
/// pass every check on its own.
pub fn design(class: HullClass, tonnage: f64) -> UnitDesign {
    let (drive_core, safe_thrust, structural_integrity, crew) = match class {
        HullClass::WarShip => (DriveCore::Compact, 2, 20, 600),
        HullClass::JumpShip => (DriveCore::Standard, 0, 1, 60),
        HullClass::SpaceStation => (DriveCore::None, 0, 10, 600),
    };
    let hull = Hull::new(class);
    let engine = calc::engine_tonnage(hull, tonnage, safe_thrust, 3050);
    UnitDesign {
        name: format!("Test {class}"),
        tonnage,
        hull,
        drive_core,
        safe_thrust,
        build_year: 3050,
        structural_integrity,
        fuel_tonnage: 0.0,
        sail: false,
        lithium_fusion_battery: false,
        armor: ArmorAllocation {
            armor_type: Some("capital-standard".to_string()),
            ..ArmorAllocation::default()
        },
        heat_sinks: HeatSinks {
            count: calc::free_heat_sinks(false, engine),
            kind: HeatSinkKind::Double,
        },
        crew: Crew {
            officers: crew / 6,
            enlisted: crew - crew / 6,
            ..Crew::default()
        },
        lifeboats: 0,
        escape_pods: 0,
        equipment: Vec::new(),
        weapon_bays: Vec::new(),
        transport_bays: vec![TransportBay {
            kind: BayKind::CrewQuarters,
            capacity: f64::from(crew),
            doors: 0,
            facing: None,
            personnel: 0,
        }],
        docking_collars: 0,
        grav_decks: Vec::new(),
        overrides: Overrides::default(),
    }
}
