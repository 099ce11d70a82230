//! A design bound to its reference records.
//!
//! Resolution is the only place structural errors arise: unknown equipment,
//! unknown armor, or a primitive hull without primitive armor in the catalog.
//! Once a [`Vessel`] exists every calculator and check is infallible.

use tracing::debug;

use crate::catalog::{ArmorType, EquipmentType, ReferenceCatalog};
use crate::design::{EquipmentMount, UnitDesign, WeaponBay};
use crate::error::{Error, Result};
use crate::hull::{Arc, HullClass};

/// An equipment mount paired with its catalog record.
#[derive(Debug, Clone, Copy)]
pub struct Mounted<'a> {
    pub mount: &'a EquipmentMount,
    pub kind: &'a EquipmentType,
    /// Effective arc: the bay arc for bay contents, otherwise the mount arc.
    pub arc: Option<Arc>,
    /// Index of the weapon bay holding the mount, if any.
    pub bay: Option<usize>,
}

impl<'a> Mounted<'a> {
    /// Mount tonnage, falling back to the catalog value.
    pub fn tonnage(&self) -> f64 {
        self.mount.tonnage.unwrap_or(self.kind.tonnage)
    }

    pub fn in_bay(&self) -> bool {
        self.bay.is_some()
    }

    pub fn name(&self) -> &'a str {
        &self.kind.name
    }
}

/// Weapon bay with resolved contents.
#[derive(Debug, Clone)]
pub struct ResolvedBay<'a> {
    pub bay: &'a WeaponBay,
    pub weapons: Vec<Mounted<'a>>,
    pub ammo: Vec<Mounted<'a>>,
}

/// Design plus resolved references, ready for calculation and validation.
#[derive(Debug, Clone)]
pub struct Vessel<'a> {
    pub design: &'a UnitDesign,
    /// Armor fitted, or `None` when the design declares no armor type.
    pub armor: Option<&'a ArmorType>,
    /// Standalone equipment in declaration order.
    pub equipment: Vec<Mounted<'a>>,
    pub bays: Vec<ResolvedBay<'a>>,
}

impl<'a> Vessel<'a> {
    /// Validate the design and bind every reference against `catalog`.
    pub fn resolve<C>(design: &'a UnitDesign, catalog: &'a C) -> Result<Self>
    where
        C: ReferenceCatalog + ?Sized,
    {
        design.validate()?;

        let armor = if design.hull.primitive {
            Some(catalog.primitive_armor()?)
        } else {
            match &design.armor.armor_type {
                Some(id) => Some(
                    catalog
                        .armor_type(id)
                        .ok_or_else(|| Error::UnknownArmorType { id: id.clone() })?,
                ),
                None => None,
            }
        };

        let lookup = move |mount: &'a EquipmentMount, location: Option<&str>| {
            catalog
                .lookup_equipment(&mount.equipment)
                .ok_or_else(|| Error::UnknownEquipment {
                    id: mount.equipment.clone(),
                    location: location.map(str::to_string),
                })
        };

        let equipment = design
            .equipment
            .iter()
            .map(|mount| -> Result<Mounted<'a>> {
                let kind = lookup(mount, None)?;
                if kind.is_weapon() && mount.arc.is_none() {
                    return Err(Error::DesignValidation {
                        message: format!("{} must be placed in a firing arc", kind.name),
                    });
                }
                Ok(Mounted {
                    mount,
                    kind,
                    arc: mount.arc,
                    bay: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut bays = Vec::with_capacity(design.weapon_bays.len());
        for (index, bay) in design.weapon_bays.iter().enumerate() {
            let resolve_all = |mounts: &'a [EquipmentMount]| {
                mounts
                    .iter()
                    .map(|mount| -> Result<Mounted<'a>> {
                        Ok(Mounted {
                            mount,
                            kind: lookup(mount, Some(bay.name.as_str()))?,
                            arc: Some(bay.arc),
                            bay: Some(index),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            };
            bays.push(ResolvedBay {
                bay,
                weapons: resolve_all(&bay.weapons)?,
                ammo: resolve_all(&bay.ammo)?,
            });
        }

        debug!(
            design = %design.name,
            equipment = equipment.len(),
            bays = bays.len(),
            "resolved design references"
        );

        Ok(Self {
            design,
            armor,
            equipment,
            bays,
        })
    }

    pub fn class(&self) -> HullClass {
        self.design.hull.class
    }

    pub fn is_primitive(&self) -> bool {
        self.design.hull.primitive
    }

    pub fn tonnage(&self) -> f64 {
        self.design.tonnage
    }

    /// Standalone equipment followed by every bay's weapons and ammo.
    pub fn all_mounted(&self) -> impl Iterator<Item = &Mounted<'a>> {
        self.equipment.iter().chain(
            self.bays
                .iter()
                .flat_map(|bay| bay.weapons.iter().chain(bay.ammo.iter())),
        )
    }

    /// Every weapon, standalone or inside a bay.
    pub fn weapons(&self) -> impl Iterator<Item = &Mounted<'a>> {
        self.all_mounted().filter(|m| m.kind.is_weapon())
    }

    /// Standalone misc equipment.
    pub fn misc(&self) -> impl Iterator<Item = &Mounted<'a>> {
        self.equipment.iter().filter(|m| m.kind.is_misc())
    }

    /// Whether a working item carrying `flag` is installed.
    pub fn has_working_misc(&self, flag: crate::catalog::EquipmentFlags) -> bool {
        self.misc().any(|m| !m.mount.disabled && m.kind.has_flag(flag))
    }
}
