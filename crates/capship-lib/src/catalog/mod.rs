//! Reference catalog of equipment and armor records.
//!
//! - [`equipment`] - equipment records and rule flags
//! - [`armor`] - capital armor records
//! - [`loader`] - CSV-backed [`Catalog`]
//!
//! The verifier depends only on the [`ReferenceCatalog`] trait so that callers
//! can plug in their own data source.

pub mod armor;
pub mod equipment;
pub mod loader;

pub use armor::{ArmorType, PointsPerTon};
pub use equipment::{EquipmentFlags, EquipmentKind, EquipmentType, MassDriverClass};
pub use loader::Catalog;

use crate::error::{Error, Result};
use crate::tech::{TechContext, TechOracle};

/// Read-only lookup of reference records.
pub trait ReferenceCatalog: Send + Sync {
    /// Find an equipment record by id (case-insensitive).
    fn lookup_equipment(&self, id: &str) -> Option<&EquipmentType>;

    /// Find an armor record by id (case-insensitive).
    fn armor_type(&self, id: &str) -> Option<&ArmorType>;

    /// Every armor record, in a stable order.
    fn armor_types(&self) -> Vec<&ArmorType>;

    /// The armor all primitive hulls are built with.
    fn primitive_armor(&self) -> Result<&ArmorType> {
        self.armor_types()
            .into_iter()
            .find(|armor| armor.is_primitive())
            .ok_or(Error::MissingPrimitiveArmor)
    }
}

/// Armor types a hull may legally mount under the given tech constraints.
///
/// Primitive hulls are restricted to primitive armor; other hulls may use any
/// capital armor the oracle allows.
pub fn legal_armors_for<'c, C>(
    catalog: &'c C,
    oracle: &dyn TechOracle,
    context: &TechContext,
    primitive: bool,
) -> Result<Vec<&'c ArmorType>>
where
    C: ReferenceCatalog + ?Sized,
{
    if primitive {
        return Ok(vec![catalog.primitive_armor()?]);
    }
    Ok(catalog
        .armor_types()
        .into_iter()
        .filter(|armor| armor.is_capital() && oracle.is_legal(&armor.tech, context))
        .collect())
}
