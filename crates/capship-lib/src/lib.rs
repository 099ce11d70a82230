//! Capital ship construction rules.
//!
//! This crate derives the weight budgets and limits of JumpShip, WarShip and
//! space station designs and checks them against the construction rules. The
//! pipeline is load a [`UnitDesign`], bind it to a [`ReferenceCatalog`] with
//! [`Vessel::resolve`], compute its [`AttributeSet`], run [`verify`] and hand
//! the [`ValidationResult`] to a [`VerificationReport`]. Front-ends should only
//! depend on the items exported here.

pub mod calc;
pub mod catalog;
pub mod design;
pub mod error;
pub mod hull;
pub mod report;
pub mod rounding;
pub mod tech;
pub mod verifier;
pub mod vessel;

#[cfg(test)]
mod test_helpers;

pub use calc::{AttributeSet, LedgerEntry, WeightItem};
pub use catalog::{ArmorType, Catalog, EquipmentFlags, EquipmentType, ReferenceCatalog};
pub use design::UnitDesign;
pub use error::{Error, Result};
pub use hull::{Arc, DriveCore, Hull, HullClass};
pub use report::VerificationReport;
pub use tech::{IntroductionDateOracle, PermissiveOracle, TechBase, TechContext, TechOracle};
pub use verifier::{verify, CheckKind, CheckOutcome, ValidationResult, VerifierOptions};
pub use vessel::Vessel;
