//! Capital ship verifier CLI library.
//!
//! Catalog path resolution and output formatting shared by the subcommands.

pub mod output;
pub mod paths;
