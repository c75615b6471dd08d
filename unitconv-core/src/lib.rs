//! Unitconv Core - Shared types
//!
//! This crate provides the types shared by the converter crates:
//! - `Family`: the measurement family a unit belongs to
//! - `ConvertError`: request-local parse and conversion errors
//! - `ErrorReport`: structured errors for machine-readable output

mod family;
mod error;

pub use family::Family;
pub use error::{ConvertError, RegistryError, ErrorReport, codes, UNKNOWN_UNIT};

