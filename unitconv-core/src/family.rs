//! Measurement families
//!
//! Every unit belongs to exactly one family, and conversions are only
//! defined between units of the same family.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The kind of physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Base unit: meter
    Length,
    /// Base unit: gram
    Weight,
    /// No base unit, converted through fixed affine pairs
    Temperature,
}

impl Family {
    /// All families, in catalog order
    pub const ALL: [Family; 3] = [Family::Length, Family::Weight, Family::Temperature];

    /// Name used in messages ("Length", "Weight", "Temperature")
    pub fn name(&self) -> &'static str {
        match self {
            Family::Length => "Length",
            Family::Weight => "Weight",
            Family::Temperature => "Temperature",
        }
    }

    /// Physical lengths and weights can't be negative; temperatures can.
    pub fn is_non_negative(&self) -> bool {
        matches!(self, Family::Length | Family::Weight)
    }

    /// Whether values convert through a linear scale factor to a base unit
    pub fn is_linear(&self) -> bool {
        matches!(self, Family::Length | Family::Weight)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
