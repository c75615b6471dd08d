//! Unit catalog
//!
//! Units are a closed set. Each variant carries its attributes through a
//! static table rather than runtime fields, so a `Unit` is `Copy` and can be
//! compared and hashed freely.

use std::fmt;
use serde::{Serialize, Deserialize};
use unitconv_core::Family;

/// Attributes of one catalog entry
#[derive(Debug, PartialEq)]
pub struct UnitInfo {
    pub family: Family,
    /// Multiplier to the family's base unit (meter, gram). 1.0 for temperatures.
    pub k: f64,
    pub singular: &'static str,
    pub plural: &'static str,
    /// Abbreviations and aliases, lowercase
    pub tokens: &'static [&'static str],
}

/// A known unit of measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl Unit {
    /// Every unit, in catalog order
    pub const ALL: [Unit; 16] = [
        Unit::Meter,
        Unit::Kilometer,
        Unit::Centimeter,
        Unit::Millimeter,
        Unit::Mile,
        Unit::Yard,
        Unit::Foot,
        Unit::Inch,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milligram,
        Unit::Pound,
        Unit::Ounce,
        Unit::Celsius,
        Unit::Kelvin,
        Unit::Fahrenheit,
    ];

    pub fn info(&self) -> &'static UnitInfo {
        match self {
            // Length, base unit meter
            Unit::Meter => &METER,
            Unit::Kilometer => &KILOMETER,
            Unit::Centimeter => &CENTIMETER,
            Unit::Millimeter => &MILLIMETER,
            Unit::Mile => &MILE,
            Unit::Yard => &YARD,
            Unit::Foot => &FOOT,
            Unit::Inch => &INCH,
            // Weight, base unit gram
            Unit::Gram => &GRAM,
            Unit::Kilogram => &KILOGRAM,
            Unit::Milligram => &MILLIGRAM,
            Unit::Pound => &POUND,
            Unit::Ounce => &OUNCE,
            // Temperature
            Unit::Celsius => &CELSIUS,
            Unit::Kelvin => &KELVIN,
            Unit::Fahrenheit => &FAHRENHEIT,
        }
    }

    pub fn family(&self) -> Family {
        self.info().family
    }

    /// Scale factor relative to the family's base unit
    pub fn k(&self) -> f64 {
        self.info().k
    }

    pub fn singular(&self) -> &'static str {
        self.info().singular
    }

    pub fn plural(&self) -> &'static str {
        self.info().plural
    }

    /// Display name for a magnitude: singular only for exactly 1.0
    pub fn label(&self, value: f64) -> &'static str {
        if value == 1.0 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Every input token this unit answers to: names plus abbreviations, lowercase
    pub fn input_tokens(&self) -> Vec<String> {
        let info = self.info();
        [info.singular, info.plural]
            .into_iter()
            .chain(info.tokens.iter().copied())
            .map(|t| t.to_lowercase())
            .collect()
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.family() == other.family()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular())
    }
}

const fn length(k: f64, singular: &'static str, plural: &'static str, tokens: &'static [&'static str]) -> UnitInfo {
    UnitInfo { family: Family::Length, k, singular, plural, tokens }
}

const fn weight(k: f64, singular: &'static str, plural: &'static str, tokens: &'static [&'static str]) -> UnitInfo {
    UnitInfo { family: Family::Weight, k, singular, plural, tokens }
}

const fn temperature(singular: &'static str, plural: &'static str, tokens: &'static [&'static str]) -> UnitInfo {
    UnitInfo { family: Family::Temperature, k: 1.0, singular, plural, tokens }
}

static METER: UnitInfo = length(1.0, "meter", "meters", &["m"]);
static KILOMETER: UnitInfo = length(1000.0, "kilometer", "kilometers", &["km"]);
static CENTIMETER: UnitInfo = length(0.01, "centimeter", "centimeters", &["cm"]);
static MILLIMETER: UnitInfo = length(0.001, "millimeter", "millimeters", &["mm"]);
static MILE: UnitInfo = length(1609.35, "mile", "miles", &["mi"]);
static YARD: UnitInfo = length(0.9144, "yard", "yards", &["yd"]);
static FOOT: UnitInfo = length(0.3048, "foot", "feet", &["ft"]);
static INCH: UnitInfo = length(0.0254, "inch", "inches", &["in"]);

static GRAM: UnitInfo = weight(1.0, "gram", "grams", &["g"]);
static KILOGRAM: UnitInfo = weight(1000.0, "kilogram", "kilograms", &["kg"]);
static MILLIGRAM: UnitInfo = weight(0.001, "milligram", "milligrams", &["mg"]);
static POUND: UnitInfo = weight(453.592, "pound", "pounds", &["lb"]);
static OUNCE: UnitInfo = weight(28.3495, "ounce", "ounces", &["oz"]);

static CELSIUS: UnitInfo = temperature("degree Celsius", "degrees Celsius", &["celsius", "dc", "c"]);
static KELVIN: UnitInfo = temperature("kelvin", "kelvins", &["k"]);
static FAHRENHEIT: UnitInfo = temperature("degree Fahrenheit", "degrees Fahrenheit", &["fahrenheit", "df", "f"]);
