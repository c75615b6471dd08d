//! Unit registry - case-insensitive token lookup over the unit catalog

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;
use unitconv_core::{Family, RegistryError};
use crate::Unit;

/// Global unit registry built from the standard catalog
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| {
    UnitRegistry::new().expect("standard unit catalog has conflicting tokens")
});

/// Registry mapping every recognized input token to its unit
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: Vec<Unit>,
    tokens: HashMap<String, Unit>,
}

impl UnitRegistry {
    /// Build the registry over the full catalog
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_units(&Unit::ALL)
    }

    /// Build a registry over a subset of the catalog.
    ///
    /// Each unit's singular name, plural name and abbreviations are flattened
    /// into one lowercase token map. Fails if two units claim the same token.
    pub fn from_units(units: &[Unit]) -> Result<Self, RegistryError> {
        let mut catalog: Vec<Unit> = Vec::with_capacity(units.len());
        for &unit in units {
            if !catalog.contains(&unit) {
                catalog.push(unit);
            }
        }
        let entries = catalog.iter()
            .flat_map(|&unit| unit.input_tokens().into_iter().map(move |token| (token, unit)));
        let tokens = index_tokens(entries)?;
        trace!(units = catalog.len(), tokens = tokens.len(), "unit registry built");
        Ok(UnitRegistry { units: catalog, tokens })
    }

    /// Get a unit by name, plural or abbreviation (case-insensitive)
    pub fn lookup(&self, token: &str) -> Option<Unit> {
        if let Some(unit) = self.tokens.get(token) {
            return Some(*unit);
        }
        self.tokens.get(&token.to_lowercase()).copied()
    }

    /// Get all units in a family, in catalog order
    pub fn by_family(&self, family: Family) -> Vec<Unit> {
        self.units.iter()
            .copied()
            .filter(|u| u.family() == family)
            .collect()
    }

    /// Get all recognized tokens, sorted
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.tokens.keys().map(|s| s.as_str()).collect();
        tokens.sort_unstable();
        tokens
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Build the token map, failing on the first token claimed by two different units.
/// The same (token, unit) pair may appear more than once.
fn index_tokens<I>(entries: I) -> Result<HashMap<String, Unit>, RegistryError>
where
    I: IntoIterator<Item = (String, Unit)>,
{
    let mut tokens: HashMap<String, Unit> = HashMap::new();
    for (token, unit) in entries {
        let token = token.to_lowercase();
        match tokens.get(&token) {
            Some(existing) if *existing == unit => {}
            Some(existing) => {
                return Err(RegistryError::DuplicateToken {
                    first: existing.singular().to_string(),
                    second: unit.singular().to_string(),
                    token,
                });
            }
            None => {
                tokens.insert(token, unit);
            }
        }
    }
    Ok(tokens)
}
