use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable description of a product. The identity is globally unique,
/// typically a barcode. Entries are created once (catalog lookup or seed
/// table) and shared by reference afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemCatalogEntry {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub nutrition: Option<Nutrition>,
    /// Side table for attributes the fixed fields don't anticipate.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

impl ItemCatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: None,
            nutrition: None,
            extra: HashMap::new(),
        }
    }
}

/// Per-100g nutritional values, as reported by product databases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Nutrition {
    pub energy_kcal: Option<f64>,
    pub proteins_g: Option<f64>,
    pub carbohydrates_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub salt_g: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpirySource {
    Scanned,
    Estimated,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expiry {
    pub source: ExpirySource,
    pub date: DateTime<Utc>,
}

/// A physical instance of an item sitting in a tray slot. Identity comes
/// from the catalog entry it was scanned as, or is locally generated when
/// no catalog match exists. An item with no expiry record is always safe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredItem {
    pub id: String,
    pub name: String,
    /// Positive weight; the unit (grams vs kilograms) is a configuration
    /// concern of the caller, not enforced here.
    pub weight: f64,
    pub expiry: Option<Expiry>,
}

impl StoredItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
        expiry: Option<Expiry>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            expiry,
        }
    }

    /// Build an instance of a catalog entry, inheriting its identity and name.
    pub fn of_catalog_entry(entry: &ItemCatalogEntry, weight: f64, expiry: Option<Expiry>) -> Self {
        Self::new(entry.id.clone(), entry.name.clone(), weight, expiry)
    }
}
