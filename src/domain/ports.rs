use crate::domain::item::ItemCatalogEntry;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Source of catalog entries for scanned codes. Backed by a product
/// database client in production; `Catalog` is the in-memory implementation
/// used for seeds and tests. A miss is a normal outcome, not an error.
pub trait CatalogSource: Send + Sync {
    fn lookup(&self, code: &str) -> Option<Arc<ItemCatalogEntry>>;
}

/// Time source for status derivation. Injectable so tests are deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// In-memory catalog keyed by item identity.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, Arc<ItemCatalogEntry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ItemCatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.id.clone(), Arc::new(e)))
                .collect(),
        }
    }

    pub fn insert(&mut self, entry: ItemCatalogEntry) {
        self.entries.insert(entry.id.clone(), Arc::new(entry));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogSource for Catalog {
    fn lookup(&self, code: &str) -> Option<Arc<ItemCatalogEntry>> {
        self.entries.get(code).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::from_entries([
            ItemCatalogEntry::new("6378763232", "Butter"),
            ItemCatalogEntry::new("3563563563", "Milk"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("3563563563").unwrap().name, "Milk");
        assert!(catalog.lookup("0000000000").is_none());
    }

    #[test]
    fn test_insert_then_lookup() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.insert(ItemCatalogEntry::new("5844456884", "Salami"));
        assert_eq!(catalog.lookup("5844456884").unwrap().name, "Salami");
    }

    #[test]
    fn test_lookup_shares_entry() {
        let catalog = Catalog::from_entries([ItemCatalogEntry::new("6378763232", "Butter")]);
        let a = catalog.lookup("6378763232").unwrap();
        let b = catalog.lookup("6378763232").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
