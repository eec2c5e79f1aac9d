use crate::domain::item::ItemCatalogEntry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What a listing asks for: a concrete catalog item, or a free-text generic
/// label ("Butter") to be matched through the alias mechanism, never by
/// display-name comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ListingTarget {
    Concrete(Arc<ItemCatalogEntry>),
    Generic(String),
}

impl ListingTarget {
    /// The identity this listing is counted under: the catalog id for a
    /// concrete item, the label itself for a generic.
    pub fn identity(&self) -> &str {
        match self {
            ListingTarget::Concrete(entry) => &entry.id,
            ListingTarget::Generic(label) => label,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ListingTarget::Concrete(entry) => &entry.name,
            ListingTarget::Generic(label) => label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListing {
    pub target: ListingTarget,
    /// Required units, at least 1 (seed validation enforces this; a zero
    /// requirement is vacuously satisfied by the tracker anyway).
    pub amount: u32,
}

/// One recipient's ordered list of requested items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingList {
    pub owner: String,
    pub listings: Vec<ShoppingListing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_identity() {
        let butter = Arc::new(ItemCatalogEntry::new("6378763232", "Butter"));
        let concrete = ListingTarget::Concrete(butter);
        assert_eq!(concrete.identity(), "6378763232");
        assert_eq!(concrete.display_name(), "Butter");

        let generic = ListingTarget::Generic("Kaviar".to_string());
        assert_eq!(generic.identity(), "Kaviar");
        assert_eq!(generic.display_name(), "Kaviar");
    }

    #[test]
    fn test_shopping_list_serde_round_trip() {
        // The concrete target is shared behind an Arc; (de)serialization
        // must work through it.
        let list = ShoppingList {
            owner: "recipient-1".to_string(),
            listings: vec![
                ShoppingListing {
                    target: ListingTarget::Concrete(Arc::new(ItemCatalogEntry::new(
                        "6378763232",
                        "Butter",
                    ))),
                    amount: 2,
                },
                ShoppingListing {
                    target: ListingTarget::Generic("Kaviar".to_string()),
                    amount: 1,
                },
            ],
        };

        let json = serde_json::to_string(&list).unwrap();
        let back: ShoppingList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
