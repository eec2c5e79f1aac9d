use crate::domain::item::{Expiry, ExpirySource, ItemCatalogEntry, Nutrition, StoredItem};
use crate::domain::ports::{Catalog, CatalogSource};
use crate::domain::shopping::{ListingTarget, ShoppingList, ShoppingListing};
use crate::domain::tray::{SlotType, Tray, TraySize, TraySlot};
use crate::utils::error::{Result, TrayError};
use crate::utils::validation::{
    validate_minimum_amount, validate_non_empty_string, validate_positive_weight, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Seed file describing a packing session: the item catalog, the installed
/// trays with their current contents, and the recipients' shopping lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub catalog: Vec<CatalogEntryConfig>,
    #[serde(default)]
    pub trays: Vec<TrayConfig>,
    #[serde(default)]
    pub shopping_lists: Vec<ShoppingListConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntryConfig {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayConfig {
    pub id: String,
    /// "3x3", "4x4", "5x5" or "vegetables5x5".
    pub size: String,
    /// Recipient this tray is being packed for, if assigned.
    pub recipient: Option<String>,
    #[serde(default)]
    pub contents: Vec<TrayContentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayContentConfig {
    pub slot: usize,
    /// Catalog id of the item in this slot. Name and weight may be omitted
    /// when the catalog resolves them.
    pub item: String,
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub expiry: Option<DateTime<Utc>>,
    /// Whether the expiry was scanned off the package or estimated.
    #[serde(default)]
    pub expiry_estimated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListConfig {
    pub owner: String,
    pub listings: Vec<ListingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Catalog id for a concrete listing. Exactly one of `item` / `generic`.
    pub item: Option<String>,
    /// Free-text label for a generic listing.
    pub generic: Option<String>,
    pub amount: u32,
}

impl SeedConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SeedConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_str_content(content: &str) -> Result<Self> {
        let config: SeedConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn build_catalog(&self) -> Catalog {
        Catalog::from_entries(self.catalog.iter().map(|e| ItemCatalogEntry {
            id: e.id.clone(),
            name: e.name.clone(),
            brand: e.brand.clone(),
            nutrition: e.nutrition.clone(),
            extra: e.extra.clone(),
        }))
    }

    /// Materialise the configured trays, resolving item names through the
    /// catalog. Unresolvable content rows were already rejected by
    /// `validate`, unless they carry an inline name.
    pub fn build_trays(&self, catalog: &Catalog) -> Result<Vec<Tray>> {
        self.trays
            .iter()
            .map(|tray_cfg| {
                let size: TraySize = tray_cfg.size.parse()?;
                let mut slots = vec![TraySlot::new(SlotType::Square); size.capacity()];
                for content in &tray_cfg.contents {
                    if content.slot >= size.capacity() {
                        return Err(TrayError::IndexOutOfRange {
                            index: content.slot,
                            capacity: size.capacity(),
                        });
                    }
                    let expiry = content.expiry.map(|date| Expiry {
                        source: if content.expiry_estimated {
                            ExpirySource::Estimated
                        } else {
                            ExpirySource::Scanned
                        },
                        date,
                    });
                    // Unweighed contents get a unit weight.
                    let weight = content.weight.unwrap_or(1.0);
                    let item = match (&content.name, catalog.lookup(&content.item)) {
                        // An inline name overrides whatever the catalog says.
                        (Some(name), _) => {
                            StoredItem::new(content.item.clone(), name.clone(), weight, expiry)
                        }
                        (None, Some(entry)) => StoredItem::of_catalog_entry(&entry, weight, expiry),
                        // No catalog match: the scanned code doubles as the name.
                        (None, None) => StoredItem::new(
                            content.item.clone(),
                            content.item.clone(),
                            weight,
                            expiry,
                        ),
                    };
                    slots[content.slot] = TraySlot::with_item(SlotType::Square, item);
                }
                Tray::with_slots(tray_cfg.id.clone(), size, slots)
            })
            .collect()
    }

    pub fn build_shopping_lists(&self, catalog: &Catalog) -> Result<Vec<ShoppingList>> {
        self.shopping_lists
            .iter()
            .map(|list_cfg| {
                let listings = list_cfg
                    .listings
                    .iter()
                    .map(|listing| {
                        let target = match (&listing.item, &listing.generic) {
                            (Some(id), None) => {
                                let entry = catalog.lookup(id).ok_or_else(|| {
                                    TrayError::InvalidConfigValue {
                                        field: "shopping_lists.listings.item".to_string(),
                                        value: id.clone(),
                                        reason: "No such catalog entry".to_string(),
                                    }
                                })?;
                                ListingTarget::Concrete(entry)
                            }
                            (None, Some(label)) => ListingTarget::Generic(label.clone()),
                            _ => {
                                return Err(TrayError::InvalidConfigValue {
                                    field: "shopping_lists.listings".to_string(),
                                    value: format!("{:?}/{:?}", listing.item, listing.generic),
                                    reason: "Exactly one of 'item' or 'generic' is required"
                                        .to_string(),
                                })
                            }
                        };
                        Ok(ShoppingListing {
                            target,
                            amount: listing.amount,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ShoppingList {
                    owner: list_cfg.owner.clone(),
                    listings,
                })
            })
            .collect()
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        for entry in &self.catalog {
            validate_non_empty_string("catalog.id", &entry.id)?;
            validate_non_empty_string("catalog.name", &entry.name)?;
        }

        for tray in &self.trays {
            validate_non_empty_string("trays.id", &tray.id)?;
            // Fails early on unknown sizes, before tray construction.
            let _: TraySize = tray.size.parse()?;
            for content in &tray.contents {
                validate_non_empty_string("trays.contents.item", &content.item)?;
                if let Some(weight) = content.weight {
                    validate_positive_weight("trays.contents.weight", weight)?;
                }
            }
        }

        for list in &self.shopping_lists {
            validate_non_empty_string("shopping_lists.owner", &list.owner)?;
            for listing in &list.listings {
                validate_minimum_amount("shopping_lists.listings.amount", listing.amount, 1)?;
            }
        }

        Ok(())
    }
}
