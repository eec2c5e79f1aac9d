pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::seed::SeedConfig;
pub use core::reconcile::{list_progress, listing_satisfied, ListProgress, ListingProgress};
pub use core::tracker::FulfillmentTracker;
pub use domain::item::{Expiry, ExpirySource, ItemCatalogEntry, Nutrition, StoredItem};
pub use domain::ports::{Catalog, CatalogSource, Clock, SystemClock};
pub use domain::shopping::{ListingTarget, ShoppingList, ShoppingListing};
pub use domain::tray::{default_warning_window, SlotStatus, SlotType, Tray, TraySize, TraySlot};
pub use utils::error::{Result, TrayError};
