pub mod reconcile;
pub mod tracker;

pub use crate::domain::item::{Expiry, ExpirySource, ItemCatalogEntry, Nutrition, StoredItem};
pub use crate::domain::ports::{Catalog, CatalogSource, Clock, SystemClock};
pub use crate::domain::shopping::{ListingTarget, ShoppingList, ShoppingListing};
pub use crate::domain::tray::{SlotStatus, SlotType, Tray, TraySize, TraySlot};
pub use crate::utils::error::Result;
