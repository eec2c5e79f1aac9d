use crate::core::tracker::FulfillmentTracker;
use crate::domain::shopping::{ShoppingList, ShoppingListing};
use serde::Serialize;

/// Progress of one listing: how many units are placed against how many
/// are required. This is the per-row read model the UI renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListingProgress {
    pub name: String,
    pub identity: String,
    pub required: u32,
    pub placed: u32,
    pub satisfied: bool,
}

/// Progress of a whole shopping list against one tray.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListProgress {
    pub owner: String,
    pub tray_id: String,
    pub listings: Vec<ListingProgress>,
    /// True iff every listing is satisfied.
    pub complete: bool,
}

/// Whether `listing` is satisfied by what has been placed into `tray_id`.
/// Identity resolution goes through the listing target (catalog id or
/// generic label); display names are never compared.
pub fn listing_satisfied(
    tracker: &FulfillmentTracker,
    tray_id: &str,
    listing: &ShoppingListing,
) -> bool {
    tracker.is_satisfied(tray_id, listing.target.identity(), listing.amount)
}

/// Reconcile a recipient's shopping list against the tracked contents of
/// `tray_id`.
pub fn list_progress(
    tracker: &FulfillmentTracker,
    tray_id: &str,
    list: &ShoppingList,
) -> ListProgress {
    let listings: Vec<ListingProgress> = list
        .listings
        .iter()
        .map(|listing| {
            let identity = listing.target.identity();
            let placed = tracker.placed_count(tray_id, identity);
            ListingProgress {
                name: listing.target.display_name().to_string(),
                identity: identity.to_string(),
                required: listing.amount,
                placed,
                satisfied: tracker.is_satisfied(tray_id, identity, listing.amount),
            }
        })
        .collect();

    let complete = listings.iter().all(|l| l.satisfied);
    ListProgress {
        owner: list.owner.clone(),
        tray_id: tray_id.to_string(),
        listings,
        complete,
    }
}
