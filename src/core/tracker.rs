use crate::domain::tray::Tray;
use std::collections::HashMap;

/// Marker prefixed to an item identity when a concrete item was placed to
/// fulfill a generic listing. Stripped before count lookups so the generic
/// label and the aliased placement share one bucket.
pub const GENERIC_ALIAS_PREFIX: char = '_';

/// Tracks how many units of each item have been placed per tray.
///
/// Keys are tray identities: the authoritative resync recounts a physical
/// tray, so the bucket must be the thing being recounted. The tracker is an
/// owned instance with no ambient state; callers construct it once and reset
/// explicitly. Unknown tray or item identities read as zero placed, which is
/// the normal "nothing placed yet" state rather than an error.
#[derive(Debug, Default)]
pub struct FulfillmentTracker {
    placed: HashMap<String, HashMap<String, u32>>,
}

impl FulfillmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `delta` units of `item_id` placed into `tray_id`. A
    /// negative delta models removal; counts saturate at zero. Bounds
    /// against tray capacity are the tray's concern, not checked here.
    pub fn record_placement(&mut self, tray_id: &str, item_id: &str, delta: i32) {
        let counts = self.placed.entry(tray_id.to_string()).or_default();
        let count = counts.entry(item_id.to_string()).or_insert(0);
        *count = count.saturating_add_signed(delta);
        tracing::debug!(
            tray = tray_id,
            item = item_id,
            delta,
            count = *count,
            "recorded placement"
        );
    }

    /// Units of `item_id` recorded for `tray_id`, zero if never placed.
    pub fn placed_count(&self, tray_id: &str, item_id: &str) -> u32 {
        let item_id = strip_alias_marker(item_id);
        self.placed
            .get(tray_id)
            .and_then(|counts| counts.get(item_id))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `required` units of `item_id` have been placed into
    /// `tray_id`. A requirement of zero is vacuously satisfied.
    pub fn is_satisfied(&self, tray_id: &str, item_id: &str, required: u32) -> bool {
        if required == 0 {
            return true;
        }
        self.placed_count(tray_id, item_id) >= required
    }

    /// Authoritative resync from a physical re-scan: recount every occupied
    /// slot of `tray` and replace the tray's counts wholesale. Stale counts
    /// never survive; placement events alone cannot observe removals done
    /// outside a tracked session.
    pub fn sync_from_tray(&mut self, tray: &Tray) {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for (_, item) in tray.occupied() {
            *counts.entry(item.id.clone()).or_insert(0) += 1;
        }
        tracing::debug!(tray = %tray.id, items = counts.len(), "resynced from tray scan");
        self.placed.insert(tray.id.clone(), counts);
    }

    /// Drop all counts for `tray_id`.
    pub fn reset(&mut self, tray_id: &str) {
        self.placed.remove(tray_id);
    }

    /// Drop all counts for all trays.
    pub fn reset_all(&mut self) {
        self.placed.clear();
    }
}

fn strip_alias_marker(item_id: &str) -> &str {
    item_id.strip_prefix(GENERIC_ALIAS_PREFIX).unwrap_or(item_id)
}
