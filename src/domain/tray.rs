use crate::domain::item::StoredItem;
use crate::utils::error::{Result, TrayError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How far ahead of the expiry date a slot starts reporting `Warning`.
/// A configuration knob, overridable from the CLI; two days suits the
/// grocery turnaround the trays are packed for.
pub fn default_warning_window() -> Duration {
    Duration::days(2)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TraySize {
    Norm3x3,
    Norm4x4,
    Norm5x5,
    /// Long-vegetable tray: two double-width slots replace four squares.
    Vegetables5x5,
}

impl TraySize {
    pub fn capacity(self) -> usize {
        match self {
            TraySize::Norm3x3 => 9,
            TraySize::Norm4x4 => 16,
            TraySize::Norm5x5 => 25,
            TraySize::Vegetables5x5 => 23,
        }
    }
}

impl FromStr for TraySize {
    type Err = TrayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "3x3" => Ok(TraySize::Norm3x3),
            "4x4" => Ok(TraySize::Norm4x4),
            "5x5" => Ok(TraySize::Norm5x5),
            "vegetables5x5" => Ok(TraySize::Vegetables5x5),
            other => Err(TrayError::InvalidSize {
                value: other.to_string(),
            }),
        }
    }
}

/// Shape constraint of a slot. Informational only; placement does not
/// check item shape against it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SlotType {
    #[default]
    Square,
    LongVegetable,
}

/// Freshness label derived from a slot's contents at a point in time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotStatus {
    Empty,
    Ok,
    Warning,
    Bad,
}

/// One cell of a tray's grid. Empty, or holding exactly one item; a
/// quantity greater than one takes multiple slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TraySlot {
    pub slot_type: SlotType,
    pub holding: Option<StoredItem>,
}

impl TraySlot {
    pub fn new(slot_type: SlotType) -> Self {
        Self {
            slot_type,
            holding: None,
        }
    }

    pub fn with_item(slot_type: SlotType, item: StoredItem) -> Self {
        Self {
            slot_type,
            holding: Some(item),
        }
    }

    /// Derive the freshness status of this slot at `now`. Pure: a fixed
    /// `(slot, now, warning_window)` always yields the same answer.
    pub fn status_at(&self, now: DateTime<Utc>, warning_window: Duration) -> SlotStatus {
        let Some(item) = &self.holding else {
            return SlotStatus::Empty;
        };
        let Some(expiry) = &item.expiry else {
            return SlotStatus::Ok;
        };

        if expiry.date <= now {
            SlotStatus::Bad
        } else if expiry.date <= now + warning_window {
            SlotStatus::Warning
        } else {
            SlotStatus::Ok
        }
    }
}

/// A physical tray: a fixed grid of slots. `slots.len()` always equals the
/// size's capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tray {
    pub id: String,
    pub size: TraySize,
    slots: Vec<TraySlot>,
}

impl Tray {
    /// Allocate a tray of `size` with all slots empty and `Square`.
    pub fn new(id: impl Into<String>, size: TraySize) -> Self {
        Self {
            id: id.into(),
            size,
            slots: vec![TraySlot::default(); size.capacity()],
        }
    }

    /// Import a tray with known slot contents. The slot count must match
    /// the size's capacity exactly.
    pub fn with_slots(id: impl Into<String>, size: TraySize, slots: Vec<TraySlot>) -> Result<Self> {
        if slots.len() != size.capacity() {
            return Err(TrayError::SlotCountMismatch {
                expected: size.capacity(),
                actual: slots.len(),
            });
        }
        Ok(Self {
            id: id.into(),
            size,
            slots,
        })
    }

    pub fn capacity(&self) -> usize {
        self.size.capacity()
    }

    pub fn slots(&self) -> &[TraySlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&TraySlot> {
        self.slots
            .get(index)
            .ok_or_else(|| self.index_error(index))
    }

    /// Put `item` into the slot at `slot_index`. The slot must be empty;
    /// there is no implicit overwrite, callers remove first.
    pub fn place(&mut self, slot_index: usize, item: StoredItem) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(slot_index)
            .ok_or(TrayError::IndexOutOfRange {
                index: slot_index,
                capacity,
            })?;
        if slot.holding.is_some() {
            return Err(TrayError::SlotOccupied { index: slot_index });
        }
        slot.holding = Some(item);
        Ok(())
    }

    /// Clear the slot at `slot_index`, returning the prior occupant if any.
    pub fn remove(&mut self, slot_index: usize) -> Result<Option<StoredItem>> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(slot_index)
            .ok_or(TrayError::IndexOutOfRange {
                index: slot_index,
                capacity,
            })?;
        Ok(slot.holding.take())
    }

    /// Iterate the items currently held, with their slot indices.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &StoredItem)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.holding.as_ref().map(|item| (i, item)))
    }

    fn index_error(&self, index: usize) -> TrayError {
        TrayError::IndexOutOfRange {
            index,
            capacity: self.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{Expiry, ExpirySource};
    use chrono::TimeZone;

    fn milk() -> StoredItem {
        StoredItem::new("3563563563", "Milk", 1.5, None)
    }

    fn expiring(date: DateTime<Utc>) -> StoredItem {
        StoredItem::new(
            "2678562343",
            "Eggs",
            0.5,
            Some(Expiry {
                source: ExpirySource::Scanned,
                date,
            }),
        )
    }

    #[test]
    fn test_capacity_per_size() {
        assert_eq!(TraySize::Norm3x3.capacity(), 9);
        assert_eq!(TraySize::Norm4x4.capacity(), 16);
        assert_eq!(TraySize::Norm5x5.capacity(), 25);
        assert_eq!(TraySize::Vegetables5x5.capacity(), 23);
    }

    #[test]
    fn test_new_tray_has_capacity_empty_slots() {
        let tray = Tray::new("t1", TraySize::Norm3x3);
        assert_eq!(tray.slots().len(), 9);
        assert_eq!(tray.capacity(), tray.slots().len());
        assert!(tray.slots().iter().all(|s| s.holding.is_none()));
        assert!(tray.slots().iter().all(|s| s.slot_type == SlotType::Square));
    }

    #[test]
    fn test_with_slots_rejects_count_mismatch() {
        let slots = vec![TraySlot::default(); 8];
        let err = Tray::with_slots("t1", TraySize::Norm3x3, slots).unwrap_err();
        assert!(matches!(
            err,
            TrayError::SlotCountMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!("3x3".parse::<TraySize>().unwrap(), TraySize::Norm3x3);
        assert_eq!(
            "vegetables5x5".parse::<TraySize>().unwrap(),
            TraySize::Vegetables5x5
        );
        let err = "6x6".parse::<TraySize>().unwrap_err();
        assert!(matches!(err, TrayError::InvalidSize { value } if value == "6x6"));
    }

    #[test]
    fn test_place_then_remove_round_trip() {
        let mut tray = Tray::new("t1", TraySize::Norm4x4);
        let item = milk();
        tray.place(3, item.clone()).unwrap();
        assert_eq!(tray.capacity(), tray.slots().len());

        let removed = tray.remove(3).unwrap();
        assert_eq!(removed, Some(item));
        assert!(tray.slot(3).unwrap().holding.is_none());
    }

    #[test]
    fn test_place_into_occupied_slot_keeps_occupant() {
        let mut tray = Tray::new("t1", TraySize::Norm3x3);
        let first = milk();
        tray.place(0, first.clone()).unwrap();

        let err = tray
            .place(0, StoredItem::new("x", "Butter", 0.25, None))
            .unwrap_err();
        assert!(matches!(err, TrayError::SlotOccupied { index: 0 }));
        assert_eq!(tray.slot(0).unwrap().holding, Some(first));
    }

    #[test]
    fn test_place_out_of_range() {
        let mut tray = Tray::new("t1", TraySize::Norm3x3);
        let err = tray.place(9, milk()).unwrap_err();
        assert!(matches!(
            err,
            TrayError::IndexOutOfRange {
                index: 9,
                capacity: 9
            }
        ));
    }

    #[test]
    fn test_remove_from_empty_slot_returns_none() {
        let mut tray = Tray::new("t1", TraySize::Norm3x3);
        assert_eq!(tray.remove(2).unwrap(), None);
    }

    #[test]
    fn test_status_empty_regardless_of_now() {
        let slot = TraySlot::default();
        let early = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(slot.status_at(early, default_warning_window()), SlotStatus::Empty);
        assert_eq!(slot.status_at(late, default_warning_window()), SlotStatus::Empty);
    }

    #[test]
    fn test_status_no_expiry_is_ok() {
        let slot = TraySlot::with_item(SlotType::Square, milk());
        let now = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(slot.status_at(now, default_warning_window()), SlotStatus::Ok);
    }

    #[test]
    fn test_status_transitions_around_expiry() {
        let expires = Utc.with_ymd_and_hms(2025, 10, 25, 12, 0, 0).unwrap();
        let slot = TraySlot::with_item(SlotType::Square, expiring(expires));
        let window = default_warning_window();

        // Well before the window: fresh.
        assert_eq!(
            slot.status_at(expires - Duration::days(5), window),
            SlotStatus::Ok
        );
        // Inside the lookahead window: warn.
        assert_eq!(
            slot.status_at(expires - Duration::hours(12), window),
            SlotStatus::Warning
        );
        // Exactly at the window edge: warn.
        assert_eq!(slot.status_at(expires - window, window), SlotStatus::Warning);
        // At and after the expiry instant: bad.
        assert_eq!(slot.status_at(expires, window), SlotStatus::Bad);
        assert_eq!(
            slot.status_at(expires + Duration::minutes(1), window),
            SlotStatus::Bad
        );
    }

    #[test]
    fn test_status_is_referentially_transparent() {
        let expires = Utc.with_ymd_and_hms(2025, 10, 25, 12, 0, 0).unwrap();
        let slot = TraySlot::with_item(SlotType::Square, expiring(expires));
        let now = expires - Duration::hours(1);
        let window = default_warning_window();
        let first = slot.status_at(now, window);
        for _ in 0..10 {
            assert_eq!(slot.status_at(now, window), first);
        }
    }
}
