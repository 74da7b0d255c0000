use std::path::Path;

use chrono::NaiveDate;

use crate::data::entry::WeightEntry;
use crate::data::error::{EntryError, Result};
use crate::data::export;

/// Ordered collection of weight entries, kept sorted by date ascending.
///
/// On disk the store is a bare JSON array of entries.
#[derive(Debug, Clone, Default)]
pub struct WeightStore {
    entries: Vec<WeightEntry>,
    next_id: u64,
    /// Bumped on every mutation so views can cache derived data.
    revision: u64,
}

impl WeightStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Build a store from arbitrary entries, sorting them and continuing ids
    /// after the largest one seen.
    pub fn from_entries(mut entries: Vec<WeightEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            entries,
            next_id,
            revision: 0,
        }
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn entry(&self, id: u64) -> Option<&WeightEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn add_entry(&mut self, date: NaiveDate, weight: f64) -> Result<u64> {
        let id = self.next_id.max(1);
        let entry = WeightEntry::new(id, date, weight);
        if !entry.has_valid_weight() {
            return Err(EntryError::invalid(id, "weight must be a finite positive number"));
        }
        self.next_id = id + 1;
        self.entries.push(entry);
        self.sort_and_bump();
        Ok(id)
    }

    pub fn update_entry(&mut self, id: u64, date: NaiveDate, weight: f64) -> Result<()> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(EntryError::invalid(id, "weight must be a finite positive number"));
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EntryError::NotFound(id))?;
        entry.date = date;
        entry.weight = weight;
        self.sort_and_bump();
        Ok(())
    }

    pub fn remove_entry(&mut self, id: u64) -> Result<WeightEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(EntryError::NotFound(id))?;
        let removed = self.entries.remove(pos);
        self.revision += 1;
        Ok(removed)
    }

    /// CSV text of all entries in date order.
    pub fn export_entries(&self) -> Result<String> {
        export::entries_to_csv(&self.entries)
    }

    /// Load a store from a JSON file. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)?;
        let entries: Vec<WeightEntry> = serde_json::from_str(&json)?;
        if let Some(bad) = entries.iter().find(|e| !e.has_valid_weight()) {
            return Err(EntryError::invalid(bad.id, "stored weight is not a finite positive number"));
        }
        Ok(Self::from_entries(entries))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    // Stable sort keeps insertion order for entries on the same date.
    fn sort_and_bump(&mut self) {
        self.entries.sort_by_key(|e| e.date);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn keeps_entries_sorted_by_date() {
        let mut store = WeightStore::new();
        store.add_entry(day(1, 10), 80.0).unwrap();
        store.add_entry(day(1, 5), 81.0).unwrap();
        store.add_entry(day(1, 7), 80.5).unwrap();
        let dates: Vec<NaiveDate> = store.entries().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(1, 5), day(1, 7), day(1, 10)]);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = WeightStore::new();
        let a = store.add_entry(day(1, 1), 80.0).unwrap();
        let b = store.add_entry(day(1, 2), 80.0).unwrap();
        assert_eq!((a, b), (1, 2));
        store.remove_entry(b).unwrap();
        let c = store.add_entry(day(1, 3), 80.0).unwrap();
        assert_eq!(c, 3);
    }

    #[test]
    fn rejects_invalid_weights() {
        let mut store = WeightStore::new();
        assert!(store.add_entry(day(1, 1), 0.0).is_err());
        assert!(store.add_entry(day(1, 1), f64::NAN).is_err());
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn update_moves_entry_to_new_date() {
        let mut store = WeightStore::new();
        let first = store.add_entry(day(1, 1), 80.0).unwrap();
        store.add_entry(day(1, 2), 79.0).unwrap();
        store.update_entry(first, day(1, 3), 78.5).unwrap();
        let last = store.entries().last().unwrap();
        assert_eq!((last.id, last.date, last.weight), (first, day(1, 3), 78.5));
    }

    #[test]
    fn update_and_remove_unknown_id() {
        let mut store = WeightStore::new();
        assert!(matches!(store.update_entry(9, day(1, 1), 80.0), Err(EntryError::NotFound(9))));
        assert!(matches!(store.remove_entry(9), Err(EntryError::NotFound(9))));
    }

    #[test]
    fn revision_tracks_mutations() {
        let mut store = WeightStore::new();
        let id = store.add_entry(day(1, 1), 80.0).unwrap();
        store.update_entry(id, day(1, 1), 79.0).unwrap();
        store.remove_entry(id).unwrap();
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn from_entries_continues_ids() {
        let store = WeightStore::from_entries(vec![
            WeightEntry::new(4, day(2, 1), 80.0),
            WeightEntry::new(9, day(1, 1), 81.0),
        ]);
        assert_eq!(store.entries()[0].id, 9);
        let mut store = store;
        assert_eq!(store.add_entry(day(3, 1), 79.0).unwrap(), 10);
    }

    #[test]
    fn export_delegates_to_csv() {
        let mut store = WeightStore::new();
        store.add_entry(day(1, 5), 80.0).unwrap();
        assert_eq!(store.export_entries().unwrap(), "id,date,weight\n1,2024-01-05,80.0\n");
    }
}
