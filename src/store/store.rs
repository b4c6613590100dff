// =====================================================================
// File: store/store.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 15, 2026 - Refactored Oct. 16, 2026
//
// Description:
//   Implements `RecordStore`, the owner of every live record. Each
//   record is reachable three ways, and all three are updated together
//   by every operation:
//
//   - `records`: id -> record map for O(1) lookup by id.
//   - `order`  : ids in insertion order, for listing and name search.
//   - `names`  : AVL index of (name, id) keys, for ordering by name.
//
//   Every add, remove and update is also pushed onto a bounded
//   change log.
// =====================================================================
use super::{ChangeKind, ChangeLog, Record, RecordDraft, RecordId, RecordPatch, SortField};
use crate::{AvlIndex, Comparator, StoreConfig, StoreError};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Key stored in the name index. Names may repeat, the id keeps
/// every key distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameKey {
    pub name: String,
    pub id: RecordId,
}


/// Orders [`NameKey`]s by name, then by id.
///
/// Ids grow with insertion order, so walking the index gives the same
/// order as a stable sort of the records by name.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByName;

impl Comparator<NameKey> for ByName {
    fn compare(&self, a: &NameKey, b: &NameKey) -> Ordering {
        a.name.cmp(&b.name).then(a.id.cmp(&b.id))
    }
}


/// In-memory collection of records with an ordered name index.
#[derive(Debug)]
pub struct RecordStore {
    records: HashMap<RecordId, Record>,
    order: Vec<RecordId>,
    names: AvlIndex<NameKey, ByName>,
    changes: ChangeLog,
    next_id: RecordId,
}


impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}


impl RecordStore {
    /// Creates an empty store with the default configuration.
    ///
    /// # Example
    /// ```
    /// use recordstore::RecordStore;
    /// let store = RecordStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store using `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            names: AvlIndex::new(ByName),
            changes: ChangeLog::new(config.change_log_depth),
            next_id: 1,
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// The name index, read only.
    pub fn name_index(&self) -> &AvlIndex<NameKey, ByName> {
        &self.names
    }

    /// The change log, read only.
    pub fn change_log(&self) -> &ChangeLog {
        &self.changes
    }

    /// Add a new record built from `draft`.
    ///
    /// Assigns the next id, then stores the record in the id map, the
    /// insertion order, and the name index, and logs an `Added` entry.
    ///
    /// # Example
    /// ```
    /// use recordstore::{RecordDraft, RecordStore};
    /// let mut store = RecordStore::new();
    /// let id = store.add(RecordDraft::new("Lion", "Gold", "Large", "190kg")).id();
    /// assert_eq!(id, 1);
    /// assert_eq!(store.search_by_id(id).map(|r| r.name()), Some("Lion"));
    /// ```
    pub fn add(&mut self, draft: RecordDraft) -> &Record {
        let id = self.next_id;
        self.next_id += 1;

        let record = Record::from_draft(id, draft);
        debug!(id, name = record.name(), "adding record");

        self.names.insert(NameKey {
            name: record.name().to_string(),
            id,
        });
        self.changes.push(ChangeKind::Added, record.to_string());
        self.order.push(id);

        self.records.entry(id).or_insert(record)
    }

    /// Remove the record with `id`.
    ///
    /// # Returns
    /// * `Some(record)` with the removed record.
    /// * `None` if no record has that id (nothing changes).
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let record = self.records.remove(&id)?;
        debug!(id, name = record.name(), "removing record");

        self.order.retain(|live| *live != id);
        self.names.remove(&NameKey {
            name: record.name().to_string(),
            id,
        });
        self.changes.push(ChangeKind::Removed, record.to_string());

        Some(record)
    }

    /// Look up a record by id.
    pub fn search_by_id(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// All records whose name matches `name`, ignoring case, in insertion order.
    ///
    /// This is a linear scan so every record with a repeated name is found.
    pub fn search_by_name(&self, name: &str) -> Vec<&Record> {
        let wanted = name.to_lowercase();
        self.iter()
            .filter(|record| record.name().to_lowercase() == wanted)
            .collect()
    }

    /// Apply `patch` to the record with `id`.
    ///
    /// Only the non-blank patch values are written; id and name never
    /// change. An `Updated` entry is logged even when nothing changed.
    ///
    /// # Returns
    /// * `Some(record)` with the updated record.
    /// * `None` if no record has that id (nothing changes).
    pub fn update(&mut self, id: RecordId, patch: RecordPatch) -> Option<&Record> {
        let record = self.records.get_mut(&id)?;
        debug!(id, name = record.name(), blank = patch.is_blank(), "updating record");

        record.apply(patch);
        self.changes.push(ChangeKind::Updated, record.to_string());

        Some(&*record)
    }

    /// All records sorted ascending by `field`, ties in insertion order.
    ///
    /// Name order comes straight from the name index; other fields are
    /// a stable sort over the insertion order.
    pub fn list_sorted(&self, field: SortField) -> Vec<&Record> {
        if field == SortField::Name {
            return self
                .names
                .iter()
                .filter_map(|key| self.records.get(&key.id))
                .collect();
        }

        let mut sorted: Vec<&Record> = self.iter().collect();
        sorted.sort_by(|a, b| a.field(field).cmp(b.field(field)));
        sorted
    }

    /// Same as [`list_sorted`](Self::list_sorted) with the field given by name.
    ///
    /// # Errors
    /// [`StoreError::InvalidSortField`] if `field` is not one of
    /// `name`, `color`, `size`, `weight`; nothing is listed.
    pub fn list_sorted_by(&self, field: &str) -> Result<Vec<&Record>, StoreError> {
        let field: SortField = field.parse()?;
        Ok(self.list_sorted(field))
    }

    /// Change log lines, most recent first.
    pub fn recent_changes(&self) -> Vec<String> {
        self.changes.iter().map(|entry| entry.to_string()).collect()
    }
}
