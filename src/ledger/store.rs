use std::collections::BTreeSet;

use tracing::debug;
use uuid::Uuid;

use super::entry::{Entry, EntryKind};
use crate::errors::{ForecastError, Result};

/// In-memory holder of validated ledger entries.
///
/// Persisting the store is left to the embedding application; this type only
/// guarantees that what it hands out satisfies the entry invariants.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    retired_ids: BTreeSet<Uuid>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads previously persisted entries, validating each one.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut store = Self::new();
        for entry in entries {
            store.add(entry)?;
        }
        Ok(store)
    }

    pub fn add(&mut self, entry: Entry) -> Result<Uuid> {
        entry.validate()?;
        if self.get(entry.id).is_some() || self.retired_ids.contains(&entry.id) {
            return Err(ForecastError::Validation(format!(
                "entry id {} is already in use",
                entry.id
            )));
        }
        let id = entry.id;
        debug!(%id, kind = entry.kind.label(), "adding entry");
        self.entries.push(entry);
        Ok(id)
    }

    /// Applies `edit` to a copy of the entry and commits it only if the result
    /// is still valid. The id cannot be changed.
    pub fn update<F>(&mut self, id: Uuid, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Entry),
    {
        let slot = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(ForecastError::EntryNotFound(id))?;
        let mut edited = slot.clone();
        edit(&mut edited);
        if edited.id != id {
            return Err(ForecastError::Validation("entry id is immutable".into()));
        }
        edited.validate()?;
        debug!(%id, "updating entry");
        *slot = edited;
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ForecastError::EntryNotFound(id))?;
        self.retired_ids.insert(id);
        debug!(%id, "removing entry");
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entries_of(&self, kind: EntryKind) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |entry| entry.kind == kind)
    }

    /// Distinct category labels in use for `kind`, sorted.
    pub fn categories(&self, kind: EntryKind) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .entries_of(kind)
            .map(|entry| entry.category.as_str())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// A consistent copy of the entries for one forecast computation.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
