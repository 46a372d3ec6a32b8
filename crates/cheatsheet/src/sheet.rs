//! # The Cheat Sheet Collection
//!
//! [`CheatSheet`] owns an ordered list of [`Entry`] values plus the [`SheetIndex`]
//! derived from it. Insertion order is display order.
//!
//! ## Mutations and the Index
//!
//! - **Add** records the new entry incrementally.
//! - **Update** and **remove** rebuild the whole index, since a changed primary or tag
//!   set (or a shifted position) can't be expressed as a simple delta.
//!
//! Every mutation computes its new index before touching any state. A failed call
//! leaves the sheet exactly as it was.
//!
//! ## Ids
//!
//! Fresh entries get `last_entry_id + 1`. Entries fed in during an initial load keep
//! their persisted ids and only raise the high-water mark. A rebuild recomputes the mark
//! from the surviving entries, so removing the highest id frees it for reuse.
//!
//! ## Modified State
//!
//! Adds (outside initial load), effective updates and removals set the `modified`
//! flag and stamp `modified_date`. An external writer reads these to decide whether to
//! persist, then calls [`CheatSheet::mark_persisted`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::config::CheatSheetConfig;
use crate::entry::{Entry, EntryId, SearchMode};
use crate::error::{CheatSheetError, Result};
use crate::index::SheetIndex;
use crate::query::Query;
use crate::update::EntryUpdate;

#[derive(Debug, Clone, Default)]
pub struct CheatSheet {
    version: Option<String>,
    src_fname: Option<String>,
    modified: bool,
    modified_date: Option<DateTime<Utc>>,
    entries: Vec<Entry>,
    index: SheetIndex,
    config: CheatSheetConfig,
}

impl CheatSheet {
    /// Creates an empty, unmodified sheet with the given provenance metadata.
    pub fn new(
        version: Option<String>,
        modified_date: Option<DateTime<Utc>>,
        src_fname: Option<String>,
    ) -> Self {
        Self {
            version,
            src_fname,
            modified_date,
            ..Default::default()
        }
    }

    pub fn with_config(mut self, config: CheatSheetConfig) -> Self {
        self.config = config;
        self
    }

    // --- Queries ---

    /// Entries matching the conditions under `mode`, in sheet order.
    pub fn get_entries(
        &self,
        mode: SearchMode,
        primary: Option<&str>,
        tags: &BTreeSet<String>,
    ) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.matches(mode, primary, tags))
            .collect()
    }

    pub fn query(&self, query: &Query) -> Vec<&Entry> {
        self.get_entries(query.mode, query.primary.as_deref(), &query.tags)
    }

    /// Like [`get_entries`](Self::get_entries), using the configured default mode.
    pub fn search(&self, primary: Option<&str>, tags: &BTreeSet<String>) -> Vec<&Entry> {
        self.get_entries(self.config.default_search_mode(), primary, tags)
    }

    pub fn get_entry(&self, id: EntryId) -> Result<&Entry> {
        self.position_of(id)
            .map(|pos| &self.entries[pos])
            .ok_or(CheatSheetError::InvalidId {
                method: "CheatSheet::get_entry",
                id,
            })
    }

    pub fn contains_id(&self, id: EntryId) -> bool {
        self.index.id_set().contains(&id)
    }

    /// Entries sharing `primary`, in sheet order.
    pub fn entries_for_primary(&self, primary: &str) -> Vec<&Entry> {
        self.index
            .positions_for_primary(primary)
            .iter()
            .map(|&pos| &self.entries[pos])
            .collect()
    }

    pub fn primaries(&self) -> impl Iterator<Item = &str> {
        self.index.primaries()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tag_set(&self) -> &BTreeSet<String> {
        self.index.tag_set()
    }

    pub fn id_set(&self) -> &BTreeSet<EntryId> {
        self.index.id_set()
    }

    pub fn last_entry_id(&self) -> EntryId {
        self.index.last_entry_id()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn modified_date(&self) -> Option<DateTime<Utc>> {
        self.modified_date
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn src_fname(&self) -> Option<&str> {
        self.src_fname.as_deref()
    }

    pub fn config(&self) -> &CheatSheetConfig {
        &self.config
    }

    // --- Mutations ---

    /// Adds an entry and returns its id.
    ///
    /// With `initial_load`, the entry must already carry its positive persisted id and
    /// the sheet is not marked modified. Otherwise the entry must have no id; it receives
    /// the next one and the sheet is marked modified. Fails with `IllegalState` when no
    /// id is left to assign.
    pub fn add_entry(&mut self, mut entry: Entry, initial_load: bool) -> Result<EntryId> {
        let id = match (initial_load, entry.id) {
            (true, Some(id)) if id > 0 => id,
            (true, _) => {
                return Err(CheatSheetError::programming(
                    "CheatSheet::add_entry",
                    "Old Entry missing ID!",
                ))
            }
            (false, None) => self.index.next_entry_id()?,
            (false, Some(_)) => {
                return Err(CheatSheetError::programming(
                    "CheatSheet::add_entry",
                    "New Entry has ID!",
                ))
            }
        };
        entry.id = Some(id);

        // Fails on a duplicate id before anything is recorded.
        self.index.record(self.entries.len(), &entry)?;
        self.entries.push(entry);

        if !initial_load {
            self.mark_modified(None);
        }
        tracing::debug!("Added entry {} (initial_load={})", id, initial_load);
        Ok(id)
    }

    /// Replaces the supplied fields of entry `id` and returns the entry.
    ///
    /// An empty update is a no-op and leaves the modified flag alone. The patched entry
    /// is only validated when `validate_on_update` is configured.
    pub fn update_entry(&mut self, id: EntryId, update: EntryUpdate) -> Result<&Entry> {
        let pos = self.position_of(id).ok_or(CheatSheetError::InvalidId {
            method: "CheatSheet::update_entry",
            id,
        })?;

        if update.is_empty() {
            return Ok(&self.entries[pos]);
        }

        let mut patched = self.entries[pos].clone();
        update.apply_to(&mut patched);
        if self.config.validate_on_update {
            patched.validate()?;
        }

        let index = SheetIndex::rebuild(
            self.entries
                .iter()
                .enumerate()
                .map(|(i, e)| if i == pos { &patched } else { e }),
        )?;

        self.entries[pos] = patched;
        self.index = index;
        self.mark_modified(None);
        tracing::debug!("Updated entry {}", id);
        Ok(&self.entries[pos])
    }

    /// Removes entry `id` and returns it.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<Entry> {
        let pos = self.position_of(id).ok_or(CheatSheetError::InvalidId {
            method: "CheatSheet::remove_entry",
            id,
        })?;

        let index = SheetIndex::rebuild(
            self.entries
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != pos)
                .map(|(_, e)| e),
        )?;

        let removed = self.entries.remove(pos);
        self.index = index;
        self.mark_modified(None);
        tracing::debug!("Removed entry {}", id);
        Ok(removed)
    }

    /// Sets the modified flag, stamping `timestamp` or the current time.
    pub fn mark_modified(&mut self, timestamp: Option<DateTime<Utc>>) {
        self.modified = true;
        self.modified_date = Some(timestamp.unwrap_or_else(Utc::now));
        tracing::debug!("Cheat sheet marked modified");
    }

    /// Clears the modified flag once a writer has stored the current state.
    pub fn mark_persisted(&mut self) {
        self.modified = false;
    }

    /// Recomputes the index from the entry list and compares it with the maintained one.
    pub fn verify_indexes(&self) -> Result<()> {
        let expected = SheetIndex::rebuild(&self.entries)?;
        if expected != self.index {
            return Err(CheatSheetError::illegal_state(
                "CheatSheet::verify_indexes",
                "derived indexes diverged from entries.",
            ));
        }
        Ok(())
    }

    fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == Some(id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct SheetFixture {
        pub sheet: CheatSheet,
    }

    impl Default for SheetFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SheetFixture {
        pub fn new() -> Self {
            Self {
                sheet: CheatSheet::default(),
            }
        }

        pub fn with_config(mut self, config: CheatSheetConfig) -> Self {
            self.sheet = self.sheet.with_config(config);
            self
        }

        pub fn with_entry(
            mut self,
            primary: &str,
            clue: &str,
            answer: &str,
            tags: &[&str],
        ) -> Self {
            let entry = Entry::new(primary, clue, answer, tags.iter().copied()).unwrap();
            self.sheet.add_entry(entry, false).unwrap();
            self
        }

        pub fn with_restored(
            mut self,
            id: EntryId,
            primary: &str,
            clue: &str,
            answer: &str,
            tags: &[&str],
        ) -> Self {
            let entry = Entry::restore(id, primary, clue, answer, tags.iter().copied()).unwrap();
            self.sheet.add_entry(entry, true).unwrap();
            self
        }

        /// Five entries across three primaries: ids 1..=5.
        pub fn sample() -> Self {
            Self::new()
                .with_entry("math", "2 + 2", "4", &["arithmetic"])
                .with_entry("math", "x + 1 = 3", "x = 2", &["algebra"])
                .with_entry("physics", "F", "m * a", &["mechanics", "algebra"])
                .with_entry("git", "undo last commit", "git reset HEAD~", &["vcs"])
                .with_entry("math", "a^2 + b^2", "c^2", &["geometry", "algebra"])
        }
    }
}
