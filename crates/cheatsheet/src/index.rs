//! # Derived Indexes
//!
//! [`SheetIndex`] holds everything a [`CheatSheet`](crate::sheet::CheatSheet) derives
//! from its entry list: the tag universe, the primary-category buckets, the set of ids
//! in use and the id high-water mark.
//!
//! There is exactly one per-entry routine, [`SheetIndex::record`]. Adding an entry
//! calls it once; [`SheetIndex::rebuild`] replays it for every entry in order. Both
//! paths therefore agree by construction.
//!
//! Primary buckets store positions into the entry list rather than the entries
//! themselves. Positions stay valid because any change that could shift them
//! (removal) triggers a full rebuild.

use std::collections::{BTreeMap, BTreeSet};

use crate::entry::{Entry, EntryId};
use crate::error::{CheatSheetError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetIndex {
    primary_to_positions: BTreeMap<String, Vec<usize>>,
    tag_set: BTreeSet<String>,
    id_set: BTreeSet<EntryId>,
    last_entry_id: EntryId,
}

impl SheetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh index by recording each entry in order.
    pub fn rebuild<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut index = Self::new();
        for (position, entry) in entries.into_iter().enumerate() {
            index.record(position, entry)?;
        }
        tracing::trace!("Rebuilt index over {} entries", index.id_set.len());
        Ok(index)
    }

    /// Checks that `entry` can be recorded without touching the index.
    pub fn check(&self, entry: &Entry) -> Result<EntryId> {
        let Some(id) = entry.id else {
            return Err(CheatSheetError::illegal_state(
                "SheetIndex::record",
                "entry has no ID.",
            ));
        };
        if self.id_set.contains(&id) {
            return Err(CheatSheetError::illegal_state(
                "SheetIndex::record",
                format!("duplicate ID {} found.", id),
            ));
        }
        Ok(id)
    }

    /// Records the entry stored at `position` in the entry list.
    ///
    /// Fails with `IllegalState` on a missing or duplicate id, before any change.
    pub fn record(&mut self, position: usize, entry: &Entry) -> Result<()> {
        let id = self.check(entry)?;
        self.id_set.insert(id);

        self.primary_to_positions
            .entry(entry.primary.clone())
            .or_default()
            .push(position);

        self.tag_set.extend(entry.tags.iter().cloned());

        if id > self.last_entry_id {
            self.last_entry_id = id;
        }
        Ok(())
    }

    /// The id a fresh entry receives. Recording it moves the high-water mark.
    ///
    /// Fails with `IllegalState` once the high-water mark is `EntryId::MAX`.
    pub fn next_entry_id(&self) -> Result<EntryId> {
        self.last_entry_id.checked_add(1).ok_or_else(|| {
            CheatSheetError::illegal_state("CheatSheet::add_entry", "entry ID space exhausted.")
        })
    }

    pub fn positions_for_primary(&self, primary: &str) -> &[usize] {
        self.primary_to_positions
            .get(primary)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn primaries(&self) -> impl Iterator<Item = &str> {
        self.primary_to_positions.keys().map(String::as_str)
    }

    pub fn tag_set(&self) -> &BTreeSet<String> {
        &self.tag_set
    }

    pub fn id_set(&self) -> &BTreeSet<EntryId> {
        &self.id_set
    }

    pub fn last_entry_id(&self) -> EntryId {
        self.last_entry_id
    }
}
