//! Loader/writer boundary.
//!
//! A [`SheetSnapshot`] is the full persisted state of a sheet as an external
//! reader produces it or a writer consumes it. This crate never reads or writes
//! files itself; the serde derives let the persistence layer pick its own format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::CheatSheetConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::sheet::CheatSheet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSnapshot {
    pub version: Option<String>,
    #[serde(default)]
    pub modified: bool,
    pub modified_date: Option<DateTime<Utc>>,
    pub src_fname: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl CheatSheet {
    /// Builds a sheet from persisted state.
    ///
    /// Every entry is validated (deserialized entries skip the constructor) and then
    /// added as an initial load, so ids are kept and the sheet starts unmodified.
    pub fn from_snapshot(snapshot: SheetSnapshot, config: CheatSheetConfig) -> Result<Self> {
        let mut sheet = CheatSheet::new(
            snapshot.version,
            snapshot.modified_date,
            snapshot.src_fname,
        )
        .with_config(config);

        for entry in snapshot.entries {
            entry.validate()?;
            sheet.add_entry(entry, true)?;
        }
        tracing::debug!(
            "Loaded {} entries (last id {})",
            sheet.len(),
            sheet.last_entry_id()
        );
        Ok(sheet)
    }

    /// Re-validates every entry and returns the state a writer should persist.
    pub fn to_snapshot(&self) -> Result<SheetSnapshot> {
        for entry in self.entries() {
            entry.validate()?;
        }
        Ok(SheetSnapshot {
            version: self.version().map(str::to_string),
            modified: self.is_modified(),
            modified_date: self.modified_date(),
            src_fname: self.src_fname().map(str::to_string),
            entries: self.entries().to_vec(),
        })
    }
}
