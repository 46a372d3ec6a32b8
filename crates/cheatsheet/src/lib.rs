//! # Cheat Sheet
//!
//! An in-memory collection of flashcard-like entries. Each [`Entry`] has a primary
//! category, a clue, an answer and a set of tags; a [`CheatSheet`] keeps them in
//! insertion order and maintains lookup structures derived from them (the tag
//! universe, primary-category buckets and the set of ids in use).
//!
//! ## Scope
//!
//! This crate is only the collection core. It performs no I/O on the sheet: an
//! external loader hands over a [`SheetSnapshot`] (or feeds entries through
//! [`CheatSheet::add_entry`] with `initial_load = true`), and an external writer takes
//! [`CheatSheet::to_snapshot`] when [`CheatSheet::is_modified`] says there is
//! something to store.
//!
//! ## Usage
//!
//! ```
//! use cheatsheet::{CheatSheet, Entry, EntryUpdate, Query};
//!
//! let mut sheet = CheatSheet::default();
//! let id = sheet
//!     .add_entry(Entry::new("git", "undo last commit", "git reset HEAD~", ["vcs"])?, false)?;
//! assert_eq!(id, 1);
//!
//! sheet.update_entry(id, EntryUpdate::new().tags(["vcs", "undo"]))?;
//! let found = sheet.query(&Query::all().primary("git").tag("undo"));
//! assert_eq!(found.len(), 1);
//!
//! sheet.remove_entry(id)?;
//! assert!(sheet.tag_set().is_empty());
//! # Ok::<(), cheatsheet::CheatSheetError>(())
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-owner. Share a sheet across threads only
//! behind an external lock.
//!
//! ## Module Overview
//!
//! - [`entry`]: [`Entry`], validation and AND/OR matching
//! - [`query`]: [`Query`] builder over match conditions
//! - [`update`]: [`EntryUpdate`] partial updates
//! - [`index`]: derived indexes and their single per-entry update routine
//! - [`sheet`]: the [`CheatSheet`] collection
//! - [`snapshot`]: loader/writer boundary record
//! - [`config`]: TOML configuration
//! - [`error`]: error types

pub mod config;
pub mod entry;
pub mod error;
pub mod index;
pub mod query;
pub mod sheet;
pub mod snapshot;
pub mod update;

pub use config::CheatSheetConfig;
pub use entry::{Entry, EntryId, SearchMode};
pub use error::{CheatSheetError, Result};
pub use query::Query;
pub use sheet::CheatSheet;
pub use snapshot::SheetSnapshot;
pub use update::EntryUpdate;
