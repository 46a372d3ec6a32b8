//! # Entries
//!
//! An [`Entry`] is one cheat sheet record: a primary category, a clue, an answer and
//! a non-empty set of tags. Fresh entries carry no id; the collection assigns one on
//! insertion and it never changes afterwards. Entries restored by a loader arrive
//! with their persisted id already set.
//!
//! ## Validation
//!
//! [`Entry::validate`] runs at construction and can be re-run any time. Fields are
//! public, so code that edits them in place (including
//! [`CheatSheet::update_entry`](crate::sheet::CheatSheet::update_entry)) can leave an
//! entry invalid until the next check. Writers call `validate` before persisting.
//!
//! ## Matching
//!
//! [`Entry::matches`] evaluates a primary/tags condition in one of two modes:
//!
//! | Mode | Matches when |
//! |------|--------------|
//! | [`SearchMode::And`] | primary unset or equal, **and** tags empty or a subset of the entry's tags |
//! | [`SearchMode::Or`]  | no condition given, **or** primary equal, **or** tags intersect |
//!
//! An empty primary string counts as unset.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CheatSheetError, Result};
use crate::query::Query;

/// Identifier assigned to an entry by its collection. Always positive.
pub type EntryId = u64;

/// Whether all match conditions must hold or any one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    And,
    #[default]
    Or,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::And => write!(f, "and"),
            SearchMode::Or => write!(f, "or"),
        }
    }
}

/// Accepts the legacy integer constants: `0` is AND, `1` is OR.
impl TryFrom<i64> for SearchMode {
    type Error = CheatSheetError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(SearchMode::And),
            1 => Ok(SearchMode::Or),
            other => Err(CheatSheetError::programming(
                "SearchMode::try_from",
                format!("invalid andor argument {}", other),
            )),
        }
    }
}

impl FromStr for SearchMode {
    type Err = CheatSheetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "all" | "0" => Ok(SearchMode::And),
            "or" | "any" | "1" => Ok(SearchMode::Or),
            _ => Err(CheatSheetError::programming(
                "SearchMode::from_str",
                format!("invalid andor argument {}", s),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub primary: String,
    pub clue: String,
    pub answer: String,
    pub tags: BTreeSet<String>,
    /// Set by the collection on first insertion, or by a loader for persisted entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
}

impl Entry {
    /// Creates a fresh entry with no id.
    pub fn new<I, T>(
        primary: impl Into<String>,
        clue: impl Into<String>,
        answer: impl Into<String>,
        tags: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::build(primary, clue, answer, tags, None)
    }

    /// Recreates an entry that already has an id, as a loader does for persisted state.
    pub fn restore<I, T>(
        id: EntryId,
        primary: impl Into<String>,
        clue: impl Into<String>,
        answer: impl Into<String>,
        tags: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::build(primary, clue, answer, tags, Some(id))
    }

    fn build<I, T>(
        primary: impl Into<String>,
        clue: impl Into<String>,
        answer: impl Into<String>,
        tags: I,
        id: Option<EntryId>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let entry = Self {
            primary: primary.into(),
            clue: clue.into(),
            answer: answer.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            id,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Checks that all required fields are non-empty and that the id, if any, is positive.
    ///
    /// Idempotent; fails with [`CheatSheetError::InvalidEntry`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.clue.is_empty() {
            return Err(CheatSheetError::invalid_entry("entry clue", "\"\""));
        }
        if self.primary.is_empty() {
            return Err(CheatSheetError::invalid_entry("primary", "\"\""));
        }
        if self.answer.is_empty() {
            return Err(CheatSheetError::invalid_entry("answer", "\"\""));
        }
        if self.tags.is_empty() {
            return Err(CheatSheetError::invalid_entry("tags", "{}"));
        }
        if self.id == Some(0) {
            return Err(CheatSheetError::invalid_entry("id", "0"));
        }
        Ok(())
    }

    /// Checks whether this entry satisfies the primary and tag conditions under `mode`.
    pub fn matches(
        &self,
        mode: SearchMode,
        primary: Option<&str>,
        tags: &BTreeSet<String>,
    ) -> bool {
        let primary = primary.filter(|p| !p.is_empty());

        match mode {
            SearchMode::And => {
                primary.map_or(true, |p| p == self.primary) && tags.is_subset(&self.tags)
            }
            SearchMode::Or => {
                (primary.is_none() && tags.is_empty())
                    || primary.is_some_and(|p| p == self.primary)
                    || !tags.is_disjoint(&self.tags)
            }
        }
    }

    pub fn matches_query(&self, query: &Query) -> bool {
        self.matches(query.mode, query.primary.as_deref(), &query.tags)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
