//! Query conditions.
//!
//! A [`Query`] bundles the three inputs of [`Entry::matches`](crate::entry::Entry::matches)
//! so callers can build a search once and run it against a whole sheet.

use std::collections::BTreeSet;

use crate::entry::SearchMode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub mode: SearchMode,
    pub primary: Option<String>,
    pub tags: BTreeSet<String>,
}

impl Query {
    /// An empty query in the given mode.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            primary: None,
            tags: BTreeSet::new(),
        }
    }

    /// Convenience: every condition must hold.
    pub fn all() -> Self {
        Self::new(SearchMode::And)
    }

    /// Convenience: any condition may hold.
    pub fn any() -> Self {
        Self::new(SearchMode::Or)
    }

    pub fn primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// True when neither a primary nor any tag is set.
    pub fn is_unconstrained(&self) -> bool {
        self.primary.as_deref().map_or(true, str::is_empty) && self.tags.is_empty()
    }
}
