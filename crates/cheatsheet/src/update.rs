//! Partial entry updates.

use std::collections::BTreeSet;

use crate::entry::Entry;

/// Fields to replace on an existing entry. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub primary: Option<String>,
    pub clue: Option<String>,
    pub answer: Option<String>,
    pub tags: Option<BTreeSet<String>>,
}

impl EntryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    pub fn clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.clue.is_none()
            && self.answer.is_none()
            && self.tags.is_none()
    }

    /// Writes the supplied fields into `entry`. Does not validate.
    pub(crate) fn apply_to(self, entry: &mut Entry) {
        if let Some(primary) = self.primary {
            entry.primary = primary;
        }
        if let Some(clue) = self.clue {
            entry.clue = clue;
        }
        if let Some(answer) = self.answer {
            entry.answer = answer;
        }
        if let Some(tags) = self.tags {
            entry.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update() {
        assert!(EntryUpdate::new().is_empty());
        assert!(!EntryUpdate::new().answer("42").is_empty());
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut entry = Entry::new("math", "6 * 7", "41", ["arithmetic"]).unwrap();
        EntryUpdate::new().answer("42").apply_to(&mut entry);
        assert_eq!(entry.answer, "42");
        assert_eq!(entry.clue, "6 * 7");
        assert_eq!(entry.primary, "math");
        assert!(entry.has_tag("arithmetic"));
    }

    #[test]
    fn test_apply_can_leave_entry_invalid() {
        let mut entry = Entry::new("math", "6 * 7", "42", ["arithmetic"]).unwrap();
        EntryUpdate::new().tags(Vec::<String>::new()).apply_to(&mut entry);
        assert!(entry.tags.is_empty());
        assert!(entry.validate().is_err());
    }
}
