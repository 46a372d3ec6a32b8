use thiserror::Error;

use crate::entry::EntryId;

/// Every failure the cheat sheet core can report.
///
/// None of these are recovered from inside the crate: they surface at the point of
/// detection and the caller decides what to do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheatSheetError {
    /// An entry failed field validation (bad input or corrupted persisted data).
    #[error("InvalidEntryError: Bad {field}: {value}")]
    InvalidEntry { field: &'static str, value: String },

    /// A lookup referenced an id that is not in the collection.
    #[error("InvalidIDError in method {method}: non-existent entry id {id}")]
    InvalidId { method: &'static str, id: EntryId },

    /// An internal consistency check failed.
    #[error("IllegalStateError in method {method}: {msg}")]
    IllegalState { method: &'static str, msg: String },

    /// The caller broke an API contract.
    #[error("ProgrammingError in method {method}: {msg}")]
    Programming { method: &'static str, msg: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl CheatSheetError {
    pub(crate) fn invalid_entry(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEntry {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn illegal_state(method: &'static str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Illegal state in {}: {}", method, msg);
        Self::IllegalState { method, msg }
    }

    pub(crate) fn programming(method: &'static str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Programming error in {}: {}", method, msg);
        Self::Programming { method, msg }
    }
}

pub type Result<T> = std::result::Result<T, CheatSheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_method() {
        let err = CheatSheetError::InvalidId {
            method: "CheatSheet::get_entry",
            id: 7,
        };
        assert_eq!(
            err.to_string(),
            "InvalidIDError in method CheatSheet::get_entry: non-existent entry id 7"
        );

        let err = CheatSheetError::programming("CheatSheet::add_entry", "New Entry has ID!");
        assert_eq!(
            err.to_string(),
            "ProgrammingError in method CheatSheet::add_entry: New Entry has ID!"
        );
    }

    #[test]
    fn test_invalid_entry_message() {
        let err = CheatSheetError::invalid_entry("clue", "\"\"");
        assert_eq!(err.to_string(), "InvalidEntryError: Bad clue: \"\"");
    }
}
