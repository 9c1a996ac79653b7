//! Edit-in-place sessions.
//!
//! An [`EditSession`] keeps the committed record apart from a working draft. Field edits only
//! touch the draft; `save` copies it over the committed record and `cancel` throws it away.
//! Edits are not validated.

use crate::error::{Result, ShowcaseError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession<T: Clone> {
    committed: T,
    draft: T,
    editing: bool,
}

impl<T: Clone> EditSession<T> {
    pub fn new(record: T) -> Self {
        Self {
            draft: record.clone(),
            committed: record,
            editing: false,
        }
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Opens the draft. When already editing, the current draft is kept.
    pub fn begin(&mut self) {
        if !self.editing {
            self.draft = self.committed.clone();
            self.editing = true;
        }
    }

    pub fn draft_mut(&mut self) -> Result<&mut T> {
        if !self.editing {
            return Err(ShowcaseError::NotEditing);
        }
        Ok(&mut self.draft)
    }

    /// Discards the draft.
    pub fn cancel(&mut self) -> Result<()> {
        if !self.editing {
            return Err(ShowcaseError::NotEditing);
        }
        self.draft = self.committed.clone();
        self.editing = false;
        Ok(())
    }
}

impl<T: Clone + PartialEq> EditSession<T> {
    /// Commits the draft. Returns whether the committed record changed.
    pub fn save(&mut self) -> Result<bool> {
        if !self.editing {
            return Err(ShowcaseError::NotEditing);
        }
        let changed = self.draft != self.committed;
        self.committed = self.draft.clone();
        self.editing = false;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Record {
        name: String,
    }

    fn session() -> EditSession<Record> {
        EditSession::new(Record {
            name: "Alex".into(),
        })
    }

    #[test]
    fn save_commits_draft() {
        let mut s = session();
        s.begin();
        s.draft_mut().unwrap().name = "Sam".into();
        assert_eq!(s.committed().name, "Alex");

        assert!(s.save().unwrap());
        assert!(!s.is_editing());
        assert_eq!(s.committed().name, "Sam");
    }

    #[test]
    fn save_without_edits_reports_no_change() {
        let mut s = session();
        s.begin();
        assert!(!s.save().unwrap());

        s.begin();
        s.draft_mut().unwrap().name = "Alex".into();
        assert!(!s.save().unwrap());
        assert_eq!(s.committed().name, "Alex");
    }

    #[test]
    fn cancel_restores_committed() {
        let mut s = session();
        s.begin();
        s.draft_mut().unwrap().name = "Sam".into();
        s.cancel().unwrap();
        assert!(!s.is_editing());
        assert_eq!(s.draft().name, "Alex");
        assert_eq!(s.committed().name, "Alex");
    }

    #[test]
    fn edits_require_an_open_session() {
        let mut s = session();
        assert!(matches!(s.draft_mut(), Err(ShowcaseError::NotEditing)));
        assert!(matches!(s.save(), Err(ShowcaseError::NotEditing)));
        assert!(matches!(s.cancel(), Err(ShowcaseError::NotEditing)));
    }

    #[test]
    fn begin_while_editing_keeps_draft() {
        let mut s = session();
        s.begin();
        s.draft_mut().unwrap().name = "Sam".into();
        s.begin();
        assert_eq!(s.draft().name, "Sam");
    }

    #[test]
    fn empty_values_are_accepted() {
        let mut s = session();
        s.begin();
        s.draft_mut().unwrap().name.clear();
        assert!(s.save().unwrap());
        assert_eq!(s.committed().name, "");
    }
}
