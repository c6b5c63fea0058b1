use std::rc::Rc;

use thiserror::Error;
use yew::functional::Reducible;

use crate::content::FaqEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccordionError {
    #[error("no FAQ entry with id {id} ({len} entries)")]
    UnknownEntry { id: usize, len: usize },
}

/// Which FAQ entry is open, if any.
///
/// A single optional id rather than a flag per entry: opening one entry
/// closes the previous one without any bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Option<usize>,
}

impl AccordionState {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, id: usize) -> bool {
        self.expanded == Some(id)
    }

    /// Collapses `id` if it is open, otherwise opens it.
    pub fn toggle(self, id: usize) -> Self {
        if self.is_expanded(id) {
            Self { expanded: None }
        } else {
            Self { expanded: Some(id) }
        }
    }

    /// Like [`toggle`](Self::toggle) but rejects ids missing from `entries`.
    pub fn toggle_within(self, entries: &[FaqEntry], id: usize) -> Result<Self, AccordionError> {
        check_entry(entries, id)?;
        Ok(self.toggle(id))
    }

    pub fn indicator(&self, id: usize) -> &'static str {
        if self.is_expanded(id) {
            "▲"
        } else {
            "▼"
        }
    }
}

/// Fails when `id` names no entry of `entries`.
pub fn check_entry(entries: &[FaqEntry], id: usize) -> Result<(), AccordionError> {
    if entries.iter().any(|entry| entry.id == id) {
        Ok(())
    } else {
        Err(AccordionError::UnknownEntry {
            id,
            len: entries.len(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    Toggle(usize),
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: AccordionAction) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(id) => Rc::new((*self).toggle(id)),
        }
    }
}
