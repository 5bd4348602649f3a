//! Output of a strategy query.

use serde::{Deserialize, Serialize};

/// Pool indices chosen by one acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub acquisition: String,
    pub indices: Vec<usize>,
}

/// Acquisition name → selected pool indices, in acquisition insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    selections: Vec<Selection>,
}

impl SelectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the indices for `acquisition`, replacing any earlier entry.
    pub fn insert(&mut self, acquisition: impl Into<String>, indices: Vec<usize>) {
        let acquisition = acquisition.into();
        match self
            .selections
            .iter_mut()
            .find(|selection| selection.acquisition == acquisition)
        {
            Some(existing) => existing.indices = indices,
            None => self.selections.push(Selection {
                acquisition,
                indices,
            }),
        }
    }

    pub fn get(&self, acquisition: &str) -> Option<&[usize]> {
        self.selections
            .iter()
            .find(|selection| selection.acquisition == acquisition)
            .map(|selection| selection.indices.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.selections
            .iter()
            .map(|selection| selection.acquisition.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
