//! Ordered, uniquely named collection of acquisitions owned by one strategy.

use crate::errors::StrategyError;
use crate::models::AcquisitionKind;
use crate::traits::IAcquisition;

/// Acquisitions keyed by name, in insertion order.
///
/// Names are unique. Two acquisitions of the same kind need explicit names
/// through [`AcquisitionSet::from_named`].
#[derive(Debug)]
pub struct AcquisitionSet {
    entries: Vec<(String, Box<dyn IAcquisition>)>,
}

impl AcquisitionSet {
    /// Build a set naming each acquisition by `IAcquisition::name`.
    pub fn from_sequence<I>(acquisitions: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = Box<dyn IAcquisition>>,
    {
        Self::from_named(
            acquisitions
                .into_iter()
                .map(|acquisition| (acquisition.name().to_string(), acquisition)),
        )
    }

    /// Build a set from explicit `(name, acquisition)` pairs.
    pub fn from_named<I, S>(named: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = (S, Box<dyn IAcquisition>)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, Box<dyn IAcquisition>)> = Vec::new();
        for (name, acquisition) in named {
            let name = name.into();
            if entries.iter().any(|(existing, _)| *existing == name) {
                return Err(StrategyError::DuplicateAcquisition { name });
            }
            entries.push((name, acquisition));
        }

        if entries.is_empty() {
            return Err(StrategyError::NoAcquisitions);
        }
        Ok(Self { entries })
    }

    /// Check every member against the kinds a strategy accepts.
    pub fn ensure_kinds(&self, accepted: &[AcquisitionKind]) -> Result<(), StrategyError> {
        for (name, acquisition) in &self.entries {
            if !accepted.contains(&acquisition.kind()) {
                let expected = accepted
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(" | ");
                return Err(StrategyError::AcquisitionMismatch {
                    name: name.clone(),
                    expected,
                    actual: format!("{acquisition:?}"),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&dyn IAcquisition> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, acquisition)| acquisition.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn IAcquisition)> {
        self.entries
            .iter()
            .map(|(name, acquisition)| (name.as_str(), acquisition.as_ref()))
    }
}
