use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability tag carried by every acquisition.
///
/// Strategies accept or reject acquisitions by tag at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionKind {
    /// Uninformative baseline; scores do not depend on model confidence.
    Random,
    /// Predictive entropy of the MC-averaged distribution.
    Entropy,
    /// Mutual information between predictions and model parameters.
    Bald,
}

impl AcquisitionKind {
    pub const ALL: [AcquisitionKind; 3] = [Self::Random, Self::Entropy, Self::Bald];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Entropy => "entropy",
            Self::Bald => "bald",
        }
    }
}

impl fmt::Display for AcquisitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
