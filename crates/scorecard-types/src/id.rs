//! Record identifiers

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ulid::Ulid;

/// Unique scorecard record identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScorecardId(pub Ulid);

impl ScorecardId {
    /// Generate new scorecard ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ScorecardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScorecardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScorecardId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_str(s)
            .map(Self)
            .map_err(|_| IdError::Malformed(s.to_string()))
    }
}

/// Identifier parsing errors
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Input is not a valid identifier
    #[error("malformed identifier: {0}")]
    Malformed(String),

    /// Input is missing the expected type prefix
    #[error("missing identifier prefix {expected:?}: {input}")]
    MissingPrefix {
        /// Expected prefix (e.g. "BM-")
        expected: &'static str,
        /// The offending input
        input: String,
    },
}
