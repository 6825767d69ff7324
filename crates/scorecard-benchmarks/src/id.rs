//! Prefixed identifiers for benchmarks and initiatives
//!
//! Record ids carry a type prefix (`BM-`, `IN-`) in their string form,
//! matching the persisted scorecard layout.

use scorecard_types::IdError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ulid::Ulid;

/// Unique benchmark identifier; renders as `BM-<ulid>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BenchmarkId(pub Ulid);

impl BenchmarkId {
    /// String prefix for this id type
    pub const PREFIX: &'static str = "BM-";

    /// Generate new benchmark ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for BenchmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl From<BenchmarkId> for String {
    fn from(id: BenchmarkId) -> Self {
        id.to_string()
    }
}

impl FromStr for BenchmarkId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(Self::PREFIX).ok_or_else(|| IdError::MissingPrefix {
            expected: Self::PREFIX,
            input: s.to_string(),
        })?;
        Ulid::from_str(raw)
            .map(Self)
            .map_err(|_| IdError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for BenchmarkId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Unique initiative identifier; renders as `IN-<ulid>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct InitiativeId(pub Ulid);

impl InitiativeId {
    /// String prefix for this id type
    pub const PREFIX: &'static str = "IN-";

    /// Generate new initiative ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for InitiativeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InitiativeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl From<InitiativeId> for String {
    fn from(id: InitiativeId) -> Self {
        id.to_string()
    }
}

impl FromStr for InitiativeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(Self::PREFIX).ok_or_else(|| IdError::MissingPrefix {
            expected: Self::PREFIX,
            input: s.to_string(),
        })?;
        Ulid::from_str(raw)
            .map(Self)
            .map_err(|_| IdError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for InitiativeId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_id_display_prefix() {
        let id = BenchmarkId::new();
        assert!(id.to_string().starts_with("BM-"));
    }

    #[test]
    fn benchmark_id_round_trip() {
        let id = BenchmarkId::new();
        let parsed: BenchmarkId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn benchmark_id_requires_prefix() {
        let id = InitiativeId::new();
        let result = id.to_string().parse::<BenchmarkId>();
        assert!(matches!(result, Err(IdError::MissingPrefix { .. })));
    }

    #[test]
    fn initiative_id_serde_round_trip() {
        let id = InitiativeId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.contains("IN-"));

        let parsed: InitiativeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
