//! Initiatives: planned action items nested under a benchmark

use crate::id::InitiativeId;
use serde::{Deserialize, Serialize};

/// Execution difficulty, rendered as a 1..=3 level strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Difficulty {
    /// Level 1
    Low,
    /// Level 2
    Medium,
    /// Level 3
    High,
}

impl Difficulty {
    /// Numeric level (1..=3)
    #[inline]
    #[must_use]
    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Low => 1,
            Difficulty::Medium => 2,
            Difficulty::High => 3,
        }
    }

    /// Build from a numeric level
    #[inline]
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Low),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::High),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Low
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| format!("difficulty level out of range: {level}"))
    }
}

/// Approval status of an initiative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InitiativeStatus {
    /// Awaiting review
    Pending,
    /// Approved for execution
    Approved,
    /// Declined
    Rejected,
}

impl Default for InitiativeStatus {
    fn default() -> Self {
        InitiativeStatus::Pending
    }
}

/// A planned action item under a benchmark
///
/// `budget_percent` is derived from `cost` and the shared total budget;
/// it is recomputed on every cost or budget change, never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    /// Initiative identifier
    pub id: InitiativeId,
    /// Short description of the action
    pub name: String,
    /// Planned cost
    pub cost: f64,
    /// Derived: `cost / total_budget * 100`
    pub budget_percent: f64,
    /// Execution difficulty
    pub difficulty: Difficulty,
    /// Assigned team members, unique
    pub personnel: Vec<String>,
    /// Approval status
    pub status: InitiativeStatus,
}

impl Initiative {
    /// Create a blank pending initiative
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: InitiativeId::new(),
            name: String::new(),
            cost: 0.0,
            budget_percent: 0.0,
            difficulty: Difficulty::default(),
            personnel: Vec::new(),
            status: InitiativeStatus::default(),
        }
    }

    /// Derived budget share for a cost under a total budget
    ///
    /// A non-positive budget yields 0 rather than dividing by zero.
    #[inline]
    #[must_use]
    pub fn derive_budget_percent(cost: f64, total_budget: f64) -> f64 {
        if total_budget > 0.0 {
            cost / total_budget * 100.0
        } else {
            0.0
        }
    }
}

impl Default for Initiative {
    fn default() -> Self {
        Self::new()
    }
}
