//! Error types for scorecard-core
//!
//! The value-type models never fail; errors exist only at the
//! collaborator surfaces: record lookup, plan limits, download
//! accounting, and share gating.

use scorecard_types::ScorecardId;

/// Main scorecard error type
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    /// No record with the given id
    #[error("scorecard not found: {0}")]
    NotFound(ScorecardId),

    /// Plan's scorecard count limit hit
    #[error("scorecard limit reached (max: {0})")]
    ScorecardLimitReached(usize),

    /// Plan's download quota used up
    #[error("download limit exhausted")]
    DownloadsExhausted,

    /// Plan does not permit sharing
    #[error("sharing not allowed on this plan")]
    SharingNotAllowed,
}

impl ScorecardError {
    /// Check if the error is a plan limit (upgradeable, not a fault)
    #[inline]
    #[must_use]
    pub fn is_plan_limit(&self) -> bool {
        matches!(
            self,
            Self::ScorecardLimitReached(_) | Self::DownloadsExhausted | Self::SharingNotAllowed
        )
    }
}
