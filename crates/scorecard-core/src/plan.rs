//! Account plans and their limits

use serde::{Deserialize, Serialize};

/// Account plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// Free tier
    Free,
    /// Paid tier
    Paid,
}

impl PlanKind {
    /// Limits for this tier
    #[inline]
    #[must_use]
    pub fn limits(&self) -> Plan {
        match self {
            PlanKind::Free => Plan {
                max_scorecards: Some(3),
                max_downloads: 3,
                can_share: true,
            },
            PlanKind::Paid => Plan {
                max_scorecards: None,
                max_downloads: 20,
                can_share: true,
            },
        }
    }
}

impl Default for PlanKind {
    fn default() -> Self {
        PlanKind::Free
    }
}

/// Concrete limits attached to a plan tier
///
/// `max_scorecards` of `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// Maximum scorecards, `None` for unlimited
    pub max_scorecards: Option<usize>,
    /// PDF download quota per session
    pub max_downloads: usize,
    /// Whether share links may be minted
    pub can_share: bool,
}
