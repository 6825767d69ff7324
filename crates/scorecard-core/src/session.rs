//! Mock session flow
//!
//! Real authentication is out of scope: any credentials produce a
//! free-tier session for the stub account, the way the login form stubs
//! it. Download accounting against the plan quota is real.

use crate::error::ScorecardError;
use crate::plan::{Plan, PlanKind};
use serde::{Deserialize, Serialize};

/// Authenticated (mock) user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Account plan tier
    pub plan: PlanKind,
}

/// An active session with download accounting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The session's user
    pub user: User,
    downloads_remaining: usize,
}

impl Session {
    /// Log in with credentials (mock: always succeeds as the stub user)
    #[must_use]
    pub fn log_in(email: impl Into<String>, _password: &str) -> Self {
        let email = email.into();
        tracing::debug!(%email, "session opened");
        Self::for_user(User {
            name: "John Doe".to_string(),
            email,
            plan: PlanKind::Free,
        })
    }

    /// Sign up with credentials (mock: same path as login)
    #[must_use]
    pub fn sign_up(email: impl Into<String>, password: &str) -> Self {
        Self::log_in(email, password)
    }

    /// Open a session for a prepared user
    #[must_use]
    pub fn for_user(user: User) -> Self {
        let downloads_remaining = user.plan.limits().max_downloads;
        Self {
            user,
            downloads_remaining,
        }
    }

    /// This session's plan limits
    #[inline]
    #[must_use]
    pub fn plan(&self) -> Plan {
        self.user.plan.limits()
    }

    /// Downloads left in the quota
    #[inline]
    #[must_use]
    pub fn downloads_remaining(&self) -> usize {
        self.downloads_remaining
    }

    /// Consume one download from the quota
    ///
    /// # Errors
    /// - `ScorecardError::DownloadsExhausted` when the quota is used up
    pub fn record_download(&mut self) -> Result<usize, ScorecardError> {
        if self.downloads_remaining == 0 {
            tracing::warn!(user = %self.user.email, "download quota exhausted");
            return Err(ScorecardError::DownloadsExhausted);
        }
        self.downloads_remaining -= 1;
        tracing::debug!(
            user = %self.user.email,
            remaining = self.downloads_remaining,
            "download recorded"
        );
        Ok(self.downloads_remaining)
    }
}
