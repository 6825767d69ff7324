//! Scorecard Core
//!
//! Ties the value-type models into a scorecard application:
//! - Assembles the persisted scorecard record (profile + mix + benchmarks)
//! - Keeps the derived state reconciled across model boundaries
//! - Enforces account plan limits (scorecard count, downloads, sharing)
//! - Manages the mock session flow
//! - Provides the repository seam a real deployment would implement
//!   against durable storage
//!
//! # Example
//!
//! ```rust,ignore
//! use scorecard_core::{InMemoryStore, ScorecardManager, Session};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), scorecard_core::ScorecardError> {
//! let session = Session::log_in("john@example.com", "secret");
//! let mut manager = ScorecardManager::new(session, Arc::new(InMemoryStore::new()));
//!
//! let mut scorecard = manager.new_scorecard().await?;
//! scorecard.set_channels(vec!["Social Media".to_string(), "SEO".to_string()]);
//! manager.save(&mut scorecard).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod manager;
pub mod plan;
pub mod scorecard;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use error::ScorecardError;
pub use manager::{ScorecardManager, ScorecardSummary};
pub use plan::{Plan, PlanKind};
pub use scorecard::Scorecard;
pub use session::{Session, User};
pub use store::{InMemoryStore, ScorecardRepository};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with scorecards
    pub use crate::{
        InMemoryStore, Plan, PlanKind, Scorecard, ScorecardError, ScorecardManager,
        ScorecardRepository, Session,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
