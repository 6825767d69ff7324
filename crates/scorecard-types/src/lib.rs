//! Scorecard Foundation Types
//!
//! Shared building blocks for the scorecard workspace:
//!
//! - [`ScorecardId`]: opaque record identifier (ULID for sortability)
//! - [`EditableList<T>`]: ordered list value type with index-addressed edits
//! - Currency helpers: [`format_amount`] / [`parse_amount`]

#![warn(unreachable_pub)]

mod currency;
mod id;
mod list;

pub use currency::{format_amount, parse_amount};
pub use id::{IdError, ScorecardId};
pub use list::EditableList;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
