//! Benchmarks & Goals
//!
//! Goal trackers with nested initiatives:
//!
//! - [`Benchmark`]: a named goal with timeline, metric, baseline and
//!   target, plus collapsible notes and an initiative table
//! - [`Initiative`]: a planned action item with cost, derived
//!   budget-percent, difficulty, personnel and approval status
//! - [`BenchmarkBoard`]: the copy-on-write benchmark list and all edit
//!   operations
//!
//! Like the allocation mapping, the board is a value type: every edit
//! consumes the board and returns the next one, and stale benchmark or
//! initiative ids are silent no-ops.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod benchmark;
mod board;
mod generate;
mod id;
mod initiative;

pub use benchmark::Benchmark;
pub use board::BenchmarkBoard;
pub use id::{BenchmarkId, InitiativeId};
pub use initiative::{Difficulty, Initiative, InitiativeStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
