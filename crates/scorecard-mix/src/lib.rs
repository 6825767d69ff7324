//! Marketing Mix Allocation Model
//!
//! Per-channel budget allocation with live derived values.
//!
//! # Core Concepts
//!
//! - [`Allocation`]: a percentage share and its derived monetary amount
//! - [`MarketingMix`]: the copy-on-write channel → allocation mapping
//! - [`ChartSlice`]: read-only snapshot entry for proportional charts
//!
//! Every mutating operation consumes the mapping and returns a new one,
//! so callers always thread the most recent value through the next edit.
//! No operation fails: out-of-range percentages are clamped and stale
//! channel references are silent no-ops.
//!
//! # Example
//!
//! ```
//! use scorecard_mix::MarketingMix;
//!
//! let channels = vec!["Social Media".to_string(), "SEO".to_string()];
//! let mix = MarketingMix::initialize(&channels, 50_000.0)
//!     .set_percentage("Social Media", 60.0, 50_000.0)
//!     .set_percentage("SEO", 40.0, 50_000.0);
//!
//! assert!(mix.is_complete());
//! assert_eq!(mix.get("SEO").unwrap().amount, 20_000.0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod allocation;
mod mix;

pub use allocation::Allocation;
pub use mix::{ChartSlice, MarketingMix, MixSnapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
