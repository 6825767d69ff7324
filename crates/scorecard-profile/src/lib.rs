//! Brand Profile
//!
//! The channel-list provider for the scorecard: company identity, total
//! budget, and four named tag lists (personnel, segments, products,
//! channels). The allocation mapping re-reconciles against the channel
//! list after any edit here; the profile itself never touches it.
//!
//! Profile field lists use a fixed schema addressed by [`ProfileField`]
//! instead of stringly-typed field lookup, so a typo cannot silently
//! create a new list.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod enrich;
mod profile;
mod validate;

pub use enrich::{sample_enrichment, EnrichmentData, CHANNEL_SUGGESTIONS};
pub use profile::{BrandProfile, ProfileField};
pub use validate::is_valid_domain;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
