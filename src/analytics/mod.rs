//! Dashboard statistics and project filtering.
//!
//! Everything here is a pure function of a borrowed project snapshot: no
//! storage access, no state kept between calls, and no error paths.
//! Malformed numeric fields are skipped rather than coerced to zero.

pub mod filter;
pub mod normalize;
pub mod stats;

pub use filter::{
    filter_and_sort, filter_and_sort_refs, CriteriaParams, ProjectCriteria, RoiBand, SortKey,
};
pub use stats::{compute_stats, monthly_returns};
