//! Application and version records as served by the catalog API.
//!
//! Records are read-only snapshots: they are decoded once and never mutated
//! by the resolver, classifier or catalog.

mod app;
mod de;
mod version;

pub use app::AppRecord;
pub use version::{parse_size_str, VersionRecord};

/// Returns `Some(mb)` only for a usable size: finite and strictly positive.
///
/// The store writes `0` for "unknown size", so zero counts as absent.
pub(crate) fn positive_size(mb: f64) -> Option<f64> {
    (mb.is_finite() && mb > 0.0).then_some(mb)
}
