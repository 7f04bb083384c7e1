//! Result ranking.
//!
//! Featured records first (higher rank wins), then by category label.

use std::cmp::Ordering;

use crate::domain::ToolRecord;

/// Total order used to rank results.
///
/// Descending featured rank, then ascending category label.
pub fn compare(a: &ToolRecord, b: &ToolRecord) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| a.category.cmp(&b.category))
}

/// Stable sort of a result list; ties keep their input order
pub fn rank(tools: &mut [&ToolRecord]) {
    tools.sort_by(|a, b| compare(a, b));
}
