// crates/domain/src/analytics/metric.rs
use crate::model::Group;

/// Discernability penalty of a finished partitioning: the sum of
/// squared group sizes. A function of the size multiset only, so
/// traversal order cannot change it. Lower is better; a few oversized
/// groups cost more than many evenly sized ones.
pub fn discernability_metric(groups: &[Group]) -> u64 {
    groups
        .iter()
        .map(|group| {
            let size = group.len() as u64;
            size * size
        })
        .sum()
}
