// crates/domain/src/analytics/split.rs
use hashbrown::HashSet;
use kanon_shared_kernel::DomainResult;

use crate::model::{ColumnData, Dataset, Group};

/// Divides one group into two along a single column.
pub struct Splitter;

impl Splitter {
    /// Exact two-way partition of `group` by `column`: every row lands
    /// on exactly one side. A single-valued group produces one empty
    /// side; rejecting that is the validator's job, not the splitter's.
    pub fn split(dataset: &Dataset, column: &str, group: &Group) -> DomainResult<(Group, Group)> {
        match dataset.column(column)? {
            ColumnData::Categorical(values) => Ok(Self::split_categorical(values, group)),
            ColumnData::Numeric(values) => Ok(Self::split_numeric(values, group)),
        }
    }

    /// Cuts the sorted distinct values at the midpoint. With an odd
    /// count the middle value joins the right half.
    fn split_categorical(values: &[String], group: &Group) -> (Group, Group) {
        let mut distinct: Vec<&str> = group
            .iter()
            .map(|row| values[row].as_str())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        distinct.sort_unstable();

        let left_values: HashSet<&str> = distinct[..distinct.len() / 2].iter().copied().collect();
        let (left, right): (Vec<usize>, Vec<usize>) =
            group.iter().partition(|&row| left_values.contains(values[row].as_str()));
        (Group::from_indices(left), Group::from_indices(right))
    }

    /// Rows strictly below the median go left; the rest, median
    /// included, go right.
    fn split_numeric(values: &[f64], group: &Group) -> (Group, Group) {
        let median = Self::median(values, group);
        let (left, right): (Vec<usize>, Vec<usize>) =
            group.iter().partition(|&row| values[row] < median);
        (Group::from_indices(left), Group::from_indices(right))
    }

    /// Median with the even-count convention of averaging the two
    /// middle values, so [10, 10, 50, 60] has median 30.
    fn median(values: &[f64], group: &Group) -> f64 {
        let mut sorted: Vec<f64> = group.iter().map(|row| values[row]).collect();
        if sorted.is_empty() {
            return 0.0;
        }
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        }
    }
}
