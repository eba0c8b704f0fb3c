// crates/domain/src/analytics/partition.rs
use std::collections::VecDeque;

use kanon_shared_kernel::DomainResult;

use super::span::SpanCalculator;
use super::split::Splitter;
use super::validate::GroupValidator;
use crate::config::QuasiIdentifierSet;
use crate::model::{Dataset, Group};

/// Greedy multidimensional partitioner.
///
/// Groups travel through a FIFO queue. Each popped group is split
/// along the widest-spanning quasi-identifier column whose children
/// both satisfy the validator; a group no column can split retires to
/// the finished list. Every accepted split strictly shrinks both
/// children (an empty child never validates), so the loop terminates.
pub struct Partitioner<'a> {
    dataset: &'a Dataset,
    quasi: &'a QuasiIdentifierSet,
    validator: GroupValidator,
    scale: Vec<f64>,
}

impl<'a> Partitioner<'a> {
    /// Computes the whole-dataset baseline spans once; they stay fixed
    /// for the entire run. An absent quasi-identifier column surfaces
    /// here, before any splitting starts.
    pub fn new(
        dataset: &'a Dataset,
        quasi: &'a QuasiIdentifierSet,
        validator: GroupValidator,
    ) -> DomainResult<Self> {
        let universe = Group::universe(dataset.rows());
        let scale = SpanCalculator::spans(dataset, quasi.columns(), &universe)?;
        Ok(Self { dataset, quasi, validator, scale })
    }

    /// Runs the splitting loop to exhaustion, returning finished
    /// groups in retirement order. The root group is never validated,
    /// so a dataset smaller than k finishes as one undersized group.
    pub fn partition(&self) -> DomainResult<Vec<Group>> {
        let mut queue: VecDeque<Group> = VecDeque::new();
        queue.push_back(Group::universe(self.dataset.rows()));
        let mut finished: Vec<Group> = Vec::new();

        while let Some(group) = queue.pop_front() {
            match self.try_split(&group)? {
                Some((left, right)) => {
                    queue.push_back(left);
                    queue.push_back(right);
                }
                None => finished.push(group),
            }
        }

        Ok(finished)
    }

    /// First split acceptable to the validator, trying columns widest
    /// span first.
    fn try_split(&self, group: &Group) -> DomainResult<Option<(Group, Group)>> {
        for column in self.ranked_columns(group)? {
            let (left, right) = Splitter::split(self.dataset, column, group)?;
            if self.validator.is_valid(&left) && self.validator.is_valid(&right) {
                return Ok(Some((left, right)));
            }
        }
        Ok(None)
    }

    /// Quasi-identifier columns ordered by normalized span, descending.
    /// The sort is stable, so equal spans keep the declared column
    /// order rather than an arbitrary one.
    fn ranked_columns(&self, group: &Group) -> DomainResult<Vec<&'a str>> {
        let spans =
            SpanCalculator::normalized(self.dataset, self.quasi.columns(), group, &self.scale)?;
        let mut order: Vec<usize> = (0..spans.len()).collect();
        order.sort_by(|&a, &b| spans[b].total_cmp(&spans[a]));
        Ok(order.into_iter().map(|i| self.quasi.columns()[i].as_str()).collect())
    }
}
