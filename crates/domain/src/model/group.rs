// crates/domain/src/model/group.rs

/// A subset of dataset rows, held as indices. Groups are created as
/// the full universe or by splitting a parent, and are never mutated
/// once they retire to the finished list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    indices: Vec<usize>,
}

impl Group {
    /// The group containing every row of a dataset with `rows` rows.
    pub fn universe(rows: usize) -> Self {
        Self { indices: (0..rows).collect() }
    }

    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}
