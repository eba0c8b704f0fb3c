// crates/domain/src/analytics/validate.rs
use kanon_shared_kernel::KThreshold;

use crate::model::Group;

/// Size gate applied to the two children of a proposed split. The
/// partitioner never consults it for the root group.
#[derive(Debug, Clone, Copy)]
pub struct GroupValidator {
    k: KThreshold,
}

impl GroupValidator {
    pub const fn new(k: KThreshold) -> Self {
        Self { k }
    }

    pub fn is_valid(&self, group: &Group) -> bool {
        self.k.admits(group.len())
    }

    pub const fn k(&self) -> KThreshold {
        self.k
    }
}
