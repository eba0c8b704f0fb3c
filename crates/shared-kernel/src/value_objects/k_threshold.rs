// crates/shared-kernel/src/value_objects/k_threshold.rs
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Minimum group size for k-anonymity. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KThreshold(usize);

impl KThreshold {
    pub fn new(value: usize) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "k must be at least 1".to_string(),
            });
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// True when a group of `size` members satisfies the threshold.
    #[inline]
    pub const fn admits(self, size: usize) -> bool {
        size >= self.0
    }
}

mod display {
    use std::fmt;

    use super::KThreshold;

    impl fmt::Display for KThreshold {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.get())
        }
    }
}
