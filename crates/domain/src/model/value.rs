// crates/domain/src/model/value.rs
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single cell as it appears in synthesized records. Numeric columns
/// carry `Number`; categorical columns and merged range tokens carry
/// `Text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Renders a number the way published records expect: whole values
/// drop the fractional part, so `34.0` prints as `34`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // total_cmp equality is bit equality, so hashing the bit
        // pattern stays consistent with Eq.
        match self {
            Self::Number(n) => {
                state.write_u8(0);
                n.to_bits().hash(state);
            }
            Self::Text(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

mod display {
    use std::fmt;

    use super::{Value, format_number};

    impl fmt::Display for Value {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Value::Number(n) => f.write_str(&format_number(*n)),
                Value::Text(s) => f.write_str(s),
            }
        }
    }
}
