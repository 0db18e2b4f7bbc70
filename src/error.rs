use std::fmt;

use num_bigint::BigUint;

/// Error type for DNF conversion.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DnfError {
    /// Expanding an AND node would produce `size` clauses, more than `limit`.
    ///
    /// The size is exact, even when it does not fit a machine integer.
    CapacityExceeded { size: BigUint, limit: usize },
}

impl fmt::Display for DnfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnfError::CapacityExceeded { size, limit } => write!(
                f,
                "Expanded form would have {} clauses, which is more than the limit of {}. \
                 Consider increasing the limit or stratifying this rule.",
                size, limit
            ),
        }
    }
}

impl std::error::Error for DnfError {}
