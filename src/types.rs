//! Key-membership literals and the assignments they are evaluated against.
//!
//! A [`Key`] is the atomic predicate of a rule expression: "attribute `name`
//! evaluates to some value in `values`". Value sets are kept ordered, so two
//! keys built from the same values in a different order compare equal and
//! print identically.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A positive membership literal: `name in {values...}`.
///
/// # Invariants
///
/// - Two keys are equal iff they have the same name and the same value set.
/// - Ordering is by name first, then by value set, so clauses built from keys
///   iterate in a reproducible order.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Key {
    name: String,
    values: BTreeSet<String>,
}

impl Key {
    /// Creates a new key matching any of the given values.
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Key {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a key matching exactly one value.
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Key::new(name, [value.into()])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    /// Returns `true` if `assignment` maps this key's name to one of its values.
    pub fn matches(&self, assignment: &Assignment) -> bool {
        assignment.get(&self.name).is_some_and(|v| self.values.contains(v))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {{", self.name)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "}}")
    }
}

/// A total or partial mapping from attribute names to a single value.
///
/// Used as the oracle against which expressions, clauses and formulas are
/// evaluated when checking logical equivalence.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    values: BTreeMap<String, String>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`Assignment::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&String> {
        self.values.get(name)
    }
}

impl<N, V> FromIterator<(N, V)> for Assignment
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Assignment {
            values: iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect(),
        }
    }
}
