use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Assignment, Key};

/// A conjunction of literals.
///
/// Several keys with the same name may coexist in one clause; no merging of
/// overlapping keys is done at this layer.
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Clause {
    keys: BTreeSet<Key>,
}

impl Clause {
    /// The empty clause (vacuously true).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        keys.into_iter().collect()
    }

    pub fn unit(key: Key) -> Self {
        Clause::new([key])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the only key of a unit clause.
    pub fn sole(&self) -> Option<&Key> {
        if self.keys.len() == 1 {
            self.keys.first()
        } else {
            None
        }
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Conjunction of two clauses.
    pub fn union(&self, other: &Clause) -> Clause {
        self.keys.union(&other.keys).cloned().collect()
    }

    pub fn is_subset(&self, other: &Clause) -> bool {
        self.keys.is_subset(&other.keys)
    }

    /// A clause holds when every one of its keys matches.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        self.keys.iter().all(|k| k.matches(assignment))
    }
}

impl FromIterator<Key> for Clause {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Clause {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Key;
    type IntoIter = std::collections::btree_set::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, k) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", k)?;
        }
        write!(f, "}}")
    }
}
