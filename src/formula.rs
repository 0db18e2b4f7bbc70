//! Disjunctive normal form formulas.
//!
//! A [`Formula`] is a set of [`Clause`]s, any one of which satisfies it. Next to
//! the clause set it carries a `shared` set: sub-clauses that recur across
//! several disjuncts and may be factored out by a downstream rule compiler.
//! The shared set carries no logical meaning.
//!
//! Formulas are built in one step from their clause set and shared set and are
//! never mutated afterwards; every combinator produces a fresh value.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::clause::Clause;
use crate::types::{Assignment, Key};

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Formula {
    clauses: BTreeSet<Clause>,
    shared: BTreeSet<Clause>,
}

impl Formula {
    /// The empty formula (no clauses, logically false).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The formula holding exactly one empty clause (logically true).
    pub fn tautology() -> Self {
        Formula::new([Clause::empty()])
    }

    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Self {
        Formula::with_shared(clauses, [])
    }

    pub fn with_shared(
        clauses: impl IntoIterator<Item = Clause>,
        shared: impl IntoIterator<Item = Clause>,
    ) -> Self {
        Formula {
            clauses: clauses.into_iter().collect(),
            shared: shared.into_iter().collect(),
        }
    }

    /// The formula `{ {key} }`.
    pub fn literal(key: Key) -> Self {
        Formula::new([Clause::unit(key)])
    }

    pub fn clauses(&self) -> &BTreeSet<Clause> {
        &self.clauses
    }

    pub fn shared(&self) -> &BTreeSet<Clause> {
        &self.shared
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the only clause of a single-clause formula.
    pub fn sole(&self) -> Option<&Clause> {
        if self.clauses.len() == 1 {
            self.clauses.first()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// A formula holds when at least one of its clauses holds.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().any(|c| c.eval(assignment))
    }

    pub fn into_parts(self) -> (BTreeSet<Clause>, BTreeSet<Clause>) {
        (self.clauses, self.shared)
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Clause;
    type IntoIter = std::collections::btree_set::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "false");
        }
        for (i, c) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Canonicalizes a formula.
///
/// - Duplicate clauses collapse (the clause set is a set).
/// - A clause is dropped when another clause of the formula is a strict subset
///   of it, since `c | d == d` whenever `d` implies less than `c`.
/// - Shared entries survive only if they have more than one literal and are a
///   subset of at least one remaining clause.
///
/// The result is logically equivalent to the input and `normalize` is
/// idempotent.
pub fn normalize(formula: Formula) -> Formula {
    let (clauses, shared) = formula.into_parts();
    let before = clauses.len();

    let kept: BTreeSet<Clause> = clauses
        .iter()
        .filter(|c| !clauses.iter().any(|d| d.len() < c.len() && d.is_subset(c)))
        .cloned()
        .collect();

    let shared: BTreeSet<Clause> = shared
        .into_iter()
        .filter(|s| s.len() > 1 && kept.iter().any(|c| s.is_subset(c)))
        .collect();

    if kept.len() != before {
        debug!("normalize: dropped {} subsumed clauses", before - kept.len());
    }

    Formula { clauses: kept, shared }
}
