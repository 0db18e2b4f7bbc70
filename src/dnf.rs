//! Conversion of rule expressions into disjunctive normal form.
//!
//! # Algorithm
//!
//! [`to_dnf`] walks the expression tree and combines the formulas of the
//! children at each node:
//!
//! - a literal `k` becomes `{ {k} }`;
//! - an OR node becomes the [`merge`] (union) of its children's formulas;
//! - an AND node becomes the [`expand`] (cross product) of its children's formulas.
//!
//! The cross product is where DNF blows up: `AND(OR(a1..a10), OR(b1..b10), OR(c1..c10))`
//! has a thousand clauses. Every expansion is therefore guarded by a `limit` on
//! the number of clauses it may produce. The exact result size is computed
//! before any clause is built, and an expansion that would exceed the limit
//! fails with [`DnfError::CapacityExceeded`] without doing any work.
//!
//! Running [`flatten`](crate::flatten::flatten) first keeps expansions small:
//! alternatives over the same key collapse into one literal and contribute no
//! branching at all.
//!
//! # Shared clauses
//!
//! Besides the clause set, [`expand`] records sub-clauses that recur across
//! several branches of the product in the formula's `shared` set:
//!
//! - the conjunction of all single-clause operands, when there is something to
//!   branch on and it has more than one literal;
//! - every multi-literal clause of a branching operand, when there are at least
//!   two branching operands.
//!
//! These are hints for a downstream rule compiler and do not change the
//! meaning of the formula.
//!
//! # Example
//!
//! ```
//! use ccs_dnf::ast::Expr;
//! use ccs_dnf::dnf::to_dnf;
//! use ccs_dnf::types::Key;
//!
//! let expr = Expr::and([
//!     Expr::or([Expr::literal(Key::single("role", "web")), Expr::literal(Key::single("role", "db"))]),
//!     Expr::literal(Key::single("env", "prod")),
//! ]);
//! let dnf = to_dnf(&expr, 100).unwrap();
//! assert_eq!(dnf.len(), 2);
//! ```

use std::collections::BTreeSet;

use log::debug;
use num_bigint::BigUint;

use crate::ast::{Expr, Op};
use crate::clause::Clause;
use crate::config::DnfConfig;
use crate::error::DnfError;
use crate::flatten::flatten;
use crate::formula::{normalize, Formula};

/// Converts `expr` into DNF.
///
/// `limit` bounds the clause count of each individual AND expansion, not of
/// the whole result.
pub fn to_dnf(expr: &Expr, limit: usize) -> Result<Formula, DnfError> {
    match expr {
        Expr::Literal(key) => Ok(Formula::literal(key.clone())),
        Expr::Operator(Op::Or, children) => {
            debug!("to_dnf: OR over {} children", children.len());
            let forms = children
                .iter()
                .map(|c| to_dnf(c, limit))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(merge(forms))
        }
        Expr::Operator(Op::And, children) => {
            debug!("to_dnf: AND over {} children", children.len());
            let forms = children
                .iter()
                .map(|c| to_dnf(c, limit))
                .collect::<Result<Vec<_>, _>>()?;
            expand(limit, &forms)
        }
    }
}

/// Runs the full pipeline: optional [`flatten`], then [`to_dnf`] with the
/// configured limit.
pub fn to_dnf_with_config(expr: &Expr, config: &DnfConfig) -> Result<Formula, DnfError> {
    debug!("to_dnf_with_config(config = {:?})", config);
    if config.flatten {
        to_dnf(&flatten(expr), config.limit)
    } else {
        to_dnf(expr, config.limit)
    }
}

/// Disjunction of formulas.
///
/// Clause sets and shared sets are unioned, then normalized. Merging no
/// formulas at all gives the empty (false) formula.
pub fn merge(forms: impl IntoIterator<Item = Formula>) -> Formula {
    let mut clauses = BTreeSet::new();
    let mut shared = BTreeSet::new();
    for f in forms {
        let (c, s) = f.into_parts();
        clauses.extend(c);
        shared.extend(s);
    }
    debug!("merge: {} clauses, {} shared", clauses.len(), shared.len());
    normalize(Formula::with_shared(clauses, shared))
}

/// Conjunction of formulas: the cross product of their clause sets.
///
/// Every result clause is the union of one clause picked from each operand.
/// Conjoining no formulas at all gives the formula with a single empty
/// (true) clause.
///
/// # Errors
///
/// Returns [`DnfError::CapacityExceeded`] if the product of the operands'
/// clause counts is greater than `limit`. The check happens before any
/// clause is built.
pub fn expand(limit: usize, forms: &[Formula]) -> Result<Formula, DnfError> {
    debug!("expand(limit = {}, forms = {})", limit, forms.len());

    // Single-clause operands appear in every result clause.
    let mut common = Clause::empty();
    let mut nontrivial = 0usize;
    let mut size = BigUint::from(1u32);
    for f in forms {
        size *= BigUint::from(f.len());
        match f.sole() {
            Some(c) => common = common.union(c),
            None if f.len() > 1 => nontrivial += 1,
            None => {}
        }
    }
    debug!("expand: {} nontrivial, common = {}, size = {}", nontrivial, common, size);

    if size > BigUint::from(limit) {
        debug!("expand: size {} exceeds limit {}", size, limit);
        return Err(DnfError::CapacityExceeded { size, limit });
    }
    if forms.iter().any(Formula::is_empty) {
        return Ok(Formula::empty());
    }

    let clauses = forms.iter().rev().fold(BTreeSet::from([Clause::empty()]), |rest, f| {
        f.iter()
            .flat_map(|c1| rest.iter().map(move |c2| c1.union(c2)))
            .collect::<BTreeSet<_>>()
    });

    let mut shared: BTreeSet<Clause> = forms.iter().flat_map(|f| f.shared().iter().cloned()).collect();
    if nontrivial > 0 && common.len() > 1 {
        shared.insert(common);
    }
    if nontrivial > 1 {
        for f in forms.iter().filter(|f| f.len() > 1) {
            shared.extend(f.iter().filter(|c| c.len() > 1).cloned());
        }
    }

    Ok(normalize(Formula::with_shared(clauses, shared)))
}
