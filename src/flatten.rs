//! Associativity flattening and literal merging of rule expressions.

use std::collections::{BTreeMap, BTreeSet};

use crate::ast::{Expr, Op};
use crate::types::Key;

/// Returns an expression equivalent to `expr` in which:
///
/// - children with the same operator as their parent are inlined, bottom-up,
///   so `AND(AND(a, b), c)` becomes `AND(a, b, c)`;
/// - under an OR node, literal children with the same key name are merged into
///   one literal over the union of their values, so
///   `OR(role in {web}, role in {db})` becomes `role in {db, web}`;
/// - an operator node left with a single child is replaced by that child.
///
/// Merged literals follow the remaining children, ordered by key name.
/// Literals under an AND node are never merged.
///
/// `flatten` is idempotent.
pub fn flatten(expr: &Expr) -> Expr {
    let (op, children) = match expr {
        Expr::Literal(_) => return expr.clone(),
        Expr::Operator(op, children) => (*op, children),
    };

    let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut new_children: Vec<Expr> = Vec::with_capacity(children.len());

    let mut add_child = |e: Expr| match e {
        Expr::Literal(key) if op == Op::Or => {
            grouped
                .entry(key.name().to_string())
                .or_default()
                .extend(key.values().iter().cloned());
        }
        e => new_children.push(e),
    };

    for child in children.iter().map(flatten) {
        match child {
            Expr::Operator(child_op, grandchildren) if child_op == op => {
                grandchildren.into_iter().for_each(&mut add_child);
            }
            child => add_child(child),
        }
    }

    new_children.extend(grouped.into_iter().map(|(name, values)| Expr::Literal(Key::new(name, values))));

    if new_children.len() == 1 {
        if let Some(only) = new_children.pop() {
            return only;
        }
    }
    Expr::Operator(op, new_children)
}
