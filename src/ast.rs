//! Rule expression trees.
//!
//! An [`Expr`] is either a single key-membership literal or an n-ary AND/OR
//! node over child expressions. Trees are built upstream (by a parser or by
//! hand) and are never mutated by the conversion routines.

use std::fmt;

use crate::types::{Assignment, Key};

/// Operator tag of an inner expression node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    And,
    Or,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::And => write!(f, "&"),
            Op::Or => write!(f, "|"),
        }
    }
}

/// A rule expression tree.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    /// A single literal.
    Literal(Key),
    /// An n-ary operator node. Child order is preserved.
    Operator(Op, Vec<Expr>),
}

impl Expr {
    pub fn literal(key: Key) -> Self {
        Expr::Literal(key)
    }

    pub fn and(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Operator(Op::And, children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Operator(Op::Or, children.into_iter().collect())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }

    /// Returns the operator tag, or `None` for a literal.
    pub fn op(&self) -> Option<Op> {
        match self {
            Expr::Literal(_) => None,
            Expr::Operator(op, _) => Some(*op),
        }
    }

    /// Returns the children of an operator node (empty for a literal).
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Literal(_) => &[],
            Expr::Operator(_, children) => children,
        }
    }

    /// Depth of the expression tree (0 for literals).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 0,
            Expr::Operator(_, children) => 1 + children.iter().map(Expr::depth).max().unwrap_or(0),
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Operator(_, children) => 1 + children.iter().map(Expr::size).sum::<usize>(),
        }
    }

    /// Evaluates the expression under the given assignment.
    ///
    /// An empty AND is true and an empty OR is false.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Literal(key) => key.matches(assignment),
            Expr::Operator(Op::And, children) => children.iter().all(|c| c.eval(assignment)),
            Expr::Operator(Op::Or, children) => children.iter().any(|c| c.eval(assignment)),
        }
    }

    /// Visits every literal key in the tree, left to right.
    pub fn keys(&self) -> Vec<&Key> {
        let mut keys = Vec::new();
        let mut stack = vec![self];
        while let Some(e) = stack.pop() {
            match e {
                Expr::Literal(key) => keys.push(key),
                Expr::Operator(_, children) => stack.extend(children.iter().rev()),
            }
        }
        keys
    }
}

impl From<Key> for Expr {
    fn from(key: Key) -> Self {
        Expr::Literal(key)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(key) => write!(f, "{}", key),
            Expr::Operator(op, children) => {
                write!(f, "(")?;
                for (i, c) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op)?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }
    }
}
