//! # ccs-dnf: Disjunctive Normal Form for rule expressions
//!
//! **`ccs-dnf`** converts boolean rule expressions over key-membership literals
//! (such as "`role` is one of {web, db}") into a canonical **Disjunctive Normal Form**:
//! a set of alternative clauses, any one of which satisfies the rule when all of its
//! literals match.
//!
//! ## Pipeline
//!
//! 1. **[`flatten`][crate::flatten::flatten]** inlines nested operators of the same kind
//!    and merges alternatives over the same key into one literal.
//! 2. **[`to_dnf`][crate::dnf::to_dnf]** converts the tree bottom-up, using
//!    [`merge`][crate::dnf::merge] for OR and [`expand`][crate::dnf::expand] for AND.
//! 3. Every intermediate [`Formula`][crate::formula::Formula] is passed through
//!    [`normalize`][crate::formula::normalize], which removes duplicate and subsumed clauses.
//!
//! AND expansion is a cross product and can explode. Each expansion is guarded by a
//! clause-count limit and fails with [`DnfError::CapacityExceeded`][crate::error::DnfError]
//! before doing any work when the limit would be exceeded.
//!
//! ## Basic Usage
//!
//! ```rust
//! use ccs_dnf::ast::Expr;
//! use ccs_dnf::config::DnfConfig;
//! use ccs_dnf::dnf::to_dnf_with_config;
//! use ccs_dnf::types::Key;
//!
//! // (role = web OR role = db) AND env = prod
//! let expr = Expr::and([
//!     Expr::or([
//!         Expr::literal(Key::single("role", "web")),
//!         Expr::literal(Key::single("role", "db")),
//!     ]),
//!     Expr::literal(Key::single("env", "prod")),
//! ]);
//!
//! // Flattening merges the two `role` alternatives, so a single clause remains.
//! let dnf = to_dnf_with_config(&expr, &DnfConfig::default()).unwrap();
//! assert_eq!(dnf.len(), 1);
//! assert_eq!(dnf.to_string(), "{env in {prod} & role in {db, web}}");
//! ```
//!
//! ## Core Components
//!
//! - **[`types`]**: [`Key`][crate::types::Key] literals and evaluation assignments.
//! - **[`ast`]**: rule expression trees.
//! - **[`clause`]**, **[`formula`]**: the DNF containers.
//! - **[`dnf`]**: the conversion itself.
//! - **[`stringval`]**: environment-variable interpolation for rule values.

pub mod ast;
pub mod clause;
pub mod config;
pub mod dnf;
pub mod error;
pub mod flatten;
pub mod formula;
pub mod stringval;
pub mod types;
