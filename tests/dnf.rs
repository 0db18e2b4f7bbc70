//! End-to-end tests for flattening and DNF conversion.
//!
//! Equivalence checks use an assignment oracle: every combination of the
//! values mentioned in an expression (plus one foreign value and "unset")
//! is evaluated against both sides.

use std::collections::{BTreeMap, BTreeSet};

use ccs_dnf::ast::Expr;
use ccs_dnf::clause::Clause;
use ccs_dnf::config::DnfConfig;
use ccs_dnf::dnf::{expand, merge, to_dnf, to_dnf_with_config};
use ccs_dnf::error::DnfError;
use ccs_dnf::flatten::flatten;
use ccs_dnf::formula::Formula;
use ccs_dnf::types::{Assignment, Key};
use num_bigint::BigUint;

fn key(name: &str, values: &[&str]) -> Key {
    Key::new(name, values.iter().copied())
}

fn lit(name: &str, values: &[&str]) -> Expr {
    Expr::literal(key(name, values))
}

fn clause(keys: &[(&str, &str)]) -> Clause {
    keys.iter().map(|(n, v)| Key::single(*n, *v)).collect()
}

/// All assignments over the names and values occurring in `expr`.
fn assignments(expr: &Expr) -> Vec<Assignment> {
    let mut universe: BTreeMap<String, BTreeSet<Option<String>>> = BTreeMap::new();
    for k in expr.keys() {
        let values = universe.entry(k.name().to_string()).or_default();
        values.extend(k.values().iter().cloned().map(Some));
        values.insert(Some("<other>".to_string()));
        values.insert(None);
    }

    let mut result = vec![Assignment::new()];
    for (name, values) in universe {
        let mut next = Vec::with_capacity(result.len() * values.len());
        for a in &result {
            for v in &values {
                let mut a = a.clone();
                if let Some(v) = v {
                    a.set(name.clone(), v.clone());
                }
                next.push(a);
            }
        }
        result = next;
    }
    result
}

fn assert_equivalent_expr(lhs: &Expr, rhs: &Expr) {
    for a in assignments(lhs) {
        assert_eq!(lhs.eval(&a), rhs.eval(&a), "{} vs {} under {:?}", lhs, rhs, a);
    }
}

fn assert_equivalent_dnf(expr: &Expr, dnf: &Formula) {
    for a in assignments(expr) {
        assert_eq!(expr.eval(&a), dnf.eval(&a), "{} vs {} under {:?}", expr, dnf, a);
    }
}

fn sample_exprs() -> Vec<Expr> {
    vec![
        lit("a", &["1"]),
        Expr::or([lit("role", &["web"]), lit("role", &["db"])]),
        Expr::and([Expr::or([lit("role", &["web"]), lit("role", &["db"])]), lit("env", &["prod"])]),
        Expr::or([
            Expr::and([lit("a", &["1"]), Expr::and([lit("b", &["1"]), lit("a", &["2"])])]),
            Expr::or([lit("a", &["1", "3"]), Expr::or([lit("b", &["2"])])]),
            lit("a", &["2"]),
        ]),
        Expr::and([
            Expr::or([lit("x", &["1"]), Expr::and([lit("y", &["1"]), lit("z", &["1"])])]),
            Expr::or([lit("x", &["2"]), lit("y", &["2"])]),
            Expr::and([Expr::or([lit("z", &["1"]), lit("z", &["2"])])]),
        ]),
        Expr::and([]),
        Expr::or([]),
        Expr::and([Expr::or([]), lit("a", &["1"])]),
    ]
}

// ─── Flatten ───────────────────────────────────────────────────────────────────

#[test]
fn flatten_is_idempotent() {
    for e in sample_exprs() {
        let once = flatten(&e);
        assert_eq!(flatten(&once), once, "flatten not idempotent on {}", e);
    }
}

#[test]
fn flatten_preserves_semantics() {
    for e in sample_exprs() {
        assert_equivalent_expr(&e, &flatten(&e));
    }
}

#[test]
fn scenario_b_or_of_same_key_collapses() {
    let e = Expr::or([lit("role", &["web"]), lit("role", &["db"])]);
    assert_eq!(flatten(&e), lit("role", &["web", "db"]));
}

// ─── DNF ───────────────────────────────────────────────────────────────────────

#[test]
fn literal_gives_single_clause() {
    let k = key("role", &["web", "db"]);
    let f = to_dnf(&Expr::literal(k.clone()), 100).unwrap();
    assert_eq!(f.clauses(), &BTreeSet::from([Clause::unit(k)]));
}

#[test]
fn dnf_preserves_semantics() {
    for e in sample_exprs() {
        let raw = to_dnf(&e, 100).unwrap();
        assert_equivalent_dnf(&e, &raw);
        let flat = to_dnf(&flatten(&e), 100).unwrap();
        assert_equivalent_dnf(&e, &flat);
    }
}

#[test]
fn scenario_a_role_and_env() {
    let e = Expr::and([Expr::or([lit("role", &["web"]), lit("role", &["db"])]), lit("env", &["prod"])]);

    let flat = flatten(&e);
    assert_eq!(flat, Expr::and([lit("role", &["db", "web"]), lit("env", &["prod"])]));

    let raw = to_dnf(&e, 100).unwrap();
    assert_eq!(
        raw.clauses(),
        &BTreeSet::from([clause(&[("role", "web"), ("env", "prod")]), clause(&[("role", "db"), ("env", "prod")])])
    );

    // The flattened conversion keeps the merged literal in a single clause.
    let merged = to_dnf(&flat, 100).unwrap();
    assert_eq!(merged.len(), 1);
    for a in assignments(&e) {
        assert_eq!(raw.eval(&a), merged.eval(&a));
    }
}

#[test]
fn scenario_c_capacity_exceeded() {
    let or_of = |name: &str| Expr::or((0..10).map(|i| lit(name, &[i.to_string().as_str()])));
    let e = Expr::and([or_of("a"), or_of("b"), or_of("c")]);

    assert_eq!(
        to_dnf(&e, 100),
        Err(DnfError::CapacityExceeded {
            size: BigUint::from(1000u32),
            limit: 100
        })
    );

    // Same-key alternatives merge when flattened, so nothing branches.
    let f = to_dnf_with_config(&e, &DnfConfig::default()).unwrap();
    assert_eq!(f.len(), 1);
}

#[test]
fn capacity_limit_is_per_and_node() {
    // Two independent 10x10 expansions under an OR: 200 clauses in total,
    // but no single expansion exceeds 100.
    let or_of = |name: &str| Expr::or((0..10).map(|i| lit(&format!("{}{}", name, i), &["v"])));
    let e = Expr::or([Expr::and([or_of("a"), or_of("b")]), Expr::and([or_of("c"), or_of("d")])]);
    let f = to_dnf(&e, 100).unwrap();
    assert_eq!(f.len(), 200);
}

#[test]
fn capacity_error_propagates_from_nested_node() {
    let or_of = |name: &str| Expr::or((0..5).map(|i| lit(&format!("{}{}", name, i), &["v"])));
    let e = Expr::or([lit("x", &["1"]), Expr::and([or_of("a"), or_of("b"), or_of("c")])]);
    match to_dnf(&e, 100) {
        Err(DnfError::CapacityExceeded { size, limit }) => {
            assert_eq!(size, BigUint::from(125u32));
            assert_eq!(limit, 100);
        }
        other => panic!("expected capacity error, got {:?}", other),
    }
}

// ─── Combinators ───────────────────────────────────────────────────────────────

fn distinct_alternatives(name: &str, n: usize) -> Formula {
    Formula::new((0..n).map(|i| Clause::unit(Key::single(format!("{}{}", name, i), "v"))))
}

#[test]
fn expand_produces_exact_product() {
    for (m, n) in [(2, 2), (2, 5), (3, 7), (10, 10)] {
        let f = expand(m * n, &[distinct_alternatives("a", m), distinct_alternatives("b", n)]).unwrap();
        assert_eq!(f.len(), m * n);
    }
}

#[test]
fn capacity_guard_fires_at_boundary() {
    let (m, n) = (4, 6);
    let forms = [distinct_alternatives("a", m), distinct_alternatives("b", n)];
    assert_eq!(
        expand(m * n - 1, &forms),
        Err(DnfError::CapacityExceeded {
            size: BigUint::from(m * n),
            limit: m * n - 1
        })
    );
    assert_eq!(expand(m * n, &forms).unwrap().len(), m * n);
}

#[test]
fn or_is_idempotent() {
    for e in sample_exprs() {
        let f = to_dnf(&e, 100).unwrap();
        let g = merge([f.clone(), f.clone()]);
        assert_eq!(g.clauses(), f.clauses());
    }
}

#[test]
fn shared_clauses_from_multiple_nontrivial_operands() {
    let operand = |p: &str| {
        let (x1, x2, x3) = (format!("{}1", p), format!("{}2", p), format!("{}3", p));
        Formula::new([
            clause(&[(x1.as_str(), "v"), (x2.as_str(), "v")]),
            clause(&[(x3.as_str(), "v")]),
        ])
    };
    let forms = [operand("a"), operand("b"), operand("c")];
    let f = expand(100, &forms).unwrap();
    assert_eq!(f.len(), 8);
    for op in &forms {
        for c in op.iter().filter(|c| c.len() > 1) {
            assert!(f.shared().contains(c), "missing shared clause {}", c);
        }
    }
}

#[test]
fn shared_survives_to_dnf() {
    // (a & b | c) & (d & e | f) & g & h
    let e = Expr::and([
        Expr::or([Expr::and([lit("a", &["1"]), lit("b", &["1"])]), lit("c", &["1"])]),
        Expr::or([Expr::and([lit("d", &["1"]), lit("e", &["1"])]), lit("f", &["1"])]),
        lit("g", &["1"]),
        lit("h", &["1"]),
    ]);
    let f = to_dnf(&e, 100).unwrap();
    assert_eq!(f.len(), 4);
    assert_eq!(
        f.shared(),
        &BTreeSet::from([
            clause(&[("a", "1"), ("b", "1")]),
            clause(&[("d", "1"), ("e", "1")]),
            clause(&[("g", "1"), ("h", "1")]),
        ])
    );
}
