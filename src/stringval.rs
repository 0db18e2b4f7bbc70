//! String values with environment-variable interpolation.
//!
//! A [`StringVal`] is a sequence of literal segments and interpolants. Each
//! interpolant names a variable that is looked up when the value is rendered,
//! either in an explicit environment or in the process environment.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Interpolant(String),
}

#[derive(Debug, Clone, Default)]
pub struct StringVal {
    segments: Vec<Segment>,
    /// Explicit environment; `None` means the process environment.
    env: Option<HashMap<String, String>>,
}

impl StringVal {
    /// Creates an empty value interpolating from the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty value interpolating from `env`.
    pub fn with_env(env: HashMap<String, String>) -> Self {
        StringVal {
            segments: Vec::new(),
            env: Some(env),
        }
    }

    pub fn add_literal(&mut self, s: impl Into<String>) {
        self.segments.push(Segment::Literal(s.into()));
    }

    pub fn add_interpolant(&mut self, name: impl Into<String>) {
        self.segments.push(Segment::Interpolant(name.into()));
    }

    /// Returns `true` if rendering may differ from a plain literal, that is,
    /// if there are several segments or the only one is an interpolant.
    pub fn is_interpolated(&self) -> bool {
        match self.segments.as_slice() {
            [] => false,
            [Segment::Literal(_)] => false,
            _ => true,
        }
    }

    fn lookup(&self, name: &str) -> String {
        match &self.env {
            Some(env) => env.get(name).cloned().unwrap_or_default(),
            None => std::env::var(name).unwrap_or_default(),
        }
    }

    /// Renders the value. Unknown variables render as the empty string.
    pub fn interpolate(&self) -> String {
        self.segments
            .iter()
            .map(|seg| match seg {
                Segment::Literal(s) => s.clone(),
                Segment::Interpolant(name) => self.lookup(name),
            })
            .collect()
    }
}

impl fmt::Display for StringVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.interpolate())
    }
}
