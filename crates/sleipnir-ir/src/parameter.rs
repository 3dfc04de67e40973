//! Parameter expressions for parameterized circuits.
//!
//! Gate angles are either bound numeric values or free symbolic placeholders
//! that an external optimization loop binds later. The small arithmetic layer
//! on top exists so that an angle like `2 · weight · gamma` can be written
//! against a still-free `gamma`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A symbolic or concrete parameter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A bound numeric value.
    Constant(f64),
    /// A free symbolic parameter.
    Symbol(String),
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Addition.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Multiplication.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a bound constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a free symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// Check whether the expression still contains free symbols.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Constant(_) => false,
            ParameterExpression::Symbol(_) => true,
            ParameterExpression::Neg(e) => e.is_symbolic(),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.is_symbolic() || b.is_symbolic()
            }
        }
    }

    /// Evaluate to a concrete value, if fully bound.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Symbol(_) => None,
            ParameterExpression::Neg(e) => e.as_f64().map(|v| -v),
            ParameterExpression::Add(a, b) => Some(a.as_f64()? + b.as_f64()?),
            ParameterExpression::Mul(a, b) => Some(a.as_f64()? * b.as_f64()?),
        }
    }

    /// All free symbol names, in sorted order.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        self.collect_symbols(&mut set);
        set
    }

    fn collect_symbols(&self, set: &mut BTreeSet<String>) {
        match self {
            ParameterExpression::Constant(_) => {}
            ParameterExpression::Symbol(name) => {
                set.insert(name.clone());
            }
            ParameterExpression::Neg(e) => e.collect_symbols(set),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Bind one symbol to a value, returning a new expression.
    pub fn bind(&self, name: &str, value: f64) -> Self {
        let mut assignments = HashMap::new();
        assignments.insert(name.to_string(), value);
        self.bind_all(&assignments)
    }

    /// Bind every symbol named in `assignments`; unknown names stay free.
    ///
    /// Fully bound subtrees collapse to constants.
    pub fn bind_all(&self, assignments: &HashMap<String, f64>) -> Self {
        let bound = match self {
            ParameterExpression::Constant(v) => ParameterExpression::Constant(*v),
            ParameterExpression::Symbol(name) => match assignments.get(name) {
                Some(value) => ParameterExpression::Constant(*value),
                None => ParameterExpression::Symbol(name.clone()),
            },
            ParameterExpression::Neg(e) => {
                ParameterExpression::Neg(Box::new(e.bind_all(assignments)))
            }
            ParameterExpression::Add(a, b) => ParameterExpression::Add(
                Box::new(a.bind_all(assignments)),
                Box::new(b.bind_all(assignments)),
            ),
            ParameterExpression::Mul(a, b) => ParameterExpression::Mul(
                Box::new(a.bind_all(assignments)),
                Box::new(b.bind_all(assignments)),
            ),
        };
        match bound.as_f64() {
            Some(v) => ParameterExpression::Constant(v),
            None => bound,
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Symbol(name) => write!(f, "{name}"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Add(a, b) => write!(f, "({a} + {b})"),
            ParameterExpression::Mul(a, b) => write!(f, "({a} * {b})"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<i32> for ParameterExpression {
    fn from(value: i32) -> Self {
        ParameterExpression::Constant(f64::from(value))
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ParameterExpression::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ParameterExpression::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul<ParameterExpression> for f64 {
    type Output = ParameterExpression;

    fn mul(self, rhs: ParameterExpression) -> ParameterExpression {
        ParameterExpression::Mul(Box::new(ParameterExpression::Constant(self)), Box::new(rhs))
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        ParameterExpression::Neg(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_constant() {
        let p = ParameterExpression::constant(1.5);
        assert!(!p.is_symbolic());
        assert_eq!(p.as_f64(), Some(1.5));
    }

    #[test]
    fn test_symbol() {
        let p = ParameterExpression::symbol("theta");
        assert!(p.is_symbolic());
        assert_eq!(p.as_f64(), None);
        assert!(p.symbols().contains("theta"));
    }

    #[test]
    fn test_bind() {
        let p = ParameterExpression::symbol("theta");
        let bound = p.bind("theta", PI / 2.0);
        assert!(!bound.is_symbolic());
        assert!((bound.as_f64().unwrap() - PI / 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_bind_collapses_arithmetic() {
        let angle = 2.0 * ParameterExpression::symbol("gamma");
        assert!(angle.is_symbolic());

        let bound = angle.bind("gamma", 0.25);
        assert_eq!(bound, ParameterExpression::Constant(0.5));
    }

    #[test]
    fn test_bind_all_leaves_unknown_free() {
        let expr = ParameterExpression::symbol("gamma") + ParameterExpression::symbol("beta");
        let mut assignments = HashMap::new();
        assignments.insert("gamma".to_string(), 1.0);

        let bound = expr.bind_all(&assignments);
        assert!(bound.is_symbolic());
        assert_eq!(bound.symbols().into_iter().collect::<Vec<_>>(), ["beta"]);
    }

    #[test]
    fn test_symbols_sorted() {
        let expr = ParameterExpression::symbol("gamma_0") * ParameterExpression::symbol("beta_0");
        let names: Vec<_> = expr.symbols().into_iter().collect();
        assert_eq!(names, ["beta_0", "gamma_0"]);
    }
}
