//! Observables for expectation-value result directives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-qubit Pauli factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pauli::I => write!(f, "I"),
            Pauli::X => write!(f, "X"),
            Pauli::Y => write!(f, "Y"),
            Pauli::Z => write!(f, "Z"),
        }
    }
}

/// A tensor product of Pauli factors, measured over an ordered qubit list.
///
/// `Observable::z().tensor(Observable::z())` is the two-qubit `Z⊗Z`
/// observable used for Ising edge energies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observable {
    factors: Vec<Pauli>,
}

impl Observable {
    /// Single-factor identity observable.
    pub fn i() -> Self {
        Self { factors: vec![Pauli::I] }
    }

    /// Single-factor Pauli-X observable.
    pub fn x() -> Self {
        Self { factors: vec![Pauli::X] }
    }

    /// Single-factor Pauli-Y observable.
    pub fn y() -> Self {
        Self { factors: vec![Pauli::Y] }
    }

    /// Single-factor Pauli-Z observable.
    pub fn z() -> Self {
        Self { factors: vec![Pauli::Z] }
    }

    /// Tensor this observable with another, extending the factor list.
    pub fn tensor(mut self, other: Observable) -> Self {
        self.factors.extend(other.factors);
        self
    }

    /// The ordered Pauli factors.
    pub fn factors(&self) -> &[Pauli] {
        &self.factors
    }

    /// Number of qubits the observable acts on.
    pub fn num_qubits(&self) -> usize {
        self.factors.len()
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for p in &self.factors {
            if !first {
                write!(f, "⊗")?;
            }
            write!(f, "{p}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor() {
        let zz = Observable::z().tensor(Observable::z());
        assert_eq!(zz.num_qubits(), 2);
        assert_eq!(zz.factors(), &[Pauli::Z, Pauli::Z]);
    }

    #[test]
    fn test_display() {
        let zz = Observable::z().tensor(Observable::x());
        assert_eq!(format!("{zz}"), "Z⊗X");
    }
}
