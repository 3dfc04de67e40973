//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::parameter::ParameterExpression;

/// A named gate with its parameters inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(ParameterExpression),
    /// Rotation around Y axis.
    Ry(ParameterExpression),
    /// Rotation around Z axis.
    Rz(ParameterExpression),
    /// Phase gate.
    P(ParameterExpression),

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase gate.
    CP(ParameterExpression),
    /// SWAP gate.
    Swap,
    /// ZZ rotation gate (Ising interaction).
    RZZ(ParameterExpression),

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::I => "id",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::T => "t",
            Gate::Tdg => "tdg",
            Gate::Rx(_) => "rx",
            Gate::Ry(_) => "ry",
            Gate::Rz(_) => "rz",
            Gate::P(_) => "p",
            Gate::CX => "cx",
            Gate::CY => "cy",
            Gate::CZ => "cz",
            Gate::CP(_) => "cp",
            Gate::Swap => "swap",
            Gate::RZZ(_) => "rzz",
            Gate::CCX => "ccx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::I
            | Gate::X
            | Gate::Y
            | Gate::Z
            | Gate::H
            | Gate::S
            | Gate::Sdg
            | Gate::T
            | Gate::Tdg
            | Gate::Rx(_)
            | Gate::Ry(_)
            | Gate::Rz(_)
            | Gate::P(_) => 1,

            Gate::CX | Gate::CY | Gate::CZ | Gate::CP(_) | Gate::Swap | Gate::RZZ(_) => 2,

            Gate::CCX => 3,
        }
    }

    /// Check whether this gate carries a free symbolic parameter.
    pub fn is_parameterized(&self) -> bool {
        match self.parameter() {
            Some(p) => p.is_symbolic(),
            None => false,
        }
    }

    /// The gate's angle parameter, if it has one.
    pub fn parameter(&self) -> Option<&ParameterExpression> {
        match self {
            Gate::Rx(p) | Gate::Ry(p) | Gate::Rz(p) | Gate::P(p) | Gate::CP(p) | Gate::RZZ(p) => {
                Some(p)
            }
            _ => None,
        }
    }

    /// Bind free symbols in the gate's parameter; unparameterized gates are
    /// returned unchanged.
    pub fn bind_parameters(&self, assignments: &HashMap<String, f64>) -> Gate {
        match self {
            Gate::Rx(p) => Gate::Rx(p.bind_all(assignments)),
            Gate::Ry(p) => Gate::Ry(p.bind_all(assignments)),
            Gate::Rz(p) => Gate::Rz(p.bind_all(assignments)),
            Gate::P(p) => Gate::P(p.bind_all(assignments)),
            Gate::CP(p) => Gate::CP(p.bind_all(assignments)),
            Gate::RZZ(p) => Gate::RZZ(p.bind_all(assignments)),
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_arity() {
        assert_eq!(Gate::H.num_qubits(), 1);
        assert_eq!(Gate::CX.num_qubits(), 2);
        assert_eq!(Gate::RZZ(ParameterExpression::constant(0.5)).num_qubits(), 2);
        assert_eq!(Gate::CCX.num_qubits(), 3);
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(Gate::I.name(), "id");
        assert_eq!(Gate::Rx(ParameterExpression::symbol("theta")).name(), "rx");
    }

    #[test]
    fn test_bind_parameters() {
        let gate = Gate::Rx(ParameterExpression::symbol("theta"));
        assert!(gate.is_parameterized());

        let mut assignments = HashMap::new();
        assignments.insert("theta".to_string(), 0.5);
        let bound = gate.bind_parameters(&assignments);

        assert!(!bound.is_parameterized());
        assert_eq!(bound.parameter().unwrap().as_f64(), Some(0.5));
    }
}
