//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::gate::Gate;
use crate::qubit::QubitId;

/// One gate application: the gate and the qubits it acts on, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate being applied.
    pub gate: Gate,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn new(gate: Gate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit(gate: Gate, qubit: QubitId) -> Self {
        Self::new(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit(gate: Gate, q1: QubitId, q2: QubitId) -> Self {
        Self::new(gate, [q1, q2])
    }

    /// Bind free symbols in the gate's parameter.
    pub fn bind_parameters(&self, assignments: &HashMap<String, f64>) -> Self {
        Self {
            gate: self.gate.bind_parameters(assignments),
            qubits: self.qubits.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_operands() {
        let inst = Instruction::two_qubit(Gate::CX, QubitId(0), QubitId(2));
        assert_eq!(inst.gate, Gate::CX);
        assert_eq!(inst.qubits, vec![QubitId(0), QubitId(2)]);
    }
}
