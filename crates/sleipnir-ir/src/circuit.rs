//! High-level circuit builder API.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::observable::Observable;
use crate::parameter::ParameterExpression;
use crate::qubit::QubitId;
use crate::result_type::ResultType;

/// A quantum circuit: an ordered gate sequence plus terminal result
/// directives.
///
/// Qubits come into existence by being referenced; the qubit count is the
/// highest referenced index plus one. Builder methods are fluent and
/// infallible:
///
/// ```
/// use sleipnir_ir::{Circuit, QubitId};
///
/// let mut circuit = Circuit::new();
/// circuit.h(QubitId(0)).cnot(QubitId(0), QubitId(1)).probability([]);
/// assert_eq!(circuit.num_qubits(), 2);
/// ```
///
/// Two circuits compare equal when they have the same gates on the same
/// qubits in the same order and the same result directives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Circuit {
    instructions: Vec<Instruction>,
    result_types: Vec<ResultType>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of qubits: the highest index referenced by any gate or result
    /// directive, plus one. An empty circuit has zero qubits.
    pub fn num_qubits(&self) -> usize {
        let gate_max = self
            .instructions
            .iter()
            .flat_map(|inst| inst.qubits.iter())
            .map(|q| q.0)
            .max();
        let directive_max = self
            .result_types
            .iter()
            .flat_map(|rt| rt.targets().iter())
            .map(|q| q.0)
            .max();
        match gate_max.into_iter().chain(directive_max).max() {
            Some(max) => max as usize + 1,
            None => 0,
        }
    }

    /// The ordered gate sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The ordered result directives.
    pub fn result_types(&self) -> &[ResultType] {
        &self.result_types
    }

    /// Append a gate instruction.
    pub fn gate(&mut self, gate: Gate, qubits: impl IntoIterator<Item = QubitId>) -> &mut Self {
        self.instructions.push(Instruction::new(gate, qubits));
        self
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply the identity gate.
    pub fn i(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::I, [qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::X, [qubit])
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::Y, [qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::Z, [qubit])
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::H, [qubit])
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::S, [qubit])
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::Sdg, [qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::T, [qubit])
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> &mut Self {
        self.gate(Gate::Tdg, [qubit])
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: impl Into<ParameterExpression>, qubit: QubitId) -> &mut Self {
        self.gate(Gate::Rx(theta.into()), [qubit])
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: impl Into<ParameterExpression>, qubit: QubitId) -> &mut Self {
        self.gate(Gate::Ry(theta.into()), [qubit])
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: impl Into<ParameterExpression>, qubit: QubitId) -> &mut Self {
        self.gate(Gate::Rz(theta.into()), [qubit])
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: impl Into<ParameterExpression>, qubit: QubitId) -> &mut Self {
        self.gate(Gate::P(theta.into()), [qubit])
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.gate(Gate::CX, [control, target])
    }

    /// Apply CNOT (CX) gate. Alias for [`Circuit::cnot`].
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.cnot(control, target)
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.gate(Gate::CY, [control, target])
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.gate(Gate::CZ, [control, target])
    }

    /// Apply controlled-phase gate.
    pub fn cp(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> &mut Self {
        self.gate(Gate::CP(theta.into()), [control, target])
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> &mut Self {
        self.gate(Gate::Swap, [q1, q2])
    }

    /// Apply RZZ (ZZ rotation) gate.
    pub fn rzz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        q1: QubitId,
        q2: QubitId,
    ) -> &mut Self {
        self.gate(Gate::RZZ(theta.into()), [q1, q2])
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> &mut Self {
        self.gate(Gate::CCX, [c1, c2, target])
    }

    // =========================================================================
    // Result directives and composition
    // =========================================================================

    /// Attach a probability directive over the given qubits.
    ///
    /// An empty target list requests the distribution over all qubits.
    pub fn probability(&mut self, targets: impl IntoIterator<Item = QubitId>) -> &mut Self {
        self.result_types.push(ResultType::Probability {
            targets: targets.into_iter().collect(),
        });
        self
    }

    /// Attach an expectation directive for `observable` over the given
    /// qubits. The target list pairs with the observable's factors in order.
    pub fn expectation(
        &mut self,
        observable: Observable,
        targets: impl IntoIterator<Item = QubitId>,
    ) -> &mut Self {
        self.result_types.push(ResultType::Expectation {
            observable,
            targets: targets.into_iter().collect(),
        });
        self
    }

    /// Splice another circuit's gates and directives onto the end of this
    /// one, verbatim and in order. Qubit indices are not remapped.
    pub fn extend(&mut self, other: &Circuit) -> &mut Self {
        self.instructions.extend(other.instructions.iter().cloned());
        self.result_types.extend(other.result_types.iter().cloned());
        self
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// The free parameter names in this circuit, in sorted order.
    pub fn parameters(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for inst in &self.instructions {
            if let Some(p) = inst.gate.parameter() {
                set.extend(p.symbols());
            }
        }
        set
    }

    /// Check whether any gate still carries a free parameter.
    pub fn is_parameterized(&self) -> bool {
        self.instructions.iter().any(|i| i.gate.is_parameterized())
    }

    /// Return a copy of this circuit with the named symbols bound to the
    /// given values. Names absent from `assignments` stay free.
    pub fn bind_parameters(&self, assignments: &HashMap<String, f64>) -> Circuit {
        Circuit {
            instructions: self
                .instructions
                .iter()
                .map(|inst| inst.bind_parameters(assignments))
                .collect(),
            result_types: self.result_types.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new();
        assert_eq!(circuit.num_qubits(), 0);
        assert!(circuit.instructions().is_empty());
        assert!(circuit.result_types().is_empty());
    }

    #[test]
    fn test_qubit_count_is_max_index_plus_one() {
        let mut circuit = Circuit::new();
        circuit.x(QubitId(3));
        assert_eq!(circuit.num_qubits(), 4);

        circuit.h(QubitId(1));
        assert_eq!(circuit.num_qubits(), 4);
    }

    #[test]
    fn test_directives_count_toward_qubits() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).probability([QubitId(0), QubitId(5)]);
        assert_eq!(circuit.num_qubits(), 6);
    }

    #[test]
    fn test_fluent_chaining() {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .cnot(QubitId(0), QubitId(1))
            .probability([]);

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.instructions().len(), 2);
        assert_eq!(circuit.result_types().len(), 1);
    }

    #[test]
    fn test_structural_equality() {
        let mut a = Circuit::new();
        a.x(QubitId(0)).h(QubitId(0)).probability([]);

        let mut b = Circuit::new();
        b.x(QubitId(0)).h(QubitId(0)).probability([]);

        assert_eq!(a, b);

        let mut c = Circuit::new();
        c.h(QubitId(0)).x(QubitId(0)).probability([]);
        assert_ne!(a, c); // order matters
    }

    #[test]
    fn test_extend_splices_verbatim() {
        let mut oracle = Circuit::new();
        oracle.cnot(QubitId(0), QubitId(2)).cnot(QubitId(1), QubitId(2));

        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).h(QubitId(1));
        circuit.extend(&oracle);
        circuit.h(QubitId(0)).h(QubitId(1));

        assert_eq!(circuit.instructions().len(), 6);
        assert_eq!(circuit.instructions()[2], oracle.instructions()[0]);
        assert_eq!(circuit.instructions()[3], oracle.instructions()[1]);
    }

    #[test]
    fn test_parameters_sorted() {
        let mut circuit = Circuit::new();
        circuit
            .rx(ParameterExpression::symbol("gamma_0"), QubitId(0))
            .rx(ParameterExpression::symbol("beta_0"), QubitId(0));

        let names: Vec<_> = circuit.parameters().into_iter().collect();
        assert_eq!(names, ["beta_0", "gamma_0"]);
    }

    #[test]
    fn test_bind_parameters() {
        let mut circuit = Circuit::new();
        circuit.rx(ParameterExpression::symbol("theta"), QubitId(0));
        assert!(circuit.is_parameterized());

        let mut assignments = HashMap::new();
        assignments.insert("theta".to_string(), PI);
        let bound = circuit.bind_parameters(&assignments);

        assert!(!bound.is_parameterized());
        // the original circuit is untouched
        assert!(circuit.is_parameterized());
    }

    proptest! {
        /// Building the same gate sequence twice yields equal circuits.
        #[test]
        fn prop_builder_idempotence(indices in proptest::collection::vec(0u32..8, 1..32)) {
            let build = || {
                let mut c = Circuit::new();
                for &q in &indices {
                    c.h(QubitId(q));
                }
                c.probability([]);
                c
            };
            prop_assert_eq!(build(), build());
        }

        /// Qubit count is always the maximum referenced index plus one.
        #[test]
        fn prop_qubit_count(indices in proptest::collection::vec(0u32..16, 1..32)) {
            let mut c = Circuit::new();
            for &q in &indices {
                c.x(QubitId(q));
            }
            let expected = *indices.iter().max().unwrap() as usize + 1;
            prop_assert_eq!(c.num_qubits(), expected);
        }
    }
}
