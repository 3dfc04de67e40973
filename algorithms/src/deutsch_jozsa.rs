//! Deutsch–Jozsa: decide whether a black-box function is constant or
//! balanced in one query.
//!
//! Measuring the input register of the assembled circuit yields the all-zero
//! string with probability 1 for a constant oracle; any nonzero string
//! implies a balanced oracle.

use std::collections::BTreeMap;

use sleipnir_hal::QuantumTask;
use sleipnir_ir::{Circuit, QubitId};

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::decode_probabilities;

/// Build an `n + 1`-qubit oracle for a constant function (always 1: the
/// auxiliary qubit is flipped regardless of the input). Inputs carry
/// explicit identities so the oracle names every qubit it acts on.
///
/// Fails when `n` is zero; the algorithm needs at least one input qubit.
pub fn constant_oracle(n: usize) -> AlgorithmResult<Circuit> {
    if n == 0 {
        return Err(AlgorithmError::InvalidQubitCount(n));
    }
    let mut circuit = Circuit::new();
    for q in 0..n {
        circuit.i(QubitId::from(q));
    }
    circuit.x(QubitId::from(n));
    Ok(circuit)
}

/// Build an `n + 1`-qubit oracle for a canonical balanced function: a CNOT
/// from each input qubit to the auxiliary computes the parity of the input.
///
/// Fails when `n` is zero.
pub fn balanced_oracle(n: usize) -> AlgorithmResult<Circuit> {
    if n == 0 {
        return Err(AlgorithmError::InvalidQubitCount(n));
    }
    let mut circuit = Circuit::new();
    for q in 0..n {
        circuit.cnot(QubitId::from(q), QubitId::from(n));
    }
    Ok(circuit)
}

/// Assemble the full Deutsch–Jozsa circuit around an oracle over `n` input
/// qubits.
///
/// Hadamards go on the input register, the auxiliary (qubit `n`) is prepared
/// in |−⟩ with X then H, the oracle's gates are spliced in verbatim, a
/// second Hadamard layer closes the input register, and a probability
/// directive over the inputs terminates the circuit. With `n = 0` the
/// directive's empty target list covers all qubits.
pub fn deutsch_jozsa_circuit(oracle: &Circuit, n: usize) -> Circuit {
    let mut circuit = Circuit::new();
    for q in 0..n {
        circuit.h(QubitId::from(q));
    }
    circuit.x(QubitId::from(n)).h(QubitId::from(n));

    circuit.extend(oracle);

    for q in 0..n {
        circuit.h(QubitId::from(q));
    }
    circuit.probability((0..n).map(QubitId::from));
    circuit
}

/// Decode a task's final probability vector into a bitstring → probability
/// map, rounded to 10 decimals, with all `2^n` zero-padded keys present.
pub async fn get_deutsch_jozsa_results(
    task: &QuantumTask,
) -> AlgorithmResult<BTreeMap<String, f64>> {
    let result = task.result().await?;
    let probabilities = result
        .last_probability()
        .ok_or(AlgorithmError::MissingProbability)?;
    Ok(decode_probabilities(probabilities))
}
