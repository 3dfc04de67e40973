//! Bernstein–Vazirani: recover a hidden bitstring in one oracle query.
//!
//! The oracle computes `f(x) = s · x (mod 2)` for a hidden string `s`. With
//! the auxiliary qubit prepared in |−⟩, a single query between two Hadamard
//! layers leaves the input register in |s⟩ exactly.

use std::collections::BTreeMap;

use console::style;

use sleipnir_hal::QuantumTask;
use sleipnir_ir::{Circuit, QubitId};

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::decode_probabilities;

/// Build the Bernstein–Vazirani circuit for a hidden bitstring.
///
/// Uses `n + 1` qubits, where `n` is the string length: qubits `0..n` are
/// the input register and qubit `n` is the auxiliary, prepared in |−⟩.
/// Positions holding `'0'` get an explicit identity so the oracle structure
/// stays visible in the gate sequence; positions holding `'1'` couple to the
/// auxiliary with a CNOT. A probability directive over the input register
/// terminates the circuit.
pub fn bernstein_vazirani_circuit(hidden_string: &str) -> AlgorithmResult<Circuit> {
    if hidden_string.is_empty() || !hidden_string.chars().all(|c| c == '0' || c == '1') {
        return Err(AlgorithmError::InvalidHiddenString(hidden_string.to_string()));
    }
    let n = hidden_string.len();
    let aux = QubitId::from(n);

    let mut circuit = Circuit::new();
    circuit.h(aux).z(aux);
    for q in 0..n {
        circuit.h(QubitId::from(q));
    }

    for (q, bit) in hidden_string.chars().enumerate() {
        if bit == '0' {
            circuit.i(QubitId::from(q));
        } else {
            circuit.cnot(QubitId::from(q), aux);
        }
    }

    for q in 0..n {
        circuit.h(QubitId::from(q));
    }

    circuit.probability((0..n).map(QubitId::from));
    Ok(circuit)
}

/// Decode a task's final probability vector into a bitstring → probability
/// map, rounded to 10 decimals, with all `2^n` zero-padded keys present.
pub async fn get_bernstein_vazirani_results(
    task: &QuantumTask,
) -> AlgorithmResult<BTreeMap<String, f64>> {
    let result = task.result().await?;
    let probabilities = result
        .last_probability()
        .ok_or(AlgorithmError::MissingProbability)?;
    Ok(decode_probabilities(probabilities))
}

/// Render the decoded probabilities as a terminal bar chart.
pub fn plot_bitstrings(probabilities: &BTreeMap<String, f64>, title: Option<&str>) {
    if let Some(title) = title {
        println!("{}", style(title).bold());
    }
    for (bitstring, p) in probabilities {
        let width = (p * 40.0).round() as usize;
        println!(
            "  {:>8} │{:<40} {:.4}",
            style(bitstring).dim(),
            style("█".repeat(width)).cyan(),
            p
        );
    }
}
