//! QAOA (Quantum Approximate Optimization Algorithm) ansatz and evaluators.
//!
//! The ansatz alternates an Ising cost layer (one `RZZ` per weighted edge of
//! the coupling matrix) with a transverse-field mixer (`Rx` on every qubit).
//! Angles are free symbols `gamma_{l}` / `beta_{l}` unless concrete values
//! are supplied, so an external classical optimizer can bind them per
//! evaluation. The circuit ends with one `⟨Z⊗Z⟩` expectation directive per
//! edge; [`evaluate_loss`] contracts those against the edge weights.

use std::collections::HashMap;
use std::sync::Arc;

use ndarray::Array2;
use tracing::debug;

use sleipnir_hal::{Backend, QuantumTask};
use sleipnir_ir::{Circuit, Observable, ParameterExpression, QubitId};

use crate::error::AlgorithmResult;

/// Weighted edges of a coupling matrix: every off-diagonal nonzero entry,
/// in row-major order. The diagonal is ignored.
fn coupling_edges(coupling_matrix: &Array2<f64>) -> Vec<(usize, usize, f64)> {
    coupling_matrix
        .indexed_iter()
        .filter(|&((i, j), &w)| i != j && w != 0.0)
        .map(|((i, j), &w)| (i, j, w))
        .collect()
}

/// Per-layer angle: a bound constant when values are supplied, otherwise a
/// free symbol named `{name}_{layer}`.
fn layer_angle(values: Option<&[f64]>, layer: usize, name: &str) -> ParameterExpression {
    match values.and_then(|v| v.get(layer)) {
        Some(&v) => ParameterExpression::constant(v),
        None => ParameterExpression::symbol(format!("{name}_{layer}")),
    }
}

/// Build the layered QAOA ansatz for an Ising coupling matrix.
///
/// Each of the `n_layers` blocks applies `RZZ(2·w·γ_l)` for every weighted
/// edge `(i, j, w)`, then `Rx(2·β_l)` on every qubit. Passing `gammas` /
/// `betas` bakes the angles in; omitting them leaves free parameters for
/// [`evaluate_circuit`] to bind. One `⟨Z⊗Z⟩` expectation directive per edge,
/// in edge order, terminates the circuit.
pub fn qaoa(
    n_qubits: usize,
    n_layers: usize,
    coupling_matrix: &Array2<f64>,
    gammas: Option<&[f64]>,
    betas: Option<&[f64]>,
) -> Circuit {
    let edges = coupling_edges(coupling_matrix);

    let mut circuit = Circuit::new();
    for q in 0..n_qubits {
        circuit.h(QubitId::from(q));
    }

    for layer in 0..n_layers {
        let gamma = layer_angle(gammas, layer, "gamma");
        let beta = layer_angle(betas, layer, "beta");

        for &(i, j, weight) in &edges {
            circuit.rzz(
                2.0 * weight * gamma.clone(),
                QubitId::from(i),
                QubitId::from(j),
            );
        }
        for q in 0..n_qubits {
            circuit.rx(2.0 * beta.clone(), QubitId::from(q));
        }
    }

    for &(i, j, _) in &edges {
        circuit.expectation(
            Observable::z().tensor(Observable::z()),
            [QubitId::from(i), QubitId::from(j)],
        );
    }
    circuit
}

/// Bind the circuit's free parameters to `parameter_values` and submit.
///
/// The values pair with the circuit's parameter names in sorted order
/// (`beta_0, beta_1, …, gamma_0, gamma_1, …`). Pure glue: no decoding
/// happens here, and no length check beyond what execution itself surfaces.
pub async fn evaluate_circuit(
    device: Arc<dyn Backend>,
    circuit: &Circuit,
    parameter_values: &[f64],
    shots: u32,
) -> AlgorithmResult<QuantumTask> {
    let assignments: HashMap<String, f64> = circuit
        .parameters()
        .into_iter()
        .zip(parameter_values.iter().copied())
        .collect();
    debug!("Binding {} parameters for evaluation", assignments.len());

    let task =
        QuantumTask::submit_with_parameters(device, circuit, shots, Some(&assignments)).await?;
    Ok(task)
}

/// Contract a task's edge expectation values against the edge weights into
/// a scalar Ising loss, suitable for an external minimizer.
///
/// The weights must be in the same order as the circuit's expectation
/// directives (the coupling matrix's row-major edge order).
pub async fn evaluate_loss(task: &QuantumTask, edge_weights: &[f64]) -> AlgorithmResult<f64> {
    let result = task.result().await?;
    Ok(result
        .expectations()
        .zip(edge_weights.iter())
        .map(|(value, weight)| weight * value)
        .sum())
}
