//! End-to-end runs of every algorithm against the statevector simulator.

use std::sync::Arc;

use ndarray::array;

use sleipnir_adapter_sim::SimulatorBackend;
use sleipnir_algorithms::bernstein_vazirani::{
    bernstein_vazirani_circuit, get_bernstein_vazirani_results,
};
use sleipnir_algorithms::deutsch_jozsa::{
    balanced_oracle, constant_oracle, deutsch_jozsa_circuit, get_deutsch_jozsa_results,
};
use sleipnir_algorithms::qaoa::{evaluate_circuit, evaluate_loss, qaoa};
use sleipnir_hal::{Backend, QuantumTask};
use sleipnir_ir::{Circuit, Observable, ParameterExpression, QubitId};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn backend() -> Arc<SimulatorBackend> {
    Arc::new(SimulatorBackend::new())
}

#[tokio::test]
async fn test_bernstein_vazirani_recovers_hidden_string() {
    init_tracing();
    let circuit = bernstein_vazirani_circuit("011").unwrap();
    let task = QuantumTask::submit(backend(), &circuit, 0).await.unwrap();
    let probabilities = get_bernstein_vazirani_results(&task).await.unwrap();

    assert_eq!(probabilities.len(), 8);
    assert!((probabilities["011"] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_bernstein_vazirani_sampled_concentrates_on_hidden_string() {
    init_tracing();
    let circuit = bernstein_vazirani_circuit("101").unwrap();
    let task = QuantumTask::submit(backend(), &circuit, 1000).await.unwrap();
    let probabilities = get_bernstein_vazirani_results(&task).await.unwrap();

    // The BV circuit is deterministic, so sampling cannot miss.
    assert!((probabilities["101"] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_deutsch_jozsa_constant_oracle_yields_all_zeros() {
    init_tracing();
    let oracle = constant_oracle(3).unwrap();
    let circuit = deutsch_jozsa_circuit(&oracle, 3);
    let task = QuantumTask::submit(backend(), &circuit, 0).await.unwrap();
    let probabilities = get_deutsch_jozsa_results(&task).await.unwrap();

    assert!((probabilities["000"] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_deutsch_jozsa_balanced_oracle_yields_all_ones() {
    init_tracing();
    let oracle = balanced_oracle(3).unwrap();
    let circuit = deutsch_jozsa_circuit(&oracle, 3);
    let task = QuantumTask::submit(backend(), &circuit, 0).await.unwrap();
    let probabilities = get_deutsch_jozsa_results(&task).await.unwrap();

    assert!((probabilities["111"] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_evaluate_circuit_binds_free_parameters() {
    init_tracing();
    let mut circuit = Circuit::new();
    circuit
        .rx(ParameterExpression::symbol("theta"), QubitId(0))
        .probability([]);

    let task = evaluate_circuit(backend(), &circuit, &[0.0], 0)
        .await
        .unwrap();
    let result = task.result().await.unwrap();
    let probabilities = result.probability(0).unwrap();
    assert!((probabilities[0] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_evaluate_loss_identity_z_expectation() {
    init_tracing();
    let mut circuit = Circuit::new();
    circuit.i(QubitId(0)).expectation(Observable::z(), [QubitId(0)]);

    let task = QuantumTask::submit(backend(), &circuit, 0).await.unwrap();
    let loss = evaluate_loss(&task, &[1.0]).await.unwrap();
    assert!((loss - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_qaoa_end_to_end_loss_is_finite() {
    init_tracing();
    let coupling = array![[0.0, 1.0], [0.0, 0.0]];
    let circuit = qaoa(2, 2, &coupling, None, None);
    assert_eq!(
        circuit.parameters().into_iter().collect::<Vec<_>>(),
        ["beta_0", "beta_1", "gamma_0", "gamma_1"]
    );

    let task = evaluate_circuit(backend(), &circuit, &[0.1, 0.2, 0.3, 0.4], 0)
        .await
        .unwrap();
    let loss = evaluate_loss(&task, &[1.0]).await.unwrap();
    assert!(loss.is_finite());
    assert!(loss.abs() <= 1.0 + 1e-9);
}

#[tokio::test]
async fn test_qaoa_zero_angles_give_zero_expectation() {
    init_tracing();
    // All angles zero leaves the register in |+⟩⊗|+⟩, where ⟨Z⊗Z⟩ = 0.
    let coupling = array![[0.0, 1.0], [0.0, 0.0]];
    let circuit = qaoa(2, 1, &coupling, Some(&[0.0]), Some(&[0.0]));
    assert!(!circuit.is_parameterized());

    let task = QuantumTask::submit(backend(), &circuit, 0).await.unwrap();
    let loss = evaluate_loss(&task, &[1.0]).await.unwrap();
    assert!(loss.abs() < 1e-9);
}

#[tokio::test]
async fn test_unbound_parameters_are_rejected_at_submission() {
    init_tracing();
    let coupling = array![[0.0, 1.0], [0.0, 0.0]];
    let circuit = qaoa(2, 1, &coupling, None, None);

    let err = backend().submit(&circuit, 0, None).await.unwrap_err();
    assert!(err.to_string().contains("beta_0"));
}
