//! Simulator backend implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use sleipnir_hal::{
    Backend, BackendConfig, BackendFactory, ExecutionResult, HalError, HalResult, Job, JobId,
    JobStatus, ResultValue,
};
use sleipnir_ir::{Circuit, Gate, Instruction, ParameterExpression, QubitId, ResultType};

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// Runs circuits synchronously at submission time. Zero shots yields exact
/// analytic probability vectors and expectation values; a positive shot
/// count yields sampled estimates. Supports circuits up to `max_qubits`
/// (limited by memory).
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Completed jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits: 20,
        }
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
        }
    }

    /// Run the circuit and materialize one value per result directive.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            apply_instruction(&mut sv, inst)?;
        }

        let mut values = Vec::with_capacity(circuit.result_types().len());
        for result_type in circuit.result_types() {
            values.push(materialize(&sv, result_type, shots));
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(ExecutionResult::new(values, shots).with_execution_time(elapsed.as_millis() as u64))
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a gate angle to a concrete value.
fn angle(p: &ParameterExpression) -> HalResult<f64> {
    p.as_f64().ok_or_else(|| {
        let names: Vec<_> = p.symbols().into_iter().collect();
        HalError::InvalidCircuit(format!("parameter '{}' is unbound", names.join("', '")))
    })
}

/// Apply one instruction to the statevector.
fn apply_instruction(sv: &mut Statevector, inst: &Instruction) -> HalResult<()> {
    let q = |i: usize| inst.qubits[i].index();
    match &inst.gate {
        Gate::I => {}
        Gate::X => sv.apply_x(q(0)),
        Gate::Y => sv.apply_y(q(0)),
        Gate::Z => sv.apply_z(q(0)),
        Gate::H => sv.apply_h(q(0)),
        Gate::S => sv.apply_s(q(0)),
        Gate::Sdg => sv.apply_sdg(q(0)),
        Gate::T => sv.apply_t(q(0)),
        Gate::Tdg => sv.apply_tdg(q(0)),
        Gate::Rx(theta) => sv.apply_rx(q(0), angle(theta)?),
        Gate::Ry(theta) => sv.apply_ry(q(0), angle(theta)?),
        Gate::Rz(theta) => sv.apply_rz(q(0), angle(theta)?),
        Gate::P(theta) => sv.apply_phase(q(0), angle(theta)?),
        Gate::CX => sv.apply_cx(q(0), q(1)),
        Gate::CY => sv.apply_cy(q(0), q(1)),
        Gate::CZ => sv.apply_cz(q(0), q(1)),
        Gate::CP(theta) => sv.apply_cp(q(0), q(1), angle(theta)?),
        Gate::Swap => sv.apply_swap(q(0), q(1)),
        Gate::RZZ(theta) => sv.apply_rzz(q(0), q(1), angle(theta)?),
        Gate::CCX => sv.apply_ccx(q(0), q(1), q(2)),
    }
    Ok(())
}

/// Materialize one result directive from the final state.
fn materialize(sv: &Statevector, result_type: &ResultType, shots: u32) -> ResultValue {
    match result_type {
        ResultType::Probability { targets } => {
            let targets: Vec<usize> = targets.iter().map(|q| q.index()).collect();
            if shots == 0 {
                ResultValue::Probability(sv.probabilities(&targets))
            } else {
                let all: Vec<usize> = if targets.is_empty() {
                    (0..sv.num_qubits()).collect()
                } else {
                    targets.clone()
                };
                let mut counts = vec![0u64; 1 << all.len()];
                for _ in 0..shots {
                    counts[Statevector::marginal_key(sv.sample(), &all)] += 1;
                }
                ResultValue::Probability(
                    counts
                        .into_iter()
                        .map(|c| c as f64 / f64::from(shots))
                        .collect(),
                )
            }
        }
        ResultType::Expectation {
            observable,
            targets,
        } => {
            let targets: Vec<usize> = targets.iter().map(|q| q.index()).collect();
            if shots == 0 {
                ResultValue::Expectation(sv.expectation(observable.factors(), &targets))
            } else {
                let rotated = sv.basis_rotated(observable.factors(), &targets);
                let sum: f64 = (0..shots)
                    .map(|_| Statevector::parity(rotated.sample(), observable.factors(), &targets))
                    .sum();
                ResultValue::Expectation(sum / f64::from(shots))
            }
        }
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    #[instrument(skip(self, circuit, parameters))]
    async fn submit(
        &self,
        circuit: &Circuit,
        shots: u32,
        parameters: Option<&HashMap<String, f64>>,
    ) -> HalResult<JobId> {
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }

        let bound = match parameters {
            Some(assignments) => circuit.bind_parameters(assignments),
            None => circuit.clone(),
        };
        if bound.is_parameterized() {
            let names: Vec<_> = bound.parameters().into_iter().collect();
            return Err(HalError::InvalidCircuit(format!(
                "circuit has unbound parameters: {}",
                names.join(", ")
            )));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(self.name());

        debug!("Submitted job: {}", job_id);

        // Run synchronously; the job lands in a terminal state immediately.
        let (job, result) = match self.run_simulation(&bound, shots) {
            Ok(result) => (job.with_status(JobStatus::Completed), Some(result)),
            Err(err) => (job.with_status(JobStatus::Failed(err.to_string())), None),
        };

        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.insert(job_id.0.clone(), SimJob { job, result });

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match jobs.get_mut(&job_id.0) {
            // Jobs complete at submission, so cancellation only applies to
            // ones that are somehow still pending.
            Some(sim_job) => {
                if sim_job.job.status.is_pending() {
                    sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
                }
                Ok(())
            }
            None => Err(HalError::JobNotFound(job_id.0.clone())),
        }
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .extra
            .get("max_qubits")
            .and_then(serde_json::value::Value::as_u64)
            .map_or(20, |v| v as u32);

        Ok(Self {
            config,
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleipnir_ir::Observable;

    fn bell_circuit() -> Circuit {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .cnot(QubitId(0), QubitId(1))
            .probability([]);
        circuit
    }

    #[tokio::test]
    async fn test_exact_bell_probabilities() {
        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&bell_circuit(), 0, None).await.unwrap();

        let status = backend.status(&job_id).await.unwrap();
        assert!(status.is_success());

        let result = backend.result(&job_id).await.unwrap();
        let probs = result.last_probability().unwrap();
        assert!((probs[0] - 0.5).abs() < 1e-10);
        assert!((probs[3] - 0.5).abs() < 1e-10);
        assert!(probs[1].abs() < 1e-10);
        assert!(probs[2].abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_sampled_bell_probabilities() {
        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&bell_circuit(), 1000, None).await.unwrap();

        let result = backend.result(&job_id).await.unwrap();
        let probs = result.last_probability().unwrap();
        // Only 00 and 11 ever appear; together they carry all the mass.
        assert!(probs[1].abs() < 1e-10);
        assert!(probs[2].abs() < 1e-10);
        assert!((probs[0] + probs[3] - 1.0).abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_expectation_identity_circuit() {
        let mut circuit = Circuit::new();
        circuit.i(QubitId(0)).expectation(Observable::z(), [QubitId(0)]);

        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&circuit, 0, None).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        assert!((result.expectation(0).unwrap() - 1.0).abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_parameter_binding_at_submission() {
        let mut circuit = Circuit::new();
        circuit
            .rx(ParameterExpression::symbol("theta"), QubitId(0))
            .probability([]);

        let mut values = HashMap::new();
        values.insert("theta".to_string(), 0.0);

        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&circuit, 0, Some(&values)).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        let probs = result.last_probability().unwrap();
        assert!((probs[0] - 1.0).abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_unbound_parameter_rejected() {
        let mut circuit = Circuit::new();
        circuit
            .rx(ParameterExpression::symbol("theta"), QubitId(0))
            .probability([]);

        let backend = SimulatorBackend::new();
        let result = backend.submit(&circuit, 0, None).await;
        assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
    }

    #[tokio::test]
    async fn test_too_many_qubits() {
        let backend = SimulatorBackend::with_max_qubits(5);

        let mut circuit = Circuit::new();
        circuit.x(QubitId(9)).probability([]);
        let result = backend.submit(&circuit, 100, None).await;

        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[tokio::test]
    async fn test_results_in_directive_order() {
        let mut circuit = Circuit::new();
        circuit
            .x(QubitId(0))
            .expectation(Observable::z(), [QubitId(0)])
            .probability([QubitId(0)]);

        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&circuit, 0, None).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        assert!((result.expectation(0).unwrap() + 1.0).abs() < 1e-10);
        let probs = result.probability(1).unwrap();
        assert!((probs[1] - 1.0).abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = BackendConfig::new("simulator").with_extra("max_qubits", serde_json::json!(8));
        let backend = SimulatorBackend::from_config(config).unwrap();

        let mut circuit = Circuit::new();
        circuit.x(QubitId(10)).probability([]);
        let result = backend.submit(&circuit, 0, None).await;
        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[tokio::test]
    async fn test_unknown_job() {
        let backend = SimulatorBackend::new();
        let result = backend.status(&JobId::new("missing")).await;
        assert!(matches!(result, Err(HalError::JobNotFound(_))));
    }
}
