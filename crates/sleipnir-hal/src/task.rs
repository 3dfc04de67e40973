//! The quantum task handle.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use sleipnir_ir::Circuit;

use crate::backend::Backend;
use crate::error::HalResult;
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Handle to a submitted unit of work.
///
/// A task is created by submitting a circuit to a [`Backend`] and is
/// read-only afterwards: callers poll its status or block on its result.
/// The backend owns the job; the task only refers to it.
#[derive(Clone)]
pub struct QuantumTask {
    backend: Arc<dyn Backend>,
    id: JobId,
}

impl QuantumTask {
    /// Submit a circuit and return the task handle.
    pub async fn submit(
        backend: Arc<dyn Backend>,
        circuit: &Circuit,
        shots: u32,
    ) -> HalResult<Self> {
        Self::submit_with_parameters(backend, circuit, shots, None).await
    }

    /// Submit a circuit with parameter bindings and return the task handle.
    pub async fn submit_with_parameters(
        backend: Arc<dyn Backend>,
        circuit: &Circuit,
        shots: u32,
        parameters: Option<&HashMap<String, f64>>,
    ) -> HalResult<Self> {
        let id = backend.submit(circuit, shots, parameters).await?;
        debug!("Submitted task {} to {}", id, backend.name());
        Ok(Self { backend, id })
    }

    /// The job identifier on the owning backend.
    pub fn id(&self) -> &JobId {
        &self.id
    }

    /// Current status of the task.
    pub async fn status(&self) -> HalResult<JobStatus> {
        self.backend.status(&self.id).await
    }

    /// Block until the task completes and return its result.
    pub async fn result(&self) -> HalResult<ExecutionResult> {
        self.backend.wait(&self.id).await
    }

    /// Cancel the task.
    pub async fn cancel(&self) -> HalResult<()> {
        self.backend.cancel(&self.id).await
    }
}

impl std::fmt::Debug for QuantumTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantumTask")
            .field("backend", &self.backend.name())
            .field("id", &self.id)
            .finish()
    }
}
