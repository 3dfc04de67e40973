//! Backend trait and configuration.
//!
//! The [`Backend`] trait defines the lifecycle for interacting with a
//! quantum execution engine:
//!
//! ```text
//!   submit() ──→ status() ──→ result()
//!    (async)      (async)      (async)
//! ```
//!
//! All I/O methods are async; the `Send + Sync` bound enables shared
//! ownership behind an `Arc`. A `shots` value of 0 requests exact analytic
//! values rather than sampled shots, where the backend supports it.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use sleipnir_ir::Circuit;

use crate::error::HalResult;
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Configuration for a backend instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for quantum execution backends.
///
/// # Contract
///
/// - `submit()` MUST return a `JobId` whose initial status is `Queued` or a
///   later state if the backend executes synchronously.
/// - `result()` MUST only be called when status is `Completed`; use
///   [`Backend::wait`] to block until then.
/// - The result's `values` are in the same order the result directives were
///   attached to the circuit.
/// - `parameters`, when given, maps free parameter names to concrete values;
///   the backend binds them before execution and MUST reject circuits that
///   still carry free parameters afterwards.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Submit a circuit for execution with optional parameter bindings.
    ///
    /// Returns a job ID that can be used to check status and retrieve
    /// results. The submitted circuit is read, never mutated.
    async fn submit(
        &self,
        circuit: &Circuit,
        shots: u32,
        parameters: Option<&HashMap<String, f64>>,
    ) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    ///
    /// MUST only be called when `status()` returns `Completed`.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a running job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    ///
    /// Default implementation polls every 100ms for up to 5 minutes.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        use crate::error::HalError;
        use tokio::time::sleep;

        let poll_interval = Duration::from_millis(100);
        let max_polls = 3000; // 5 minutes max

        for _ in 0..max_polls {
            let status = self.status(job_id).await?;

            match status {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    sleep(poll_interval).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}
