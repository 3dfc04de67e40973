//! Sleipnir Hardware Abstraction Layer
//!
//! A unified interface for handing circuits to quantum execution engines,
//! whether a local simulator or a remote service.
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - The job lifecycle: [`JobId`], [`JobStatus`], [`Job`]
//! - Unified result handling via [`ExecutionResult`] and [`ResultValue`]
//! - [`QuantumTask`], an opaque handle tying a job to its backend
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use std::sync::Arc;
//! use sleipnir_hal::QuantumTask;
//! use sleipnir_adapter_sim::SimulatorBackend;
//! use sleipnir_ir::{Circuit, QubitId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut circuit = Circuit::new();
//!     circuit.h(QubitId(0)).cnot(QubitId(0), QubitId(1)).probability([]);
//!
//!     let backend = Arc::new(SimulatorBackend::new());
//!     let task = QuantumTask::submit(backend, &circuit, 0).await?;
//!
//!     let result = task.result().await?;
//!     println!("Probabilities: {:?}", result.last_probability());
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod job;
pub mod result;
pub mod task;

pub use backend::{Backend, BackendConfig, BackendFactory};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{ExecutionResult, ResultValue};
pub use task::QuantumTask;
