//! Sleipnir local simulator backend.
//!
//! Simulates quantum circuits with a dense statevector and exposes the
//! result through the HAL's [`Backend`](sleipnir_hal::Backend) trait. With
//! zero shots the returned probability vectors and expectation values are
//! exact; with a positive shot count they are estimated from samples.

pub mod simulator;
pub mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
