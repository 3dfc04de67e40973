//! Sleipnir Circuit Intermediate Representation
//!
//! Core data structures for describing quantum circuits: gates, qubit
//! addressing, symbolic parameters, observables, and the terminal result
//! directives a backend materializes after execution.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered sequence of gate [`Instruction`]s plus zero or
//! more [`ResultType`] directives (probability over a qubit subset,
//! expectation of an [`Observable`]). Circuits are plain values: built
//! incrementally through the fluent API, compared structurally, and never
//! mutated by submission.
//!
//! # Example: Bell pair with a probability directive
//!
//! ```rust
//! use sleipnir_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new();
//! circuit
//!     .h(QubitId(0))
//!     .cnot(QubitId(0), QubitId(1))
//!     .probability([]);
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! ```
//!
//! # Example: Parameterized rotation
//!
//! ```rust
//! use sleipnir_ir::{Circuit, ParameterExpression, QubitId};
//! use std::collections::HashMap;
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::new();
//! circuit.rx(ParameterExpression::symbol("theta"), QubitId(0));
//! assert!(circuit.is_parameterized());
//!
//! let mut values = HashMap::new();
//! values.insert("theta".to_string(), PI / 4.0);
//! let bound = circuit.bind_parameters(&values);
//! assert!(!bound.is_parameterized());
//! ```

pub mod circuit;
pub mod gate;
pub mod instruction;
pub mod observable;
pub mod parameter;
pub mod qubit;
pub mod result_type;

pub use circuit::Circuit;
pub use gate::Gate;
pub use instruction::Instruction;
pub use observable::{Observable, Pauli};
pub use parameter::ParameterExpression;
pub use qubit::QubitId;
pub use result_type::ResultType;
