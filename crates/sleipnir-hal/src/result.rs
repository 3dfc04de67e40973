//! Execution results.
//!
//! A completed job materializes one [`ResultValue`] per result directive
//! attached to the circuit, in attachment order.

use serde::{Deserialize, Serialize};

/// One materialized result value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultValue {
    /// Probability vector over the 2^k basis states of the directive's
    /// target qubits, indexed by basis-state value.
    Probability(Vec<f64>),
    /// Expectation value of the directive's observable.
    Expectation(f64),
}

impl ResultValue {
    /// The probability vector, if this value is one.
    pub fn as_probability(&self) -> Option<&[f64]> {
        match self {
            ResultValue::Probability(v) => Some(v),
            ResultValue::Expectation(_) => None,
        }
    }

    /// The expectation scalar, if this value is one.
    pub fn as_expectation(&self) -> Option<f64> {
        match self {
            ResultValue::Expectation(v) => Some(*v),
            ResultValue::Probability(_) => None,
        }
    }
}

/// Result of a completed execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Result values, one per directive, in attachment order.
    pub values: Vec<ResultValue>,
    /// Number of shots executed (0 = exact analytic values).
    pub shots: u32,
    /// Execution time in milliseconds, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(values: Vec<ResultValue>, shots: u32) -> Self {
        Self {
            values,
            shots,
            execution_time_ms: None,
        }
    }

    /// Set the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }

    /// The probability vector of the `i`-th directive, if it is one.
    pub fn probability(&self, i: usize) -> Option<&[f64]> {
        self.values.get(i).and_then(ResultValue::as_probability)
    }

    /// The expectation value of the `i`-th directive, if it is one.
    pub fn expectation(&self, i: usize) -> Option<f64> {
        self.values.get(i).and_then(ResultValue::as_expectation)
    }

    /// The last probability vector in the result, if any.
    pub fn last_probability(&self) -> Option<&[f64]> {
        self.values.iter().rev().find_map(ResultValue::as_probability)
    }

    /// All expectation values, in directive order.
    pub fn expectations(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(ResultValue::as_expectation)
    }
}
