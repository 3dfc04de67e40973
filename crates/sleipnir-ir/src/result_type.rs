//! Terminal result-type directives.
//!
//! A circuit carries zero or more directives describing what the backend
//! should return after execution. The backend materializes one result value
//! per directive, in attachment order.

use serde::{Deserialize, Serialize};

use crate::observable::Observable;
use crate::qubit::QubitId;

/// A result directive attached to the end of a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultType {
    /// Probability distribution over the computational basis of the target
    /// qubits. An empty target list means all qubits in the circuit.
    Probability {
        /// Qubits the distribution is marginalized onto, in key-bit order
        /// (first target is the most significant bit of the result keys).
        targets: Vec<QubitId>,
    },
    /// Expectation value of an observable.
    Expectation {
        /// The observable to measure.
        observable: Observable,
        /// Qubits the observable's factors act on, in factor order.
        targets: Vec<QubitId>,
    },
}

impl ResultType {
    /// Qubits referenced by this directive.
    pub fn targets(&self) -> &[QubitId] {
        match self {
            ResultType::Probability { targets } => targets,
            ResultType::Expectation { targets, .. } => targets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        let p = ResultType::Probability {
            targets: vec![QubitId(0), QubitId(1)],
        };
        assert_eq!(p.targets(), &[QubitId(0), QubitId(1)]);

        let e = ResultType::Expectation {
            observable: Observable::z(),
            targets: vec![QubitId(2)],
        };
        assert_eq!(e.targets(), &[QubitId(2)]);
    }
}
