//! Reference quantum algorithms built on the Sleipnir circuit SDK.
//!
//! Each module pairs a circuit builder with a result decoder so the whole
//! flow reads end to end:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sleipnir_adapter_sim::SimulatorBackend;
//! use sleipnir_algorithms::bernstein_vazirani::{
//!     bernstein_vazirani_circuit, get_bernstein_vazirani_results,
//! };
//! use sleipnir_hal::QuantumTask;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = Arc::new(SimulatorBackend::new());
//! let circuit = bernstein_vazirani_circuit("011")?;
//! let task = QuantumTask::submit(backend, &circuit, 0).await?;
//! let probabilities = get_bernstein_vazirani_results(&task).await?;
//! assert!(probabilities["011"] > 0.99);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

pub mod bernstein_vazirani;
pub mod deutsch_jozsa;
pub mod error;
pub mod qaoa;

pub use error::{AlgorithmError, AlgorithmResult};

/// Label a flat probability vector of length `2^n` with zero-padded
/// bitstrings, rounding away float noise at the tenth decimal.
pub(crate) fn decode_probabilities(probabilities: &[f64]) -> BTreeMap<String, f64> {
    let num_qubits = probabilities.len().trailing_zeros() as usize;
    probabilities
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let key = format!("{i:0width$b}", width = num_qubits.max(1));
            (key, (p * 1e10).round() / 1e10)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pads_keys_to_register_width() {
        let map = decode_probabilities(&[0.25, 0.25, 0.25, 0.25]);
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, ["00", "01", "10", "11"]);
    }

    #[test]
    fn test_decode_rounds_float_noise() {
        let map = decode_probabilities(&[0.999_999_999_999_9, 1.0e-13]);
        assert_eq!(map["0"], 1.0);
        assert_eq!(map["1"], 0.0);
    }

    #[test]
    fn test_decode_single_amplitude() {
        let map = decode_probabilities(&[1.0]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["0"], 1.0);
    }
}
