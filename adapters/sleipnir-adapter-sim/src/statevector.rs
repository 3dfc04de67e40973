//! Statevector simulation engine.

use num_complex::Complex64;
use std::f64::consts::PI;

use sleipnir_ir::Pauli;

/// A statevector representing a quantum state.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    pub fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    pub fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    pub fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    pub fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    pub fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    pub fn apply_s(&mut self, qubit: usize) {
        self.apply_phase(qubit, PI / 2.0);
    }

    pub fn apply_sdg(&mut self, qubit: usize) {
        self.apply_phase(qubit, -PI / 2.0);
    }

    pub fn apply_t(&mut self, qubit: usize) {
        self.apply_phase(qubit, PI / 4.0);
    }

    pub fn apply_tdg(&mut self, qubit: usize) {
        self.apply_phase(qubit, -PI / 4.0);
    }

    pub fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    pub fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    pub fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    // =========================================================================
    // Multi-qubit gate implementations
    // =========================================================================

    pub fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    pub fn apply_cy(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    pub fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    pub fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] *= phase;
            }
        }
    }

    pub fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// RZZ(θ) = exp(-i θ/2 Z⊗Z): equal bits pick up e^{-iθ/2}, unequal
    /// bits e^{+iθ/2}.
    pub fn apply_rzz(&mut self, q1: usize, q2: usize, theta: f64) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        let phase_even = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_odd = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            let parity = ((i & mask1 != 0) as u8) ^ ((i & mask2 != 0) as u8);
            if parity == 0 {
                self.amplitudes[i] *= phase_even;
            } else {
                self.amplitudes[i] *= phase_odd;
            }
        }
    }

    pub fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let c1_mask = 1 << c1;
        let c2_mask = 1 << c2;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & c1_mask != 0) && (i & c2_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Measurement and readout
    // =========================================================================

    /// Marginal probability distribution over `targets`.
    ///
    /// An empty target list means all qubits in ascending order. The output
    /// index maps targets in order with `targets[0]` as the most significant
    /// bit, so that `format!("{:0width$b}", key)` reads off the targets left
    /// to right.
    pub fn probabilities(&self, targets: &[usize]) -> Vec<f64> {
        let all: Vec<usize>;
        let targets = if targets.is_empty() {
            all = (0..self.num_qubits).collect();
            &all[..]
        } else {
            targets
        };

        let m = targets.len();
        let mut out = vec![0.0; 1 << m];
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p == 0.0 {
                continue;
            }
            out[Self::marginal_key(i, targets)] += p;
        }
        out
    }

    /// Map a full-register basis index to a marginal key over `targets`.
    pub fn marginal_key(outcome: usize, targets: &[usize]) -> usize {
        let m = targets.len();
        let mut key = 0usize;
        for (pos, &q) in targets.iter().enumerate() {
            if outcome & (1 << q) != 0 {
                key |= 1 << (m - 1 - pos);
            }
        }
        key
    }

    /// Expectation value of a Pauli-string observable over `targets`.
    pub fn expectation(&self, factors: &[Pauli], targets: &[usize]) -> f64 {
        let rotated = self.basis_rotated(factors, targets);
        rotated
            .amplitudes
            .iter()
            .enumerate()
            .map(|(i, amp)| amp.norm_sqr() * Self::parity(i, factors, targets))
            .sum()
    }

    /// A copy of this state rotated so that measuring `factors` reduces to a
    /// Z-basis measurement (H for X, S†·H for Y).
    pub fn basis_rotated(&self, factors: &[Pauli], targets: &[usize]) -> Statevector {
        let mut rotated = Statevector {
            amplitudes: self.amplitudes.clone(),
            num_qubits: self.num_qubits,
        };
        for (&factor, &q) in factors.iter().zip(targets) {
            match factor {
                Pauli::I | Pauli::Z => {}
                Pauli::X => rotated.apply_h(q),
                Pauli::Y => {
                    rotated.apply_sdg(q);
                    rotated.apply_h(q);
                }
            }
        }
        rotated
    }

    /// The ±1 eigenvalue of a Z-basis outcome under the observable: the
    /// product of (1 - 2·bit) over the non-identity factors.
    pub fn parity(outcome: usize, factors: &[Pauli], targets: &[usize]) -> f64 {
        let mut value = 1.0;
        for (&factor, &q) in factors.iter().zip(targets) {
            if factor == Pauli::I {
                continue;
            }
            if outcome & (1 << q) != 0 {
                value = -value;
            }
        }
        value
    }

    /// Sample a measurement outcome over the full register.
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }
}
