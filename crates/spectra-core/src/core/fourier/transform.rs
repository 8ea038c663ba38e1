use super::convention::{Normalization, SignConvention};
use rustfft::num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FourierError {
    #[error("Transform length must be at least 1")]
    EmptyInput,

    #[error("Input has {actual} samples but the transform was planned for {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid sample spacing {0}: must be finite and positive")]
    InvalidSampleSpacing(f64),

    #[error("Invalid signal parameter '{name}': {reason}")]
    InvalidSignal { name: &'static str, reason: String },
}

/// A forward/inverse transform pair planned for one length and one convention.
///
/// `rustfft` computes unnormalized sums with a negative exponent for its forward plan
/// and a positive exponent for its inverse plan. The engineering convention uses them
/// as-is; the physics convention swaps them. Scaling is applied afterwards according to
/// the [`Normalization`].
pub struct FourierTransform {
    len: usize,
    convention: SignConvention,
    normalization: Normalization,
    forward_plan: Arc<dyn Fft<f64>>,
    inverse_plan: Arc<dyn Fft<f64>>,
}

impl FourierTransform {
    pub fn new(
        len: usize,
        convention: SignConvention,
        normalization: Normalization,
    ) -> Result<Self, FourierError> {
        if len == 0 {
            return Err(FourierError::EmptyInput);
        }

        let mut planner = FftPlanner::<f64>::new();
        let negative = planner.plan_fft_forward(len);
        let positive = planner.plan_fft_inverse(len);
        let (forward_plan, inverse_plan) = match convention {
            SignConvention::Engineering => (negative, positive),
            SignConvention::Physics => (positive, negative),
        };

        Ok(Self {
            len,
            convention,
            normalization,
            forward_plan,
            inverse_plan,
        })
    }

    /// Plans a transform with the default engineering/backward convention.
    pub fn with_default_convention(len: usize) -> Result<Self, FourierError> {
        Self::new(len, SignConvention::default(), Normalization::default())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn convention(&self) -> SignConvention {
        self.convention
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn forward(&self, input: &[Complex64]) -> Result<Vec<Complex64>, FourierError> {
        let scale = self.normalization.forward_scale(self.len);
        self.apply(&self.forward_plan, input.to_vec(), scale)
    }

    /// Forward transform of a real sequence. The result is still complex.
    pub fn forward_real(&self, input: &[f64]) -> Result<Vec<Complex64>, FourierError> {
        let buffer = input.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        let scale = self.normalization.forward_scale(self.len);
        self.apply(&self.forward_plan, buffer, scale)
    }

    pub fn inverse(&self, input: &[Complex64]) -> Result<Vec<Complex64>, FourierError> {
        let scale = self.normalization.inverse_scale(self.len);
        self.apply(&self.inverse_plan, input.to_vec(), scale)
    }

    fn apply(
        &self,
        plan: &Arc<dyn Fft<f64>>,
        mut buffer: Vec<Complex64>,
        scale: f64,
    ) -> Result<Vec<Complex64>, FourierError> {
        if buffer.len() != self.len {
            return Err(FourierError::LengthMismatch {
                expected: self.len,
                actual: buffer.len(),
            });
        }

        plan.process(&mut buffer);
        if scale != 1.0 {
            for value in buffer.iter_mut() {
                *value *= scale;
            }
        }
        Ok(buffer)
    }
}

impl fmt::Debug for FourierTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FourierTransform")
            .field("len", &self.len)
            .field("convention", &self.convention)
            .field("normalization", &self.normalization)
            .finish()
    }
}

/// Forward DFT with the default convention, planning a transform for `input.len()`.
pub fn forward(input: &[Complex64]) -> Result<Vec<Complex64>, FourierError> {
    FourierTransform::with_default_convention(input.len())?.forward(input)
}

/// Inverse DFT with the default convention, planning a transform for `input.len()`.
pub fn inverse(input: &[Complex64]) -> Result<Vec<Complex64>, FourierError> {
    FourierTransform::with_default_convention(input.len())?.inverse(input)
}

/// Checks `F[(N-k) mod N] == conj(F[k])` for every `k`, the symmetry of the transform of
/// a real sequence.
pub fn is_conjugate_symmetric(values: &[Complex64], tolerance: f64) -> bool {
    let n = values.len();
    (0..n).all(|k| (values[(n - k) % n] - values[k].conj()).norm() <= tolerance)
}

/// Largest absolute deviation between two sequences of equal length.
pub fn max_abs_deviation(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}
