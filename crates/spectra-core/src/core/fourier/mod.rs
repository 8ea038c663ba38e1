//! Discrete Fourier Transforms with an explicit sign and normalization convention.
//!
//! The forward transform of a length-`N` sequence is
//!
//! ```text
//! F[k] = Σ_{n=0}^{N-1} f[n]·exp(-2πi·k·n/N)
//! ```
//!
//! and the inverse carries the `1/N` factor:
//!
//! ```text
//! f[n] = (1/N)·Σ_{k=0}^{N-1} F[k]·exp(+2πi·k·n/N)
//! ```
//!
//! This is [`SignConvention::Engineering`] with [`Normalization::Backward`], the default.
//! The physics convention flips the exponent sign in both directions; the two only
//! compose correctly when the same convention is used for forward and inverse, which is
//! why [`FourierTransform`] fixes both at construction.
//!
//! ## Submodules
//!
//! - [`convention`] - sign and normalization conventions
//! - [`transform`] - planned forward/inverse transforms on top of `rustfft`
//! - [`frequency`] - mapping from bin index to physical frequency, plus shift helpers
//! - [`signal`] - the test signals used to exercise the transform

pub mod convention;
pub mod frequency;
pub mod signal;
pub mod transform;

pub use convention::{Normalization, SignConvention};
pub use frequency::{FrequencyAxis, fft_shift, ifft_shift};
pub use signal::SignalSpec;
pub use transform::{FourierError, FourierTransform, is_conjugate_symmetric, max_abs_deviation};
