//! Absorption spectra assembled from exciton transitions.
//!
//! A [`StickSpectrum`] bins each transition's dipole weight into the nearest bin of a
//! [`FrequencyWindow`]. Transitions outside the window are handled by an explicit
//! [`OutOfRangePolicy`]; the default clips them into the nearest edge bin so the total
//! weight in the spectrum equals the total weight of the transitions.
//!
//! [`broaden`] turns the sticks into a continuous lineshape on the same axis.

pub mod broadening;
pub mod stick;
pub mod window;

use thiserror::Error;

pub use broadening::{BroadenedSpectrum, Lineshape, broaden};
pub use stick::{OutOfRangePolicy, StickPlacement, StickSpectrum};
pub use window::FrequencyWindow;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("Invalid frequency window [{start}, {stop}) step {step}: {reason}")]
    InvalidWindow {
        start: f64,
        stop: f64,
        step: f64,
        reason: &'static str,
    },

    #[error(
        "Transition {state} at {energy} lies outside the frequency window [{start}, {stop})"
    )]
    OutOfWindow {
        state: usize,
        energy: f64,
        start: f64,
        stop: f64,
    },

    #[error("Transition {state} has a non-finite energy or weight")]
    NonFiniteTransition { state: usize },

    #[error("Invalid linewidth {0}: must be finite and positive")]
    InvalidLinewidth(f64),
}
