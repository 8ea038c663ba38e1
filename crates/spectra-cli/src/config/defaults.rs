use crate::cli::{LineshapeKind, SignalKind};
use spectra::core::spectrum::OutOfRangePolicy;

/// Built-in values used when neither the command line, `-S` nor the config file
/// provides one.
pub struct DefaultsConfig {
    pub length: usize,
    pub sample_spacing: f64,
    pub signal: SignalKind,
    pub delta_index: usize,
    pub tone_index: usize,
    pub phase: f64,
    pub sites: usize,
    pub site_energy: f64,
    pub coupling: f64,
    pub window: (f64, f64, f64),
    pub policy: OutOfRangePolicy,
    pub lineshape: LineshapeKind,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            length: 50,
            sample_spacing: 1.0,
            signal: SignalKind::Delta,
            delta_index: 0,
            tone_index: 1,
            phase: 0.0,
            sites: 2,
            site_energy: 17000.0,
            coupling: -100.0,
            window: (16500.0, 17500.0, 1.0),
            policy: OutOfRangePolicy::Clip,
            lineshape: LineshapeKind::Lorentzian,
        }
    }
}
