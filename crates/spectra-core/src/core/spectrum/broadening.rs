use super::SpectrumError;
use super::stick::StickSpectrum;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Unit-area line profile, parameterized by its full width at half maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "lineshape")]
pub enum Lineshape {
    Lorentzian { fwhm: f64 },
    Gaussian { fwhm: f64 },
}

impl Lineshape {
    pub fn fwhm(&self) -> f64 {
        match *self {
            Lineshape::Lorentzian { fwhm } | Lineshape::Gaussian { fwhm } => fwhm,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Lineshape::Lorentzian { .. } => "lorentzian",
            Lineshape::Gaussian { .. } => "gaussian",
        }
    }

    pub fn validate(&self) -> Result<(), SpectrumError> {
        let fwhm = self.fwhm();
        if fwhm.is_finite() && fwhm > 0.0 {
            Ok(())
        } else {
            Err(SpectrumError::InvalidLinewidth(fwhm))
        }
    }

    /// Profile value at `offset` from the line centre.
    #[inline]
    pub fn evaluate(&self, offset: f64) -> f64 {
        match *self {
            Lineshape::Lorentzian { fwhm } => {
                let gamma = 0.5 * fwhm;
                gamma / (PI * (offset * offset + gamma * gamma))
            }
            Lineshape::Gaussian { fwhm } => {
                let sigma = fwhm / (2.0 * (2.0 * 2f64.ln()).sqrt());
                let x = offset / sigma;
                (-0.5 * x * x).exp() / (sigma * (2.0 * PI).sqrt())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BroadenedSpectrum {
    lineshape: Lineshape,
    axis: Vec<f64>,
    intensities: Vec<f64>,
}

impl BroadenedSpectrum {
    pub fn lineshape(&self) -> Lineshape {
        self.lineshape
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    /// Rectangle-rule integral over the axis.
    pub fn integral(&self) -> f64 {
        let step = match self.axis.as_slice() {
            [a, b, ..] => b - a,
            _ => return 0.0,
        };
        self.intensities.iter().sum::<f64>() * step
    }
}

/// Replaces each stick with a lineshape centred on the transition's exact energy.
///
/// Dropped transitions stay out; clipped transitions contribute from their true
/// (out-of-window) energy, so only their tails show up on the axis.
pub fn broaden(
    spectrum: &StickSpectrum,
    lineshape: Lineshape,
) -> Result<BroadenedSpectrum, SpectrumError> {
    lineshape.validate()?;
    let axis = spectrum.axis();

    let mut intensities = vec![0.0; axis.len()];
    for placement in spectrum.placements().iter().filter(|p| p.bin.is_some()) {
        let t = placement.transition;
        if t.weight == 0.0 {
            continue;
        }
        for (value, &frequency) in intensities.iter_mut().zip(&axis) {
            *value += t.weight * lineshape.evaluate(frequency - t.energy);
        }
    }

    Ok(BroadenedSpectrum {
        lineshape,
        axis,
        intensities,
    })
}
