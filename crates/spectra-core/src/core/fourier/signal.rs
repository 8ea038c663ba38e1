use super::transform::FourierError;
use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Describes one of the test signals by its scalar parameters.
///
/// Sample `m` sits at time `t = m·δt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum SignalSpec {
    /// A single `1` at `index`, zero elsewhere.
    Delta { index: usize },
    /// The complex exponential `exp(+2πi·index·m/N)`, which the forward transform maps
    /// onto bin `index` alone.
    Tone { index: usize },
    Cosine {
        frequency: f64,
        #[serde(default)]
        phase: f64,
    },
    GaussianPulse { centre: f64, width: f64 },
    DampedOscillation { frequency: f64, decay: f64 },
}

impl SignalSpec {
    pub fn name(&self) -> &'static str {
        match self {
            SignalSpec::Delta { .. } => "delta",
            SignalSpec::Tone { .. } => "tone",
            SignalSpec::Cosine { .. } => "cosine",
            SignalSpec::GaussianPulse { .. } => "gaussian-pulse",
            SignalSpec::DampedOscillation { .. } => "damped-oscillation",
        }
    }

    pub fn is_real(&self) -> bool {
        !matches!(self, SignalSpec::Tone { .. })
    }

    pub fn generate(
        &self,
        len: usize,
        sample_spacing: f64,
    ) -> Result<Vec<Complex64>, FourierError> {
        match *self {
            SignalSpec::Delta { index } => delta(len, index).map(lift),
            SignalSpec::Tone { index } => tone(len, index),
            SignalSpec::Cosine { frequency, phase } => {
                cosine(len, sample_spacing, frequency, phase).map(lift)
            }
            SignalSpec::GaussianPulse { centre, width } => {
                gaussian_pulse(len, sample_spacing, centre, width).map(lift)
            }
            SignalSpec::DampedOscillation { frequency, decay } => {
                damped_oscillation(len, sample_spacing, frequency, decay).map(lift)
            }
        }
    }
}

fn lift(values: Vec<f64>) -> Vec<Complex64> {
    values.into_iter().map(|x| Complex64::new(x, 0.0)).collect()
}

fn check_length(len: usize) -> Result<(), FourierError> {
    if len == 0 {
        Err(FourierError::EmptyInput)
    } else {
        Ok(())
    }
}

fn check_spacing(sample_spacing: f64) -> Result<(), FourierError> {
    if sample_spacing.is_finite() && sample_spacing > 0.0 {
        Ok(())
    } else {
        Err(FourierError::InvalidSampleSpacing(sample_spacing))
    }
}

fn check_index(name: &'static str, index: usize, len: usize) -> Result<(), FourierError> {
    if index < len {
        Ok(())
    } else {
        Err(FourierError::InvalidSignal {
            name,
            reason: format!("index {} is outside 0..{}", index, len),
        })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), FourierError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FourierError::InvalidSignal {
            name,
            reason: format!("{} is not finite", value),
        })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), FourierError> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(FourierError::InvalidSignal {
            name,
            reason: format!("{} must be positive", value),
        })
    }
}

pub fn delta(len: usize, index: usize) -> Result<Vec<f64>, FourierError> {
    check_length(len)?;
    check_index("index", index, len)?;
    let mut values = vec![0.0; len];
    values[index] = 1.0;
    Ok(values)
}

pub fn tone(len: usize, index: usize) -> Result<Vec<Complex64>, FourierError> {
    check_length(len)?;
    check_index("index", index, len)?;
    let n = len as f64;
    Ok((0..len)
        .map(|m| Complex64::from_polar(1.0, TAU * ((index * m) % len) as f64 / n))
        .collect())
}

pub fn cosine(
    len: usize,
    sample_spacing: f64,
    frequency: f64,
    phase: f64,
) -> Result<Vec<f64>, FourierError> {
    check_length(len)?;
    check_spacing(sample_spacing)?;
    check_finite("frequency", frequency)?;
    check_finite("phase", phase)?;
    Ok((0..len)
        .map(|m| (TAU * frequency * m as f64 * sample_spacing + phase).cos())
        .collect())
}

pub fn gaussian_pulse(
    len: usize,
    sample_spacing: f64,
    centre: f64,
    width: f64,
) -> Result<Vec<f64>, FourierError> {
    check_length(len)?;
    check_spacing(sample_spacing)?;
    check_finite("centre", centre)?;
    check_positive("width", width)?;
    Ok((0..len)
        .map(|m| {
            let x = (m as f64 * sample_spacing - centre) / width;
            (-0.5 * x * x).exp()
        })
        .collect())
}

/// `cos(2π·f·t)·exp(−t/decay)`.
pub fn damped_oscillation(
    len: usize,
    sample_spacing: f64,
    frequency: f64,
    decay: f64,
) -> Result<Vec<f64>, FourierError> {
    check_length(len)?;
    check_spacing(sample_spacing)?;
    check_finite("frequency", frequency)?;
    check_positive("decay", decay)?;
    Ok((0..len)
        .map(|m| {
            let t = m as f64 * sample_spacing;
            (TAU * frequency * t).cos() * (-t / decay).exp()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fourier::transform::FourierTransform;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn delta_places_single_unit_sample() {
        let values = delta(5, 3).unwrap();
        assert_eq!(values, vec![0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn delta_rejects_out_of_range_index_and_empty_length() {
        assert!(matches!(
            delta(4, 4),
            Err(FourierError::InvalidSignal { name: "index", .. })
        ));
        assert_eq!(delta(0, 0).unwrap_err(), FourierError::EmptyInput);
    }

    #[test]
    fn tone_transforms_to_a_single_bin() {
        let n = 16;
        let signal = tone(n, 3).unwrap();
        let spectrum = FourierTransform::with_default_convention(n)
            .unwrap()
            .forward(&signal)
            .unwrap();
        for (k, value) in spectrum.iter().enumerate() {
            let expected = if k == 3 { n as f64 } else { 0.0 };
            assert!((value.re - expected).abs() < TOLERANCE);
            assert!(value.im.abs() < TOLERANCE);
        }
    }

    #[test]
    fn cosine_on_bin_frequency_splits_between_positive_and_negative_bins() {
        let n = 20;
        let dt = 0.5;
        let frequency = 2.0 / (n as f64 * dt);
        let signal = cosine(n, dt, frequency, 0.0).unwrap();
        let spectrum = FourierTransform::with_default_convention(n)
            .unwrap()
            .forward_real(&signal)
            .unwrap();
        for (k, value) in spectrum.iter().enumerate() {
            let expected = if k == 2 || k == n - 2 { n as f64 / 2.0 } else { 0.0 };
            assert!((value.norm() - expected).abs() < 1e-8, "bin {k}");
        }
    }

    #[test]
    fn gaussian_pulse_peaks_at_centre() {
        let values = gaussian_pulse(11, 1.0, 5.0, 2.0).unwrap();
        assert!((values[5] - 1.0).abs() < TOLERANCE);
        assert!((values[4] - values[6]).abs() < TOLERANCE);
        assert!(values[0] < values[4]);
    }

    #[test]
    fn gaussian_pulse_rejects_non_positive_width() {
        assert!(matches!(
            gaussian_pulse(8, 1.0, 0.0, 0.0),
            Err(FourierError::InvalidSignal { name: "width", .. })
        ));
    }

    #[test]
    fn damped_oscillation_decays_by_e_after_one_decay_time() {
        let values = damped_oscillation(11, 0.1, 0.0, 1.0).unwrap();
        assert!((values[0] - 1.0).abs() < TOLERANCE);
        assert!((values[10] - (-1.0f64).exp()).abs() < TOLERANCE);
    }

    #[test]
    fn spec_generates_complex_samples_and_reports_realness() {
        let spec = SignalSpec::Delta { index: 0 };
        let samples = spec.generate(4, 1.0).unwrap();
        assert_eq!(samples[0], Complex64::new(1.0, 0.0));
        assert!(spec.is_real());
        assert!(!SignalSpec::Tone { index: 1 }.is_real());
    }

    #[test]
    fn spec_generation_validates_sample_spacing() {
        let spec = SignalSpec::Cosine {
            frequency: 1.0,
            phase: 0.0,
        };
        assert_eq!(
            spec.generate(4, -1.0).unwrap_err(),
            FourierError::InvalidSampleSpacing(-1.0)
        );
    }

    #[test]
    fn spec_deserializes_from_kebab_case_table() {
        let spec: SignalSpec =
            toml::from_str("kind = \"gaussian-pulse\"\ncentre = 2.0\nwidth = 0.5").unwrap();
        assert_eq!(
            spec,
            SignalSpec::GaussianPulse {
                centre: 2.0,
                width: 0.5
            }
        );
        assert_eq!(spec.name(), "gaussian-pulse");
    }
}
