use super::transform::FourierError;
use std::f64::consts::TAU;

/// Physical frequencies of the `N` bins of a DFT of samples spaced `δt` apart.
///
/// Bin `k` is `k/(N·δt)` for `k ≤ N/2` and `(k−N)/(N·δt)` above, so the axis starts at
/// zero, increases up to the Nyquist bin, then wraps to the negative frequencies. For
/// even `N` the Nyquist bin `N/2` is reported as `+1/(2·δt)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    sample_spacing: f64,
    values: Vec<f64>,
}

impl FrequencyAxis {
    pub fn new(len: usize, sample_spacing: f64) -> Result<Self, FourierError> {
        if len == 0 {
            return Err(FourierError::EmptyInput);
        }
        if !sample_spacing.is_finite() || sample_spacing <= 0.0 {
            return Err(FourierError::InvalidSampleSpacing(sample_spacing));
        }

        let values = (0..len)
            .map(|k| bin_frequency(k, len, sample_spacing))
            .collect();
        Ok(Self {
            sample_spacing,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sample_spacing(&self) -> f64 {
        self.sample_spacing
    }

    /// Linear frequencies in bin order.
    pub fn linear(&self) -> &[f64] {
        &self.values
    }

    /// Angular frequencies `ω = 2π·f` in bin order.
    pub fn angular(&self) -> Vec<f64> {
        self.values.iter().map(|f| TAU * f).collect()
    }

    /// Spacing between adjacent bins, `1/(N·δt)`.
    pub fn resolution(&self) -> f64 {
        1.0 / (self.values.len() as f64 * self.sample_spacing)
    }

    pub fn nyquist(&self) -> f64 {
        0.5 / self.sample_spacing
    }

    /// The axis reordered from the most negative frequency to the most positive one.
    pub fn shifted(&self) -> Vec<f64> {
        fft_shift(&self.values)
    }
}

#[inline]
pub fn bin_frequency(index: usize, len: usize, sample_spacing: f64) -> f64 {
    let span = len as f64 * sample_spacing;
    if index <= len / 2 {
        index as f64 / span
    } else {
        (index as f64 - len as f64) / span
    }
}

/// Number of non-negative bins, which is also the rotation that sorts the axis.
#[inline]
fn non_negative_bins(len: usize) -> usize {
    (len / 2 + 1).min(len)
}

/// Reorders a bin-ordered sequence so that it follows [`FrequencyAxis::shifted`].
pub fn fft_shift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut shifted = values.to_vec();
    shifted.rotate_left(non_negative_bins(values.len()));
    shifted
}

/// Undoes [`fft_shift`].
pub fn ifft_shift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut restored = values.to_vec();
    restored.rotate_right(non_negative_bins(values.len()));
    restored
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn even_length_axis_wraps_after_nyquist_bin() {
        let axis = FrequencyAxis::new(8, 0.5).unwrap();
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0, -0.75, -0.5, -0.25];
        for (value, want) in axis.linear().iter().zip(expected) {
            assert!(f64_approx_equal(*value, want), "{value} != {want}");
        }
        assert!(f64_approx_equal(axis.nyquist(), 1.0));
        assert!(f64_approx_equal(axis.resolution(), 0.25));
    }

    #[test]
    fn odd_length_axis_is_symmetric_about_zero() {
        let axis = FrequencyAxis::new(5, 1.0).unwrap();
        let expected = [0.0, 0.2, 0.4, -0.4, -0.2];
        for (value, want) in axis.linear().iter().zip(expected) {
            assert!(f64_approx_equal(*value, want));
        }
    }

    #[test]
    fn angular_axis_is_two_pi_times_linear() {
        let axis = FrequencyAxis::new(6, 0.1).unwrap();
        for (w, f) in axis.angular().iter().zip(axis.linear()) {
            assert!(f64_approx_equal(*w, TAU * f));
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert_eq!(
            FrequencyAxis::new(0, 1.0).unwrap_err(),
            FourierError::EmptyInput
        );
        assert_eq!(
            FrequencyAxis::new(4, 0.0).unwrap_err(),
            FourierError::InvalidSampleSpacing(0.0)
        );
        assert!(FrequencyAxis::new(4, f64::NAN).is_err());
        assert!(FrequencyAxis::new(4, -1.0).is_err());
    }

    #[test]
    fn shifted_axis_is_strictly_increasing() {
        for len in 1..=11 {
            let axis = FrequencyAxis::new(len, 1.0).unwrap();
            let shifted = axis.shifted();
            assert_eq!(shifted.len(), len);
            assert!(shifted.windows(2).all(|w| w[0] < w[1]), "len {len}");
        }
    }

    #[test]
    fn ifft_shift_undoes_fft_shift() {
        for len in 0..=9 {
            let values: Vec<usize> = (0..len).collect();
            assert_eq!(ifft_shift(&fft_shift(&values)), values);
        }
    }
}
