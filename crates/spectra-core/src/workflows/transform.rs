use crate::core::fourier::{
    FourierError, FourierTransform, FrequencyAxis, Normalization, SignConvention, fft_shift,
    is_conjugate_symmetric, max_abs_deviation,
};
use crate::core::io::tables::csv_writer;
use crate::core::io::{IoError, traits::TableFile};
use crate::engine::config::TransformConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use rustfft::num_complex::Complex64;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Relative tolerance used for the conjugate-symmetry check.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub signal: Vec<Complex64>,
    pub spectrum: Vec<Complex64>,
    pub reconstructed: Vec<Complex64>,
    pub axis: FrequencyAxis,
    pub convention: SignConvention,
    pub normalization: Normalization,
    /// Largest `|f[n] − inverse(forward(f))[n]|`.
    pub round_trip_error: f64,
    pub real_input: bool,
    pub conjugate_symmetric: bool,
}

impl TransformResult {
    pub fn spectrum_table(&self, shifted: bool) -> SpectrumTable<'_> {
        SpectrumTable {
            result: self,
            shifted,
        }
    }

    pub fn signal_table(&self) -> SignalTable<'_> {
        SignalTable { result: self }
    }
}

#[instrument(skip_all, name = "transform_workflow")]
pub fn run(
    config: &TransformConfig,
    reporter: &ProgressReporter,
) -> Result<TransformResult, EngineError> {
    info!(
        "Transforming a {} signal of length {} ({} convention, {} normalization).",
        config.signal.name(),
        config.length,
        config.convention,
        config.normalization
    );

    let signal = reporter.phase("Signal construction", || {
        config.signal.generate(config.length, config.sample_spacing)
    })?;
    let axis = FrequencyAxis::new(config.length, config.sample_spacing)?;

    let (spectrum, reconstructed) = reporter.phase("Transform", || {
        let fft = FourierTransform::new(config.length, config.convention, config.normalization)?;
        let spectrum = fft.forward(&signal)?;
        let reconstructed = fft.inverse(&spectrum)?;
        Ok::<_, FourierError>((spectrum, reconstructed))
    })?;

    let round_trip_error = max_abs_deviation(&signal, &reconstructed);
    let scale = spectrum.iter().map(|c| c.norm()).fold(1.0, f64::max);
    let conjugate_symmetric = is_conjugate_symmetric(&spectrum, SYMMETRY_TOLERANCE * scale);
    let real_input = config.signal.is_real();

    debug!(round_trip_error, conjugate_symmetric, "Transform finished");
    if real_input && !conjugate_symmetric {
        warn!("Spectrum of a real signal is not conjugate-symmetric within tolerance.");
    }

    Ok(TransformResult {
        signal,
        spectrum,
        reconstructed,
        axis,
        convention: config.convention,
        normalization: config.normalization,
        round_trip_error,
        real_input,
        conjugate_symmetric,
    })
}

/// Frequency-domain rows: `index, frequency, angular_frequency, re, im, magnitude, phase`.
///
/// With `shifted` the rows follow [`FrequencyAxis::shifted`]; `index` stays the original
/// bin index.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumTable<'a> {
    result: &'a TransformResult,
    shifted: bool,
}

impl TableFile for SpectrumTable<'_> {
    fn header(&self) -> Vec<String> {
        [
            "index",
            "frequency",
            "angular_frequency",
            "re",
            "im",
            "magnitude",
            "phase",
        ]
        .map(String::from)
        .to_vec()
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), IoError> {
        let bins: Vec<usize> = (0..self.result.spectrum.len()).collect();
        let order = if self.shifted { fft_shift(&bins) } else { bins };
        let frequencies = self.result.axis.linear();
        let angular = self.result.axis.angular();

        let mut wtr = csv_writer(writer);
        wtr.write_record(self.header())?;
        for k in order {
            let value = self.result.spectrum[k];
            wtr.serialize((
                k,
                frequencies[k],
                angular[k],
                value.re,
                value.im,
                value.norm(),
                value.arg(),
            ))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Time-domain rows: `index, time, re, im, reconstructed_re, reconstructed_im`.
#[derive(Debug, Clone, Copy)]
pub struct SignalTable<'a> {
    result: &'a TransformResult,
}

impl TableFile for SignalTable<'_> {
    fn header(&self) -> Vec<String> {
        ["index", "time", "re", "im", "reconstructed_re", "reconstructed_im"]
            .map(String::from)
            .to_vec()
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), IoError> {
        let dt = self.result.axis.sample_spacing();
        let mut wtr = csv_writer(writer);
        wtr.write_record(self.header())?;
        for (n, (value, restored)) in self
            .result
            .signal
            .iter()
            .zip(&self.result.reconstructed)
            .enumerate()
        {
            wtr.serialize((
                n,
                n as f64 * dt,
                value.re,
                value.im,
                restored.re,
                restored.im,
            ))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
