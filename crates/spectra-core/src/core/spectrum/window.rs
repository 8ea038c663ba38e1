use super::SpectrumError;

/// Upper bound on the number of bins a window may allocate.
pub const MAX_BINS: usize = 10_000_000;

/// Linear bins `start, start + step, …`, every value strictly below `stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyWindow {
    start: f64,
    stop: f64,
    step: f64,
    bins: usize,
}

impl FrequencyWindow {
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, SpectrumError> {
        let invalid = |reason| SpectrumError::InvalidWindow {
            start,
            stop,
            step,
            reason,
        };

        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(invalid("bounds and step must be finite"));
        }
        if step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        if stop <= start {
            return Err(invalid("stop must be greater than start"));
        }

        let span = (stop - start) / step;
        if span > MAX_BINS as f64 {
            return Err(invalid("too many bins"));
        }
        // Trim floating-point noise so that e.g. [0, 1) step 0.1 has 10 bins, not 11.
        let bins = ((span - span * 1e-12).ceil() as usize).max(1);

        Ok(Self {
            start,
            stop,
            step,
            bins,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn frequency(&self, bin: usize) -> f64 {
        self.start + bin as f64 * self.step
    }

    pub fn axis(&self) -> Vec<f64> {
        (0..self.bins).map(|i| self.frequency(i)).collect()
    }

    /// Whether `value` lies in `[start, stop)`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value < self.stop
    }

    /// The bin whose frequency is nearest to `value`, or `None` outside the window.
    pub fn nearest_bin(&self, value: f64) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        let index = ((value - self.start) / self.step).round() as usize;
        Some(index.min(self.bins - 1))
    }

    /// The edge bin closest to an out-of-window `value`.
    pub fn edge_bin(&self, value: f64) -> usize {
        if value < self.start { 0 } else { self.bins - 1 }
    }
}
