use super::SpectrumError;
use super::window::FrequencyWindow;
use crate::core::exciton::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// What to do with a transition whose energy lies outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutOfRangePolicy {
    /// Put the weight into the nearest edge bin.
    #[default]
    Clip,
    /// Leave the weight out of the spectrum.
    Drop,
    /// Fail with [`SpectrumError::OutOfWindow`].
    Error,
}

impl fmt::Display for OutOfRangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRangePolicy::Clip => write!(f, "clip"),
            OutOfRangePolicy::Drop => write!(f, "drop"),
            OutOfRangePolicy::Error => write!(f, "error"),
        }
    }
}

impl FromStr for OutOfRangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clip" => Ok(OutOfRangePolicy::Clip),
            "drop" => Ok(OutOfRangePolicy::Drop),
            "error" => Ok(OutOfRangePolicy::Error),
            other => Err(format!(
                "unknown out-of-range policy '{}' (expected 'clip', 'drop' or 'error')",
                other
            )),
        }
    }
}

/// Where a single transition ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickPlacement {
    pub transition: Transition,
    /// `None` when the transition was dropped.
    pub bin: Option<usize>,
    pub clipped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StickSpectrum {
    window: FrequencyWindow,
    intensities: Vec<f64>,
    placements: Vec<StickPlacement>,
    policy: OutOfRangePolicy,
}

impl StickSpectrum {
    /// Accumulates every transition's weight into the bin nearest its energy.
    ///
    /// Transitions need not be sorted; colliding transitions add up in the same bin.
    pub fn build(
        window: FrequencyWindow,
        transitions: &[Transition],
        policy: OutOfRangePolicy,
    ) -> Result<Self, SpectrumError> {
        let mut intensities = vec![0.0; window.bins()];
        let mut placements = Vec::with_capacity(transitions.len());

        for t in transitions {
            if !(t.energy.is_finite() && t.weight.is_finite()) {
                return Err(SpectrumError::NonFiniteTransition { state: t.state });
            }

            let placement = match window.nearest_bin(t.energy) {
                Some(bin) => StickPlacement {
                    transition: *t,
                    bin: Some(bin),
                    clipped: false,
                },
                None => match policy {
                    OutOfRangePolicy::Clip => {
                        let bin = window.edge_bin(t.energy);
                        warn!(
                            "Transition {} at {:.4} is outside [{}, {}); clipping to bin {}.",
                            t.state,
                            t.energy,
                            window.start(),
                            window.stop(),
                            bin
                        );
                        StickPlacement {
                            transition: *t,
                            bin: Some(bin),
                            clipped: true,
                        }
                    }
                    OutOfRangePolicy::Drop => {
                        warn!(
                            "Transition {} at {:.4} is outside [{}, {}); dropping weight {:.6}.",
                            t.state,
                            t.energy,
                            window.start(),
                            window.stop(),
                            t.weight
                        );
                        StickPlacement {
                            transition: *t,
                            bin: None,
                            clipped: false,
                        }
                    }
                    OutOfRangePolicy::Error => {
                        return Err(SpectrumError::OutOfWindow {
                            state: t.state,
                            energy: t.energy,
                            start: window.start(),
                            stop: window.stop(),
                        });
                    }
                },
            };

            if let Some(bin) = placement.bin {
                intensities[bin] += t.weight;
            }
            placements.push(placement);
        }

        debug!(
            bins = window.bins(),
            transitions = transitions.len(),
            "Stick spectrum assembled"
        );

        Ok(Self {
            window,
            intensities,
            placements,
            policy,
        })
    }

    pub fn window(&self) -> &FrequencyWindow {
        &self.window
    }

    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    pub fn axis(&self) -> Vec<f64> {
        self.window.axis()
    }

    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    pub fn placements(&self) -> &[StickPlacement] {
        &self.placements
    }

    pub fn total_intensity(&self) -> f64 {
        self.intensities.iter().sum()
    }

    pub fn clipped_count(&self) -> usize {
        self.placements.iter().filter(|p| p.clipped).count()
    }

    pub fn dropped(&self) -> impl Iterator<Item = &StickPlacement> {
        self.placements.iter().filter(|p| p.bin.is_none())
    }
}
