use crate::core::exciton::{ChainParameters, Hamiltonian, TransitionDipoles};
use crate::core::fourier::{Normalization, SignConvention, SignalSpec};
use crate::core::spectrum::{FrequencyWindow, Lineshape, OutOfRangePolicy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    pub signal: SignalSpec,
    pub length: usize,
    pub sample_spacing: f64,
    pub convention: SignConvention,
    pub normalization: Normalization,
}

#[derive(Default)]
pub struct TransformConfigBuilder {
    signal: Option<SignalSpec>,
    length: Option<usize>,
    sample_spacing: Option<f64>,
    convention: Option<SignConvention>,
    normalization: Option<Normalization>,
}

impl TransformConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(mut self, signal: SignalSpec) -> Self {
        self.signal = Some(signal);
        self
    }
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
    pub fn sample_spacing(mut self, dt: f64) -> Self {
        self.sample_spacing = Some(dt);
        self
    }
    pub fn convention(mut self, convention: SignConvention) -> Self {
        self.convention = Some(convention);
        self
    }
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = Some(normalization);
        self
    }

    pub fn build(self) -> Result<TransformConfig, ConfigError> {
        let length = self.length.ok_or(ConfigError::MissingParameter("length"))?;
        if length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "length",
                reason: "must be at least 1".to_string(),
            });
        }
        let sample_spacing = self
            .sample_spacing
            .ok_or(ConfigError::MissingParameter("sample_spacing"))?;
        if !sample_spacing.is_finite() || sample_spacing <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "sample_spacing",
                reason: format!("{} is not a finite positive number", sample_spacing),
            });
        }

        Ok(TransformConfig {
            signal: self.signal.ok_or(ConfigError::MissingParameter("signal"))?,
            length,
            sample_spacing,
            convention: self.convention.unwrap_or_default(),
            normalization: self.normalization.unwrap_or_default(),
        })
    }
}

/// Where the site-basis Hamiltonian comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum HamiltonianSource {
    Chain(ChainParameters),
    Matrix(Hamiltonian),
}

impl HamiltonianSource {
    pub fn sites(&self) -> usize {
        match self {
            HamiltonianSource::Chain(params) => params.sites,
            HamiltonianSource::Matrix(h) => h.sites(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbsorptionConfig {
    pub source: HamiltonianSource,
    pub site_energies: Option<Vec<f64>>,
    pub dipoles: Option<TransitionDipoles>,
    pub window: FrequencyWindow,
    pub policy: OutOfRangePolicy,
    pub broadening: Option<Lineshape>,
}

#[derive(Default)]
pub struct AbsorptionConfigBuilder {
    source: Option<HamiltonianSource>,
    site_energies: Option<Vec<f64>>,
    dipoles: Option<TransitionDipoles>,
    window: Option<FrequencyWindow>,
    policy: Option<OutOfRangePolicy>,
    broadening: Option<Lineshape>,
}

impl AbsorptionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(mut self, params: ChainParameters) -> Self {
        self.source = Some(HamiltonianSource::Chain(params));
        self
    }
    pub fn hamiltonian(mut self, hamiltonian: Hamiltonian) -> Self {
        self.source = Some(HamiltonianSource::Matrix(hamiltonian));
        self
    }
    pub fn site_energies(mut self, energies: Vec<f64>) -> Self {
        self.site_energies = Some(energies);
        self
    }
    pub fn dipoles(mut self, dipoles: TransitionDipoles) -> Self {
        self.dipoles = Some(dipoles);
        self
    }
    pub fn window(mut self, window: FrequencyWindow) -> Self {
        self.window = Some(window);
        self
    }
    pub fn policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.policy = Some(policy);
        self
    }
    pub fn broadening(mut self, lineshape: Option<Lineshape>) -> Self {
        self.broadening = lineshape;
        self
    }

    pub fn build(self) -> Result<AbsorptionConfig, ConfigError> {
        let source = self
            .source
            .ok_or(ConfigError::MissingParameter("hamiltonian"))?;
        let sites = source.sites();
        if sites == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "sites",
                reason: "must be at least 1".to_string(),
            });
        }

        if let Some(energies) = &self.site_energies {
            if energies.len() != sites {
                return Err(ConfigError::InvalidParameter {
                    name: "site_energies",
                    reason: format!("expected {} values, got {}", sites, energies.len()),
                });
            }
        }
        if let Some(dipoles) = &self.dipoles {
            if dipoles.len() != sites {
                return Err(ConfigError::InvalidParameter {
                    name: "dipoles",
                    reason: format!("expected {} values, got {}", sites, dipoles.len()),
                });
            }
        }
        if let Some(lineshape) = &self.broadening {
            lineshape
                .validate()
                .map_err(|e| ConfigError::InvalidParameter {
                    name: "broadening",
                    reason: e.to_string(),
                })?;
        }

        Ok(AbsorptionConfig {
            source,
            site_energies: self.site_energies,
            dipoles: self.dipoles,
            window: self.window.ok_or(ConfigError::MissingParameter("window"))?,
            policy: self.policy.unwrap_or_default(),
            broadening: self.broadening,
        })
    }
}
