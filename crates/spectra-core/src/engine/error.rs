use super::config::ConfigError;
use crate::core::exciton::HamiltonianError;
use crate::core::fourier::FourierError;
use crate::core::spectrum::SpectrumError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fourier transform failed: {source}")]
    Fourier {
        #[from]
        source: FourierError,
    },

    #[error("Hamiltonian error: {source}")]
    Hamiltonian {
        #[from]
        source: HamiltonianError,
    },

    #[error("Spectrum construction failed: {source}")]
    Spectrum {
        #[from]
        source: SpectrumError,
    },

    #[error("Unsupported request: {0}")]
    Unsupported(String),
}
