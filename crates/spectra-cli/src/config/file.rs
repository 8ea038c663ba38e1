use crate::cli::{LineshapeKind, SignalKind};
use serde::Deserialize;
use spectra::core::exciton::ChainTopology;
use spectra::core::fourier::{Normalization, SignConvention};
use spectra::core::spectrum::OutOfRangePolicy;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialSignalConfig {
    pub kind: Option<SignalKind>,
    pub index: Option<usize>,
    pub frequency: Option<f64>,
    pub phase: Option<f64>,
    pub centre: Option<f64>,
    pub width: Option<f64>,
    pub decay: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialTransformConfig {
    pub length: Option<usize>,
    pub sample_spacing: Option<f64>,
    pub convention: Option<SignConvention>,
    pub normalization: Option<Normalization>,
    pub signal: Option<PartialSignalConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialWindowConfig {
    pub start: Option<f64>,
    pub stop: Option<f64>,
    pub step: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialBroadeningConfig {
    pub lineshape: Option<LineshapeKind>,
    pub fwhm: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialAbsorptionConfig {
    pub sites: Option<usize>,
    pub site_energy: Option<f64>,
    pub coupling: Option<f64>,
    pub topology: Option<ChainTopology>,
    /// Per-site energies replacing the uniform diagonal.
    pub site_energies: Option<Vec<f64>>,
    /// Per-site transition dipole components; uniform when absent.
    pub dipoles: Option<Vec<f64>>,
    /// CSV matrix used instead of the chain parameters.
    pub hamiltonian: Option<PathBuf>,
    pub policy: Option<OutOfRangePolicy>,
    pub window: Option<PartialWindowConfig>,
    pub broadening: Option<PartialBroadeningConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialSweepConfig {
    pub sizes: Option<String>,
}

/// Everything a config file may contain; every field is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialAppConfig {
    pub transform: Option<PartialTransformConfig>,
    pub absorption: Option<PartialAbsorptionConfig>,
    pub sweep: Option<PartialSweepConfig>,
}
