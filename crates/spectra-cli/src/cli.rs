use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use spectra::core::fourier::{Normalization, SignConvention};
use spectra::core::spectrum::OutOfRangePolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "SPECTRA contributors",
    version,
    about = "SPECTRA CLI - discrete Fourier transforms with explicit conventions and absorption spectra of molecular aggregates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform a test signal forward and back and write its spectrum.
    Transform(TransformArgs),
    /// Diagonalize an exciton Hamiltonian and write its absorption spectrum.
    Absorption(AbsorptionArgs),
    /// Repeat the diagonalization over a range of chain lengths.
    Sweep(SweepArgs),
}

/// Test signals understood by `transform`.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SignalKind {
    Delta,
    Tone,
    Cosine,
    GaussianPulse,
    DampedOscillation,
}

/// Broadening lineshapes; the width comes from `--fwhm`.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LineshapeKind {
    #[default]
    Lorentzian,
    Gaussian,
}

/// Arguments for the `transform` subcommand.
#[derive(Args, Debug, Default)]
pub struct TransformArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the spectrum table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Also write the time-domain signal and its reconstruction (CSV).
    #[arg(long, value_name = "PATH")]
    pub signal_out: Option<PathBuf>,

    /// Order spectrum rows from the most negative to the most positive frequency.
    #[arg(long)]
    pub shift: bool,

    // --- Signal ---
    /// Kind of test signal to generate.
    #[arg(long, value_enum)]
    pub signal: Option<SignalKind>,

    /// Number of samples.
    #[arg(short = 'n', long, value_name = "INT")]
    pub length: Option<usize>,

    /// Sample spacing in time units.
    #[arg(long = "dt", value_name = "FLOAT")]
    pub sample_spacing: Option<f64>,

    /// Sample index for a delta, or frequency bin for a tone.
    #[arg(long, value_name = "INT")]
    pub index: Option<usize>,

    /// Frequency of a cosine or damped oscillation, in inverse time units.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub frequency: Option<f64>,

    /// Phase of a cosine, in radians.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub phase: Option<f64>,

    /// Centre of a Gaussian pulse, in time units.
    #[arg(long, value_name = "FLOAT")]
    pub centre: Option<f64>,

    /// Standard deviation of a Gaussian pulse, in time units.
    #[arg(long, value_name = "FLOAT")]
    pub width: Option<f64>,

    /// Decay time of a damped oscillation.
    #[arg(long, value_name = "FLOAT")]
    pub decay: Option<f64>,

    // --- Convention ---
    /// Sign of the forward exponent: engineering (-) or physics (+).
    #[arg(long, value_name = "engineering|physics")]
    pub convention: Option<SignConvention>,

    /// Where the 1/N factor goes: backward, ortho or forward.
    #[arg(long, value_name = "backward|ortho|forward")]
    pub normalization: Option<Normalization>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S transform.length=128
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Chain parameters shared by `absorption` and `sweep`.
#[derive(Args, Debug, Default)]
pub struct ChainArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of sites in the chain.
    #[arg(short = 'n', long, value_name = "INT")]
    pub sites: Option<usize>,

    /// Excitation energy of every site, in cm^-1.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub site_energy: Option<f64>,

    /// Nearest-neighbour coupling, in cm^-1.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub coupling: Option<f64>,

    /// Close the chain into a ring.
    #[arg(long)]
    pub ring: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S absorption.coupling=-150
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `absorption` subcommand.
#[derive(Args, Debug, Default)]
pub struct AbsorptionArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Read the site-basis Hamiltonian from a CSV matrix instead of building a chain.
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["sites", "site_energy", "coupling", "ring"]
    )]
    pub hamiltonian: Option<PathBuf>,

    /// Frequency window as START:STOP:STEP, in cm^-1 (STOP is exclusive).
    #[arg(long, value_name = "V1:V2:DV", allow_hyphen_values = true)]
    pub window: Option<String>,

    /// What to do with eigenvalues outside the window.
    #[arg(long, value_name = "clip|drop|error")]
    pub policy: Option<OutOfRangePolicy>,

    /// Full width at half maximum of the broadening lineshape, in cm^-1.
    #[arg(long, value_name = "FLOAT")]
    pub fwhm: Option<f64>,

    /// Broadening lineshape.
    #[arg(long, value_enum)]
    pub lineshape: Option<LineshapeKind>,

    /// Path for the stick spectrum table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Also write energies, dipole weights and coefficients of every state (CSV).
    #[arg(long, value_name = "PATH")]
    pub states: Option<PathBuf>,

    /// Also write the broadened spectrum (CSV); requires a linewidth.
    #[arg(long, value_name = "PATH")]
    pub broadened: Option<PathBuf>,
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Chain lengths: A..B, A..=B or a comma-separated list.
    #[arg(long, value_name = "RANGE")]
    pub sizes: Option<String>,

    /// Path for the sweep table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
