pub mod defaults;
pub mod file;

use crate::cli::{
    AbsorptionArgs, ChainArgs, LineshapeKind, SignalKind, SweepArgs, TransformArgs,
};
use crate::config::defaults::DefaultsConfig;
use crate::config::file::{
    PartialAbsorptionConfig, PartialSignalConfig, PartialTransformConfig, PartialWindowConfig,
};
use crate::error::{CliError, Result};
use crate::utils::parser;
use clap::ValueEnum;
use spectra::core::exciton::{ChainParameters, ChainTopology, TransitionDipoles};
use spectra::core::fourier::SignalSpec;
use spectra::core::io::matrix::read_hamiltonian_from_path;
use spectra::core::spectrum::{FrequencyWindow, Lineshape};
use spectra::engine::config::{
    AbsorptionConfig, AbsorptionConfigBuilder, TransformConfig, TransformConfigBuilder,
};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

pub use file::PartialAppConfig;

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_transform(mut self, args: &TransformArgs) -> Result<TransformConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();
        let mut partial = self.transform.take().unwrap_or_default();
        let signal = merge_signal(args, partial.signal.take().unwrap_or_default(), &defaults)?;

        TransformConfigBuilder::new()
            .signal(signal)
            .length(args.length.or(partial.length).unwrap_or(defaults.length))
            .sample_spacing(
                args.sample_spacing
                    .or(partial.sample_spacing)
                    .unwrap_or(defaults.sample_spacing),
            )
            .convention(args.convention.or(partial.convention).unwrap_or_default())
            .normalization(
                args.normalization
                    .or(partial.normalization)
                    .unwrap_or_default(),
            )
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn merge_absorption(mut self, args: &AbsorptionArgs) -> Result<AbsorptionConfig> {
        self.apply_set_values(&args.chain.set_values)?;
        let defaults = DefaultsConfig::default();
        let mut partial = self.absorption.take().unwrap_or_default();

        let mut builder = AbsorptionConfigBuilder::new();
        let chain_flags = args.chain.sites.is_some()
            || args.chain.site_energy.is_some()
            || args.chain.coupling.is_some()
            || args.chain.ring;
        let matrix_path = match (&args.hamiltonian, &partial.hamiltonian) {
            (Some(path), _) => Some(path),
            (None, Some(path)) if chain_flags => {
                info!(
                    "Chain flags given; building a chain instead of reading '{}'.",
                    path.display()
                );
                None
            }
            (None, file_path) => file_path.as_ref(),
        };
        match matrix_path {
            Some(path) => {
                if partial.sites.is_some() || partial.coupling.is_some() {
                    warn!("Chain parameters are ignored when a Hamiltonian matrix is given.");
                }
                let hamiltonian =
                    read_hamiltonian_from_path(path).map_err(|e| CliError::FileParsing {
                        path: path.clone(),
                        source: e.into(),
                    })?;
                builder = builder.hamiltonian(hamiltonian);
            }
            None => builder = builder.chain(merge_chain(&args.chain, &partial, &defaults)),
        }

        if let Some(energies) = partial.site_energies.take() {
            builder = builder.site_energies(energies);
        }
        if let Some(components) = partial.dipoles.take() {
            let dipoles = TransitionDipoles::from_components(components)
                .map_err(|e| CliError::Config(format!("`absorption.dipoles`: {}", e)))?;
            builder = builder.dipoles(dipoles);
        }

        let (start, stop, step) = match &args.window {
            Some(text) => {
                parser::parse_window(text).map_err(|e| CliError::Argument(e.to_string()))?
            }
            None => {
                let window = partial.window.take().unwrap_or_default();
                (
                    window.start.unwrap_or(defaults.window.0),
                    window.stop.unwrap_or(defaults.window.1),
                    window.step.unwrap_or(defaults.window.2),
                )
            }
        };
        let window =
            FrequencyWindow::new(start, stop, step).map_err(|e| CliError::Config(e.to_string()))?;

        let broadening = partial.broadening.take().unwrap_or_default();
        let lineshape = args.lineshape.or(broadening.lineshape);
        let broadening = match (args.fwhm.or(broadening.fwhm), lineshape) {
            (Some(fwhm), kind) => Some(match kind.unwrap_or(defaults.lineshape) {
                LineshapeKind::Lorentzian => Lineshape::Lorentzian { fwhm },
                LineshapeKind::Gaussian => Lineshape::Gaussian { fwhm },
            }),
            (None, Some(_)) => {
                return Err(CliError::Config(
                    "A lineshape needs a width: set `absorption.broadening.fwhm` or --fwhm."
                        .to_string(),
                ));
            }
            (None, None) => None,
        };

        builder
            .window(window)
            .policy(args.policy.or(partial.policy).unwrap_or(defaults.policy))
            .broadening(broadening)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Chain configuration plus the list of chain lengths to visit.
    pub fn merge_sweep(mut self, args: &SweepArgs) -> Result<(AbsorptionConfig, Vec<usize>)> {
        self.apply_set_values(&args.chain.set_values)?;
        let defaults = DefaultsConfig::default();
        let partial = self.absorption.take().unwrap_or_default();
        if partial.hamiltonian.is_some()
            || partial.site_energies.is_some()
            || partial.dipoles.is_some()
        {
            warn!("Matrix, site-energy and dipole settings are ignored by a sweep.");
        }

        let sizes_text = args
            .sizes
            .clone()
            .or_else(|| self.sweep.take().and_then(|s| s.sizes))
            .ok_or_else(|| {
                CliError::Config(
                    "A value for 'sizes' is required either in the config file or via --sizes."
                        .to_string(),
                )
            })?;
        let sizes =
            parser::parse_sizes(&sizes_text).map_err(|e| CliError::Argument(e.to_string()))?;

        let (start, stop, step) = defaults.window;
        let window =
            FrequencyWindow::new(start, stop, step).map_err(|e| CliError::Config(e.to_string()))?;
        let config = AbsorptionConfigBuilder::new()
            .chain(merge_chain(&args.chain, &partial, &defaults))
            .window(window)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok((config, sizes))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value_str) = (key.trim(), value_str.trim());

            match key {
                "transform.length" => {
                    self.transform_mut().length = Some(parse_value(key, value_str)?);
                }
                "transform.sample-spacing" => {
                    self.transform_mut().sample_spacing = Some(parse_value(key, value_str)?);
                }
                "transform.convention" => {
                    self.transform_mut().convention = Some(parse_value(key, value_str)?);
                }
                "transform.normalization" => {
                    self.transform_mut().normalization = Some(parse_value(key, value_str)?);
                }
                "transform.signal.kind" => {
                    self.signal_mut().kind =
                        Some(SignalKind::from_str(value_str, true).map_err(|_| {
                            CliError::Config(format!("Invalid value for {}: {}", key, value_str))
                        })?);
                }
                "transform.signal.index" => {
                    self.signal_mut().index = Some(parse_value(key, value_str)?);
                }
                "transform.signal.frequency" => {
                    self.signal_mut().frequency = Some(parse_value(key, value_str)?);
                }
                "transform.signal.phase" => {
                    self.signal_mut().phase = Some(parse_value(key, value_str)?);
                }
                "transform.signal.centre" => {
                    self.signal_mut().centre = Some(parse_value(key, value_str)?);
                }
                "transform.signal.width" => {
                    self.signal_mut().width = Some(parse_value(key, value_str)?);
                }
                "transform.signal.decay" => {
                    self.signal_mut().decay = Some(parse_value(key, value_str)?);
                }
                "absorption.sites" => {
                    self.absorption_mut().sites = Some(parse_value(key, value_str)?);
                }
                "absorption.site-energy" => {
                    self.absorption_mut().site_energy = Some(parse_value(key, value_str)?);
                }
                "absorption.coupling" => {
                    self.absorption_mut().coupling = Some(parse_value(key, value_str)?);
                }
                "absorption.topology" => {
                    self.absorption_mut().topology = Some(parse_value(key, value_str)?);
                }
                "absorption.hamiltonian" => {
                    self.absorption_mut().hamiltonian = Some(value_str.into());
                }
                "absorption.site-energies" => {
                    self.absorption_mut().site_energies = Some(parse_list(key, value_str)?);
                }
                "absorption.dipoles" => {
                    self.absorption_mut().dipoles = Some(parse_list(key, value_str)?);
                }
                "absorption.policy" => {
                    self.absorption_mut().policy = Some(parse_value(key, value_str)?);
                }
                "absorption.window.start" => {
                    self.window_mut().start = Some(parse_value(key, value_str)?);
                }
                "absorption.window.stop" => {
                    self.window_mut().stop = Some(parse_value(key, value_str)?);
                }
                "absorption.window.step" => {
                    self.window_mut().step = Some(parse_value(key, value_str)?);
                }
                "absorption.broadening.fwhm" => {
                    self.absorption_mut()
                        .broadening
                        .get_or_insert_with(Default::default)
                        .fwhm = Some(parse_value(key, value_str)?);
                }
                "absorption.broadening.lineshape" => {
                    let kind = LineshapeKind::from_str(value_str, true).map_err(|_| {
                        CliError::Config(format!("Invalid value for {}: {}", key, value_str))
                    })?;
                    self.absorption_mut()
                        .broadening
                        .get_or_insert_with(Default::default)
                        .lineshape = Some(kind);
                }
                "sweep.sizes" => {
                    self.sweep.get_or_insert_with(Default::default).sizes =
                        Some(value_str.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn transform_mut(&mut self) -> &mut PartialTransformConfig {
        self.transform.get_or_insert_with(Default::default)
    }

    fn signal_mut(&mut self) -> &mut PartialSignalConfig {
        self.transform_mut()
            .signal
            .get_or_insert_with(Default::default)
    }

    fn absorption_mut(&mut self) -> &mut PartialAbsorptionConfig {
        self.absorption.get_or_insert_with(Default::default)
    }

    fn window_mut(&mut self) -> &mut PartialWindowConfig {
        self.absorption_mut()
            .window
            .get_or_insert_with(Default::default)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}

fn parse_list(key: &str, value: &str) -> Result<Vec<f64>> {
    parser::parse_values(value)
        .map_err(|e| CliError::Config(format!("Invalid value for {}: {}", key, e)))
}

fn merge_chain(
    args: &ChainArgs,
    partial: &PartialAbsorptionConfig,
    defaults: &DefaultsConfig,
) -> ChainParameters {
    let topology = if args.ring {
        ChainTopology::Ring
    } else {
        partial.topology.unwrap_or_default()
    };
    ChainParameters {
        sites: args.sites.or(partial.sites).unwrap_or(defaults.sites),
        site_energy: args
            .site_energy
            .or(partial.site_energy)
            .unwrap_or(defaults.site_energy),
        coupling: args
            .coupling
            .or(partial.coupling)
            .unwrap_or(defaults.coupling),
        topology,
    }
}

fn merge_signal(
    args: &TransformArgs,
    partial: PartialSignalConfig,
    defaults: &DefaultsConfig,
) -> Result<SignalSpec> {
    let kind = args.signal.or(partial.kind).unwrap_or(defaults.signal);
    let index = args.index.or(partial.index);
    let frequency = args.frequency.or(partial.frequency);
    let require = |value: Option<f64>, name: &str| {
        value.ok_or_else(|| {
            let kind_name = kind
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            CliError::Config(format!(
                "A value for 'transform.signal.{}' is required for a {} signal.",
                name, kind_name
            ))
        })
    };

    Ok(match kind {
        SignalKind::Delta => SignalSpec::Delta {
            index: index.unwrap_or(defaults.delta_index),
        },
        SignalKind::Tone => SignalSpec::Tone {
            index: index.unwrap_or(defaults.tone_index),
        },
        SignalKind::Cosine => SignalSpec::Cosine {
            frequency: require(frequency, "frequency")?,
            phase: args.phase.or(partial.phase).unwrap_or(defaults.phase),
        },
        SignalKind::GaussianPulse => SignalSpec::GaussianPulse {
            centre: require(args.centre.or(partial.centre), "centre")?,
            width: require(args.width.or(partial.width), "width")?,
        },
        SignalKind::DampedOscillation => SignalSpec::DampedOscillation {
            frequency: require(frequency, "frequency")?,
            decay: require(args.decay.or(partial.decay), "decay")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use spectra::core::fourier::{Normalization, SignConvention};
    use spectra::core::spectrum::OutOfRangePolicy;
    use spectra::engine::config::HamiltonianSource;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &tempfile::TempDir, toml: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, toml).unwrap();
        path
    }

    fn chain_of(config: &AbsorptionConfig) -> ChainParameters {
        match &config.source {
            HamiltonianSource::Chain(params) => *params,
            other => panic!("expected chain source, got {other:?}"),
        }
    }

    #[test]
    fn transform_defaults_apply_without_file_or_flags() {
        let args = TransformArgs::default();
        let config = PartialAppConfig::default().merge_transform(&args).unwrap();
        assert_eq!(config.signal, SignalSpec::Delta { index: 0 });
        assert_eq!(config.length, 50);
        assert_eq!(config.sample_spacing, 1.0);
        assert_eq!(config.convention, SignConvention::Engineering);
        assert_eq!(config.normalization, Normalization::Backward);
    }

    #[test]
    fn transform_file_values_are_loaded() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [transform]
            length = 128
            sample-spacing = 0.01
            convention = "physics"
            normalization = "ortho"
            [transform.signal]
            kind = "damped-oscillation"
            frequency = 12.5
            decay = 0.5
            "#,
        );
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_transform(&TransformArgs::default())
            .unwrap();
        assert_eq!(config.length, 128);
        assert_eq!(config.convention, SignConvention::Physics);
        assert_eq!(config.normalization, Normalization::Ortho);
        assert_eq!(
            config.signal,
            SignalSpec::DampedOscillation {
                frequency: 12.5,
                decay: 0.5
            }
        );
    }

    #[test]
    fn cli_flags_override_set_values_which_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [transform]
            length = 128
            sample-spacing = 0.5
            "#,
        );
        let args = TransformArgs {
            length: Some(64),
            set_values: vec![
                "transform.length=32".to_string(),
                "transform.sample-spacing=0.25".to_string(),
            ],
            ..Default::default()
        };
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_transform(&args)
            .unwrap();
        assert_eq!(config.length, 64);
        assert_eq!(config.sample_spacing, 0.25);
    }

    #[test]
    fn missing_signal_parameters_are_reported() {
        let args = TransformArgs {
            signal: Some(SignalKind::Cosine),
            ..Default::default()
        };
        let err = PartialAppConfig::default()
            .merge_transform(&args)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("transform.signal.frequency"));
        assert!(message.contains("cosine"));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[transform]\nlenght = 8\n");
        let err = PartialAppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        let mut config = PartialAppConfig::default();
        assert!(matches!(
            config.apply_set_values(&["transform.length".to_string()]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            config.apply_set_values(&["transform.length=many".to_string()]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            config.apply_set_values(&["absorption.colour=red".to_string()]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn absorption_defaults_describe_two_coupled_oscillators() {
        let config = PartialAppConfig::default()
            .merge_absorption(&AbsorptionArgs::default())
            .unwrap();
        let chain = chain_of(&config);
        assert_eq!(chain.sites, 2);
        assert_eq!(chain.site_energy, 17000.0);
        assert_eq!(chain.coupling, -100.0);
        assert_eq!(chain.topology, ChainTopology::Linear);
        assert_eq!(config.window.start(), 16500.0);
        assert_eq!(config.window.bins(), 1000);
        assert_eq!(config.policy, OutOfRangePolicy::Clip);
        assert!(config.broadening.is_none());
    }

    #[test]
    fn absorption_file_and_flags_merge() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [absorption]
            sites = 6
            coupling = -80.0
            topology = "ring"
            policy = "drop"
            [absorption.window]
            start = 16000.0
            stop = 18000.0
            step = 2.0
            [absorption.broadening]
            lineshape = "gaussian"
            fwhm = 25.0
            "#,
        );
        let args = AbsorptionArgs {
            chain: ChainArgs {
                sites: Some(10),
                set_values: vec!["absorption.coupling=-120".to_string()],
                ..Default::default()
            },
            window: Some("16800:17200:0.5".to_string()),
            ..Default::default()
        };
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_absorption(&args)
            .unwrap();
        let chain = chain_of(&config);
        assert_eq!(chain.sites, 10);
        assert_eq!(chain.coupling, -120.0);
        assert_eq!(chain.topology, ChainTopology::Ring);
        assert_eq!(config.window.start(), 16800.0);
        assert_eq!(config.window.step(), 0.5);
        assert_eq!(config.policy, OutOfRangePolicy::Drop);
        assert_eq!(config.broadening, Some(Lineshape::Gaussian { fwhm: 25.0 }));
    }

    #[test]
    fn lineshape_without_width_is_a_config_error() {
        let args = AbsorptionArgs {
            lineshape: Some(LineshapeKind::Gaussian),
            ..Default::default()
        };
        let err = PartialAppConfig::default()
            .merge_absorption(&args)
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn hamiltonian_matrix_file_replaces_chain() {
        let dir = tempdir().unwrap();
        let matrix = dir.path().join("h.csv");
        fs::write(&matrix, "0,1\n1,0\n").unwrap();
        let args = AbsorptionArgs {
            hamiltonian: Some(matrix),
            window: Some("-2:2:0.01".to_string()),
            ..Default::default()
        };
        let config = PartialAppConfig::default().merge_absorption(&args).unwrap();
        assert!(matches!(config.source, HamiltonianSource::Matrix(ref h) if h.sites() == 2));
    }

    #[test]
    fn chain_flags_take_precedence_over_matrix_from_file() {
        let dir = tempdir().unwrap();
        let matrix = dir.path().join("h.csv");
        fs::write(&matrix, "0,1\n1,0\n").unwrap();
        let toml = format!("[absorption]\nhamiltonian = {:?}\n", matrix.to_string_lossy());
        let path = write_config(&dir, &toml);
        let args = AbsorptionArgs {
            chain: ChainArgs {
                sites: Some(8),
                coupling: Some(-50.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_absorption(&args)
            .unwrap();
        let chain = chain_of(&config);
        assert_eq!(chain.sites, 8);
        assert_eq!(chain.coupling, -50.0);

        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_absorption(&AbsorptionArgs {
                window: Some("-2:2:0.01".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(matches!(config.source, HamiltonianSource::Matrix(ref h) if h.sites() == 2));
    }

    #[test]
    fn set_values_cover_matrix_and_per_site_keys() {
        let dir = tempdir().unwrap();
        let matrix = dir.path().join("h.csv");
        fs::write(&matrix, "17000,-100,0\n-100,17000,-100\n0,-100,17000\n").unwrap();
        let args = AbsorptionArgs {
            chain: ChainArgs {
                set_values: vec![
                    format!("absorption.hamiltonian={}", matrix.display()),
                    "absorption.site-energies=16900, 17000, 17100".to_string(),
                    "absorption.dipoles=1,0.5,1".to_string(),
                ],
                ..Default::default()
            },
            ..Default::default()
        };
        let config = PartialAppConfig::default().merge_absorption(&args).unwrap();
        assert!(matches!(config.source, HamiltonianSource::Matrix(ref h) if h.sites() == 3));
        assert_eq!(config.site_energies, Some(vec![16900.0, 17000.0, 17100.0]));
        assert_eq!(config.dipoles.map(|d| d.len()), Some(3));

        let mut partial = PartialAppConfig::default();
        let err = partial
            .apply_set_values(&["absorption.dipoles=1,x".to_string()])
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn unreadable_hamiltonian_matrix_reports_its_path() {
        let dir = tempdir().unwrap();
        let matrix = dir.path().join("h.csv");
        fs::write(&matrix, "0,1\n2,0\n").unwrap();
        let args = AbsorptionArgs {
            hamiltonian: Some(matrix.clone()),
            ..Default::default()
        };
        match PartialAppConfig::default().merge_absorption(&args) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, matrix),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn sweep_sizes_come_from_flag_or_file() {
        let args = SweepArgs {
            sizes: Some("2..=4".to_string()),
            ..Default::default()
        };
        let (config, sizes) = PartialAppConfig::default().merge_sweep(&args).unwrap();
        assert_eq!(sizes, vec![2, 3, 4]);
        assert_eq!(chain_of(&config).coupling, -100.0);

        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[sweep]\nsizes = \"5,10\"\n");
        let (_, sizes) = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_sweep(&SweepArgs::default())
            .unwrap();
        assert_eq!(sizes, vec![5, 10]);

        let err = PartialAppConfig::default()
            .merge_sweep(&SweepArgs::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn command_line_parses_into_absorption_args() {
        let cli = Cli::try_parse_from([
            "spectra",
            "-vv",
            "absorption",
            "-n",
            "8",
            "--coupling",
            "-150",
            "--ring",
            "--window",
            "16500:17500:1",
            "--policy",
            "error",
            "--fwhm",
            "20",
            "-o",
            "spectrum.csv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Absorption(args) = cli.command else {
            panic!("expected the absorption command");
        };
        let config = PartialAppConfig::default().merge_absorption(&args).unwrap();
        let chain = chain_of(&config);
        assert_eq!(chain.sites, 8);
        assert_eq!(chain.coupling, -150.0);
        assert_eq!(chain.topology, ChainTopology::Ring);
        assert_eq!(config.policy, OutOfRangePolicy::Error);
        assert_eq!(
            config.broadening,
            Some(Lineshape::Lorentzian { fwhm: 20.0 })
        );
    }

    #[test]
    fn hamiltonian_flag_conflicts_with_chain_flags() {
        let result = Cli::try_parse_from([
            "spectra",
            "absorption",
            "--hamiltonian",
            "h.csv",
            "-n",
            "4",
            "-o",
            "out.csv",
        ]);
        assert!(result.is_err());
    }
}
