use crate::core::exciton::{
    ExcitonStates, Hamiltonian, HamiltonianError, Transition, TransitionDipoles, brightest,
    total_weight, transitions,
};
use crate::core::io::tables::{StateTable, csv_writer};
use crate::core::io::{IoError, traits::TableFile};
use crate::core::spectrum::{BroadenedSpectrum, StickSpectrum, broaden};
use crate::engine::config::{AbsorptionConfig, ConfigError, HamiltonianSource};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct AbsorptionResult {
    pub hamiltonian: Hamiltonian,
    /// Eigenstates in ascending energy order.
    pub states: ExcitonStates,
    pub transitions: Vec<Transition>,
    pub stick: StickSpectrum,
    pub broadened: Option<BroadenedSpectrum>,
}

impl AbsorptionResult {
    pub fn state_table(&self) -> StateTable<'_> {
        StateTable {
            states: &self.states,
            transitions: &self.transitions,
        }
    }

    pub fn brightest(&self) -> Option<&Transition> {
        brightest(&self.transitions)
    }

    pub fn total_weight(&self) -> f64 {
        total_weight(&self.transitions)
    }
}

fn build_hamiltonian(config: &AbsorptionConfig) -> Result<Hamiltonian, HamiltonianError> {
    let hamiltonian = match &config.source {
        HamiltonianSource::Chain(params) => Hamiltonian::chain(params)?,
        HamiltonianSource::Matrix(h) => h.clone(),
    };
    match &config.site_energies {
        Some(energies) => hamiltonian.with_site_energies(energies),
        None => Ok(hamiltonian),
    }
}

fn diagonalize(
    hamiltonian: &Hamiltonian,
    dipoles: Option<&TransitionDipoles>,
) -> Result<(ExcitonStates, Vec<Transition>), HamiltonianError> {
    let states = ExcitonStates::diagonalize(hamiltonian).sorted();
    let uniform;
    let dipoles = match dipoles {
        Some(d) => d,
        None => {
            uniform = TransitionDipoles::uniform(hamiltonian.sites())?;
            &uniform
        }
    };
    let transitions = transitions(&states, dipoles)?;
    Ok((states, transitions))
}

#[instrument(skip_all, name = "absorption_workflow")]
pub fn run(
    config: &AbsorptionConfig,
    reporter: &ProgressReporter,
) -> Result<AbsorptionResult, EngineError> {
    info!(
        "Computing absorption spectrum for {} sites over [{}, {}) step {}.",
        config.source.sites(),
        config.window.start(),
        config.window.stop(),
        config.window.step()
    );

    let hamiltonian = reporter.phase("Hamiltonian construction", || build_hamiltonian(config))?;
    let (states, transitions) = reporter.phase("Diagonalization", || {
        diagonalize(&hamiltonian, config.dipoles.as_ref())
    })?;

    let stick = reporter.phase("Stick spectrum", || {
        StickSpectrum::build(config.window, &transitions, config.policy)
    })?;
    let clipped = stick.clipped_count();
    let dropped = stick.dropped().count();
    if clipped > 0 || dropped > 0 {
        reporter.report(Progress::Message(format!(
            "{} transition(s) outside the window: {} clipped, {} dropped (policy: {}).",
            clipped + dropped,
            clipped,
            dropped,
            config.policy
        )));
    }

    let broadened = match config.broadening {
        Some(lineshape) => Some(reporter.phase("Broadening", || broaden(&stick, lineshape))?),
        None => None,
    };

    debug!(
        total_weight = total_weight(&transitions),
        spectrum_weight = stick.total_intensity(),
        "Absorption workflow finished"
    );

    Ok(AbsorptionResult {
        hamiltonian,
        states,
        transitions,
        stick,
        broadened,
    })
}

/// Summary of one chain length in a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub sites: usize,
    pub lowest_energy: f64,
    pub highest_energy: f64,
    pub bright_energy: f64,
    pub bright_weight: f64,
    pub total_weight: f64,
}

/// Repeats the diagonalization for every chain length in `sizes`, keeping the chain's
/// site energy, coupling and topology.
#[instrument(skip_all, name = "sweep_workflow")]
pub fn sweep(
    config: &AbsorptionConfig,
    sizes: &[usize],
    reporter: &ProgressReporter,
) -> Result<Vec<SweepPoint>, EngineError> {
    let params = match &config.source {
        HamiltonianSource::Chain(params) => *params,
        HamiltonianSource::Matrix(_) => {
            return Err(EngineError::Unsupported(
                "a sweep needs chain parameters, not a fixed Hamiltonian matrix".to_string(),
            ));
        }
    };
    if config.site_energies.is_some() || config.dipoles.is_some() {
        return Err(EngineError::Unsupported(
            "per-site energies or dipoles cannot be combined with a chain-length sweep"
                .to_string(),
        ));
    }
    if sizes.is_empty() {
        return Err(ConfigError::InvalidParameter {
            name: "sizes",
            reason: "at least one chain length is required".to_string(),
        }
        .into());
    }

    info!("Sweeping {} chain lengths.", sizes.len());
    reporter.report(Progress::PhaseStart {
        name: "Chain length sweep",
    });
    reporter.report(Progress::TaskStart {
        total_steps: sizes.len() as u64,
    });

    let mut points = Vec::with_capacity(sizes.len());
    for &sites in sizes {
        let hamiltonian = Hamiltonian::chain(&params.with_sites(sites))?;
        let (states, transitions) = diagonalize(&hamiltonian, None)?;
        let energies = states.energies();
        let bright = brightest(&transitions).copied().ok_or(HamiltonianError::NoSites)?;

        points.push(SweepPoint {
            sites,
            lowest_energy: energies[0],
            highest_energy: energies[energies.len() - 1],
            bright_energy: bright.energy,
            bright_weight: bright.weight,
            total_weight: total_weight(&transitions),
        });
        debug!(sites, bright_energy = bright.energy, "Sweep point computed");
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    Ok(points)
}

/// Sweep results, one row per chain length.
#[derive(Debug, Clone, Copy)]
pub struct SweepTable<'a>(pub &'a [SweepPoint]);

impl TableFile for SweepTable<'_> {
    fn header(&self) -> Vec<String> {
        [
            "sites",
            "lowest_energy",
            "highest_energy",
            "bright_energy",
            "bright_weight",
            "total_weight",
        ]
        .map(String::from)
        .to_vec()
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), IoError> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(self.header())?;
        for point in self.0 {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
