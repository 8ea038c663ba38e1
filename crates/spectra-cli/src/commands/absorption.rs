use crate::cli::AbsorptionArgs;
use crate::config::PartialAppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use spectra::{core::io::traits::TableFile, engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: AbsorptionArgs) -> Result<()> {
    let partial_config = PartialAppConfig::load(args.chain.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_absorption(&args)?;

    if args.broadened.is_some() && config.broadening.is_none() {
        return Err(CliError::Argument(
            "--broadened needs a linewidth: pass --fwhm or set `absorption.broadening.fwhm`."
                .to_string(),
        ));
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Computing the absorption spectrum of a {}-site aggregate...",
        config.source.sites()
    );
    let result = workflows::absorption::run(&config, &reporter)?;

    info!("Writing stick spectrum to {:?}", &args.output);
    result.stick.write_to_path(&args.output)?;
    println!("✓ Stick spectrum written to: {}", args.output.display());

    if let Some(path) = &args.states {
        info!("Writing state table to {:?}", path);
        result.state_table().write_to_path(path)?;
        println!("✓ Exciton states written to: {}", path.display());
    }

    if let (Some(path), Some(broadened)) = (&args.broadened, &result.broadened) {
        info!("Writing broadened spectrum to {:?}", path);
        broadened.write_to_path(path)?;
        println!(
            "✓ {} spectrum (FWHM {}) written to: {}",
            broadened.lineshape().name(),
            broadened.lineshape().fwhm(),
            path.display()
        );
    }

    match result.brightest() {
        Some(bright) => println!(
            "  Brightest state: #{} at {:.2} cm^-1 carrying {:.1}% of the dipole strength",
            bright.state,
            bright.energy,
            100.0 * bright.weight / result.total_weight().max(f64::MIN_POSITIVE)
        ),
        None => warn!("No transitions were computed."),
    }
    let clipped = result.stick.clipped_count();
    let dropped = result.stick.dropped().count();
    if clipped + dropped > 0 {
        println!(
            "  Outside the window: {} clipped, {} dropped ({} policy)",
            clipped,
            dropped,
            result.stick.policy()
        );
    }

    Ok(())
}
