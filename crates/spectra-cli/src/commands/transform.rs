use crate::cli::TransformArgs;
use crate::config::PartialAppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use spectra::{core::io::traits::TableFile, engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: TransformArgs) -> Result<()> {
    let partial_config = PartialAppConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_transform(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Transforming a {}-sample {} signal...",
        config.length,
        config.signal.name()
    );
    let result = workflows::transform::run(&config, &reporter)?;

    info!("Writing spectrum table to {:?}", &args.output);
    result.spectrum_table(args.shift).write_to_path(&args.output)?;
    println!("✓ Spectrum written to: {}", args.output.display());

    if let Some(path) = &args.signal_out {
        info!("Writing signal table to {:?}", path);
        result.signal_table().write_to_path(path)?;
        println!("✓ Signal and reconstruction written to: {}", path.display());
    }

    println!(
        "  Convention: {}, normalization: {}",
        result.convention, result.normalization
    );
    println!(
        "  Resolution: {:.6} (Nyquist {:.6})",
        result.axis.resolution(),
        result.axis.nyquist()
    );
    println!("  Round-trip error: {:.3e}", result.round_trip_error);
    if result.real_input {
        println!(
            "  Conjugate-symmetric spectrum: {}",
            if result.conjugate_symmetric { "yes" } else { "no" }
        );
        if !result.conjugate_symmetric {
            warn!("Real input produced a spectrum without conjugate symmetry.");
        }
    }

    Ok(())
}
