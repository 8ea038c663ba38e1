use crate::cli::SweepArgs;
use crate::config::PartialAppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use spectra::{
    core::io::traits::TableFile,
    engine::progress::ProgressReporter,
    workflows::{self, absorption::SweepTable},
};
use tracing::info;

pub fn run(args: SweepArgs) -> Result<()> {
    let partial_config = PartialAppConfig::load(args.chain.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let (config, sizes) = partial_config.merge_sweep(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Sweeping {} chain lengths...", sizes.len());
    let points = workflows::absorption::sweep(&config, &sizes, &reporter)?;

    info!("Writing sweep table to {:?}", &args.output);
    SweepTable(&points).write_to_path(&args.output)?;
    println!(
        "✓ Sweep of {} chain length(s) written to: {}",
        points.len(),
        args.output.display()
    );

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        println!(
            "  Bright state moved from {:.2} cm^-1 (N = {}) to {:.2} cm^-1 (N = {})",
            first.bright_energy, first.sites, last.bright_energy, last.sites
        );
    }

    Ok(())
}
