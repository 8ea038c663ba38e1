use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use spectra::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Renders workflow [`Progress`] events on stderr.
///
/// Each phase gets a spinner that finishes as `✓ <phase>`. A sweep turns the spinner
/// into a bar over the chain lengths. Notices such as clipped transitions are printed
/// above the bar so they survive a finished or hidden bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr())
            .with_style(phase_style());
        Self {
            bar: Arc::new(Mutex::new(bar)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();

        Box::new(move |event: Progress| {
            let Ok(bar) = bar.lock() else {
                warn!("Progress bar mutex was poisoned; dropping a progress event.");
                return;
            };

            match event {
                Progress::PhaseStart { name } => {
                    bar.reset();
                    bar.set_style(phase_style());
                    bar.set_message(name);
                    bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                }
                Progress::PhaseFinish => {
                    bar.disable_steady_tick();
                    bar.set_style(phase_style());
                    let phase = bar.message();
                    bar.finish_with_message(format!("✓ {}", phase));
                }
                Progress::TaskStart { total_steps } => {
                    bar.set_length(total_steps);
                    bar.set_position(0);
                    bar.set_style(sweep_style());
                }
                Progress::TaskIncrement => bar.inc(1),
                Progress::TaskFinish => bar.set_style(phase_style()),
                Progress::Message(notice) => {
                    bar.suspend(|| eprintln!("  ⚠ {}", notice));
                }
            }
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn phase_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn sweep_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg} [{bar:32.cyan/blue}] {pos}/{len} sizes")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}
