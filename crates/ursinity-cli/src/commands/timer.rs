use chrono::Local;
use clap::Subcommand;
use std::time::Duration;
use ursinity_core::error::Result;
use ursinity_core::{Config, DurationTimer};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a repeating timer, printing a line each time it fires
    Run {
        /// Period in milliseconds (defaults to timer.default_duration_ms)
        #[arg(long)]
        duration_ms: Option<u64>,
        /// Number of periods to wait for
        #[arg(long, default_value_t = 1)]
        laps: u32,
        /// Polling interval in milliseconds (defaults to timer.poll_interval_ms)
        #[arg(long)]
        poll_ms: Option<u64>,
        /// Print a JSON snapshot per lap
        #[arg(long)]
        json: bool,
    },
    /// Show what a timer of the given duration looks like before starting
    Show {
        #[arg(long)]
        duration_ms: Option<u64>,
    },
}

pub fn run(action: TimerAction) -> Result<()> {
    let config = Config::load_or_default();
    match action {
        TimerAction::Run {
            duration_ms,
            laps,
            poll_ms,
            json,
        } => {
            let duration_ms = duration_ms.unwrap_or(config.timer.default_duration_ms);
            let poll = Duration::from_millis(poll_ms.unwrap_or(config.timer.poll_interval_ms));
            let mut timer = DurationTimer::new(duration_ms);
            timer.start();
            tracing::debug!(duration_ms, laps, "timer running");

            let mut lap = 0;
            while lap < laps {
                let snapshot = timer.snapshot();
                if timer.check_and_reset() {
                    lap += 1;
                    if json {
                        println!("{}", serde_json::to_string(&snapshot)?);
                    } else {
                        println!(
                            "lap {lap}/{laps}: {} ms (target {} ms) at {}",
                            snapshot.elapsed_ms,
                            duration_ms,
                            snapshot.at.with_timezone(&Local).format("%H:%M:%S%.3f")
                        );
                    }
                    continue;
                }
                std::thread::sleep(poll);
            }
        }
        TimerAction::Show { duration_ms } => {
            let timer = match duration_ms {
                Some(ms) => DurationTimer::new(ms),
                None => config.default_timer(),
            };
            println!("Duration: {} ms ({} s)", timer.duration_ms(), timer.duration_secs());
            println!("State:    {:?}", timer.state());
        }
    }
    Ok(())
}
