use crate::commands::open_engine;
use crate::core::{print_info, Result, TimerId};
use log::info;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

/// Poll granularity when no deadline is pending
const IDLE_SLEEP: Duration = Duration::from_millis(200);

/// Run the background sync loop in the foreground, printing the summary
/// line whenever a reconciliation cycle changes it. Runs until interrupted
/// or, when `cycles` is given, until that many timers have fired.
pub fn execute_watch(path: Option<PathBuf>, cycles: Option<u64>) -> Result<()> {
    let mut engine = open_engine(path)?;

    if !engine.has_repository() {
        print_info("No git repository in library path");
        return Ok(());
    }

    println!(
        "\nWatching {} on branch {}\n",
        engine
            .library_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        engine.current_branch_name()
    );

    let mut last_summary = engine.summary().to_string();
    println!("{last_summary}");

    let mut fired_total = 0u64;
    loop {
        let fired = engine.poll_timers(Instant::now());
        for id in &fired {
            info!("Timer fired: {id:?}");
            if matches!(id, TimerId::Sync) {
                if let Some(fetched) = engine.last_fetch() {
                    println!("Fetched at {}", fetched.format("%H:%M:%S UTC"));
                }
            }
        }
        fired_total += fired.len() as u64;

        if engine.summary() != last_summary {
            last_summary = engine.summary().to_string();
            println!("{last_summary}");
        }

        if let Some(limit) = cycles {
            if fired_total >= limit {
                break;
            }
        }

        let sleep = match engine.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => IDLE_SLEEP,
        };
        thread::sleep(sleep.min(IDLE_SLEEP));
    }

    Ok(())
}
