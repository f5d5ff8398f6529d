//! Research assistant entry point.
//!
//! # Responsibility
//! - Initialize logging under `./logs` and seed the demo research topic.
//! - Keep output deterministic for quick local sanity checks.

use log::info;
use research_core::{init_logging, LogConfig, ResearchTracker};
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "logs";

fn main() -> ExitCode {
    let log_dir = match std::env::current_dir() {
        Ok(dir) => dir.join(LOG_DIR_NAME),
        Err(err) => {
            eprintln!("cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&LogConfig::with_default_level(&log_dir)) {
        eprintln!("logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    let mut tracker = ResearchTracker::new();
    tracker.add_topic(
        "AI Ethics",
        "Research on ethical considerations in AI development and deployment",
    );
    info!(
        "event=app_ready module=cli status=ok version={} topics={}",
        research_core::core_version(),
        tracker.len()
    );

    println!("research_core version={}", research_core::core_version());
    println!("research topics={}", tracker.len());
    ExitCode::SUCCESS
}
