use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{error, info, warn};

mod config;
mod processing;
mod report;

use crate::config::Config;
use crate::processing::BatchParser;
use crate::report::{render_failure_table, render_moi_table, BatchReport};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("MOI Analyzer")
        .version("0.1.0")
        .about("Parses the .MOI metadata sidecar files written by JVC camcorders")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("An .MOI file, or a directory containing .MOI files")
                .required(true),
        )
        .arg(
            Arg::new("workers")
                .short('w')
                .long("workers")
                .value_name("NUM")
                .help("Number of parallel workers"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the batch report as JSON on stdout")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Initialize logging
    let env_filter = if matches.get_flag("verbose") {
        "moi_analyzer=debug,info"
    } else {
        "moi_analyzer=info,warn"
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let path = PathBuf::from(matches.get_one::<String>("path").unwrap());

    // Load configuration, then apply command line overrides
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(workers) = matches.get_one::<String>("workers") {
        config.performance.max_workers = workers.parse()?;
    }
    if matches.get_flag("json") {
        config.output.json = true;
    }
    config.validate()?;

    info!("🚀 MOI Analyzer starting...");
    info!("📁 Input path: {}", path.display());
    info!("🔧 Workers: {}", config.performance.max_workers);

    let parser = BatchParser::new(&config);
    let outcome = match parser.run(&path).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&BatchReport::new(&outcome))?);
    } else {
        if !outcome.files.is_empty() {
            println!("{}", render_moi_table(&outcome.files));
        }
        if !outcome.failures.is_empty() {
            println!("{}", render_failure_table(&outcome.failures));
        }
        if outcome.total == 0 {
            println!("No .MOI files found at {}", path.display());
        }
    }

    info!("🎉 Finished in {:.2}s", outcome.total_time.as_secs_f64());
    info!("✅ Parsed: {}", outcome.files.len());
    info!(
        "📊 Success rate: {:.1}%",
        if outcome.total > 0 {
            outcome.files.len() as f64 / outcome.total as f64 * 100.0
        } else {
            100.0
        }
    );

    if !outcome.is_success() {
        error!("❌ Failed: {}", outcome.failures.len());
        std::process::exit(1);
    }

    Ok(())
}
