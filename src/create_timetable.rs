/*
cargo run --bin create_timetable

cargo run --bin create_timetable -- \
    --data-dir data \
    --log-dir logs
*/

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brest_timetable::{build_manifest, build_timetable, write_manifest, write_timetable};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

// Merge data/{buses,trolleybuses,minibuses}.json into data/timetable.json and write data/meta.json
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    // Directory holding the per-category exports; outputs are written here too
    #[arg(long, value_name = "PATH", default_value = brest_timetable::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    // Directory for the run log
    #[arg(long, value_name = "PATH", default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_dir);

    println!("🚌 Building timetable.json for Brest public transport");
    println!("{}", "=".repeat(50));
    info!("Started - data_dir: {:?}", cli.data_dir);

    fs::create_dir_all(&cli.data_dir)
        .with_context(|| format!("creating {}", cli.data_dir.display()))?;

    let timetable = build_timetable(&cli.data_dir);
    let timetable_path = write_timetable(&cli.data_dir, &timetable)?;

    println!("\n✅ timetable.json written");
    println!("📊 Total routes: {}", timetable.metadata.total_routes);
    println!("🚏 Total stops: {}", timetable.metadata.total_stops);
    println!("📁 File: {}", absolute(&timetable_path).display());
    info!(
        "Totals - routes: {}, stops: {}",
        timetable.metadata.total_routes, timetable.metadata.total_stops
    );

    let manifest = build_manifest();
    let manifest_path = write_manifest(&cli.data_dir, &manifest)?;
    println!("✅ meta.json written: {}", absolute(&manifest_path).display());

    println!("\n🎉 All files written");
    info!("Finished ✅");
    Ok(())
}

// A log file that cannot be opened is reported and skipped
fn init_logging(log_dir: &Path) {
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("create_timetable_{ts}.log"));

    let file = match fs::create_dir_all(log_dir).and_then(|_| File::create(&log_path)) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Cannot open log file {}: {e}", log_path.display());
            return;
        }
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Info, LogConfig::default(), file) {
        eprintln!("Failed to initialise logger: {e}");
    }
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
