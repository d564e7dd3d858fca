use std::io::{self, Write};

use clap::Parser;

use dynarray::DynamicArray;
use dynarray::cli::Args;
use dynarray::compare::compare_records;
use dynarray::config::Config;
use dynarray::error::Result;
use dynarray::{input, output};

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("dynsort: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args);

    // Each input is sorted on its own, then folded into the first one
    let mut merged: DynamicArray<Vec<u8>> = DynamicArray::new();
    for path in config.inputs() {
        let mut records = input::read_records(input::open_input(&path)?, config.record_delimiter)?;
        records.sort_by(|a, b| compare_records(a, b, &config));
        log::debug!("sorted {} records from {}", records.len(), path);

        if merged.is_empty() {
            merged.swap(&mut records);
        } else {
            merged.merge_by(&records, |a, b| compare_records(a, b, &config));
        }
    }

    if config.stats {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        output::write_stats(&mut stderr, &merged)?;
        stderr.flush()?;
    }

    let out = output::open_output(config.output_file.as_deref())?;
    output::write_records(out, &merged, config.record_delimiter)?;

    Ok(())
}
