#![warn(clippy::pedantic)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use log::info;

use stride_domain::{self as domain, Package};

fn main() -> ExitCode {
    init_logging();

    match run(&domain::SAMPLE_PACKAGES, &mut io::stdout().lock()) {
        Ok(count) => {
            info!("printed {count} training summaries");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Write one summary line per package, stopping at the first package that cannot be read.
fn run(packages: &[Package<'_>], out: &mut impl Write) -> anyhow::Result<usize> {
    for (index, package) in packages.iter().enumerate() {
        let training = package
            .read()
            .with_context(|| format!("failed to read package #{} ({})", index + 1, package.code))?;
        writeln!(out, "{}", training.record()).context("failed to write training summary")?;
    }
    Ok(packages.len())
}
