use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use circle_relation::{cli::Cli, run};
use clap::Parser;
use env_logger::{Builder, Env, Target};

fn init_logging() -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Ok(log_location) = std::env::var("LOG_LOCATION") {
        let path = PathBuf::from(&*shellexpand::tilde(&log_location));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("could not open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let settings = cli.settings()?;
    let stdout = BufWriter::new(std::io::stdout().lock());

    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            run(BufReader::new(file), stdout, &settings)?;
        }
        None => {
            run(std::io::stdin().lock(), stdout, &settings)?;
        }
    }

    Ok(())
}
