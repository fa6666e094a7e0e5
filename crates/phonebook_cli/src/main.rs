//! Line-oriented CLI front end for the phonebook directory.
//!
//! # Responsibility
//! - Bootstrap configuration and logging from the environment.
//! - Serve one JSON request per stdin line, one JSON response per stdout line.

use log::{error, info};
use phonebook_core::{core_version, init_logging, DirectoryConfig, QueryFacade};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("phonebook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DirectoryConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }
    eprintln!("phonebook_core version={}", core_version());

    let facade = QueryFacade::from_config(&config)?;
    info!(
        "event=cli_start module=cli status=ok seeded={} person_count={}",
        config.seed_demo_data,
        facade.directory().count()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| {
            error!("event=stdin_read module=cli status=error error={err}");
            err
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let response = facade.execute_json(&line);
        writeln!(stdout, "{}", response.to_json_string())?;
        stdout.flush()?;
    }

    info!("event=cli_stop module=cli status=ok");
    Ok(())
}
