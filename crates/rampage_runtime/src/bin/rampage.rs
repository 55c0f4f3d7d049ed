//! Rampage CLI entry point.

use std::env;
use std::process::ExitCode;

use rampage_foundation::Result;
use rampage_runtime::{CliConfig, Session, help_text, init_telemetry};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = &e.context {
                eprintln!("{context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<()> {
    let config = CliConfig::parse(args)?;

    if config.show_help {
        println!("{}", help_text());
        return Ok(());
    }

    if config.show_version {
        println!("rampage {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Nothing to simulate without monsters.
    if config.monsters == 0 {
        println!("{}", help_text());
        return Ok(());
    }

    init_telemetry();
    let session = Session::new(config.session_config()?);
    session.run()?;
    Ok(())
}
