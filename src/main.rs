use clap::Parser;
use integrity_check::commands::{self, EXIT_ERROR};
use integrity_check::config::Cli;
use integrity_check::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    integrity_check::logging::init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;
    log::debug!(
        "integrity-check v{}, store {}",
        integrity_check::VERSION,
        config.store_path.display()
    );

    let outcome = commands::run(&cli.command, &config)?;
    Ok(outcome.exit_code())
}
