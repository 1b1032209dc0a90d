//! Command dispatch: run an operation and print its result

mod report;

pub use report::{
    format_check_report, format_directory_report, format_file_status, format_init_summary,
    format_update_summary,
};

use crate::config::{Command, Config};
use crate::integrity::{check, initialize, update};
use crate::types::IntegrityError;
use crate::ui::ProgressReporter;

/// Exit code for a command that could not run (bad input, I/O, store write)
pub const EXIT_ERROR: u8 = 2;

/// Whether a command that ran to completion succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Store written, or everything checked matched
    Success,
    /// Check found new, modified or unreadable files
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}

/// Run one command, printing status lines to stdout
///
/// Errors are returned untouched for the caller to print; nothing here
/// exits the process.
pub fn run(command: &Command, config: &Config) -> Result<Outcome, IntegrityError> {
    let progress = if config.show_progress {
        ProgressReporter::new()
    } else {
        ProgressReporter::hidden()
    };

    match command {
        Command::Init { directory } => {
            let summary = initialize(directory, config, &progress)?;
            println!("{}", format_init_summary(&summary));
            Ok(Outcome::Success)
        }
        Command::Check { path } => {
            let report = check(path, config, &progress)?;
            println!("{}", format_check_report(&report));
            Ok(if report.is_clean() {
                Outcome::Success
            } else {
                Outcome::Failure
            })
        }
        Command::Update { file } => {
            let summary = update(file, config)?;
            println!("{}", format_update_summary(&summary));
            Ok(Outcome::Success)
        }
    }
}
