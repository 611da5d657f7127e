mod commands;
mod helpers;

use clap::Parser;
use tabfunc_core::{FunctionError, SettingsError};

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "tabfunc",
    version,
    about = "Inspect and transform tabulated one-dimensional functions"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Summarize a table: size, extrema, step, monotonicity, integral
    Info(commands::InfoArgs),
    /// Interpolate y (or dy/dx, or err) at x
    Eval(commands::EvalArgs),
    /// Solve y(x) = y for x on a monotonic table
    Solve(commands::SolveArgs),
    /// Swap x and y of a monotonic table
    Invert(commands::TransformArgs),
    /// Scale y so the integral over the table becomes one
    Normalize(commands::TransformArgs),
    /// Print the table as JSON column lists
    Export(commands::ExportArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Info(args) => commands::run_info_command(args),
        CliCommand::Eval(args) => commands::run_eval_command(args),
        CliCommand::Solve(args) => commands::run_solve_command(args),
        CliCommand::Invert(args) => commands::run_invert_command(args),
        CliCommand::Normalize(args) => commands::run_normalize_command(args),
        CliCommand::Export(args) => commands::run_export_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Function(#[from] FunctionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "USAGE",
            Self::Function(error) => error.kind().code(),
            Self::Settings(_) => "SETTINGS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Function(error) => error.exit_code(),
            Self::Settings(SettingsError::Read { .. }) | Self::Internal(_) => 3,
            Self::Settings(_) => 2,
        }
    }

    fn diagnostic_line(&self) -> String {
        let message = match self {
            Self::Internal(error) => format!("{error:#}"),
            other => other.to_string(),
        };
        format!("ERROR: [{}] {}", self.code(), message.trim_end())
    }
}
