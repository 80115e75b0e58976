mod commands;
mod helpers;

use clap::Parser;
use gamess_core::domain::BuilderError;

pub fn run_from_env() -> i32 {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let builder_error = error.as_builder_error();
            eprintln!("{}", builder_error.diagnostic_line());
            if let Some(summary_line) = builder_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            builder_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("gamess-inp".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
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
    name = "gamess-inp",
    version,
    about = "Build GAMESS input files from XYZ geometries"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Load a geometry and write the input file into the current directory
    Generate(commands::DeckArgs),
    /// Print the input file to stdout without writing it
    Preview(commands::DeckArgs),
    /// List the selectable methods, run types, SCF types and basis sets
    Options(commands::OptionsArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Generate(args) => commands::run_generate_command(args),
        CliCommand::Preview(args) => commands::run_preview_command(args),
        CliCommand::Options(args) => commands::run_options_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_builder_error(&self) -> BuilderError {
        match self {
            Self::Usage(message) => {
                BuilderError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Builder(error) => error.clone(),
            Self::Internal(error) => BuilderError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}
