mod commands;
mod helpers;

use attenuation_core::domain::TuningError;
use clap::Parser;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let tuning_error = error.as_tuning_error();
            eprintln!("{}", tuning_error.diagnostic_line());
            eprintln!("{}", tuning_error.fatal_exit_line());
            tuning_error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            helpers::init_tracing(&cli.log_level)?;
            commands::run_scale_command(cli.scale)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

/// Calculate the scale factors for absorption and Rayleigh scattering (to be
/// used in tuning_parameters) to get the desired total attenuation at a given
/// wavelength. Attenuation is calculated by scaling the absorption and
/// scattering curves as coded in WCSim, taking into account optional relative
/// weights.
#[derive(Parser)]
#[command(name = "attenuation-scaling", version)]
struct Cli {
    #[command(flatten)]
    scale: commands::ScaleArgs,

    /// Tracing filter for stderr diagnostics (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(TuningError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_tuning_error(&self) -> TuningError {
        match self {
            Self::Usage(message) => {
                TuningError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => TuningError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}

impl From<TuningError> for CliError {
    fn from(error: TuningError) -> Self {
        Self::Compute(error)
    }
}
