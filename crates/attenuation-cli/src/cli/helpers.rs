use super::CliError;
use anyhow::Context;
use attenuation_core::domain::{ScaleFactors, ScaleQuery};
use attenuation_core::modules::tuning_macro_lines;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Installs the stderr tracing subscriber. `RUST_LOG` wins over `level`.
pub(super) fn init_tracing(level: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|error| CliError::Usage(format!("invalid --log-level '{level}': {error}")))?,
    };

    // A subscriber may already be installed when running inside tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

#[derive(Debug, Serialize)]
pub(super) struct ScaleReport {
    target_length_m: f64,
    wavelength_nm: f64,
    absorption_weight: f64,
    scattering_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    mie_weight: Option<f64>,
    factors: ScaleFactors,
    tuning_macro: Vec<String>,
}

impl ScaleReport {
    pub(super) fn new(query: &ScaleQuery, factors: &ScaleFactors) -> Self {
        Self {
            target_length_m: query.target_length_m,
            wavelength_nm: query.wavelength_nm,
            absorption_weight: query.absorption_weight,
            scattering_weight: query.scattering_weight,
            mie_weight: query.active_mie_weight(),
            factors: *factors,
            tuning_macro: tuning_macro_lines(factors).to_vec(),
        }
    }
}

pub(super) fn write_json_report(report: &ScaleReport) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize scale report")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write scale report")?;
    Ok(())
}
