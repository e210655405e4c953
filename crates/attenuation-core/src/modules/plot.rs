use super::tuning::format_general;
use crate::domain::{ScaleFactors, TuningError, TuningResult};
use std::path::PathBuf;
use std::process::Command;

pub const DEFAULT_ROOT_BINARY: &str = "root";
pub const DEFAULT_PLOT_MACRO: &str = "attenuation.C";

/// Mie factor handed to the macro when Mie is off; large enough that its
/// inverse length vanishes.
pub const DISABLED_MIE_PLOT_FACTOR: f64 = 1.0e6;

const PLOT_ARGUMENT_DIGITS: usize = 6;

/// Mie factor used when drawing curves. A factor that is not strictly
/// positive adds no Mie term to the solved length, so it is drawn as off.
pub fn plotted_mie_factor(factors: &ScaleFactors) -> f64 {
    factors
        .mie
        .filter(|mie| *mie > 0.0)
        .unwrap_or(DISABLED_MIE_PLOT_FACTOR)
}

/// A ROOT invocation of the attenuation plotting macro for solved factors.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotInvocation {
    pub root_binary: String,
    pub macro_path: PathBuf,
    pub absorption: f64,
    pub scattering: f64,
    pub mie: f64,
}

impl PlotInvocation {
    pub fn new(factors: &ScaleFactors) -> Self {
        Self {
            root_binary: DEFAULT_ROOT_BINARY.to_string(),
            macro_path: PathBuf::from(DEFAULT_PLOT_MACRO),
            absorption: factors.absorption,
            scattering: factors.scattering,
            mie: plotted_mie_factor(factors),
        }
    }

    pub fn with_root_binary(mut self, root_binary: impl Into<String>) -> Self {
        self.root_binary = root_binary.into();
        self
    }

    pub fn with_macro_path(mut self, macro_path: impl Into<PathBuf>) -> Self {
        self.macro_path = macro_path.into();
        self
    }

    /// Macro call expression, e.g. `attenuation.C(0.5, 0.5, 1e+06, true)`.
    pub fn macro_call(&self) -> String {
        format!(
            "{}({}, {}, {}, true)",
            self.macro_path.display(),
            format_general(self.absorption, PLOT_ARGUMENT_DIGITS),
            format_general(self.scattering, PLOT_ARGUMENT_DIGITS),
            format_general(self.mie, PLOT_ARGUMENT_DIGITS),
        )
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.root_binary);
        command.arg("-l").arg(self.macro_call());
        command
    }

    /// Runs ROOT and waits for it. A non-zero exit is only logged since the
    /// plot is a side product of the scale factors.
    pub fn run(&self) -> TuningResult<()> {
        tracing::info!(
            root = %self.root_binary,
            call = %self.macro_call(),
            "launching attenuation plot macro"
        );
        let status = self.command().status().map_err(|source| {
            TuningError::io_system(
                "IO.PLOT_SPAWN",
                format!("failed to run '{}': {}", self.root_binary, source),
            )
        })?;

        if !status.success() {
            tracing::warn!(%status, "attenuation plot macro exited unsuccessfully");
        }
        Ok(())
    }
}
