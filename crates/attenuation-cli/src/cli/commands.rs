use super::CliError;
use super::helpers::{ScaleReport, write_json_report};
use attenuation_core::domain::{DEFAULT_WAVELENGTH_NM, ScaleQuery};
use attenuation_core::modules::plot::{DEFAULT_PLOT_MACRO, DEFAULT_ROOT_BINARY};
use attenuation_core::modules::{
    AttenuationTable, PlotInvocation, Verbosity, curve_set, render_report, solve_scale_factors,
    write_curve_set,
};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct ScaleArgs {
    /// Desired total attenuation length in m
    #[arg(value_name = "ATT_LENGTH")]
    att_length: f64,

    /// Wavelength in nm at which attenuation is calculated
    #[arg(short, long, default_value_t = DEFAULT_WAVELENGTH_NM)]
    wavelength: f64,

    /// Relative weight for absorption
    #[arg(short, long, default_value_t = 1.0)]
    abs_weight: f64,

    /// Relative weight for Rayleigh scattering
    #[arg(short, long, default_value_t = 1.0)]
    scatt_weight: f64,

    /// Relative weight for Mie scattering (off when negative)
    #[arg(short, long, default_value_t = -1.0, allow_negative_numbers = true)]
    mie_weight: f64,

    /// Verbosity: 1 prints just the WCSim commands, 2 prints everything
    #[arg(
        short,
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..=2)
    )]
    verbosity: u8,

    /// Run the ROOT attenuation macro to plot the attenuation length curves
    #[arg(short, long)]
    plot: bool,

    /// Attenuation table (energy_eV abs_cm rayleigh_cm mie_cm); defaults to
    /// the built-in WCSim water table
    #[arg(long, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Print the scale factors as JSON instead of the macro lines
    #[arg(long)]
    json: bool,

    /// Write nominal and tuned attenuation curves as JSON
    #[arg(long, value_name = "PATH")]
    curves: Option<PathBuf>,

    /// ROOT macro used by --plot
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PLOT_MACRO)]
    plot_macro: PathBuf,

    /// ROOT executable used by --plot
    #[arg(long, value_name = "NAME", default_value = DEFAULT_ROOT_BINARY)]
    root_bin: String,
}

impl ScaleArgs {
    pub(super) fn query(&self) -> ScaleQuery {
        ScaleQuery::new(self.att_length, self.wavelength)
            .with_absorption_weight(self.abs_weight)
            .with_scattering_weight(self.scatt_weight)
            .with_mie_weight(self.mie_weight)
    }

    fn verbosity(&self) -> Verbosity {
        Verbosity::from_level(self.verbosity).unwrap_or_default()
    }
}

pub(super) fn run_scale_command(args: ScaleArgs) -> Result<i32, CliError> {
    let table = AttenuationTable::load_or_builtin(args.table.as_deref())?;
    let query = args.query();
    tracing::debug!(?query, table_rows = table.len(), "solving scale factors");
    let factors = solve_scale_factors(&table, &query)?;

    if args.json {
        write_json_report(&ScaleReport::new(&query, &factors))?;
    } else {
        print!("{}", render_report(&query, &factors, args.verbosity()));
    }

    if let Some(path) = &args.curves {
        write_curve_set(&curve_set(&table, &factors), path)?;
    }

    if args.plot {
        PlotInvocation::new(&factors)
            .with_root_binary(args.root_bin.as_str())
            .with_macro_path(args.plot_macro.as_path())
            .run()?;
    }

    Ok(0)
}
