pub mod curves;
pub mod lookup;
pub mod plot;
pub mod solver;
pub mod table;
pub mod tuning;

pub use curves::{
    AttenuationCurve, CurvePoint, CurveScales, CurveSet, ReferencePoint, curve_set,
    measured_reference, write_curve_set,
};
pub use lookup::{
    attenuation_length_for, effect_length, single_effect_length, try_single_effect_length,
};
pub use plot::PlotInvocation;
pub use solver::solve_scale_factors;
pub use table::{AttenuationRow, AttenuationTable, TableError};
pub use tuning::{Verbosity, format_general, render_report, tuning_macro_lines};
