use super::solver::require_positive;
use super::table::AttenuationTable;
use crate::common::{cm_to_m, wavelength_to_energy};
use crate::domain::{Effect, TuningResult};
use crate::numerics::interpolate_sorted;

/// Interpolated, unscaled length of one effect at `energy_ev`, in cm.
pub fn interpolated_length_cm(table: &AttenuationTable, energy_ev: f64, effect: Effect) -> f64 {
    interpolate_sorted(energy_ev, table.energies_ev(), table.lengths_cm(effect))
}

/// Combined attenuation length in metres at `wavelength_nm`.
///
/// Each tabulated curve is interpolated and multiplied by its scale, then the
/// inverse lengths are summed. Mie contributes only for a strictly positive
/// scale; otherwise its inverse term is zero.
pub fn attenuation_length_for(
    table: &AttenuationTable,
    wavelength_nm: f64,
    scale_abs: f64,
    scale_scat: f64,
    scale_mie: Option<f64>,
) -> f64 {
    let energy_ev = wavelength_to_energy(wavelength_nm);
    let absorption = scale_abs * interpolated_length_cm(table, energy_ev, Effect::Absorption);
    let scattering = scale_scat * interpolated_length_cm(table, energy_ev, Effect::Rayleigh);
    let mie_inverse = match scale_mie {
        Some(scale) if scale > 0.0 => {
            1.0 / (scale * interpolated_length_cm(table, energy_ev, Effect::Mie))
        }
        _ => 0.0,
    };

    let length_cm = 1.0 / (1.0 / absorption + 1.0 / scattering + mie_inverse);
    cm_to_m(length_cm)
}

/// Scaled length in metres of a single effect at `wavelength_nm`.
pub fn effect_length(
    table: &AttenuationTable,
    wavelength_nm: f64,
    effect: Effect,
    scale: f64,
) -> f64 {
    let energy_ev = wavelength_to_energy(wavelength_nm);
    cm_to_m(scale * interpolated_length_cm(table, energy_ev, effect))
}

/// Like [`effect_length`] but resolves the effect from a loose name and
/// rejects a wavelength that is not a positive finite number.
pub fn try_single_effect_length(
    table: &AttenuationTable,
    wavelength_nm: f64,
    effect_name: &str,
    scale: f64,
) -> TuningResult<f64> {
    let effect = Effect::from_name(effect_name)?;
    require_positive("INPUT.WAVELENGTH", "wavelength", wavelength_nm)?;
    Ok(effect_length(table, wavelength_nm, effect, scale))
}

/// Single-effect lookup by name. An unknown name or unusable wavelength is
/// reported as an error diagnostic and yields `None` rather than failing the
/// caller.
pub fn single_effect_length(
    table: &AttenuationTable,
    wavelength_nm: f64,
    effect_name: &str,
    scale: f64,
) -> Option<f64> {
    match try_single_effect_length(table, wavelength_nm, effect_name, scale) {
        Ok(length) => Some(length),
        Err(error) => {
            tracing::error!("{}", error.diagnostic_line());
            None
        }
    }
}
