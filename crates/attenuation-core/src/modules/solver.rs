use super::lookup::attenuation_length_for;
use super::table::AttenuationTable;
use crate::common::wavelength_to_energy;
use crate::domain::{ScaleFactors, ScaleQuery, TuningError, TuningResult};

/// Solves the absorption/scattering(/Mie) scale factors for `query`.
///
/// The weights are first used as scales to get a base attenuation length;
/// every weight is then multiplied by `target / base`. Mie appears in the
/// result only when its weight was supplied and is non-negative.
pub fn solve_scale_factors(
    table: &AttenuationTable,
    query: &ScaleQuery,
) -> TuningResult<ScaleFactors> {
    validate_query(query)?;

    let energy_ev = wavelength_to_energy(query.wavelength_nm);
    let (lowest_ev, highest_ev) = table.energy_range_ev();
    if !(lowest_ev..=highest_ev).contains(&energy_ev) {
        tracing::warn!(
            wavelength_nm = query.wavelength_nm,
            energy_ev,
            lowest_ev,
            highest_ev,
            "wavelength outside tabulated range, lengths are clamped to the table ends"
        );
    }

    let mie_weight = query.active_mie_weight();
    let base_length_m = attenuation_length_for(
        table,
        query.wavelength_nm,
        query.absorption_weight,
        query.scattering_weight,
        mie_weight,
    );
    if !base_length_m.is_finite() || base_length_m <= 0.0 {
        return Err(TuningError::computation(
            "RUN.BASE_ATTENUATION",
            format!(
                "weighted base attenuation length at {} nm is {}",
                query.wavelength_nm, base_length_m
            ),
        ));
    }

    let scale_total = query.target_length_m / base_length_m;
    tracing::debug!(
        base_length_m,
        target_length_m = query.target_length_m,
        scale_total,
        "solved uniform attenuation rescale"
    );

    Ok(ScaleFactors {
        absorption: scale_total * query.absorption_weight,
        scattering: scale_total * query.scattering_weight,
        mie: mie_weight.map(|weight| scale_total * weight),
    })
}

fn validate_query(query: &ScaleQuery) -> TuningResult<()> {
    require_positive(
        "INPUT.TARGET_LENGTH",
        "target attenuation length",
        query.target_length_m,
    )?;
    require_positive("INPUT.WAVELENGTH", "wavelength", query.wavelength_nm)?;
    require_positive(
        "INPUT.ABSORPTION_WEIGHT",
        "absorption weight",
        query.absorption_weight,
    )?;
    require_positive(
        "INPUT.SCATTERING_WEIGHT",
        "scattering weight",
        query.scattering_weight,
    )?;

    if let Some(weight) = query.mie_weight.filter(|weight| !weight.is_finite()) {
        return Err(TuningError::input_validation(
            "INPUT.MIE_WEIGHT",
            format!("Mie weight must be finite, got {weight}"),
        ));
    }

    Ok(())
}

pub(super) fn require_positive(
    placeholder: &'static str,
    label: &str,
    value: f64,
) -> TuningResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::not_positive(placeholder, label, value))
    }
}
