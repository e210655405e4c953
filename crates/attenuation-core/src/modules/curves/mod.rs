//! Tabulated attenuation curves for comparing nominal and tuned WCSim water
//! against measured pure-water absorption.

mod measured;

use super::plot::plotted_mie_factor;
use super::table::{AttenuationRow, AttenuationTable};
use crate::common::{cm_to_m, energy_to_wavelength};
use crate::domain::{Effect, ScaleFactors, TuningError, TuningResult};
use crate::numerics::combine_inverse_lengths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveScales {
    pub absorption: f64,
    pub scattering: f64,
    pub mie: f64,
}

impl CurveScales {
    pub const NOMINAL: Self = Self {
        absorption: 1.0,
        scattering: 1.0,
        mie: 1.0,
    };

    pub fn from_factors(factors: &ScaleFactors) -> Self {
        Self {
            absorption: factors.absorption,
            scattering: factors.scattering,
            mie: plotted_mie_factor(factors),
        }
    }

    fn scale(&self, effect: Effect) -> f64 {
        match effect {
            Effect::Absorption => self.absorption,
            Effect::Rayleigh => self.scattering,
            Effect::Mie => self.mie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub energy_ev: f64,
    pub wavelength_nm: f64,
    pub absorption_m: f64,
    pub scattering_m: f64,
    pub mie_m: f64,
    pub total_m: f64,
    /// Total attenuation coefficient, `1 / total_m`.
    pub total_coefficient_per_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttenuationCurve {
    pub scales: CurveScales,
    pub points: Vec<CurvePoint>,
}

/// A measured absorption length, energy in eV and length in m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredPoint {
    pub energy_ev: f64,
    pub length_m: f64,
}

impl MeasuredPoint {
    pub const fn new(energy_ev: f64, length_m: f64) -> Self {
        Self {
            energy_ev,
            length_m,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub energy_ev: f64,
    pub wavelength_nm: f64,
    pub absorption_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    pub nominal: AttenuationCurve,
    pub tuned: AttenuationCurve,
    /// Measured absorption lengths the WCSim curves are compared with.
    pub measured: Vec<ReferencePoint>,
}

fn curve_point(row: AttenuationRow, scales: CurveScales) -> CurvePoint {
    let [absorption_m, scattering_m, mie_m] =
        Effect::ALL.map(|effect| cm_to_m(scales.scale(effect) * row.length_cm(effect)));
    let total_m = combine_inverse_lengths(&[absorption_m, scattering_m, mie_m]);

    CurvePoint {
        energy_ev: row.energy_ev,
        wavelength_nm: energy_to_wavelength(row.energy_ev),
        absorption_m,
        scattering_m,
        mie_m,
        total_m,
        total_coefficient_per_m: 1.0 / total_m,
    }
}

/// Scaled per-effect and combined lengths at every table row.
pub fn attenuation_curve(table: &AttenuationTable, scales: CurveScales) -> AttenuationCurve {
    AttenuationCurve {
        scales,
        points: table.rows().map(|row| curve_point(row, scales)).collect(),
    }
}

/// Measured water absorption, each energy also given as a wavelength.
pub fn measured_reference() -> Vec<ReferencePoint> {
    measured::leigh_water_points()
        .iter()
        .map(|point| ReferencePoint {
            energy_ev: point.energy_ev,
            wavelength_nm: energy_to_wavelength(point.energy_ev),
            absorption_m: point.length_m,
        })
        .collect()
}

pub fn curve_set(table: &AttenuationTable, factors: &ScaleFactors) -> CurveSet {
    CurveSet {
        nominal: attenuation_curve(table, CurveScales::NOMINAL),
        tuned: attenuation_curve(table, CurveScales::from_factors(factors)),
        measured: measured_reference(),
    }
}

pub fn write_curve_set(curves: &CurveSet, path: impl AsRef<Path>) -> TuningResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(curves).map_err(|source| {
        TuningError::internal(
            "SYS.CURVES_SERIALIZE",
            format!("failed to serialize attenuation curves: {source}"),
        )
    })?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            TuningError::io_system(
                "IO.CURVES_WRITE",
                format!("failed to create '{}': {}", parent.display(), source),
            )
        })?;
    }
    fs::write(path, json).map_err(|source| {
        TuningError::io_system(
            "IO.CURVES_WRITE",
            format!("failed to write curves '{}': {}", path.display(), source),
        )
    })?;

    tracing::info!(path = %path.display(), "wrote attenuation curves");
    Ok(())
}
