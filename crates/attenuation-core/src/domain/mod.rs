pub mod errors;

pub use errors::{TuningError, TuningErrorCategory, TuningResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const DEFAULT_WAVELENGTH_NM: f64 = 410.0;

/// Photon loss mechanism with its own tabulated length curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Absorption,
    Rayleigh,
    Mie,
}

impl Effect {
    pub const ALL: [Effect; 3] = [Self::Absorption, Self::Rayleigh, Self::Mie];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absorption => "absorption",
            Self::Rayleigh => "rayleigh",
            Self::Mie => "mie",
        }
    }

    /// Resolves a loose effect name. Matching is case-insensitive and by
    /// substring, checked in the order `abs`, `scat`/`ray`, `mie`.
    pub fn from_name(name: &str) -> TuningResult<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        if normalized.contains("abs") {
            Ok(Self::Absorption)
        } else if normalized.contains("scat") || normalized.contains("ray") {
            Ok(Self::Rayleigh)
        } else if normalized.contains("mie") {
            Ok(Self::Mie)
        } else {
            Err(TuningError::unknown_effect(name))
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Solver input. A Mie weight that is absent or negative disables Mie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleQuery {
    pub target_length_m: f64,
    pub wavelength_nm: f64,
    pub absorption_weight: f64,
    pub scattering_weight: f64,
    pub mie_weight: Option<f64>,
}

impl ScaleQuery {
    pub fn new(target_length_m: f64, wavelength_nm: f64) -> Self {
        Self {
            target_length_m,
            wavelength_nm,
            absorption_weight: 1.0,
            scattering_weight: 1.0,
            mie_weight: None,
        }
    }

    pub fn with_absorption_weight(mut self, weight: f64) -> Self {
        self.absorption_weight = weight;
        self
    }

    pub fn with_scattering_weight(mut self, weight: f64) -> Self {
        self.scattering_weight = weight;
        self
    }

    pub fn with_mie_weight(mut self, weight: impl Into<Option<f64>>) -> Self {
        self.mie_weight = weight.into();
        self
    }

    /// Mie weight when Mie takes part in the result, i.e. supplied and `>= 0`.
    pub fn active_mie_weight(&self) -> Option<f64> {
        self.mie_weight.filter(|weight| *weight >= 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub absorption: f64,
    pub scattering: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mie: Option<f64>,
}

impl ScaleFactors {
    pub fn factor(&self, effect: Effect) -> Option<f64> {
        match effect {
            Effect::Absorption => Some(self.absorption),
            Effect::Rayleigh => Some(self.scattering),
            Effect::Mie => self.mie,
        }
    }
}
