//! Physical constants used for photon energy/wavelength conversion.
//!
//! SI values from CODATA 2018, where h, c and e are exact by definition.
//! These match what ROOT's `TMath::H()`, `TMath::C()` and `TMath::Qe()` return.

/// Planck constant [J s].
pub const PLANCK_J_S: f64 = 6.626_070_15e-34;
/// Speed of light in vacuum [m/s].
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
/// Elementary charge [C].
pub const ELEMENTARY_CHARGE_C: f64 = 1.602_176_634e-19;
pub const NM_PER_M: f64 = 1.0e9;
pub const CM_PER_M: f64 = 100.0;

/// h·c/e expressed in eV·nm.
pub const HC_EV_NM: f64 = PLANCK_J_S * SPEED_OF_LIGHT_M_S / ELEMENTARY_CHARGE_C * NM_PER_M;
