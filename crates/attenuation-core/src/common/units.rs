use super::constants::{CM_PER_M, HC_EV_NM};

/// Photon wavelength [nm] to energy [eV].
pub fn wavelength_to_energy(wavelength_nm: f64) -> f64 {
    HC_EV_NM / wavelength_nm
}

/// Photon energy [eV] to wavelength [nm].
pub fn energy_to_wavelength(energy_ev: f64) -> f64 {
    HC_EV_NM / energy_ev
}

pub fn cm_to_m(length_cm: f64) -> f64 {
    length_cm / CM_PER_M
}
