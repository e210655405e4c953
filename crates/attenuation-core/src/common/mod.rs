pub mod constants;
pub mod units;

pub use units::{cm_to_m, energy_to_wavelength, wavelength_to_energy};
