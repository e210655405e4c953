//! Scale factors for WCSim water attenuation tuning.
//!
//! Given a target total attenuation length at one photon wavelength, the
//! solver rescales the tabulated absorption, Rayleigh and (optionally) Mie
//! lengths so their inverse-sum combination reproduces the target.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
