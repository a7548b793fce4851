//! International Standard Atmosphere (ISA) properties as closed-form
//! functions of geopotential altitude, from -2000 m to 84852 m.
//!
//! Seven altitude bands (troposphere through mesosphere), each with its own
//! lapse rate and hydrostatic closed form, are chained into continuous
//! piecewise temperature/pressure/density functions. Altitudes outside the
//! modeled range yield NaN.

pub mod altitude;
pub mod atmosphere;
pub mod constants;
pub mod layer;

pub use altitude::{geometric_altitude, geopotential_altitude};
pub use atmosphere::{
    density, density_ratio, density_with_deviation, equivalent_airspeed, pressure,
    speed_of_sound, temperature, true_airspeed, viscosity,
};
