// src/altitude.rs - Geopotential / geometric altitude conversion

use crate::constants::EARTH_RADIUS_M;

/// Geometric (true) altitude in m for a geopotential altitude.
///
/// The only place the Earth-radius curvature correction is applied; every
/// property function in this crate operates on geopotential altitude.
pub fn geometric_altitude(geopotential_altitude_m: f64) -> f64 {
    EARTH_RADIUS_M * geopotential_altitude_m / (EARTH_RADIUS_M - geopotential_altitude_m)
}

/// Geopotential altitude in m for a geometric altitude; exact inverse of
/// [`geometric_altitude`].
pub fn geopotential_altitude(geometric_altitude_m: f64) -> f64 {
    EARTH_RADIUS_M * geometric_altitude_m / (EARTH_RADIUS_M + geometric_altitude_m)
}
