// src/atmosphere.rs - Property functions over the seven-layer model

use crate::constants::{
    GAS_CONSTANT_AIR, HEAT_CAPACITY_RATIO, SEA_LEVEL_DENSITY_KGM3, SUTHERLAND_BETA, SUTHERLAND_S_K,
};
use crate::layer::layer_for;

/// Air temperature in K at a geopotential altitude.
///
/// Altitudes outside the modeled range (-2000 m to 84852 m) yield NaN, as do
/// all other property functions; batch queries over mixed in/out-of-range
/// altitudes return partial results rather than failing.
pub fn temperature(altitude_m: f64) -> f64 {
    match layer_for(altitude_m) {
        Some(layer) => layer.temperature_k(altitude_m),
        None => f64::NAN,
    }
}

/// Air pressure in Pa at a geopotential altitude.
pub fn pressure(altitude_m: f64) -> f64 {
    match layer_for(altitude_m) {
        Some(layer) => layer.pressure_pa(altitude_m),
        None => f64::NAN,
    }
}

/// Standard-day air density in kg/m³ at a geopotential altitude.
pub fn density(altitude_m: f64) -> f64 {
    match layer_for(altitude_m) {
        Some(layer) => layer.density_kgm3(altitude_m),
        None => f64::NAN,
    }
}

/// Air density in kg/m³ on an ISA+ΔT day.
///
/// A nonzero deviation shifts the temperature profile uniformly while the
/// pressure profile stays standard; density then comes from the ideal gas
/// law ρ = P/(R·T) instead of the per-layer closed form.
pub fn density_with_deviation(altitude_m: f64, deviation_k: f64) -> f64 {
    if deviation_k == 0.0 {
        density(altitude_m)
    } else {
        pressure(altitude_m) / (GAS_CONSTANT_AIR * (temperature(altitude_m) + deviation_k))
    }
}

/// Density ratio σ = ρ/ρ₀, dimensionless.
pub fn density_ratio(altitude_m: f64) -> f64 {
    density(altitude_m) / SEA_LEVEL_DENSITY_KGM3
}

/// Speed of sound in m/s at a geopotential altitude.
pub fn speed_of_sound(altitude_m: f64) -> f64 {
    speed_of_sound_at_temperature(temperature(altitude_m))
}

/// Speed of sound in m/s for a given air temperature: a = √(γ·R·T).
pub fn speed_of_sound_at_temperature(temperature_k: f64) -> f64 {
    (HEAT_CAPACITY_RATIO * GAS_CONSTANT_AIR * temperature_k).sqrt()
}

/// Dynamic viscosity in Pa·s at a geopotential altitude.
pub fn viscosity(altitude_m: f64) -> f64 {
    viscosity_at_temperature(temperature(altitude_m))
}

/// Sutherland's law: μ = β·T^1.5/(T + S).
pub fn viscosity_at_temperature(temperature_k: f64) -> f64 {
    SUTHERLAND_BETA * temperature_k.powf(1.5) / (temperature_k + SUTHERLAND_S_K)
}

/// Equivalent airspeed in m/s from true airspeed: v_eas = √(σ·v_tas²).
pub fn equivalent_airspeed(altitude_m: f64, true_airspeed_ms: f64) -> f64 {
    (density_ratio(altitude_m) * true_airspeed_ms * true_airspeed_ms).sqrt()
}

/// True airspeed in m/s from equivalent airspeed: v_tas = √(v_eas²/σ).
pub fn true_airspeed(altitude_m: f64, equivalent_airspeed_ms: f64) -> f64 {
    (equivalent_airspeed_ms * equivalent_airspeed_ms / density_ratio(altitude_m)).sqrt()
}

/// Temperatures for an ordered collection of altitudes, preserving input
/// order and length, with NaN at out-of-range positions.
pub fn temperature_profile(altitudes_m: &[f64]) -> Vec<f64> {
    altitudes_m.iter().map(|&h| temperature(h)).collect()
}

/// Pressures for an ordered collection of altitudes.
pub fn pressure_profile(altitudes_m: &[f64]) -> Vec<f64> {
    altitudes_m.iter().map(|&h| pressure(h)).collect()
}

/// Standard-day densities for an ordered collection of altitudes.
pub fn density_profile(altitudes_m: &[f64]) -> Vec<f64> {
    altitudes_m.iter().map(|&h| density(h)).collect()
}

/// Density ratios for an ordered collection of altitudes.
pub fn density_ratio_profile(altitudes_m: &[f64]) -> Vec<f64> {
    altitudes_m.iter().map(|&h| density_ratio(h)).collect()
}

/// Speeds of sound for an ordered collection of altitudes.
pub fn speed_of_sound_profile(altitudes_m: &[f64]) -> Vec<f64> {
    altitudes_m.iter().map(|&h| speed_of_sound(h)).collect()
}

/// Viscosities for an ordered collection of altitudes.
pub fn viscosity_profile(altitudes_m: &[f64]) -> Vec<f64> {
    altitudes_m.iter().map(|&h| viscosity(h)).collect()
}
