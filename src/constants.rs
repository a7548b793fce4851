// src/constants.rs - Physical constants for the standard atmosphere model

/// Sea level temperature (ICAO/ISO 2533)
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15; // K
/// Sea level pressure
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101325.0; // Pa
/// Sea level density
pub const SEA_LEVEL_DENSITY_KGM3: f64 = 1.225; // kg/m³

pub const GRAVITY_MS2: f64 = 9.80665; // m/s²
pub const GAS_CONSTANT_AIR: f64 = 287.05287; // J/(kg·K), specific gas constant of dry air
pub const HEAT_CAPACITY_RATIO: f64 = 1.4; // γ, dimensionless

// Sutherland viscosity law: μ = β·T^1.5/(T + S)
pub const SUTHERLAND_BETA: f64 = 1.458e-6; // kg/(m·s·K^0.5)
pub const SUTHERLAND_S_K: f64 = 110.4; // K

/// Earth radius used for the geopotential/geometric altitude correction
pub const EARTH_RADIUS_M: f64 = 6_356_766.0; // m

/// Geopotential boundary altitudes H0..H7 of the seven modeled layers.
///
/// The troposphere band reaches below sea level to -2000 m (ISO 2533 table
/// range); its closed forms stay anchored at the 0 m sea-level base state.
pub const LAYER_BOUNDARIES_M: [f64; 8] = [
    -2000.0,  // H0 - bottom of the troposphere band
    11000.0,  // H1 - tropopause base
    20000.0,  // H2 - stratosphere-2 base
    32000.0,  // H3 - stratosphere-3 base
    47000.0,  // H4 - stratopause base
    51000.0,  // H5 - mesosphere-5 base
    71000.0,  // H6 - mesosphere-6 base
    84852.0,  // H7 - top of the modeled atmosphere
];

/// Temperature lapse rates of the seven layers, in K/m.
/// Zero marks the two isothermal layers (tropopause, stratopause).
pub const LAYER_LAPSE_RATES_K_PER_M: [f64; 7] = [
    -6.5e-3, // troposphere
    0.0,     // tropopause
    1.0e-3,  // stratosphere-2
    2.8e-3,  // stratosphere-3
    0.0,     // stratopause
    -2.8e-3, // mesosphere-5
    -2.0e-3, // mesosphere-6
];
