// src/layer.rs - Seven-layer atmosphere model with chained base states

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::constants::{
    GAS_CONSTANT_AIR, GRAVITY_MS2, LAYER_BOUNDARIES_M, LAYER_LAPSE_RATES_K_PER_M,
    SEA_LEVEL_DENSITY_KGM3, SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_TEMPERATURE_K,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerKind {
    /// Nonzero lapse rate; pressure and density follow power laws of the
    /// temperature ratio.
    Gradient,
    /// Zero lapse rate; pressure and density decay exponentially.
    Isothermal,
}

/// One altitude band of the standard atmosphere.
///
/// The base state (temperature, pressure, density at `base_altitude_m`) of
/// every layer except the troposphere is seeded by evaluating the previous
/// layer's closed forms at the shared boundary, so temperature, pressure and
/// density are continuous across the whole stack by construction.
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    pub name: &'static str,
    pub lower_altitude_m: f64,
    pub upper_altitude_m: f64,
    /// Altitude the closed forms are anchored at. Equal to the lower bound
    /// for every layer but the troposphere, whose anchor is sea level while
    /// its band extends down to -2000 m.
    pub base_altitude_m: f64,
    pub lapse_rate_k_per_m: f64,
    pub base_temperature_k: f64,
    pub base_pressure_pa: f64,
    pub base_density_kgm3: f64,
    /// λ = -g₀/(L·R) for gradient layers, δ = -g₀/(R·T_base) for isothermal.
    exponent: f64,
}

impl Layer {
    fn from_base(
        name: &'static str,
        lower_altitude_m: f64,
        upper_altitude_m: f64,
        base_altitude_m: f64,
        lapse_rate_k_per_m: f64,
        base_temperature_k: f64,
        base_pressure_pa: f64,
        base_density_kgm3: f64,
    ) -> Layer {
        let exponent = if lapse_rate_k_per_m == 0.0 {
            -GRAVITY_MS2 / (GAS_CONSTANT_AIR * base_temperature_k)
        } else {
            -GRAVITY_MS2 / (lapse_rate_k_per_m * GAS_CONSTANT_AIR)
        };
        Layer {
            name,
            lower_altitude_m,
            upper_altitude_m,
            base_altitude_m,
            lapse_rate_k_per_m,
            base_temperature_k,
            base_pressure_pa,
            base_density_kgm3,
            exponent,
        }
    }

    pub fn kind(&self) -> LayerKind {
        if self.lapse_rate_k_per_m == 0.0 {
            LayerKind::Isothermal
        } else {
            LayerKind::Gradient
        }
    }

    /// Whether the altitude falls within this layer's band (bounds included).
    pub fn contains(&self, altitude_m: f64) -> bool {
        altitude_m >= self.lower_altitude_m && altitude_m <= self.upper_altitude_m
    }

    /// Temperature in K at a geopotential altitude within the band.
    pub fn temperature_k(&self, altitude_m: f64) -> f64 {
        self.base_temperature_k + self.lapse_rate_k_per_m * (altitude_m - self.base_altitude_m)
    }

    /// Pressure in Pa at a geopotential altitude within the band.
    pub fn pressure_pa(&self, altitude_m: f64) -> f64 {
        match self.kind() {
            LayerKind::Gradient => {
                let temperature_ratio = self.temperature_k(altitude_m) / self.base_temperature_k;
                self.base_pressure_pa * temperature_ratio.powf(self.exponent)
            }
            LayerKind::Isothermal => {
                self.base_pressure_pa
                    * (self.exponent * (altitude_m - self.base_altitude_m)).exp()
            }
        }
    }

    /// Density in kg/m³ at a geopotential altitude within the band.
    pub fn density_kgm3(&self, altitude_m: f64) -> f64 {
        match self.kind() {
            LayerKind::Gradient => {
                let temperature_ratio = self.temperature_k(altitude_m) / self.base_temperature_k;
                self.base_density_kgm3 * temperature_ratio.powf(self.exponent - 1.0)
            }
            LayerKind::Isothermal => {
                self.base_density_kgm3
                    * (self.exponent * (altitude_m - self.base_altitude_m)).exp()
            }
        }
    }
}

/// Seed the next layer's base state from the previous layer's closed forms
/// at the shared boundary altitude.
fn layer_above(previous: &Layer, name: &'static str, upper_altitude_m: f64, lapse: f64) -> Layer {
    let boundary = previous.upper_altitude_m;
    Layer::from_base(
        name,
        boundary,
        upper_altitude_m,
        boundary,
        lapse,
        previous.temperature_k(boundary),
        previous.pressure_pa(boundary),
        previous.density_kgm3(boundary),
    )
}

fn build_layers() -> [Layer; 7] {
    let bounds = LAYER_BOUNDARIES_M;
    let rates = LAYER_LAPSE_RATES_K_PER_M;

    // The troposphere takes the sea-level constants directly; every layer
    // after it chains off its predecessor, strictly in order.
    let troposphere = Layer::from_base(
        "troposphere",
        bounds[0],
        bounds[1],
        0.0,
        rates[0],
        SEA_LEVEL_TEMPERATURE_K,
        SEA_LEVEL_PRESSURE_PA,
        SEA_LEVEL_DENSITY_KGM3,
    );
    let tropopause = layer_above(&troposphere, "tropopause", bounds[2], rates[1]);
    let stratosphere_2 = layer_above(&tropopause, "stratosphere-2", bounds[3], rates[2]);
    let stratosphere_3 = layer_above(&stratosphere_2, "stratosphere-3", bounds[4], rates[3]);
    let stratopause = layer_above(&stratosphere_3, "stratopause", bounds[5], rates[4]);
    let mesosphere_5 = layer_above(&stratopause, "mesosphere-5", bounds[6], rates[5]);
    let mesosphere_6 = layer_above(&mesosphere_5, "mesosphere-6", bounds[7], rates[6]);

    [
        troposphere,
        tropopause,
        stratosphere_2,
        stratosphere_3,
        stratopause,
        mesosphere_5,
        mesosphere_6,
    ]
}

/// The seven-layer table, built once on first use and immutable afterwards.
pub static LAYERS: Lazy<[Layer; 7]> = Lazy::new(build_layers);

pub fn layers() -> &'static [Layer; 7] {
    &LAYERS
}

/// Find the layer an altitude belongs to.
///
/// Scans in ascending order, so a shared boundary altitude resolves to the
/// lower of the two adjacent layers; continuity across boundaries makes the
/// choice unobservable. Returns `None` for altitudes outside the modeled
/// range and for NaN inputs.
pub fn layer_for(altitude_m: f64) -> Option<&'static Layer> {
    LAYERS.iter().find(|layer| layer.contains(altitude_m))
}
