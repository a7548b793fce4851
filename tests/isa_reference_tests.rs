// Reference-table checks against published ISA values

use approx::{assert_abs_diff_eq, assert_relative_eq};

use stdatm::atmosphere::{
    density, density_profile, density_with_deviation, pressure, pressure_profile, speed_of_sound,
    temperature, temperature_profile, viscosity,
};
use stdatm::constants::GAS_CONSTANT_AIR;
use stdatm::layer::layers;

#[test]
fn test_sea_level_reference_point() {
    assert_abs_diff_eq!(temperature(0.0), 288.15, epsilon = 1e-12);
    assert_abs_diff_eq!(pressure(0.0), 101325.0, epsilon = 1e-9);
    assert_abs_diff_eq!(density(0.0), 1.225, epsilon = 1e-12);
    assert_relative_eq!(speed_of_sound(0.0), 340.294, max_relative = 1e-4);
    assert_relative_eq!(viscosity(0.0), 1.7894e-5, max_relative = 1e-3);
}

#[test]
fn test_published_boundary_values() {
    // Tropopause base
    assert_abs_diff_eq!(temperature(11000.0), 216.65, epsilon = 1e-9);
    assert_relative_eq!(pressure(11000.0), 22632.0, max_relative = 1e-4);

    // Tropopause plateau holds 216.65 K up to 20 km
    assert_abs_diff_eq!(temperature(20000.0), 216.65, epsilon = 1e-9);
    assert_abs_diff_eq!(temperature(15000.0), 216.65, epsilon = 1e-9);
    assert_relative_eq!(pressure(20000.0), 5474.9, max_relative = 1e-3);

    // Stratopause base
    assert_abs_diff_eq!(temperature(47000.0), 270.65, epsilon = 1e-9);

    // Top of the modeled range is still in-domain
    assert!(temperature(84852.0).is_finite());
    assert!(pressure(84852.0).is_finite());
}

#[test]
fn test_out_of_domain_policy_is_nan_not_panic() {
    assert!(temperature(90000.0).is_nan());
    assert!(pressure(90000.0).is_nan());
    assert!(density(90000.0).is_nan());
    assert!(temperature(-2500.0).is_nan());

    // Mixed batches keep their valid entries
    let altitudes = [0.0, 90000.0, 11000.0];
    let temps = temperature_profile(&altitudes);
    assert!(temps[0].is_finite());
    assert!(temps[1].is_nan());
    assert!(temps[2].is_finite());
}

#[test]
fn test_density_matches_ideal_gas_law() {
    // Cross-check the per-layer density closed form against ρ = P/(R·T)
    let mut altitude = -2000.0;
    while altitude <= 84852.0 {
        let from_layer = density(altitude);
        let from_gas_law = pressure(altitude) / (GAS_CONSTANT_AIR * temperature(altitude));
        assert_relative_eq!(from_layer, from_gas_law, max_relative = 1e-6);
        altitude += 977.0; // offset stride so samples land inside bands too
    }
}

#[test]
fn test_deviation_density_at_tropopause_base() {
    let standard = density(11000.0);
    let isa_plus_10 = density_with_deviation(11000.0, 10.0);

    // Ideal-gas substitution: same pressure, T shifted by 10 K
    assert_relative_eq!(
        isa_plus_10,
        standard * 216.65 / 226.65,
        max_relative = 1e-6
    );
    assert!(isa_plus_10 < standard);

    // Cold day goes the other way
    let isa_minus_10 = density_with_deviation(11000.0, -10.0);
    assert!(isa_minus_10 > standard);
}

#[test]
fn test_profiles_match_scalar_evaluation_at_boundaries() {
    let boundary_altitudes: Vec<f64> = std::iter::once(0.0)
        .chain(layers().iter().map(|layer| layer.upper_altitude_m))
        .collect();

    let temps = temperature_profile(&boundary_altitudes);
    let pressures = pressure_profile(&boundary_altitudes);
    let densities = density_profile(&boundary_altitudes);

    for (i, &h) in boundary_altitudes.iter().enumerate() {
        assert_eq!(temps[i], temperature(h));
        assert_eq!(pressures[i], pressure(h));
        assert_eq!(densities[i], density(h));
    }
}

#[test]
fn test_layer_table_serializes() {
    let json = serde_json::to_string_pretty(layers()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["name"], "troposphere");
    assert_eq!(entries[6]["name"], "mesosphere-6");
    assert_abs_diff_eq!(
        entries[1]["base_temperature_k"].as_f64().unwrap(),
        216.65,
        epsilon = 1e-9
    );
}
