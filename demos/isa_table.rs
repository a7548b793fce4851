// ISA property table at the layer boundary altitudes

use stdatm::{
    density, geometric_altitude, pressure, speed_of_sound, temperature, viscosity,
};

fn main() {
    let altitudes = [
        0.0, 11000.0, 20000.0, 32000.0, 47000.0, 51000.0, 71000.0, 84852.0,
    ];

    println!(
        "{:>12} {:>14} {:>10} {:>12} {:>12} {:>12} {:>10}",
        "Alt (m)", "Geom Alt (m)", "T (K)", "P (Pa)", "rho (kg/m3)", "mu (Pa.s)", "a (m/s)"
    );

    for alt in altitudes {
        println!(
            "{:>12.0} {:>14.0} {:>10.2} {:>12.4} {:>12.6} {:>12.5e} {:>10.1}",
            alt,
            geometric_altitude(alt),
            temperature(alt),
            pressure(alt),
            density(alt),
            viscosity(alt),
            speed_of_sound(alt)
        );
    }
}
