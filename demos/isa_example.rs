// ISA properties at a single altitude, standard day and ISA+10

use stdatm::{
    density, density_with_deviation, geometric_altitude, pressure, speed_of_sound, temperature,
    viscosity,
};

fn main() {
    let alt = 14000.0; // metres above sea level
    println!("Altitude = {alt:.0} m\n");

    let alt_z = geometric_altitude(alt);
    println!("Geometric Altitude = {alt_z:.0} m\n");

    let temp = temperature(alt);
    println!("Air Temperature = {temp:.2} K\n");

    let pres = pressure(alt);
    println!("Air Pressure = {pres:.6} Pa\n");

    let rho = density(alt);
    println!("Air Density = {rho:.4} kg/m^3\n");

    let mu = viscosity(alt);
    println!("Air Viscosity = {mu:.5e} Pa.s\n");

    let a = speed_of_sound(alt);
    println!("Speed of Sound = {a:.1} m/s\n");

    let deviation = 10.0; // K
    let rho_dev = density_with_deviation(alt, deviation);
    println!("Density ISA+{deviation:.0} = {rho_dev:.4} kg/m^3");
}
