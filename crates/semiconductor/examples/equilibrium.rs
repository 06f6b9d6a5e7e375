//! Prints the n-type equilibrium of every preset material, a donor sweep
//! for silicon, the band bending at a depleted silicon surface and the
//! current through a silicon p-n diode.
//!
//! Set `RUST_LOG=debug` to see each solve, `RUST_LOG=warn` for failures only.

use pame_semiconductor::{
    Dopant, Material, Scientific, SearchOptions, Semiconductor, SurfaceBarrier,
    current_voltage, find_band_bending, find_fermi_level, log_space, saturation_current,
    sweep_concentrations,
};
use pame_solvers::equation::root::Method;
use tracing_subscriber::EnvFilter;
use uom::si::{
    electric_potential::volt,
    energy::electronvolt,
    f64::{ElectricPotential, Energy, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let room = ThermodynamicTemperature::new::<kelvin>(300.0);
    let bisection = SearchOptions::default();

    println!("{:<6} {:>10} {:>10} {:>10} {:>6}", "", "Ef (eV)", "n", "p", "iters");
    for material in Material::presets() {
        let crystal = Semiconductor::from_material(&material, room)?;
        let dopant = Dopant::donor(1e16, material.donor_ionization);
        let state = find_fermi_level(&crystal, dopant, &bisection)?;
        println!(
            "{:<6} {:>10.4} {:>10} {:>10} {:>6}",
            material.name,
            state.fermi_level.get::<electronvolt>(),
            Scientific(state.electrons).to_string(),
            Scientific(state.holes).to_string(),
            state.iterations,
        );
    }

    let silicon = Material::silicon();
    let crystal = Semiconductor::from_material(&silicon, room)?;
    let donor = Dopant::donor(1e16, silicon.donor_ionization);
    println!("\nSi donor sweep");
    for point in sweep_concentrations(&crystal, donor, &log_space(1e13, 1e18, 6)?, &bisection) {
        match point.result {
            Ok(state) => println!(
                "Nd = {:>8}  Ef = {:.4} eV  ionized {:.1}%",
                Scientific(point.value).to_string(),
                state.fermi_level.get::<electronvolt>(),
                100.0 * state.ionized_fraction(),
            ),
            Err(error) => println!("Nd = {}  failed: {error}", Scientific(point.value)),
        }
    }

    let barrier = SurfaceBarrier {
        permittivity: silicon.permittivity,
        donor_concentration: 1e17,
        surface_states: 1e12,
        surface_state_energy: Energy::new::<electronvolt>(0.1),
        fermi_level: Energy::new::<electronvolt>(1.0),
        temperature: room,
        external_field: 0.0,
    };
    let bending = find_band_bending(&barrier, &SearchOptions::new(Method::Newton))?;
    println!(
        "\nsurface: phi = {:.4} eV, depletion width = {:.3} um",
        bending.phi.get::<electronvolt>(),
        bending.depletion_width * 1e4,
    );

    let current = saturation_current(&crystal, &silicon.diffusion, 1e16, 1e17)?;
    println!("
Si diode: js = {} A/cm2", Scientific(current.js));
    let biases: Vec<_> = [-0.5, 0.0, 0.3, 0.5, 0.6]
        .into_iter()
        .map(ElectricPotential::new::<volt>)
        .collect();
    for (bias, amps) in current_voltage(current.js, 1e-2, &biases, room)? {
        println!("V = {:>5.2} V  I = {} A", bias.get::<volt>(), Scientific(amps));
    }

    Ok(())
}
