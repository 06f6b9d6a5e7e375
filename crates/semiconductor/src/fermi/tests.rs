use approx::assert_relative_eq;
use pame_observers::History;
use proptest::prelude::*;
use pame_solvers::equation::{
    Config, newton,
    root::{self, Method, Start},
};
use uom::si::{
    energy::electronvolt,
    f64::{Energy, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::{ChargeBalance, Dopant, Error, Material, SearchOptions, Semiconductor};

use super::{estimate_fermi_level, find_fermi_level};

const EC: f64 = 1.12;

fn silicon_at(t: f64) -> Semiconductor {
    Semiconductor::from_material(&Material::silicon(), ThermodynamicTemperature::new::<kelvin>(t))
        .unwrap()
}

fn donor(concentration: f64) -> Dopant {
    Dopant::donor(concentration, Energy::new::<electronvolt>(0.045))
}

fn acceptor(concentration: f64) -> Dopant {
    Dopant::acceptor(concentration, Energy::new::<electronvolt>(0.045))
}

fn ev(energy: Energy) -> f64 {
    energy.get::<electronvolt>()
}

#[test]
fn n_type_silicon_with_every_method() {
    let si = silicon_at(300.0);
    let nd = 1e16;

    let levels: Vec<f64> = Method::ALL
        .into_iter()
        .map(|method| {
            let eq = find_fermi_level(&si, donor(nd), &SearchOptions::new(method)).unwrap();

            let ef = ev(eq.fermi_level);
            assert!(ef > 0.0 && ef < EC, "{method}: {ef}");
            assert!((0.0..=nd).contains(&eq.ionized_dopants), "{method}");
            assert!(eq.residual.abs() < 1e-4, "{method}");
            ef
        })
        .collect();

    assert_relative_eq!(levels[0], 0.958, epsilon = 2e-3);
    for level in &levels[1..] {
        assert_relative_eq!(*level, levels[0], epsilon = 1e-5);
    }
}

#[test]
fn n_type_silicon_report() {
    let si = silicon_at(300.0);
    let eq = find_fermi_level(&si, donor(1e16), &SearchOptions::default()).unwrap();

    // Nearly full ionization, electrons supplied by the donors.
    assert!(eq.ionized_fraction() > 0.99 && eq.ionized_fraction() <= 1.0);
    assert_relative_eq!(eq.electrons, eq.ionized_dopants + eq.holes, max_relative = 1e-4);
    assert!(eq.holes < 1e5);

    // Mass action law.
    let ni = si.intrinsic_concentration();
    assert_relative_eq!(eq.electrons * eq.holes, ni * ni, max_relative = 1e-9);

    assert_eq!(eq.conduction_density, si.conduction_density());
    assert_eq!(eq.valence_density, si.valence_density());
    assert!(eq.iterations > 0);
}

#[test]
fn p_type_silicon() {
    let si = silicon_at(300.0);

    for method in Method::ALL {
        let eq = find_fermi_level(&si, acceptor(1e16), &SearchOptions::new(method)).unwrap();
        let ef = ev(eq.fermi_level);

        assert!(ef > 0.0 && ef < 0.3, "{method}: {ef}");
        assert!(eq.holes > eq.electrons);
        assert_relative_eq!(eq.holes, eq.electrons + eq.ionized_dopants, max_relative = 1e-4);
    }
}

#[test]
fn open_methods_from_explicit_starts() {
    let si = silicon_at(300.0);
    let reference = find_fermi_level(&si, donor(1e16), &SearchOptions::default()).unwrap();
    let expected = ev(reference.fermi_level);

    let cases = [
        (Method::Newton, Start::Point(EC - 0.05)),
        (Method::Chord, Start::Point(1.0)),
        (Method::Secant, Start::Point(1.07)),
        (Method::Secant, Start::Pair([1.0, 1.05])),
    ];

    for (method, start) in cases {
        let eq = find_fermi_level(&si, donor(1e16), &SearchOptions::new(method).start(start))
            .unwrap();
        assert_relative_eq!(ev(eq.fermi_level), expected, epsilon = 1e-5);
    }
}

#[test]
fn bracket_without_the_root_does_not_converge() {
    let si = silicon_at(300.0);
    let options = SearchOptions::default().start(Start::Bracket([1.0, EC]));

    let result = find_fermi_level(&si, donor(1e16), &options);

    assert!(matches!(
        result,
        Err(Error::Solver(root::Error::DidNotConverge { method: Method::Bisection, .. }))
    ));
}

#[test]
fn undoped_crystal_sits_at_the_intrinsic_level() {
    let si = silicon_at(300.0);

    let eq = find_fermi_level(&si, donor(0.0), &SearchOptions::default()).unwrap();

    assert_relative_eq!(ev(eq.fermi_level), ev(si.intrinsic_level()), epsilon = 1e-5);
    assert_relative_eq!(eq.electrons, si.intrinsic_concentration(), max_relative = 1e-3);
}

#[test]
fn heating_pulls_the_level_towards_midgap() {
    let levels: Vec<f64> = [200.0, 300.0, 400.0, 500.0]
        .into_iter()
        .map(|t| {
            let eq = find_fermi_level(&silicon_at(t), donor(1e15), &SearchOptions::default())
                .unwrap();
            ev(eq.fermi_level)
        })
        .collect();

    assert!(levels.windows(2).all(|pair| pair[1] < pair[0]), "{levels:?}");
}

#[test]
fn estimate_is_close_for_shallow_donors() {
    let si = silicon_at(300.0);
    let eq = find_fermi_level(&si, donor(1e16), &SearchOptions::default()).unwrap();

    let estimate = ev(estimate_fermi_level(&si, donor(1e16)));

    assert_relative_eq!(estimate, ev(eq.fermi_level), epsilon = 1e-3);
    assert_eq!(estimate_fermi_level(&si, donor(0.0)), si.intrinsic_level());

    // Degenerate doping is clamped inside the gap.
    let clamped = ev(estimate_fermi_level(&si, donor(1e21)));
    assert_relative_eq!(clamped, EC - si.kt(), epsilon = 1e-12);
}

#[test]
fn default_starts_work_for_every_preset() {
    for material in Material::presets() {
        let crystal =
            Semiconductor::from_material(&material, ThermodynamicTemperature::new::<kelvin>(300.0))
                .unwrap();

        for exponent in 12..=17 {
            let concentration = 10f64.powi(exponent);
            let dopants = [
                Dopant::donor(concentration, material.donor_ionization),
                Dopant::acceptor(concentration, material.acceptor_ionization),
            ];

            for dopant in dopants {
                let reference = find_fermi_level(&crystal, dopant, &SearchOptions::default())
                    .unwrap()
                    .fermi_level;

                for method in [Method::Newton, Method::Chord, Method::Secant] {
                    let result = find_fermi_level(&crystal, dopant, &SearchOptions::new(method));
                    let eq = result.unwrap_or_else(|e| {
                        panic!("{} {dopant:?} {method}: {e:?}", material.name)
                    });
                    assert_relative_eq!(ev(eq.fermi_level), ev(reference), epsilon = 1e-4);
                    assert!(eq.iterations <= 5, "{} {method}: {}", material.name, eq.iterations);
                }
            }
        }
    }
}

#[test]
fn estimate_accounts_for_intrinsic_carriers() {
    // Ge at 1e12 cm⁻³ is dominated by its intrinsic density.
    let ge = Material::germanium();
    let crystal =
        Semiconductor::from_material(&ge, ThermodynamicTemperature::new::<kelvin>(300.0)).unwrap();
    let dopant = Dopant::donor(1e12, ge.donor_ionization);

    let estimate = ev(estimate_fermi_level(&crystal, dopant));
    let solved = ev(find_fermi_level(&crystal, dopant, &SearchOptions::default())
        .unwrap()
        .fermi_level);

    assert_relative_eq!(estimate, solved, epsilon = 1e-3);
}

#[test]
fn newton_history_shows_fast_convergence() {
    let si = silicon_at(300.0);
    let balance = ChargeBalance::new(&si, donor(1e16)).unwrap();
    let config = Config::new(50, 1e-12).unwrap();
    let mut history = History::new();

    let solution = newton::solve(&balance, &balance, EC, &config, &mut history).unwrap();

    assert!(solution.is_converged());
    // Roughly one kT per step down the exponential, then a quadratic finish.
    assert!(solution.iters < 15, "{}", solution.iters);
    let ratios = history.contraction_ratios();
    assert!(ratios[ratios.len() - 1] < 1e-3);
}

#[test]
fn repeated_searches_are_bit_identical() {
    let si = silicon_at(300.0);

    for method in Method::ALL {
        let options = SearchOptions::new(method);
        let first = find_fermi_level(&si, donor(3e15), &options).unwrap();
        let second = find_fermi_level(&si, donor(3e15), &options).unwrap();

        assert_eq!(first, second);
    }
}

#[test]
fn invalid_inputs_are_reported() {
    let si = silicon_at(300.0);

    let result = find_fermi_level(&si, donor(-1.0), &SearchOptions::default());
    assert!(matches!(result, Err(Error::Negative { .. })));

    let result = find_fermi_level(&si, donor(1e16), &SearchOptions::default().tolerance(0.0));
    assert!(matches!(result, Err(Error::Config(_))));

    let options = SearchOptions::new(Method::Newton).start(Start::Bracket([0.0, EC]));
    let result = find_fermi_level(&si, donor(1e16), &options);
    assert!(matches!(result, Err(Error::Solver(root::Error::StartMismatch { .. }))));
}

proptest! {
    #[test]
    fn fermi_level_stays_in_the_gap(
        log_nd in 12.0..17.0_f64,
        temperature in 150.0..600.0_f64,
        n_type in any::<bool>(),
    ) {
        let si = silicon_at(temperature);
        let concentration = 10f64.powf(log_nd);
        let dopant = if n_type { donor(concentration) } else { acceptor(concentration) };

        let state = find_fermi_level(&si, dopant, &SearchOptions::default()).unwrap();
        let ef = ev(state.fermi_level);

        prop_assert!(ef > 0.0 && ef < EC);
        prop_assert!(state.ionized_dopants >= 0.0 && state.ionized_dopants <= concentration);
        prop_assert!(state.residual.abs() < 1e-4);
    }
}
