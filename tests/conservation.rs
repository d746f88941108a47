use glam::DVec3;

use spinner_engine::{RigidBodySystem, StepOptions};

fn relative(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs()
}

fn tumbling_body() -> RigidBodySystem {
    let mut system = RigidBodySystem::new(StepOptions::default());
    system.set_mass_ratio(0.7, 0.4);
    system.set_initial_position(75.0, 40.0);
    system.set_omega(DVec3::new(0.0011, -0.0006, 0.0014));
    system
}

#[test]
fn energy_and_momentum_survive_a_long_run() {
    let mut system = tumbling_body();
    let e0 = system.energy();
    let l0 = system.angular_momentum();

    for _ in 0..2_000 {
        system.step(16.0);
    }

    assert!((system.time() - 32_000.0).abs() < 1e-6);
    assert!(relative(system.energy(), e0) < 1e-5, "energy drift {}", relative(system.energy(), e0));
    assert!(
        (system.angular_momentum() - l0).length() / l0.length() < 1e-5,
        "momentum drift {:?} -> {:?}",
        l0,
        system.angular_momentum()
    );
}

#[test]
fn directions_stay_orthonormal() {
    let mut system = tumbling_body();
    for _ in 0..500 {
        system.step(16.0);
    }

    let (x1, x2, x3) = (system.x1(), system.x2(), system.x3());
    assert!((x1.length() - 1.0).abs() < 1e-12);
    assert!((x2.length() - 1.0).abs() < 1e-12);
    assert!((x3.length() - 1.0).abs() < 1e-5);
    assert!(x1.dot(x2).abs() < 1e-5);
    assert!(x1.dot(x3).abs() < 1e-5);
    assert!(x2.dot(x3).abs() < 1e-5);
}

#[test]
fn spin_about_a_principal_axis_is_steady() {
    let mut system = RigidBodySystem::new(StepOptions::default());
    system.set_mass_ratio(0.5, 0.25);
    // x1 = X, x2 = Z, x3 = Y
    system.set_initial_position(90.0, 90.0);
    let omega = DVec3::new(0.0, 0.002, 0.0);
    system.set_omega(omega);

    for _ in 0..200 {
        system.step(16.0);
    }

    assert!((system.omega() - omega).length() < 1e-9, "{:?}", system.omega());
    // The axis itself does not move
    assert!((system.x3() - DVec3::Y).length() < 1e-6);
}

#[test]
fn clamped_calls_integrate_at_most_max_time() {
    let options = StepOptions::new(8.0, 20).expect("valid options");
    let mut clamped = tumbling_body();
    clamped.set_options(options);
    let mut reference = tumbling_body();
    reference.set_options(options);

    let report = clamped.step(10_000.0);
    reference.step(160.0);

    assert_eq!(report.substeps, 20);
    assert!((report.dropped - 9_840.0).abs() < 1e-9);
    assert!((clamped.time() - 10_000.0).abs() < 1e-9);
    for i in 0..3 {
        assert!((clamped.state().x[i] - reference.state().x[i]).length() < 1e-12);
        assert!((clamped.state().v[i] - reference.state().v[i]).length() < 1e-15);
    }
}
