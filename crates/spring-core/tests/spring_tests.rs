// Host-side tests for the per-axis spring integrator.

use spring_core::{ConfigIssue, Error, SpringIntegrator, SpringParams};

const FRAME_MS: f64 = 16.67;

fn critical(mass: f64) -> SpringParams {
    SpringParams {
        stiffness: 1.0,
        damping: 2.0 * mass.sqrt(),
        mass,
    }
}

#[test]
fn critically_damped_spring_converges_without_overshoot() {
    let params = critical(1.0);
    let mut s = SpringIntegrator::new();
    let mut x = 0.0;
    let mut peak = f64::MIN;
    for _ in 0..500 {
        x = s.advance(&params, x, 1.0, FRAME_MS).unwrap();
        peak = peak.max(x);
    }
    assert!((x - 1.0).abs() < 0.01, "x={x}");
    assert!(peak <= 1.0 + 1e-3, "overshoot peak={peak}");
}

#[test]
fn convergence_works_toward_negative_targets_too() {
    let params = critical(1.0);
    let mut s = SpringIntegrator::new();
    let mut x = 0.0;
    for _ in 0..500 {
        x = s.advance(&params, x, -1.0, FRAME_MS).unwrap();
    }
    assert!((x + 1.0).abs() < 0.01);
}

#[test]
fn param_change_only_affects_later_calls() {
    let slow = SpringParams {
        stiffness: 0.5,
        damping: 0.4,
        mass: 2.0,
    };
    let fast = SpringParams {
        stiffness: 5.0,
        ..slow
    };
    let mut a = SpringIntegrator::new();
    let mut b = SpringIntegrator::new();
    let (mut xa, mut xb) = (0.0, 0.0);
    for _ in 0..5 {
        xa = a.advance(&slow, xa, 10.0, 16.0).unwrap();
        xb = b.advance(&slow, xb, 10.0, 16.0).unwrap();
        assert_eq!(xa, xb);
    }
    let before_swap = xa;
    xa = a.advance(&fast, xa, 10.0, 16.0).unwrap();
    xb = b.advance(&slow, xb, 10.0, 16.0).unwrap();
    assert!(xa > xb);
    assert!(xa > before_swap);
}

#[test]
fn axes_keep_independent_velocity() {
    let params = critical(1.0);
    let mut sx = SpringIntegrator::new();
    let mut sy = SpringIntegrator::new();
    let mut x = 0.0;
    for _ in 0..30 {
        x = sx.advance(&params, x, 100.0, 16.0).unwrap();
    }
    // y starts at rest on its own target; x's velocity must not leak into it
    let y = sy.advance(&params, 0.0, 0.0, 16.0).unwrap();
    assert_eq!(y, 0.0);
    assert!(x > 0.0);
}

#[test]
fn negative_mass_is_invalid_configuration() {
    let mut s = SpringIntegrator::new();
    let bad = SpringParams {
        mass: -1.0,
        ..critical(1.0)
    };
    assert_eq!(
        s.advance(&bad, 0.0, 1.0, 16.0),
        Err(Error::InvalidConfiguration(ConfigIssue::NonPositiveMass(-1.0)))
    );
    // still usable, still at rest
    assert_eq!(s.advance(&critical(1.0), 0.0, 0.0, 16.0), Ok(0.0));
}
