//! tests

use crate::common::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};
use crate::defs::{EPSILON, INF_NEG, INF_POS, NAN};
use crate::ops::*;
use rand::random;

#[test]
fn test_exp_log() {
    for _ in 0..10000 {
        let x = exp((random::<f64>() - 0.5) * 120.0);

        let d = exp(log(x));
        assert!((d / x - 1.0).abs() < 1e-13, "exp(log({})) = {}", x, d);
    }

    for _ in 0..10000 {
        let x = (random::<f64>() - 0.5) * 60.0;

        let d = log(exp(x));
        assert!((d - x).abs() < 1e-13, "log(exp({})) = {}", x, d);
    }
}

#[test]
fn test_sin_cos_identity() {
    for _ in 0..10000 {
        let x = (random::<f64>() - 0.5) * 2000.0;
        let s = sin(x);
        let c = cos(x);
        assert!((s * s + c * c - 1.0).abs() < 10.0 * EPSILON, "x = {}", x);
    }
}

#[test]
fn test_sin_asin() {
    for _ in 0..10000 {
        let x = random::<f64>() * 2.0 - 1.0;
        assert!((sin(asin(x)) - x).abs() < 10.0 * EPSILON, "x = {}", x);
        assert!((cos(acos(x)) - x).abs() < 10.0 * EPSILON, "x = {}", x);
    }

    // argument between -pi/2, pi/2
    for _ in 0..10000 {
        let x = (random::<f64>() - 0.5) * PI * 0.9;
        assert!((asin(sin(x)) - x).abs() < 1e-13, "x = {}", x);
    }
}

#[test]
fn test_tan_atan() {
    for _ in 0..10000 {
        let x = (random::<f64>() - 0.5) * PI * 0.99;
        if (x.abs() - FRAC_PI_4).abs() < 0.05 {
            // arctangent series converges slowly around 1.
            continue;
        }
        let t = tan(x);
        assert!((atan(t) - x).abs() < 1e-13, "x = {}", x);
    }
}

#[test]
fn test_pow_sqrt() {
    for _ in 0..10000 {
        let x = exp((random::<f64>() - 0.5) * 100.0);

        let s = sqrt(x);
        assert!((s * s / x - 1.0).abs() < 4.0 * EPSILON, "x = {}", x);

        let p = pow(x, 0.5);
        assert!((p / s - 1.0).abs() < 1e-13, "x = {}", x);

        assert_eq!(pow(x, 0.0), 1.0);
        assert_eq!(pow(-x, 0.0), 1.0);
        assert_eq!(pow(x, 1.0), x);
        assert_eq!(pow(-x, 1.0), -x);
        assert_eq!(pow(0.0, x), 0.0);
        assert_eq!(pow(0.0, -x), INF_POS);
    }
}

#[test]
fn test_powi_pow() {
    for _ in 0..10000 {
        let i = random::<u64>() % 40;
        let x = (random::<f64>() - 0.5) * 8.0;

        let mut d = 1.0;
        for _ in 0..i {
            d *= x;
        }

        let p = powi(x, i);
        let q = pow(x, i as f64);
        assert!((p - d).abs() <= 1e-14 * d.abs(), "{}^{}", x, i);
        assert!((q - d).abs() <= 1e-14 * d.abs(), "{}^{}", x, i);
    }
}

#[test]
fn test_scenarios() {
    assert_eq!(sin(0.0), 0.0);
    assert_eq!(cos(0.0), 1.0);
    assert_eq!(tan(0.0), 0.0);

    assert_eq!(floor(-1.5), -2.0);
    assert_eq!(ceil(-1.5), -1.0);
    assert_eq!(floor(1.5), 1.0);
    assert_eq!(ceil(1.5), 2.0);

    assert!((pow(2.0, 10.0) - 1024.0).abs() < EPSILON);

    assert!((atan(1.0) - FRAC_PI_4).abs() < EPSILON);
    assert!((asin(1.0) - FRAC_PI_2).abs() < EPSILON);
    assert!((acos(0.0) - FRAC_PI_2).abs() < EPSILON);

    assert!((fmod(5.3, 2.0) - 1.3).abs() < EPSILON);
    assert!((fmod(-5.3, 2.0) + 1.3).abs() < EPSILON);

    assert!((sqrt(2.0) - 1.414_213_562_373_095).abs() < 1e-10);
    assert_eq!(sqrt(0.0), 0.0);

    assert!((exp(1.0) - E).abs() < EPSILON);
    assert!((log(E) - 1.0).abs() < EPSILON);
}

#[test]
fn test_nan_propagation() {
    let unary: [fn(f64) -> f64; 15] = [fabs, trunc, floor, ceil, exp, log, sin, cos, tan, asin, acos, atan, sqrt, |x| pow(x, 2.0), |x| fmod(x, 2.0)];
    for f in unary.iter() {
        assert!(f(NAN).is_nan());
    }

    assert!(pow(2.0, NAN).is_nan());
    assert!(fmod(2.0, NAN).is_nan());

    // infinities
    assert_eq!(exp(INF_NEG), 0.0);
    assert_eq!(log(INF_POS), INF_POS);
    assert_eq!(atan(INF_NEG), -FRAC_PI_2);
    assert_eq!(sqrt(INF_POS), INF_POS);
    assert!(sin(INF_POS).is_nan());
    assert!(cos(INF_NEG).is_nan());
    assert!(tan(INF_POS).is_nan());
    assert!(asin(INF_POS).is_nan());
    assert!(acos(INF_NEG).is_nan());
}
