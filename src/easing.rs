//! Easing curves mapping normalized progress `t` to a normalized output.
//!
//! Inputs are never clamped: values outside `[0, 1]` go through the same
//! formula, which is what makes overshoot effects possible. Only the elastic
//! and exponential families pin their endpoints.

use std::f64::consts::PI;

/// Back overshoot amount
pub const BACK_C1: f64 = 1.70158;
/// In-out back overshoot amount
pub const BACK_C2: f64 = BACK_C1 * 1.525;
/// Cubic coefficient of the back curve
pub const BACK_C3: f64 = BACK_C1 + 1.0;
/// Elastic period for the in/out variants
pub const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
/// Elastic period for the in-out variant
pub const ELASTIC_C5: f64 = (2.0 * PI) / 4.5;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Breakpoints of [`out_bounce`] where one parabola hands over to the next
pub const BOUNCE_BREAKPOINTS: [f64; 3] = [1.0 / BOUNCE_D1, 2.0 / BOUNCE_D1, 2.5 / BOUNCE_D1];

/// Mirrors an "out" curve into its "in" counterpart: `1 - f(1 - t)`
#[inline]
pub fn reciprocal(t: f64, f: impl Fn(f64) -> f64) -> f64 { 1.0 - f(1.0 - t) }

/// Compresses an "out" curve into both halves of the domain, giving an "in-out" curve
#[inline]
pub fn dual(t: f64, f: impl Fn(f64) -> f64) -> f64 {
    if t < 0.5 { (1.0 - f(1.0 - 2.0 * t)) / 2.0 }
    else { (1.0 + f(2.0 * t - 1.0)) / 2.0 }
}

/// Power-of-N in-out: `2^(N-1) t^N` on the first half, mirrored complement on the second
#[inline]
fn in_out_pow(t: f64, n: i32) -> f64 {
    if t < 0.5 { 2f64.powi(n - 1) * t.powi(n) }
    else { 1.0 - (2.0 - 2.0 * t).powi(n) / 2.0 }
}

/// Identity curve
pub fn linear(t: f64) -> f64 { t }

/// `1 - t`, used to play any parametric curve backwards
pub fn invert(t: f64) -> f64 { 1.0 - t }

/// Half a cosine period, for use as the `t` transform of a lerp
pub fn cos_t(t: f64) -> f64 { 0.5 - 0.5 * (t * PI).cos() }

/// Sine in
pub fn in_sine(t: f64) -> f64 { 1.0 - (t * PI / 2.0).cos() }
/// Sine out
pub fn out_sine(t: f64) -> f64 { (t * PI / 2.0).sin() }
/// Sine in-out
pub fn in_out_sine(t: f64) -> f64 { -((PI * t).cos() - 1.0) / 2.0 }

/// Quadratic in
pub fn in_quad(t: f64) -> f64 { t * t }
/// Quadratic out
pub fn out_quad(t: f64) -> f64 { 1.0 - (1.0 - t) * (1.0 - t) }
/// Quadratic in-out
pub fn in_out_quad(t: f64) -> f64 { in_out_pow(t, 2) }

/// Cubic in
pub fn in_cubic(t: f64) -> f64 { t.powi(3) }
/// Cubic out
pub fn out_cubic(t: f64) -> f64 { 1.0 - (1.0 - t).powi(3) }
/// Cubic in-out
pub fn in_out_cubic(t: f64) -> f64 { in_out_pow(t, 3) }

/// Quartic in
pub fn in_quart(t: f64) -> f64 { t.powi(4) }
/// Quartic out
pub fn out_quart(t: f64) -> f64 { 1.0 - (1.0 - t).powi(4) }
/// Quartic in-out
pub fn in_out_quart(t: f64) -> f64 { in_out_pow(t, 4) }

/// Quintic in
pub fn in_quint(t: f64) -> f64 { t.powi(5) }
/// Quintic out
pub fn out_quint(t: f64) -> f64 { 1.0 - (1.0 - t).powi(5) }
/// Quintic in-out
pub fn in_out_quint(t: f64) -> f64 { in_out_pow(t, 5) }

/// Exponential in, pinned to 0 at `t <= 0`
pub fn in_expo(t: f64) -> f64 {
    if t <= 0.0 { return 0.0; }
    if t >= 1.0 { return 1.0; }
    2f64.powf(10.0 * t - 10.0)
}

/// Exponential out, pinned to 1 at `t >= 1`
pub fn out_expo(t: f64) -> f64 {
    if t <= 0.0 { return 0.0; }
    if t >= 1.0 { return 1.0; }
    1.0 - 2f64.powf(-10.0 * t)
}

/// Exponential in-out
pub fn in_out_expo(t: f64) -> f64 {
    if t <= 0.0 { return 0.0; }
    if t >= 1.0 { return 1.0; }
    if t < 0.5 { 2f64.powf(20.0 * t - 10.0) / 2.0 }
    else { (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0 }
}

/// Circular in
pub fn in_circ(t: f64) -> f64 { 1.0 - (1.0 - t * t).sqrt() }
/// Circular out
pub fn out_circ(t: f64) -> f64 { (1.0 - (t - 1.0).powi(2)).sqrt() }
/// Circular in-out
pub fn in_out_circ(t: f64) -> f64 {
    if t < 0.5 { (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0 }
    else { ((1.0 - (2.0 - 2.0 * t).powi(2)).sqrt() + 1.0) / 2.0 }
}

/// Pulls back below 0 before heading to 1
pub fn in_back(t: f64) -> f64 { BACK_C3 * t.powi(3) - BACK_C1 * t * t }
/// Overshoots past 1 before settling
pub fn out_back(t: f64) -> f64 { 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2) }
/// Back in-out
pub fn in_out_back(t: f64) -> f64 {
    if t < 0.5 { (2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2) / 2.0 }
    else { ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (2.0 * t - 2.0) + BACK_C2) + 2.0) / 2.0 }
}

/// Damped oscillation growing towards 1.
///
/// Endpoints are returned exactly: the sinusoid would otherwise leave a
/// residue of a few ulps at `t = 0` and `t = 1`.
pub fn in_elastic(t: f64) -> f64 {
    if t <= 0.0 { return 0.0; }
    if t >= 1.0 { return 1.0; }
    -(2f64.powf(10.0 * t - 10.0)) * ((10.0 * t - 10.75) * ELASTIC_C4).sin()
}

/// Damped oscillation settling on 1
pub fn out_elastic(t: f64) -> f64 {
    if t <= 0.0 { return 0.0; }
    if t >= 1.0 { return 1.0; }
    2f64.powf(-10.0 * t) * ((10.0 * t - 0.75) * ELASTIC_C4).sin() + 1.0
}

/// Elastic in-out
pub fn in_out_elastic(t: f64) -> f64 {
    if t <= 0.0 { return 0.0; }
    if t >= 1.0 { return 1.0; }
    let s = ((20.0 * t - 11.125) * ELASTIC_C5).sin();
    if t < 0.5 { -(2f64.powf(20.0 * t - 10.0) * s) / 2.0 }
    else { 2f64.powf(-20.0 * t + 10.0) * s / 2.0 + 1.0 }
}

/// Four parabolic hops of decreasing height, landing on 1
pub fn out_bounce(t: f64) -> f64 {
    let [b1, b2, b3] = BOUNCE_BREAKPOINTS;
    if t < b1 {
        BOUNCE_N1 * t * t
    } else if t < b2 {
        let u = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * u * u + 0.75
    } else if t < b3 {
        let u = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * u * u + 0.984375
    }
}

/// Bounce in
pub fn in_bounce(t: f64) -> f64 { reciprocal(t, out_bounce) }
/// Bounce in-out
pub fn in_out_bounce(t: f64) -> f64 { dual(t, out_bounce) }
