//! Round-trip compositions: remap `t` into an up ramp, an optional plateau
//! and a down ramp, optionally shaping each ramp with a named easing.

use crate::easing::reciprocal;
use crate::registry;

/// Default pivot of [`round_trip`]
pub const DEFAULT_PIVOT: f64 = 0.5;
/// Default length of the up ramp of [`round_trip_with_pause`]
pub const DEFAULT_RAMP_UP: f64 = 1.0 / 3.0;
/// Default length of the down ramp of [`round_trip_with_pause`]
pub const DEFAULT_RAMP_DOWN: f64 = 1.0 / 3.0;

/// Ping-pong: `[0, p1]` goes 0 → 1, `[p1, 1]` comes back 1 → 0
pub fn round_trip(t: f64, p1: f64) -> f64 {
    if t < p1 { t / p1 } else { (1.0 - t) / (1.0 - p1) }
}

/// [`round_trip`] with each half shaped by an easing looked up as `"ease-" + name`.
///
/// The down half uses the reciprocal of its easing so that e.g. `out-quad`
/// decelerates into 0 the same way it decelerates into 1 on the way up.
/// Names that do not resolve leave the half linear.
pub fn round_trip_switch(t: f64, p1: f64, up: Option<&str>, down: Option<&str>) -> f64 {
    if t < p1 { ease_up(t / p1, up) } else { ease_down((1.0 - t) / (1.0 - p1), down) }
}

/// Up ramp on `[0, p1]`, plateau at exactly 1, down ramp on `[1 - p3, 1]`
pub fn round_trip_with_pause(t: f64, p1: f64, p3: f64) -> f64 {
    if t < p1 { t / p1 }
    else if t > 1.0 - p3 { (1.0 - t) / p3 }
    else { 1.0 }
}

/// [`round_trip_with_pause`] with eased ramps; the plateau is left untouched
pub fn round_trip_with_pause_switch(t: f64, p1: f64, p3: f64, up: Option<&str>, down: Option<&str>) -> f64 {
    if t < p1 { ease_up(t / p1, up) }
    else if t > 1.0 - p3 { ease_down((1.0 - t) / p3, down) }
    else { 1.0 }
}

fn ease_up(t: f64, name: Option<&str>) -> f64 {
    match name.and_then(registry::easing) {
        Some(f) => f(t),
        None => t,
    }
}

fn ease_down(t: f64, name: Option<&str>) -> f64 {
    match name.and_then(registry::easing) {
        Some(f) => reciprocal(t, f),
        None => t,
    }
}
