//! Endpoint and continuity checks over the registered easing curves

use crate::easing::BOUNCE_BREAKPOINTS;
use crate::registry::{self, NamedFunction};
use anyhow::{anyhow, Result};

/// Largest tolerated gap across a segment boundary
pub const CONTINUITY_TOLERANCE: f64 = 1e-9;
/// Largest tolerated deviation of `f(0)` / `f(1)` from their expected values
pub const ENDPOINT_TOLERANCE: f64 = 1e-9;
/// Half-widths of the probes straddling each boundary
const WIDE_PROBE: f64 = 1e-10;
const NARROW_PROBE: f64 = 1e-14;

/// Verification report for one easing curve
#[derive(Debug)]
pub struct Report {
    /// Registry id of the curve
    pub id: &'static str,
    /// `f(0)`
    pub start: f64,
    /// `f(1)`
    pub end: f64,
    /// Whether both endpoints match what the curve family promises
    pub endpoints_ok: bool,
    /// Largest `|f(b + h) - f(b - h)|` over the probed boundaries, narrow probe
    pub max_gap: f64,
    /// Boundary where `max_gap` was measured
    pub worst_boundary: f64,
    /// Whether every boundary gap is within tolerance or closes as the probe narrows
    pub continuous: bool,
}

impl Report {
    /// Both checks passed
    pub fn ok(&self) -> bool { self.endpoints_ok && self.continuous }
}

/// Every place a piecewise curve of this crate can switch segments:
/// the midpoint, the bounce breakpoints, their mirrors and their halved copies.
pub fn boundaries() -> Vec<f64> {
    let mut out = vec![0.5];
    for b in BOUNCE_BREAKPOINTS {
        let mirrored = 1.0 - b;
        out.extend([b, mirrored, (1.0 - b) / 2.0, (1.0 + b) / 2.0]);
    }
    out
}

/// Expected `(f(0), f(1))` for a unary curve
pub fn expected_endpoints(id: &str) -> (f64, f64) {
    match id {
        "ease-invert" | "parametric-invert" => (1.0, 0.0),
        _ => (0.0, 1.0),
    }
}

/// Checks `f(0)`, `f(1)` and continuity at every boundary for one unary entry
pub fn verify_easing(entry: &NamedFunction) -> Result<Report> {
    let f = entry
        .unary()
        .ok_or_else(|| anyhow!("{} is not a unary curve", entry.id))?;

    let (want_start, want_end) = expected_endpoints(entry.id);
    let start = f(0.0);
    let end = f(1.0);
    let endpoints_ok = (start - want_start).abs() <= ENDPOINT_TOLERANCE
        && (end - want_end).abs() <= ENDPOINT_TOLERANCE;

    let gap = |b: f64, h: f64| (f(b + h) - f(b - h)).abs();
    let mut max_gap = 0.0_f64;
    let mut worst_boundary = 0.5;
    let mut continuous = true;
    for b in boundaries() {
        let narrow = gap(b, NARROW_PROBE);
        if narrow.is_nan() { return Err(anyhow!("{}: NaN around t={}", entry.id, b)); }
        // a jump keeps its size as the probe narrows; a vertical tangent
        // (circular in-out at 0.5) closes like sqrt(h)
        if narrow > CONTINUITY_TOLERANCE && narrow * 10.0 > gap(b, WIDE_PROBE) {
            continuous = false;
        }
        if narrow > max_gap {
            max_gap = narrow;
            worst_boundary = b;
        }
    }

    Ok(Report {
        id: entry.id,
        start,
        end,
        endpoints_ok,
        max_gap,
        worst_boundary,
        continuous,
    })
}

/// Runs [`verify_easing`] over every unary entry of the registry
pub fn verify_all() -> Result<Vec<Report>> {
    registry::table()
        .iter()
        .filter(|entry| entry.unary().is_some())
        .map(verify_easing)
        .collect()
}
