//! The rebased power operator, `base ^° exponent [rebase]`.

/// Rebase used when the operator is called with two operands
pub const DEFAULT_REBASE: f64 = 10.0;

/// `rebase * (base / rebase)^exponent`.
///
/// Scales a power law so that `rebase` is its fixed point: `rebase ^° e == rebase`
/// for any `e`. A negative ratio with a fractional exponent yields NaN.
pub fn rebased_power(base: f64, exponent: f64, rebase: f64) -> f64 {
    rebase * (base / rebase).powf(exponent)
}
