//! Sunflower (phyllotaxis) point spreads around an offset origin.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

/// Golden ratio φ = (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Angular step between consecutive points: 2π(1 - (φ - 1)), about 137.5°
pub const GOLDEN_ANGLE: f64 = TAU * (1.0 - (PHI - 1.0));

/// Positional order of the spread parameters when they are not named
pub const SPREAD_PARAMETERS: [&str; 6] = ["n", "distance", "x-offset", "y-offset", "order-by", "farthest-angle-deg"];

/// A generated 2D point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Post-processing applied to the generated points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    /// Generation order, index 0 first
    #[default]
    None,
    /// Descending distance from the last generated point
    DistanceFromFarthest,
}

impl OrderBy {
    /// Parses the wire name. Unknown names yield `None` rather than an ordering.
    pub fn from_name(name: &str) -> Option<OrderBy> {
        match name {
            "none" | "" => Some(OrderBy::None),
            "distance-from-farthest" => Some(OrderBy::DistanceFromFarthest),
            _ => None,
        }
    }
}

/// Named parameters of a sunflower spread
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SpreadParams {
    /// Requested point count; truncated towards zero, negatives and non-finite values give nothing
    pub n: f64,
    /// Radius unit: point i sits at `distance * sqrt(i)`
    pub distance: f64,
    /// Horizontal origin
    pub x_offset: f64,
    /// Vertical origin
    pub y_offset: f64,
    /// Output ordering; `null` reads as [`OrderBy::None`]
    #[serde(deserialize_with = "nullable_order_by")]
    pub order_by: OrderBy,
    /// Angle (degrees) the last point must land on; random rotation when absent
    pub farthest_angle_deg: Option<f64>,
}

impl Default for SpreadParams {
    fn default() -> Self {
        SpreadParams {
            n: 0.0,
            distance: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
            order_by: OrderBy::None,
            farthest_angle_deg: None,
        }
    }
}

impl SpreadParams {
    /// Number of points actually generated: `max(0, floor(n))`
    pub fn count(&self) -> usize {
        if !self.n.is_finite() || self.n < 1.0 { 0 } else { self.n.floor() as usize }
    }

    fn base_angle<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self.farthest_angle_deg {
            Some(deg) => deg * PI / 180.0 - (self.count() as f64 - 1.0) * GOLDEN_ANGLE,
            None => rng.random::<f64>() * TAU,
        }
    }
}

fn nullable_order_by<'de, D: Deserializer<'de>>(d: D) -> Result<OrderBy, D::Error> {
    Ok(Option::<OrderBy>::deserialize(d)?.unwrap_or_default())
}

/// Sunflower spread using the thread-local RNG for the free rotation
pub fn sunflower_spread(params: &SpreadParams) -> Vec<Point> {
    sunflower_spread_with_rng(params, &mut rand::rng())
}

/// Sunflower spread drawing the free rotation (if any) from `rng`
pub fn sunflower_spread_with_rng<R: Rng + ?Sized>(params: &SpreadParams, rng: &mut R) -> Vec<Point> {
    let n = params.count();
    if n == 0 { return Vec::new(); }

    let base_angle = params.base_angle(rng);
    let mut points: Vec<Point> = (0..n)
        .map(|i| {
            let angle = base_angle + i as f64 * GOLDEN_ANGLE;
            // first point stays off the origin
            let r = if i == 0 { params.distance } else { params.distance * (i as f64).sqrt() };
            Point { x: params.x_offset + r * angle.cos(), y: params.y_offset + r * angle.sin() }
        })
        .collect();

    if params.order_by == OrderBy::DistanceFromFarthest {
        order_by_distance_from_farthest(&mut points);
    }
    points
}

/// Stable sort by descending distance to the last point; the last point has delta 0.
///
/// NaN deltas compare equal to each other and above every number, so the
/// comparator stays a total order. Ties keep generation order.
pub fn order_by_distance_from_farthest(points: &mut [Point]) {
    let Some(&last) = points.last() else { return };
    let len = points.len();
    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (if i + 1 == len { 0.0 } else { p.distance_to(&last) }, *p))
        .collect();
    keyed.sort_by(|a, b| descending_delta(a.0, b.0));
    for (slot, (_, p)) in points.iter_mut().zip(keyed) {
        *slot = p;
    }
}

fn descending_delta(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
