//! Immutable name → function table consumed by the expression evaluator.
//!
//! Every entry carries its own id, equal to the key it is looked up by. The
//! table is a `static` literal; the hash index over it is built on first use
//! and never modified afterwards, so lookups need no synchronisation.

use crate::easing;
use crate::error::{OperatorError, Result};
use crate::rebased::{rebased_power, DEFAULT_REBASE};
use crate::roundtrip::{self, DEFAULT_PIVOT, DEFAULT_RAMP_DOWN, DEFAULT_RAMP_UP};
use crate::spread::{self, OrderBy, Point, SpreadParams, SPREAD_PARAMETERS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

/// A single call argument as handed over by the evaluator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    /// Numeric literal or evaluated expression
    Number(f64),
    /// Identifier-like argument (easing names, `order-by` values)
    Text(String),
}

impl Arg {
    /// Reads a literal token: anything that parses as a float is a number
    pub fn parse(token: &str) -> Arg {
        let token = token.trim();
        match token.parse::<f64>() {
            Ok(v) => Arg::Number(v),
            Err(_) => Arg::Text(token.to_string()),
        }
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self { Arg::Number(v) }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self { Arg::Text(s.to_string()) }
}

/// Positional and named arguments of one call.
///
/// A named argument takes precedence over the positional slot mapped to the
/// same parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    /// Arguments in call order
    pub positional: Vec<Arg>,
    /// Arguments passed as `name: value`
    pub named: BTreeMap<String, Arg>,
}

impl Args {
    /// Positional-only arguments
    pub fn new<I, A>(positional: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        Args { positional: positional.into_iter().map(Into::into).collect(), named: BTreeMap::new() }
    }

    /// Adds a named argument
    pub fn with(mut self, name: &str, value: impl Into<Arg>) -> Self {
        self.named.insert(name.to_string(), value.into());
        self
    }

    fn get(&self, index: usize, name: &str) -> Option<&Arg> {
        self.named.get(name).or_else(|| self.positional.get(index))
    }
}

/// Arguments bound to the function they are passed to, for error reporting
pub struct Binder<'a> {
    function: &'static str,
    args: &'a Args,
}

impl Binder<'_> {
    /// Numeric parameter; absent parameters take `default`
    pub fn number(&self, index: usize, name: &'static str, default: f64) -> Result<f64> {
        match self.args.get(index, name) {
            None => Ok(default),
            Some(Arg::Number(v)) => Ok(*v),
            Some(Arg::Text(_)) => Err(self.mismatch(name, "a number")),
        }
    }

    /// Numeric parameter with no default. A missing value reads as NaN.
    pub fn required(&self, index: usize, name: &'static str) -> Result<f64> {
        self.number(index, name, f64::NAN)
    }

    /// Identifier parameter
    pub fn text(&self, index: usize, name: &'static str) -> Result<Option<&str>> {
        match self.args.get(index, name) {
            None => Ok(None),
            Some(Arg::Text(s)) => Ok(Some(s.as_str())),
            Some(Arg::Number(_)) => Err(self.mismatch(name, "a name")),
        }
    }

    fn mismatch(&self, parameter: &'static str, expected: &'static str) -> OperatorError {
        OperatorError::ArgumentType { function: self.function, parameter, expected }
    }
}

/// Result of a registry call
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Scalar result
    Number(f64),
    /// Point layout
    Points(Vec<Point>),
}

impl Value {
    /// The scalar, if this is one
    pub fn as_number(&self) -> Option<f64> {
        match self { Value::Number(v) => Some(*v), Value::Points(_) => None }
    }
    /// The points, if this is a layout
    pub fn as_points(&self) -> Option<&[Point]> {
        match self { Value::Points(p) => Some(p), Value::Number(_) => None }
    }
}

/// How a registered function is invoked
#[derive(Clone, Copy)]
pub enum Call {
    /// `t -> f(t)`
    Unary(fn(f64) -> f64),
    /// Anything with several, defaulted or named parameters
    Variadic(fn(&Binder<'_>) -> Result<Value>),
}

/// A registered function and its id
#[derive(Clone, Copy)]
pub struct NamedFunction {
    /// Registry key, never empty
    pub id: &'static str,
    /// Implementation
    pub call: Call,
}

impl NamedFunction {
    /// The plain `fn(f64) -> f64` for unary entries
    pub fn unary(&self) -> Option<fn(f64) -> f64> {
        match self.call { Call::Unary(f) => Some(f), Call::Variadic(_) => None }
    }

    /// Calls the function with evaluator arguments
    pub fn invoke(&self, args: &Args) -> Result<Value> {
        let bound = Binder { function: self.id, args };
        match self.call {
            Call::Unary(f) => Ok(Value::Number(f(bound.required(0, "t")?))),
            Call::Variadic(f) => f(&bound),
        }
    }
}

impl fmt::Debug for NamedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.call { Call::Unary(_) => "unary", Call::Variadic(_) => "variadic" };
        f.debug_struct("NamedFunction").field("id", &self.id).field("call", &kind).finish()
    }
}

macro_rules! unary {
    ($id:literal, $f:path) => {
        NamedFunction { id: $id, call: Call::Unary($f) }
    };
}

macro_rules! variadic {
    ($id:literal, $f:path) => {
        NamedFunction { id: $id, call: Call::Variadic($f) }
    };
}

static TABLE: &[NamedFunction] = &[
    variadic!("^°", call_rebased_power),
    unary!("cos-t", easing::cos_t),
    unary!("ease-linear", easing::linear),
    unary!("ease-invert", easing::invert),
    unary!("parametric-invert", easing::invert),
    unary!("ease-in-sine", easing::in_sine),
    unary!("ease-out-sine", easing::out_sine),
    unary!("ease-in-out-sine", easing::in_out_sine),
    unary!("ease-in-quad", easing::in_quad),
    unary!("ease-out-quad", easing::out_quad),
    unary!("ease-in-out-quad", easing::in_out_quad),
    unary!("ease-in-cubic", easing::in_cubic),
    unary!("ease-out-cubic", easing::out_cubic),
    unary!("ease-in-out-cubic", easing::in_out_cubic),
    unary!("ease-in-quart", easing::in_quart),
    unary!("ease-out-quart", easing::out_quart),
    unary!("ease-in-out-quart", easing::in_out_quart),
    unary!("ease-in-quint", easing::in_quint),
    unary!("ease-out-quint", easing::out_quint),
    unary!("ease-in-out-quint", easing::in_out_quint),
    unary!("ease-in-expo", easing::in_expo),
    unary!("ease-out-expo", easing::out_expo),
    unary!("ease-in-out-expo", easing::in_out_expo),
    unary!("ease-in-circ", easing::in_circ),
    unary!("ease-out-circ", easing::out_circ),
    unary!("ease-in-out-circ", easing::in_out_circ),
    unary!("ease-in-back", easing::in_back),
    unary!("ease-out-back", easing::out_back),
    unary!("ease-in-out-back", easing::in_out_back),
    unary!("ease-in-elastic", easing::in_elastic),
    unary!("ease-out-elastic", easing::out_elastic),
    unary!("ease-in-out-elastic", easing::in_out_elastic),
    unary!("ease-in-bounce", easing::in_bounce),
    unary!("ease-out-bounce", easing::out_bounce),
    unary!("ease-in-out-bounce", easing::in_out_bounce),
    variadic!("round-trip", call_round_trip),
    variadic!("round-trip-switch", call_round_trip_switch),
    variadic!("round-trip-with-pause", call_round_trip_with_pause),
    variadic!("round-trip-with-pause-switch", call_round_trip_with_pause_switch),
    variadic!("sunflower-spread", call_sunflower_spread),
];

static INDEX: LazyLock<HashMap<&'static str, &'static NamedFunction>> =
    LazyLock::new(|| TABLE.iter().map(|f| (f.id, f)).collect());

/// All registered functions, in declaration order
pub fn table() -> &'static [NamedFunction] { TABLE }

/// All registered ids, in declaration order
pub fn ids() -> impl Iterator<Item = &'static str> { TABLE.iter().map(|f| f.id) }

/// Finds a function by id
pub fn lookup(id: &str) -> Option<&'static NamedFunction> { INDEX.get(id).copied() }

/// Resolves an easing by its short name (`"out-bounce"` → `ease-out-bounce`).
///
/// Returns `None` when nothing unary is registered under `"ease-" + name`;
/// callers decide what a missing easing means.
pub fn easing(name: &str) -> Option<fn(f64) -> f64> {
    lookup(&format!("ease-{name}")).and_then(NamedFunction::unary)
}

/// Looks up `id` and calls it
pub fn call(id: &str, args: &Args) -> Result<Value> {
    lookup(id)
        .ok_or_else(|| OperatorError::UnknownFunction(id.to_string()))?
        .invoke(args)
}

fn call_rebased_power(a: &Binder<'_>) -> Result<Value> {
    let base = a.required(0, "base")?;
    let exponent = a.required(1, "exponent")?;
    let rebase = a.number(2, "rebase", DEFAULT_REBASE)?;
    Ok(Value::Number(rebased_power(base, exponent, rebase)))
}

fn call_round_trip(a: &Binder<'_>) -> Result<Value> {
    let t = a.required(0, "t")?;
    let p1 = a.number(1, "p1", DEFAULT_PIVOT)?;
    Ok(Value::Number(roundtrip::round_trip(t, p1)))
}

fn call_round_trip_switch(a: &Binder<'_>) -> Result<Value> {
    let t = a.required(0, "t")?;
    let p1 = a.number(1, "p1", DEFAULT_PIVOT)?;
    let up = a.text(2, "up")?;
    let down = a.text(3, "down")?;
    Ok(Value::Number(roundtrip::round_trip_switch(t, p1, up, down)))
}

fn call_round_trip_with_pause(a: &Binder<'_>) -> Result<Value> {
    let t = a.required(0, "t")?;
    let p1 = a.number(1, "p1", DEFAULT_RAMP_UP)?;
    let p3 = a.number(2, "p3", DEFAULT_RAMP_DOWN)?;
    Ok(Value::Number(roundtrip::round_trip_with_pause(t, p1, p3)))
}

fn call_round_trip_with_pause_switch(a: &Binder<'_>) -> Result<Value> {
    let t = a.required(0, "t")?;
    let p1 = a.number(1, "p1", DEFAULT_RAMP_UP)?;
    let p3 = a.number(2, "p3", DEFAULT_RAMP_DOWN)?;
    let up = a.text(3, "up")?;
    let down = a.text(4, "down")?;
    Ok(Value::Number(roundtrip::round_trip_with_pause_switch(t, p1, p3, up, down)))
}

fn call_sunflower_spread(a: &Binder<'_>) -> Result<Value> {
    let [n, distance, x_offset, y_offset, order_by, farthest] = SPREAD_PARAMETERS;
    let defaults = SpreadParams::default();
    // a non-numeric angle means "no anchor", like an absent one
    let farthest_angle_deg = match a.args.get(5, farthest) {
        Some(Arg::Number(deg)) => Some(*deg),
        _ => None,
    };
    let params = SpreadParams {
        n: a.number(0, n, defaults.n)?,
        distance: a.number(1, distance, defaults.distance)?,
        x_offset: a.number(2, x_offset, defaults.x_offset)?,
        y_offset: a.number(3, y_offset, defaults.y_offset)?,
        order_by: a.text(4, order_by)?.and_then(OrderBy::from_name).unwrap_or_default(),
        farthest_angle_deg,
    };
    Ok(Value::Points(spread::sunflower_spread(&params)))
}
