#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
//! Library entry for the shared parametric operators.
//!
//! Pure numeric functions meant to be called by name from an expression
//! engine running on both server and client: easing curves for animation
//! timing, round-trip remappings of `t`, a rebased power operator and a
//! sunflower point spread for procedural layout.
//!
//! # Modules
//! - [`easing`]: Easing curves plus the `reciprocal` / `dual` combinators
//! - [`roundtrip`]: Ping-pong remaps of `t`, optionally eased
//! - [`spread`]: Sunflower (golden-angle) point spread
//! - [`registry`]: Immutable id → function table
//! - [`verifier`]: Endpoint and continuity checks
//! - [`plot`]: Visualization (optional in binaries)

/// Easing curves and their derivation helpers
pub mod easing;

/// Round-trip compositions of `t`
pub mod roundtrip;

/// The `^°` rebased power operator
pub mod rebased;

/// Golden-angle point spreads
pub mod spread;

/// Name-based dispatch table
pub mod registry;

/// Errors raised by registry dispatch
pub mod error;

/// Verification tools for curve endpoints and continuity
pub mod verifier;

/// Visualization utilities for generating charts
pub mod plot;

pub use error::OperatorError;
pub use registry::{Arg, Args, NamedFunction, Value};
pub use spread::{OrderBy, Point, SpreadParams};
