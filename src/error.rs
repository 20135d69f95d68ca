//! Errors raised when dispatching a call through the registry

use thiserror::Error;

/// Failure to bind or dispatch a registry call.
///
/// Numeric evaluation itself never fails; out-of-domain inputs degrade to
/// NaN or infinity like plain float arithmetic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// No function is registered under this id
    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    /// An argument was present but of the wrong kind
    #[error("{function}: parameter `{parameter}` expects {expected}")]
    ArgumentType {
        /// Id of the function being called
        function: &'static str,
        /// Parameter name
        parameter: &'static str,
        /// Human-readable description of the accepted kind
        expected: &'static str,
    },
}

/// Result alias for registry calls
pub type Result<T> = std::result::Result<T, OperatorError>;
