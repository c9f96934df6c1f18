//! Error types for typebus.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`BusError`] - Top-level error type for all bus operations
//! - [`ContractError`] - Registration-time contract violations
//! - [`DispatchError`] - Errors during publish
//!
//! No error here is fatal to the dispatcher: a failed registration or a
//! failed publish leaves it fully usable for subsequent calls.

use crate::message::Shape;
use crate::signature::Signature;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all bus operations.
#[derive(Error, Debug)]
pub enum BusError {
    /// A registration was rejected by the contract check.
    #[error("contract error: {0}")]
    Contract(#[from] ContractError),

    /// A publish could not be completed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// A handler failed the registration-time contract check.
///
/// The contract: a unary callable whose single parameter accepts exactly the
/// shape being bound, producing an error-like result. The registry is
/// guaranteed unmodified whenever this error is returned.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The callable does not take exactly one parameter.
    #[error("handler `{signature}` must take exactly one parameter to handle `{shape}`")]
    Arity {
        /// The offending handler's declared signature.
        signature: Signature,
        /// The shape the handler was attempted to bind to.
        shape: Shape,
    },

    /// The callable's parameter is of a different shape.
    #[error("handler `{signature}` does not accept messages of shape `{shape}`")]
    ParameterMismatch {
        /// The offending handler's declared signature.
        signature: Signature,
        /// The shape the handler was attempted to bind to.
        shape: Shape,
    },

    /// The callable's result is missing or not error-like.
    #[error("handler `{signature}` must produce an error-like result to handle `{shape}`")]
    ResultMismatch {
        /// The offending handler's declared signature.
        signature: Signature,
        /// The shape the handler was attempted to bind to.
        shape: Shape,
    },
}

/// Errors that can occur during publish.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered for the message's shape.
    #[error("no handler registered for message shape `{0}`")]
    Unhandled(Shape),

    /// The matched handler ran and reported a failure. The original failure
    /// information is carried as the error source, untransformed.
    #[error("handler for `{shape}` reported a failure")]
    Handler {
        /// The shape whose handler failed.
        shape: Shape,
        /// The failure reported by the handler, verbatim.
        #[source]
        source: BoxError,
    },
}
