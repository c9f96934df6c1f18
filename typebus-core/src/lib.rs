//! # typebus-core
//!
//! Core vocabulary for the typebus message dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! extensions and adapters that don't need the full `typebus` dispatcher.
//!
//! # Concepts
//!
//! - [`Message`] — marker trait for message kinds; plain data carriers the
//!   bus never inspects beyond their runtime identity.
//! - [`Shape`] — the runtime-distinguishable kind of a message value, used as
//!   the dispatch key. Same Rust type, same shape.
//! - [`Handler`] — the unary-input, error-like-output contract, proven at
//!   compile time for statically typed handlers.
//! - [`Signature`] — declared parameter shapes and result kind for callables
//!   whose types are only known at runtime; checked at registration time.
//!
//! # Error Types
//!
//! - [`BusError`] - Top-level error type
//! - [`ContractError`] - Registration-time contract violations
//! - [`DispatchError`] - Publish-time errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod message;
mod signature;

// Re-exports
pub use error::{BoxError, BusError, ContractError, DispatchError};
pub use handler::Handler;
pub use message::{AnyMessage, Message, Shape};
pub use signature::{ReturnKind, Signature};
