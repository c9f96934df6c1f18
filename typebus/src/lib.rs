//! # typebus — type-routed publish/subscribe
//!
//! An in-process dispatcher that routes published messages to the single
//! handler registered for their runtime shape. Registration validates the
//! handler contract — one parameter, accepting exactly the bound shape, with
//! an error-like result — and dispatch looks the handler up by the message's
//! own shape.
//!
//! ## Quick Start (typed path - recommended)
//!
//! The contract is proven by the compiler; registration cannot fail:
//!
//! ```rust,ignore
//! use typebus::Dispatcher;
//!
//! let mut bus = Dispatcher::new();
//! bus.subscribe(|order: OrderPlaced| -> Result<(), BillingError> {
//!     bill(order)
//! });
//! bus.publish(OrderPlaced { id: 7 })?;
//! ```
//!
//! ## Dynamic path
//!
//! Callables whose types are only known at runtime carry a [`Signature`]
//! descriptor that is checked at registration time:
//!
//! ```rust,ignore
//! use typebus::{Dispatcher, DynHandler, Shape};
//!
//! bus.subscribe_dyn(Shape::of::<OrderPlaced>(), DynHandler::new(handle_order))?;
//! ```
//!
//! ## Semantics
//!
//! - At most one handler per shape; re-registration overwrites silently.
//! - `publish` for an unbound shape returns [`DispatchError::Unhandled`]
//!   without invoking anything.
//! - A failure reported by a handler is forwarded verbatim as the source of
//!   [`DispatchError::Handler`].
//! - Everything is synchronous; handlers run to completion on the caller's
//!   thread. [`SharedDispatcher`] adds registry locking for concurrent use.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
pub mod dynamic;
mod entry;
mod shared;

// Re-exports
pub use dispatcher::Dispatcher;
pub use dynamic::DynHandler;
pub use shared::SharedDispatcher;

pub use typebus_core::{
    AnyMessage, BoxError, BusError, ContractError, DispatchError, Handler, Message, ReturnKind,
    Shape, Signature,
};
