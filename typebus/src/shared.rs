//! Shared dispatcher handle for concurrent callers.

use crate::dispatcher::{Dispatcher, invoke_entry};
use crate::dynamic::DynHandler;
use parking_lot::RwLock;
use std::sync::Arc;
use typebus_core::{AnyMessage, ContractError, DispatchError, Handler, Message, Shape, Signature};

/// A cloneable, thread-safe handle around a [`Dispatcher`].
///
/// Registrations are serialized through a write lock, so a publish on the
/// same shape never observes a partially constructed entry. Publishes hold
/// the read lock only long enough to clone the matched entry and invoke the
/// handler after releasing it; a handler that blocks forever blocks its own
/// publisher, never the registry.
///
/// Clones share one registry.
#[derive(Clone, Default)]
pub struct SharedDispatcher {
    inner: Arc<RwLock<Dispatcher>>,
}

impl SharedDispatcher {
    /// Create a shared dispatcher with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` as the sole handler for messages of shape `M`.
    ///
    /// See [`Dispatcher::subscribe`].
    pub fn subscribe<M, H>(&self, handler: H)
    where
        M: Message,
        H: Handler<M>,
    {
        self.inner.write().subscribe(handler);
    }

    /// Bind a runtime-described callable as the sole handler for `shape`.
    ///
    /// See [`Dispatcher::subscribe_dyn`].
    pub fn subscribe_dyn(&self, shape: Shape, handler: DynHandler) -> Result<(), ContractError> {
        self.inner.write().subscribe_dyn(shape, handler)
    }

    /// Publish a message, invoking the handler bound to its shape.
    ///
    /// See [`Dispatcher::publish`].
    pub fn publish<M: Message>(&self, message: M) -> Result<(), DispatchError> {
        let shape = Shape::of::<M>();
        let Some(entry) = self.inner.read().entry(shape) else {
            return Err(DispatchError::Unhandled(shape));
        };
        invoke_entry(&entry, shape, Box::new(message))
    }

    /// Publish a message whose concrete type has been erased.
    ///
    /// See [`Dispatcher::publish_any`].
    pub fn publish_any(&self, message: Box<dyn AnyMessage>) -> Result<(), DispatchError> {
        let shape = message.shape();
        let Some(entry) = self.inner.read().entry(shape) else {
            return Err(DispatchError::Unhandled(shape));
        };
        invoke_entry(&entry, shape, message.into_any())
    }

    /// Whether a handler is currently bound for `shape`.
    pub fn is_bound(&self, shape: Shape) -> bool {
        self.inner.read().is_bound(shape)
    }

    /// The signature of the handler currently bound for `shape`, if any.
    pub fn binding(&self, shape: Shape) -> Option<Signature> {
        self.inner.read().binding(shape).cloned()
    }
}
