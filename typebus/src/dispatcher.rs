//! The dispatcher: a registry of per-shape handlers plus publish.

use crate::dynamic::DynHandler;
use crate::entry::{HandlerEntry, Invocation};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use typebus_core::{AnyMessage, ContractError, DispatchError, Handler, Message, Shape, Signature};

/// Routes published messages to the single handler bound to their shape.
///
/// Each message shape has at most one handler. Registering a second handler
/// for a shape that is already bound replaces the previous binding without
/// error; no operation removes a binding. The registry is owned exclusively
/// by the dispatcher for its whole lifetime.
///
/// All calls are synchronous and run to completion. A handler that blocks
/// forever blocks its publisher forever; the dispatcher places no timeout or
/// cancellation around the call. For concurrent callers, see
/// [`SharedDispatcher`].
///
/// # Example
///
/// ```rust,ignore
/// let mut bus = Dispatcher::new();
/// bus.subscribe(|order: OrderPlaced| -> Result<(), BillingError> {
///     bill(order)
/// });
/// bus.publish(OrderPlaced { id: 7 })?;
/// ```
///
/// [`SharedDispatcher`]: crate::SharedDispatcher
#[derive(Default)]
pub struct Dispatcher {
    registry: HashMap<Shape, Arc<HandlerEntry>>,
}

impl Dispatcher {
    /// Create a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` as the sole handler for messages of shape `M`.
    ///
    /// The unary-parameter, error-like-result contract is proven by the
    /// [`Handler`] trait at compile time, so this registration cannot fail.
    /// A later call for the same shape replaces the existing binding.
    pub fn subscribe<M, H>(&mut self, handler: H)
    where
        M: Message,
        H: Handler<M>,
    {
        let shape = Shape::of::<M>();
        #[cfg(feature = "tracing")]
        tracing::debug!(%shape, "subscribe");
        self.registry
            .insert(shape, Arc::new(HandlerEntry::typed(handler)));
    }

    /// Bind a runtime-described callable as the sole handler for `shape`.
    ///
    /// The callable's declared [`Signature`] is checked before any mutation:
    /// exactly one parameter, accepting exactly `shape`, producing an
    /// error-like result. On rejection the registry is left unchanged and the
    /// returned [`ContractError`] names the offending signature and the
    /// shape. On success the entry is stored, replacing any prior binding.
    pub fn subscribe_dyn(
        &mut self,
        shape: Shape,
        handler: DynHandler,
    ) -> Result<(), ContractError> {
        handler.signature().check(shape)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(%shape, signature = %handler.signature(), "subscribe_dyn");
        self.registry
            .insert(shape, Arc::new(handler.into_entry(shape)));
        Ok(())
    }

    /// Publish a message, invoking the handler bound to its shape.
    ///
    /// Returns [`DispatchError::Unhandled`] when no handler is bound, in
    /// which case nothing is invoked. A failure reported by the handler comes
    /// back as [`DispatchError::Handler`] with the original failure as its
    /// source. Either way the dispatcher remains usable.
    pub fn publish<M: Message>(&self, message: M) -> Result<(), DispatchError> {
        self.dispatch(Shape::of::<M>(), Box::new(message))
    }

    /// Publish a message whose concrete type has been erased.
    ///
    /// The message's shape is recovered through [`AnyMessage`]; dispatch then
    /// proceeds exactly as [`publish`](Self::publish).
    pub fn publish_any(&self, message: Box<dyn AnyMessage>) -> Result<(), DispatchError> {
        let shape = message.shape();
        self.dispatch(shape, message.into_any())
    }

    /// Whether a handler is currently bound for `shape`.
    pub fn is_bound(&self, shape: Shape) -> bool {
        self.registry.contains_key(&shape)
    }

    /// The signature of the handler currently bound for `shape`, if any.
    pub fn binding(&self, shape: Shape) -> Option<&Signature> {
        self.registry.get(&shape).map(|entry| entry.signature())
    }

    /// Shapes with a current binding, in no particular order.
    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.registry.keys().copied()
    }

    pub(crate) fn entry(&self, shape: Shape) -> Option<Arc<HandlerEntry>> {
        self.registry.get(&shape).cloned()
    }

    fn dispatch(&self, shape: Shape, message: Box<dyn Any + Send>) -> Result<(), DispatchError> {
        let Some(entry) = self.registry.get(&shape) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(%shape, "publish: unhandled message shape");
            return Err(DispatchError::Unhandled(shape));
        };
        invoke_entry(entry, shape, message)
    }
}

/// Run an entry against an erased message and fold the outcome into the
/// publish result. Shared with [`SharedDispatcher`], which invokes after
/// releasing its registry lock.
///
/// [`SharedDispatcher`]: crate::SharedDispatcher
pub(crate) fn invoke_entry(
    entry: &HandlerEntry,
    shape: Shape,
    message: Box<dyn Any + Send>,
) -> Result<(), DispatchError> {
    debug_assert_eq!(entry.accepts(), shape);
    #[cfg(feature = "tracing")]
    tracing::trace!(%shape, "publish");
    match entry.invoke(message) {
        Invocation::Handled => Ok(()),
        Invocation::Failed(source) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%shape, error = %source, "publish: handler failure");
            Err(DispatchError::Handler { shape, source })
        }
        // The entry does not accept this shape. Unreachable through the
        // public API, where keys and adapters are built from the same type
        // parameter; folded into `Unhandled` rather than trusted blindly.
        Invocation::Refused(_) => Err(DispatchError::Unhandled(shape)),
    }
}
