//! Dynamic registration for callables whose types are only known at runtime.
//!
//! The typed [`Dispatcher::subscribe`] path proves the handler contract at
//! compile time. When handler wiring is determined at runtime instead
//! (plugins, adapters over foreign callables, config-driven setups), the
//! callable arrives with a [`Signature`] descriptor that the dispatcher
//! compares against the shape being bound, rejecting any deviation before the
//! registry is touched.
//!
//! [`Dispatcher::subscribe`]: crate::Dispatcher::subscribe

use crate::entry::{ErasedInvoke, HandlerEntry, Invocation};
use typebus_core::{Message, ReturnKind, Shape, Signature};

/// A type-erased callable together with its declared signature.
///
/// Only [`DynHandler::new`] produces a callable satisfying the contract; the
/// remaining constructors describe the deviant signatures foreign callables
/// may have, so registration can reject them with a precise
/// [`ContractError`].
///
/// [`ContractError`]: typebus_core::ContractError
pub struct DynHandler {
    signature: Signature,
    invoke: ErasedInvoke,
}

impl DynHandler {
    /// Wrap a unary callable with an error-like result.
    pub fn new<M, E, F>(handler: F) -> Self
    where
        M: Message,
        E: std::error::Error + Send + Sync + 'static,
        F: Fn(M) -> Result<(), E> + Send + Sync + 'static,
    {
        Self {
            signature: Signature::unary::<M>(),
            invoke: Box::new(move |message| match message.downcast::<M>() {
                Ok(message) => match handler(*message) {
                    Ok(()) => Invocation::Handled,
                    Err(err) => Invocation::Failed(Box::new(err)),
                },
                Err(message) => Invocation::Refused(message),
            }),
        }
    }

    /// Describe a callable that takes no parameters.
    ///
    /// Always rejected at registration, so the callable itself is never
    /// invoked through the bus.
    pub fn nullary<E, F>(_handler: F) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        F: Fn() -> Result<(), E> + Send + Sync + 'static,
    {
        Self {
            signature: Signature::new(Vec::new(), ReturnKind::ErrorLike),
            invoke: Box::new(Invocation::Refused),
        }
    }

    /// Describe a callable that takes two parameters.
    ///
    /// Always rejected at registration, so the callable itself is never
    /// invoked through the bus.
    pub fn binary<A, B, E, F>(_handler: F) -> Self
    where
        A: Message,
        B: Message,
        E: std::error::Error + Send + Sync + 'static,
        F: Fn(A, B) -> Result<(), E> + Send + Sync + 'static,
    {
        Self {
            signature: Signature::new(
                vec![Shape::of::<A>(), Shape::of::<B>()],
                ReturnKind::ErrorLike,
            ),
            invoke: Box::new(Invocation::Refused),
        }
    }

    /// Describe a unary callable that produces no result.
    ///
    /// Always rejected at registration, so the callable itself is never
    /// invoked through the bus.
    pub fn without_result<M, F>(_handler: F) -> Self
    where
        M: Message,
        F: Fn(M) + Send + Sync + 'static,
    {
        Self {
            signature: Signature::new(vec![Shape::of::<M>()], ReturnKind::Nothing),
            invoke: Box::new(Invocation::Refused),
        }
    }

    /// Describe a unary callable whose result is a plain value of shape `R`
    /// rather than error-like.
    ///
    /// Always rejected at registration, so the callable itself is never
    /// invoked through the bus.
    pub fn returning<M, R, F>(_handler: F) -> Self
    where
        M: Message,
        R: Message,
        F: Fn(M) -> R + Send + Sync + 'static,
    {
        Self {
            signature: Signature::new(
                vec![Shape::of::<M>()],
                ReturnKind::Value(Shape::of::<R>()),
            ),
            invoke: Box::new(Invocation::Refused),
        }
    }

    /// The declared signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Convert into a registry entry for the shape it was validated against.
    pub(crate) fn into_entry(self, accepts: Shape) -> HandlerEntry {
        HandlerEntry::erased(accepts, self.signature, self.invoke)
    }
}
