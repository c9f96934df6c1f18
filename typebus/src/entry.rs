//! Type-erased handler adapters.

use std::any::Any;
use typebus_core::{BoxError, Handler, Message, Shape, Signature};

/// Outcome of invoking a type-erased handler.
pub(crate) enum Invocation {
    /// The handler ran and reported no failure.
    Handled,
    /// The handler ran and reported a failure.
    Failed(BoxError),
    /// The message is not of the shape this entry accepts; ownership is
    /// returned untouched and no handler runs.
    Refused(Box<dyn Any + Send>),
}

pub(crate) type ErasedInvoke = Box<dyn Fn(Box<dyn Any + Send>) -> Invocation + Send + Sync>;

/// A registered callable together with the metadata needed to validate and
/// invoke it.
///
/// Built once at registration from a statically typed [`Handler`] (or a
/// validated dynamic descriptor). The adapter captures the shape it accepts,
/// so after registration succeeds an invocation can never fail due to a
/// shape mismatch: the worst case is [`Invocation::Refused`], which hands the
/// message back.
pub(crate) struct HandlerEntry {
    accepts: Shape,
    signature: Signature,
    invoke: ErasedInvoke,
}

impl HandlerEntry {
    /// Wrap a statically typed handler.
    pub(crate) fn typed<M, H>(handler: H) -> Self
    where
        M: Message,
        H: Handler<M>,
    {
        Self {
            accepts: Shape::of::<M>(),
            signature: Signature::unary::<M>(),
            invoke: Box::new(move |message| match message.downcast::<M>() {
                Ok(message) => match handler.call(*message) {
                    Ok(()) => Invocation::Handled,
                    Err(err) => Invocation::Failed(Box::new(err)),
                },
                Err(message) => Invocation::Refused(message),
            }),
        }
    }

    /// Wrap an already-erased callable under the shape it was validated
    /// against.
    pub(crate) fn erased(accepts: Shape, signature: Signature, invoke: ErasedInvoke) -> Self {
        Self {
            accepts,
            signature,
            invoke,
        }
    }

    /// The shape this entry accepts.
    pub(crate) fn accepts(&self) -> Shape {
        self.accepts
    }

    /// The signature the handler was registered with.
    pub(crate) fn signature(&self) -> &Signature {
        &self.signature
    }

    pub(crate) fn invoke(&self, message: Box<dyn Any + Send>) -> Invocation {
        (self.invoke)(message)
    }
}
