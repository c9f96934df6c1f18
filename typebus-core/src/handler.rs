//! Handler trait: the unary-input, error-like-output contract.
//!
//! A handler is bound to exactly one message shape and reports either success
//! (no value) or structured failure information. In this typed form the
//! contract is proven by the compiler: the single parameter is the message
//! itself, and the error-like result is `Result<(), Self::Error>`. The
//! runtime-checked equivalent for erased callables lives in the dispatcher
//! crate.

use crate::message::Message;

/// A callable bound to messages of shape `M`.
///
/// Handlers receive the message by value and run synchronously to completion.
/// A handler that blocks forever blocks its publisher forever; the bus places
/// no timeout or cancellation around the call.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle messages of type `{M}`",
    label = "missing `Handler<{M}>` implementation",
    note = "Handlers take the message as their only parameter and return `Result<(), Self::Error>`."
)]
pub trait Handler<M: Message>: Send + Sync + 'static {
    /// The failure information this handler may report.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle one message.
    fn call(&self, message: M) -> Result<(), Self::Error>;
}

// Blanket impl for closures and fn items
impl<F, M, E> Handler<M> for F
where
    M: Message,
    E: std::error::Error + Send + Sync + 'static,
    F: Fn(M) -> Result<(), E> + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, message: M) -> Result<(), E> {
        (self)(message)
    }
}
