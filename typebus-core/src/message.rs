//! Message trait and runtime shape identity.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A marker trait for message kinds routable by the dispatcher.
///
/// Messages are plain data carriers; the bus never inspects their fields.
/// They must be `Send + Sync + 'static` so their runtime identity is stable
/// and erased messages can cross thread boundaries.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct OrderPlaced { id: u64 }
///
/// impl Message for OrderPlaced {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "All message kinds routed by typebus must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

// Common Message implementations
impl Message for () {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}

/// The runtime-distinguishable kind of a message value, used as the dispatch
/// key.
///
/// Two shapes compare equal iff they denote the same Rust type. The type name
/// is carried for diagnostics only and takes no part in equality or hashing.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    id: TypeId,
    name: &'static str,
}

impl Shape {
    /// The shape of message kind `M`.
    pub fn of<M: Message>() -> Self {
        Self {
            id: TypeId::of::<M>(),
            name: type_name::<M>(),
        }
    }

    /// The underlying type identity.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Object-safe bridge for publishing messages whose concrete type is erased.
///
/// Blanket-implemented for every [`Message`], so any message can be boxed
/// into `Box<dyn AnyMessage>` and still report its own [`Shape`].
pub trait AnyMessage: Send {
    /// The shape of the underlying message.
    fn shape(&self) -> Shape;

    /// Surrender the message as an erased value for invocation.
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<M: Message> AnyMessage for M {
    fn shape(&self) -> Shape {
        Shape::of::<M>()
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Alpha;
    impl Message for Alpha {}

    #[derive(Debug)]
    struct Beta;
    impl Message for Beta {}

    #[test]
    fn same_type_same_shape() {
        assert_eq!(Shape::of::<Alpha>(), Shape::of::<Alpha>());
    }

    #[test]
    fn distinct_types_distinct_shapes() {
        assert_ne!(Shape::of::<Alpha>(), Shape::of::<Beta>());
        assert_ne!(Shape::of::<Alpha>(), Shape::of::<Box<Alpha>>());
    }

    #[test]
    fn display_carries_type_name() {
        assert!(Shape::of::<Alpha>().to_string().contains("Alpha"));
    }

    #[test]
    fn boxed_message_reports_its_shape() {
        let message: Box<dyn AnyMessage> = Box::new(Beta);
        assert_eq!(message.shape(), Shape::of::<Beta>());

        let erased = message.into_any();
        assert!(erased.downcast::<Beta>().is_ok());
    }
}
