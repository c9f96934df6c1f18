//! Signature descriptors for runtime-described callables.
//!
//! When a handler arrives without its Rust type (plugin registration,
//! adapters over foreign callables), the contract cannot be proven by the
//! compiler. A [`Signature`] carries the declared parameter shapes and result
//! kind instead, and [`Signature::check`] performs the registration-time
//! comparison against the shape being bound.

use crate::error::ContractError;
use crate::message::{Message, Shape};
use std::fmt;

/// Declared result kind of a runtime-described callable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnKind {
    /// The result is either absent (success) or carries failure information.
    ErrorLike,
    /// The result is a plain value of the given shape.
    Value(Shape),
    /// The callable produces no result at all.
    Nothing,
}

/// The declared parameter shapes and result kind of a callable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    params: Vec<Shape>,
    returns: ReturnKind,
}

impl Signature {
    /// Describe a callable with the given parameter shapes and result kind.
    pub fn new(params: Vec<Shape>, returns: ReturnKind) -> Self {
        Self { params, returns }
    }

    /// The well-formed signature: one parameter of shape `M`, error-like
    /// result.
    pub fn unary<M: Message>() -> Self {
        Self {
            params: vec![Shape::of::<M>()],
            returns: ReturnKind::ErrorLike,
        }
    }

    /// The declared parameter shapes.
    pub fn params(&self) -> &[Shape] {
        &self.params
    }

    /// The declared result kind.
    pub fn returns(&self) -> &ReturnKind {
        &self.returns
    }

    /// Validate this signature against the shape it is being bound to.
    ///
    /// The contract: exactly one parameter, accepting exactly `shape`, with
    /// an error-like result. Any deviation is a [`ContractError`] naming this
    /// signature and the offended shape.
    pub fn check(&self, shape: Shape) -> Result<(), ContractError> {
        if self.params.len() != 1 {
            return Err(ContractError::Arity {
                signature: self.clone(),
                shape,
            });
        }
        if self.params[0] != shape {
            return Err(ContractError::ParameterMismatch {
                signature: self.clone(),
                shape,
            });
        }
        if self.returns != ReturnKind::ErrorLike {
            return Err(ContractError::ResultMismatch {
                signature: self.clone(),
                shape,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")?;
        match &self.returns {
            ReturnKind::ErrorLike => write!(f, " -> error"),
            ReturnKind::Value(shape) => write!(f, " -> {shape}"),
            ReturnKind::Nothing => Ok(()),
        }
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
    fn unary_signature_passes_for_its_shape() {
        assert!(Signature::unary::<Alpha>().check(Shape::of::<Alpha>()).is_ok());
    }

    #[test]
    fn zero_params_fail_arity() {
        let signature = Signature::new(Vec::new(), ReturnKind::ErrorLike);
        let err = signature.check(Shape::of::<Alpha>()).unwrap_err();
        assert!(matches!(err, ContractError::Arity { .. }));
    }

    #[test]
    fn two_params_fail_arity() {
        let signature = Signature::new(
            vec![Shape::of::<Alpha>(), Shape::of::<Beta>()],
            ReturnKind::ErrorLike,
        );
        let err = signature.check(Shape::of::<Alpha>()).unwrap_err();
        assert!(matches!(err, ContractError::Arity { .. }));
    }

    #[test]
    fn wrong_parameter_shape_is_rejected() {
        let err = Signature::unary::<Beta>()
            .check(Shape::of::<Alpha>())
            .unwrap_err();
        assert!(matches!(err, ContractError::ParameterMismatch { .. }));
    }

    #[test]
    fn non_error_like_results_are_rejected() {
        for returns in [ReturnKind::Nothing, ReturnKind::Value(Shape::of::<Beta>())] {
            let signature = Signature::new(vec![Shape::of::<Alpha>()], returns);
            let err = signature.check(Shape::of::<Alpha>()).unwrap_err();
            assert!(matches!(err, ContractError::ResultMismatch { .. }));
        }
    }

    #[test]
    fn display_renders_params_and_result() {
        let signature = Signature::new(
            vec![Shape::of::<Alpha>(), Shape::of::<Beta>()],
            ReturnKind::ErrorLike,
        );
        let rendered = signature.to_string();
        assert!(rendered.starts_with("fn("));
        assert!(rendered.contains("Alpha"));
        assert!(rendered.contains("Beta"));
        assert!(rendered.ends_with("-> error"));

        let bare = Signature::new(Vec::new(), ReturnKind::Nothing);
        assert_eq!(bare.to_string(), "fn()");
    }
}
