//! Error types for native operator evaluation.
//!
//! Every failure raised while evaluating an operator aborts the current
//! expression and travels back to the surrounding story evaluator, which
//! decides whether to stop the story or surface a diagnostic.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the typed category. Factory functions (e.g.
//! `division_by_zero()`) are the public way to build an `EvalError`; they
//! populate both `kind` and `message`.

use thiserror::Error;

use crate::value::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

fn argument_word(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Call shape
    #[error("operator '{name}' expects {expected} {}, got {got}", argument_word(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error(
        "attempting to perform operation on a void value. Did you forget to 'return' a value from a function you called here?"
    )]
    VoidOperand,
    #[error("no native operator named '{name}'")]
    UnknownOperator { name: String },
    #[error("cannot perform operation '{name}' on {kind}")]
    UnsupportedOperation { name: String, kind: ValueKind },

    // Coercion
    #[error("cannot cast {from} to {to}")]
    InvalidCast { from: ValueKind, to: ValueKind },
    #[error(
        "cannot mix Set and Int values here because the Set contains items from a mixture of different Set definitions, so the Int cannot be resolved"
    )]
    AmbiguousSetOrigin,
    #[error("could not find Set item with the value {value} in {definition}")]
    NoSetItemWithValue { value: i32, definition: String },
    #[error("cannot mix Sets and {kind} values in this operation")]
    SetMixedWith { kind: ValueKind },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,

    // Set definitions
    #[error("unknown Set item '{name}'")]
    UnknownSetItem { name: String },
}

impl EvalErrorKind {
    /// Whether this is one of the operand-unification failures.
    pub fn is_coercion_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidCast { .. }
                | Self::AmbiguousSetOrigin
                | Self::NoSetItemWithValue { .. }
                | Self::SetMixedWith { .. }
        )
    }

    /// Whether this is an arithmetic domain error (zero divisor).
    pub fn is_arithmetic_domain(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::ModuloByZero)
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Call Shape Errors

/// Operand count disagrees with the operator's declared arity.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// An operand is an unset function-return placeholder.
#[cold]
pub fn void_operand() -> EvalError {
    EvalError::from_kind(EvalErrorKind::VoidOperand)
}

/// The call site names no registered operator.
#[cold]
pub fn unknown_operator(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        name: name.to_string(),
    })
}

/// No implementation is registered for operator x kind.
#[cold]
pub fn unsupported_operation(name: &str, kind: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperation {
        name: name.to_string(),
        kind,
    })
}

// Coercion Errors

/// A cast between two kinds is undefined.
#[cold]
pub fn invalid_cast(from: ValueKind, to: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCast { from, to })
}

/// An Int met a Set whose items span several definitions.
#[cold]
pub fn ambiguous_set_origin() -> EvalError {
    EvalError::from_kind(EvalErrorKind::AmbiguousSetOrigin)
}

/// An Int names no item of the Set's origin definition.
#[cold]
pub fn no_set_item_with_value(value: i32, definition: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSetItemWithValue {
        value,
        definition: definition.to_string(),
    })
}

/// A Set met an operand that is neither a Set nor an Int.
#[cold]
pub fn set_mixed_with(kind: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SetMixedWith { kind })
}

// Arithmetic Errors

/// Integer division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Integer modulo by zero.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

// Set Definition Errors

/// A full item name resolved to nothing.
#[cold]
pub fn unknown_set_item(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownSetItem {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests;
