//! Ink Value - dynamically-typed values for the ink story runtime.
//!
//! This crate holds everything an operator sees:
//!
//! - `Value` and `ValueKind`: the tagged value variants and their promotion
//!   order
//! - `Native`: the ingestion boundary where native literals are narrowed
//! - `SetValue`, `SetItem`, `SetDefinition`: the Set algebra and the
//!   definitions Set values trace back to
//! - `EvalError`, `EvalResult`: structured evaluation failures
//!
//! Operator dispatch lives in `ink_native`.

pub mod errors;
pub mod set;
pub mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use set::{
    SetDefinition, SetDefinitionProvider, SetDefinitions, SetItem, SetValue, UNKNOWN_ORIGIN,
};
pub use value::{Heap, Native, Path, Value, ValueKind};
