//! Ink Native - operator dispatch for the ink story runtime.
//!
//! Evaluates every arithmetic, comparison, logical, string, divert target
//! and Set operator a compiled story uses.
//!
//! # Architecture
//!
//! - `NativeOp`: the closed set of operator symbols
//! - `NativeRegistry`: process-wide table of per-kind implementations,
//!   built once on first use
//! - `coerce_values_to_single_type`: the promotion rule that brings mixed
//!   operands to one kind
//! - `NativeFunctionCall`: the call site; validates operands, handles the
//!   Set special cases and dispatches through the registry
//!
//! Values, Sets and errors come from `ink_value` and are re-exported here.

mod call;
mod coerce;
mod op;
mod registry;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use call::{call_exists_with_name, call_with_name, NativeFunctionCall};
pub use coerce::coerce_values_to_single_type;
pub use ink_value::{
    EvalError, EvalErrorKind, EvalResult, Native, Path, SetDefinition, SetDefinitionProvider,
    SetDefinitions, SetItem, SetValue, Value, ValueKind, UNKNOWN_ORIGIN,
};
pub use op::NativeOp;
pub use registry::NativeRegistry;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=ink_native=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
