//! Dispatcher tests.
//!
//! These exercise `NativeFunctionCall::call` end to end: registry lookup,
//! coercion, the Set special cases and result wrapping together.

mod call_tests;
