//! Native function calls: the operator dispatcher.
//!
//! A `NativeFunctionCall` is what a compiled story holds at each operator
//! site. It names the operator and nothing else; arity and
//! implementations come from the registry each time it is called.
//!
//! # Dispatch
//!
//! 1. Check the operand count against the operator's arity.
//! 2. Reject void operands.
//! 3. `~` and `SET_ALL` on a Set are answered from the Set's origin
//!    definition.
//! 4. `Set + Int` and `Set - Int` step the Set to a neighbouring item.
//! 5. Otherwise coerce the operands to one kind, run that kind's
//!    implementation and wrap the raw result with `Value::create`.

use std::fmt;

use ink_value::errors::{
    arity_mismatch, unknown_operator, unsupported_operation, void_operand,
};
use ink_value::{
    EvalResult, SetDefinitionProvider, SetItem, SetValue, Value, ValueKind, UNKNOWN_ORIGIN,
};

use crate::coerce::coerce_values_to_single_type;
use crate::op::NativeOp;
use crate::registry::{NativeRegistry, OpFn, OpResult};

/// Whether a native operator with this symbol exists.
pub fn call_exists_with_name(name: &str) -> bool {
    NativeRegistry::global().call_exists_with_name(name)
}

/// A call site for the operator with this symbol.
///
/// Always succeeds. A name with no registered operator gives an unbound
/// call that fails when called.
pub fn call_with_name(name: &str) -> NativeFunctionCall {
    NativeFunctionCall::with_name(name)
}

/// An operator call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeFunctionCall {
    name: String,
    op: Option<NativeOp>,
}

impl NativeFunctionCall {
    pub fn with_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let op = NativeOp::from_symbol(&name).filter(|op| NativeRegistry::global().contains(*op));
        NativeFunctionCall { name, op }
    }

    pub fn from_op(op: NativeOp) -> Self {
        NativeFunctionCall {
            name: op.symbol().to_string(),
            op: Some(op),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operator this call site is bound to.
    pub fn op(&self) -> Option<NativeOp> {
        self.op
    }

    /// Declared arity, or `None` for an unbound call site.
    pub fn arity(&self) -> Option<usize> {
        self.op.and_then(|op| NativeRegistry::global().arity(op))
    }

    /// Apply the operator to already-evaluated operands.
    #[tracing::instrument(level = "trace", skip_all, fields(op = %self.name))]
    pub fn call(&self, operands: &[Value]) -> EvalResult {
        let registry = NativeRegistry::global();
        let Some((op, arity)) = self
            .op
            .and_then(|op| registry.arity(op).map(|arity| (op, arity)))
        else {
            return Err(unknown_operator(&self.name));
        };

        if operands.len() != arity {
            return Err(arity_mismatch(&self.name, arity, operands.len()));
        }
        if operands.iter().any(Value::is_void) {
            return Err(void_operand());
        }

        // Operators that need the Set's origin definition, not just its items
        if let [Value::Set(set)] = operands {
            match op {
                NativeOp::Invert => {
                    tracing::debug!("inverting set against its origin");
                    return Ok(Value::set(set.inverse().unwrap_or_else(SetValue::unknown)));
                }
                NativeOp::SetAll => {
                    tracing::debug!("listing all items of set origin");
                    return Ok(Value::set(set.all().unwrap_or_else(SetValue::unknown)));
                }
                _ => {}
            }
        }

        if let [Value::Set(set), Value::Int(step)] = operands {
            if matches!(op, NativeOp::Add | NativeOp::Subtract) {
                return self.call_set_int_operation(op, set, *step);
            }
        }

        let (coerced, kind) = coerce_values_to_single_type(operands)?;
        let func = registry
            .implementation(op, kind)
            .ok_or_else(|| unsupported_operation(&self.name, kind))?;
        tracing::trace!(%kind, "dispatching native operator");
        let raw = invoke(func, &coerced).ok_or_else(|| unsupported_operation(&self.name, kind))??;
        Ok(Value::create(raw))
    }

    /// Step a Set by an Int: apply `op` to the Set's greatest value and
    /// the Int, then name the resulting value from the Set's origin.
    ///
    /// A value with no item in the origin becomes an item called
    /// `UNKNOWN`. Stepping an empty Set leaves it unchanged.
    fn call_set_int_operation(&self, op: NativeOp, set: &SetValue, step: i32) -> EvalResult {
        let Some((_, max)) = set.max_item() else {
            return Ok(Value::set(set.clone()));
        };

        let result = NativeFunctionCall::from_op(op).call(&[Value::int(max), Value::int(step)])?;
        let Value::Int(target) = result else {
            return Err(unsupported_operation(&self.name, ValueKind::Set));
        };

        let stepped = set
            .single_origin_name()
            .and_then(|name| set.origins().set_with_value(name, target))
            .unwrap_or_else(|| SetValue::single(SetItem::new(None, UNKNOWN_ORIGIN), target));
        tracing::debug!(from = max, to = target, %stepped, "stepped set by int");
        Ok(Value::set(stepped))
    }
}

/// Run `func` on operands already coerced to its kind.
///
/// `None` when the operands do not fit the implementation's shape.
fn invoke(func: OpFn, operands: &[Value]) -> Option<OpResult> {
    let result = match (func, operands) {
        (OpFn::IntUnary(f), [Value::Int(a)]) => f(*a),
        (OpFn::IntBinary(f), [Value::Int(a), Value::Int(b)]) => f(*a, *b),
        (OpFn::FloatUnary(f), [Value::Float(a)]) => f(*a),
        (OpFn::FloatBinary(f), [Value::Float(a), Value::Float(b)]) => f(*a, *b),
        (OpFn::StrBinary(f), [Value::Str(a), Value::Str(b)]) => f(a, b),
        (OpFn::PathBinary(f), [Value::DivertTarget(a), Value::DivertTarget(b)]) => f(a, b),
        (OpFn::SetUnary(f), [Value::Set(a)]) => f(a),
        (OpFn::SetBinary(f), [Value::Set(a), Value::Set(b)]) => f(a, b),
        _ => return None,
    };
    Some(result)
}

impl fmt::Display for NativeFunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native '{}'", self.name)
    }
}
