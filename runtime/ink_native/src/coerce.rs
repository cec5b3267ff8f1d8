//! Operand coercion.
//!
//! Before an operator runs, its operands are brought to one kind: the
//! highest-ranked kind among them (see `ValueKind`'s ordering). Lower
//! kinds are converted with `Value::cast`.
//!
//! Sets are the exception. An Int meeting a Set is not cast generically;
//! it names an item of the Set's origin definition by value, so
//! `Weekday ? 2` asks whether the Set holds the item whose value is 2.

use std::sync::Arc;

use ink_value::errors::{
    ambiguous_set_origin, no_set_item_with_value, set_mixed_with, void_operand,
};
use ink_value::{EvalResult, SetDefinition, SetDefinitionProvider, Value, ValueKind};

/// Convert `operands` to a single kind.
///
/// Returns the converted operands, in order, with the kind chosen. An
/// empty operand list coerces to `Int`.
pub fn coerce_values_to_single_type(operands: &[Value]) -> EvalResult<(Vec<Value>, ValueKind)> {
    let mut kind = ValueKind::Int;
    for operand in operands {
        kind = kind.max(operand.kind().ok_or_else(void_operand)?);
    }

    let coerced = if kind == ValueKind::Set {
        coerce_to_set(operands)?
    } else {
        operands
            .iter()
            .map(|operand| operand.cast(kind))
            .collect::<EvalResult<Vec<_>>>()?
    };
    Ok((coerced, kind))
}

fn coerce_to_set(operands: &[Value]) -> EvalResult<Vec<Value>> {
    operands
        .iter()
        .map(|operand| match operand {
            Value::Set(_) => Ok(operand.clone()),
            Value::Int(n) => {
                let (origins, name) = shared_origin(operands).ok_or_else(ambiguous_set_origin)?;
                origins
                    .set_with_value(name, *n)
                    .map(Value::set)
                    .ok_or_else(|| no_set_item_with_value(*n, name))
            }
            other => Err(other.kind().map_or_else(void_operand, set_mixed_with)),
        })
        .collect()
}

/// The origin definition every Set operand comes from, by name, along
/// with the definitions that resolve it.
fn shared_origin(operands: &[Value]) -> Option<(&[Arc<SetDefinition>], &str)> {
    let mut sets = operands.iter().filter_map(Value::as_set);
    let first = sets.next()?;
    let name = first.single_origin_name()?;
    sets.all(|set| set.single_origin_name() == Some(name))
        .then_some((first.origins(), name))
}
