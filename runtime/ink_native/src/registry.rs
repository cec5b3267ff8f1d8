//! The native operator registry.
//!
//! Maps each operator to its declared arity and one implementation per
//! value kind. Built once, on first use, into a process-wide table that is
//! read-only afterwards.
//!
//! Implementations work on raw payloads and return a raw `Native`; the
//! dispatcher turns that back into a `Value` through `Value::create`, so a
//! comparison can simply return `Native::Bool` and come out as Int 0/1.

use std::sync::OnceLock;

use ink_value::errors::{division_by_zero, modulo_by_zero};
use ink_value::{EvalResult, Native, Path, SetValue, ValueKind};
use rustc_hash::FxHashMap;

use crate::op::NativeOp;

/// Raw result of an implementation.
pub(crate) type OpResult = EvalResult<Native>;

/// One operator's implementation for one value kind.
#[derive(Clone, Copy)]
pub(crate) enum OpFn {
    IntUnary(fn(i32) -> OpResult),
    IntBinary(fn(i32, i32) -> OpResult),
    FloatUnary(fn(f32) -> OpResult),
    FloatBinary(fn(f32, f32) -> OpResult),
    StrBinary(fn(&str, &str) -> OpResult),
    PathBinary(fn(&Path, &Path) -> OpResult),
    SetUnary(fn(&SetValue) -> OpResult),
    SetBinary(fn(&SetValue, &SetValue) -> OpResult),
    /// Registered so the operator exists for Sets. The dispatcher handles
    /// it before reaching the table because it needs the origin definition.
    SetPlaceholder,
}

struct OpEntry {
    arity: usize,
    by_kind: FxHashMap<ValueKind, OpFn>,
}

/// Operator table: arity plus per-kind implementations.
pub struct NativeRegistry {
    entries: FxHashMap<NativeOp, OpEntry>,
}

// Global singleton for the registry
static GLOBAL_REGISTRY: OnceLock<NativeRegistry> = OnceLock::new();

impl NativeRegistry {
    /// The process-wide registry, built on first access.
    ///
    /// Concurrent first use is serialized by `OnceLock`; every caller sees
    /// the same fully built table.
    pub fn global() -> &'static NativeRegistry {
        GLOBAL_REGISTRY.get_or_init(NativeRegistry::build)
    }

    /// Whether an operator with this symbol exists.
    pub fn call_exists_with_name(&self, name: &str) -> bool {
        NativeOp::from_symbol(name).is_some_and(|op| self.contains(op))
    }

    pub fn contains(&self, op: NativeOp) -> bool {
        self.entries.contains_key(&op)
    }

    /// Declared arity of `op`.
    pub fn arity(&self, op: NativeOp) -> Option<usize> {
        self.entries.get(&op).map(|entry| entry.arity)
    }

    /// Whether `op` has an implementation for `kind`.
    pub fn supports(&self, op: NativeOp, kind: ValueKind) -> bool {
        self.implementation(op, kind).is_some()
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn implementation(&self, op: NativeOp, kind: ValueKind) -> Option<OpFn> {
        self.entries
            .get(&op)
            .and_then(|entry| entry.by_kind.get(&kind))
            .copied()
    }

    fn build() -> Self {
        let mut registry = NativeRegistry {
            entries: FxHashMap::default(),
        };
        registry.register_int_ops();
        registry.register_float_ops();
        registry.register_string_ops();
        registry.register_set_ops();
        registry.register_divert_target_ops();

        tracing::debug!(
            operators = registry.entries.len(),
            implementations = registry
                .entries
                .values()
                .map(|entry| entry.by_kind.len())
                .sum::<usize>(),
            "built native operator registry"
        );
        registry
    }

    /// Record `func` for `op` on `kind`. The first registration of an
    /// operator fixes its arity.
    fn add(&mut self, op: NativeOp, arity: usize, kind: ValueKind, func: OpFn) {
        let entry = self.entries.entry(op).or_insert_with(|| OpEntry {
            arity,
            by_kind: FxHashMap::default(),
        });
        debug_assert_eq!(entry.arity, arity, "arity of {op} registered twice differently");
        entry.by_kind.insert(kind, func);
    }

    fn int_unary(&mut self, op: NativeOp, func: fn(i32) -> OpResult) {
        self.add(op, 1, ValueKind::Int, OpFn::IntUnary(func));
    }

    fn int_binary(&mut self, op: NativeOp, func: fn(i32, i32) -> OpResult) {
        self.add(op, 2, ValueKind::Int, OpFn::IntBinary(func));
    }

    fn float_unary(&mut self, op: NativeOp, func: fn(f32) -> OpResult) {
        self.add(op, 1, ValueKind::Float, OpFn::FloatUnary(func));
    }

    fn float_binary(&mut self, op: NativeOp, func: fn(f32, f32) -> OpResult) {
        self.add(op, 2, ValueKind::Float, OpFn::FloatBinary(func));
    }

    fn string_binary(&mut self, op: NativeOp, func: fn(&str, &str) -> OpResult) {
        self.add(op, 2, ValueKind::String, OpFn::StrBinary(func));
    }

    fn set_unary(&mut self, op: NativeOp, func: fn(&SetValue) -> OpResult) {
        self.add(op, 1, ValueKind::Set, OpFn::SetUnary(func));
    }

    fn set_binary(&mut self, op: NativeOp, func: fn(&SetValue, &SetValue) -> OpResult) {
        self.add(op, 2, ValueKind::Set, OpFn::SetBinary(func));
    }

    /// Machine-width integer arithmetic; only a zero divisor fails.
    fn register_int_ops(&mut self) {
        self.int_binary(NativeOp::Add, |a, b| Ok(Native::Int(a.wrapping_add(b))));
        self.int_binary(NativeOp::Subtract, |a, b| Ok(Native::Int(a.wrapping_sub(b))));
        self.int_binary(NativeOp::Multiply, |a, b| Ok(Native::Int(a.wrapping_mul(b))));
        self.int_binary(NativeOp::Divide, |a, b| {
            if b == 0 {
                Err(division_by_zero())
            } else {
                Ok(Native::Int(a.wrapping_div(b)))
            }
        });
        self.int_binary(NativeOp::Mod, |a, b| {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                Ok(Native::Int(a.wrapping_rem(b)))
            }
        });
        self.int_unary(NativeOp::Negate, |a| Ok(Native::Int(a.wrapping_neg())));

        self.int_binary(NativeOp::Equal, |a, b| Ok(Native::Bool(a == b)));
        self.int_binary(NativeOp::Greater, |a, b| Ok(Native::Bool(a > b)));
        self.int_binary(NativeOp::Less, |a, b| Ok(Native::Bool(a < b)));
        self.int_binary(NativeOp::GreaterThanOrEquals, |a, b| Ok(Native::Bool(a >= b)));
        self.int_binary(NativeOp::LessThanOrEquals, |a, b| Ok(Native::Bool(a <= b)));
        self.int_binary(NativeOp::NotEquals, |a, b| Ok(Native::Bool(a != b)));
        self.int_unary(NativeOp::Not, |a| Ok(Native::Bool(a == 0)));

        self.int_binary(NativeOp::And, |a, b| Ok(Native::Bool(a != 0 && b != 0)));
        self.int_binary(NativeOp::Or, |a, b| Ok(Native::Bool(a != 0 || b != 0)));
        self.int_binary(NativeOp::Max, |a, b| Ok(Native::Int(a.max(b))));
        self.int_binary(NativeOp::Min, |a, b| Ok(Native::Int(a.min(b))));
    }

    /// IEEE single precision; equality is exact, with no tolerance.
    #[allow(clippy::float_cmp, reason = "float equality is exact by definition here")]
    fn register_float_ops(&mut self) {
        self.float_binary(NativeOp::Add, |a, b| Ok(Native::Float(a + b)));
        self.float_binary(NativeOp::Subtract, |a, b| Ok(Native::Float(a - b)));
        self.float_binary(NativeOp::Multiply, |a, b| Ok(Native::Float(a * b)));
        self.float_binary(NativeOp::Divide, |a, b| Ok(Native::Float(a / b)));
        self.float_binary(NativeOp::Mod, |a, b| Ok(Native::Float(a % b)));
        self.float_unary(NativeOp::Negate, |a| Ok(Native::Float(-a)));

        self.float_binary(NativeOp::Equal, |a, b| Ok(Native::Bool(a == b)));
        self.float_binary(NativeOp::Greater, |a, b| Ok(Native::Bool(a > b)));
        self.float_binary(NativeOp::Less, |a, b| Ok(Native::Bool(a < b)));
        self.float_binary(NativeOp::GreaterThanOrEquals, |a, b| Ok(Native::Bool(a >= b)));
        self.float_binary(NativeOp::LessThanOrEquals, |a, b| Ok(Native::Bool(a <= b)));
        self.float_binary(NativeOp::NotEquals, |a, b| Ok(Native::Bool(a != b)));
        self.float_unary(NativeOp::Not, |a| Ok(Native::Bool(a == 0.0)));

        self.float_binary(NativeOp::And, |a, b| Ok(Native::Bool(a != 0.0 && b != 0.0)));
        self.float_binary(NativeOp::Or, |a, b| Ok(Native::Bool(a != 0.0 || b != 0.0)));
        self.float_binary(NativeOp::Max, |a, b| Ok(Native::Float(nan_or(a, b, f32::max))));
        self.float_binary(NativeOp::Min, |a, b| Ok(Native::Float(nan_or(a, b, f32::min))));
    }

    fn register_string_ops(&mut self) {
        self.string_binary(NativeOp::Add, |a, b| Ok(Native::Str(format!("{a}{b}"))));
        self.string_binary(NativeOp::Equal, |a, b| Ok(Native::Bool(a == b)));
    }

    fn register_set_ops(&mut self) {
        // `+` and `&&` are both union
        self.set_binary(NativeOp::Add, |a, b| Ok(Native::Set(a.union(b))));
        self.set_binary(NativeOp::And, |a, b| Ok(Native::Set(a.union(b))));
        self.set_binary(NativeOp::Subtract, |a, b| Ok(Native::Set(a.without(b))));
        self.set_binary(NativeOp::Has, |a, b| Ok(Native::Bool(a.contains(b))));
        self.set_binary(NativeOp::Intersect, |a, b| Ok(Native::Set(a.intersect(b))));

        self.set_binary(NativeOp::Equal, |a, b| Ok(Native::Bool(a == b)));
        self.set_binary(NativeOp::NotEquals, |a, b| Ok(Native::Bool(a != b)));
        // An empty left operand never satisfies >, >= or <=
        self.set_binary(NativeOp::Greater, |a, b| {
            Ok(Native::Bool(!a.is_empty() && a.greater_than(b)))
        });
        self.set_binary(NativeOp::Less, |a, b| Ok(Native::Bool(a.less_than(b))));
        self.set_binary(NativeOp::GreaterThanOrEquals, |a, b| {
            Ok(Native::Bool(!a.is_empty() && a.greater_than_or_equals(b)))
        });
        self.set_binary(NativeOp::LessThanOrEquals, |a, b| {
            Ok(Native::Bool(!a.is_empty() && a.less_than_or_equals(b)))
        });

        self.set_unary(NativeOp::Not, |a| Ok(Native::Bool(a.is_empty())));
        self.add(NativeOp::Invert, 1, ValueKind::Set, OpFn::SetPlaceholder);
        self.add(NativeOp::SetAll, 1, ValueKind::Set, OpFn::SetPlaceholder);
        self.set_unary(NativeOp::SetMin, |a| Ok(Native::Set(a.min_as_set())));
        self.set_unary(NativeOp::SetMax, |a| Ok(Native::Set(a.max_as_set())));
        self.set_unary(NativeOp::SetCount, |a| {
            Ok(Native::Int(i32::try_from(a.len()).unwrap_or(i32::MAX)))
        });
    }

    fn register_divert_target_ops(&mut self) {
        self.add(
            NativeOp::Equal,
            2,
            ValueKind::DivertTarget,
            OpFn::PathBinary(divert_targets_equal),
        );
    }
}

/// `f32::max`/`f32::min` drop a NaN operand; MAX and MIN propagate it.
fn nan_or(a: f32, b: f32, pick: fn(f32, f32) -> f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        pick(a, b)
    }
}

/// Divert target equality compares the left path with itself, not with
/// the right one, so it holds for every pair of targets.
fn divert_targets_equal(left: &Path, _right: &Path) -> OpResult {
    let compared_with = left;
    Ok(Native::Bool(left.as_str() == compared_with.as_str()))
}
