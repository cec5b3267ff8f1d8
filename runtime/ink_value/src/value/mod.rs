//! Runtime values for the story evaluator.
//!
//! A `Value` is one of a closed set of kinds. Every operand handed to a
//! native operator and every result it produces is a `Value`.
//!
//! # Kinds and Promotion Rank
//!
//! `ValueKind` is totally ordered, and the order is the promotion rank used
//! when operands of different kinds meet in one operator:
//!
//! ```text
//! Int < Float < Set < String < DivertTarget
//! ```
//!
//! The ordering matches the story compiler's numeric model and must not be
//! reordered: stories compiled against it rely on, for example, a Set
//! meeting a String being rendered as text rather than the reverse.
//!
//! # Construction
//!
//! Heap payloads (strings, sets) are only reachable through the factory
//! methods (`Value::string`, `Value::set`) or through `Value::create`, the
//! ingestion boundary for native literals.

mod heap;
mod native;
mod path;

use std::fmt;

pub use heap::Heap;
pub use native::Native;
pub use path::Path;

use crate::errors::{invalid_cast, void_operand, EvalResult};
use crate::set::SetValue;

/// The kind tag of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Set,
    String,
    DivertTarget,
}

impl ValueKind {
    /// All kinds in promotion order.
    pub const ALL: [ValueKind; 5] = [
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Set,
        ValueKind::String,
        ValueKind::DivertTarget,
    ];

    /// Display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::Set => "Set",
            ValueKind::String => "String",
            ValueKind::DivertTarget => "DivertTarget",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 32-bit signed integer.
    Int(i32),
    /// Single-precision float.
    Float(f32),
    /// UTF-8 string.
    Str(Heap<String>),
    /// Reference to a location in the story graph.
    DivertTarget(Path),
    /// Multi-valued enumeration.
    Set(Heap<SetValue>),
    /// Placeholder left by a function call that returned nothing.
    ///
    /// Never a valid operand; the dispatcher rejects it.
    Void,
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i32) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f32) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn divert_target(path: Path) -> Self {
        Value::DivertTarget(path)
    }

    #[inline]
    pub fn set(set: SetValue) -> Self {
        Value::Set(Heap::new(set))
    }

    /// Create a value from a native literal.
    ///
    /// This is the ingestion boundary: doubles narrow to `Float`, longs
    /// truncate to `Int` and booleans become `Int` 0/1.
    pub fn create(literal: impl Into<Native>) -> Self {
        let literal: Native = literal.into();
        match literal.normalize() {
            Native::Int(n) => Value::Int(n),
            Native::Float(f) => Value::Float(f),
            Native::Str(s) => Value::string(s),
            Native::Path(p) => Value::DivertTarget(p),
            Native::Set(s) => Value::set(s),
            Native::Long(_) | Native::Double(_) | Native::Bool(_) => {
                unreachable!("normalize leaves no long, double or bool literal")
            }
        }
    }
}

// Inspection

impl Value {
    /// The kind tag, or `None` for the void placeholder.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Int(_) => Some(ValueKind::Int),
            Value::Float(_) => Some(ValueKind::Float),
            Value::Str(_) => Some(ValueKind::String),
            Value::DivertTarget(_) => Some(ValueKind::DivertTarget),
            Value::Set(_) => Some(ValueKind::Set),
            Value::Void => None,
        }
    }

    /// Name of the value's kind, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.kind().map_or("void", ValueKind::name)
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Truthiness as seen by conditionals.
    ///
    /// Numbers are truthy when non-zero, strings and sets when non-empty.
    /// A divert target is always truthy since equality is its only
    /// operator.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::DivertTarget(_) => true,
            Value::Set(set) => !set.is_empty(),
            Value::Void => false,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Value::DivertTarget(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&SetValue> {
        match self {
            Value::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Recover the native payload.
    ///
    /// Returns `None` for the void placeholder.
    pub fn to_native(&self) -> Option<Native> {
        match self {
            Value::Int(n) => Some(Native::Int(*n)),
            Value::Float(f) => Some(Native::Float(*f)),
            Value::Str(s) => Some(Native::Str(s.to_string())),
            Value::DivertTarget(p) => Some(Native::Path(p.clone())),
            Value::Set(s) => Some(Native::Set((**s).clone())),
            Value::Void => None,
        }
    }

    /// Copy through the ingestion boundary.
    pub fn copy(&self) -> Self {
        self.to_native().map_or(Value::Void, Value::create)
    }
}

// Casting

impl Value {
    /// Convert to another kind.
    ///
    /// Defined conversions:
    ///
    /// | from         | to                          |
    /// |--------------|-----------------------------|
    /// | Int          | Float, String               |
    /// | Float        | Int (truncating), String    |
    /// | Set          | String                      |
    ///
    /// Casting to the value's own kind returns a copy. Anything else fails
    /// with a coercion error.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "int/float casts follow the story language's numeric model"
    )]
    pub fn cast(&self, target: ValueKind) -> EvalResult {
        let Some(kind) = self.kind() else {
            return Err(void_operand());
        };
        if kind == target {
            return Ok(self.clone());
        }
        match (self, target) {
            (Value::Int(n), ValueKind::Float) => Ok(Value::Float(*n as f32)),
            (Value::Int(n), ValueKind::String) => Ok(Value::string(n.to_string())),
            (Value::Float(f), ValueKind::Int) => Ok(Value::Int(*f as i32)),
            (Value::Float(f), ValueKind::String) => Ok(Value::string(f.to_string())),
            (Value::Set(set), ValueKind::String) => Ok(Value::string(set.to_string())),
            _ => Err(invalid_cast(kind, target)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::DivertTarget(p) => write!(f, "-> {p}"),
            Value::Set(s) => write!(f, "{s}"),
            Value::Void => f.write_str("void"),
        }
    }
}

impl From<SetValue> for Value {
    fn from(set: SetValue) -> Self {
        Value::set(set)
    }
}
