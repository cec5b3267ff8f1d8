//! Native literals at the ingestion boundary.
//!
//! Story state, the compiler's literals and raw operator results all reach
//! the value system as a `Native`. `Value::create` is the single place
//! where a native literal becomes a tagged `Value`; it applies
//! `Native::normalize`, which owns the lossy narrowing:
//!
//! - `Double` narrows to single-precision `Float`
//! - `Long` truncates to a 32-bit `Int`
//! - `Bool` becomes `Int` 0 or 1

use crate::set::SetValue;

use super::Path;

/// A boxed native literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Native {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Str(String),
    Path(Path),
    Set(SetValue),
}

impl Native {
    /// Apply the ingestion narrowing rules.
    ///
    /// The result is always one of `Int`, `Float`, `Str`, `Path` or `Set`.
    pub fn normalize(self) -> Native {
        match self {
            Native::Double(d) => Native::Float(narrow_double(d)),
            Native::Long(l) => Native::Int(narrow_long(l)),
            Native::Bool(b) => Native::Int(i32::from(b)),
            other => other,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "narrowing to single precision is the documented ingestion rule"
)]
#[inline]
fn narrow_double(d: f64) -> f32 {
    d as f32
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "truncating to 32 bits is the documented ingestion rule"
)]
#[inline]
fn narrow_long(l: i64) -> i32 {
    l as i32
}

impl From<i32> for Native {
    fn from(value: i32) -> Self {
        Native::Int(value)
    }
}

impl From<i64> for Native {
    fn from(value: i64) -> Self {
        Native::Long(value)
    }
}

impl From<f32> for Native {
    fn from(value: f32) -> Self {
        Native::Float(value)
    }
}

impl From<f64> for Native {
    fn from(value: f64) -> Self {
        Native::Double(value)
    }
}

impl From<bool> for Native {
    fn from(value: bool) -> Self {
        Native::Bool(value)
    }
}

impl From<String> for Native {
    fn from(value: String) -> Self {
        Native::Str(value)
    }
}

impl From<&str> for Native {
    fn from(value: &str) -> Self {
        Native::Str(value.to_string())
    }
}

impl From<Path> for Native {
    fn from(value: Path) -> Self {
        Native::Path(value)
    }
}

impl From<SetValue> for Native {
    fn from(value: SetValue) -> Self {
        Native::Set(value)
    }
}
