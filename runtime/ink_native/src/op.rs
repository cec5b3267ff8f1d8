//! Native operator tags.
//!
//! The story compiler names operators by symbol (`"+"`, `"SET_MAX"`, ...).
//! `NativeOp` is the closed set of those symbols; a call site resolves its
//! name to a tag once and every later lookup is by tag.

use std::fmt;

/// A native operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeOp {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    /// Unary minus, spelled `_` to keep it apart from subtraction.
    Negate,

    // Comparison
    Equal,
    NotEquals,
    Greater,
    Less,
    GreaterThanOrEquals,
    LessThanOrEquals,

    // Logic
    Not,
    And,
    Or,
    Max,
    Min,

    // Set only
    Has,
    Invert,
    Intersect,
    SetMax,
    SetMin,
    SetAll,
    SetCount,
}

impl NativeOp {
    /// Every operator.
    pub const ALL: [NativeOp; 24] = [
        NativeOp::Add,
        NativeOp::Subtract,
        NativeOp::Multiply,
        NativeOp::Divide,
        NativeOp::Mod,
        NativeOp::Negate,
        NativeOp::Equal,
        NativeOp::NotEquals,
        NativeOp::Greater,
        NativeOp::Less,
        NativeOp::GreaterThanOrEquals,
        NativeOp::LessThanOrEquals,
        NativeOp::Not,
        NativeOp::And,
        NativeOp::Or,
        NativeOp::Max,
        NativeOp::Min,
        NativeOp::Has,
        NativeOp::Invert,
        NativeOp::Intersect,
        NativeOp::SetMax,
        NativeOp::SetMin,
        NativeOp::SetAll,
        NativeOp::SetCount,
    ];

    /// The symbol the story compiler uses for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            NativeOp::Add => "+",
            NativeOp::Subtract => "-",
            NativeOp::Multiply => "*",
            NativeOp::Divide => "/",
            NativeOp::Mod => "%",
            NativeOp::Negate => "_",
            NativeOp::Equal => "==",
            NativeOp::NotEquals => "!=",
            NativeOp::Greater => ">",
            NativeOp::Less => "<",
            NativeOp::GreaterThanOrEquals => ">=",
            NativeOp::LessThanOrEquals => "<=",
            NativeOp::Not => "!",
            NativeOp::And => "&&",
            NativeOp::Or => "||",
            NativeOp::Max => "MAX",
            NativeOp::Min => "MIN",
            NativeOp::Has => "?",
            NativeOp::Invert => "~",
            NativeOp::Intersect => "^",
            NativeOp::SetMax => "SET_MAX",
            NativeOp::SetMin => "SET_MIN",
            NativeOp::SetAll => "SET_ALL",
            NativeOp::SetCount => "SET_COUNT",
        }
    }

    /// Resolve a symbol to its operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for NativeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
