//! Tests for scalar operator dispatch: Int, Float, String and divert
//! targets, plus the call-shape errors every operator shares.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::{call_exists_with_name, call_with_name, NativeFunctionCall, NativeOp};
use ink_value::{EvalErrorKind, EvalResult, Path, Value, ValueKind};
use pretty_assertions::assert_eq;

fn call(name: &str, operands: &[Value]) -> EvalResult {
    call_with_name(name).call(operands)
}

fn error_kind(name: &str, operands: &[Value]) -> EvalErrorKind {
    call(name, operands).unwrap_err().kind
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(call("+", &[Value::int(2), Value::int(3)]).unwrap(), Value::int(5));
    assert_eq!(call("-", &[Value::int(5), Value::int(3)]).unwrap(), Value::int(2));
    assert_eq!(call("*", &[Value::int(2), Value::int(3)]).unwrap(), Value::int(6));
    assert_eq!(call("/", &[Value::int(7), Value::int(2)]).unwrap(), Value::int(3));
    assert_eq!(call("%", &[Value::int(7), Value::int(2)]).unwrap(), Value::int(1));
    assert_eq!(call("%", &[Value::int(-7), Value::int(2)]).unwrap(), Value::int(-1));
    assert_eq!(call("_", &[Value::int(4)]).unwrap(), Value::int(-4));
}

#[test]
fn test_int_arithmetic_wraps() {
    assert_eq!(
        call("+", &[Value::int(i32::MAX), Value::int(1)]).unwrap(),
        Value::int(i32::MIN)
    );
    assert_eq!(
        call("*", &[Value::int(i32::MAX), Value::int(2)]).unwrap(),
        Value::int(-2)
    );
    assert_eq!(call("_", &[Value::int(i32::MIN)]).unwrap(), Value::int(i32::MIN));
    assert_eq!(
        call("/", &[Value::int(i32::MIN), Value::int(-1)]).unwrap(),
        Value::int(i32::MIN)
    );
}

#[test]
fn test_zero_divisor() {
    assert_eq!(
        error_kind("/", &[Value::int(1), Value::int(0)]),
        EvalErrorKind::DivisionByZero
    );
    assert_eq!(
        error_kind("%", &[Value::int(1), Value::int(0)]),
        EvalErrorKind::ModuloByZero
    );
}

#[test]
fn test_float_division_by_zero_is_infinite() {
    let result = call("/", &[Value::float(1.0), Value::float(0.0)]).unwrap();
    assert!(result.as_float().is_some_and(f32::is_infinite));
}

#[test]
fn test_comparisons_yield_int() {
    assert_eq!(call("==", &[Value::int(1), Value::int(1)]).unwrap(), Value::int(1));
    assert_eq!(call("!=", &[Value::int(1), Value::int(1)]).unwrap(), Value::int(0));
    assert_eq!(call(">", &[Value::int(2), Value::int(1)]).unwrap(), Value::int(1));
    assert_eq!(call("<", &[Value::int(2), Value::int(1)]).unwrap(), Value::int(0));
    assert_eq!(call(">=", &[Value::int(2), Value::int(2)]).unwrap(), Value::int(1));
    assert_eq!(call("<=", &[Value::int(3), Value::int(2)]).unwrap(), Value::int(0));
}

#[test]
fn test_logic_on_ints() {
    assert_eq!(call("!", &[Value::int(0)]).unwrap(), Value::int(1));
    assert_eq!(call("!", &[Value::int(5)]).unwrap(), Value::int(0));
    assert_eq!(call("&&", &[Value::int(1), Value::int(0)]).unwrap(), Value::int(0));
    assert_eq!(call("&&", &[Value::int(2), Value::int(3)]).unwrap(), Value::int(1));
    assert_eq!(call("||", &[Value::int(0), Value::int(3)]).unwrap(), Value::int(1));
    assert_eq!(call("||", &[Value::int(0), Value::int(0)]).unwrap(), Value::int(0));
    assert_eq!(call("MAX", &[Value::int(3), Value::int(7)]).unwrap(), Value::int(7));
    assert_eq!(call("MIN", &[Value::int(3), Value::int(7)]).unwrap(), Value::int(3));
}

mod float {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_to_int_after_promotion() {
        assert_eq!(
            call("==", &[Value::float(1.0), Value::int(1)]).unwrap(),
            Value::int(1)
        );
        assert_eq!(
            call("==", &[Value::float(1.5), Value::int(1)]).unwrap(),
            Value::int(0)
        );
    }

    #[test]
    fn equality_has_no_tolerance() {
        let nudged = call("+", &[Value::float(1.0), Value::float(f32::EPSILON)]).unwrap();
        assert_eq!(call("==", &[nudged, Value::float(1.0)]).unwrap(), Value::int(0));
        // Single precision: 0.1 + 0.2 rounds to exactly the same bits as 0.3
        let sum = call("+", &[Value::float(0.1), Value::float(0.2)]).unwrap();
        assert_eq!(call("==", &[sum, Value::float(0.3)]).unwrap(), Value::int(1));
    }

    #[test]
    fn mixed_arithmetic_is_float() {
        assert_eq!(
            call("/", &[Value::int(7), Value::float(2.0)]).unwrap(),
            Value::float(3.5)
        );
        assert_eq!(
            call("+", &[Value::float(0.5), Value::int(2)]).unwrap(),
            Value::float(2.5)
        );
    }

    #[test]
    fn logic_and_extremes() {
        assert_eq!(call("!", &[Value::float(0.0)]).unwrap(), Value::int(1));
        assert_eq!(
            call("&&", &[Value::float(0.5), Value::float(0.0)]).unwrap(),
            Value::int(0)
        );
        assert_eq!(
            call("MAX", &[Value::float(0.5), Value::int(1)]).unwrap(),
            Value::float(1.0)
        );
        assert_eq!(call("_", &[Value::float(2.5)]).unwrap(), Value::float(-2.5));
    }

    #[test]
    fn extremes_propagate_nan() {
        let nan = call("/", &[Value::float(0.0), Value::float(0.0)]).unwrap();
        for (name, operands) in [
            ("MAX", [nan.clone(), Value::float(1.0)]),
            ("MAX", [Value::float(1.0), nan.clone()]),
            ("MIN", [nan.clone(), Value::float(1.0)]),
            ("MIN", [Value::float(1.0), nan.clone()]),
        ] {
            let result = call(name, &operands).unwrap();
            assert!(result.as_float().is_some_and(f32::is_nan), "{name} gave {result}");
        }
        assert_eq!(
            call("MIN", &[Value::float(-0.5), Value::float(1.0)]).unwrap(),
            Value::float(-0.5)
        );
    }
}

mod strings {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn concatenation() {
        assert_eq!(
            call("+", &[Value::string("ab"), Value::string("cd")]).unwrap(),
            Value::string("abcd")
        );
    }

    #[test]
    fn numbers_join_as_text() {
        assert_eq!(
            call("+", &[Value::string("x"), Value::int(1)]).unwrap(),
            Value::string("x1")
        );
        assert_eq!(
            call("+", &[Value::float(1.5), Value::string(" kg")]).unwrap(),
            Value::string("1.5 kg")
        );
    }

    #[test]
    fn equality_by_content() {
        assert_eq!(
            call("==", &[Value::string("a"), Value::string("a")]).unwrap(),
            Value::int(1)
        );
        assert_eq!(
            call("==", &[Value::string("a"), Value::string("b")]).unwrap(),
            Value::int(0)
        );
        assert_eq!(
            call("==", &[Value::string("1"), Value::int(1)]).unwrap(),
            Value::int(1)
        );
    }

    #[test]
    fn other_operators_are_unsupported() {
        let err = call("-", &[Value::string("a"), Value::string("b")]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UnsupportedOperation {
                name: "-".to_string(),
                kind: ValueKind::String,
            }
        );
        assert_eq!(err.message, "cannot perform operation '-' on String");
        assert!(call("!=", &[Value::string("a"), Value::string("b")]).is_err());
        assert!(call("<", &[Value::string("a"), Value::string("b")]).is_err());
    }
}

mod divert_targets {
    use super::*;
    use pretty_assertions::assert_eq;

    fn target(path: &str) -> Value {
        Value::divert_target(Path::new(path))
    }

    #[test]
    fn equality_holds_for_any_pair() {
        assert_eq!(
            call("==", &[target("knot.a"), target("knot.a")]).unwrap(),
            Value::int(1)
        );
        assert_eq!(
            call("==", &[target("knot.a"), target("other")]).unwrap(),
            Value::int(1)
        );
    }

    #[test]
    fn only_equality_is_defined() {
        assert_eq!(
            error_kind("!=", &[target("a"), target("b")]),
            EvalErrorKind::UnsupportedOperation {
                name: "!=".to_string(),
                kind: ValueKind::DivertTarget,
            }
        );
    }

    #[test]
    fn other_kinds_cannot_become_targets() {
        assert_eq!(
            error_kind("==", &[Value::int(1), target("a")]),
            EvalErrorKind::InvalidCast {
                from: ValueKind::Int,
                to: ValueKind::DivertTarget,
            }
        );
    }
}

mod call_shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arity_mismatch() {
        let err = call("_", &[Value::int(1), Value::int(2)]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "_".to_string(),
                expected: 1,
                got: 2,
            }
        );
        assert_eq!(err.message, "operator '_' expects 1 argument, got 2");
        assert!(call("+", &[Value::int(1)]).is_err());
        assert!(call("+", &[]).is_err());
    }

    #[test]
    fn void_operand() {
        assert_eq!(
            error_kind("+", &[Value::int(1), Value::Void]),
            EvalErrorKind::VoidOperand
        );
        assert_eq!(error_kind("!", &[Value::Void]), EvalErrorKind::VoidOperand);
    }

    #[test]
    fn arity_is_checked_before_void() {
        assert!(matches!(
            error_kind("!", &[Value::Void, Value::Void]),
            EvalErrorKind::ArityMismatch { .. }
        ));
    }

    #[test]
    fn unknown_name_gives_unbound_call() {
        assert!(!call_exists_with_name("POW"));
        let pow = call_with_name("POW");
        assert_eq!(pow.name(), "POW");
        assert_eq!(pow.op(), None);
        assert_eq!(pow.arity(), None);
        let err = pow.call(&[Value::int(2), Value::int(3)]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UnknownOperator {
                name: "POW".to_string()
            }
        );
    }

    #[test]
    fn known_name_binds() {
        assert!(call_exists_with_name("SET_COUNT"));
        let call = call_with_name("SET_COUNT");
        assert_eq!(call.op(), Some(NativeOp::SetCount));
        assert_eq!(call.arity(), Some(1));
        assert_eq!(call, NativeFunctionCall::from_op(NativeOp::SetCount));
    }

    #[test]
    fn display() {
        assert_eq!(call_with_name("+").to_string(), "Native '+'");
        assert_eq!(
            NativeFunctionCall::from_op(NativeOp::Negate).to_string(),
            "Native '_'"
        );
    }

    #[test]
    fn call_sites_are_reusable() {
        let add = call_with_name("+");
        assert_eq!(add.call(&[Value::int(1), Value::int(1)]).unwrap(), Value::int(2));
        assert_eq!(add.call(&[Value::int(2), Value::int(2)]).unwrap(), Value::int(4));
    }
}
