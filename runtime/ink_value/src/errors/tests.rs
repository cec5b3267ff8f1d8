use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_message_matches_kind() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.message, "division by zero");
    assert_eq!(err.to_string(), err.kind.to_string());
}

#[test]
fn test_arity_message_pluralises() {
    assert_eq!(
        arity_mismatch("_", 1, 2).message,
        "operator '_' expects 1 argument, got 2"
    );
    assert_eq!(
        arity_mismatch("+", 2, 1).message,
        "operator '+' expects 2 arguments, got 1"
    );
}

#[test]
fn test_unsupported_names_kind() {
    let err = unsupported_operation("-", ValueKind::String);
    assert_eq!(err.message, "cannot perform operation '-' on String");
}

#[test]
fn test_coercion_family() {
    assert!(invalid_cast(ValueKind::String, ValueKind::Int)
        .kind
        .is_coercion_failure());
    assert!(ambiguous_set_origin().kind.is_coercion_failure());
    assert!(no_set_item_with_value(7, "Weekday")
        .kind
        .is_coercion_failure());
    assert!(set_mixed_with(ValueKind::Float).kind.is_coercion_failure());
    assert!(!division_by_zero().kind.is_coercion_failure());
}

#[test]
fn test_arithmetic_domain_family() {
    assert!(division_by_zero().kind.is_arithmetic_domain());
    assert!(modulo_by_zero().kind.is_arithmetic_domain());
    assert!(!void_operand().kind.is_arithmetic_domain());
}

#[test]
fn test_from_kind() {
    let err: EvalError = EvalErrorKind::UnknownOperator {
        name: "POW".to_string(),
    }
    .into();
    assert_eq!(err.message, "no native operator named 'POW'");
    assert_eq!(unknown_operator("POW"), err);
}

#[test]
fn test_void_operand_guides_author() {
    assert!(void_operand().message.contains("'return' a value"));
}
