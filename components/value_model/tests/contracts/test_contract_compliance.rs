//! Contract compliance tests for value_model
//!
//! These tests pin the public surface the classifier relies on.

use value_model::{FunctionKind, ObjectKind, Primitive, Symbol, Value};

#[cfg(test)]
mod value_contract_tests {
    use super::*;

    /// Contract: Value enum must have all specified variants
    #[test]
    fn test_value_has_all_variants() {
        let _: Value = Value::Undefined;
        let _: Value = Value::Null;
        let _: Value = Value::Boolean(true);
        let _: Value = Value::Smi(i32::MIN);
        let _: Value = Value::Double(f64::NAN);
        let _: Value = Value::BigInt(0.into());
        let _: Value = Value::String(String::new());
        let _: Value = Value::Symbol(Symbol::new(None));
        let _: Value = Value::object();
        let _: Value = Value::function(None, FunctionKind::Normal);
    }

    /// Contract: type_of returns one of the eight typeof strings
    #[test]
    fn test_type_of_is_closed() {
        let allowed = [
            "undefined", "object", "boolean", "number", "bigint", "string", "symbol", "function",
        ];
        let values = [
            Value::Undefined,
            Value::Null,
            Value::Boolean(false),
            Value::Smi(0),
            Value::Double(0.5),
            Value::bigint(1),
            Value::string("s"),
            Value::symbol(None),
            Value::object(),
            Value::function(None, FunctionKind::Class),
        ];
        for val in &values {
            assert!(allowed.contains(&val.type_of()), "{:?}", val);
        }
    }

    /// Contract: clones of reference values keep identity
    #[test]
    fn test_clone_preserves_identity() {
        let obj = Value::object();
        let copy = obj.clone();
        assert!(obj.strict_equals(&copy));
        assert_eq!(obj, copy);
    }

    /// Contract: to_object always yields an object or function
    #[test]
    fn test_to_object_always_object() {
        let values = [
            Value::Undefined,
            Value::Null,
            Value::Smi(3),
            Value::string("x"),
            Value::function(None, FunctionKind::Arrow),
        ];
        for val in &values {
            assert!(matches!(
                val.to_object(),
                Value::Object(_) | Value::Function(_)
            ));
        }
    }

    /// Contract: only undefined and null lack a constructor
    #[test]
    fn test_constructor_name_presence() {
        assert!(Value::Undefined.constructor_name().is_none());
        assert!(Value::Null.constructor_name().is_none());
        assert!(Value::Boolean(true).constructor_name().is_some());
        assert!(Value::object_of_kind(ObjectKind::Boxed(Primitive::Number(1.0)))
            .constructor_name()
            .is_some());
    }
}
