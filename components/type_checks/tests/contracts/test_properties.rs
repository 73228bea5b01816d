//! Property tests for the classifier
//!
//! Every value the model can represent is generated, and the relations
//! between predicates are checked on each.

use proptest::prelude::*;
use type_checks::*;

fn arb_kind() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![
        Just(ObjectKind::Plain),
        Just(ObjectKind::Array),
        Just(ObjectKind::Map),
        Just(ObjectKind::Set),
        Just(ObjectKind::WeakMap),
        Just(ObjectKind::WeakSet),
        Just(ObjectKind::Date),
        Just(ObjectKind::RegExp),
        Just(ObjectKind::Error),
        Just(ObjectKind::Promise),
        "[A-Z][a-zA-Z]{0,8}".prop_map(ObjectKind::Instance),
        any::<f64>().prop_map(|n| ObjectKind::Boxed(Primitive::Number(n))),
        ".{0,4}".prop_map(|s| ObjectKind::Boxed(Primitive::String(s))),
    ]
}

fn arb_function_kind() -> impl Strategy<Value = FunctionKind> {
    prop_oneof![
        Just(FunctionKind::Normal),
        Just(FunctionKind::Arrow),
        Just(FunctionKind::Class),
        Just(FunctionKind::Async),
        Just(FunctionKind::Generator),
        Just(FunctionKind::AsyncGenerator),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<i32>().prop_map(Value::Smi),
        any::<f64>().prop_map(Value::Double),
        Just(Value::Double(f64::NAN)),
        any::<i64>().prop_map(|n| Value::bigint(n)),
        ".{0,8}".prop_map(Value::String),
        proptest::option::of("[a-z]{0,6}")
            .prop_map(|desc| Value::symbol(desc.as_deref())),
        arb_kind().prop_map(Value::object_of_kind),
        (proptest::option::of("[a-z]{1,6}"), arb_function_kind())
            .prop_map(|(name, kind)| Value::function(name.as_deref(), kind)),
    ]
}

proptest! {
    /// Property: nil is exactly undefined-or-null, never both
    #[test]
    fn nil_is_undefined_or_null(val in arb_value()) {
        prop_assert_eq!(is_nil(&val), is_undefined(&val) || is_null(&val));
        prop_assert!(!(is_undefined(&val) && is_null(&val)));
    }

    /// Property: primitive and object partition every non-nil value
    #[test]
    fn primitive_is_not_object(val in arb_value()) {
        if is_nil(&val) {
            prop_assert!(is_primitive(&val));
            prop_assert!(!is_object(&val));
        } else {
            prop_assert_eq!(is_primitive(&val), !is_object(&val));
        }
    }

    /// Property: objects are exactly the object and function categories
    #[test]
    fn object_category(val in arb_value()) {
        let category = category_of(&val);
        if is_object(&val) {
            prop_assert!(matches!(category, TypeCategory::Object | TypeCategory::Function));
        }
        prop_assert_eq!(category.as_str(), val.type_of());
    }

    /// Property: boxing always produces an object
    #[test]
    fn boxing_yields_object(val in arb_value()) {
        prop_assert!(is_object(&val.to_object()));
    }

    /// Property: a value is always of its own type
    #[test]
    fn value_is_of_its_own_type(val in arb_value()) {
        let name = get_type(&val).to_string();
        prop_assert!(is_of_type(&name, &val));
    }

    /// Property: async and generator predicates never both hold
    #[test]
    fn async_and_generator_exclusive(val in arb_value()) {
        prop_assert!(!(is_async_function(&val) && is_generator_function(&val)));
        if is_async_function(&val) || is_generator_function(&val) {
            prop_assert!(is_function(&val));
        }
    }

    /// Property: plain objects are objects whose type is Object
    #[test]
    fn plain_object_implies_object_type(val in arb_value()) {
        if is_plain_object(&val) {
            prop_assert!(is_object(&val));
            prop_assert_eq!(get_type(&val), "Object");
        }
    }

    /// Property: exactly one primitive predicate holds for a non-nil primitive
    #[test]
    fn primitive_predicates_are_exclusive(val in arb_value()) {
        let is_nan = matches!(val, Value::Double(n) if n.is_nan());
        if is_primitive(&val) && !is_nil(&val) && !is_nan {
            let hits = [
                is_boolean(&val),
                is_number(&val),
                is_bigint(&val),
                is_string(&val),
                is_symbol(&val),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            prop_assert_eq!(hits, 1);
        }
    }
}
