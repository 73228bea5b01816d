//! Category predicates.
//!
//! Each predicate is total: it accepts any [`Value`] and answers with a plain
//! `bool`.

use value_model::{ObjectKind, Value};

const ASYNC_FUNCTION_TAG: &str = "[object AsyncFunction]";
const GENERATOR_FUNCTION_TAG: &str = "[object GeneratorFunction]";
const ASYNC_GENERATOR_FUNCTION_TAG: &str = "[object AsyncGeneratorFunction]";

/// Returns `true` if the value is `undefined`.
pub fn is_undefined(val: &Value) -> bool {
    matches!(val, Value::Undefined)
}

/// Returns `true` if the value is `null`.
pub fn is_null(val: &Value) -> bool {
    matches!(val, Value::Null)
}

/// Returns `true` if the value is `undefined` or `null`.
pub fn is_nil(val: &Value) -> bool {
    is_undefined(val) || is_null(val)
}

/// Returns `true` if the value is `true` or `false`.
pub fn is_boolean(val: &Value) -> bool {
    val.type_of() == "boolean"
}

/// Returns `true` if the value is a number other than NaN.
///
/// Infinities count as numbers. Boxed numbers are objects and do not.
///
/// ```
/// use type_checks::{is_number, Value};
///
/// assert!(is_number(&Value::Smi(42)));
/// assert!(!is_number(&Value::Double(f64::NAN)));
/// assert!(!is_number(&Value::string("42")));
/// ```
pub fn is_number(val: &Value) -> bool {
    match val {
        Value::Smi(_) => true,
        Value::Double(n) => !n.is_nan(),
        _ => false,
    }
}

/// Returns `true` if the value is a bigint.
pub fn is_bigint(val: &Value) -> bool {
    val.type_of() == "bigint"
}

/// Returns `true` if the value is a string.
pub fn is_string(val: &Value) -> bool {
    val.type_of() == "string"
}

/// Returns `true` if the value is a symbol.
pub fn is_symbol(val: &Value) -> bool {
    val.type_of() == "symbol"
}

/// Returns `true` if boxing the value produces a different value.
///
/// That holds for `undefined`, `null`, booleans, numbers, bigints, strings
/// and symbols.
pub fn is_primitive(val: &Value) -> bool {
    !val.to_object().strict_equals(val)
}

/// Returns `true` if boxing the value returns the value itself.
///
/// Objects and functions are objects. `undefined` and `null` are not.
pub fn is_object(val: &Value) -> bool {
    val.to_object().strict_equals(val)
}

/// Returns `true` if the value is callable.
pub fn is_function(val: &Value) -> bool {
    val.type_of() == "function"
}

/// Returns `true` for objects whose constructor is `Object`.
///
/// Arrays, class instances, built-in containers and boxed primitives all
/// have a different constructor and are not plain.
///
/// ```
/// use type_checks::{is_plain_object, Value};
///
/// assert!(is_plain_object(&Value::object()));
/// assert!(!is_plain_object(&Value::array(vec![])));
/// assert!(!is_plain_object(&Value::Null));
/// ```
pub fn is_plain_object(val: &Value) -> bool {
    val.is_truthy()
        && val.type_of() == "object"
        && val
            .as_object()
            .is_some_and(|obj| obj.kind == ObjectKind::Plain)
}

/// Returns `true` for functions declared `async` (but not `async function*`).
pub fn is_async_function(val: &Value) -> bool {
    is_function(val) && val.to_string_tag() == ASYNC_FUNCTION_TAG
}

/// Returns `true` for generator functions (but not `async function*`).
pub fn is_generator_function(val: &Value) -> bool {
    is_function(val) && val.to_string_tag() == GENERATOR_FUNCTION_TAG
}

/// Returns `true` for async generator functions.
pub fn is_async_generator_function(val: &Value) -> bool {
    is_function(val) && val.to_string_tag() == ASYNC_GENERATOR_FUNCTION_TAG
}
