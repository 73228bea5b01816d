//! Type names derived from a value's constructor.

use log::trace;
use value_model::{ObjectKind, Value};

use crate::predicates::{is_nil, is_undefined};

/// Returns the type name of a value.
///
/// `"undefined"` and `"null"` for the two nil values, otherwise the name of
/// the value's constructor.
///
/// # Examples
///
/// ```
/// use type_checks::{get_type, Value};
///
/// assert_eq!(get_type(&Value::Undefined), "undefined");
/// assert_eq!(get_type(&Value::Null), "null");
/// assert_eq!(get_type(&Value::Smi(5)), "Number");
/// assert_eq!(get_type(&Value::string("a")), "String");
/// assert_eq!(get_type(&Value::array(vec![])), "Array");
/// ```
pub fn get_type(val: &Value) -> &str {
    match val {
        Value::Undefined => "undefined",
        Value::Null => "null",
        Value::Object(obj) => {
            if let ObjectKind::Instance(class_name) = &obj.kind {
                trace!("type of class instance resolved to {}", class_name);
            }
            obj.kind.constructor_name()
        }
        other => other.constructor_name().unwrap_or("Object"),
    }
}

/// Returns `true` if the value's type name equals `type_name`.
///
/// Nil values match their own label (`"undefined"` or `"null"`); every other
/// value matches the name of its constructor.
///
/// # Examples
///
/// ```
/// use type_checks::{is_of_type, Value};
///
/// assert!(is_of_type("undefined", &Value::Undefined));
/// assert!(is_of_type("Number", &Value::Smi(5)));
/// assert!(!is_of_type("String", &Value::Smi(5)));
/// ```
pub fn is_of_type(type_name: &str, val: &Value) -> bool {
    if is_nil(val) {
        let label = if is_undefined(val) { "undefined" } else { "null" };
        trace!("nil value compared by label {}", label);
        return label == type_name;
    }
    val.constructor_name() == Some(type_name)
}
