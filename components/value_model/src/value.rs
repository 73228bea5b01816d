//! JavaScript value representation as a closed tagged union.
//!
//! Every value a script can observe falls into exactly one [`Value`] variant.
//! Primitives are stored inline; objects and functions are shared references
//! whose identity is the `Rc` allocation.

use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::rc::Rc;

use crate::function::{FunctionData, FunctionKind};
use crate::object::{ObjectData, ObjectKind, Primitive};
use crate::Symbol;

/// Represents any JavaScript value.
///
/// # Examples
///
/// ```
/// use value_model::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// JavaScript string value
    String(String),
    /// JavaScript symbol value
    Symbol(Symbol),
    /// Object reference
    Object(Rc<ObjectData>),
    /// Function reference
    Function(Rc<FunctionData>),
}

impl Value {
    /// Create a number value
    pub fn number(n: f64) -> Self {
        Value::Double(n)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a bigint value
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    /// Create a fresh symbol value
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Create an empty plain object (`{}`)
    pub fn object() -> Self {
        Value::object_of_kind(ObjectKind::Plain)
    }

    /// Create a plain object with the given properties
    pub fn object_from<K: Into<String>>(properties: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut data = ObjectData::new(ObjectKind::Plain);
        data.properties = properties.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Object(Rc::new(data))
    }

    /// Create an empty object of a given kind (`new Map()`, `new Date()`, ...)
    pub fn object_of_kind(kind: ObjectKind) -> Self {
        Value::Object(Rc::new(ObjectData::new(kind)))
    }

    /// Create an array from elements
    pub fn array(elements: Vec<Value>) -> Self {
        let mut data = ObjectData::new(ObjectKind::Array);
        data.elements = elements;
        Value::Object(Rc::new(data))
    }

    /// Create an instance of a user-defined class
    pub fn instance<K: Into<String>>(
        class_name: &str,
        properties: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        let mut data = ObjectData::new(ObjectKind::Instance(class_name.to_string()));
        data.properties = properties.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Object(Rc::new(data))
    }

    /// Create a function value
    pub fn function(name: Option<&str>, kind: FunctionKind) -> Self {
        Value::Function(Rc::new(FunctionData::new(name, kind)))
    }

    /// Returns the object data if this is an object
    pub fn as_object(&self) -> Option<&ObjectData> {
        match self {
            Value::Object(obj) => Some(obj.as_ref()),
            _ => None,
        }
    }

    /// Returns the function data if this is a function
    pub fn as_function(&self) -> Option<&FunctionData> {
        match self {
            Value::Function(func) => Some(func.as_ref()),
            _ => None,
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// In JavaScript, the following values are falsy:
    /// - undefined
    /// - null
    /// - false
    /// - 0 (including -0) and 0n
    /// - NaN
    /// - "" (empty string)
    ///
    /// All other values are truthy, including all objects and functions.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_model::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    /// assert!(!Value::string("").is_truthy());
    /// assert!(Value::object().is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Returns the JavaScript `typeof` result for this value.
    ///
    /// `typeof null` is `"object"`, a historical quirk of the language.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_model::{FunctionKind, Value};
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Smi(1).type_of(), "number");
    /// assert_eq!(Value::function(None, FunctionKind::Async).type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Strict equality (`===`).
    ///
    /// NaN is not equal to anything, `0 === -0`, and objects and functions
    /// compare by identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_model::Value;
    ///
    /// assert!(Value::Smi(1).strict_equals(&Value::Double(1.0)));
    /// assert!(!Value::Double(f64::NAN).strict_equals(&Value::Double(f64::NAN)));
    ///
    /// let obj = Value::object();
    /// assert!(obj.strict_equals(&obj.clone()));
    /// assert!(!obj.strict_equals(&Value::object()));
    /// ```
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            (Value::Smi(a), Value::Double(b)) | (Value::Double(b), Value::Smi(a)) => {
                f64::from(*a) == *b
            }
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Converts the value to an object, as `Object(value)` does.
    ///
    /// - undefined and null produce a new empty plain object
    /// - primitives produce a new wrapper object
    /// - objects and functions are returned unchanged (same reference)
    pub fn to_object(&self) -> Value {
        let primitive = match self {
            Value::Undefined | Value::Null => return Value::object(),
            Value::Object(_) | Value::Function(_) => return self.clone(),
            Value::Boolean(b) => Primitive::Boolean(*b),
            Value::Smi(n) => Primitive::Number(f64::from(*n)),
            Value::Double(n) => Primitive::Number(*n),
            Value::BigInt(n) => Primitive::BigInt(n.clone()),
            Value::String(s) => Primitive::String(s.clone()),
            Value::Symbol(sym) => Primitive::Symbol(sym.clone()),
        };
        trace!("boxing {} primitive", self.type_of());
        Value::object_of_kind(ObjectKind::Boxed(primitive))
    }

    /// Name of the function that constructed this value (`value.constructor.name`).
    ///
    /// Primitives report the constructor of their wrapper type. Undefined and
    /// null have no constructor.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_model::Value;
    ///
    /// assert_eq!(Value::Smi(5).constructor_name(), Some("Number"));
    /// assert_eq!(Value::array(vec![]).constructor_name(), Some("Array"));
    /// assert_eq!(Value::Null.constructor_name(), None);
    /// ```
    pub fn constructor_name(&self) -> Option<&str> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some("Boolean"),
            Value::Smi(_) | Value::Double(_) => Some("Number"),
            Value::BigInt(_) => Some("BigInt"),
            Value::String(_) => Some("String"),
            Value::Symbol(_) => Some("Symbol"),
            Value::Object(obj) => Some(obj.kind.constructor_name()),
            Value::Function(func) => Some(func.kind.constructor_name()),
        }
    }

    /// The internal tag string, as `Object.prototype.toString.call(value)` returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_model::{FunctionKind, Value};
    ///
    /// assert_eq!(Value::Undefined.to_string_tag(), "[object Undefined]");
    /// assert_eq!(
    ///     Value::function(None, FunctionKind::Generator).to_string_tag(),
    ///     "[object GeneratorFunction]"
    /// );
    /// ```
    pub fn to_string_tag(&self) -> String {
        let tag = match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Object(obj) => obj.kind.builtin_tag(),
            Value::Function(func) => func.kind.constructor_name(),
            // Primitives are boxed first; the wrapper carries the same name.
            other => other.constructor_name().unwrap_or("Object"),
        };
        format!("[object {}]", tag)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Smi(n) => f.debug_tuple("Smi").field(n).finish(),
            Value::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(sym) => f.debug_tuple("Symbol").field(&sym.description()).finish(),
            Value::Object(obj) => f.debug_tuple("Object").field(&obj.kind).finish(),
            Value::Function(func) => f
                .debug_tuple("Function")
                .field(&func.name())
                .field(&func.kind)
                .finish(),
        }
    }
}

/// Equality within one representation: `Smi(1)` and `Double(1.0)` differ
/// here even though they are strictly equal. Reference values compare by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Smi(_), Value::Double(_)) | (Value::Double(_), Value::Smi(_)) => false,
            _ => self.strict_equals(other),
        }
    }
}

/// JavaScript `String()` conversion (simplified for regexps and dates,
/// which print their `[object Tag]`).
///
/// # Examples
///
/// ```
/// use value_model::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Double(42.0).to_string(), "42");
/// assert_eq!(Value::bigint(7).to_string(), "7");
/// assert_eq!(Value::array(vec![Value::Smi(1), Value::Null]).to_string(), "1,");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => fmt_number(*n, f),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Object(obj) => match &obj.kind {
                ObjectKind::Array => {
                    for (i, element) in obj.elements.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        match element {
                            Value::Undefined | Value::Null => {}
                            other => write!(f, "{}", other)?,
                        }
                    }
                    Ok(())
                }
                ObjectKind::Boxed(primitive) => write!(f, "{}", primitive.to_value()),
                ObjectKind::Error => {
                    let message = match obj.get("message") {
                        None | Some(Value::Undefined) => String::new(),
                        Some(message) => message.to_string(),
                    };
                    if message.is_empty() {
                        write!(f, "Error")
                    } else {
                        write!(f, "Error: {}", message)
                    }
                }
                // Regexps and dates keep no source or time value here.
                kind => write!(f, "[object {}]", kind.builtin_tag()),
            },
            Value::Function(func) => write!(f, "{}", func),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "NaN");
    }
    if n == 0.0 {
        return write!(f, "0");
    }
    if n < 0.0 {
        write!(f, "-")?;
    }
    let n = n.abs();
    if n.is_infinite() {
        return write!(f, "Infinity");
    }

    // Shortest round-trip digits and exponent, e.g. "1.25e-7".
    let sci = format!("{:e}", n);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exp + 1;

    if k <= point && point <= 21 {
        write!(f, "{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if point - 1 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            write!(f, "{}e{}{}", lead, sign, (point - 1).abs())
        } else {
            write!(f, "{}.{}e{}{}", lead, rest, sign, (point - 1).abs())
        }
    }
}
