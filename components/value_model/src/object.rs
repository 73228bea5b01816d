//! Structured values and the kinds that decide their constructor.

use num_bigint::BigInt;

use crate::{Symbol, Value};

/// A primitive held inside a wrapper object, as produced by `Object(5)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Wrapped boolean
    Boolean(bool),
    /// Wrapped number
    Number(f64),
    /// Wrapped bigint
    BigInt(BigInt),
    /// Wrapped string
    String(String),
    /// Wrapped symbol
    Symbol(Symbol),
}

impl Primitive {
    /// Name of the wrapper constructor (`Number` for a boxed number, ...)
    pub fn constructor_name(&self) -> &'static str {
        match self {
            Primitive::Boolean(_) => "Boolean",
            Primitive::Number(_) => "Number",
            Primitive::BigInt(_) => "BigInt",
            Primitive::String(_) => "String",
            Primitive::Symbol(_) => "Symbol",
        }
    }

    /// The unwrapped value (`valueOf`)
    pub fn to_value(&self) -> Value {
        match self {
            Primitive::Boolean(b) => Value::Boolean(*b),
            Primitive::Number(n) => Value::Double(*n),
            Primitive::BigInt(n) => Value::BigInt(n.clone()),
            Primitive::String(s) => Value::String(s.clone()),
            Primitive::Symbol(sym) => Value::Symbol(sym.clone()),
        }
    }
}

/// The direct type of an object.
///
/// Only `Plain` objects have `Object` as their constructor. Every other kind
/// is a built-in container, a class instance, or a primitive wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// `{}` or `new Object()`
    Plain,
    /// `[]`
    Array,
    /// `new Map()`
    Map,
    /// `new Set()`
    Set,
    /// `new WeakMap()`
    WeakMap,
    /// `new WeakSet()`
    WeakSet,
    /// `new Date()`
    Date,
    /// `/re/`
    RegExp,
    /// `new Error()`
    Error,
    /// `new Promise(...)`
    Promise,
    /// `new C()` for a user-defined class `C`
    Instance(String),
    /// `Object(primitive)`
    Boxed(Primitive),
}

impl ObjectKind {
    /// Name of the constructor that created objects of this kind.
    pub fn constructor_name(&self) -> &str {
        match self {
            ObjectKind::Plain => "Object",
            ObjectKind::Array => "Array",
            ObjectKind::Map => "Map",
            ObjectKind::Set => "Set",
            ObjectKind::WeakMap => "WeakMap",
            ObjectKind::WeakSet => "WeakSet",
            ObjectKind::Date => "Date",
            ObjectKind::RegExp => "RegExp",
            ObjectKind::Error => "Error",
            ObjectKind::Promise => "Promise",
            ObjectKind::Instance(class_name) => class_name,
            ObjectKind::Boxed(primitive) => primitive.constructor_name(),
        }
    }

    /// The builtin tag used by `Object.prototype.toString`.
    ///
    /// Class instances have no builtin tag and report `Object`.
    pub fn builtin_tag(&self) -> &'static str {
        match self {
            ObjectKind::Plain | ObjectKind::Instance(_) => "Object",
            ObjectKind::Array => "Array",
            ObjectKind::Map => "Map",
            ObjectKind::Set => "Set",
            ObjectKind::WeakMap => "WeakMap",
            ObjectKind::WeakSet => "WeakSet",
            ObjectKind::Date => "Date",
            ObjectKind::RegExp => "RegExp",
            ObjectKind::Error => "Error",
            ObjectKind::Promise => "Promise",
            ObjectKind::Boxed(primitive) => primitive.constructor_name(),
        }
    }
}

/// Internal object data
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// Direct type of the object
    pub kind: ObjectKind,
    /// Own properties in insertion order
    pub properties: Vec<(String, Value)>,
    /// Indexed elements, used by arrays
    pub elements: Vec<Value>,
}

impl ObjectData {
    /// Create an empty object of the given kind
    pub fn new(kind: ObjectKind) -> Self {
        ObjectData {
            kind,
            properties: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Look up an own property by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}
