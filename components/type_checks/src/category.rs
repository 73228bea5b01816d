//! The `typeof` categories as a typed label.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use value_model::Value;

/// Error returned when parsing an unknown category label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCategoryError {
    /// The label is not one of the `typeof` results
    #[error("unknown type category: {0:?}")]
    Unknown(String),
}

/// One of the results of the `typeof` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TypeCategory {
    /// `undefined`
    Undefined,
    /// `object`, which includes `null`
    Object,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `bigint`
    BigInt,
    /// `string`
    String,
    /// `symbol`
    Symbol,
    /// `function`
    Function,
}

impl TypeCategory {
    /// All categories, in `typeof` table order
    pub const ALL: [TypeCategory; 8] = [
        TypeCategory::Undefined,
        TypeCategory::Object,
        TypeCategory::Boolean,
        TypeCategory::Number,
        TypeCategory::BigInt,
        TypeCategory::String,
        TypeCategory::Symbol,
        TypeCategory::Function,
    ];

    /// The label `typeof` produces for this category
    pub fn as_str(self) -> &'static str {
        match self {
            TypeCategory::Undefined => "undefined",
            TypeCategory::Object => "object",
            TypeCategory::Boolean => "boolean",
            TypeCategory::Number => "number",
            TypeCategory::BigInt => "bigint",
            TypeCategory::String => "string",
            TypeCategory::Symbol => "symbol",
            TypeCategory::Function => "function",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError::Unknown(s.to_string()))
    }
}

/// Returns the `typeof` category of a value.
///
/// ```
/// use type_checks::{category_of, TypeCategory, Value};
///
/// assert_eq!(category_of(&Value::Null), TypeCategory::Object);
/// assert_eq!(category_of(&Value::bigint(3)), TypeCategory::BigInt);
/// ```
pub fn category_of(val: &Value) -> TypeCategory {
    match val {
        Value::Undefined => TypeCategory::Undefined,
        Value::Null | Value::Object(_) => TypeCategory::Object,
        Value::Boolean(_) => TypeCategory::Boolean,
        Value::Smi(_) | Value::Double(_) => TypeCategory::Number,
        Value::BigInt(_) => TypeCategory::BigInt,
        Value::String(_) => TypeCategory::String,
        Value::Symbol(_) => TypeCategory::Symbol,
        Value::Function(_) => TypeCategory::Function,
    }
}
