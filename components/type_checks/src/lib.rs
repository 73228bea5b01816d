//! Type classification for JavaScript values.
//!
//! A flat set of total predicates over [`Value`], plus [`get_type`] to derive
//! a value's type name and [`is_of_type`] to compare it with an expected one.
//!
//! # Overview
//!
//! - [`is_undefined`], [`is_null`], [`is_nil`] - the two empty values
//! - [`is_boolean`], [`is_number`], [`is_bigint`], [`is_string`], [`is_symbol`]
//! - [`is_primitive`], [`is_object`], [`is_plain_object`]
//! - [`is_function`], [`is_async_function`], [`is_generator_function`]
//! - [`get_type`], [`is_of_type`] - constructor-based type names
//! - [`TypeCategory`], [`category_of`] - `typeof` as a typed label
//!
//! # Examples
//!
//! ```
//! use type_checks::{get_type, is_plain_object, is_primitive, FunctionKind, Value};
//!
//! assert!(is_primitive(&Value::string("hi")));
//! assert!(is_plain_object(&Value::object()));
//!
//! let empty: [(&str, Value); 0] = [];
//! let user = Value::instance("User", empty);
//! assert!(!is_plain_object(&user));
//! assert_eq!(get_type(&user), "User");
//!
//! let task = Value::function(Some("task"), FunctionKind::Async);
//! assert_eq!(get_type(&task), "AsyncFunction");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod category;
mod predicates;
mod type_name;

pub use category::{category_of, ParseCategoryError, TypeCategory};
pub use predicates::{
    is_async_function, is_async_generator_function, is_bigint, is_boolean, is_function,
    is_generator_function, is_nil, is_null, is_number, is_object, is_plain_object, is_primitive,
    is_string, is_symbol, is_undefined,
};
pub use type_name::{get_type, is_of_type};
pub use value_model::{FunctionKind, ObjectKind, Primitive, Symbol, Value};
