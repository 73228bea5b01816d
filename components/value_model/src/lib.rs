//! JavaScript value model.
//!
//! This crate provides the closed set of values a script can observe, with
//! enough structure to answer questions about their category: `typeof`,
//! constructor names, the internal `[object Tag]` string, and boxing.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`Symbol`] - Unique symbol tokens
//! - [`ObjectKind`] - Direct type of an object (plain, array, class instance, ...)
//! - [`FunctionKind`] - Declared execution mode of a function
//!
//! # Examples
//!
//! ```
//! use value_model::{FunctionKind, Value};
//!
//! let num = Value::Smi(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//! assert_eq!(num.constructor_name(), Some("Number"));
//!
//! let fetch = Value::function(Some("fetch"), FunctionKind::Async);
//! assert_eq!(fetch.to_string_tag(), "[object AsyncFunction]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod function;
mod object;
mod symbol;
mod value;

pub use function::{FunctionData, FunctionKind};
pub use object::{ObjectData, ObjectKind, Primitive};
pub use symbol::Symbol;
pub use value::Value;
