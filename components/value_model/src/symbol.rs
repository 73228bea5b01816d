//! Unique symbol tokens.
//!
//! A symbol is identified only by the id it receives at creation time. Two
//! symbols with the same description are still distinct values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique, immutable token value.
///
/// # Examples
///
/// ```
/// use value_model::Symbol;
///
/// let a = Symbol::new(Some("key"));
/// let b = Symbol::new(Some("key"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// assert_eq!(a.to_string(), "Symbol(key)");
/// ```
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Create a new unique symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed);
        Symbol {
            id,
            description: description.map(str::to_string),
        }
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Renders as `Symbol(description)`, or `Symbol()` without one.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
