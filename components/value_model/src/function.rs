//! Callable values and their declared execution mode.

use std::fmt;

/// How a function was declared.
///
/// The kind is fixed when the function is created and decides which
/// constructor the function reports, e.g. `async function` declarations are
/// instances of `AsyncFunction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FunctionKind {
    /// `function f() {}`
    Normal,
    /// `() => {}`
    Arrow,
    /// `class C {}`
    Class,
    /// `async function f() {}` or `async () => {}`
    Async,
    /// `function* f() {}`
    Generator,
    /// `async function* f() {}`
    AsyncGenerator,
}

impl FunctionKind {
    /// Name of the constructor that creates functions of this kind.
    ///
    /// This is also the tag reported by `Object.prototype.toString`.
    pub fn constructor_name(self) -> &'static str {
        match self {
            FunctionKind::Normal | FunctionKind::Arrow | FunctionKind::Class => "Function",
            FunctionKind::Async => "AsyncFunction",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
        }
    }
}

/// Internal function data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionData {
    /// Function name, `None` for anonymous functions
    pub name: Option<String>,
    /// Declared execution mode
    pub kind: FunctionKind,
}

impl FunctionData {
    /// Create function data
    pub fn new(name: Option<&str>, kind: FunctionKind) -> Self {
        FunctionData {
            name: name.map(str::to_string),
            kind,
        }
    }

    /// The function name, empty for anonymous functions
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl fmt::Display for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.kind {
            FunctionKind::Normal | FunctionKind::Arrow => "function",
            FunctionKind::Class => "class",
            FunctionKind::Async => "async function",
            FunctionKind::Generator => "function*",
            FunctionKind::AsyncGenerator => "async function*",
        };
        if self.kind == FunctionKind::Class {
            write!(f, "{} {} {{ }}", keyword, self.name())
        } else {
            write!(f, "{} {}() {{ [native code] }}", keyword, self.name())
        }
    }
}
