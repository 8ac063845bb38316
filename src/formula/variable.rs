//! Propositional variable.

use std::fmt;

/// An identifier atom of a propositional formula.
///
/// Names match `[A-Za-z0-9_]+` as produced by the scanner; the type itself
/// does not re-validate.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable {
    name: String,
}

impl Variable {
    /// Construct a new propositional variable from a given `name`.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self { name: name.into() }
    }

    /// Get the name of the propositional variable.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
