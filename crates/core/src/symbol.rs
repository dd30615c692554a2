//! Symbol-like tokens stored verbatim

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An interned-style identifier such as a mode name or a color
///
/// Any string is a valid symbol; the primitive codec stores it as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol
    pub fn new(token: impl Into<String>) -> Self {
        Symbol(token.into())
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the symbol and return its text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Symbol {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
