//! Algorithm case names such as `Ja` or `U2 + Ja`
//!
//! Combined names are flattened on construction, so a name is always a
//! non-empty list of simple names and its raw data never needs brackets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Joins the simple names of a combined name
pub const ALG_NAME_SEPARATOR: &str = " + ";

const FORBIDDEN: [char; 2] = ['(', ')'];

/// Name of an algorithm case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlgName {
    names: Vec<String>,
}

impl AlgName {
    /// A simple name, e.g. `Ja`
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if the name is blank, contains the ` + ` separator
    /// or a bracket, or ends in ` +`.
    pub fn simple(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::check_simple(&name)?;
        Ok(AlgName { names: vec![name] })
    }

    /// Several names performed one after the other
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if `parts` is empty.
    pub fn combined(parts: Vec<AlgName>) -> Result<Self> {
        if parts.is_empty() {
            return Err(Error::malformed("AlgName", "combined name without parts"));
        }
        let names = parts.into_iter().flat_map(|p| p.names).collect();
        Ok(AlgName { names })
    }

    /// This name followed by `other`
    pub fn plus(&self, other: &AlgName) -> AlgName {
        let mut names = self.names.clone();
        names.extend(other.names.iter().cloned());
        AlgName { names }
    }

    /// Whether this name is made of more than one simple name
    pub fn is_combined(&self) -> bool {
        self.names.len() > 1
    }

    /// Simple names in order
    pub fn simple_names(&self) -> &[String] {
        &self.names
    }

    /// Raw data, e.g. `U2 + Ja`
    pub fn to_raw_data(&self) -> String {
        self.names.join(ALG_NAME_SEPARATOR)
    }

    /// Parse raw data produced by [`AlgName::to_raw_data`]
    ///
    /// Bracketed sub names are not supported.
    pub fn from_raw_data(raw: &str) -> Result<Self> {
        let names = raw
            .split(ALG_NAME_SEPARATOR)
            .map(|name| Self::check_simple(name).map(|_| name.to_string()))
            .collect::<Result<Vec<_>>>()?;
        Ok(AlgName { names })
    }

    fn check_simple(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::malformed("AlgName", "blank name"));
        }
        // A trailing " +" would merge with the following separator.
        if name.contains(ALG_NAME_SEPARATOR) || name.ends_with(" +") {
            return Err(Error::malformed(
                "AlgName",
                format!("{:?} contains the separator {:?}", name, ALG_NAME_SEPARATOR),
            ));
        }
        if name.contains(&FORBIDDEN[..]) {
            return Err(Error::malformed(
                "AlgName",
                format!("{:?} contains a reserved character", name),
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for AlgName {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        AlgName::from_raw_data(&raw)
    }
}

impl From<AlgName> for String {
    fn from(name: AlgName) -> Self {
        name.to_raw_data()
    }
}

impl fmt::Display for AlgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw_data())
    }
}
