//! Cases
//!
//! A [`Case`] is the abstract puzzle situation a user practices, independent
//! of its solution: one 3-cycle, one parity, one twist, or one scramble.
//!
//! - `Case::PartCycles`: a non-empty ordered sequence of part cycles
//! - `Case::Scramble`: an opaque algorithm string

use crate::error::{Error, Result};
use crate::part_cycle::PartCycle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sequence of moves that randomizes the puzzle, kept as its raw string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scramble {
    algorithm: String,
}

impl Scramble {
    /// Create a scramble from its algorithm string
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if the algorithm is empty or only whitespace.
    pub fn new(algorithm: impl Into<String>) -> Result<Self> {
        let algorithm = algorithm.into();
        if algorithm.trim().is_empty() {
            return Err(Error::malformed("Scramble", "empty algorithm"));
        }
        Ok(Scramble { algorithm })
    }

    /// The algorithm string, exactly as given
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Move tokens of the algorithm
    pub fn moves(&self) -> impl Iterator<Item = &str> {
        self.algorithm.split_whitespace()
    }
}

impl TryFrom<String> for Scramble {
    type Error = Error;

    fn try_from(algorithm: String) -> Result<Self> {
        Scramble::new(algorithm)
    }
}

impl From<Scramble> for String {
    fn from(scramble: Scramble) -> Self {
        scramble.algorithm
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.algorithm)
    }
}

/// Non-empty ordered sequence of part cycles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PartCycle>", into = "Vec<PartCycle>")]
pub struct PartCycles(Vec<PartCycle>);

impl PartCycles {
    /// Create a cycle sequence
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if `cycles` is empty.
    pub fn new(cycles: Vec<PartCycle>) -> Result<Self> {
        if cycles.is_empty() {
            return Err(Error::malformed("Case", "a case needs at least one part cycle"));
        }
        Ok(PartCycles(cycles))
    }

    /// Cycles in order
    pub fn cycles(&self) -> &[PartCycle] {
        &self.0
    }

    /// Number of cycles
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; sequences are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner cycles
    pub fn into_inner(self) -> Vec<PartCycle> {
        self.0
    }
}

impl TryFrom<Vec<PartCycle>> for PartCycles {
    type Error = Error;

    fn try_from(cycles: Vec<PartCycle>) -> Result<Self> {
        PartCycles::new(cycles)
    }
}

impl From<PartCycles> for Vec<PartCycle> {
    fn from(cycles: PartCycles) -> Self {
        cycles.0
    }
}

/// A practicable puzzle case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    /// One or more part cycles applied together
    PartCycles(PartCycles),
    /// A full scramble
    Scramble(Scramble),
}

impl Case {
    /// Case made of the given part cycles
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if `cycles` is empty.
    pub fn from_cycles(cycles: Vec<PartCycle>) -> Result<Self> {
        PartCycles::new(cycles).map(Case::PartCycles)
    }

    /// Case made of a scramble
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if the algorithm is empty.
    pub fn scramble(algorithm: impl Into<String>) -> Result<Self> {
        Scramble::new(algorithm).map(Case::Scramble)
    }

    /// Part cycles, if this is a cycle case
    pub fn part_cycles(&self) -> Option<&[PartCycle]> {
        match self {
            Case::PartCycles(cycles) => Some(cycles.cycles()),
            Case::Scramble(_) => None,
        }
    }

    /// Scramble, if this is a scramble case
    pub fn as_scramble(&self) -> Option<&Scramble> {
        match self {
            Case::Scramble(scramble) => Some(scramble),
            Case::PartCycles(_) => None,
        }
    }

    /// Variant name, for diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            Case::PartCycles(_) => "PartCycles",
            Case::Scramble(_) => "Scramble",
        }
    }
}

impl From<Scramble> for Case {
    fn from(scramble: Scramble) -> Self {
        Case::Scramble(scramble)
    }
}

impl From<PartCycles> for Case {
    fn from(cycles: PartCycles) -> Self {
        Case::PartCycles(cycles)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::PartCycles(cycles) => {
                let rendered: Vec<String> =
                    cycles.cycles().iter().map(|c| c.to_string()).collect();
                write!(f, "{}", rendered.join(", "))
            }
            Case::Scramble(scramble) => write!(f, "{}", scramble),
        }
    }
}
