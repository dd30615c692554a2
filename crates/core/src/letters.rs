//! Letter pairs
//!
//! Blindfolded solvers memorize parts as letters. The types here are the
//! inputs a user is prompted with in letter based training sessions:
//!
//! - [`LetterPair`]: one group of letters, raw data `ab`
//! - [`PaoLetterPair`]: a letter pair in a person/action/object slot, raw data `person:ab`
//! - [`LetterPairSequence`]: several letter pairs, raw data `ab cd`

use crate::error::{Error, Result};
use crate::SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

const SEQUENCE_DELIMITER: &str = " ";

/// A group of letters, usually two
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LetterPair {
    letters: Vec<char>,
}

impl LetterPair {
    /// Create a letter pair
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if there are no letters, or a letter is whitespace
    /// or the separator.
    pub fn new(letters: Vec<char>) -> Result<Self> {
        if letters.is_empty() {
            return Err(Error::malformed("LetterPair", "no letters"));
        }
        if let Some(bad) = letters
            .iter()
            .find(|c| c.is_whitespace() || **c == SEPARATOR)
        {
            return Err(Error::malformed(
                "LetterPair",
                format!("invalid letter {:?}", bad),
            ));
        }
        Ok(LetterPair { letters })
    }

    /// Letters in order
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Raw data: the letters concatenated
    pub fn to_raw_data(&self) -> String {
        self.letters.iter().collect()
    }

    /// Parse raw data produced by [`LetterPair::to_raw_data`]
    pub fn from_raw_data(raw: &str) -> Result<Self> {
        LetterPair::new(raw.chars().collect())
    }
}

impl TryFrom<String> for LetterPair {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        LetterPair::from_raw_data(&raw)
    }
}

impl From<LetterPair> for String {
    fn from(pair: LetterPair) -> Self {
        pair.to_raw_data()
    }
}

impl fmt::Display for LetterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw_data())
    }
}

/// Slot of a person/action/object memo system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pao {
    /// Person
    Person,
    /// Action
    Action,
    /// Object
    Object,
}

impl Pao {
    /// All slots
    pub const ALL: [Pao; 3] = [Pao::Person, Pao::Action, Pao::Object];

    /// Lowercase identifier used in raw data
    pub const fn id(&self) -> &'static str {
        match self {
            Pao::Person => "person",
            Pao::Action => "action",
            Pao::Object => "object",
        }
    }

    /// Parse from identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.id() == id)
    }
}

impl fmt::Display for Pao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A letter pair assigned to a person/action/object slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaoLetterPair {
    /// Slot the letter pair is memorized in
    pub pao: Pao,
    /// The letters
    pub letter_pair: LetterPair,
}

impl PaoLetterPair {
    /// Create a PAO letter pair
    pub fn new(pao: Pao, letter_pair: LetterPair) -> Self {
        PaoLetterPair { pao, letter_pair }
    }

    /// Raw data, e.g. `person:ab`
    pub fn to_raw_data(&self) -> String {
        format!("{}{}{}", self.pao.id(), SEPARATOR, self.letter_pair.to_raw_data())
    }

    /// Parse raw data produced by [`PaoLetterPair::to_raw_data`]
    pub fn from_raw_data(raw: &str) -> Result<Self> {
        let (raw_pao, raw_letters) = raw.split_once(SEPARATOR).ok_or_else(|| {
            Error::malformed("PaoLetterPair", format!("missing '{}' in {:?}", SEPARATOR, raw))
        })?;
        let pao = Pao::from_id(raw_pao).ok_or_else(|| {
            Error::malformed("PaoLetterPair", format!("unknown slot {:?}", raw_pao))
        })?;
        Ok(PaoLetterPair::new(pao, LetterPair::from_raw_data(raw_letters)?))
    }
}

impl fmt::Display for PaoLetterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pao, self.letter_pair)
    }
}

/// Several letter pairs memorized together
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<LetterPair>", into = "Vec<LetterPair>")]
pub struct LetterPairSequence {
    letter_pairs: Vec<LetterPair>,
}

impl LetterPairSequence {
    /// Create a sequence
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if the sequence is empty.
    pub fn new(letter_pairs: Vec<LetterPair>) -> Result<Self> {
        if letter_pairs.is_empty() {
            return Err(Error::malformed("LetterPairSequence", "no letter pairs"));
        }
        Ok(LetterPairSequence { letter_pairs })
    }

    /// Letter pairs in order
    pub fn letter_pairs(&self) -> &[LetterPair] {
        &self.letter_pairs
    }

    /// Raw data: the letter pairs separated by spaces
    pub fn to_raw_data(&self) -> String {
        let raw: Vec<String> = self.letter_pairs.iter().map(LetterPair::to_raw_data).collect();
        raw.join(SEQUENCE_DELIMITER)
    }

    /// Parse raw data produced by [`LetterPairSequence::to_raw_data`]
    pub fn from_raw_data(raw: &str) -> Result<Self> {
        let letter_pairs = raw
            .split(SEQUENCE_DELIMITER)
            .map(LetterPair::from_raw_data)
            .collect::<Result<Vec<_>>>()?;
        LetterPairSequence::new(letter_pairs)
    }
}

impl TryFrom<Vec<LetterPair>> for LetterPairSequence {
    type Error = Error;

    fn try_from(letter_pairs: Vec<LetterPair>) -> Result<Self> {
        LetterPairSequence::new(letter_pairs)
    }
}

impl From<LetterPairSequence> for Vec<LetterPair> {
    fn from(sequence: LetterPairSequence) -> Self {
        sequence.letter_pairs
    }
}

impl fmt::Display for LetterPairSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw_data())
    }
}
