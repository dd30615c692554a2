//! Input representations
//!
//! What a training session shows the user for one item: letters, an
//! algorithm name, or a scramble. Stored as a tagged union:
//!
//! | Tag | Example |
//! |-----|---------|
//! | `LetterPair` | `LetterPair:ab` |
//! | `PaoLetterPair` | `PaoLetterPair:person:ab` |
//! | `AlgName` | `AlgName:U2 + Ja` |
//! | `LetterPairSequence` | `LetterPairSequence:ab cd` |
//! | `Scramble` | `Scramble:R U R' U'` |

use crate::alg_name::AlgName;
use crate::case::Scramble;
use crate::error::Result;
use crate::letters::{LetterPair, LetterPairSequence, PaoLetterPair};
use crate::tagged::{TaggedUnion, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The prompt shown for one training item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputRepresentation {
    /// Plain letters
    LetterPair(LetterPair),
    /// Letters in a person/action/object slot
    PaoLetterPair(PaoLetterPair),
    /// Name of an algorithm case
    AlgName(AlgName),
    /// Several letter pairs
    LetterPairSequence(LetterPairSequence),
    /// A scramble to execute
    Scramble(Scramble),
}

fn letter_pair(raw: &str) -> Result<InputRepresentation> {
    LetterPair::from_raw_data(raw).map(InputRepresentation::LetterPair)
}

fn pao_letter_pair(raw: &str) -> Result<InputRepresentation> {
    PaoLetterPair::from_raw_data(raw).map(InputRepresentation::PaoLetterPair)
}

fn alg_name(raw: &str) -> Result<InputRepresentation> {
    AlgName::from_raw_data(raw).map(InputRepresentation::AlgName)
}

fn letter_pair_sequence(raw: &str) -> Result<InputRepresentation> {
    LetterPairSequence::from_raw_data(raw).map(InputRepresentation::LetterPairSequence)
}

fn scramble(raw: &str) -> Result<InputRepresentation> {
    Scramble::new(raw).map(InputRepresentation::Scramble)
}

impl TaggedUnion for InputRepresentation {
    const UNION_NAME: &'static str = "InputRepresentation";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant {
            tag: "LetterPair",
            from_raw_data: letter_pair,
        },
        Variant {
            tag: "PaoLetterPair",
            from_raw_data: pao_letter_pair,
        },
        Variant {
            tag: "AlgName",
            from_raw_data: alg_name,
        },
        Variant {
            tag: "LetterPairSequence",
            from_raw_data: letter_pair_sequence,
        },
        Variant {
            tag: "Scramble",
            from_raw_data: scramble,
        },
    ];

    fn tag(&self) -> &'static str {
        match self {
            InputRepresentation::LetterPair(_) => "LetterPair",
            InputRepresentation::PaoLetterPair(_) => "PaoLetterPair",
            InputRepresentation::AlgName(_) => "AlgName",
            InputRepresentation::LetterPairSequence(_) => "LetterPairSequence",
            InputRepresentation::Scramble(_) => "Scramble",
        }
    }

    fn to_raw_data(&self) -> Result<String> {
        Ok(match self {
            InputRepresentation::LetterPair(lp) => lp.to_raw_data(),
            InputRepresentation::PaoLetterPair(pao) => pao.to_raw_data(),
            InputRepresentation::AlgName(name) => name.to_raw_data(),
            InputRepresentation::LetterPairSequence(seq) => seq.to_raw_data(),
            InputRepresentation::Scramble(scramble) => scramble.algorithm().to_string(),
        })
    }
}

impl fmt::Display for InputRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRepresentation::LetterPair(lp) => write!(f, "{}", lp),
            InputRepresentation::PaoLetterPair(pao) => write!(f, "{}", pao),
            InputRepresentation::AlgName(name) => write!(f, "{}", name),
            InputRepresentation::LetterPairSequence(seq) => write!(f, "{}", seq),
            InputRepresentation::Scramble(scramble) => write!(f, "{}", scramble),
        }
    }
}
