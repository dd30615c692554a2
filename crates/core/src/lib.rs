//! Core value types for the cube trainer
//!
//! This crate defines the domain values stored in single text columns and the
//! pieces every codec shares:
//! - Part, PartType: puzzle pieces from a fixed, immutable table
//! - PartCycle, Case, Scramble: cycles of parts, or a full scramble
//! - LetterPair, PaoLetterPair, LetterPairSequence, AlgName: training prompts
//! - InputRepresentation, ConcreteCaseSet: closed tagged unions
//! - Symbol: plain tokens
//! - Value, ColumnValue: the dynamic seam between storage and codecs
//! - Error: typed codec failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alg_name;
pub mod case;
pub mod case_set;
pub mod error;
pub mod input;
pub mod letters;
pub mod part;
pub mod part_cycle;
pub mod symbol;
pub mod tagged;
pub mod value;

/// Reserved character joining the segments of every stored string
pub const SEPARATOR: char = ':';

pub use alg_name::AlgName;
pub use case::{Case, PartCycles, Scramble};
pub use case_set::{
    BufferedParitySet, BufferedParityTwistSet, BufferedThreeCycleSet, BufferedThreeTwistSet,
    ConcreteCaseSet, ConcreteFloatingTwoTwistSet,
};
pub use error::{Error, Result, TagKind};
pub use input::InputRepresentation;
pub use letters::{LetterPair, LetterPairSequence, Pao, PaoLetterPair};
pub use part::{Part, PartType, RESERVED_CHARS, TWIST_MARKER};
pub use part_cycle::PartCycle;
pub use symbol::Symbol;
pub use tagged::{TaggedUnion, Variant};
pub use value::{ColumnValue, Value};
