//! Cube Trainer value codecs
//!
//! Stores cube trainer domain values (parts, cases, training prompts, case
//! sets) in single text columns and reads them back, with strict validation
//! in both directions.
//!
//! # Quick Start
//!
//! ```ignore
//! use cube_trainer::{CodecRegistry, Case, Value};
//!
//! let registry = CodecRegistry::global();
//! let codec = registry.lookup("case")?;
//!
//! let case = Value::from(Case::scramble("R U R' U'")?);
//! let raw = codec.encode_value(Some(&case))?;
//! assert_eq!(raw.as_deref(), Some("Scramble:R U R' U'"));
//! ```
//!
//! # Architecture
//!
//! Domain types live in `cube-trainer-core`; codecs, their config and the
//! registry live in `cube-trainer-codec`. Both are re-exported here.

pub use cube_trainer_codec::{
    registry, CaseCodec, Codec, CodecConfig, CodecRegistry, DynCodec, PartCodec, PrimitiveCodec,
    TaggedUnionCodec, CONFIG_FILE_NAME, LEGACY_CASE_MARKER, SCRAMBLE_MARKER,
};
pub use cube_trainer_core::{
    AlgName, BufferedParitySet, BufferedParityTwistSet, BufferedThreeCycleSet,
    BufferedThreeTwistSet, Case, ColumnValue, ConcreteCaseSet, ConcreteFloatingTwoTwistSet,
    Error, InputRepresentation, LetterPair, LetterPairSequence, Pao, PaoLetterPair, Part,
    PartCycle, PartCycles, PartType, Result, Scramble, Symbol, TagKind, TaggedUnion, Value,
    Variant, RESERVED_CHARS, SEPARATOR, TWIST_MARKER,
};
