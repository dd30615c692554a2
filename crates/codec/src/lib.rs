//! Value codecs for the cube trainer
//!
//! Each codec converts one domain value type to and from a flat string that
//! fits in a single text column:
//! - PrimitiveCodec: tokens stored verbatim
//! - PartCodec: `Edge(UF)`
//! - CaseCodec: `Edge(UF UB DF):Corner(URF UBR)` or `Scramble:R U`
//! - TaggedUnionCodec: `<VariantTag>:<payload>`
//! - CodecRegistry: column type name to codec
//!
//! Codecs are immutable after construction and safe to share across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod config;
pub mod part;
pub mod primitive;
pub mod registry;
pub mod tagged;
pub mod traits;

pub use case::{CaseCodec, LEGACY_CASE_MARKER, SCRAMBLE_MARKER};
pub use config::{CodecConfig, CONFIG_FILE_NAME};
pub use part::PartCodec;
pub use primitive::PrimitiveCodec;
pub use registry::CodecRegistry;
pub use tagged::TaggedUnionCodec;
pub use traits::{Codec, DynCodec};
