//! Codec registry
//!
//! Maps a logical column type name to the codec that stores it. The storage
//! layer looks a codec up once per column and calls it at the boundary; the
//! registry itself holds no business logic.
//!
//! ## Standard registry
//!
//! | Name | Codec |
//! |------|-------|
//! | `symbol` | `PrimitiveCodec<Symbol>` |
//! | `part` | `PartCodec` |
//! | `case` | `CaseCodec` |
//! | `input_representation` | `TaggedUnionCodec<InputRepresentation>` |
//! | `concrete_case_set` | `TaggedUnionCodec<ConcreteCaseSet>` |
//!
//! [`CodecRegistry::global`] is the standard registry with the default
//! config, built once on first access and immutable afterwards.

use crate::case::CaseCodec;
use crate::config::CodecConfig;
use crate::part::PartCodec;
use crate::primitive::PrimitiveCodec;
use crate::tagged::TaggedUnionCodec;
use crate::traits::DynCodec;
use cube_trainer_core::{ConcreteCaseSet, Error, InputRepresentation, Result, Symbol};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Registry name of the symbol codec
pub const SYMBOL: &str = "symbol";
/// Registry name of the part codec
pub const PART: &str = "part";
/// Registry name of the case codec
pub const CASE: &str = "case";
/// Registry name of the input representation codec
pub const INPUT_REPRESENTATION: &str = "input_representation";
/// Registry name of the concrete case set codec
pub const CONCRETE_CASE_SET: &str = "concrete_case_set";

static GLOBAL_REGISTRY: Lazy<CodecRegistry> = Lazy::new(|| {
    // Only fails if a built-in variant table is inconsistent.
    CodecRegistry::standard(&CodecConfig::default())
        .expect("standard codec tables are consistent")
});

/// Flat mapping from column type name to codec
#[derive(Default)]
pub struct CodecRegistry {
    codecs: HashMap<String, Box<dyn DynCodec>>,
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard registry built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if a tagged union's variant table is invalid.
    pub fn standard(config: &CodecConfig) -> Result<Self> {
        let blank = config.blank_is_absent;
        let mut registry = CodecRegistry::new();
        registry.register(SYMBOL, PrimitiveCodec::<Symbol>::with_blank_is_absent(blank))?;
        registry.register(PART, PartCodec::new(blank))?;
        registry.register(CASE, CaseCodec::new(config.accept_legacy_case_marker, blank))?;
        registry.register(
            INPUT_REPRESENTATION,
            TaggedUnionCodec::<InputRepresentation>::new(blank)?,
        )?;
        registry.register(
            CONCRETE_CASE_SET,
            TaggedUnionCodec::<ConcreteCaseSet>::new(blank)?,
        )?;
        Ok(registry)
    }

    /// The process-wide standard registry
    pub fn global() -> &'static CodecRegistry {
        &GLOBAL_REGISTRY
    }

    /// Register `codec` under `name`
    ///
    /// # Errors
    ///
    /// `DuplicateCodec` if `name` is already taken; the existing codec is kept.
    pub fn register<C>(&mut self, name: impl Into<String>, codec: C) -> Result<()>
    where
        C: DynCodec + 'static,
    {
        let name = name.into();
        if self.codecs.contains_key(&name) {
            return Err(Error::DuplicateCodec(name));
        }
        info!(
            target: "cube_trainer::codec",
            name = %name,
            codec = codec.name(),
            "Registered codec"
        );
        self.codecs.insert(name, Box::new(codec));
        Ok(())
    }

    /// Codec registered under `name`
    ///
    /// # Errors
    ///
    /// `UnknownCodec` if nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&dyn DynCodec> {
        self.codecs
            .get(name)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| Error::UnknownCodec(name.to_string()))
    }

    /// Whether a codec is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("names", &self.names())
            .finish()
    }
}
