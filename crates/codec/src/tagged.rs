//! Tagged union codec: `<VariantTag>:<payload>`
//!
//! The tag table is built once from the union's variant list when the codec
//! is constructed and never changes afterwards. Decoding splits at the first
//! separator only, so payloads may contain the separator themselves.

use crate::traits::Codec;
use cube_trainer_core::{Error, Result, TagKind, TaggedUnion, SEPARATOR};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Encodes one closed [`TaggedUnion`] as its tag followed by its payload
pub struct TaggedUnionCodec<T: TaggedUnion> {
    table: HashMap<&'static str, fn(&str) -> Result<T>>,
    blank_is_absent: bool,
}

impl<T: TaggedUnion> TaggedUnionCodec<T> {
    /// Build the codec and its tag table
    ///
    /// # Errors
    ///
    /// `DuplicateTag` if two variants share a tag, `AmbiguousEncoding` if a
    /// tag is empty or contains the separator.
    pub fn new(blank_is_absent: bool) -> Result<Self> {
        let mut table = HashMap::with_capacity(T::VARIANTS.len());
        for variant in T::VARIANTS {
            if variant.tag.is_empty() || variant.tag.contains(SEPARATOR) {
                return Err(Error::ambiguous(variant.tag));
            }
            if table.insert(variant.tag, variant.from_raw_data).is_some() {
                return Err(Error::DuplicateTag(variant.tag.to_string()));
            }
        }
        Ok(TaggedUnionCodec {
            table,
            blank_is_absent,
        })
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        T::VARIANTS.iter().map(|v| v.tag)
    }
}

impl<T: TaggedUnion> fmt::Debug for TaggedUnionCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedUnionCodec")
            .field("union", &T::UNION_NAME)
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: TaggedUnion + Send + Sync> Codec for TaggedUnionCodec<T> {
    type Value = T;

    fn name(&self) -> &'static str {
        T::UNION_NAME
    }

    fn encode(&self, value: &T) -> Result<String> {
        let tag = value.tag();
        if !self.table.contains_key(tag) {
            return Err(Error::type_mismatch(T::UNION_NAME, tag));
        }
        let payload = value.to_raw_data()?;
        Ok(format!("{}{}{}", tag, SEPARATOR, payload))
    }

    fn decode(&self, raw: &str) -> Result<T> {
        let (tag, payload) = raw.split_once(SEPARATOR).ok_or_else(|| {
            debug!(
                target: "cube_trainer::codec",
                union_name = T::UNION_NAME,
                raw,
                "Missing variant tag"
            );
            Error::malformed(
                T::UNION_NAME,
                format!("missing '{}' after tag in {:?}", SEPARATOR, raw),
            )
        })?;
        let from_raw_data = self.table.get(tag).ok_or_else(|| {
            debug!(
                target: "cube_trainer::codec",
                union_name = T::UNION_NAME,
                tag,
                "Unknown variant tag"
            );
            Error::unknown_tag(TagKind::Variant, tag)
        })?;
        from_raw_data(payload).map_err(|e| {
            debug!(
                target: "cube_trainer::codec",
                union_name = T::UNION_NAME,
                tag,
                error = %e,
                "Rejected payload"
            );
            e
        })
    }

    fn blank_is_absent(&self) -> bool {
        self.blank_is_absent
    }
}
