//! Closed tagged unions
//!
//! A tagged union is a closed set of variants, each identified by a short tag
//! equal to the variant type's simple name. The union owns the tag table; each
//! variant owns its payload grammar (`to_raw_data` / `from_raw_data`).

use crate::error::Result;

/// One entry of a tagged union's variant table
pub struct Variant<T> {
    /// Canonical tag, the variant type's simple name
    pub tag: &'static str,
    /// Rebuild the union value from a payload
    pub from_raw_data: fn(&str) -> Result<T>,
}

impl<T> Clone for Variant<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Variant<T> {}

impl<T> std::fmt::Debug for Variant<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variant").field("tag", &self.tag).finish()
    }
}

/// A closed set of variants encoded as `<tag>:<payload>`
pub trait TaggedUnion: Sized + 'static {
    /// Name of the union, used in diagnostics
    const UNION_NAME: &'static str;

    /// Variant table in registration order
    const VARIANTS: &'static [Variant<Self>];

    /// Tag of this value's variant
    fn tag(&self) -> &'static str;

    /// Payload of this value, without the tag
    fn to_raw_data(&self) -> Result<String>;
}
