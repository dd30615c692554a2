//! Primitive codec: plain string conversion for token-like values

use crate::traits::Codec;
use cube_trainer_core::{ColumnValue, Error, Result};
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::debug;

/// Stores a value as its `Display` form and reads it back with `FromStr`
///
/// Used for [`cube_trainer_core::Symbol`], where every string is valid.
pub struct PrimitiveCodec<T> {
    blank_is_absent: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PrimitiveCodec<T> {
    /// Create a codec with the default blank handling
    pub fn new() -> Self {
        Self::with_blank_is_absent(true)
    }

    /// Create a codec, choosing whether `""` decodes to absence
    pub fn with_blank_is_absent(blank_is_absent: bool) -> Self {
        PrimitiveCodec {
            blank_is_absent,
            _marker: PhantomData,
        }
    }
}

impl<T> Default for PrimitiveCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for PrimitiveCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimitiveCodec")
            .field("type", &std::any::type_name::<T>())
            .field("blank_is_absent", &self.blank_is_absent)
            .finish()
    }
}

impl<T> Codec for PrimitiveCodec<T>
where
    T: ColumnValue + Display + FromStr,
    T::Err: Display,
{
    type Value = T;

    fn name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn encode(&self, value: &T) -> Result<String> {
        Ok(value.to_string())
    }

    fn decode(&self, raw: &str) -> Result<T> {
        raw.parse::<T>().map_err(|e| {
            debug!(target: "cube_trainer::codec", codec = T::TYPE_NAME, raw, "Rejected primitive");
            Error::malformed(T::TYPE_NAME, e.to_string())
        })
    }

    fn blank_is_absent(&self) -> bool {
        self.blank_is_absent
    }
}
