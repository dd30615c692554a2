//! Codec traits
//!
//! [`Codec`] is the typed contract each codec implements. [`DynCodec`] is the
//! object safe seam the registry stores, where values travel as
//! [`cube_trainer_core::Value`] and foreign types are rejected.

use cube_trainer_core::{ColumnValue, Error, Result, Value};

/// Converts one value type to and from a flat string
///
/// `encode` and `decode` work on present values. The provided `serialize`
/// and `deserialize` add the absence rules used at the storage boundary:
/// absence maps to absence, and a blank string is absent when the codec
/// says so.
pub trait Codec: Send + Sync {
    /// The value type this codec owns
    type Value;

    /// Short name of the owned type, for logs and errors
    fn name(&self) -> &'static str;

    /// Encode a present value
    fn encode(&self, value: &Self::Value) -> Result<String>;

    /// Decode a present string
    fn decode(&self, raw: &str) -> Result<Self::Value>;

    /// Whether `""` is read as an absent value
    fn blank_is_absent(&self) -> bool {
        true
    }

    /// Encode an optional value; absence stays absent
    ///
    /// A present value that encodes to `""` is refused with
    /// `AmbiguousEncoding` while blanks read back as absent.
    fn serialize(&self, value: Option<&Self::Value>) -> Result<Option<String>> {
        match value {
            None => Ok(None),
            Some(value) => {
                let raw = self.encode(value)?;
                if raw.is_empty() && self.blank_is_absent() {
                    return Err(Error::ambiguous(raw));
                }
                Ok(Some(raw))
            }
        }
    }

    /// Decode an optional column string; absence stays absent
    fn deserialize(&self, raw: Option<&str>) -> Result<Option<Self::Value>> {
        match raw {
            None => Ok(None),
            Some("") if self.blank_is_absent() => Ok(None),
            Some(raw) => self.decode(raw).map(Some),
        }
    }
}

/// Object safe codec over dynamic [`Value`]s
pub trait DynCodec: Send + Sync {
    /// Short name of the owned type
    fn name(&self) -> &'static str;

    /// Encode an optional value, rejecting variants this codec does not own
    fn encode_value(&self, value: Option<&Value>) -> Result<Option<String>>;

    /// Decode an optional column string into a value
    fn decode_value(&self, raw: Option<&str>) -> Result<Option<Value>>;
}

impl<C> DynCodec for C
where
    C: Codec,
    C::Value: ColumnValue,
{
    fn name(&self) -> &'static str {
        Codec::name(self)
    }

    fn encode_value(&self, value: Option<&Value>) -> Result<Option<String>> {
        let typed = value.map(C::Value::from_value).transpose()?;
        self.serialize(typed)
    }

    fn decode_value(&self, raw: Option<&str>) -> Result<Option<Value>> {
        Ok(self.deserialize(raw)?.map(ColumnValue::into_value))
    }
}
