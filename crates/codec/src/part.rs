//! Part codec: one part as its canonical token, e.g. `Edge(UF)`

use crate::traits::Codec;
use cube_trainer_core::{Part, Result};
use tracing::debug;

/// Encodes a [`Part`] as its canonical token
///
/// Decoding looks the token up in the immutable part table; unknown part
/// types and unknown names fail with `UnknownTag`.
#[derive(Debug, Clone)]
pub struct PartCodec {
    blank_is_absent: bool,
}

impl PartCodec {
    /// Create a part codec
    pub fn new(blank_is_absent: bool) -> Self {
        PartCodec { blank_is_absent }
    }
}

impl Default for PartCodec {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Codec for PartCodec {
    type Value = Part;

    fn name(&self) -> &'static str {
        "Part"
    }

    fn encode(&self, value: &Part) -> Result<String> {
        Ok(value.token())
    }

    fn decode(&self, raw: &str) -> Result<Part> {
        Part::parse_token(raw).map_err(|e| {
            debug!(target: "cube_trainer::codec", raw, error = %e, "Rejected part token");
            e
        })
    }

    fn blank_is_absent(&self) -> bool {
        self.blank_is_absent
    }
}
