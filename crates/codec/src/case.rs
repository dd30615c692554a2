//! Case codec
//!
//! ## Grammar
//!
//! ```text
//! Edge(UF UB DF)                  one cycle
//! Corner(URF UBR):Edge(UF UB)     several cycles, joined by the separator
//! Scramble:R U R' U'              a scramble
//! PartCycle:Edge(UF UB DF)        legacy form, accepted on decode only
//! ```
//!
//! ## Decode states
//!
//! 1. Split on the separator.
//! 2. Drop a leading `PartCycle` marker if legacy markers are accepted.
//! 3. Exactly two tokens starting with `Scramble`: a scramble.
//! 4. Otherwise every token is one part cycle.

use crate::traits::Codec;
use cube_trainer_core::{Case, Error, PartCycle, Result, Scramble, TagKind, SEPARATOR};
use tracing::debug;

/// Obsolete marker that older rows put in front of their cycles
pub const LEGACY_CASE_MARKER: &str = "PartCycle";

/// Marker introducing a scramble case
pub const SCRAMBLE_MARKER: &str = "Scramble";

/// Join segments with the separator, refusing any segment that contains it
pub(crate) fn join_segments<S: AsRef<str>>(segments: &[S]) -> Result<String> {
    let mut joined = String::new();
    for (index, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        if segment.contains(SEPARATOR) {
            debug!(target: "cube_trainer::codec", segment, "Refused ambiguous segment");
            return Err(Error::ambiguous(segment));
        }
        if index > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment);
    }
    Ok(joined)
}

/// Encodes a [`Case`] as separator-joined part cycles or as a scramble
#[derive(Debug, Clone)]
pub struct CaseCodec {
    accept_legacy_marker: bool,
    blank_is_absent: bool,
}

impl CaseCodec {
    /// Create a case codec
    pub fn new(accept_legacy_marker: bool, blank_is_absent: bool) -> Self {
        CaseCodec {
            accept_legacy_marker,
            blank_is_absent,
        }
    }

    fn strip_legacy_marker<'a>(&self, tokens: &'a [&'a str]) -> Result<&'a [&'a str]> {
        match tokens.split_first() {
            Some((&LEGACY_CASE_MARKER, rest)) if self.accept_legacy_marker => {
                debug!(
                    target: "cube_trainer::codec",
                    marker = LEGACY_CASE_MARKER,
                    "Stripped legacy case marker"
                );
                Ok(rest)
            }
            Some((&LEGACY_CASE_MARKER, _)) => {
                debug!(
                    target: "cube_trainer::codec",
                    marker = LEGACY_CASE_MARKER,
                    "Rejected legacy case marker"
                );
                Err(Error::unknown_tag(TagKind::LegacyMarker, LEGACY_CASE_MARKER))
            }
            _ => Ok(tokens),
        }
    }
}

impl Default for CaseCodec {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Codec for CaseCodec {
    type Value = Case;

    fn name(&self) -> &'static str {
        "Case"
    }

    fn encode(&self, value: &Case) -> Result<String> {
        match value {
            Case::PartCycles(cycles) => {
                let raw: Vec<String> = cycles.cycles().iter().map(PartCycle::to_raw_data).collect();
                join_segments(&raw)
            }
            Case::Scramble(scramble) => join_segments(&[SCRAMBLE_MARKER, scramble.algorithm()]),
        }
    }

    fn decode(&self, raw: &str) -> Result<Case> {
        let tokens: Vec<&str> = raw.split(SEPARATOR).collect();
        let tokens = self.strip_legacy_marker(&tokens)?;
        let result = match tokens {
            [] => Err(Error::malformed("Case", "no part cycles")),
            [marker, algorithm] if *marker == SCRAMBLE_MARKER => {
                Scramble::new(*algorithm).map(Case::Scramble)
            }
            cycles => cycles
                .iter()
                .map(|token| PartCycle::from_raw_data(token))
                .collect::<Result<Vec<_>>>()
                .and_then(Case::from_cycles),
        };
        result.map_err(|e| {
            debug!(target: "cube_trainer::codec", raw, error = %e, "Rejected case");
            e
        })
    }

    fn blank_is_absent(&self) -> bool {
        self.blank_is_absent
    }
}
