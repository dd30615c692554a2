//! Part cycles
//!
//! A [`PartCycle`] is an ordered, non-empty sequence of parts of one part
//! type, describing a cyclic permutation, plus the twist the cycle applies
//! to the orientation of its pieces. Its raw data is the part type name
//! followed by the space-separated part names in brackets, with a twist
//! suffix only when the twist is not zero:
//!
//! ```text
//! Edge(UF UB DF)
//! Corner(URF)*1
//! ```

use crate::error::{Error, Result};
use crate::part::{
    split_typed_group, Part, PartType, GROUP_CLOSE, GROUP_OPEN, PART_DELIMITER, TWIST_MARKER,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered, non-empty sequence of parts of a single part type
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PartCycle {
    parts: Vec<Part>,
    twist: u8,
}

impl PartCycle {
    /// Create an untwisted cycle, validating it
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if `parts` is empty or mixes part types.
    pub fn new(parts: Vec<Part>) -> Result<Self> {
        PartCycle::twisted(parts, 0)
    }

    /// Create a cycle that also twists its pieces by `twist`
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if `parts` is empty, mixes part types, or `twist`
    /// is not below the number of orientations of the part type.
    pub fn twisted(parts: Vec<Part>, twist: u8) -> Result<Self> {
        let first = parts
            .first()
            .ok_or_else(|| Error::malformed("PartCycle", "a part cycle needs at least one part"))?;
        if let Some(odd) = parts.iter().find(|p| p.part_type() != first.part_type()) {
            return Err(Error::malformed(
                "PartCycle",
                format!(
                    "mixed part types {} and {} in one cycle",
                    first.part_type(),
                    odd.part_type()
                ),
            ));
        }
        let orientations = first.part_type().orientations();
        if usize::from(twist) >= orientations {
            return Err(Error::malformed(
                "PartCycle",
                format!(
                    "twist {} out of range for {} with {} orientations",
                    twist,
                    first.part_type(),
                    orientations
                ),
            ));
        }
        Ok(PartCycle { parts, twist })
    }

    /// Part type shared by every part of the cycle
    pub fn part_type(&self) -> PartType {
        self.parts[0].part_type()
    }

    /// Parts in cycle order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Orientation change applied by the cycle, `0` if untwisted
    pub fn twist(&self) -> u8 {
        self.twist
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false; cycles are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Whether the cycle contains `part`
    pub fn contains(&self, part: &Part) -> bool {
        self.parts.contains(part)
    }

    /// The same cycle rotated so that it begins with `part`
    ///
    /// Returns `None` if `part` is not in the cycle.
    pub fn start_with(&self, part: &Part) -> Option<PartCycle> {
        let index = self.parts.iter().position(|p| p == part)?;
        let mut parts = self.parts.clone();
        parts.rotate_left(index);
        Some(PartCycle {
            parts,
            twist: self.twist,
        })
    }

    /// Whether `other` describes the same cyclic permutation and twist
    pub fn equivalent(&self, other: &PartCycle) -> bool {
        self.len() == other.len()
            && other
                .start_with(&self.parts[0])
                .is_some_and(|rotated| rotated == *self)
    }

    /// Raw data, e.g. `Edge(UF UB DF)` or `Corner(URF)*2`
    pub fn to_raw_data(&self) -> String {
        let names: Vec<&str> = self.parts.iter().map(|p| p.name()).collect();
        let delimiter = PART_DELIMITER.to_string();
        let mut raw = format!(
            "{}{}{}{}",
            self.part_type().name(),
            GROUP_OPEN,
            names.join(delimiter.as_str()),
            GROUP_CLOSE
        );
        if self.twist != 0 {
            raw.push(TWIST_MARKER);
            raw.push_str(&self.twist.to_string());
        }
        raw
    }

    /// Parse raw data produced by [`PartCycle::to_raw_data`]
    ///
    /// # Errors
    ///
    /// `MalformedPayload` for a bad shape, an empty part name or a bad
    /// twist suffix, `UnknownTag` for an unknown part type or part name.
    pub fn from_raw_data(raw: &str) -> Result<Self> {
        let (group, twist) = match raw.split_once(TWIST_MARKER) {
            Some((group, suffix)) => (group, parse_twist(suffix, raw)?),
            None => (raw, 0),
        };
        let (part_type, inner) = split_typed_group(group, "PartCycle")?;
        let parts = inner
            .split(PART_DELIMITER)
            .map(|name| {
                if name.is_empty() {
                    Err(Error::malformed(
                        "PartCycle",
                        format!("empty part name in {:?}", raw),
                    ))
                } else {
                    part_type.part(name)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        PartCycle::twisted(parts, twist)
    }
}

// Zero is never written, so an explicit `*0` is not canonical.
fn parse_twist(suffix: &str, raw: &str) -> Result<u8> {
    match suffix.parse::<u8>() {
        Ok(twist) if twist > 0 && suffix.bytes().all(|b| b.is_ascii_digit()) => Ok(twist),
        _ => Err(Error::malformed(
            "PartCycle",
            format!("bad twist suffix {:?} in {:?}", suffix, raw),
        )),
    }
}

impl fmt::Debug for PartCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw_data())
    }
}

impl fmt::Display for PartCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.parts.iter().map(|p| p.name()).collect();
        write!(f, "{}", names.join(" "))
    }
}

impl Serialize for PartCycle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_raw_data())
    }
}

impl<'de> Deserialize<'de> for PartCycle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PartCycle::from_raw_data(&raw).map_err(serde::de::Error::custom)
    }
}
