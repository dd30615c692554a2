//! Concrete case sets
//!
//! A concrete case set is one family of cases with its parameters fixed, e.g.
//! edge 3-cycles for buffer UF. It is stored as a tagged union whose payload
//! is a `:`-joined list with a fixed number of segments per variant:
//!
//! ```text
//! BufferedThreeCycleSet:Edge:UF
//! BufferedParitySet:Corner:Edge:UFR
//! BufferedParityTwistSet:Corner:Edge:URF
//! ConcreteFloatingTwoTwistSet:Corner
//! BufferedThreeTwistSet:URF
//! ```

use crate::case::Case;
use crate::error::{Error, Result};
use crate::part::{Part, PartType};
use crate::part_cycle::PartCycle;
use crate::tagged::{TaggedUnion, Variant};
use crate::SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

fn lowercase(part_type: PartType) -> String {
    part_type.name().to_lowercase()
}

fn payload_segments<'a>(
    raw: &'a str,
    what: &'static str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let segments: Vec<&str> = raw.split(SEPARATOR).collect();
    if segments.len() != expected {
        return Err(Error::malformed(
            what,
            format!("expected {} parts, got {}: {:?}", expected, segments.len(), raw),
        ));
    }
    Ok(segments)
}

fn join_segments(segments: &[&str]) -> Result<String> {
    if let Some(bad) = segments.iter().find(|s| s.contains(SEPARATOR)) {
        return Err(Error::ambiguous(*bad));
    }
    let separator = SEPARATOR.to_string();
    Ok(segments.join(separator.as_str()))
}

fn require(condition: bool, what: &'static str, reason: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::malformed(what, reason()))
    }
}

/// Twist that undoes `twist` on a piece of `part_type`
fn inverse_twist(part_type: PartType, twist: u8) -> u8 {
    let orientations = part_type.orientations() as u8;
    (orientations - twist % orientations) % orientations
}

/// Every twist that leaves a piece of `part_type` unsolved
fn unsolved_twists(part_type: PartType) -> std::ops::Range<u8> {
    1..part_type.orientations() as u8
}

fn build_case(cycles: &[(&[Part], u8)]) -> Result<Case> {
    let cycles = cycles
        .iter()
        .map(|(parts, twist)| PartCycle::twisted(parts.to_vec(), *twist))
        .collect::<Result<Vec<_>>>()?;
    Case::from_cycles(cycles)
}

/// The part and twist of a one-part cycle of `part_type`
fn single_part(cycle: &PartCycle, part_type: PartType) -> Option<(Part, u8)> {
    if cycle.len() == 1 && cycle.part_type() == part_type {
        Some((cycle.parts()[0], cycle.twist()))
    } else {
        None
    }
}

fn is_swap_of(cycle: &PartCycle, part_type: PartType) -> bool {
    cycle.len() == 2
        && cycle.part_type() == part_type
        && !cycle.parts()[0].turned_equals(&cycle.parts()[1])
}

fn pieces_distinct(parts: &[Part]) -> bool {
    parts
        .iter()
        .enumerate()
        .all(|(i, a)| parts[i + 1..].iter().all(|b| !a.turned_equals(b)))
}

/// Two parts of `parity_part_type` next to `buffer`, used as the parity swap
fn default_parity_parts(buffer: Part, parity_part_type: PartType) -> Vec<Part> {
    let buffer_faces: Vec<char> = buffer.face_symbols().collect();
    let shared = |p: &Part| p.face_symbols().filter(|f| buffer_faces.contains(f)).count();
    let candidates: Vec<Part> = parity_part_type
        .elements()
        .iter()
        .copied()
        .filter(|p| p.face_symbols().next() == buffer_faces.first().copied())
        .collect();
    let best = candidates.iter().map(shared).max().unwrap_or(0);
    candidates
        .into_iter()
        .filter(|p| shared(p) == best)
        .take(2)
        .collect()
}

/// 3-cycles of one part type starting at a fixed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferedThreeCycleSet {
    buffer: Part,
}

impl BufferedThreeCycleSet {
    /// Create the set for `buffer`; faces cannot be cycled
    pub fn new(buffer: Part) -> Result<Self> {
        require(buffer.part_type() != PartType::Face, "BufferedThreeCycleSet", || {
            "face centers cannot be cycled".to_string()
        })?;
        Ok(BufferedThreeCycleSet { buffer })
    }

    /// The buffer every cycle starts at
    pub fn buffer(&self) -> Part {
        self.buffer
    }

    /// Part type of the cycles
    pub fn part_type(&self) -> PartType {
        self.buffer.part_type()
    }

    /// Every 3-cycle of this set, starting at the buffer
    pub fn cases(&self) -> Vec<Case> {
        let candidates: Vec<Part> = self
            .part_type()
            .elements()
            .iter()
            .copied()
            .filter(|p| !p.turned_equals(&self.buffer))
            .collect();
        let mut cases = Vec::new();
        for a in &candidates {
            for b in &candidates {
                if a.turned_equals(b) {
                    continue;
                }
                if let Ok(case) = build_case(&[(&[self.buffer, *a, *b][..], 0)]) {
                    cases.push(case);
                }
            }
        }
        cases
    }

    /// Whether `case` is an untwisted 3-cycle of this set that starts at the buffer
    pub fn strict_match(&self, case: &Case) -> bool {
        match case.part_cycles() {
            Some([cycle]) => {
                cycle.len() == 3
                    && cycle.twist() == 0
                    && cycle.part_type() == self.part_type()
                    && cycle.parts()[0] == self.buffer
                    && pieces_distinct(cycle.parts())
            }
            _ => false,
        }
    }

    fn to_raw_data(self) -> Result<String> {
        join_segments(&[self.part_type().name(), self.buffer.name()])
    }

    fn from_raw_data(raw: &str) -> Result<Self> {
        let segments = payload_segments(raw, "BufferedThreeCycleSet", 2)?;
        let part_type = PartType::parse(segments[0])?;
        BufferedThreeCycleSet::new(part_type.part(segments[1])?)
    }
}

impl fmt::Display for BufferedThreeCycleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} 3-cycles for buffer {}",
            lowercase(self.part_type()),
            self.buffer
        )
    }
}

/// Parities: a buffer swap plus a swap of another part type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferedParitySet {
    buffer: Part,
    parity_part_type: PartType,
}

impl BufferedParitySet {
    /// Create the set; neither part type may be `Face`
    pub fn new(buffer: Part, parity_part_type: PartType) -> Result<Self> {
        require(
            buffer.part_type() != PartType::Face && parity_part_type != PartType::Face,
            "BufferedParitySet",
            || "face centers cannot take part in a parity".to_string(),
        )?;
        Ok(BufferedParitySet {
            buffer,
            parity_part_type,
        })
    }

    /// The buffer
    pub fn buffer(&self) -> Part {
        self.buffer
    }

    /// Part type of the parity swap
    pub fn parity_part_type(&self) -> PartType {
        self.parity_part_type
    }

    /// The parity swap every case of this set uses
    pub fn parity_parts(&self) -> Vec<Part> {
        default_parity_parts(self.buffer, self.parity_part_type)
    }

    /// One case per buffer swap target, each with the default parity swap
    pub fn cases(&self) -> Vec<Case> {
        let parity = self.parity_parts();
        self.buffer
            .part_type()
            .elements()
            .iter()
            .filter(|p| !p.turned_equals(&self.buffer))
            .filter_map(|p| build_case(&[(&[self.buffer, *p][..], 0), (&parity[..], 0)]).ok())
            .collect()
    }

    /// Whether `case` is a buffer swap followed by a parity swap, both untwisted
    pub fn strict_match(&self, case: &Case) -> bool {
        match case.part_cycles() {
            Some([swap, parity]) => {
                is_swap_of(swap, self.buffer.part_type())
                    && swap.twist() == 0
                    && swap.parts()[0] == self.buffer
                    && is_swap_of(parity, self.parity_part_type)
                    && parity.twist() == 0
            }
            _ => false,
        }
    }

    fn to_raw_data(self) -> Result<String> {
        join_segments(&[
            self.buffer.part_type().name(),
            self.parity_part_type.name(),
            self.buffer.name(),
        ])
    }

    fn from_raw_data(raw: &str) -> Result<Self> {
        let segments = payload_segments(raw, "BufferedParitySet", 3)?;
        let buffer_part_type = PartType::parse(segments[0])?;
        let parity_part_type = PartType::parse(segments[1])?;
        BufferedParitySet::new(buffer_part_type.part(segments[2])?, parity_part_type)
    }
}

impl fmt::Display for BufferedParitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} parities for buffer {}",
            lowercase(self.buffer.part_type()),
            lowercase(self.parity_part_type),
            self.buffer
        )
    }
}

/// Parities where another corner is twisted at the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferedParityTwistSet {
    buffer: Part,
    parity_part_type: PartType,
}

impl BufferedParityTwistSet {
    /// Create the set; the buffer must be a corner
    pub fn new(buffer: Part, parity_part_type: PartType) -> Result<Self> {
        require(buffer.part_type() == PartType::Corner, "BufferedParityTwistSet", || {
            format!("buffer {:?} is not a corner", buffer)
        })?;
        require(parity_part_type != PartType::Face, "BufferedParityTwistSet", || {
            "face centers cannot take part in a parity".to_string()
        })?;
        Ok(BufferedParityTwistSet {
            buffer,
            parity_part_type,
        })
    }

    /// The buffer corner
    pub fn buffer(&self) -> Part {
        self.buffer
    }

    /// Part type of the parity swap
    pub fn parity_part_type(&self) -> PartType {
        self.parity_part_type
    }

    /// The parity swap every case of this set uses
    pub fn parity_parts(&self) -> Vec<Part> {
        default_parity_parts(self.buffer, self.parity_part_type)
    }

    /// Every twisted buffer swap combined with an opposite twist elsewhere
    ///
    /// The twisted corner is named by its minimal rotation, so each physical
    /// twist appears once.
    pub fn cases(&self) -> Vec<Case> {
        let part_type = self.buffer.part_type();
        let parity = self.parity_parts();
        let mut cases = Vec::new();
        for swap in part_type.elements() {
            if swap.turned_equals(&self.buffer) {
                continue;
            }
            for twisted in part_type.elements().iter().filter(|p| p.is_minimal_rotation()) {
                if !pieces_distinct(&[self.buffer, *swap, *twisted]) {
                    continue;
                }
                for twist in unsolved_twists(part_type) {
                    let case = build_case(&[
                        (&[self.buffer, *swap][..], inverse_twist(part_type, twist)),
                        (&[*twisted][..], twist),
                        (&parity[..], 0),
                    ]);
                    if let Ok(case) = case {
                        cases.push(case);
                    }
                }
            }
        }
        cases
    }

    /// Whether `case` is a twisted buffer swap, the opposite single twist
    /// and an untwisted parity swap, in that order
    pub fn strict_match(&self, case: &Case) -> bool {
        let part_type = self.buffer.part_type();
        match case.part_cycles() {
            Some([swap, twisted, parity]) => {
                let Some((twisted_part, twist)) = single_part(twisted, part_type) else {
                    return false;
                };
                is_swap_of(swap, part_type)
                    && swap.parts()[0] == self.buffer
                    && twist != 0
                    && swap.twist() == inverse_twist(part_type, twist)
                    && pieces_distinct(&[swap.parts()[0], swap.parts()[1], twisted_part])
                    && is_swap_of(parity, self.parity_part_type)
                    && parity.twist() == 0
            }
            _ => false,
        }
    }

    fn to_raw_data(self) -> Result<String> {
        join_segments(&[
            self.buffer.part_type().name(),
            self.parity_part_type.name(),
            self.buffer.name(),
        ])
    }

    fn from_raw_data(raw: &str) -> Result<Self> {
        let segments = payload_segments(raw, "BufferedParityTwistSet", 3)?;
        let buffer_part_type = PartType::parse(segments[0])?;
        let parity_part_type = PartType::parse(segments[1])?;
        BufferedParityTwistSet::new(buffer_part_type.part(segments[2])?, parity_part_type)
    }
}

impl fmt::Display for BufferedParityTwistSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} parity twists for buffer {}",
            lowercase(self.buffer.part_type()),
            lowercase(self.parity_part_type),
            self.buffer
        )
    }
}

/// Two pieces twisted in place, anywhere on the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConcreteFloatingTwoTwistSet {
    part_type: PartType,
}

impl ConcreteFloatingTwoTwistSet {
    /// Create the set; only corners and edges can be twisted
    pub fn new(part_type: PartType) -> Result<Self> {
        require(
            matches!(part_type, PartType::Corner | PartType::Edge),
            "ConcreteFloatingTwoTwistSet",
            || format!("{} cannot be twisted", part_type),
        )?;
        Ok(ConcreteFloatingTwoTwistSet { part_type })
    }

    /// Part type being twisted
    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    /// Every ordered pair of pieces, the first twisted once and the second back
    pub fn cases(&self) -> Vec<Case> {
        let inverse = inverse_twist(self.part_type, 1);
        let elements = self.part_type.elements();
        let mut cases = Vec::new();
        for a in elements {
            for b in elements.iter().filter(|b| !a.turned_equals(*b)) {
                if let Ok(case) = build_case(&[(&[*a][..], 1), (&[*b][..], inverse)]) {
                    cases.push(case);
                }
            }
        }
        cases
    }

    /// Whether `case` twists one piece once and another piece back
    pub fn strict_match(&self, case: &Case) -> bool {
        match case.part_cycles() {
            Some([first, second]) => {
                match (
                    single_part(first, self.part_type),
                    single_part(second, self.part_type),
                ) {
                    (Some((a, 1)), Some((b, twist))) => {
                        twist == inverse_twist(self.part_type, 1) && !a.turned_equals(&b)
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn to_raw_data(self) -> Result<String> {
        join_segments(&[self.part_type.name()])
    }

    fn from_raw_data(raw: &str) -> Result<Self> {
        let segments = payload_segments(raw, "ConcreteFloatingTwoTwistSet", 1)?;
        ConcreteFloatingTwoTwistSet::new(PartType::parse(segments[0])?)
    }
}

impl fmt::Display for ConcreteFloatingTwoTwistSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let twist_name = if self.part_type == PartType::Edge {
            "flip"
        } else {
            "twist"
        };
        write!(f, "floating {} {}s", lowercase(self.part_type), twist_name)
    }
}

/// Three corners twisted in place the same way, one of them the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferedThreeTwistSet {
    buffer: Part,
}

impl BufferedThreeTwistSet {
    /// Create the set; the buffer must be a corner
    pub fn new(buffer: Part) -> Result<Self> {
        require(buffer.part_type() == PartType::Corner, "BufferedThreeTwistSet", || {
            format!("buffer {:?} is not a corner", buffer)
        })?;
        Ok(BufferedThreeTwistSet { buffer })
    }

    /// The buffer corner
    pub fn buffer(&self) -> Part {
        self.buffer
    }

    /// Every pair of other corners, twisted together with the buffer
    ///
    /// Targets are named by their minimal rotation; each pair comes once per
    /// twist direction.
    pub fn cases(&self) -> Vec<Case> {
        let part_type = self.buffer.part_type();
        let targets: Vec<Part> = part_type
            .elements()
            .iter()
            .copied()
            .filter(|p| p.is_minimal_rotation() && !p.turned_equals(&self.buffer))
            .collect();
        let mut cases = Vec::new();
        for a in &targets {
            for b in targets.iter().filter(|b| !a.turned_equals(*b)) {
                for twist in unsolved_twists(part_type) {
                    let case = build_case(&[
                        (&[self.buffer][..], twist),
                        (&[*a][..], twist),
                        (&[*b][..], twist),
                    ]);
                    if let Ok(case) = case {
                        cases.push(case);
                    }
                }
            }
        }
        cases
    }

    /// Whether `case` twists the buffer and two other corners the same way,
    /// buffer first
    pub fn strict_match(&self, case: &Case) -> bool {
        let part_type = self.buffer.part_type();
        let Some(cycles) = case.part_cycles() else {
            return false;
        };
        let singles: Option<Vec<(Part, u8)>> =
            cycles.iter().map(|c| single_part(c, part_type)).collect();
        match singles.as_deref() {
            Some(&[(buffer, twist), (a, ta), (b, tb)]) => {
                buffer == self.buffer
                    && twist != 0
                    && ta == twist
                    && tb == twist
                    && pieces_distinct(&[buffer, a, b])
            }
            _ => false,
        }
    }

    fn to_raw_data(self) -> Result<String> {
        join_segments(&[self.buffer.name()])
    }

    fn from_raw_data(raw: &str) -> Result<Self> {
        let segments = payload_segments(raw, "BufferedThreeTwistSet", 1)?;
        BufferedThreeTwistSet::new(PartType::Corner.part(segments[0])?)
    }
}

impl fmt::Display for BufferedThreeTwistSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corner 3-twists for buffer {}", self.buffer)
    }
}

/// One concrete family of cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteCaseSet {
    /// 3-cycles with a fixed buffer
    BufferedThreeCycleSet(BufferedThreeCycleSet),
    /// Parities with a fixed buffer
    BufferedParitySet(BufferedParitySet),
    /// Parity twists with a fixed buffer
    BufferedParityTwistSet(BufferedParityTwistSet),
    /// Floating 2-twists
    ConcreteFloatingTwoTwistSet(ConcreteFloatingTwoTwistSet),
    /// 3-twists with a fixed buffer
    BufferedThreeTwistSet(BufferedThreeTwistSet),
}

impl ConcreteCaseSet {
    /// The buffer, for sets that have one
    pub fn buffer(&self) -> Option<Part> {
        match self {
            ConcreteCaseSet::BufferedThreeCycleSet(set) => Some(set.buffer()),
            ConcreteCaseSet::BufferedParitySet(set) => Some(set.buffer()),
            ConcreteCaseSet::BufferedParityTwistSet(set) => Some(set.buffer()),
            ConcreteCaseSet::ConcreteFloatingTwoTwistSet(_) => None,
            ConcreteCaseSet::BufferedThreeTwistSet(set) => Some(set.buffer()),
        }
    }

    /// Every case the set stands for
    pub fn cases(&self) -> Vec<Case> {
        match self {
            ConcreteCaseSet::BufferedThreeCycleSet(set) => set.cases(),
            ConcreteCaseSet::BufferedParitySet(set) => set.cases(),
            ConcreteCaseSet::BufferedParityTwistSet(set) => set.cases(),
            ConcreteCaseSet::ConcreteFloatingTwoTwistSet(set) => set.cases(),
            ConcreteCaseSet::BufferedThreeTwistSet(set) => set.cases(),
        }
    }

    /// Whether `case` belongs to the set in its canonical shape
    pub fn strict_match(&self, case: &Case) -> bool {
        match self {
            ConcreteCaseSet::BufferedThreeCycleSet(set) => set.strict_match(case),
            ConcreteCaseSet::BufferedParitySet(set) => set.strict_match(case),
            ConcreteCaseSet::BufferedParityTwistSet(set) => set.strict_match(case),
            ConcreteCaseSet::ConcreteFloatingTwoTwistSet(set) => set.strict_match(case),
            ConcreteCaseSet::BufferedThreeTwistSet(set) => set.strict_match(case),
        }
    }
}

fn three_cycle_set(raw: &str) -> Result<ConcreteCaseSet> {
    BufferedThreeCycleSet::from_raw_data(raw).map(ConcreteCaseSet::BufferedThreeCycleSet)
}

fn parity_set(raw: &str) -> Result<ConcreteCaseSet> {
    BufferedParitySet::from_raw_data(raw).map(ConcreteCaseSet::BufferedParitySet)
}

fn parity_twist_set(raw: &str) -> Result<ConcreteCaseSet> {
    BufferedParityTwistSet::from_raw_data(raw).map(ConcreteCaseSet::BufferedParityTwistSet)
}

fn floating_two_twist_set(raw: &str) -> Result<ConcreteCaseSet> {
    ConcreteFloatingTwoTwistSet::from_raw_data(raw)
        .map(ConcreteCaseSet::ConcreteFloatingTwoTwistSet)
}

fn three_twist_set(raw: &str) -> Result<ConcreteCaseSet> {
    BufferedThreeTwistSet::from_raw_data(raw).map(ConcreteCaseSet::BufferedThreeTwistSet)
}

impl TaggedUnion for ConcreteCaseSet {
    const UNION_NAME: &'static str = "ConcreteCaseSet";

    const VARIANTS: &'static [Variant<Self>] = &[
        Variant {
            tag: "BufferedThreeCycleSet",
            from_raw_data: three_cycle_set,
        },
        Variant {
            tag: "BufferedParitySet",
            from_raw_data: parity_set,
        },
        Variant {
            tag: "BufferedParityTwistSet",
            from_raw_data: parity_twist_set,
        },
        Variant {
            tag: "ConcreteFloatingTwoTwistSet",
            from_raw_data: floating_two_twist_set,
        },
        Variant {
            tag: "BufferedThreeTwistSet",
            from_raw_data: three_twist_set,
        },
    ];

    fn tag(&self) -> &'static str {
        match self {
            ConcreteCaseSet::BufferedThreeCycleSet(_) => "BufferedThreeCycleSet",
            ConcreteCaseSet::BufferedParitySet(_) => "BufferedParitySet",
            ConcreteCaseSet::BufferedParityTwistSet(_) => "BufferedParityTwistSet",
            ConcreteCaseSet::ConcreteFloatingTwoTwistSet(_) => "ConcreteFloatingTwoTwistSet",
            ConcreteCaseSet::BufferedThreeTwistSet(_) => "BufferedThreeTwistSet",
        }
    }

    fn to_raw_data(&self) -> Result<String> {
        match self {
            ConcreteCaseSet::BufferedThreeCycleSet(set) => set.to_raw_data(),
            ConcreteCaseSet::BufferedParitySet(set) => set.to_raw_data(),
            ConcreteCaseSet::BufferedParityTwistSet(set) => set.to_raw_data(),
            ConcreteCaseSet::ConcreteFloatingTwoTwistSet(set) => set.to_raw_data(),
            ConcreteCaseSet::BufferedThreeTwistSet(set) => set.to_raw_data(),
        }
    }
}

impl fmt::Display for ConcreteCaseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcreteCaseSet::BufferedThreeCycleSet(set) => write!(f, "{}", set),
            ConcreteCaseSet::BufferedParitySet(set) => write!(f, "{}", set),
            ConcreteCaseSet::BufferedParityTwistSet(set) => write!(f, "{}", set),
            ConcreteCaseSet::ConcreteFloatingTwoTwistSet(set) => write!(f, "{}", set),
            ConcreteCaseSet::BufferedThreeTwistSet(set) => write!(f, "{}", set),
        }
    }
}
