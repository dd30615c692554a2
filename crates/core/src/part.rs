//! Puzzle parts and part types
//!
//! A [`Part`] names one sticker position of one piece kind on the cube, e.g.
//! the `UF` edge or the `URF` corner. The universe of parts is fixed and
//! lives in a process-wide immutable table built once on first access.
//!
//! ## Canonical token
//!
//! | Part type | Example token |
//! |-----------|---------------|
//! | Corner    | `Corner(URF)` |
//! | Edge      | `Edge(UF)`    |
//! | Midge     | `Midge(UF)`   |
//! | Wing      | `Wing(UF)`    |
//! | XCenter   | `XCenter(Urf)`|
//! | TCenter   | `TCenter(Uf)` |
//! | Face      | `Face(U)`     |
//!
//! Part names never contain the separator or any part-cycle delimiter; this
//! is asserted when the table is built.

use crate::error::{Error, Result, TagKind};
use crate::SEPARATOR;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Opens the part list of a typed group, e.g. `Edge(`
pub const GROUP_OPEN: char = '(';
/// Closes the part list of a typed group
pub const GROUP_CLOSE: char = ')';
/// Separates parts inside a typed group
pub const PART_DELIMITER: char = ' ';

/// Introduces the twist suffix of a part cycle, e.g. `Corner(URF)*1`
pub const TWIST_MARKER: char = '*';

/// Characters that may never appear in a part name
pub const RESERVED_CHARS: [char; 5] =
    [SEPARATOR, GROUP_OPEN, GROUP_CLOSE, PART_DELIMITER, TWIST_MARKER];

const CORNERS: [&str; 24] = [
    "URF", "RFU", "FUR", "UFL", "FLU", "LUF", "ULB", "LBU", "BUL", "UBR", "BRU", "RUB", "DFR",
    "FRD", "RDF", "DLF", "LFD", "FDL", "DBL", "BLD", "LDB", "DRB", "RBD", "BDR",
];

const EDGES: [&str; 24] = [
    "UR", "RU", "UF", "FU", "UL", "LU", "UB", "BU", "DR", "RD", "DF", "FD", "DL", "LD", "DB",
    "BD", "FR", "RF", "FL", "LF", "BL", "LB", "BR", "RB",
];

const X_CENTERS: [&str; 24] = [
    "Urf", "Rfu", "Fur", "Ufl", "Flu", "Luf", "Ulb", "Lbu", "Bul", "Ubr", "Bru", "Rub", "Dfr",
    "Frd", "Rdf", "Dlf", "Lfd", "Fdl", "Dbl", "Bld", "Ldb", "Drb", "Rbd", "Bdr",
];

const T_CENTERS: [&str; 24] = [
    "Ur", "Ru", "Uf", "Fu", "Ul", "Lu", "Ub", "Bu", "Dr", "Rd", "Df", "Fd", "Dl", "Ld", "Db",
    "Bd", "Fr", "Rf", "Fl", "Lf", "Bl", "Lb", "Br", "Rb",
];

const FACES: [&str; 6] = ["U", "F", "R", "L", "B", "D"];

/// The kinds of pieces a part can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartType {
    /// Corner piece, three orientations
    Corner,
    /// Edge piece of a 3x3, two orientations
    Edge,
    /// Middle edge of an odd big cube, two orientations
    Midge,
    /// Wing edge of a big cube
    Wing,
    /// Diagonal center piece
    XCenter,
    /// Orthogonal center piece
    TCenter,
    /// Fixed face center
    Face,
}

impl PartType {
    /// All part types (for iteration)
    pub const ALL: [PartType; 7] = [
        PartType::Corner,
        PartType::Edge,
        PartType::Midge,
        PartType::Wing,
        PartType::XCenter,
        PartType::TCenter,
        PartType::Face,
    ];

    /// Canonical name, used as the tag in every encoding
    pub const fn name(&self) -> &'static str {
        match self {
            PartType::Corner => "Corner",
            PartType::Edge => "Edge",
            PartType::Midge => "Midge",
            PartType::Wing => "Wing",
            PartType::XCenter => "XCenter",
            PartType::TCenter => "TCenter",
            PartType::Face => "Face",
        }
    }

    /// Parse from canonical name (exact, case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Parse from canonical name, failing with `UnknownTag`
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| Error::unknown_tag(TagKind::PartType, name))
    }

    /// Number of sticker orientations one physical piece of this type has
    pub const fn orientations(&self) -> usize {
        match self {
            PartType::Corner => 3,
            PartType::Edge | PartType::Midge => 2,
            PartType::Wing | PartType::XCenter | PartType::TCenter | PartType::Face => 1,
        }
    }

    fn names(&self) -> &'static [&'static str] {
        match self {
            PartType::Corner => &CORNERS,
            PartType::Edge | PartType::Midge | PartType::Wing => &EDGES,
            PartType::XCenter => &X_CENTERS,
            PartType::TCenter => &T_CENTERS,
            PartType::Face => &FACES,
        }
    }

    /// Every part of this type, in table order
    pub fn elements(&self) -> &'static [Part] {
        PART_TABLE.elements(*self)
    }

    /// Look up a part of this type by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownTag` if no part of this type has that name.
    pub fn part(&self, name: &str) -> Result<Part> {
        PART_TABLE
            .by_name
            .get(self)
            .and_then(|parts| parts.get(name))
            .copied()
            .ok_or_else(|| Error::unknown_tag(TagKind::Part, format!("{}({})", self.name(), name)))
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PartType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// One sticker position of one piece kind
///
/// Parts are immutable `Copy` values that borrow their name from the static
/// part table. Two parts are equal iff their canonical tokens are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Part {
    part_type: PartType,
    name: &'static str,
    piece: u8,
}

impl Part {
    /// Part type of this part
    #[inline]
    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    /// Name within its part type, e.g. `UF`
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Index of the physical piece, shared by all orientations of that piece
    #[inline]
    pub fn piece(&self) -> u8 {
        self.piece
    }

    /// Whether both parts are orientations of the same physical piece
    pub fn turned_equals(&self, other: &Part) -> bool {
        self.part_type == other.part_type && self.piece == other.piece
    }

    /// Every orientation of this part's physical piece, this part included
    pub fn rotations(&self) -> impl Iterator<Item = Part> + '_ {
        self.part_type
            .elements()
            .iter()
            .copied()
            .filter(move |p| p.turned_equals(self))
    }

    /// Whether this is the orientation with the smallest name among its rotations
    pub fn is_minimal_rotation(&self) -> bool {
        self.rotations().all(|p| self.name <= p.name)
    }

    /// Faces the part touches, upper-cased, in name order
    pub fn face_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.name.chars().map(|c| c.to_ascii_uppercase())
    }

    /// Canonical token, e.g. `Edge(UF)`
    pub fn token(&self) -> String {
        format!("{}{}{}{}", self.part_type.name(), GROUP_OPEN, self.name, GROUP_CLOSE)
    }

    /// Parse a canonical token such as `Corner(URF)`
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if the token is not a single-part group,
    /// `UnknownTag` if the part type or part name is not in the table.
    pub fn parse_token(token: &str) -> Result<Part> {
        let (part_type, inner) = split_typed_group(token, "Part")?;
        if inner.contains(PART_DELIMITER) {
            return Err(Error::malformed(
                "Part",
                format!("expected exactly one part in {:?}", token),
            ));
        }
        part_type.part(inner)
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Part {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_token(s)
    }
}

impl Serialize for Part {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token())
    }
}

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Part::parse_token(&token).map_err(serde::de::Error::custom)
    }
}

/// Split `Type(inner)` into its part type and the text between the brackets
pub(crate) fn split_typed_group<'a>(
    raw: &'a str,
    what: &'static str,
) -> Result<(PartType, &'a str)> {
    let open = raw.find(GROUP_OPEN).ok_or_else(|| {
        Error::malformed(what, format!("missing '{}' in {:?}", GROUP_OPEN, raw))
    })?;
    let inner = raw[open + GROUP_OPEN.len_utf8()..]
        .strip_suffix(GROUP_CLOSE)
        .ok_or_else(|| {
            Error::malformed(what, format!("missing trailing '{}' in {:?}", GROUP_CLOSE, raw))
        })?;
    let part_type = PartType::parse(&raw[..open])?;
    if inner.is_empty() {
        return Err(Error::malformed(what, format!("no parts in {:?}", raw)));
    }
    Ok((part_type, inner))
}

struct PartTable {
    elements: HashMap<PartType, Vec<Part>>,
    by_name: HashMap<PartType, HashMap<&'static str, Part>>,
}

impl PartTable {
    fn build() -> Self {
        let mut elements = HashMap::new();
        let mut by_name: HashMap<PartType, HashMap<&'static str, Part>> = HashMap::new();
        for part_type in PartType::ALL {
            let orientations = part_type.orientations();
            let parts: Vec<Part> = part_type
                .names()
                .iter()
                .enumerate()
                .map(|(index, &name)| {
                    assert!(
                        !name.is_empty() && !name.contains(&RESERVED_CHARS[..]),
                        "part name {:?} contains a reserved character",
                        name
                    );
                    Part {
                        part_type,
                        name,
                        piece: (index / orientations) as u8,
                    }
                })
                .collect();
            let named = by_name.entry(part_type).or_default();
            for part in &parts {
                let previous = named.insert(part.name, *part);
                assert!(previous.is_none(), "duplicate part {:?}", part);
            }
            elements.insert(part_type, parts);
        }
        PartTable { elements, by_name }
    }

    fn elements(&self, part_type: PartType) -> &[Part] {
        self.elements.get(&part_type).map(Vec::as_slice).unwrap_or(&[])
    }
}

static PART_TABLE: Lazy<PartTable> = Lazy::new(PartTable::build);

// ============================================================================
// Tests
// ============================================================================
