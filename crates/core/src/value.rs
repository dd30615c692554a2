//! Dynamic values at the storage boundary
//!
//! The persistence layer does not know the static type of a column. It hands
//! codecs a [`Value`] and the codec checks the variant it owns, rejecting
//! anything else with `TypeMismatch`.
//!
//! ## Variants
//!
//! - Codec owned: `Symbol`, `Part`, `Case`, `InputRepresentation`, `CaseSet`
//! - Foreign scalars: `Bool`, `Int`, `Float`, `Text`
//!
//! Foreign scalars exist so that a caller passing the wrong kind of value gets
//! a typed error instead of a silent stringification. No codec accepts them.
//!
//! ## Equality
//!
//! Different variants are never equal, even if they render the same:
//! `Symbol("UF") != Text("UF")`. Float equality follows IEEE-754.

use crate::case::Case;
use crate::case_set::ConcreteCaseSet;
use crate::error::{Error, Result};
use crate::input::InputRepresentation;
use crate::part::Part;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// A value handed to or returned from a codec through the dynamic seam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Symbol-like token
    Symbol(Symbol),
    /// One puzzle part
    Part(Part),
    /// Part cycles or a scramble
    Case(Case),
    /// Training prompt
    InputRepresentation(InputRepresentation),
    /// Concrete case set
    CaseSet(ConcreteCaseSet),
    /// Boolean, never codec owned
    Bool(bool),
    /// Integer, never codec owned
    Int(i64),
    /// Float, never codec owned
    Float(f64),
    /// Plain text, never codec owned
    Text(String),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Part(a), Value::Part(b)) => a == b,
            (Value::Case(a), Value::Case(b)) => a == b,
            (Value::InputRepresentation(a), Value::InputRepresentation(b)) => a == b,
            (Value::CaseSet(a), Value::CaseSet(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Symbol(_) => Symbol::TYPE_NAME,
            Value::Part(_) => Part::TYPE_NAME,
            Value::Case(_) => Case::TYPE_NAME,
            Value::InputRepresentation(_) => InputRepresentation::TYPE_NAME,
            Value::CaseSet(_) => ConcreteCaseSet::TYPE_NAME,
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Text(_) => "Text",
        }
    }

    /// Whether a codec could own this value
    pub fn is_codec_owned(&self) -> bool {
        !matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_)
        )
    }

    /// Get as &Symbol if this is a Symbol value
    pub fn as_symbol(&self) -> Option<&Symbol> {
        Symbol::as_variant(self)
    }

    /// Get as &Part if this is a Part value
    pub fn as_part(&self) -> Option<&Part> {
        Part::as_variant(self)
    }

    /// Get as &Case if this is a Case value
    pub fn as_case(&self) -> Option<&Case> {
        Case::as_variant(self)
    }

    /// Get as &InputRepresentation if this is an InputRepresentation value
    pub fn as_input_representation(&self) -> Option<&InputRepresentation> {
        InputRepresentation::as_variant(self)
    }

    /// Get as &ConcreteCaseSet if this is a CaseSet value
    pub fn as_case_set(&self) -> Option<&ConcreteCaseSet> {
        ConcreteCaseSet::as_variant(self)
    }
}

/// A type that travels through the dynamic seam as one [`Value`] variant
pub trait ColumnValue: Sized + Clone {
    /// Name used in `TypeMismatch` errors
    const TYPE_NAME: &'static str;

    /// Borrow the typed value if `value` is this type's variant
    fn as_variant(value: &Value) -> Option<&Self>;

    /// Wrap in the matching variant
    fn into_value(self) -> Value;

    /// Like [`ColumnValue::as_variant`], failing with `TypeMismatch`
    fn from_value(value: &Value) -> Result<&Self> {
        Self::as_variant(value)
            .ok_or_else(|| Error::type_mismatch(Self::TYPE_NAME, value.type_name()))
    }
}

macro_rules! column_value {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl ColumnValue for $ty {
            const TYPE_NAME: &'static str = $name;

            fn as_variant(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    };
}

column_value!(Symbol, Symbol, "Symbol");
column_value!(Part, Part, "Part");
column_value!(Case, Case, "Case");
column_value!(InputRepresentation, InputRepresentation, "InputRepresentation");
column_value!(ConcreteCaseSet, CaseSet, "ConcreteCaseSet");

// ============================================================================
// From implementations for foreign scalars
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
