//! Storage Boundary Tests
//!
//! Tests the contract the persistence layer relies on:
//! - Absence in, absence out
//! - Foreign values rejected with a type error, never stringified
//! - Registry lookup by column type name

use crate::common::*;
use cube_trainer::registry::{CASE, CONCRETE_CASE_SET, INPUT_REPRESENTATION, PART, SYMBOL};
use cube_trainer::{
    Case, CodecConfig, CodecRegistry, Error, LetterPair, InputRepresentation, PartType, Symbol,
    Value,
};

const STANDARD: [&str; 5] = [SYMBOL, PART, CASE, INPUT_REPRESENTATION, CONCRETE_CASE_SET];

// ============================================================================
// Absence
// ============================================================================

#[test]
fn absence_passes_through_every_codec() {
    for name in STANDARD {
        let codec = codec(name);
        assert_eq!(codec.encode_value(None).unwrap(), None, "{name}");
        assert_eq!(codec.decode_value(None).unwrap(), None, "{name}");
    }
}

#[test]
fn blank_is_absent_for_every_codec() {
    for name in STANDARD {
        assert_eq!(codec(name).decode_value(Some("")).unwrap(), None, "{name}");
    }
}

#[test]
fn blank_is_rejected_by_structured_codecs_when_configured() {
    let config = CodecConfig {
        blank_is_absent: false,
        ..CodecConfig::default()
    };
    let registry = CodecRegistry::standard(&config).unwrap();
    for name in [PART, CASE, INPUT_REPRESENTATION, CONCRETE_CASE_SET] {
        let err = registry.lookup(name).unwrap().decode_value(Some("")).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload { .. }), "{name}: {err}");
    }
    let symbol = registry.lookup(SYMBOL).unwrap().decode_value(Some("")).unwrap();
    assert_eq!(symbol, Some(Value::from(Symbol::new(""))));
}

#[test]
fn empty_symbol_is_never_stored_as_absence() {
    let empty = Value::from(Symbol::new(""));
    let err = codec(SYMBOL).encode_value(Some(&empty)).unwrap_err();
    assert_eq!(err, Error::ambiguous(""));

    let config = CodecConfig {
        blank_is_absent: false,
        ..CodecConfig::default()
    };
    let registry = CodecRegistry::standard(&config).unwrap();
    let symbol = registry.lookup(SYMBOL).unwrap();
    let raw = symbol.encode_value(Some(&empty)).unwrap();
    assert_eq!(symbol.decode_value(raw.as_deref()).unwrap(), Some(empty));
}

// ============================================================================
// Type guard
// ============================================================================

#[test]
fn foreign_values_rejected_by_every_codec() {
    let foreign = [
        Value::Bool(false),
        Value::Int(42),
        Value::Float(1.5),
        Value::from("Edge(UF)"),
    ];
    for name in STANDARD {
        for value in &foreign {
            let err = codec(name).encode_value(Some(value)).unwrap_err();
            assert!(matches!(err, Error::TypeMismatch { .. }), "{name} accepted {value:?}");
        }
    }
}

#[test]
fn codec_owned_values_rejected_by_other_codecs() {
    let part = Value::from(part(PartType::Edge, "UF"));
    let case = Value::from(Case::scramble("R").unwrap());
    let input = Value::from(InputRepresentation::LetterPair(
        LetterPair::from_raw_data("ab").unwrap(),
    ));

    let err = codec(CASE).encode_value(Some(&part)).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            expected: "Case",
            found: "Part"
        }
    );
    assert!(codec(PART).encode_value(Some(&case)).is_err());
    assert!(codec(CONCRETE_CASE_SET).encode_value(Some(&input)).is_err());
    assert!(codec(SYMBOL).encode_value(Some(&part)).is_err());
}

#[test]
fn type_mismatch_message_names_both_types() {
    let err = codec(PART).encode_value(Some(&Value::Int(7))).unwrap_err();
    assert_eq!(err.to_string(), "Type mismatch: expected Part, got Int");
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn global_registry_has_standard_codecs() {
    let registry = CodecRegistry::global();
    let mut expected = STANDARD.to_vec();
    expected.sort_unstable();
    assert_eq!(registry.names(), expected);
}

#[test]
fn codec_names_describe_owned_type() {
    assert_eq!(codec(SYMBOL).name(), "Symbol");
    assert_eq!(codec(PART).name(), "Part");
    assert_eq!(codec(CASE).name(), "Case");
    assert_eq!(codec(INPUT_REPRESENTATION).name(), "InputRepresentation");
    assert_eq!(codec(CONCRETE_CASE_SET).name(), "ConcreteCaseSet");
}

#[test]
fn unknown_column_type() {
    let err = CodecRegistry::global().lookup("color_scheme").err().unwrap();
    assert_eq!(err, Error::UnknownCodec("color_scheme".to_string()));
}

#[test]
fn duplicate_registration_keeps_first_codec() {
    init_tracing();
    let mut registry = CodecRegistry::standard(&CodecConfig::default()).unwrap();
    let err = registry
        .register(CASE, cube_trainer::PartCodec::default())
        .unwrap_err();
    assert_eq!(err, Error::DuplicateCodec(CASE.to_string()));
    assert_eq!(registry.lookup(CASE).unwrap().name(), "Case");
}

#[test]
fn custom_registry_with_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(cube_trainer::CONFIG_FILE_NAME);
    std::fs::write(&path, "accept_legacy_case_marker = false\n").unwrap();

    let config = CodecConfig::from_file(&path).unwrap();
    let registry = CodecRegistry::standard(&config).unwrap();
    let case = registry.lookup(CASE).unwrap();
    assert!(case.decode_value(Some("PartCycle:Edge(UF UB)")).is_err());
    assert!(case.decode_value(Some("Edge(UF UB)")).unwrap().is_some());
}
