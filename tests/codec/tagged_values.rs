//! Tagged Value Tests
//!
//! Tests input representations and concrete case sets through the registry:
//! - Stored strings for every variant
//! - Exact, case-sensitive tag lookup
//! - Payloads that contain the separator
//! - Payload validation per variant

use crate::common::*;
use cube_trainer::registry::{CASE, CONCRETE_CASE_SET, INPUT_REPRESENTATION};
use cube_trainer::{
    AlgName, BufferedParitySet, BufferedThreeCycleSet, ConcreteCaseSet, Error, InputRepresentation,
    LetterPair, LetterPairSequence, Pao, PaoLetterPair, PartType, Scramble, TagKind, Value,
};

fn encode(name: &str, value: Value) -> String {
    codec(name).encode_value(Some(&value)).unwrap().unwrap()
}

fn decode(name: &str, raw: &str) -> Result<Option<Value>, Error> {
    codec(name).decode_value(Some(raw))
}

// ============================================================================
// Input representations
// ============================================================================

#[test]
fn input_representation_strings() {
    let lp = LetterPair::from_raw_data("ab").unwrap();
    let cases = [
        (InputRepresentation::LetterPair(lp.clone()), "LetterPair:ab"),
        (
            InputRepresentation::PaoLetterPair(PaoLetterPair::new(Pao::Object, lp.clone())),
            "PaoLetterPair:object:ab",
        ),
        (
            InputRepresentation::AlgName(
                AlgName::simple("U2")
                    .unwrap()
                    .plus(&AlgName::simple("Ja").unwrap()),
            ),
            "AlgName:U2 + Ja",
        ),
        (
            InputRepresentation::LetterPairSequence(
                LetterPairSequence::new(vec![lp, LetterPair::from_raw_data("cd").unwrap()])
                    .unwrap(),
            ),
            "LetterPairSequence:ab cd",
        ),
        (
            InputRepresentation::Scramble(Scramble::new("R U R' U'").unwrap()),
            "Scramble:R U R' U'",
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(encode(INPUT_REPRESENTATION, Value::from(value.clone())), expected);
        assert_eq!(
            decode(INPUT_REPRESENTATION, expected).unwrap(),
            Some(Value::from(value))
        );
    }
}

#[test]
fn unknown_tag_rejected() {
    let err = decode(INPUT_REPRESENTATION, "Bogus:payload").unwrap_err();
    assert_eq!(err, Error::unknown_tag(TagKind::Variant, "Bogus"));
}

#[test]
fn tag_lookup_is_exact() {
    for raw in ["letterPair:ab", "LETTERPAIR:ab", " LetterPair:ab", "LetterPair :ab"] {
        let err = decode(INPUT_REPRESENTATION, raw).unwrap_err();
        assert!(matches!(err, Error::UnknownTag { kind: TagKind::Variant, .. }), "{raw}");
    }
}

#[test]
fn only_first_separator_splits_tag() {
    let value = decode(INPUT_REPRESENTATION, "Scramble:R:U").unwrap().unwrap();
    let scramble = match value.as_input_representation() {
        Some(InputRepresentation::Scramble(s)) => s.clone(),
        other => panic!("expected a scramble, got {:?}", other),
    };
    assert_eq!(scramble.algorithm(), "R:U");
}

#[test]
fn bracketed_alg_names_rejected() {
    let err = decode(INPUT_REPRESENTATION, "AlgName:(U2 + Ja) + y").unwrap_err();
    assert!(matches!(err, Error::MalformedPayload { what: "AlgName", .. }));
}

#[test]
fn plus_inside_a_simple_alg_name() {
    let value = decode(INPUT_REPRESENTATION, "AlgName:A+B").unwrap().unwrap();
    assert_eq!(
        value,
        Value::from(InputRepresentation::AlgName(AlgName::simple("A+B").unwrap()))
    );
    assert_eq!(encode(INPUT_REPRESENTATION, value), "AlgName:A+B");
}

#[test]
fn invalid_payloads_rejected() {
    for raw in [
        "LetterPair:",
        "LetterPair:a b",
        "PaoLetterPair:ab",
        "PaoLetterPair:place:ab",
        "LetterPairSequence:ab  cd",
        "Scramble:",
    ] {
        let err = decode(INPUT_REPRESENTATION, raw).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload { .. }), "{raw}: {err}");
    }
}

// ============================================================================
// Concrete case sets
// ============================================================================

#[test]
fn case_set_strings() {
    let set = ConcreteCaseSet::BufferedThreeCycleSet(
        BufferedThreeCycleSet::new(part(PartType::Edge, "UF")).unwrap(),
    );
    assert_eq!(encode(CONCRETE_CASE_SET, Value::from(set)), "BufferedThreeCycleSet:Edge:UF");

    let parity = ConcreteCaseSet::BufferedParitySet(
        BufferedParitySet::new(part(PartType::Corner, "UFL"), PartType::Edge).unwrap(),
    );
    assert_eq!(
        encode(CONCRETE_CASE_SET, Value::from(parity)),
        "BufferedParitySet:Corner:Edge:UFL"
    );
}

#[test]
fn case_set_descriptions() {
    let decoded = decode(CONCRETE_CASE_SET, "BufferedThreeCycleSet:Corner:UFL")
        .unwrap()
        .unwrap();
    let set = decoded.as_case_set().unwrap();
    assert_eq!(set.to_string(), "corner 3-cycles for buffer UFL");
    assert_eq!(set.buffer(), Some(part(PartType::Corner, "UFL")));

    let twists = decode(CONCRETE_CASE_SET, "ConcreteFloatingTwoTwistSet:Edge")
        .unwrap()
        .unwrap();
    assert_eq!(twists.as_case_set().unwrap().to_string(), "floating edge flips");

    let twists = decode(CONCRETE_CASE_SET, "ConcreteFloatingTwoTwistSet:Corner")
        .unwrap()
        .unwrap();
    assert_eq!(twists.as_case_set().unwrap().to_string(), "floating corner twists");
}

#[test]
fn case_set_cases_survive_the_case_column() {
    let sets = [
        "BufferedThreeCycleSet:Edge:UF",
        "BufferedParitySet:Corner:Edge:UBR",
        "BufferedParityTwistSet:Corner:Edge:URF",
        "ConcreteFloatingTwoTwistSet:Corner",
        "ConcreteFloatingTwoTwistSet:Edge",
        "BufferedThreeTwistSet:URF",
    ];
    for raw in sets {
        let decoded = decode(CONCRETE_CASE_SET, raw).unwrap().unwrap();
        let set = decoded.as_case_set().unwrap();
        let cases = set.cases();
        assert!(!cases.is_empty(), "{raw}");
        for case in cases {
            let stored = encode(CASE, Value::from(case));
            let restored = decode(CASE, &stored).unwrap().unwrap();
            assert!(set.strict_match(restored.as_case().unwrap()), "{raw}: {stored}");
        }
    }
}

#[test]
fn twist_cases_store_their_twist() {
    let decoded = decode(CONCRETE_CASE_SET, "BufferedThreeTwistSet:URF").unwrap().unwrap();
    let set = decoded.as_case_set().unwrap();
    let stored = encode(CASE, Value::from(set.cases()[0].clone()));
    assert!(stored.starts_with("Corner(URF)*1:"), "{stored}");

    let restored = decode(CASE, "Corner(URF)*2:Corner(BUL)*2:Corner(DFR)*2").unwrap().unwrap();
    assert!(set.strict_match(restored.as_case().unwrap()));
    let mixed = decode(CASE, "Corner(URF)*1:Corner(BUL)*2:Corner(DFR)*2").unwrap().unwrap();
    assert!(!set.strict_match(mixed.as_case().unwrap()));
}

#[test]
fn case_set_part_count_enforced() {
    for raw in [
        "BufferedThreeCycleSet:Edge",
        "BufferedThreeCycleSet:Edge:UF:UB",
        "BufferedParitySet:Corner:UFR",
        "ConcreteFloatingTwoTwistSet:Corner:URF",
        "BufferedThreeTwistSet:",
    ] {
        assert!(decode(CONCRETE_CASE_SET, raw).is_err(), "{raw}");
    }
}

#[test]
fn case_set_unknown_buffer() {
    let err = decode(CONCRETE_CASE_SET, "BufferedThreeTwistSet:UF").unwrap_err();
    assert!(matches!(err, Error::UnknownTag { kind: TagKind::Part, .. }));
}

#[test]
fn case_set_constraints() {
    for raw in [
        "BufferedThreeCycleSet:Face:U",
        "ConcreteFloatingTwoTwistSet:Wing",
        "BufferedParityTwistSet:Edge:Corner:UF",
    ] {
        let err = decode(CONCRETE_CASE_SET, raw).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload { .. }), "{raw}: {err}");
    }
}

#[test]
fn case_sets_and_input_representations_do_not_mix() {
    let err = decode(CONCRETE_CASE_SET, "LetterPair:ab").unwrap_err();
    assert!(matches!(err, Error::UnknownTag { kind: TagKind::Variant, .. }));
    let err = decode(INPUT_REPRESENTATION, "BufferedThreeTwistSet:URF").unwrap_err();
    assert!(matches!(err, Error::UnknownTag { kind: TagKind::Variant, .. }));
}
