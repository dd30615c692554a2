//! Serde Integration Tests
//!
//! Domain values also travel as JSON (API payloads, fixtures). Parts and
//! part cycles use their canonical strings; everything else is structural.

use crate::common::*;
use cube_trainer::{
    Case, ConcreteCaseSet, ConcreteFloatingTwoTwistSet, InputRepresentation, LetterPair, Part,
    PartCycle, PartType, Value,
};

#[test]
fn part_serializes_as_token() {
    let json = serde_json::to_string(&part(PartType::Wing, "UF")).unwrap();
    assert_eq!(json, "\"Wing(UF)\"");
    let restored: Part = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, part(PartType::Wing, "UF"));
}

#[test]
fn part_cycle_serializes_as_raw_data() {
    let json = serde_json::to_string(&cycle("XCenter(Urf Ubr Ufl)")).unwrap();
    assert_eq!(json, "\"XCenter(Urf Ubr Ufl)\"");
}

#[test]
fn invalid_part_rejected_on_deserialize() {
    assert!(serde_json::from_str::<Part>("\"Edge(XX)\"").is_err());
    assert!(serde_json::from_str::<PartCycle>("\"Edge()\"").is_err());
}

#[test]
fn case_json_roundtrip() {
    let case = Case::from_cycles(vec![cycle("Corner(URF UBR DFR)")]).unwrap();
    let json = serde_json::to_string(&case).unwrap();
    assert_eq!(json, r#"{"PartCycles":["Corner(URF UBR DFR)"]}"#);
    assert_eq!(serde_json::from_str::<Case>(&json).unwrap(), case);
}

#[test]
fn empty_case_rejected_on_deserialize() {
    assert!(serde_json::from_str::<Case>(r#"{"PartCycles":[]}"#).is_err());
    assert!(serde_json::from_str::<Case>(r#"{"Scramble":""}"#).is_err());
}

#[test]
fn tagged_values_json_roundtrip() {
    let input = InputRepresentation::LetterPair(LetterPair::from_raw_data("xy").unwrap());
    let json = serde_json::to_string(&input).unwrap();
    assert_eq!(json, r#"{"LetterPair":"xy"}"#);
    assert_eq!(serde_json::from_str::<InputRepresentation>(&json).unwrap(), input);

    let set = ConcreteCaseSet::ConcreteFloatingTwoTwistSet(
        ConcreteFloatingTwoTwistSet::new(PartType::Corner).unwrap(),
    );
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(serde_json::from_str::<ConcreteCaseSet>(&json).unwrap(), set);
}

#[test]
fn dynamic_value_json_roundtrip() {
    let value = Value::from(Case::scramble("F2 D'").unwrap());
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"Case":{"Scramble":"F2 D'"}}"#);
    assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), value);
}
