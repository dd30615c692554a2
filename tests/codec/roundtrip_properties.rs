//! Round-trip Properties
//!
//! `decode(encode(v)) == v` for generated values of every codec-owned type,
//! both through the typed codecs and through the registry's dynamic seam.

use crate::common::*;
use cube_trainer::registry::{CASE, CONCRETE_CASE_SET, INPUT_REPRESENTATION, PART, SYMBOL};
use cube_trainer::{
    CaseCodec, Codec, CodecRegistry, ConcreteCaseSet, Error, InputRepresentation, PartCodec,
    PartCycle, Symbol, TaggedUnion, TaggedUnionCodec, Value, SEPARATOR,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn part_roundtrip(part in arb_part()) {
        let codec = PartCodec::default();
        let raw = codec.encode(&part).unwrap();
        prop_assert_eq!(codec.decode(&raw).unwrap(), part);
    }

    #[test]
    fn part_cycle_raw_data_roundtrip(cycle in arb_cycle()) {
        let raw = cycle.to_raw_data();
        prop_assert!(!raw.contains(SEPARATOR));
        prop_assert_eq!(PartCycle::from_raw_data(&raw).unwrap(), cycle);
    }

    #[test]
    fn case_roundtrip(case in arb_case()) {
        let codec = CaseCodec::default();
        let raw = codec.encode(&case).unwrap();
        prop_assert_eq!(codec.decode(&raw).unwrap(), case);
    }

    #[test]
    fn case_legacy_marker_is_transparent(case in arb_case()) {
        let codec = CaseCodec::default();
        let raw = codec.encode(&case).unwrap();
        let legacy = format!("PartCycle:{}", raw);
        prop_assert_eq!(codec.decode(&legacy).unwrap(), case);
    }

    #[test]
    fn input_representation_roundtrip(value in arb_input_representation()) {
        let codec: TaggedUnionCodec<InputRepresentation> = TaggedUnionCodec::new(true).unwrap();
        let raw = codec.encode(&value).unwrap();
        let prefix = format!("{}{}", value.tag(), SEPARATOR);
        prop_assert!(raw.starts_with(&prefix));
        prop_assert_eq!(codec.decode(&raw).unwrap(), value);
    }

    #[test]
    fn case_set_roundtrip(value in arb_case_set()) {
        let codec: TaggedUnionCodec<ConcreteCaseSet> = TaggedUnionCodec::new(true).unwrap();
        let raw = codec.encode(&value).unwrap();
        prop_assert_eq!(codec.decode(&raw).unwrap(), value);
    }

    #[test]
    fn symbol_roundtrip(token in "\\PC{0,20}") {
        let value = Value::from(Symbol::new(token.as_str()));
        match codec(SYMBOL).encode_value(Some(&value)) {
            Ok(raw) => {
                prop_assert_eq!(codec(SYMBOL).decode_value(raw.as_deref()).unwrap(), Some(value));
            }
            Err(err) => {
                prop_assert!(token.is_empty());
                prop_assert!(matches!(err, Error::AmbiguousEncoding { .. }), "unexpected error: {:?}", err);
            }
        }
    }

    #[test]
    fn registry_roundtrip(
        part in arb_part(),
        case in arb_case(),
        input in arb_input_representation(),
        set in arb_case_set(),
    ) {
        let pairs = [
            (PART, Value::from(part)),
            (CASE, Value::from(case)),
            (INPUT_REPRESENTATION, Value::from(input)),
            (CONCRETE_CASE_SET, Value::from(set)),
        ];
        for (name, value) in pairs {
            let dyn_codec = codec(name);
            let raw = dyn_codec.encode_value(Some(&value)).unwrap();
            prop_assert!(raw.is_some());
            prop_assert_eq!(dyn_codec.decode_value(raw.as_deref()).unwrap(), Some(value));
        }
    }

    #[test]
    fn decoding_arbitrary_text_never_panics(raw in "\\PC{0,40}") {
        for name in CodecRegistry::global().names() {
            let _ = codec(name).decode_value(Some(raw.as_str()));
        }
    }
}
