use huffman_engine::{Engine, Error};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip_on_training_text(training in "\\PC{1,300}") {
        let engine = Engine::new(&training).unwrap();
        let bits = engine.encode(&training).unwrap();
        prop_assert!(bits.iter().all(|&b| b <= 1));
        prop_assert_eq!(engine.decode(&bits).unwrap(), training);
    }

    #[test]
    fn test_prefix_freedom(training in "[a-zA-Z0-9]{1,300}") {
        let engine = Engine::new(&training).unwrap();
        let table = engine.encode_table();
        for (a, pa) in table.iter() {
            for (b, pb) in table.iter() {
                if a != b {
                    prop_assert!(!pa.is_prefix_of(pb));
                }
            }
        }
    }

    #[test]
    fn test_table_inversion(training in "\\PC{1,300}") {
        let engine = Engine::new(&training).unwrap();
        for (s, path) in engine.encode_table().iter() {
            prop_assert_eq!(engine.decode_table().get(&path.to_string()), Some(s));
        }
    }

    #[test]
    fn test_weight_conservation(training in "\\PC{1,300}") {
        let engine = Engine::new(&training).unwrap();
        prop_assert_eq!(engine.tree().weight(), engine.frequencies().total());
    }

    #[test]
    fn test_partial_code_is_truncated(training in "[a-f]{1,100}") {
        let engine = Engine::new(&training).unwrap();
        for (_, path) in engine.encode_table().iter() {
            let bits = path.bits();
            for cut in 1..bits.len() {
                let truncated = matches!(
                    engine.decode(&bits[..cut]),
                    Err(Error::TruncatedInput { .. })
                );
                prop_assert!(truncated);
            }
        }
    }
}

#[test]
fn test_check_on_english_text() {
    let text = "the quick brown fox jumps over the lazy dog";
    let engine = Engine::new(text).unwrap();
    let report = engine.check(text).unwrap();
    assert_eq!(report.symbols, text.len());
    assert!(report.ratio().unwrap() < 1.0);
}

#[test]
fn test_unknown_symbol_from_other_text() {
    let engine = Engine::new("hello").unwrap();
    assert!(matches!(
        engine.encode("help"),
        Err(Error::UnknownSymbol { symbol: 'p', .. })
    ));
}

proptest! {
    #[test]
    fn test_single_symbol_trailing_one_is_truncated(zeros in 0usize..20) {
        let engine = Engine::new("aaaa").unwrap();
        let mut bits = vec![0u8; zeros];
        bits.push(1);
        let truncated = matches!(
            engine.decode(&bits),
            Err(Error::TruncatedInput { pending }) if pending == "1"
        );
        prop_assert!(truncated);
    }
}
