//! Concurrent Access Tests
//!
//! Codecs are immutable after construction; many threads share the global
//! registry without locking.

use crate::common::*;
use cube_trainer::registry::{CASE, INPUT_REPRESENTATION, PART};
use cube_trainer::{Case, CodecRegistry, Value};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const ITERATIONS: usize = 200;

#[test]
fn global_registry_initialized_once_across_threads() {
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                CodecRegistry::global() as *const CodecRegistry as usize
            })
        })
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn parallel_encode_decode() {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                let names = ["UF", "UB", "DF", "DB", "UR", "UL"];
                for i in 0..ITERATIONS {
                    let a = names[(t + i) % names.len()];
                    let b = names[(t + i + 1) % names.len()];
                    let raw = format!("Edge({} {})", a, b);
                    let case = Case::from_cycles(vec![cycle(&raw)]).unwrap();
                    let value = Value::from(case);

                    let raw = codec(CASE).encode_value(Some(&value)).unwrap();
                    let decoded = codec(CASE).decode_value(raw.as_deref()).unwrap();
                    assert_eq!(decoded, Some(value));

                    let part = codec(PART).decode_value(Some("Corner(URF)")).unwrap();
                    assert!(part.is_some());

                    let input = codec(INPUT_REPRESENTATION)
                        .decode_value(Some("PaoLetterPair:action:qr"))
                        .unwrap();
                    assert!(input.is_some());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
