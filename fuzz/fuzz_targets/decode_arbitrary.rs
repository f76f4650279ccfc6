#![no_main]
use huffman_engine::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, Vec<u8>)| {
    let (training, raw) = data;
    let Ok(engine) = Engine::new(&training) else {
        return;
    };

    // Arbitrary bits may be rejected, but must never panic.
    let bits: Vec<u8> = raw.iter().map(|b| b & 1).collect();
    let _ = engine.decode(&bits);

    let encoded = engine.encode(&training).unwrap();
    assert_eq!(engine.decode(&encoded).unwrap(), training);
});
