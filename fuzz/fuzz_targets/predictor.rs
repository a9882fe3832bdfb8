#![no_main]

use libfuzzer_sys::fuzz_target;
use rps_predictor::utils::distribution::is_normalized;
use rps_predictor::utils::sampling::select;
use rps_predictor::{Move, MoveSet, Predictor};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // The first byte selects the order, the rest are the moves.
    let order = 1 + (data[0] % 8) as usize;
    let mut predictor = Predictor::new(order);

    for byte in &data[1..] {
        let mv = Move::ALL[(*byte % 3) as usize];
        let probs = predictor.distribution_at(order);
        assert!(is_normalized(&probs));
        let r = (*byte as f64) / 256.;
        let _ = select(&probs, r);
        predictor.observe(mv);
    }

    let history = predictor.history();
    let len = history.len();
    assert_eq!(predictor.trie().count(&[]), len as u64);
    // Contexts longer than the order escape all the way to the uniform split.
    let context = &history[len - len.min(2 * order)..];
    let probs = predictor.probability(context, MoveSet::FULL);
    assert!(is_normalized(&probs));
});
