use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use rps_predictor::models::uniform::UniformModel;
use rps_predictor::moves::parse_sequence;
use rps_predictor::utils::distribution::is_normalized;
use rps_predictor::{Model, Move, MoveSet, Predictor};

fn hands(text: &str) -> Vec<Move> {
    parse_sequence(text).unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_empty_history_is_uniform() {
    let predictor = Predictor::new(3);
    let probs = predictor.probability(&[], MoveSet::FULL);
    assert_eq!(probs, [1. / 3.; 3]);
    assert_eq!(predictor.distribution_at(3), [1. / 3.; 3]);
}

#[test]
fn test_unfollowed_context_escapes_to_uniform() {
    let mut predictor = Predictor::new(3);
    predictor.observe(Move::Rock);
    let probs = predictor.probability(&hands("g"), MoveSet::FULL);
    for p in probs {
        assert_close(p, 1. / 3.);
    }
}

#[test]
fn test_repeated_move() {
    let mut predictor = Predictor::new(3);
    for mv in hands("ggg") {
        predictor.observe(mv);
    }
    let probs = predictor.probability(&hands("g"), MoveSet::FULL);
    assert_close(probs[Move::Rock.index()], 2. / 4.);
    assert_close(probs[Move::Scissors.index()], 1. / 4.);
    assert_close(probs[Move::Paper.index()], 1. / 4.);
}

#[test]
fn test_partial_candidates() {
    let mut predictor = Predictor::new(3);
    for mv in hands("gcgcgp") {
        predictor.observe(mv);
    }
    let candidates: MoveSet =
        [Move::Scissors, Move::Paper].into_iter().collect();
    let probs = predictor.probability(&hands("g"), candidates);
    // 'g' was followed by 'c' twice and by 'p' once.
    assert_eq!(probs[Move::Rock.index()], 0.);
    assert_close(probs[Move::Scissors.index()], 2. / 3.);
    assert_close(probs[Move::Paper.index()], 1. / 3.);
}

#[test]
fn test_probabilities_sum_to_one() {
    let mut rng = StdRng::seed_from_u64(7);
    let distr = Uniform::new(0, 3);
    let mut predictor = Predictor::new(4);

    for _ in 0..500 {
        let mv = Move::from_index(distr.sample(&mut rng)).unwrap();
        predictor.observe(mv);

        let history = predictor.history();
        for len in 0..=history.len().min(6) {
            let context = &history[history.len() - len..];
            let probs = predictor.probability(context, MoveSet::FULL);
            assert!(is_normalized(&probs), "{:?}", probs);
        }
    }
}

#[test]
fn test_learns_a_cycle() {
    let mut predictor = Predictor::new(3);
    for _ in 0..50 {
        for mv in hands("gcp") {
            predictor.observe(mv);
        }
    }
    // After 'p' the cycle continues with 'g'.
    let probs = predictor.distribution_at(2);
    assert!(probs[Move::Rock.index()] > 0.9, "{:?}", probs);
}

#[test]
fn test_predict_with_fixed_source() {
    let mut predictor = Predictor::new(3);
    for mv in hands("ggg") {
        predictor.observe(mv);
    }
    // The distribution over the last move is {g: 1/2, c: 1/4, p: 1/4}.
    let low = &mut StepRng::new(0, 0);
    assert_eq!(predictor.predict_with(1, low), Move::Rock);
    let high = &mut StepRng::new(u64::MAX, 0);
    assert_eq!(predictor.predict_with(1, high), Move::Paper);
}

#[test]
fn test_predict_is_read_only() {
    let mut predictor = Predictor::new(3);
    for mv in hands("gcpgcp") {
        predictor.observe(mv);
    }
    let before = predictor.distribution_at(3);
    let nodes = predictor.trie().num_nodes();
    for _ in 0..100 {
        let _ = predictor.predict();
    }
    assert_eq!(predictor.history().len(), 6);
    assert_eq!(predictor.trie().num_nodes(), nodes);
    assert_eq!(predictor.distribution_at(3), before);
}

#[test]
fn test_predict_next_hand() {
    let mut rng = StdRng::seed_from_u64(1);
    let distr = Uniform::new(0, 3);
    let mut predictor = Predictor::new(3);
    for _ in 0..100 {
        predictor.observe(Move::from_index(distr.sample(&mut rng)).unwrap());
        let mv = predictor.predict_with(3, &mut rng);
        assert!(Move::ALL.contains(&mv));
    }
}

#[test]
fn test_reset() {
    let mut predictor = Predictor::new(3);
    predictor.reset();
    for mv in hands("gcpggcc") {
        predictor.observe(mv);
    }
    predictor.reset();

    let fresh = Predictor::new(3);
    assert_eq!(predictor.order(), 3);
    assert!(predictor.history().is_empty());
    assert_eq!(predictor.trie().count(&[]), 0);
    assert_eq!(predictor.trie().num_nodes(), fresh.trie().num_nodes());
    assert_eq!(predictor.distribution_at(3), fresh.distribution_at(3));

    predictor.observe(Move::Paper);
    assert_eq!(predictor.trie().count(&hands("p")), 1);
    assert_eq!(predictor.trie().count(&hands("c")), 0);
}

#[test]
fn test_model_trait() {
    fn drive<M: Model>(model: &mut M) -> Move {
        for mv in hands("cpcpcp") {
            model.update(mv);
        }
        let dist = model.distribution();
        assert!(is_normalized(&dist));
        model.predict(&mut StepRng::new(0, 0))
    }

    let mut predictor = Predictor::default();
    let _ = drive(&mut predictor);
    assert_eq!(predictor.history().len(), 6);
    Model::reset(&mut predictor);
    assert!(predictor.history().is_empty());

    let mut uniform = UniformModel::new();
    assert_eq!(drive(&mut uniform), Move::Rock);
}

#[test]
#[should_panic]
fn test_zero_order() {
    let _ = Predictor::new(0);
}
