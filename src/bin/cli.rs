//! This is the command line tool that plays rock-paper-scissors against the
//! user. The computer predicts the next hand of the user and plays the hand
//! that beats it.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rps_predictor::game::{judge, Outcome, Score};
use rps_predictor::models::ppm::DEFAULT_ORDER;
use rps_predictor::models::uniform::UniformModel;
use rps_predictor::moves::parse_sequence;
use rps_predictor::utils::distribution::most_likely;
use rps_predictor::utils::sampling;
use rps_predictor::{Model, Move, Predictor};

use std::io::BufRead;
use std::time::Instant;

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!("Session lasted {:03} seconds", duration.as_secs_f32());
        }
    }
}

/// A game between the computer, driven by the model 'M', and the user.
struct Session<M: Model> {
    model: M,
    score: Score,
    rng: StdRng,
}

impl<M: Model> Session<M> {
    fn new(model: M, rng: StdRng) -> Self {
        Self {
            model,
            score: Score::new(),
            rng,
        }
    }

    /// Play one round against the user hand 'human'. The computer commits to
    /// its hand before the model sees the user hand.
    fn play_round(&mut self, human: Move) -> (Move, Outcome) {
        let dist = self.model.distribution();
        let predicted = sampling::draw(&dist, &mut self.rng);
        let computer = predicted.counter();
        let outcome = judge(computer, human);
        self.score.record(outcome);
        self.model.update(human);
        log::debug!(
            "Predicted {} (most likely {}), the user played {}",
            predicted,
            most_likely(&dist),
            human
        );
        (computer, outcome)
    }

    fn reset(&mut self) {
        self.model.reset();
        self.score.reset();
    }

    fn report(&self) {
        let score = &self.score;
        log::info!(
            "Won {}, lost {}, drew {} out of {} rounds.",
            score.wins,
            score.losses,
            score.draws,
            score.matches()
        );
        if let Some(rate) = score.win_rate() {
            log::info!("Win rate is {:.2}%.", rate * 100.);
        }
    }
}

fn print_round(round: usize, human: Move, computer: Move, outcome: Outcome) {
    let result = match outcome {
        Outcome::Win => "computer wins",
        Outcome::Lose => "you win",
        Outcome::Draw => "draw",
    };
    println!("{}) you: {} computer: {} - {}", round, human, computer, result);
}

/// Play the rounds in 'moves' without user interaction.
fn play_sequence<M: Model>(session: &mut Session<M>, moves: &[Move]) {
    for (i, human) in moves.iter().enumerate() {
        let (computer, outcome) = session.play_round(*human);
        print_round(i + 1, *human, computer, outcome);
    }
}

/// Read one hand per line from the standard input until 'quit' or EOF.
fn play_interactive<M: Model>(session: &mut Session<M>) {
    println!("Enter g (rock), c (scissors) or p (paper). 'reset' or 'quit'.");
    let stdin = std::io::stdin();
    let mut round = 0;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("Can't read the input: {}", err);
                break;
            }
        };

        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "reset" => {
                log::info!("Starting a new session");
                session.reset();
                round = 0;
                continue;
            }
            _ => {}
        }

        if let Some(human) = Move::parse(&line) {
            round += 1;
            let (computer, outcome) = session.play_round(human);
            print_round(round, human, computer, outcome);
        } else {
            log::warn!("Unknown hand '{}'", line.trim());
        }
    }
}

fn run<M: Model>(model: M, rng: StdRng, moves: Option<Vec<Move>>) {
    let mut session = Session::new(model, rng);
    let timer = Timer::new();
    match moves {
        Some(moves) => play_sequence(&mut session, &moves),
        None => play_interactive(&mut session),
    }
    session.report();
    drop(timer);
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("order")
                .long("order")
                .value_name("N")
                .help("The length of the longest context")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed the random number generator")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("mode")
                .help("The model used for predicting the next hand.")
                .value_parser(["ppm", "random"])
                .num_args(1),
        )
        .arg(
            Arg::new("MOVES")
                .help("Play this sequence of hands, such as 'gcpgc'")
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let cli_order = matches
        .get_one::<usize>("order")
        .copied()
        .unwrap_or(DEFAULT_ORDER);
    let cli_mode = matches
        .get_one::<String>("mode")
        .cloned()
        .unwrap_or_else(|| String::from("ppm"));

    if cli_order == 0 {
        log::error!("The order must be positive");
        return;
    }

    let rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let mut moves = None;
    if let Some(text) = matches.get_one::<String>("MOVES") {
        moves = parse_sequence(text);
        if moves.is_none() {
            log::error!("Invalid sequence of hands '{}'", text);
            return;
        }
    }

    if cli_mode == "random" {
        log::info!("Playing with the random model");
        run(UniformModel::new(), rng, moves);
        return;
    }

    log::info!("Playing with the PPM model of order {}", cli_order);
    run(Predictor::new(cli_order), rng, moves);
}
