//! Speed and strength benchmarks for the engine
//!
//! Times the search at increasing depths on the opening position, then
//! plays a batch of games against a seeded random opponent at the default
//! depth. Summaries go to stdout and the raw series to a binary results
//! file; all timing happens out here, the engine itself never measures
//! anything.

use anyhow::Result;
use byteorder::{BigEndian, WriteBytesExt};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;

use std::fs::OpenOptions;
use std::io::BufWriter;
use std::sync::mpsc::channel;
use std::thread;
use std::time::Instant;

use connect4_engine::board::{Board, Cell};
use connect4_engine::solver::{Solver, DEFAULT_DEPTH, LOSS_SCORE, WIN_SCORE};

const RESULTS_PATH: &str = "benchmark_results.bin";
const NUM_GAMES: u64 = 100;
const BASE_SEED: u64 = 0x4AA2_29C6_55F5_DB0D;

#[derive(Copy, Clone, Default)]
struct GameRecord {
    // 1 = engine win, -1 = random player win, 0 = draw
    outcome: i8,
    ai_nanos: u64,
    ai_moves: u32,
    nodes: u64,
}

/// Plays one game of engine against a random player, alternating from a
/// seeded coin toss
fn play_game(depth: u8, seed: u64) -> GameRecord {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut board = Board::new();
    let mut solver = Solver::new(Cell::PlayerOne).with_depth(depth);

    let mut ai_turn = rng.gen_bool(0.5);
    let mut record = GameRecord::default();

    loop {
        if ai_turn {
            let start = Instant::now();
            let column = match solver.choose_move(&board) {
                Some(column) => column,
                None => break,
            };
            record.ai_nanos += start.elapsed().as_nanos() as u64;
            record.ai_moves += 1;

            let row = board.next_open_row(column).unwrap();
            board.place(row, column, Cell::PlayerOne);
            if board.has_four(Cell::PlayerOne) {
                record.outcome = 1;
                break;
            }
        } else {
            let columns = board.valid_columns();
            let column = columns[rng.gen_range(0..columns.len())];

            let row = board.next_open_row(column).unwrap();
            board.place(row, column, Cell::PlayerTwo);
            if board.has_four(Cell::PlayerTwo) {
                record.outcome = -1;
                break;
            }
        }
        ai_turn = !ai_turn;

        if board.is_full() {
            record.outcome = 0;
            break;
        }
    }
    record.nodes = solver.node_count as u64;
    record
}

/// Times a full-window search of the opening position at every depth up
/// to the default
fn benchmark_speed() -> Vec<(u8, u64, u64)> {
    println!("Search speed against depth:");

    let board = Board::new();
    let mut results = Vec::new();

    for depth in 1..=DEFAULT_DEPTH {
        let mut solver = Solver::new(Cell::PlayerOne).with_depth(depth);

        let start = Instant::now();
        let (_column, _score) = solver.search(&board, depth, LOSS_SCORE, WIN_SCORE, true);
        let elapsed = start.elapsed();

        println!(
            "Depth {}: {:.4}s, {} nodes",
            depth,
            elapsed.as_secs_f64(),
            solver.node_count
        );
        results.push((depth, elapsed.as_nanos() as u64, solver.node_count as u64));
    }
    results
}

/// Simulates [`NUM_GAMES`] independent games against a random player, one
/// solver (and one cache) per game
fn benchmark_win_rate() -> Result<Vec<GameRecord>> {
    let progress = ProgressBar::new(NUM_GAMES);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Simulating games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let (tx, rx) = channel();
    thread::spawn(move || {
        (0..NUM_GAMES).into_par_iter().for_each_with(tx, |tx, game| {
            tx.send(play_game(DEFAULT_DEPTH, BASE_SEED ^ game)).unwrap();
        });
    });

    let mut records = Vec::new();
    for record in rx {
        records.push(record);
        progress.inc(1);
    }
    progress.finish();

    let wins = records.iter().filter(|r| r.outcome == 1).count();
    let losses = records.iter().filter(|r| r.outcome == -1).count();
    let draws = records.iter().filter(|r| r.outcome == 0).count();

    let total_nanos: u64 = records.iter().map(|r| r.ai_nanos).sum();
    let total_moves: u64 = records.iter().map(|r| u64::from(r.ai_moves)).sum();

    println!(
        "AI win rate: {:.2}% ({} wins, {} losses, {} draws)",
        wins as f64 * 100.0 / records.len() as f64,
        wins,
        losses,
        draws
    );
    if total_moves > 0 {
        println!(
            "Mean AI move time: {:.4}ms over {} moves",
            total_nanos as f64 / total_moves as f64 / 1_000_000.0,
            total_moves
        );
    }

    Ok(records)
}

/// Writes the raw measurement series as big-endian records
fn write_results(speed: &[(u8, u64, u64)], games: &[GameRecord]) -> Result<()> {
    let mut file = BufWriter::new(
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(RESULTS_PATH)?,
    );

    file.write_u32::<BigEndian>(speed.len() as u32)?;
    for &(depth, nanos, nodes) in speed {
        file.write_u8(depth)?;
        file.write_u64::<BigEndian>(nanos)?;
        file.write_u64::<BigEndian>(nodes)?;
    }

    file.write_u32::<BigEndian>(games.len() as u32)?;
    for game in games {
        file.write_i8(game.outcome)?;
        file.write_u64::<BigEndian>(game.ai_nanos)?;
        file.write_u32::<BigEndian>(game.ai_moves)?;
        file.write_u64::<BigEndian>(game.nodes)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("Running search speed benchmark...");
    let speed = benchmark_speed();

    println!("\nRunning win rate benchmark against a random player...");
    let games = benchmark_win_rate()?;

    write_results(&speed, &games)?;
    println!("Results written to {}", RESULTS_PATH);
    Ok(())
}
