use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_engine::board::Cell;
use connect4_engine::solver::Solver;

mod session;
use session::*;

fn main() -> Result<()> {
    let mut session = GameSession::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // one agent per AI-controlled side, each with its own cache
    let mut solvers = (Solver::new(Cell::PlayerOne), Solver::new(Cell::PlayerTwo));

    // game loop
    loop {
        session.display().expect("Failed to draw board!");

        match session.state {
            GameState::Playing => {
                let next_move =
                    // AI player
                    if (session.player_one && ai_players.0) || (!session.player_one && ai_players.1) {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let solver = if session.player_one {
                            &mut solvers.0
                        } else {
                            &mut solvers.1
                        };

                        match solver.choose_move(&session.board) {
                            Some(best_move) => {
                                println!("Best move: {}", best_move + 1);
                                best_move + 1
                            }
                            // no column exists on a finished board
                            None => continue,
                        }

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = session.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
