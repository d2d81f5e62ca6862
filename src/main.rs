//! Gomoku CLI
//!
//! A terminal front end for exercising the engine: engine-vs-engine games,
//! a line-based game against the engine, and one-off move queries.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gomoku::config::GameConfig;
use gomoku::game::{GameMode, GameState, GameStatus};
use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};

#[derive(Parser)]
#[command(name = "gomoku", version, about = "Five-in-a-row against a minimax engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Let two engines play each other
    Selfplay {
        #[arg(long, default_value = "medium")]
        white: Difficulty,
        #[arg(long, default_value = "medium")]
        black: Difficulty,
        /// Stop after this many moves even without a result
        #[arg(long, default_value_t = 225)]
        max_moves: usize,
    },
    /// Play against the engine, reading `row col` lines from stdin
    Play {
        /// TOML config; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        ai_plays_as: Option<Stone>,
    },
    /// Replay a move list (White first) and print the engine's reply
    BestMove {
        /// Moves as `row,col` separated by spaces, e.g. "7,7 7,8"
        #[arg(long, default_value = "")]
        moves: String,
        #[arg(long)]
        ai_plays_as: Option<Stone>,
        /// Unknown names fall back to the default search parameters
        #[arg(long, default_value = "medium")]
        difficulty: String,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Selfplay {
            white,
            black,
            max_moves,
        } => selfplay(white, black, max_moves),
        Command::Play {
            config,
            difficulty,
            ai_plays_as,
        } => {
            let mut cfg = match config {
                Some(path) => GameConfig::load_or_default(&path)?,
                None => GameConfig::default(),
            };
            if let Some(d) = difficulty {
                cfg.difficulty = d;
            }
            if let Some(s) = ai_plays_as {
                cfg.ai_plays_as = s;
            }
            play(cfg.game_mode())
        }
        Command::BestMove {
            moves,
            ai_plays_as,
            difficulty,
        } => best_move(&moves, ai_plays_as, &difficulty),
    }
}

fn parse_pos(text: &str) -> Result<Pos> {
    let mut parts = text.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty());
    let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected `row col`, got '{text}'");
    };
    let row = r.parse().with_context(|| format!("bad row '{r}'"))?;
    let col = c.parse().with_context(|| format!("bad column '{c}'"))?;
    Ok(Pos::new(row, col))
}

fn announce(status: GameStatus) {
    match status {
        GameStatus::Won(win) => {
            let line: Vec<String> = win.line.iter().map(Pos::to_string).collect();
            println!("{} wins: {}", win.winner, line.join(" "));
        }
        GameStatus::Draw => println!("Draw: the board is full"),
        GameStatus::Playing => {}
    }
}

fn selfplay(white: Difficulty, black: Difficulty, max_moves: usize) -> Result<()> {
    let white_engine = AIEngine::new(white);
    let black_engine = AIEngine::new(black);
    let mut game = GameState::new(GameMode::PvP);

    tracing::info!(%white, %black, "self-play started");

    while !game.status().is_over() && game.move_history().len() < max_moves {
        let color = game.current_turn();
        let engine = match color {
            Stone::White => &white_engine,
            Stone::Black => &black_engine,
        };
        let result = engine.get_move_with_stats(game.board(), color);
        let Some(pos) = result.best_move else {
            break;
        };
        game.place_stone(pos)?;
        println!(
            "{:>3}. {} {} ({} nodes, {}ms)",
            game.move_history().len(),
            color,
            pos,
            result.nodes,
            result.time_ms
        );
    }

    println!("{}", game.board());
    if game.status().is_over() {
        announce(game.status());
    } else {
        println!("Stopped after {} moves", game.move_history().len());
    }
    Ok(())
}

fn play(mode: GameMode) -> Result<()> {
    let mut game = GameState::new(mode);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Commands: `row col`, undo, restart, quit");
    loop {
        while game.is_ai_turn() {
            if let Some(pos) = game.play_ai_move()? {
                println!("Engine plays {pos}");
            }
        }

        println!("{}", game.board());
        if game.status().is_over() {
            announce(game.status());
            println!("undo, restart or quit?");
        } else {
            print!("{} to move> ", game.current_turn());
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let command = line.trim();

        let outcome = match command {
            "quit" | "q" => return Ok(()),
            "undo" | "u" => game.undo().map_err(anyhow::Error::from),
            "restart" | "r" => {
                game.restart();
                Ok(())
            }
            "" => Ok(()),
            _ => parse_pos(command)
                .and_then(|pos| game.place_stone(pos).map(|_| ()).map_err(Into::into)),
        };
        if let Err(err) = outcome {
            println!("{err}");
        }
    }
}

fn best_move(moves: &str, ai_plays_as: Option<Stone>, difficulty: &str) -> Result<()> {
    let history = moves
        .split_whitespace()
        .map(parse_pos)
        .collect::<Result<Vec<_>>>()?;
    let board = Board::replay(&history, Stone::White)?;

    // Default to the side to move
    let color = ai_plays_as.unwrap_or(if history.len() % 2 == 0 {
        Stone::White
    } else {
        Stone::Black
    });

    let result = AIEngine::from_difficulty_name(difficulty).get_move_with_stats(&board, color);
    println!("{board}");
    match result.best_move {
        Some(pos) => println!(
            "{color} plays {pos} (score {}, {} nodes, {}ms)",
            result.score, result.nodes, result.time_ms
        ),
        None => println!("No move: the board is full"),
    }
    Ok(())
}
