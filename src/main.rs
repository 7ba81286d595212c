use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Sender};
use std::thread;
use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use chess_clock_engine::game_state::chess_rules::STARTING_PLACEMENT_FEN;
use chess_clock_engine::move_generation::perft::{perft, perft_divide};
use chess_clock_engine::utils::config::Config;
use chess_clock_engine::utils::fen_parser::{parse_placement, parse_side_to_move};
use chess_clock_engine::utils::pgn::write_pgn;
use chess_clock_engine::utils::render_game_state::{format_move_list, render_session};
use chess_clock_engine::utils::session_file::{load_session, save_session};
use chess_clock_engine::{ChessError, Event, GameSession, GameStatus, Outcome};

mod cli;
use cli::{parse_command, Cli, Command, Commands, HELP};

enum Input {
    Line(String),
    Tick,
    Eof,
}

fn main() -> Result<(), ChessError> {
    let env = Env::default().filter_or("CHESS_CLOCK_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let cfg_path: Option<PathBuf> = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("CHESS_CLOCK_CONFIG").map(PathBuf::from));
    let mut cfg = Config::load(cfg_path.as_deref())?;
    if let Some(seconds) = cli.seconds {
        cfg.initial_seconds = seconds;
    }
    if cli.ascii {
        cfg.unicode = false;
    }

    let fen = cli.fen.as_deref().unwrap_or(STARTING_PLACEMENT_FEN);
    let board = parse_placement(fen)?;
    let to_move = parse_side_to_move(fen)?;

    if let Some(Commands::Perft { depth, divide }) = cli.command {
        if divide {
            for (notation, nodes) in perft_divide(&board, to_move, depth) {
                println!("{notation}: {nodes}");
            }
        }
        let counts = perft(&board, to_move, depth);
        println!("depth {depth}: {counts:?}");
        return Ok(());
    }

    let session = match &cli.load {
        Some(path) => load_session(path)?,
        None => GameSession::from_position(board, to_move, cfg.initial_seconds),
    };

    run(session, &cfg)
}

fn run(mut session: GameSession, cfg: &Config) -> Result<(), ChessError> {
    let (input_tx, input_rx) = channel::<Input>();

    spawn_ticker(input_tx.clone(), Duration::from_millis(cfg.tick_millis));
    spawn_stdin_reader(input_tx);

    println!("{}", render_session(&session, cfg.unicode));
    prompt();

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Tick => {
                let ticked = session.handle(Event::Tick) == Outcome::Ticked;
                if ticked && session.status() == GameStatus::Timeout {
                    println!("\n{}", render_session(&session, cfg.unicode));
                    prompt();
                }
            }
            Input::Eof => break,
            Input::Line(line) => {
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => {
                        prompt();
                        continue;
                    }
                    Err(err) => {
                        println!("{err}");
                        prompt();
                        continue;
                    }
                };

                if command == Command::Quit {
                    break;
                }
                execute(&mut session, command, cfg);
                prompt();
            }
        }
    }

    info!("leaving after {} moves", session.history().len());
    Ok(())
}

fn execute(session: &mut GameSession, command: Command, cfg: &Config) {
    match command {
        Command::Select(pos) => {
            session.handle(Event::Select(pos));
            println!("{}", render_session(session, cfg.unicode));
        }
        Command::Move(from, to) => {
            if let Err(err) = session.play(from, to) {
                println!("{err}");
            }
            println!("{}", render_session(session, cfg.unicode));
        }
        Command::Undo => {
            session.handle(Event::Undo);
            println!("{}", render_session(session, cfg.unicode));
        }
        Command::NewGame => {
            session.handle(Event::NewGame);
            println!("{}", render_session(session, cfg.unicode));
        }
        Command::Board => println!("{}", render_session(session, cfg.unicode)),
        Command::Moves => {
            for line in format_move_list(session.history()) {
                println!("{line}");
            }
        }
        Command::Pgn => print!("{}", write_pgn(session)),
        Command::Save(path) => {
            if let Err(err) = save_session(&path, session) {
                error!("save failed: {err}");
            }
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

fn spawn_ticker(tx: Sender<Input>, interval: Duration) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if tx.send(Input::Tick).is_err() {
            break;
        }
    });
}

fn spawn_stdin_reader(tx: Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    error!("stdin: {err}");
                    break;
                }
            }
        }
        let _ = tx.send(Input::Eof);
    });
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
