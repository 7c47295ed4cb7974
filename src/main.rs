//! Lesson Tic-Tac-Toe - terminal front end
//!
//! Draws the board, forwards typed moves to the session driver and prints
//! the countdown as the driver ticks it.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use lesson_tictactoe::{
    Board, DriverError, DriverHandle, GameConfig, GameSession, Mark, MoveResult, Outcome,
    Position, SessionDriver, SessionError, SessionEvent, SessionSnapshot, TurnState, WinningLine,
    classify, winning_line,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            turn_seconds,
            config,
        } => run_play(size, turn_seconds, config).await,
        Command::Check { board, json } => run_check(&board, json),
    }
}

/// Classification printed by `check --json`.
#[derive(Debug, Serialize)]
struct CheckReport {
    size: usize,
    board: Vec<String>,
    outcome: Outcome,
    winning_line: Option<WinningLine>,
}

/// Classify a text board and print the result.
#[instrument]
fn run_check(text: &str, json: bool) -> Result<()> {
    let board: Board = text.parse().context("Invalid board")?;
    let outcome = classify(&board);
    let line = winning_line(&board);
    debug!(?outcome, "Board checked");

    if json {
        let report = CheckReport {
            size: board.size(),
            board: board.to_string().lines().map(str::to_string).collect(),
            outcome,
            winning_line: line,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", board);
        match line {
            Some(line) => println!("{} ({:?} at {:?})", outcome, line.family, line.cells),
            None => println!("{}", outcome),
        }
    }
    Ok(())
}

/// What the terminal is currently asking for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Screen {
    #[default]
    SizeSelection,
    Playing,
}

/// Presentation state that the engine does not own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct View {
    screen: Screen,
    show_score: bool,
}

impl View {
    fn start_playing(&mut self) {
        self.screen = Screen::Playing;
    }

    /// Back to size selection; the score is hidden again for the next game.
    fn leave_game(&mut self) {
        *self = Self::default();
    }

    fn toggle_score(&mut self) {
        self.show_score = !self.show_score;
    }
}

/// Terminal-side state.
struct Terminal {
    handle: DriverHandle,
    allowed_sizes: Vec<usize>,
    view: View,
    last: Option<SessionSnapshot>,
}

/// Run an interactive two-player game on stdin/stdout.
#[instrument]
async fn run_play(
    size: Option<usize>,
    turn_seconds: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seconds) = turn_seconds {
        config = config.with_turn_seconds(seconds)?;
    }

    let allowed_sizes = config.allowed_sizes().clone();
    let (handle, mut events) = SessionDriver::spawn(GameSession::new(config));
    let mut lines = spawn_stdin_reader();

    let mut terminal = Terminal {
        handle,
        allowed_sizes,
        view: View::default(),
        last: None,
    };

    match size {
        Some(size) => terminal.choose(size).await?,
        None => terminal.prompt_size(),
    }

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                terminal.on_event(event);
            }
            line = lines.recv() => {
                let Some(line) = line else { break };
                if !terminal.on_line(line.trim()).await? {
                    break;
                }
            }
        }
    }

    terminal.handle.shutdown();
    info!("Goodbye");
    Ok(())
}

fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

impl Terminal {
    fn prompt_size(&mut self) {
        self.view.leave_game();
        self.last = None;
        let sizes: Vec<String> = self
            .allowed_sizes
            .iter()
            .map(|n| format!("{n}x{n}"))
            .collect();
        println!("\nChoose a board size ({}), or q to quit:", sizes.join(", "));
    }

    async fn choose(&mut self, size: usize) -> Result<()> {
        match self.handle.choose_size(size).await {
            Ok(_) => {
                self.view.start_playing();
                println!("Moves: a cell number or row,col. r: new round, n: new game, s: score, q: quit");
            }
            Err(DriverError::Session(e)) => {
                println!("{}", e);
                self.prompt_size();
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Handles one input line. Returns false to quit.
    async fn on_line(&mut self, line: &str) -> Result<bool> {
        if line.eq_ignore_ascii_case("q") {
            return Ok(false);
        }

        if self.view.screen == Screen::SizeSelection {
            // Accepts "4" as well as "4x4".
            match line.split(['x', 'X']).next().and_then(|n| n.trim().parse().ok()) {
                Some(size) => self.choose(size).await?,
                None => self.prompt_size(),
            }
            return Ok(true);
        }

        match line.to_ascii_lowercase().as_str() {
            "" => {}
            "r" => self.handle.reset_round().await?,
            "n" => {
                self.handle.leave().await?;
                self.prompt_size();
            }
            "s" => {
                self.view.toggle_score();
                if let Some(snapshot) = self.last.clone() {
                    self.render(&snapshot);
                }
            }
            input => self.play(input).await?,
        }
        Ok(true)
    }

    async fn play(&mut self, input: &str) -> Result<()> {
        let Some(size) = self.last.as_ref().map(|s| s.size) else {
            return Ok(());
        };
        let Some(index) = Position::parse(input, size).and_then(|p| p.to_index(size)) else {
            println!("Not a cell: {input}");
            return Ok(());
        };

        match self.handle.submit_move(index).await {
            Ok(MoveResult::Rejected { .. }) => println!("That cell is taken."),
            Ok(_) => {}
            Err(DriverError::Session(SessionError::InvalidState(_))) => {
                println!("The round is over. r: new round, n: new game");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn on_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Changed(snapshot) => {
                let redraw = self.last.as_ref().is_none_or(|last| {
                    last.cells != snapshot.cells
                        || last.tally != snapshot.tally
                        || last.active_player() != snapshot.active_player()
                        || last.outcome() != snapshot.outcome()
                });
                if redraw {
                    self.render(&snapshot);
                } else {
                    print_countdown(&snapshot);
                }
                self.last = Some(snapshot);
            }
            SessionEvent::TurnPassed { to } => println!("\nTime's up! {to} to move."),
            SessionEvent::RoundFinished(outcome) => {
                println!("{outcome}! r: new round, n: new game");
            }
            SessionEvent::Left => self.last = None,
        }
    }

    fn render(&self, snapshot: &SessionSnapshot) {
        println!();
        let width = (snapshot.size * snapshot.size).to_string().len();
        for (r, row) in snapshot.cells.chunks(snapshot.size).enumerate() {
            if r > 0 {
                let rule = vec!["-".repeat(width + 2); snapshot.size].join("+");
                println!("{rule}");
            }
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, mark)| match mark {
                    Mark::Empty => format!(" {:>width$} ", r * snapshot.size + c + 1),
                    mark => format!(" {:>width$} ", mark.glyph()),
                })
                .collect();
            println!("{}", cells.join("|"));
        }

        if self.view.show_score {
            println!("Score: {}", snapshot.tally);
        }

        match snapshot.state {
            TurnState::InProgress { .. } => print_countdown(snapshot),
            TurnState::Finished(outcome) => println!("{outcome}"),
        }
    }
}

fn print_countdown(snapshot: &SessionSnapshot) {
    if let TurnState::InProgress {
        active,
        seconds_left,
    } = snapshot.state
    {
        let urgency = if snapshot.urgent { "!" } else { "" };
        print!("\r{active} to move: {seconds_left:>2}s{urgency}  ");
        let _ = std::io::stdout().flush();
    }
}
