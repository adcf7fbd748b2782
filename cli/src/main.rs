//! Interactive terminal front-end for the loto engine.
//!
//! The CLI only renders snapshots and forwards input events; every game rule
//! lives in `loto-core`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use loto_core::{AnnounceError, Announcer, Coord, GameSession, GameSnapshot, COLS};

#[derive(Parser, Debug)]
#[command(name = "loto")]
#[command(about = "Interactive 0-99 loto board game", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for board generation and draw order (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print snapshots as JSON lines instead of a rendered board
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Stdout stands in for speech synthesis.
struct StdoutAnnouncer;

impl Announcer for StdoutAnnouncer {
    fn announce(&mut self, number: u8) -> std::result::Result<(), AnnounceError> {
        println!("*** the caller announces: {number} ***");
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("session seed: {seed}");

    let mut session = GameSession::new(seed, StdoutAnnouncer);
    println!("loto - seed {seed}. Commands: draw, reveal, mark <row> <col>, play, board, quit");
    render(&session.snapshot(), cli.json)?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        let snapshot = match words.next() {
            Some("d" | "draw") => session.draw_requested(),
            Some("r" | "reveal") => session.reveal_requested(),
            Some("m" | "mark") => match parse_coords(words.next(), words.next()) {
                Some(coords) => session.cell_clicked(coords),
                None => {
                    println!("usage: mark <row 0-2> <col 0-9>");
                    continue;
                }
            },
            Some("p" | "play") => session.replay_requested(),
            Some("b" | "board") => session.snapshot(),
            Some("q" | "quit") => break,
            Some(other) => {
                println!("unknown command: {other}");
                continue;
            }
            None => continue,
        };

        render(&snapshot, cli.json)?;
        if snapshot.won {
            println!("LOTO! Every active cell is marked.");
        }
    }

    Ok(())
}

fn parse_coords(row: Option<&str>, col: Option<&str>) -> Option<(Coord, Coord)> {
    let row = row?.parse().ok()?;
    let col = col?.parse().ok()?;
    Some((row, col))
}

fn render(snapshot: &GameSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    let current = match (snapshot.current, snapshot.revealed) {
        (Some(number), true) => number.to_string(),
        (Some(_), false) => "?".to_string(),
        (None, _) => "-".to_string(),
    };
    println!(
        "current: {current}   remaining: {}{}",
        snapshot.remaining,
        if snapshot.won { "   [WON]" } else { "" }
    );

    for col in 0..COLS {
        print!(" {:02}-{:02}", col * 10, col * 10 + 9);
    }
    println!();
    for row in &snapshot.board {
        for cell in row {
            match (cell.value, cell.marked) {
                (Some(value), true) => print!(" [{value:2}] "),
                (Some(value), false) => print!("  {value:2}  "),
                (None, _) => print!("   .  "),
            }
        }
        println!();
    }
    Ok(())
}
