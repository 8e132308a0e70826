//! Piece stash runner (default binary).
//!
//! Shows the reserve stack and the piece queue, reads one option number per
//! line from stdin, and applies it to the session until the player picks 0 or
//! stdin closes.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, IsTerminal};

use anyhow::Result;

use piece_stash::core::GameSession;
use piece_stash::term::{TerminalRenderer, EXITING};
use piece_stash::{App, AppConfig, Journal, LoopControl};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let color = config.color && io::stdout().is_terminal();
    let mut term = TerminalRenderer::new(color);

    let journal = match config.log_path.as_deref() {
        Some(path) => match Journal::open(path) {
            Ok(j) => Some(j),
            Err(e) => {
                eprintln!("[Journal] {:#}; continuing without a journal", e);
                None
            }
        },
        None => None,
    };

    let app = App::new(GameSession::with_seed(config.seed), journal);
    run(&mut term, app)
}

fn run(term: &mut TerminalRenderer, mut app: App<BufWriter<File>>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = Vec::new();

    loop {
        let fb = app.frame();
        term.draw(&fb)?;
        term.prompt("\nChoose: ")?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            // stdin closed: leave like option 0.
            term.line("")?;
            term.line(EXITING)?;
            return Ok(());
        }

        if app.handle_bytes(&line) == LoopControl::Exit {
            term.line(EXITING)?;
            return Ok(());
        }
    }
}
