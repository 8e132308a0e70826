//! Interactive session loop state.
//!
//! `App` sits between the line reader in `main` and the core session: it parses
//! one line, dispatches the command, remembers the status message for the next
//! frame, and appends to the journal when one is configured.

use std::io::Write;

use crate::core::{GameSession, SessionSnapshot};
use crate::input::{parse_line, MenuInput};
use crate::journal::{Journal, JournalRecord};
use crate::term::{action_message, FrameBuffer, GameView, EXITING, INVALID_OPTION};
use crate::types::MenuCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct App<W: Write> {
    session: GameSession,
    view: GameView,
    snap: SessionSnapshot,
    status: Option<String>,
    step: u64,
    journal: Option<Journal<W>>,
}

impl<W: Write> App<W> {
    pub fn new(session: GameSession, journal: Option<Journal<W>>) -> Self {
        Self {
            session,
            view: GameView::default(),
            snap: SessionSnapshot::default(),
            status: None,
            step: 0,
            journal,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Message produced by the last handled line.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn journal_enabled(&self) -> bool {
        self.journal.is_some()
    }

    /// Render the current state and status line.
    pub fn frame(&mut self) -> FrameBuffer {
        self.session.snapshot_into(&mut self.snap);
        self.view.render(&self.snap, self.status.as_deref())
    }

    /// Handle one line of player input.
    pub fn handle_line(&mut self, line: &str) -> LoopControl {
        match parse_line(line) {
            MenuInput::Command(MenuCommand::Exit) => {
                self.status = Some(EXITING.to_string());
                LoopControl::Exit
            }
            MenuInput::Command(command) => {
                self.dispatch(command);
                LoopControl::Continue
            }
            MenuInput::Unknown(_) | MenuInput::NotANumber => {
                self.status = Some(INVALID_OPTION.to_string());
                LoopControl::Continue
            }
        }
    }

    /// Handle one raw line from the reader.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so they read as a
    /// non-numeric choice instead of ending the loop.
    pub fn handle_bytes(&mut self, line: &[u8]) -> LoopControl {
        self.handle_line(&String::from_utf8_lossy(line))
    }

    fn dispatch(&mut self, command: MenuCommand) {
        let Some(result) = self.session.apply(command) else {
            return;
        };
        self.step += 1;
        self.status = Some(action_message(command, &result));

        let Some(journal) = self.journal.as_mut() else {
            return;
        };
        self.session.snapshot_into(&mut self.snap);
        let record = JournalRecord::new(self.step, command, &result, &self.snap);
        if let Err(e) = journal.write(&record) {
            eprintln!("[Journal] write failed, journal disabled: {:#}", e);
            self.journal = None;
        }
    }
}
