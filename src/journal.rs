//! Action journal - one JSON line per dispatched command.
//!
//! Enabled with `PIECE_STASH_LOG_PATH`. Each record carries the command, its
//! result, and the stack/queue contents after it ran.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{ActionOutcome, ActionResult, SessionSnapshot};
use crate::types::{MenuCommand, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceRecord {
    pub kind: &'static str,
    pub id: u32,
}

impl From<Piece> for PieceRecord {
    fn from(p: Piece) -> Self {
        Self {
            kind: p.kind.as_str(),
            id: p.id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OutcomeRecord {
    Played { piece: PieceRecord },
    Reserved { piece: PieceRecord },
    Used { piece: PieceRecord },
    #[serde(rename_all = "camelCase")]
    Swapped { queue_front: PieceRecord, stack_top: PieceRecord },
    SwappedThree,
}

impl From<ActionOutcome> for OutcomeRecord {
    fn from(o: ActionOutcome) -> Self {
        match o {
            ActionOutcome::Played(p) => Self::Played { piece: p.into() },
            ActionOutcome::Reserved(p) => Self::Reserved { piece: p.into() },
            ActionOutcome::Used(p) => Self::Used { piece: p.into() },
            ActionOutcome::Swapped {
                queue_front,
                stack_top,
            } => Self::Swapped {
                queue_front: queue_front.into(),
                stack_top: stack_top.into(),
            },
            ActionOutcome::SwappedThree => Self::SwappedThree,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalRecord {
    pub step: u64,
    pub command: &'static str,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<OutcomeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    /// Top first.
    pub stack: Vec<PieceRecord>,
    /// Front first.
    pub queue: Vec<PieceRecord>,
}

impl JournalRecord {
    pub fn new(
        step: u64,
        command: MenuCommand,
        result: &ActionResult,
        snap: &SessionSnapshot,
    ) -> Self {
        let (status, outcome, error) = match result {
            Ok(o) => ("ok", Some(OutcomeRecord::from(*o)), None),
            Err(e) => ("error", None, Some(e.as_str())),
        };
        Self {
            step,
            command: command.as_str(),
            result: status,
            outcome,
            error,
            stack: snap.stack.iter().copied().map(PieceRecord::from).collect(),
            queue: snap.queue.iter().copied().map(PieceRecord::from).collect(),
        }
    }
}

/// Line-delimited JSON writer.
pub struct Journal<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(512),
        }
    }

    pub fn write(&mut self, record: &JournalRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActionError, GameSession, PieceSource, ScriptedKinds};
    use crate::types::PieceKind;

    #[test]
    fn writes_one_json_line_per_record() {
        let mut session = GameSession::new(PieceSource::with_picker(ScriptedKinds::new([
            PieceKind::T,
        ])));
        let mut journal = Journal::new(Vec::new());

        let result = session.reserve();
        journal
            .write(&JournalRecord::new(1, MenuCommand::Reserve, &result, &session.snapshot()))
            .unwrap();
        let result = session.swap_three();
        assert_eq!(result, Err(ActionError::SwapImpossible));
        journal
            .write(&JournalRecord::new(2, MenuCommand::SwapThree, &result, &session.snapshot()))
            .unwrap();

        let text = String::from_utf8(journal.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["command"], "reserve");
        assert_eq!(first["result"], "ok");
        assert_eq!(first["outcome"]["kind"], "reserved");
        assert_eq!(first["outcome"]["piece"]["id"], 0);
        assert_eq!(first["stack"][0]["kind"], "t");
        assert_eq!(first["queue"].as_array().unwrap().len(), 5);
        assert!(first.get("error").is_none());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["result"], "error");
        assert_eq!(second["error"], "swapImpossible");
        assert!(second.get("outcome").is_none());
    }

    #[test]
    fn swap_outcome_uses_camel_case_fields() {
        let p = Piece::new(PieceKind::I, 4);
        let q = Piece::new(PieceKind::O, 9);
        let rec = OutcomeRecord::from(ActionOutcome::Swapped {
            queue_front: p,
            stack_top: q,
        });
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["kind"], "swapped");
        assert_eq!(v["queueFront"]["id"], 4);
        assert_eq!(v["stackTop"]["kind"], "o");
    }
}
