//! GameView: maps a `SessionSnapshot` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MenuCommand, Piece, PieceKind};

const EMPTY_SLOT: &str = "[    ]";

/// Text layout for the stack, queue, menu, and status line.
pub struct GameView {
    /// Columns of indentation before stack slots and queue pieces.
    indent: u16,
    show_menu: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            indent: 3,
            show_menu: true,
        }
    }
}

/// One styled run of text.
type Span = (String, CellStyle);

impl GameView {
    pub fn with_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    /// Render the session plus an optional status message.
    ///
    /// The framebuffer is sized to fit the content exactly.
    pub fn render(&self, snap: &SessionSnapshot, status: Option<&str>) -> FrameBuffer {
        let rows = self.layout(snap, status);

        let width = rows
            .iter()
            .map(|row| row.iter().map(|(s, _)| s.chars().count()).sum::<usize>())
            .max()
            .unwrap_or(0);
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);

        let mut fb = FrameBuffer::new(width, height);
        for (y, row) in rows.iter().enumerate().take(height as usize) {
            let mut x = 0;
            for (text, style) in row {
                x = fb.put_str(x, y as u16, text, *style);
            }
        }
        fb
    }

    fn layout(&self, snap: &SessionSnapshot, status: Option<&str>) -> Vec<Vec<Span>> {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bold: true,
            dim: false,
        };
        let value = CellStyle::default();
        let dim = CellStyle { dim: true, ..value };
        let pad = " ".repeat(self.indent as usize);

        let mut rows: Vec<Vec<Span>> = Vec::new();
        rows.push(vec![("=== Current state ===".to_string(), label)]);

        // Stack: blanks for unfilled capacity sit above the pieces.
        rows.push(vec![("Reserve stack (top -> bottom):".to_string(), label)]);
        for _ in 0..snap.free_stack_slots() {
            rows.push(vec![(pad.clone(), value), (EMPTY_SLOT.to_string(), dim)]);
        }
        for piece in &snap.stack {
            rows.push(vec![(pad.clone(), value), piece_span(*piece)]);
        }

        rows.push(Vec::new());
        rows.push(vec![("Piece queue (front -> back):".to_string(), label)]);
        let mut queue_row = vec![(pad.clone(), value)];
        for (i, piece) in snap.queue.iter().enumerate() {
            if i > 0 {
                queue_row.push((" ".to_string(), value));
            }
            queue_row.push(piece_span(*piece));
        }
        rows.push(queue_row);
        rows.push(vec![("=====================".to_string(), label)]);

        if self.show_menu {
            rows.push(Vec::new());
            rows.push(vec![("Options:".to_string(), label)]);
            for cmd in MenuCommand::MENU_ORDER {
                rows.push(vec![(format!("{} - {}", cmd.code(), cmd.label()), value)]);
            }
        }

        if let Some(msg) = status {
            rows.push(Vec::new());
            rows.push(vec![(msg.to_string(), label)]);
        }

        rows
    }
}

fn piece_span(piece: Piece) -> Span {
    let style = CellStyle {
        fg: kind_color(piece.kind),
        bold: true,
        dim: false,
    };
    (piece.to_string(), style)
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap_with(stack: &[Piece], queue: &[Piece]) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        snap.stack.extend(stack.iter().copied());
        snap.queue.extend(queue.iter().copied());
        snap
    }

    #[test]
    fn empty_stack_shows_three_blank_slots() {
        let snap = snap_with(&[], &[Piece::new(PieceKind::I, 0)]);
        let fb = GameView::default().with_menu(false).render(&snap, None);

        assert_eq!(fb.row_text(1), "Reserve stack (top -> bottom):");
        for y in 2..5 {
            assert_eq!(fb.row_text(y), "   [    ]");
        }
    }

    #[test]
    fn pieces_are_colored_by_kind() {
        let snap = snap_with(&[], &[Piece::new(PieceKind::L, 3)]);
        let fb = GameView::default().with_menu(false).render(&snap, None);

        // Queue row follows header(1) + stack(3) + blank + queue header.
        let row = 7;
        assert_eq!(fb.row_text(row), "   [L 3]");
        let cell = fb.get(4, row).unwrap();
        assert_eq!(cell.ch, 'L');
        assert_eq!(cell.style.fg, Rgb::new(255, 165, 0));
    }

    #[test]
    fn status_line_is_last_row() {
        let snap = snap_with(&[], &[]);
        let fb = GameView::default().render(&snap, Some("Stack is empty!"));
        assert_eq!(fb.row_text(fb.height() - 1), "Stack is empty!");
    }
}
