use piece_stash::core::{GameSession, PieceSource, ScriptedKinds};
use piece_stash::term::GameView;
use piece_stash::types::PieceKind;

fn session() -> GameSession {
    GameSession::new(PieceSource::with_picker(ScriptedKinds::new([
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
    ])))
}

#[test]
fn fresh_session_renders_blank_stack_and_full_queue() {
    let snap = session().snapshot();
    let fb = GameView::default().render(&snap, None);
    let text = fb.to_plain_text();

    let expected_head = "\
=== Current state ===
Reserve stack (top -> bottom):
   [    ]
   [    ]
   [    ]

Piece queue (front -> back):
   [I 0] [O 1] [T 2] [L 3] [I 4]
=====================
";
    assert!(text.starts_with(expected_head), "got:\n{}", text);
    assert!(text.contains("1 - Play piece"));
    assert!(text.contains("5 - Multi swap (3 pieces)"));
    assert!(text.contains("0 - Exit"));
}

#[test]
fn stack_renders_top_first_below_blanks() {
    let mut s = session();
    s.reserve().unwrap();
    s.reserve().unwrap();

    let fb = GameView::default().with_menu(false).render(&s.snapshot(), None);
    assert_eq!(fb.row_text(2), "   [    ]");
    assert_eq!(fb.row_text(3), "   [O 1]");
    assert_eq!(fb.row_text(4), "   [I 0]");
    assert_eq!(fb.row_text(7), "   [T 2] [L 3] [I 4] [O 5] [T 6]");
}

#[test]
fn queue_row_shows_only_active_pieces() {
    let mut s = session();
    s.queue_mut().dequeue().unwrap();
    s.queue_mut().dequeue().unwrap();

    let fb = GameView::default().with_menu(false).render(&s.snapshot(), None);
    assert_eq!(fb.row_text(7), "   [T 2] [L 3] [I 4]");
}
