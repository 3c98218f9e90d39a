use term_arcade::core::{Board, DodgeGame, GameState, Piece};
use term_arcade::term::{DodgeView, GameView, Tint, EMPTY_GLYPH, FILLED_GLYPH};
use term_arcade::types::PieceKind;

fn game_with(kind: PieceKind, board: Board) -> GameState {
    GameState::with_active(board, Piece::spawn(kind, 10), 1)
}

#[test]
fn term_view_frame_is_board_plus_score_line() {
    let game = game_with(PieceKind::O, Board::new());
    let view = GameView::default();
    assert_eq!(view.frame_size(&game), (20, 21));

    let text = view.render(&game).to_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], EMPTY_GLYPH.repeat(10));
    assert_eq!(lines[20], "Score: 0");
}

#[test]
fn term_view_draws_active_piece_two_chars_wide() {
    let game = game_with(PieceKind::O, Board::new());
    let text = GameView::default().render(&game).to_text();
    let lines: Vec<&str> = text.lines().collect();

    // O at x = 3 covers columns 4 and 5 on rows 1 and 2.
    let expected = format!(
        "{}{}{}",
        EMPTY_GLYPH.repeat(4),
        FILLED_GLYPH.repeat(2),
        EMPTY_GLYPH.repeat(4)
    );
    assert_eq!(lines[1], expected);
    assert_eq!(lines[2], expected);
    assert_eq!(lines[3], EMPTY_GLYPH.repeat(10));
}

#[test]
fn term_view_locked_and_active_cells_look_the_same() {
    let mut board = Board::new();
    board.set(0, 19, true);
    let game = game_with(PieceKind::I, board);
    let fb = GameView::default().render(&game);

    let locked = fb.get(0, 19).unwrap();
    let active = fb.get(6, 1).unwrap();
    assert_eq!(locked.ch, '[');
    assert_eq!(locked, active);
    assert_eq!(locked.style.fg, Tint::Yellow);
    assert_eq!(fb.get(2, 19).unwrap().style.fg, Tint::Blue);
}

#[test]
fn term_view_dodge_layers_and_status_lines() {
    let mut game = DodgeGame::new(8);
    game.set_fruit(term_arcade::core::Entity::new(2, 1));
    let text = DodgeView::default().render(&game).to_text();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("####"));
    assert!(lines[1].starts_with("#P*"));
    assert_eq!(&lines[1][18..19], "E");
    assert_eq!(&lines[5][18..19], "E");
    assert_eq!(lines[8], "Score : 0");
    assert_eq!(lines[9], DodgeView::PROMPT);
}
