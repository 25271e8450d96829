use tui_snake::core::GameState;
use tui_snake::term::{FrameBuffer, GameView, PaintedCells, Surface, Viewport};
use tui_snake::types::{GameAction, BORDER_GLYPH, FOOD_GLYPH, SNAKE_GLYPH};

// A 40x20 surface puts field cell (0,0) at x=5, y=3.
const X0: u16 = 5;
const Y0: u16 = 3;

fn first_frame(state: &GameState) -> (FrameBuffer, PaintedCells) {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(40, 20);
    let painted = view.render(state, &mut fb, PaintedCells::new());
    (fb, painted)
}

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).unwrap().ch
}

#[test]
fn term_view_renders_border_one_cell_outside_the_field() {
    let (fb, _) = first_frame(&GameState::new(1));

    assert_eq!(ch(&fb, X0 - 1, Y0 - 1), BORDER_GLYPH);
    assert_eq!(ch(&fb, X0 + 30, Y0 - 1), BORDER_GLYPH);
    assert_eq!(ch(&fb, X0 - 1, Y0 + 15), BORDER_GLYPH);
    assert_eq!(ch(&fb, X0 + 30, Y0 + 15), BORDER_GLYPH);
    assert_eq!(ch(&fb, X0 - 1, Y0 + 7), BORDER_GLYPH);

    // Inside the field is empty apart from the entities.
    assert_eq!(ch(&fb, X0, Y0), ' ');
    assert_eq!(ch(&fb, X0 + 29, Y0 + 14), ' ');
}

#[test]
fn term_view_places_snake_and_food_field_relative() {
    let (fb, _) = first_frame(&GameState::new(1));

    // Initial snake: rows 5..=9, col 3.
    for row in 5..=9u16 {
        assert_eq!(ch(&fb, X0 + 3, Y0 + row), SNAKE_GLYPH);
    }
    assert_eq!(ch(&fb, X0 + 3, Y0 + 4), ' ');

    // Food at (10, 10).
    assert_eq!(ch(&fb, X0 + 10, Y0 + 10), FOOD_GLYPH);
}

#[test]
fn term_view_draws_score_below_the_field() {
    let (fb, _) = first_frame(&GameState::new(1));
    assert!(fb.row_text(Y0 + 16).contains("Score: 0"));
}

#[test]
fn term_view_blanks_cells_from_the_previous_frame() {
    let mut state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(40, 20);

    let painted = view.render(&state, &mut fb, PaintedCells::new());
    let before = fb.count_non_blank();

    state.step(None);
    let painted = view.render(&state, &mut fb, painted);

    // Old tail (9,3) is gone, new head (4,3) is drawn.
    assert_eq!(ch(&fb, X0 + 3, Y0 + 9), ' ');
    assert_eq!(ch(&fb, X0 + 3, Y0 + 4), SNAKE_GLYPH);
    assert_eq!(fb.count_non_blank(), before);
    assert!(painted.contains(X0 + 3, Y0 + 4));
    assert!(!painted.contains(X0 + 3, Y0 + 9));
}

#[test]
fn term_view_only_blanks_what_it_painted() {
    let state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(40, 20);
    fb.set_cell(0, 0, '#', Default::default());

    let painted = view.render(&state, &mut fb, PaintedCells::new());
    view.render(&state, &mut fb, painted);

    assert_eq!(ch(&fb, 0, 0), '#');
}

#[test]
fn term_view_skips_drawing_while_paused() {
    let mut state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(40, 20);
    let painted = view.render(&state, &mut fb, PaintedCells::new());
    let shown = fb.clone();

    state.step(Some(GameAction::TogglePause));
    let again = view.render(&state, &mut fb, painted.clone());

    assert_eq!(again, painted);
    assert_eq!(fb, shown);
}

#[test]
fn term_view_centers_field_on_tall_viewports() {
    let view = GameView::default();
    let state = GameState::new(1);
    let mut fb = FrameBuffer::new(40, 30);
    view.render(&state, &mut fb, PaintedCells::new());

    // origin row = 30/2 - 15/2 = 8, so the top border sits on row 7.
    assert_eq!(view.origin(Viewport::new(40, 30)), (8, 5));
    assert_eq!(ch(&fb, 4, 7), BORDER_GLYPH);
    assert_eq!(ch(&fb, 4, 6), ' ');
}

#[test]
fn term_view_clips_on_surfaces_smaller_than_the_field() {
    let view = GameView::default();
    let state = GameState::new(1);

    for (w, h) in [(10, 4), (1, 1), (0, 0), (31, 16)] {
        let mut fb = FrameBuffer::new(w, h);
        let painted = view.render(&state, &mut fb, PaintedCells::new());
        assert!(painted.iter().all(|(x, y)| x < w && y < h));
    }
}

#[test]
fn term_view_keeps_border_when_head_crashes_through_it() {
    let mut state = GameState::new(1);
    for _ in 0..6 {
        state.step(None);
    }
    assert!(state.game_over());

    let (fb, _) = first_frame(&state);
    // Head at (-1, 3) would land on the top border.
    assert_eq!(ch(&fb, X0 + 3, Y0 - 1), BORDER_GLYPH);
}

#[test]
fn term_view_game_over_summary_is_centered() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(40, 20);
    view.render_game_over(&mut fb, 12);

    assert!(fb.row_text(9).contains("Game over!"));
    let summary = fb.row_text(10);
    let start = summary.find("Your score is 12").unwrap();
    // 16 chars centered on column 20.
    assert_eq!(start, 12);
}
