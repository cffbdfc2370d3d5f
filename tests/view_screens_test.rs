//! Screen rendering tests against the terminal framebuffer.

use blockfall::game::GameSnapshot;
use blockfall::term::FrameBuffer;
use blockfall::types::{Difficulty, PLAYFIELD_COLS, PLAYFIELD_ROWS};
use blockfall::view::{Surface, View};

fn view() -> View<FrameBuffer> {
    View::new(FrameBuffer::new(96, 32), PLAYFIELD_ROWS, PLAYFIELD_COLS)
}

fn screen_text(view: &View<FrameBuffer>) -> String {
    let fb = view.surface();
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn start_screen_shows_instructions_and_difficulty_labels() {
    let mut view = view();
    view.render_start_screen();

    let text = screen_text(&view);
    assert!(text.contains("Press ENTER to Start"));
    assert!(text.contains("Press (E, M, H) to Change Difficulty"));

    let label_row = view.layout().label_row;
    let row = view.surface().row_text(label_row);
    assert!(row.contains("EASY"));
    assert!(row.contains("MEDIUM"));
    assert!(row.contains("HARD"));
}

#[test]
fn main_screen_shows_panel_stats() {
    let mut view = view();
    let mut state = GameSnapshot::default();
    state.score = 740;
    state.lines = 12;
    state.level = 1;
    state.difficulty = Difficulty::Hard;

    view.render_main_screen(&state);

    let text = screen_text(&view);
    assert!(text.contains("Score: 740"));
    assert!(text.contains("Lines: 12"));
    assert!(text.contains("Level: 1"));
    assert!(text.contains("Difficulty: hard"));
    assert!(text.contains("Next:"));
}

#[test]
fn main_screen_draws_playfield_border() {
    let mut view = view();
    view.render_main_screen(&GameSnapshot::default());

    let fb = view.surface();
    let w = view.layout().playfield_w;
    let h = view.layout().playfield_h;
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}

#[test]
fn pause_overlay_keeps_last_frame_visible() {
    let mut view = view();
    let mut state = GameSnapshot::default();
    state.score = 512;
    view.render_main_screen(&state);

    view.render_pause_screen();

    let text = screen_text(&view);
    assert!(text.contains("Press ENTER to Resume"));
    assert!(text.contains("Press ESCAPE to Return"));
    assert!(
        text.contains("Score: 512"),
        "the tinted playfield frame stays underneath the overlay"
    );
}

#[test]
fn end_screen_shows_final_score() {
    let mut view = view();
    let mut state = GameSnapshot::default();
    state.score = 9001;
    state.is_game_over = true;

    view.render_end_screen(&state);

    let text = screen_text(&view);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score: 9001"));
    assert!(text.contains("Press ENTER to Restart"));
}

#[test]
fn next_piece_preview_renders_at_half_scale() {
    let mut view = view();
    let mut state = GameSnapshot::default();
    // A 2x2 square in the preview box.
    state.next_piece.blocks[0][1] = true;
    state.next_piece.blocks[0][2] = true;
    state.next_piece.blocks[1][1] = true;
    state.next_piece.blocks[1][2] = true;

    view.render_main_screen(&state);

    // Preview cells paint a sand background right of the playfield.
    let sand = blockfall::view::Rgb::new(245, 222, 179);
    let fb = view.surface();
    let panel_x = view.layout().panel_x;
    let mut painted = 0;
    for y in 0..fb.height() {
        for x in panel_x..fb.width() {
            if fb.get(x, y).map(|c| c.style.bg == sand).unwrap_or(false) {
                painted += 1;
            }
        }
    }
    assert!(painted > 0, "preview blocks must appear in the side panel");
}
