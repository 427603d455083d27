use ratatui::{Terminal, backend::TestBackend};

use crate::ui::store::state::{Cursor, State};

use super::*;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn sample_grid(state: &State) -> Grid {
    let mut grid = Grid::new();
    grid.update(
        state.snapshot.columns().to_vec(),
        state.snapshot.rows().to_vec(),
    );
    grid
}

fn render(grid: &Grid, state: &State) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };

            grid.render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    terminal
}

#[test]
fn renders_headers_and_rows() {
    let state = State::default();
    let grid = sample_grid(&state);

    let terminal = render(&grid, &state);
    let text = buffer_text(&terminal);

    assert!(text.contains("name"));
    assert!(text.contains("age"));
    assert!(text.contains("score"));
    assert!(text.contains("Alice"));
    assert!(text.contains("Bob"));
    assert!(text.contains("Charlie"));
}

#[test]
fn applies_the_state_cursor_on_every_draw() {
    let mut state = State::default();
    state.cursor = Cursor { row: 1, col: 2 };

    let grid = sample_grid(&state);
    let _terminal = render(&grid, &state);

    let table_state = grid.table_state.borrow();
    assert_eq!(table_state.selected(), Some(1));
    assert_eq!(table_state.selected_column(), Some(2));
}

#[test]
fn empty_table_renders_without_a_selection() {
    let mut state = State::default();
    state.snapshot =
        crate::source::TableSnapshot::new(Vec::new(), Vec::new()).unwrap();

    let mut grid = Grid::new();
    grid.update(Vec::new(), Vec::new());

    let _terminal = render(&grid, &state);

    let table_state = grid.table_state.borrow();
    assert_eq!(table_state.selected(), None);
    assert_eq!(table_state.selected_column(), None);
}

#[test]
fn column_sizes_fit_the_widest_cell() {
    let headers = vec!["name".to_string(), "age".to_string()];
    let items = vec![vec!["Alice".to_string(), "25".to_string()]];

    assert_eq!(column_sizes(&headers, &items), vec![7, 5]);
}

#[test]
fn column_sizes_saturate_at_the_max_width() {
    let headers = vec!["notes".to_string()];
    let items = vec![vec!["x".repeat(100)]];

    assert_eq!(column_sizes(&headers, &items), vec![MAX_COLUMN_WIDTH]);
}

#[test]
fn fit_to_width_leaves_short_content_alone() {
    assert_eq!(fit_to_width("abc", 10), "abc");
}

#[test]
fn fit_to_width_truncates_with_an_ellipsis() {
    assert_eq!(fit_to_width("abcdefghij", 6), "abcd…");
}

#[test]
fn fit_to_width_respects_char_boundaries() {
    // must not panic splitting a multibyte character
    let truncated = fit_to_width("héllö wörld ünïcode", 8);
    assert!(truncated.ends_with(ELLIPSIS));
}
