use ratatui::{Terminal, backend::TestBackend};

use crate::ui::store::state::State;

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

fn render_footer(state: &State) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };

            InfoFooter::new("(q) quit".to_string()).render(
                frame.area(),
                frame.buffer_mut(),
                &ctx,
            );
        })
        .unwrap();

    terminal
}

#[test]
fn shows_the_key_legend() {
    let state = State::default();
    let terminal = render_footer(&state);

    assert!(buffer_text(&terminal).contains("(q) quit"));
}

#[test]
fn failure_notice_replaces_the_legend() {
    let mut state = State::default();
    state.message = Some("refresh failed: file missing".to_string());

    let terminal = render_footer(&state);
    let text = buffer_text(&terminal);

    assert!(text.contains("refresh failed: file missing"));
    assert!(!text.contains("(q) quit"));
}
