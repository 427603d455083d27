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

#[test]
fn shows_source_name_dimensions_and_cadence() {
    let state = State::default();
    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            TitleBar::new().render(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("people.csv"));
    assert!(text.contains("3 rows x 3 cols"));
    assert!(text.contains("refreshing every 1s"));
}
