use ratatui::{Terminal, backend::TestBackend};

use crate::ui::store::{Store, reducer::StoreReducer, state::State};

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

fn render_main(state: &State) -> Terminal<TestBackend> {
    let store = Arc::new(Store::new(State::default(), StoreReducer::boxed()));
    let view = MainView::new(store);
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };

            view.render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    terminal
}

#[test]
fn lays_out_title_grid_and_footer() {
    let state = State::default();
    let terminal = render_main(&state);
    let text = buffer_text(&terminal);

    // title
    assert!(text.contains("people.csv"));
    // grid
    assert!(text.contains("name"));
    assert!(text.contains("Charlie"));
    // footer legend
    assert!(text.contains("(q) quit"));
    assert!(text.contains("(g g) top"));
}

#[test]
fn failed_refresh_notice_shows_in_the_footer() {
    let mut state = State::default();
    state.message = Some("refresh failed: permission denied".to_string());

    let terminal = render_main(&state);
    let text = buffer_text(&terminal);

    // the previous table stays on display alongside the notice
    assert!(text.contains("Alice"));
    assert!(text.contains("refresh failed: permission denied"));
}
