//! Title bar showing the watched source and table dimensions.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Single line summary of what is being watched.
pub struct TitleBar;

impl TitleBar {
    pub fn new() -> Self {
        Self
    }
}

impl CustomWidget for TitleBar {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let state = ctx.state;

        let name_style = Style::default()
            .fg(state.colors.label)
            .add_modifier(Modifier::BOLD);

        let dims = format!(
            "{} rows x {} cols",
            state.snapshot.row_count(),
            state.snapshot.column_count()
        );

        let title = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {}", state.source_name), name_style),
            Span::styled(
                format!("  {dims}"),
                Style::default().fg(state.colors.text),
            ),
            Span::styled(
                format!("  refreshing every {}", state.refresh_interval),
                Style::default().fg(state.colors.scroll_bar_fg),
            ),
        ]))
        .style(Style::default().bg(state.colors.buffer_bg));

        title.render(area, buf)
    }
}

#[cfg(test)]
#[path = "./title_bar_tests.rs"]
mod tests;
