//! Footer showing key bindings and refresh status.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Bordered footer line. Shows the key legend normally; a refresh-failure
/// notice takes its place, in the error color, until the next successful
/// refresh clears it.
pub struct InfoFooter {
    content: String,
}

impl InfoFooter {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

impl CustomWidget for InfoFooter {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let (text, fg) = match &ctx.state.message {
            Some(message) => (message.as_str(), ctx.state.colors.error),
            None => (self.content.as_str(), ctx.state.colors.text),
        };

        let info_footer = Paragraph::new(Line::from(text))
            .style(Style::new().fg(fg).bg(ctx.state.colors.buffer_bg))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(
                        Style::new().fg(ctx.state.colors.border_color),
                    ),
            );

        info_footer.render(area, buf)
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
