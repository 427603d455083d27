//! Top level view: title bar, grid, footer.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
};
use std::sync::Arc;

use crate::ui::{
    components::{footer::InfoFooter, title_bar::TitleBar},
    keys::Command,
    store::{Dispatcher, state::State},
};

use super::{
    table::TableView,
    traits::{
        CommandContext, CommandHandler, CustomWidget, CustomWidgetContext,
        CustomWidgetRef, View,
    },
};

pub struct MainView {
    content: Box<dyn View>,
}

impl MainView {
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            content: Box::new(TableView::new(dispatcher)),
        }
    }
}

impl View for MainView {
    fn legend(&self, state: &State) -> &str {
        self.content.legend(state)
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        // three vertical sections: title, grid, footer
        let page_areas = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

        // background for the entire display
        let background = Block::new()
            .style(Style::new().bg(ctx.state.colors.buffer_bg));
        background.render(area, buf);

        TitleBar::new().render(page_areas[0], buf, ctx);

        self.content.render_ref(page_areas[1], buf, ctx)?;

        let legend = self.content.legend(ctx.state).to_string();
        InfoFooter::new(legend).render(page_areas[2], buf, ctx);

        Ok(())
    }
}

impl CommandHandler for MainView {
    fn handle_command(&self, command: Command, ctx: &CommandContext) -> bool {
        self.content.handle_command(command, ctx)
    }
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
