//! The grid view over the current snapshot.

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use std::{cell::RefCell, sync::Arc};

use crate::ui::{
    components::grid::Grid,
    keys::Command,
    store::{
        Dispatcher,
        action::{Action, Motion},
        state::State,
    },
};

use super::traits::{
    CommandContext, CommandHandler, CustomWidgetContext, CustomWidgetRef,
    View,
};

pub struct TableView {
    dispatcher: Arc<dyn Dispatcher>,
    grid: RefCell<Grid>,
}

impl TableView {
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            grid: RefCell::new(Grid::new()),
        }
    }

    fn dispatch_motion(&self, motion: Motion) {
        if let Err(e) = self.dispatcher.dispatch(Action::MoveCursor(motion)) {
            log::error!("failed to dispatch cursor motion: {e}");
        }
    }
}

impl View for TableView {
    fn legend(&self, _state: &State) -> &str {
        "(q) quit | (h j k l) move | (g g) top | (G) bottom"
    }
}

impl CustomWidgetRef for TableView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let mut grid = self.grid.borrow_mut();
        grid.update(
            ctx.state.snapshot.columns().to_vec(),
            ctx.state.snapshot.rows().to_vec(),
        );
        grid.render_ref(area, buf, ctx)
    }
}

impl CommandHandler for TableView {
    fn handle_command(&self, command: Command, ctx: &CommandContext) -> bool {
        let motion = match command {
            Command::MoveLeft => Motion::Left,
            Command::MoveDown => Motion::Down,
            Command::MoveUp => Motion::Up,
            Command::MoveRight => Motion::Right,
            Command::GoToTop => Motion::Top,
            Command::GoToBottom => Motion::Bottom,
            Command::Quit => return false,
        };

        // nothing to navigate over in an empty table
        if ctx.state.snapshot.row_count() == 0 {
            return true;
        }

        self.dispatch_motion(motion);
        true
    }
}

#[cfg(test)]
#[path = "./table_tests.rs"]
mod tests;
