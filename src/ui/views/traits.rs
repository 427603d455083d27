use color_eyre::eyre::Result;
use ratatui::layout::Rect;

use crate::ui::{keys::Command, store::state::State};

/// Handles logical commands produced by the key sequence matcher. Views
/// consume commands rather than raw key events; the matcher is the single
/// place keystrokes are interpreted.
pub trait CommandHandler {
    /// Returns true when the command was consumed.
    fn handle_command(&self, command: Command, ctx: &CommandContext) -> bool;
}

/// Context handed to command handlers.
pub struct CommandContext<'a> {
    // app state at the time the command was recognized
    pub state: &'a State,
}

/// Context handed to every widget render.
pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
    // total area for the entire application
    pub app_area: Rect,
}

pub trait CustomWidget {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()>;
}

pub trait View: CommandHandler + CustomWidgetRef {
    fn legend(&self, _state: &State) -> &str {
        ""
    }
}
