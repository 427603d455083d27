//! Terminal lifecycle and the render/input loop.

use color_eyre::eyre::{Context, Result, eyre};
use core::time;
use ratatui::{
    Terminal,
    crossterm::{
        event::{
            self, Event as CrossTermEvent, KeyCode, KeyEventKind,
            KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    prelude::CrosstermBackend,
};
use std::{
    cell::RefCell,
    io::{self, Stdout},
    sync::Arc,
};

use crate::ui::{
    keys::{Command, SequenceMatcher},
    store::{Dispatcher, StateGetter, Store, state::State},
    views::{
        main::MainView,
        traits::{CommandContext, CustomWidgetContext, View},
    },
};

type Backend = CrosstermBackend<Stdout>;

// Keeps the loop responsive to key presses while letting background
// refreshes show up between keystrokes.
const POLL_INTERVAL: time::Duration = time::Duration::from_millis(60);

/// Owns the terminal for the session and runs the render/input loop.
/// This is the only place the display is ever written to: each frame is
/// drawn whole from one copy of the store state, so a repaint can never
/// interleave with a half-applied refresh or cursor move.
pub struct App {
    terminal: RefCell<Terminal<Backend>>,
    store: Arc<Store>,
    matcher: RefCell<SequenceMatcher>,
    main_view: Box<dyn View>,
}

/// Puts the terminal in raw mode on the alternate screen and creates the
/// app around it.
pub fn create_app(store: Arc<Store>) -> Result<App> {
    enable_raw_mode().wrap_err("failed to enter raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .wrap_err("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal =
        Terminal::new(backend).wrap_err("failed to create terminal")?;
    Ok(App::new(terminal, store))
}

impl App {
    fn new(terminal: Terminal<Backend>, store: Arc<Store>) -> Self {
        let dispatcher = Arc::clone(&store) as Arc<dyn Dispatcher>;
        Self {
            terminal: RefCell::new(terminal),
            store,
            matcher: RefCell::new(SequenceMatcher::vim_defaults()),
            main_view: Box::new(MainView::new(dispatcher)),
        }
    }

    /// Runs until the user quits. The terminal is restored even when the
    /// loop exits with an error.
    pub fn launch(&self) -> Result<()> {
        let res = self.start_app_loop();
        self.exit()?;
        res
    }

    fn start_app_loop(&self) -> Result<()> {
        loop {
            let state = self.store.get_state()?;

            self.render_frame(&state)?;

            // a held multi-key sequence fires on its own once its deadline
            // passes, without waiting for further input
            if let Some(command) = self.matcher.borrow_mut().poll_timeout()
                && self.run_command(command, &state)
            {
                return Ok(());
            }

            // Use poll here so we don't block the thread, this will allow
            // rendering of refreshed data as it arrives
            if event::poll(POLL_INTERVAL)?
                && let CrossTermEvent::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                // do not allow overriding ctrl-c
                if key.code == KeyCode::Char('c')
                    && key.modifiers == KeyModifiers::CONTROL
                {
                    return Ok(());
                }

                let commands =
                    self.matcher.borrow_mut().process_key(key.code);

                for command in commands {
                    if self.run_command(command, &state) {
                        return Ok(());
                    }
                }
            }
        }
    }

    // Returns true when the command ends the session.
    fn run_command(&self, command: Command, state: &State) -> bool {
        if command == Command::Quit {
            return true;
        }

        let ctx = CommandContext { state };
        self.main_view.handle_command(command, &ctx);
        false
    }

    fn render_frame(&self, state: &State) -> Result<()> {
        let mut res = Ok(());

        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: f.area(),
                };

                if let Err(err) =
                    self.main_view.render_ref(f.area(), f.buffer_mut(), &ctx)
                {
                    res = Err(err);
                }
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        res
    }

    fn exit(&self) -> Result<()> {
        let mut terminal = self.terminal.borrow_mut();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
