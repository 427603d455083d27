//! Keystroke-to-command resolution, including multi-key sequences.
//!
//! Bindings are keyed by sequences of one or two keystrokes. A sequence
//! that exactly matches a binding fires immediately unless a longer
//! binding shares the prefix, in which case the shorter match is held
//! until a deciding keystroke arrives or the deadline passes.

use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyCode;

/// How long a pending sequence waits for its deciding keystroke.
pub const SEQUENCE_TIMEOUT: Duration = Duration::from_millis(500);

/// Logical commands produced by key bindings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    MoveLeft,
    MoveDown,
    MoveUp,
    MoveRight,
    GoToTop,
    GoToBottom,
    Quit,
}

/// A key sequence bound to a command.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    command: Command,
}

impl Binding {
    pub fn single(key: KeyCode, command: Command) -> Self {
        Self {
            keys: vec![key],
            command,
        }
    }

    pub fn sequence(keys: &[KeyCode], command: Command) -> Self {
        Self {
            keys: keys.to_vec(),
            command,
        }
    }
}

/// Resolves raw keystrokes into commands, one keystroke at a time.
/// Unrecognized input resets the pending buffer and is silently dropped.
pub struct SequenceMatcher {
    bindings: Vec<Binding>,
    pending: Vec<KeyCode>,
    // exact match shadowed by a longer binding, held until the deadline
    held: Option<Command>,
    deadline: Option<Instant>,
    timeout: Duration,
}

impl SequenceMatcher {
    pub fn new(bindings: Vec<Binding>, timeout: Duration) -> Self {
        Self {
            bindings,
            pending: Vec::new(),
            held: None,
            deadline: None,
            timeout,
        }
    }

    /// The fixed binding set for the viewer.
    pub fn vim_defaults() -> Self {
        let bindings = vec![
            Binding::single(KeyCode::Char('q'), Command::Quit),
            Binding::single(KeyCode::Char('h'), Command::MoveLeft),
            Binding::single(KeyCode::Char('j'), Command::MoveDown),
            Binding::single(KeyCode::Char('k'), Command::MoveUp),
            Binding::single(KeyCode::Char('l'), Command::MoveRight),
            Binding::single(KeyCode::Left, Command::MoveLeft),
            Binding::single(KeyCode::Down, Command::MoveDown),
            Binding::single(KeyCode::Up, Command::MoveUp),
            Binding::single(KeyCode::Right, Command::MoveRight),
            Binding::single(KeyCode::Char('G'), Command::GoToBottom),
            Binding::sequence(
                &[KeyCode::Char('g'), KeyCode::Char('g')],
                Command::GoToTop,
            ),
        ];

        Self::new(bindings, SEQUENCE_TIMEOUT)
    }

    /// Feeds one keystroke through the matcher. Returns the commands it
    /// resolves to: usually zero or one, two when a held match is flushed
    /// by a keystroke that then completes a binding of its own.
    pub fn process_key(&mut self, key: KeyCode) -> Vec<Command> {
        let mut commands = Vec::new();

        // a sequence that outlived its deadline no longer participates
        if self.expired() {
            self.flush_into(&mut commands);
        }

        self.advance(key, &mut commands);
        commands
    }

    /// Emits a held match whose deadline has passed. Called once per loop
    /// tick so an ambiguous shorter binding still fires without further
    /// input.
    pub fn poll_timeout(&mut self) -> Option<Command> {
        if self.expired() {
            let mut commands = Vec::new();
            self.flush_into(&mut commands);
            return commands.pop();
        }
        None
    }

    fn advance(&mut self, key: KeyCode, commands: &mut Vec<Command>) {
        self.pending.push(key);

        let exact = self
            .bindings
            .iter()
            .find(|b| b.keys == self.pending)
            .map(|b| b.command);

        let extendable = self.bindings.iter().any(|b| {
            b.keys.len() > self.pending.len()
                && b.keys.starts_with(&self.pending)
        });

        match (exact, extendable) {
            (Some(command), false) => {
                self.reset();
                commands.push(command);
            }
            (exact, true) => {
                // a longer binding may still complete this sequence; hold
                // any exact match until the deadline decides
                self.held = exact;
                self.deadline = Some(Instant::now() + self.timeout);
            }
            (None, false) => {
                let retry = self.pending.len() > 1;
                self.flush_into(commands);
                // the keystroke failed to extend the sequence; it may
                // still start a fresh one
                if retry {
                    self.advance(key, commands);
                }
            }
        }
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn flush_into(&mut self, commands: &mut Vec<Command>) {
        if let Some(held) = self.held.take() {
            commands.push(held);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.pending.clear();
        self.held = None;
        self.deadline = None;
    }
}

#[cfg(test)]
#[path = "./keys_tests.rs"]
mod tests;
