//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use pearl_app::{App, AppEvent, Driver, KeyInput};
use pearl_core::Environment;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// How often a tick is emitted when no input arrives.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Time and sleeping
/// come from the environment, so ticks follow whatever clock `E` provides.
pub struct TerminalDriver<E: Environment> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    env: E,
}

impl<E: Environment> TerminalDriver<E> {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched into raw mode.
    pub fn new(env: E) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, env })
    }

    /// Convert a crossterm key event to `KeyInput`.
    ///
    /// `None` for keys the app does not use.
    fn convert_key(event: KeyEvent) -> Option<KeyInput> {
        match event.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::BackTab => Some(KeyInput::BackTab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            _ => None,
        }
    }

    fn is_interrupt(event: &KeyEvent) -> bool {
        event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c')
    }
}

impl<E: Environment> Driver for TerminalDriver<E> {
    type Error = TerminalError;
    type Instant = E::Instant;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if Self::is_interrupt(&key) {
                            return Ok(None);
                        }
                        Ok(Some(Self::convert_key(key).map_or(AppEvent::Tick, AppEvent::Key)))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => Ok(Some(AppEvent::Resize(cols, rows))),
                    Some(Ok(_)) => Ok(Some(AppEvent::Tick)),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Ok(None),
                }
            }

            // Tick timeout
            () = self.env.sleep(TICK_INTERVAL) => Ok(Some(AppEvent::Tick)),
        }
    }

    fn now(&self) -> Self::Instant {
        self.env.now()
    }

    fn render(&mut self, app: &App<Self::Instant>) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        restored("show cursor", self.terminal.show_cursor());
    }
}

impl<E: Environment> Drop for TerminalDriver<E> {
    fn drop(&mut self) {
        self.stop();
        restored("disable raw mode", disable_raw_mode());
        restored("leave alternate screen", stdout().execute(LeaveAlternateScreen));
    }
}

/// Log a failed terminal restore step. Returns whether the step succeeded.
fn restored<T>(step: &'static str, result: io::Result<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(error) => {
            tracing::debug!(%error, step, "terminal restore failed");
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SystemEnv;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn maps_used_keys() {
        let convert = TerminalDriver::<SystemEnv>::convert_key;
        assert_eq!(convert(press(KeyCode::Char('l'), KeyModifiers::NONE)), Some(KeyInput::Char('l')));
        assert_eq!(convert(press(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(KeyInput::BackTab));
        assert_eq!(convert(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn ctrl_c_interrupts() {
        let ctrl_c = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(TerminalDriver::<SystemEnv>::is_interrupt(&ctrl_c));
        assert!(!TerminalDriver::<SystemEnv>::is_interrupt(&press(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn restore_failures_are_reported() {
        assert!(restored("show cursor", Ok(())));
        assert!(!restored("show cursor", Err::<(), _>(io::Error::other("closed"))));
    }
}
