//! Ownership of the terminal while the questionnaire is on screen.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::ui;

static RESTORE_ON_PANIC: Once = Once::new();

/// Raw mode on the alternate screen, held until the guard is dropped.
pub(crate) struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub(crate) fn enter() -> io::Result<Self> {
        RESTORE_ON_PANIC.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                if let Err(err) = leave_screen() {
                    eprintln!("failed to restore terminal: {}", err);
                }
                previous(info);
            }));
        });

        enable_raw_mode()?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match terminal {
            Ok(terminal) => {
                tracing::debug!("terminal session entered");
                Ok(Self { terminal })
            }
            Err(err) => {
                if let Err(restore_err) = leave_screen() {
                    tracing::warn!(%restore_err, "terminal left half-initialised");
                }
                Err(err)
            }
        }
    }

    pub(crate) fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        match leave_screen() {
            Ok(()) => tracing::debug!("terminal session left"),
            Err(err) => tracing::warn!(%err, "failed to restore terminal"),
        }
    }
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}
