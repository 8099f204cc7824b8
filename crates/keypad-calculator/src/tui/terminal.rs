//! Terminal mode setup and restore

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::warn;

/// Holds the terminal in raw mode on the alternate screen with mouse capture.
///
/// Dropping the guard restores the terminal, so every exit path after
/// [`TerminalGuard::enter`] succeeds leaves the user's shell usable.
#[derive(Debug)]
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, drop undoes raw mode even if the next step fails
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to leave raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "failed to restore terminal screen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_restores_screen() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"), "no leave-alternate-screen in {text:?}");
        assert!(text.contains("\x1b[?25h"), "no show-cursor in {text:?}");
    }

    #[test]
    fn test_drop_with_failing_writer_does_not_panic() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        drop(TerminalGuard { out: Broken });
    }
}
