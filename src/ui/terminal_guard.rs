//! Raw mode and alternate screen, restored on drop or panic.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type UiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves the alternate screen exactly once, whichever of drop or the panic
/// hook gets there first.
pub struct TerminalGuard {
    active: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn engage() -> Self {
        let guard = Self {
            active: Arc::new(AtomicBool::new(true)),
        };

        let active = Arc::clone(&guard.active);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if active.swap(false, Ordering::SeqCst) {
                restore_terminal();
            }
            default_hook(info);
        }));

        guard
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            restore_terminal();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(UiTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::engage();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
