//! Terminal state guard for guaranteed cleanup.
//!
//! Raw mode and the alternate screen are restored when the wizard exits,
//! whether normally, via early return, or panic.

use std::io::{self, Write};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    keyboard_enhancement_enabled: bool,
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// Keyboard enhancement is requested when the terminal supports it so
    /// that keys like `C-h` and `<BS>` arrive as distinct events.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        // Constructed before anything else can fail so Drop undoes raw mode
        let mut guard = Self {
            keyboard_enhancement_enabled: false,
            active: true,
        };
        execute!(stdout, EnterAlternateScreen)?;

        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            guard.keyboard_enhancement_enabled = true;
        }
        Ok(guard)
    }

    /// Perform manual cleanup and prevent Drop from running cleanup again.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.do_cleanup()
    }

    fn do_cleanup(&self) -> anyhow::Result<()> {
        let mut stdout = io::stdout();
        if self.keyboard_enhancement_enabled {
            // Must reach the terminal before raw mode is left
            if let Err(e) = execute!(stdout, PopKeyboardEnhancementFlags) {
                tracing::debug!(
                    error = %e,
                    "Failed to pop keyboard enhancement flags during cleanup"
                );
            }
            if let Err(e) = stdout.flush() {
                tracing::debug!(error = %e, "Failed to flush stdout during cleanup");
            }
        }
        disable_raw_mode()?;
        execute!(stdout, LeaveAlternateScreen)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = self.do_cleanup() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

/// Install a panic hook that restores terminal state before printing the panic message.
///
/// Call early in main(), before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, PopKeyboardEnhancementFlags) {
            tracing::debug!(error = %e, "Failed to pop keyboard enhancement flags in panic hook");
        }
        if let Err(e) = disable_raw_mode() {
            tracing::debug!(error = %e, "Failed to disable raw mode in panic hook");
        }
        if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
            tracing::debug!(error = %e, "Failed to restore terminal screen in panic hook");
        }
        if let Err(e) = stdout.flush() {
            tracing::debug!(error = %e, "Failed to flush stdout after panic cleanup");
        }

        original_hook(panic_info);
    }));
}
