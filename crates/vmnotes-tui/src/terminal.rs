//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use vmnotes_core::prelude::*;

/// Restore the terminal before the default panic output is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

/// Switch to the alternate screen with pasting delivered as one event
pub fn enter() -> Result<DefaultTerminal> {
    install_panic_hook();
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        ratatui::restore();
        return Err(Error::terminal(format!("Failed to enable bracketed paste: {e}")));
    }
    Ok(terminal)
}

/// Leave the alternate screen
pub fn leave() {
    if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
        warn!("Could not disable bracketed paste: {}", e);
    }
    ratatui::restore();
}
