use std::io::stdout;
use std::panic::{set_hook, take_hook};

use color_eyre::eyre::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

pub type Tui = DefaultTerminal;

/// Raw mode and the alternate screen come from ratatui; mouse capture is
/// on so suggestions can be clicked.
pub fn init() -> Result<Tui> {
    let terminal = ratatui::try_init()?;
    execute!(stdout(), EnableMouseCapture)?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::try_restore()?;
    Ok(())
}

pub fn init_panic_hook() {
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        // intentionally ignore errors here since we're already in a panic
        let _ = restore();
        original_hook(panic_info);
    }));
}
