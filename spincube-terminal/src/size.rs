//! Terminal size queries
use crossterm::terminal;
use spincube_core::TerminalSize;
use std::io;

/// Anything that can report the current terminal dimensions
pub trait SizeSource {
    fn query(&self) -> io::Result<TerminalSize>;
}

/// Asks the controlling terminal through crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermSize;

impl SizeSource for CrosstermSize {
    fn query(&self) -> io::Result<TerminalSize> {
        let (cols, rows) = terminal::size()?;
        Ok(TerminalSize::new(rows, cols))
    }
}
