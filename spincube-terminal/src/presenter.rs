//! Writes frame buffers to a terminal
use crossterm::{cursor, QueueableCommand};
use spincube_core::FrameBuffer;
use std::io::{self, Write};

/// Separator between rows. The carriage return also clears a pending wrap
/// left by a full-width row.
const ROW_SEPARATOR: &[u8] = b"\r\n";

/// Emits whole frames over the previous one without clearing the screen
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.out.queue(cursor::Hide)?;
        self.out.flush()
    }

    /// Home the cursor and overwrite every cell of the screen.
    ///
    /// No separator follows the last row so the terminal never scrolls.
    pub fn present(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        for (index, row) in buffer.rows_iter().enumerate() {
            if index > 0 {
                self.out.write_all(ROW_SEPARATOR)?;
            }
            self.out.write_all(row)?;
        }
        self.out.flush()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}
