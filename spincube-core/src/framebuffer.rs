//! Character grid the rasterizer paints into
use crate::view::TerminalSize;

/// Byte used for empty cells
pub const BLANK: u8 = b' ';

/// Row-major grid of display bytes sized to the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    size: TerminalSize,
    cells: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(size: TerminalSize) -> Self {
        Self {
            size,
            cells: vec![BLANK; size.area()],
        }
    }

    /// Get the buffer ready for a new frame.
    ///
    /// A new size reallocates the grid; otherwise the existing allocation is
    /// blanked in place.
    pub fn prepare(&mut self, size: TerminalSize) {
        if size != self.size {
            self.size = size;
            self.cells = vec![BLANK; size.area()];
        } else {
            self.cells.fill(BLANK);
        }
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.size.cols as usize
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.cols() && y < self.rows() {
            Some(self.cells[y * self.cols() + x])
        } else {
            None
        }
    }

    /// Write a cell; callers clip to the grid first
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let cols = self.cols();
        self.cells[y * cols + x] = value;
    }

    /// Iterate over the grid one row at a time
    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.cols().max(1))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Number of non-blank cells
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != BLANK).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = FrameBuffer::new(TerminalSize::new(3, 4));
        assert_eq!(buffer.as_bytes(), &[BLANK; 12]);
        assert_eq!(buffer.rows_iter().count(), 3);
        assert_eq!(buffer.painted(), 0);
    }

    #[test]
    fn test_prepare_same_size_clears_in_place() {
        let size = TerminalSize::new(2, 2);
        let mut buffer = FrameBuffer::new(size);
        buffer.set(1, 1, b'#');
        let before = buffer.as_bytes().as_ptr();

        buffer.prepare(size);
        assert_eq!(buffer.painted(), 0);
        assert_eq!(buffer.as_bytes().as_ptr(), before);
    }

    #[test]
    fn test_prepare_new_size_reallocates() {
        let mut buffer = FrameBuffer::new(TerminalSize::new(2, 2));
        buffer.set(0, 0, b'@');

        buffer.prepare(TerminalSize::new(5, 7));
        assert_eq!(buffer.size(), TerminalSize::new(5, 7));
        assert_eq!(buffer.as_bytes().len(), 35);
        assert_eq!(buffer.painted(), 0);
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let mut buffer = FrameBuffer::new(TerminalSize::new(2, 3));
        buffer.set(2, 1, b'+');
        assert_eq!(buffer.get(2, 1), Some(b'+'));
        assert_eq!(buffer.get(3, 1), None);
        assert_eq!(buffer.get(0, 2), None);
    }
}
