//! Terminal dimensions, the letterboxing scale policy and per-frame view state
use crate::projection::ScreenPoint;
use crate::transform::RotationState;

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
}

impl TerminalSize {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    pub fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.cols as i32 / 2, self.rows as i32 / 2)
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::new(47, 204)
    }
}

/// Picks a cube scale that fits the more constrained screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalePolicy {
    /// Scale at the reference dimensions
    pub default_scale: i32,
    pub reference_rows: i32,
    pub reference_cols: i32,
    /// Terminals wider than this keep the default horizontal scale
    pub column_threshold: i32,
}

impl ScalePolicy {
    pub fn row_scale(&self, rows: u16) -> i32 {
        self.default_scale * rows as i32 / self.reference_rows
    }

    pub fn col_scale(&self, cols: u16) -> i32 {
        if cols as i32 > self.column_threshold {
            self.default_scale
        } else {
            self.default_scale * cols as i32 / self.reference_cols
        }
    }

    pub fn scale_for(&self, size: TerminalSize) -> i32 {
        self.row_scale(size.rows).min(self.col_scale(size.cols))
    }
}

impl Default for ScalePolicy {
    fn default() -> Self {
        let reference = TerminalSize::default();
        Self {
            default_scale: 25,
            reference_rows: reference.rows as i32,
            reference_cols: reference.cols as i32,
            column_threshold: reference.cols as i32,
        }
    }
}

/// Everything one frame needs to know about where and how to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rotation: RotationState,
    pub scale: i32,
    pub size: TerminalSize,
    pub center: ScreenPoint,
    /// Accumulated animation time in seconds
    pub time: f32,
}

impl ViewState {
    pub fn new(size: TerminalSize, scale: i32) -> Self {
        Self {
            rotation: RotationState::zero(),
            scale,
            size,
            center: size.center(),
            time: 0.0,
        }
    }

    /// Adopt new terminal dimensions, recomputing center and scale
    pub fn resize(&mut self, size: TerminalSize, policy: &ScalePolicy) {
        self.size = size;
        self.center = size.center();
        self.scale = policy.scale_for(size);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(TerminalSize::default(), ScalePolicy::default().default_scale)
    }
}
