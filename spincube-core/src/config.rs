//! Render tunables with the stock defaults
use std::time::Duration;

use crate::motion::Motion;
use crate::projection::Camera;
use crate::view::{ScalePolicy, TerminalSize};

/// All knobs of the renderer and the animation loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub camera: Camera,
    pub scale: ScalePolicy,
    pub motion: Motion,
    /// Size assumed until the terminal reports its own
    pub fallback_size: TerminalSize,
    /// Time between frames, also the animation time step
    pub interval: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            scale: ScalePolicy::default(),
            motion: Motion::default(),
            fallback_size: TerminalSize::default(),
            interval: Duration::from_millis(100),
        }
    }
}
