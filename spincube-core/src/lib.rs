//! spincube core - geometry, transform and rasterization for the spinning cube
//!
//! Everything here is pure: a frame is a function of the view state, and
//! the terminal frontend owns all I/O.

pub mod config;
pub mod framebuffer;
pub mod geometry;
pub mod motion;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod transform;
pub mod view;

// Re-export commonly used types
pub use config::RenderConfig;
pub use framebuffer::FrameBuffer;
pub use geometry::Face;
pub use motion::{Motion, Wave, Waveform};
pub use projection::{Camera, ScreenPoint};
pub use renderer::Renderer;
pub use transform::{RotationState, Transform};
pub use view::{ScalePolicy, TerminalSize, ViewState};
