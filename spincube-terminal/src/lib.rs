//! Terminal frontend for the spinning cube
use anyhow::{Context, Result};
use log::{debug, info, warn};
use spincube_core::{FrameBuffer, RenderConfig, Renderer, ViewState};
use std::io::Write;
use std::time::{Duration, Instant};

pub mod presenter;
pub mod resize;
pub mod size;

pub use presenter::Presenter;
pub use resize::{spawn_watcher, ResizeFlag};
pub use size::{CrosstermSize, SizeSource};

/// What the animation loop is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next tick
    Idle,
    /// Running the frame pipeline
    Rendering,
}

/// Fixed-rate animation driver for terminal rendering
pub struct TerminalApp<W: Write, S: SizeSource> {
    config: RenderConfig,
    view: ViewState,
    buffer: FrameBuffer,
    renderer: Renderer,
    presenter: Presenter<W>,
    size_source: S,
    resize: ResizeFlag,
    phase: Phase,
    /// Animation clock; advances one interval per frame, not by wall time
    elapsed: Duration,
    frame_count: u64,
}

impl<W: Write, S: SizeSource> TerminalApp<W, S> {
    pub fn new(config: RenderConfig, presenter: Presenter<W>, size_source: S, resize: ResizeFlag) -> Self {
        let size = config.fallback_size;
        Self {
            config,
            view: ViewState::new(size, config.scale.scale_for(size)),
            buffer: FrameBuffer::new(size),
            renderer: Renderer::new(config.camera),
            presenter,
            size_source,
            resize,
            phase: Phase::Idle,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Hide the cursor and animate until the process is killed
    pub fn run(&mut self) -> Result<()> {
        self.presenter
            .hide_cursor()
            .context("failed to hide the cursor")?;

        let interval = self.config.interval;
        loop {
            let frame_start = Instant::now();

            self.step()?;

            let elapsed = frame_start.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            } else {
                debug!("Frame {} took {:?}, over the {:?} budget", self.frame_count, elapsed, interval);
            }
        }
    }

    /// Render and present a single frame, then advance the animation
    pub fn step(&mut self) -> Result<()> {
        self.phase = Phase::Rendering;

        if self.resize.take() {
            self.refresh_size();
        }

        self.renderer.render(&self.view, &mut self.buffer);
        self.presenter
            .present(&self.buffer)
            .context("failed to present frame")?;

        self.advance();
        self.phase = Phase::Idle;
        Ok(())
    }

    fn refresh_size(&mut self) {
        let current = self.view.size;
        match self.size_source.query() {
            Ok(size) if size.is_empty() => {
                warn!(
                    "Terminal reported {}x{}, keeping {}x{}",
                    size.cols, size.rows, current.cols, current.rows
                );
            }
            Ok(size) => {
                if size != current {
                    info!("Terminal resized to {}x{}", size.cols, size.rows);
                }
                self.view.resize(size, &self.config.scale);
            }
            Err(err) => {
                warn!(
                    "Failed to query terminal size ({}), keeping {}x{}",
                    err, current.cols, current.rows
                );
            }
        }
    }

    fn advance(&mut self) {
        self.elapsed += self.config.interval;
        self.frame_count += 1;
        self.view.time = self.elapsed.as_secs_f32();
        self.view.rotation = self.config.motion.angles_at(self.view.time);
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn presenter(&self) -> &Presenter<W> {
        &self.presenter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
