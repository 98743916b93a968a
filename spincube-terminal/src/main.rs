//! spincube - a shaded ASCII cube spinning in the terminal
//!
//! Runs until killed. Set RUST_LOG to see diagnostics on stderr.

use anyhow::{Context, Result};
use log::info;
use spincube_core::RenderConfig;
use spincube_terminal::{spawn_watcher, CrosstermSize, Presenter, ResizeFlag, TerminalApp};
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // The frame owns stdout, so only warnings reach stderr unless asked
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RenderConfig::default();
    info!("Starting spincube at {:?} per frame", config.interval);

    let resize = ResizeFlag::pending();
    spawn_watcher(resize.clone()).context("failed to start the resize watcher")?;

    let stdout = BufWriter::with_capacity(64 * 1024, io::stdout());
    let mut app = TerminalApp::new(config, Presenter::new(stdout), CrosstermSize, resize);
    app.run()
}
