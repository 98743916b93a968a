//! Resize notifications from the terminal
use crossterm::event::{self, Event};
use log::{debug, warn};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Raised by the watcher thread, taken by the render loop
#[derive(Debug, Clone, Default)]
pub struct ResizeFlag(Arc<AtomicBool>);

impl ResizeFlag {
    /// A flag that is already raised, so the first frame reads the real size
    pub fn pending() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Lower the flag, returning whether it was raised
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Spawn a thread that raises `flag` on every terminal resize event.
///
/// Every other event is discarded. The thread ends when the terminal stops
/// delivering events.
pub fn spawn_watcher(flag: ResizeFlag) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("resize-watcher".to_string())
        .spawn(move || watch(&flag))
}

fn watch(flag: &ResizeFlag) {
    loop {
        match event::read() {
            Ok(Event::Resize(cols, rows)) => {
                debug!("Resize event: {}x{}", cols, rows);
                flag.raise();
            }
            Ok(_) => {}
            Err(err) => {
                warn!("Resize watcher stopped: {}", err);
                return;
            }
        }
    }
}
