use spincube_core::{RenderConfig, TerminalSize};
use spincube_terminal::{Phase, Presenter, ResizeFlag, SizeSource, TerminalApp};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

/// Size source the test can change between frames; `None` fails the query
#[derive(Clone)]
struct FakeSize(Rc<Cell<Option<TerminalSize>>>);

impl FakeSize {
    fn new(size: TerminalSize) -> Self {
        Self(Rc::new(Cell::new(Some(size))))
    }

    fn set(&self, size: Option<TerminalSize>) {
        self.0.set(size);
    }
}

impl SizeSource for FakeSize {
    fn query(&self) -> io::Result<TerminalSize> {
        self.0
            .get()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no terminal"))
    }
}

fn app(size: TerminalSize) -> (TerminalApp<Vec<u8>, FakeSize>, FakeSize, ResizeFlag) {
    let source = FakeSize::new(size);
    let resize = ResizeFlag::pending();
    let app = TerminalApp::new(
        RenderConfig::default(),
        Presenter::new(Vec::new()),
        source.clone(),
        resize.clone(),
    );
    (app, source, resize)
}

#[test]
fn test_first_frame_uses_queried_size() {
    let (mut app, _source, resize) = app(TerminalSize::new(24, 80));
    app.step().unwrap();

    assert!(!resize.is_pending());
    assert_eq!(app.buffer().size(), TerminalSize::new(24, 80));
    assert_eq!(app.view().scale, 9);
    assert_eq!(app.phase(), Phase::Idle);

    let output = app.presenter().writer();
    assert!(output.starts_with(b"\x1b[1;1H"));
    let rows = output.split(|&byte| byte == b'\n').count();
    assert_eq!(rows, 24);
}

#[test]
fn test_resize_applies_on_next_frame() {
    let (mut app, source, resize) = app(TerminalSize::new(24, 80));
    app.step().unwrap();

    source.set(Some(TerminalSize::new(40, 120)));
    resize.raise();
    app.step().unwrap();

    assert_eq!(app.buffer().size(), TerminalSize::new(40, 120));
    assert_eq!(app.view().center.x, 60);
    assert_eq!(app.view().center.y, 20);
}

#[test]
fn test_size_is_only_reread_on_notification() {
    let (mut app, source, _resize) = app(TerminalSize::new(24, 80));
    app.step().unwrap();

    source.set(Some(TerminalSize::new(40, 120)));
    app.step().unwrap();
    assert_eq!(app.buffer().size(), TerminalSize::new(24, 80));
}

#[test]
fn test_failed_query_keeps_last_size() {
    let (mut app, source, resize) = app(TerminalSize::new(30, 90));
    app.step().unwrap();

    source.set(None);
    resize.raise();
    app.step().unwrap();
    assert_eq!(app.buffer().size(), TerminalSize::new(30, 90));

    source.set(Some(TerminalSize::new(0, 90)));
    resize.raise();
    app.step().unwrap();
    assert_eq!(app.buffer().size(), TerminalSize::new(30, 90));
}

#[test]
fn test_failed_first_query_uses_fallback_size() {
    let (mut app, source, _resize) = app(TerminalSize::new(30, 90));
    source.set(None);
    app.step().unwrap();

    assert_eq!(app.buffer().size(), RenderConfig::default().fallback_size);
    assert_eq!(app.view().scale, 25);
}

#[test]
fn test_animation_time_advances_by_interval() {
    let (mut app, _source, _resize) = app(TerminalSize::new(24, 80));
    let config = RenderConfig::default();
    assert_eq!(config.interval, Duration::from_millis(100));

    for _ in 0..10 {
        app.step().unwrap();
    }

    assert_eq!(app.frame_count(), 10);
    assert!((app.view().time - 1.0).abs() < 1e-6);
    assert_eq!(app.view().rotation, config.motion.angles_at(app.view().time));
}

#[test]
fn test_playback_is_deterministic() {
    let (mut first, _, _) = app(TerminalSize::new(24, 80));
    let (mut second, _, _) = app(TerminalSize::new(24, 80));

    for _ in 0..5 {
        first.step().unwrap();
        second.step().unwrap();
    }

    assert_eq!(first.buffer(), second.buffer());
    assert_eq!(first.presenter().writer(), second.presenter().writer());
}
