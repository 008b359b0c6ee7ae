//! Shared test utilities: a scripted record source and an app harness.

#![allow(dead_code, unused_imports)]

pub mod fake_source;

pub use fake_source::FakeSource;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use recordview::cache::DEFAULT_TTL;
use recordview::prefetch::RecordStore;
use recordview::ui::app::{App, DetailView, PageView, SidebarView};
use recordview::ui::boundary::{DetailPane, Page};
use recordview::ui::events::AppEvent;
use recordview::ui::nav::Route;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Terminal size the harness pretends to have.
pub const COLS: u16 = 120;
pub const ROWS: u16 = 40;

/// Row of the first sidebar entry (header plus the sidebar's top border).
pub const FIRST_ENTRY_ROW: u16 = 4;

pub fn store(source: &Arc<FakeSource>) -> RecordStore {
    RecordStore::new(source.clone(), DEFAULT_TTL)
}

/// An [`App`] wired to a fake source, with its event channel.
///
/// Must be created inside a tokio runtime; fetches are spawned onto it.
pub struct TestApp {
    pub app: App,
    pub rx: Receiver<AppEvent>,
    pub source: Arc<FakeSource>,
}

impl TestApp {
    pub fn new(source: Arc<FakeSource>, initial: Route) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(
            store(&source),
            initial,
            tokio::runtime::Handle::current(),
            tx,
        );
        app.on_resize(COLS, ROWS);
        Self { app, rx, source }
    }

    /// Create and run the first render pass.
    pub fn started(source: Arc<FakeSource>, initial: Route) -> Self {
        let mut harness = Self::new(source, initial);
        harness.app.start();
        harness
    }

    /// Feed every queued event to the app.
    pub fn drain(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.app.handle_event(event);
        }
    }

    /// Let `duration` of (paused) time pass in small steps, handling events
    /// as they arrive.
    pub async fn advance(&mut self, duration: Duration) {
        let step = Duration::from_millis(10);
        let mut elapsed = Duration::ZERO;
        while elapsed < duration {
            tokio::time::sleep(step).await;
            self.drain();
            elapsed += step;
        }
    }

    pub fn key(&mut self, code: KeyCode) {
        self.key_with(code, KeyModifiers::NONE);
    }

    pub fn key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app
            .handle_event(AppEvent::Key(KeyEvent::new(code, modifiers)));
    }

    pub fn mouse(&mut self, kind: MouseEventKind, index: u16, modifiers: KeyModifiers) {
        self.app.handle_event(AppEvent::Mouse(MouseEvent {
            kind,
            column: 5,
            row: FIRST_ENTRY_ROW + index,
            modifiers,
        }));
    }

    pub fn click(&mut self, index: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), index, KeyModifiers::NONE);
    }

    pub fn hover(&mut self, index: u16) {
        self.mouse(MouseEventKind::Moved, index, KeyModifiers::NONE);
    }

    pub fn page(&self) -> PageView {
        self.app.page()
    }

    /// Sidebar of a ready page; panics otherwise.
    pub fn sidebar(&self) -> SidebarView {
        match self.page() {
            Page::Ready { sidebar, .. } => sidebar,
            other => panic!("expected a ready page, got {:?}", other),
        }
    }

    /// Detail pane of a ready page; panics otherwise.
    pub fn detail(&self) -> DetailPane<DetailView> {
        match self.page() {
            Page::Ready { detail, .. } => detail,
            other => panic!("expected a ready page, got {:?}", other),
        }
    }

    pub fn route_path(&self) -> String {
        self.app.route().path()
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
