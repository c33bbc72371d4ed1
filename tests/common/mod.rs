//! Shared test utilities.

#![allow(dead_code)]

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shopcart::catalog::Catalog;
use shopcart::config::UiConfig;
use shopcart::store::SelectionStore;
use shopcart::ui::app::App;
use shopcart::ui::render::draw;
use std::path::PathBuf;
use tempfile::TempDir;

/// Seeded catalog plus an empty store over it.
pub fn seeded() -> (Catalog, SelectionStore) {
    let catalog = Catalog::seeded();
    let store = SelectionStore::new(&catalog);
    (catalog, store)
}

/// App over the seeded catalog, sized to `cols` x `rows`.
pub fn make_app(cols: u16, rows: u16) -> App {
    let mut app = App::new(Catalog::seeded(), UiConfig::default());
    app.on_resize(cols, rows);
    app
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Render one frame and return the screen as text, one line per row.
pub fn render_to_string(app: &App, cols: u16, rows: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(cols, rows)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..rows {
        for x in 0..cols {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// The screen row containing `needle`, if any.
pub fn line_with<'a>(screen: &'a str, needle: &str) -> Option<&'a str> {
    screen.lines().find(|line| line.contains(needle))
}
