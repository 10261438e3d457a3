// ── Application lifecycle & top-level state ────────────────────────────────────
//
// A single `App` is created on startup and owned by `WindowState` for the
// lifetime of the main window.  All mutations happen on the UI thread; there
// is no global mutable state.
//
// Every document operation is atomic from the caller's point of view: the
// session is updated exactly once, after both the disk transfer and the
// widget update succeeded.  A failure at any step leaves the session exactly
// as it was.

use std::path::{Path, PathBuf};

use crate::editor::TextWidget;
use crate::error::Result;
use crate::fileio;

// ── EditorSession ─────────────────────────────────────────────────────────────

/// Which file the editor is working on, and how big it was last time we
/// touched the disk.
///
/// The fields are private so that `path` and `size` can only change together,
/// through `record` and `reset`.  `size` always refers to the last successful
/// New/Open/Save; it is not live-updated while the user types.
#[derive(Debug)]
pub(crate) struct EditorSession {
    /// Absolute path to the file on disk, or `None` for an untitled buffer.
    path: Option<PathBuf>,
    /// Byte size transferred by the last successful open or save.
    size: u64,
}

impl EditorSession {
    /// A fresh, untitled session: no path, zero bytes.
    pub(crate) fn untitled() -> Self {
        Self {
            path: None,
            size: 0,
        }
    }

    /// The current file path, or `None` when untitled.
    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Byte size recorded by the last successful open or save.
    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    /// The bare filename component, or `"Untitled"` if no path is set.
    pub(crate) fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_owned())
    }

    /// Return to the untitled state.  Called only after the widget was
    /// successfully cleared.
    pub(crate) fn reset(&mut self) {
        self.path = None;
        self.size = 0;
    }

    /// Record a completed transfer of `size` bytes for `path`.  Called only
    /// after both the disk and the widget side of an operation succeeded.
    pub(crate) fn record(&mut self, path: PathBuf, size: u64) {
        self.path = Some(path);
        self.size = size;
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Top-level application state.
///
/// Passed by mutable reference through WndProc handlers so that all
/// application logic sees a single, explicit state root rather than a
/// collection of disconnected globals.  The text widget is likewise passed
/// in, never reached for, which keeps these workflows testable with a fake.
pub(crate) struct App {
    /// State of the current editing session.
    session: EditorSession,
}

impl App {
    /// Create a fresh `App` with an untitled, empty session.
    pub(crate) fn new() -> Self {
        Self {
            session: EditorSession::untitled(),
        }
    }

    /// Read access to the session, for title and status-bar rendering.
    pub(crate) fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Compute the title string for the main window.
    ///
    /// | State    | Title              |
    /// |----------|--------------------|
    /// | Untitled | `"Jotter"`         |
    /// | Path set | `"name — Jotter"`  |
    pub(crate) fn window_title(&self) -> String {
        match self.session.path() {
            None => "Jotter".to_owned(),
            Some(_) => {
                format!("{} \u{2014} Jotter", self.session.display_name()) // — is U+2014 EM DASH
            }
        }
    }

    // ── Document operations ───────────────────────────────────────────────────

    /// File ▸ New: empty the widget, then return to the untitled session.
    ///
    /// If the widget refuses to clear, the session keeps its current file.
    pub(crate) fn new_document(&mut self, widget: &mut dyn TextWidget) -> Result<()> {
        widget.clear()?;
        self.session.reset();
        Ok(())
    }

    /// File ▸ Open: read `path` from disk, install the bytes in the widget,
    /// and record the new session.
    ///
    /// Ordering matters: the session is recorded last, so a read failure or a
    /// widget rejection leaves both the session and the widget untouched
    /// (nothing has been handed to the widget before the read completed).
    pub(crate) fn open_document(&mut self, widget: &mut dyn TextWidget, path: &Path) -> Result<()> {
        let bytes = fileio::read_file(path)?;
        widget.set_text(&bytes)?;
        self.session.record(path.to_path_buf(), bytes.len() as u64);
        Ok(())
    }

    /// File ▸ Save: extract the widget content and write it to `path`,
    /// recording the new session on success.
    ///
    /// A write failure leaves the session untouched and the widget content
    /// intact; the user's text is still on screen to try again elsewhere.
    pub(crate) fn save_document(&mut self, widget: &mut dyn TextWidget, path: &Path) -> Result<()> {
        let bytes = widget.get_text()?;
        fileio::write_file(path, &bytes)?;
        self.session.record(path.to_path_buf(), bytes.len() as u64);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JotterError;

    /// In-memory stand-in for the hosted edit control, with switchable
    /// failure injection for both directions.
    struct FakeWidget {
        content: Vec<u8>,
        fail_set: bool,
        fail_get: bool,
    }

    impl FakeWidget {
        fn empty() -> Self {
            Self {
                content: Vec::new(),
                fail_set: false,
                fail_get: false,
            }
        }

        fn with_content(bytes: &[u8]) -> Self {
            Self {
                content: bytes.to_vec(),
                ..Self::empty()
            }
        }
    }

    impl TextWidget for FakeWidget {
        fn get_text(&self) -> Result<Vec<u8>> {
            if self.fail_get {
                return Err(JotterError::Widget {
                    operation: "get_text",
                    code: 0,
                });
            }
            Ok(self.content.clone())
        }

        fn set_text(&mut self, bytes: &[u8]) -> Result<()> {
            if self.fail_set {
                return Err(JotterError::Widget {
                    operation: "set_text",
                    code: 0,
                });
            }
            self.content = bytes.to_vec();
            Ok(())
        }
    }

    #[test]
    fn starts_untitled_and_empty() {
        let app = App::new();
        assert_eq!(app.session().path(), None);
        assert_eq!(app.session().size(), 0);
        assert_eq!(app.session().display_name(), "Untitled");
    }

    #[test]
    fn new_document_clears_widget_and_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"draft text");
        app.save_document(&mut widget, &path).unwrap();
        assert!(app.session().path().is_some());

        app.new_document(&mut widget).unwrap();
        assert_eq!(app.session().path(), None);
        assert_eq!(app.session().size(), 0);
        assert!(widget.content.is_empty());
    }

    #[test]
    fn new_document_failure_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"draft text");
        app.save_document(&mut widget, &path).unwrap();

        widget.fail_set = true;
        assert!(app.new_document(&mut widget).is_err());
        assert_eq!(app.session().path(), Some(path.as_path()));
        assert_eq!(app.session().size(), 10);
        assert_eq!(widget.content, b"draft text");
    }

    #[test]
    fn open_records_path_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fileio::write_file(&path, b"twelve bytes").unwrap();

        let mut app = App::new();
        let mut widget = FakeWidget::empty();
        app.open_document(&mut widget, &path).unwrap();

        assert_eq!(app.session().path(), Some(path.as_path()));
        assert_eq!(app.session().size(), 12);
        assert_eq!(widget.content, b"twelve bytes");
    }

    #[test]
    fn open_missing_file_leaves_everything_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"on screen");

        match app.open_document(&mut widget, &path) {
            Err(JotterError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io(NotFound), got {other:?}"),
        }
        assert_eq!(app.session().path(), None);
        assert_eq!(app.session().size(), 0);
        assert_eq!(widget.content, b"on screen");
    }

    #[test]
    fn open_widget_rejection_leaves_session_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fileio::write_file(&path, b"new content").unwrap();

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"old content");
        widget.fail_set = true;

        assert!(app.open_document(&mut widget, &path).is_err());
        assert_eq!(app.session().path(), None);
        assert_eq!(app.session().size(), 0);
        assert_eq!(widget.content, b"old content");
    }

    #[test]
    fn save_records_path_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"persist me");
        app.save_document(&mut widget, &path).unwrap();

        assert_eq!(app.session().path(), Some(path.as_path()));
        assert_eq!(app.session().size(), 10);
        assert_eq!(fileio::read_file(&path).unwrap(), b"persist me");
    }

    #[test]
    fn save_failure_preserves_session_and_widget() {
        let dir = tempfile::tempdir().unwrap();

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"still here");

        // A directory is not a writable file path.
        assert!(app.save_document(&mut widget, dir.path()).is_err());
        assert_eq!(app.session().path(), None);
        assert_eq!(app.session().size(), 0);
        assert_eq!(widget.content, b"still here");
    }

    #[test]
    fn save_widget_query_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.txt");

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"unreachable");
        widget.fail_get = true;

        assert!(app.save_document(&mut widget, &path).is_err());
        assert!(!path.exists());
        assert_eq!(app.session().path(), None);
    }

    #[test]
    fn title_untitled() {
        assert_eq!(App::new().window_title(), "Jotter");
    }

    #[test]
    fn title_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.txt");

        let mut app = App::new();
        let mut widget = FakeWidget::with_content(b"x");
        app.save_document(&mut widget, &path).unwrap();
        assert_eq!(app.window_title(), "todo.txt \u{2014} Jotter");
    }
}
