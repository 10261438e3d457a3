// ── Status bar labels ─────────────────────────────────────────────────────────
//
// Pure Rust text for the two status-bar parts.  The platform layer calls
// these with a snapshot of the session after every successful file operation;
// nothing here is live-updated while the user types.

use crate::app::EditorSession;

/// Label for the left status-bar part: the full file path, or `"Untitled"`.
pub(crate) fn path_label(session: &EditorSession) -> String {
    match session.path() {
        Some(p) => p.display().to_string(),
        None => "Untitled".to_owned(),
    }
}

/// Label for the right status-bar part: the recorded byte size.
pub(crate) fn size_label(session: &EditorSession) -> String {
    match session.size() {
        1 => "1 byte".to_owned(),
        n => format!("{n} bytes"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn untitled_session_labels() {
        let session = EditorSession::untitled();
        assert_eq!(path_label(&session), "Untitled");
        assert_eq!(size_label(&session), "0 bytes");
    }

    #[test]
    fn named_session_shows_full_path() {
        let mut session = EditorSession::untitled();
        session.record(PathBuf::from("/home/sam/notes.txt"), 42);
        assert_eq!(path_label(&session), "/home/sam/notes.txt");
        assert_eq!(size_label(&session), "42 bytes");
    }

    #[test]
    fn size_label_singular() {
        let mut session = EditorSession::untitled();
        session.record(PathBuf::from("one.txt"), 1);
        assert_eq!(size_label(&session), "1 byte");
    }

    #[test]
    fn reset_returns_to_untitled_labels() {
        let mut session = EditorSession::untitled();
        session.record(PathBuf::from("gone.txt"), 9);
        session.reset();
        assert_eq!(path_label(&session), "Untitled");
        assert_eq!(size_label(&session), "0 bytes");
    }
}
