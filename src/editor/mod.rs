// ── Editor component abstraction ──────────────────────────────────────────────
//
// The application logic in `app` talks to the text control only through the
// `TextWidget` trait.  The production implementation is the hosted Win32 EDIT
// control in `edit_control::`; tests substitute an in-memory fake.  Callers
// never touch Win32 handles directly.

#[cfg(windows)]
pub mod edit_control;

use crate::error::Result;

/// The minimal contract the application needs from the text control.
///
/// Content crosses this boundary as raw bytes; the implementation owns the
/// conversion to whatever representation the control stores internally.
pub(crate) trait TextWidget {
    /// The full editor content.
    fn get_text(&self) -> Result<Vec<u8>>;

    /// Replace the full editor content.
    fn set_text(&mut self, bytes: &[u8]) -> Result<()>;

    /// Empty the editor.
    fn clear(&mut self) -> Result<()> {
        self.set_text(&[])
    }
}
