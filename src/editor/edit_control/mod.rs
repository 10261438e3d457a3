// ── EDIT control hosting ──────────────────────────────────────────────────────
//
// This is one of exactly two modules where `unsafe` is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment.
//
// `EditView` wraps a multiline EDIT child window.  EDIT is a system window
// class, so there is nothing to load or register; the child `HWND` is
// destroyed automatically by Windows when the parent is destroyed, and the
// struct needs no cleanup of its own.
//
// Text representation: the W-series APIs store UTF-16.  Content bytes cross
// the `TextWidget` boundary as UTF-8 and are converted (lossily for invalid
// sequences) at this seam.  Disk bytes are never transformed; see `fileio`.

#![allow(unsafe_code)]

pub mod messages;

use messages::{
    EM_SETLIMITTEXT, ES_AUTOHSCROLL, ES_AUTOVSCROLL, ES_LEFT, ES_MULTILINE, WM_COPY, WM_CUT,
    WM_PASTE, WM_SETFONT,
};

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{GetLastError, SetLastError, HINSTANCE, HWND, LPARAM, WIN32_ERROR, WPARAM},
        Graphics::Gdi::{GetStockObject, DEFAULT_GUI_FONT},
        UI::WindowsAndMessaging::{
            CreateWindowExW, GetWindowTextLengthW, GetWindowTextW, SendMessageW, SetWindowPos,
            SetWindowTextW, HMENU, SWP_NOZORDER, WINDOW_STYLE, WS_CHILD, WS_EX_CLIENTEDGE,
            WS_HSCROLL, WS_VISIBLE, WS_VSCROLL,
        },
    },
};

use crate::{
    editor::TextWidget,
    error::{JotterError, Result},
};

// ── EditView ──────────────────────────────────────────────────────────────────

/// A hosted multiline EDIT child window.
pub(crate) struct EditView {
    hwnd: HWND,
}

impl EditView {
    /// Create the EDIT child inside `parent`, filling no space yet.
    ///
    /// The control is created at zero size; the parent's WM_SIZE handler
    /// calls `resize` to lay it out over the client area.
    pub(crate) fn create(parent: HWND, hinstance: HINSTANCE) -> Result<Self> {
        let style = WS_CHILD
            | WS_VISIBLE
            | WS_VSCROLL
            | WS_HSCROLL
            | WINDOW_STYLE(ES_LEFT | ES_MULTILINE | ES_AUTOVSCROLL | ES_AUTOHSCROLL);

        // SAFETY: "EDIT" is a built-in window class registered by the system
        // for every process.  parent and hinstance are valid handles from the
        // caller's WM_CREATE.
        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_CLIENTEDGE,
                w!("EDIT"),
                PCWSTR::null(),
                style,
                0,
                0,
                0,
                0,
                parent,
                HMENU::default(),
                hinstance,
                None,
            )
        }
        .map_err(|e| JotterError::win32("CreateWindowExW (EDIT)", &e))?;

        // SAFETY: hwnd is the valid EDIT control created above.  The stock
        // DEFAULT_GUI_FONT handle is owned by the system and never freed, so
        // the control may keep it for its whole lifetime.  LPARAM(1) asks for
        // a redraw; both SendMessageW results are intentionally unused.
        unsafe {
            let font = GetStockObject(DEFAULT_GUI_FONT);
            let _ = SendMessageW(hwnd, WM_SETFONT, WPARAM(font.0 as usize), LPARAM(1));
            // The default EDIT limit is 32 KiB of text; 0 lifts it to the
            // control maximum.
            let _ = SendMessageW(hwnd, EM_SETLIMITTEXT, WPARAM(0), LPARAM(0));
        }

        Ok(Self { hwnd })
    }

    /// Move and size the control within the parent's client area.
    pub(crate) fn resize(&self, x: i32, y: i32, width: i32, height: i32) {
        // SAFETY: hwnd is a valid child window.  SWP_NOZORDER makes the
        // insert-after handle irrelevant; a failed move only leaves stale
        // layout, so the Result is intentionally unused.
        unsafe {
            let _ = SetWindowPos(self.hwnd, HWND::default(), x, y, width, height, SWP_NOZORDER);
        }
    }

    // ── Clipboard ─────────────────────────────────────────────────────────────

    /// Cut the current selection to the clipboard.
    pub(crate) fn cut(&self) {
        // SAFETY: hwnd valid; WM_CUT is processed natively by the EDIT control.
        unsafe {
            let _ = SendMessageW(self.hwnd, WM_CUT, WPARAM(0), LPARAM(0));
        }
    }

    /// Copy the current selection to the clipboard.
    pub(crate) fn copy_to_clipboard(&self) {
        // SAFETY: hwnd valid; WM_COPY is processed natively by the EDIT control.
        unsafe {
            let _ = SendMessageW(self.hwnd, WM_COPY, WPARAM(0), LPARAM(0));
        }
    }

    /// Paste from the clipboard at the caret position.
    pub(crate) fn paste(&self) {
        // SAFETY: hwnd valid; WM_PASTE is processed natively by the EDIT control.
        unsafe {
            let _ = SendMessageW(self.hwnd, WM_PASTE, WPARAM(0), LPARAM(0));
        }
    }
}

// ── TextWidget ────────────────────────────────────────────────────────────────

impl TextWidget for EditView {
    fn get_text(&self) -> Result<Vec<u8>> {
        // GetWindowTextLengthW returns 0 both for an empty control and for
        // failure; the documented way to tell them apart is to clear the
        // last-error state first and re-check it on a zero result.
        // SAFETY: SetLastError only writes thread-local state.
        unsafe { SetLastError(WIN32_ERROR(0)) };

        // SAFETY: hwnd is a valid EDIT control on this thread.
        let len = unsafe { GetWindowTextLengthW(self.hwnd) };
        if len == 0 {
            // SAFETY: reads the thread-local state set by the call above; no
            // other Win32 call has run in between.
            let code = unsafe { GetLastError().0 };
            if code != 0 {
                return Err(JotterError::Widget {
                    operation: "GetWindowTextLengthW",
                    code,
                });
            }
            return Ok(Vec::new());
        }

        let mut buf = vec![0u16; len as usize + 1];
        // SAFETY: buf holds len + 1 units; GetWindowTextW writes at most
        // buf.len() of them including the null terminator.
        let copied = unsafe { GetWindowTextW(self.hwnd, &mut buf) };
        buf.truncate(copied as usize);
        Ok(String::from_utf16_lossy(&buf).into_bytes())
    }

    fn set_text(&mut self, bytes: &[u8]) -> Result<()> {
        let text = String::from_utf8_lossy(bytes);
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();

        // SAFETY: wide is a valid null-terminated UTF-16 string that outlives
        // the call; hwnd is a valid EDIT control on this thread.
        unsafe { SetWindowTextW(self.hwnd, PCWSTR(wide.as_ptr())) }.map_err(|e| {
            JotterError::Widget {
                operation: "SetWindowTextW",
                code: e.code().0 as u32,
            }
        })
    }
}
