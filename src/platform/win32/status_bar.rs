// ── Status bar hosting ────────────────────────────────────────────────────────
//
// Wraps a msctls_statusbar32 child window with two parts: the current file
// path on the left, the recorded byte size on the right.  The part text comes
// from the pure formatters in `ui::status`; this module only moves strings
// into the control.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, RECT, WPARAM},
        UI::Controls::{InitCommonControlsEx, ICC_BAR_CLASSES, INITCOMMONCONTROLSEX},
        UI::WindowsAndMessaging::{
            CreateWindowExW, GetWindowRect, SendMessageW, HMENU, WINDOW_EX_STYLE, WINDOW_STYLE,
            WM_SIZE, WS_CHILD, WS_VISIBLE,
        },
    },
};

use crate::app::EditorSession;
use crate::error::{JotterError, Result};
use crate::platform::win32::dpi;
use crate::ui;

// ── Message constants ─────────────────────────────────────────────────────────
//
// Source of truth: commctrl.h.  SB_* are WM_USER-relative.

/// Set the number of parts and their right edges.  WPARAM=count; LPARAM=edges.
const SB_SETPARTS: u32 = 0x0404;
/// Set the text of one part (wide).  WPARAM=part index; LPARAM=string.
const SB_SETTEXTW: u32 = 0x040B;
/// Window style: show a sizing grip in the bottom-right corner.
const SBARS_SIZEGRIP: u32 = 0x0100;

/// Width of the byte-size part at 96 DPI, in pixels.
const SIZE_PART_WIDTH: i32 = 140;

// ── Common-controls registration ──────────────────────────────────────────────

/// Register the common-control classes the status bar needs.
///
/// MUST be called once before the first `StatusBar::create`.
pub(crate) fn init_common_controls() -> Result<()> {
    let icce = INITCOMMONCONTROLSEX {
        dwSize: std::mem::size_of::<INITCOMMONCONTROLSEX>() as u32,
        dwICC: ICC_BAR_CLASSES,
    };

    // SAFETY: icce is fully initialised and only read by the call.
    let ok = unsafe { InitCommonControlsEx(&icce) };
    if !ok.as_bool() {
        // SAFETY: GetLastError reads thread-local state set by the just-failed
        // call; no Win32 calls between them.
        let code = unsafe { GetLastError().0 };
        return Err(JotterError::Win32 {
            function: "InitCommonControlsEx",
            code,
        });
    }

    Ok(())
}

// ── StatusBar ─────────────────────────────────────────────────────────────────

/// A hosted status-bar child window.
///
/// The child `HWND` is destroyed automatically by Windows when the parent is
/// destroyed; no explicit cleanup is needed.
pub(crate) struct StatusBar {
    hwnd: HWND,
}

impl StatusBar {
    /// Create the status bar inside `parent`.
    ///
    /// The bar comes back with its two parts already set, so part text can
    /// land straight away.  The control positions itself along the bottom
    /// edge; only `layout` needs to run on parent resize to keep it there
    /// and to recompute the part boundaries.
    pub(crate) fn create(parent: HWND, hinstance: HINSTANCE) -> Result<Self> {
        // SAFETY: the msctls_statusbar32 class was registered by
        // init_common_controls; parent and hinstance are valid handles from
        // the caller's WM_CREATE.
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                w!("msctls_statusbar32"),
                PCWSTR::null(),
                WS_CHILD | WS_VISIBLE | WINDOW_STYLE(SBARS_SIZEGRIP),
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
        .map_err(|e| JotterError::win32("CreateWindowExW (status bar)", &e))?;

        let bar = Self { hwnd };

        // Split the bar now rather than waiting for the parent's first
        // WM_SIZE: the startup render runs during WM_CREATE, and SB_SETTEXTW
        // to a part that does not exist yet is silently dropped.  The edges
        // are provisional; `layout` recomputes them from the real client
        // width moments later.
        bar.set_parts([0, -1]);

        Ok(bar)
    }

    /// Reposition along the parent's bottom edge and recompute part widths.
    ///
    /// `client_width` is the parent's new client width; `dpi` scales the
    /// fixed-width size part.
    pub(crate) fn layout(&self, client_width: i32, dpi: u32) {
        // SAFETY: hwnd valid; a status bar handles WM_SIZE by snapping itself
        // to the parent's bottom edge regardless of the zeroed parameters.
        unsafe {
            let _ = SendMessageW(self.hwnd, WM_SIZE, WPARAM(0), LPARAM(0));
        }

        // Right edges of the two parts: the path part flexes, the size part
        // keeps a fixed width.  -1 extends the last part to the window edge.
        self.set_parts([
            (client_width - dpi::scale(SIZE_PART_WIDTH, dpi)).max(0),
            -1,
        ]);
    }

    fn set_parts(&self, edges: [i32; 2]) {
        // SAFETY: hwnd valid; edges outlives the call and WPARAM carries its
        // length, so the control reads exactly two i32s.  Part text survives
        // an edge change as long as the part count stays the same.
        unsafe {
            let _ = SendMessageW(
                self.hwnd,
                SB_SETPARTS,
                WPARAM(edges.len()),
                LPARAM(edges.as_ptr() as isize),
            );
        }
    }

    /// Measured height of the control, for the editor layout above it.
    pub(crate) fn height(&self) -> i32 {
        let mut rect = RECT::default();
        // SAFETY: hwnd valid; rect is a valid out-pointer for the call.
        match unsafe { GetWindowRect(self.hwnd, &mut rect) } {
            Ok(()) => rect.bottom - rect.top,
            Err(_) => 0,
        }
    }

    /// Write both part texts from a session snapshot.
    pub(crate) fn render(&self, session: &EditorSession) {
        self.set_part_text(0, &ui::status::path_label(session));
        self.set_part_text(1, &ui::status::size_label(session));
    }

    fn set_part_text(&self, part: usize, text: &str) {
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
        // SAFETY: hwnd valid; wide is a null-terminated UTF-16 string that
        // outlives the call.  The control copies the text before returning.
        unsafe {
            let _ = SendMessageW(
                self.hwnd,
                SB_SETTEXTW,
                WPARAM(part),
                LPARAM(wide.as_ptr() as isize),
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// These create real windows, so they only run on Windows targets.  No message
// pump is needed: SendMessageW to a same-thread window runs synchronously.

#[cfg(test)]
mod tests {
    use super::*;

    use windows::Win32::Foundation::LRESULT;
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::UI::WindowsAndMessaging::{
        DefWindowProcW, DestroyWindow, RegisterClassExW, CW_USEDEFAULT, WNDCLASSEXW,
        WS_OVERLAPPEDWINDOW,
    };

    /// Get the number of parts.  WPARAM and LPARAM are unused.
    const SB_GETPARTS: u32 = 0x0406;
    /// Get the text length of one part (wide).  WPARAM=part index.
    const SB_GETTEXTLENGTHW: u32 = 0x040C;

    unsafe extern "system" fn harness_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        DefWindowProcW(hwnd, msg, wparam, lparam)
    }

    #[test]
    fn both_parts_exist_before_the_first_layout() {
        // SAFETY: every handle below is created in this test, used on this
        // thread only, and the parent (with its child bar) is destroyed at
        // the end.
        unsafe {
            let hmodule = GetModuleHandleW(None).unwrap();
            let hinstance = HINSTANCE(hmodule.0);

            let class = w!("JotterStatusBarHarness");
            let wc = WNDCLASSEXW {
                cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
                lpfnWndProc: Some(harness_proc),
                hInstance: hinstance,
                lpszClassName: class,
                ..Default::default()
            };
            assert_ne!(RegisterClassExW(&wc), 0);

            // Hidden parent; never shown, never pumped.
            let parent = CreateWindowExW(
                WINDOW_EX_STYLE(0),
                class,
                PCWSTR::null(),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                400,
                300,
                HWND::default(),
                HMENU::default(),
                hinstance,
                None,
            )
            .unwrap();

            init_common_controls().unwrap();
            let bar = StatusBar::create(parent, hinstance).unwrap();

            // The split must exist from birth: the first render runs during
            // the parent's WM_CREATE, before any WM_SIZE has laid the bar
            // out, and text sent to a missing part is silently dropped.
            let parts = SendMessageW(bar.hwnd, SB_GETPARTS, WPARAM(0), LPARAM(0));
            assert_eq!(parts.0, 2);

            let session = EditorSession::untitled();
            bar.render(&session);

            let expected = ui::status::size_label(&session).encode_utf16().count() as isize;
            let len = SendMessageW(bar.hwnd, SB_GETTEXTLENGTHW, WPARAM(1), LPARAM(0));
            assert_eq!(len.0 & 0xFFFF, expected, "size part lost its text");

            DestroyWindow(parent).unwrap();
        }
    }
}
