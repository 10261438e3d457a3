// ── Alert dialogs ─────────────────────────────────────────────────────────────
//
// Modal MessageBoxW wrappers.  Every user-facing error in the app funnels
// through `show` with an owner window; `fatal` is the ownerless variant for
// startup failures that happen before any window exists.
//
// These are safe functions: all UTF-16 conversion happens internally and no
// handle escapes.

#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{
            MessageBoxW, MB_ICONERROR, MB_ICONINFORMATION, MB_ICONWARNING, MB_OK,
        },
    },
};

/// How prominently the alert presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    /// Informational notice (plain icon, no sound on most systems).
    Info,
    /// Something went wrong but the app continues with unchanged state.
    Warning,
    /// An operation failed outright.
    Error,
}

/// Show a modal alert owned by `hwnd`.
///
/// Blocks until dismissed.  The owner window is disabled for the duration,
/// which also means no other command can be dispatched while the alert is up.
pub(crate) fn show(hwnd: HWND, title: &str, message: &str, severity: Severity) {
    let icon = match severity {
        Severity::Info => MB_ICONINFORMATION,
        Severity::Warning => MB_ICONWARNING,
        Severity::Error => MB_ICONERROR,
    };

    let msg_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();
    let title_wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();

    // SAFETY: msg_wide and title_wide are valid null-terminated UTF-16 strings
    // that remain allocated for the duration of the MessageBoxW call.  hwnd is
    // a valid owner window provided by the caller.  Return value (button
    // pressed) is intentionally unused for a single-button dialog.
    unsafe {
        let _ = MessageBoxW(
            hwnd,
            PCWSTR(msg_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | icon,
        );
    }
}

/// Show a modal error dialog with no owner window.
///
/// Safe to call from any context; used by `main()` when startup fails before
/// the main window exists.
pub(crate) fn fatal(message: &str) {
    let msg_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();
    let title_wide: Vec<u16> = "Jotter — Fatal Error"
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();

    // SAFETY: msg_wide and title_wide are valid null-terminated UTF-16 strings
    // that remain allocated for the duration of the MessageBoxW call.
    // HWND::default() (null) means the dialog has no owner window.
    unsafe {
        let _ = MessageBoxW(
            HWND::default(),
            PCWSTR(msg_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}
