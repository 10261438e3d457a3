// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32`       – Win32 / WinAPI FFI
//   • `editor::edit_control`  – multiline EDIT child-control hosting
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

// Release builds run as a GUI application (no console window).
// Debug builds keep the console so that eprintln! diagnostics stay visible.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// The portable core (app, command, fileio, ui) compiles on every platform so
// its unit tests can run anywhere; without the Win32 layer those modules have
// no callers outside of tests.
#![cfg_attr(not(windows), allow(dead_code))]

mod app;
mod command;
mod editor;
mod error;
mod fileio;
#[cfg(windows)]
mod platform;
mod ui;

#[cfg(windows)]
fn main() {
    if let Err(e) = platform::win32::window::run() {
        // Startup failed before or during the message loop.
        // A modal dialog is the only output path a GUI app can rely on.
        platform::win32::alerts::fatal(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
fn main() {
    eprintln!("jotter only has a Win32 front end; this platform is unsupported.");
    std::process::exit(1);
}
