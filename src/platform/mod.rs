// ── Platform abstraction layer ────────────────────────────────────────────────
//
// Everything that talks to the OS lives below this module.  No `unsafe` here;
// all Win32 FFI is confined to the `win32` sub-module and never leaks outward.

pub mod win32;
