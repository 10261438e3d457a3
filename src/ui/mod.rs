// ── UI formatting ─────────────────────────────────────────────────────────────
//
// Pure Rust formatting for text shown in window chrome.  No Win32 calls here;
// the platform layer feeds these strings to the actual controls.

pub mod status;
