// ── EDIT control message and style constants ──────────────────────────────────
//
// Source of truth: winuser.h.  Only the subset this crate sends is listed.
// Style bits are combined into the WINDOW_STYLE passed to CreateWindowExW;
// messages go through SendMessageW on the EDIT child window.

// ── Window styles ─────────────────────────────────────────────────────────────

/// Left-aligned text.
pub(super) const ES_LEFT: u32 = 0x0000;
/// Multiline control (Enter inserts a line break).
pub(super) const ES_MULTILINE: u32 = 0x0004;
/// Scroll vertically when the caret moves past the last visible line.
pub(super) const ES_AUTOVSCROLL: u32 = 0x0040;
/// Scroll horizontally when the caret moves past the right edge.
pub(super) const ES_AUTOHSCROLL: u32 = 0x0080;

// ── Messages ──────────────────────────────────────────────────────────────────

/// Set the font used for drawing.  WPARAM=HFONT; LPARAM=1 to redraw.
pub(super) const WM_SETFONT: u32 = 0x0030;
/// Set the text limit.  WPARAM=0 lifts the default 32 KiB cap to the maximum.
pub(super) const EM_SETLIMITTEXT: u32 = 0x00C5;

// Standard Win32 clipboard messages; the EDIT control processes these
// natively against its current selection.
/// Cut selection to clipboard.
pub(super) const WM_CUT: u32 = 0x0300;
/// Copy selection to clipboard.
pub(super) const WM_COPY: u32 = 0x0301;
/// Paste from clipboard.
pub(super) const WM_PASTE: u32 = 0x0302;
