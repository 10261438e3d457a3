#![allow(unsafe_code)]

use windows::Win32::{
    Foundation::HWND,
    UI::HiDpi::{
        GetDpiForSystem, GetDpiForWindow, SetProcessDpiAwarenessContext,
        DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
    },
};

/// Reference DPI at which all layout constants in this crate are written.
const BASE_DPI: u32 = 96;

/// Scale a 96-DPI pixel value to `dpi`, rounding to the nearest pixel
/// (the same rounding MulDiv applies).
pub(crate) fn scale(px: i32, dpi: u32) -> i32 {
    (px * dpi as i32 + BASE_DPI as i32 / 2) / BASE_DPI as i32
}

/// Declare the process Per-Monitor v2 DPI aware.
/// MUST run before the first window is created on this thread.
pub(crate) fn init() {
    // SAFETY: one call at process start, ahead of all window creation.
    // The Result is intentionally ignored; failure leaves the process at
    // system-DPI awareness, which still renders correctly.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}

/// DPI of the monitor currently hosting `hwnd`.
pub(crate) fn get_for_window(hwnd: HWND) -> u32 {
    // SAFETY: hwnd is a valid window handle provided by the caller.
    non_zero_or_base(unsafe { GetDpiForWindow(hwnd) })
}

/// System DPI, for sizing done before any window exists.
pub(crate) fn get_system_dpi() -> u32 {
    // SAFETY: GetDpiForSystem takes no parameters and always succeeds on Win10+.
    non_zero_or_base(unsafe { GetDpiForSystem() })
}

/// The DPI queries return 0 for an invalid window; treat that as 96.
fn non_zero_or_base(dpi: u32) -> u32 {
    if dpi == 0 {
        BASE_DPI
    } else {
        dpi
    }
}
