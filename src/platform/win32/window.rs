// ── Main window ───────────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register the main window class.
//   • Create the top-level window and attach the menu bar.
//   • Create and own the child controls (edit view, status bar) via
//     `WindowState` attached to the window through GWLP_USERDATA.
//   • Run the Win32 message loop.
//   • Dispatch WM_COMMAND through the `Command` enum to the `App` workflows.

#![allow(unsafe_code)]

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM},
        Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            AppendMenuW, CreateMenu, CreateWindowExW, DefWindowProcW, DestroyWindow,
            DispatchMessageW, GetMessageW, GetWindowLongPtrW, LoadCursorW, LoadIconW,
            PostQuitMessage, RegisterClassExW, SetMenu, SetWindowLongPtrW, SetWindowPos,
            SetWindowTextW, ShowWindow, TranslateMessage, UpdateWindow, CS_HREDRAW, CS_VREDRAW,
            CW_USEDEFAULT, GWLP_USERDATA, HMENU, IDC_ARROW, IDI_APPLICATION, MF_POPUP,
            MF_SEPARATOR, MF_STRING, MSG, SWP_NOACTIVATE, SWP_NOZORDER, SW_SHOW, WINDOW_EX_STYLE,
            WM_CLOSE, WM_COMMAND, WM_CREATE, WM_DESTROY, WM_DPICHANGED, WM_SIZE, WNDCLASSEXW,
            WS_OVERLAPPEDWINDOW,
        },
    },
};

use crate::{
    app::App,
    command::Command,
    editor::edit_control::EditView,
    error::{JotterError, Result},
    platform::win32::{
        alerts::{self, Severity},
        dialogs, dpi,
        status_bar::{self, StatusBar},
    },
};

// ── Window identity ───────────────────────────────────────────────────────────

/// Atom name used to register (and later find) the main window class.
const CLASS_NAME: PCWSTR = w!("JotterMainWindow");

/// Title bar text before a file is loaded.
const APP_TITLE: PCWSTR = w!("Jotter");

/// Default client width in pixels at 96 DPI; scaled at creation.
const DEFAULT_WIDTH: i32 = 960;

/// Default client height in pixels at 96 DPI; scaled at creation.
const DEFAULT_HEIGHT: i32 = 640;

// ── Public API ────────────────────────────────────────────────────────────────

/// Register the main window class, create the window, and drive the message
/// loop until the user closes the application.
///
/// Records a startup timestamp and logs elapsed time (debug builds only) once
/// the window is first shown on screen.
pub(crate) fn run() -> Result<()> {
    // Startup timing, debug builds only.
    #[cfg(debug_assertions)]
    let t0 = std::time::Instant::now();

    dpi::init();
    status_bar::init_common_controls()?;

    // SAFETY: with no module name, GetModuleHandleW yields the handle of the
    // running executable itself, which stays valid for the whole process.
    let hmodule = unsafe { GetModuleHandleW(None) }.map_err(JotterError::from)?;

    // An executable's HINSTANCE and HMODULE are the same underlying value.
    let hinstance = HINSTANCE(hmodule.0);

    register_class(hinstance)?;
    let hwnd = create_window(hinstance)?;

    // SAFETY: hwnd was just returned by CreateWindowExW and is valid.
    // ShowWindow returns the previous visibility state; UpdateWindow returns
    // a success BOOL; both are intentionally ignored here.
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);
    }

    // Startup milestone: window is now visible on screen.
    #[cfg(debug_assertions)]
    eprintln!(
        "[jotter] window visible in {:.1} ms",
        t0.elapsed().as_secs_f64() * 1000.0
    );

    message_loop()
}

// ── Window state ──────────────────────────────────────────────────────────────

/// Everything the main window owns: application state plus the two child
/// controls.
///
/// Created in WM_CREATE, boxed, and attached to the window via GWLP_USERDATA;
/// reclaimed and dropped in WM_DESTROY.  All access happens on the UI thread.
struct WindowState {
    app: App,
    edit: EditView,
    status: StatusBar,
}

impl WindowState {
    /// Create the child controls and fresh application state for `hwnd`.
    fn create(hwnd: HWND) -> Result<Self> {
        // SAFETY: same module-handle reasoning as in run().
        let hmodule = unsafe { GetModuleHandleW(None) }.map_err(JotterError::from)?;
        let hinstance = HINSTANCE(hmodule.0);

        let edit = EditView::create(hwnd, hinstance)?;
        let status = StatusBar::create(hwnd, hinstance)?;

        Ok(Self {
            app: App::new(),
            edit,
            status,
        })
    }
}

/// Borrow the state attached to `hwnd`, if WM_CREATE has installed it.
///
/// The returned borrow is unguarded.  Callers MUST let it go out of scope
/// before any call that pumps messages (common dialogs, message boxes): a
/// re-entered `wnd_proc` taking a second borrow would alias the first.
fn window_state(hwnd: HWND) -> Option<&'static mut WindowState> {
    // SAFETY: GWLP_USERDATA on this window is only ever null or the pointer
    // leaked from Box::into_raw in WM_CREATE, which stays live until
    // WM_DESTROY reclaims it.
    let ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *mut WindowState;
    // SAFETY: ptr is null or valid per the invariant above; all access is
    // single-threaded through the message loop.
    unsafe { ptr.as_mut() }
}

// ── Window class registration ─────────────────────────────────────────────────

fn register_class(hinstance: HINSTANCE) -> Result<()> {
    // SAFETY: IDI_APPLICATION and IDC_ARROW name built-in system resources
    // present on every Windows version; loading them cannot dangle.
    let icon = unsafe { LoadIconW(None, IDI_APPLICATION) }.map_err(JotterError::from)?;

    // SAFETY: as above; the arrow cursor is a built-in system resource.
    let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.map_err(JotterError::from)?;

    // SAFETY: stock objects live for the whole session and WHITE_BRUSH is a
    // brush, so wrapping the returned HGDIOBJ as HBRUSH is valid.
    let bg_brush = unsafe { HBRUSH(GetStockObject(WHITE_BRUSH).0) };

    let wndclass = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        // Repaint on either axis of a resize.
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wnd_proc),
        cbClsExtra: 0,
        cbWndExtra: 0,
        hInstance: hinstance,
        hIcon: icon,
        hCursor: cursor,
        hbrBackground: bg_brush,
        lpszMenuName: PCWSTR::null(),
        lpszClassName: CLASS_NAME,
        hIconSm: icon,
    };

    // SAFETY: every wndclass field above is set, and CLASS_NAME points at a
    // static null-terminated UTF-16 literal.
    let atom = unsafe { RegisterClassExW(&wndclass) };
    if atom == 0 {
        return Err(last_error("RegisterClassExW"));
    }

    Ok(())
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_window(hinstance: HINSTANCE) -> Result<HWND> {
    // Scale the default size by the system DPI; per-monitor adjustments
    // arrive later via WM_DPICHANGED.
    let dpi = dpi::get_system_dpi();
    let width = dpi::scale(DEFAULT_WIDTH, dpi);
    let height = dpi::scale(DEFAULT_HEIGHT, dpi);

    // SAFETY: CLASS_NAME was just registered; hinstance is the exe's module.
    // HWND::default() (null parent) creates a top-level window.
    // HMENU::default() (null menu): the menu bar is attached separately below.
    // None for lpParam: WM_CREATE builds its own state.
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            CLASS_NAME,
            APP_TITLE,
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            width,
            height,
            HWND::default(),
            HMENU::default(),
            hinstance,
            None,
        )
    }
    .map_err(|e| JotterError::win32("CreateWindowExW", &e))?;

    // Build and attach the menu bar.
    let menu = build_menu()?;
    // SAFETY: hwnd and menu are valid handles.
    unsafe { SetMenu(hwnd, menu) }.map_err(JotterError::from)?;

    Ok(hwnd)
}

// ── Menu construction ─────────────────────────────────────────────────────────

fn build_menu() -> Result<HMENU> {
    // SAFETY: CreateMenu has no preconditions; it always succeeds unless the
    // system is critically low on resources, in which case ? propagates the
    // error.  Item identifiers come from Command so that menu construction
    // and WM_COMMAND dispatch share one source of truth.
    unsafe {
        let bar = CreateMenu().map_err(JotterError::from)?;

        // ── File ──────────────────────────────────────────────────────────────
        let file = CreateMenu().map_err(JotterError::from)?;
        AppendMenuW(file, MF_STRING, Command::NewFile.menu_id(), w!("&New"))
            .map_err(JotterError::from)?;
        AppendMenuW(file, MF_STRING, Command::OpenFile.menu_id(), w!("&Open…"))
            .map_err(JotterError::from)?;
        AppendMenuW(file, MF_STRING, Command::SaveFile.menu_id(), w!("&Save…"))
            .map_err(JotterError::from)?;
        AppendMenuW(file, MF_SEPARATOR, 0, PCWSTR::null()).map_err(JotterError::from)?;
        AppendMenuW(file, MF_STRING, Command::Exit.menu_id(), w!("E&xit\tAlt+F4"))
            .map_err(JotterError::from)?;

        // ── Edit ──────────────────────────────────────────────────────────────
        // The shortcut hints are handled natively by the focused EDIT control;
        // no accelerator table is needed for them.
        let edit = CreateMenu().map_err(JotterError::from)?;
        AppendMenuW(edit, MF_STRING, Command::Cut.menu_id(), w!("Cu&t\tCtrl+X"))
            .map_err(JotterError::from)?;
        AppendMenuW(edit, MF_STRING, Command::Copy.menu_id(), w!("&Copy\tCtrl+C"))
            .map_err(JotterError::from)?;
        AppendMenuW(edit, MF_STRING, Command::Paste.menu_id(), w!("&Paste\tCtrl+V"))
            .map_err(JotterError::from)?;

        // ── Help ──────────────────────────────────────────────────────────────
        let help = CreateMenu().map_err(JotterError::from)?;
        AppendMenuW(help, MF_STRING, Command::About.menu_id(), w!("&About Jotter…"))
            .map_err(JotterError::from)?;

        // Attach drop-downs to the menu bar.
        // The uIDNewItem parameter for MF_POPUP is the child HMENU cast to usize.
        AppendMenuW(bar, MF_POPUP, file.0 as usize, w!("&File")).map_err(JotterError::from)?;
        AppendMenuW(bar, MF_POPUP, edit.0 as usize, w!("&Edit")).map_err(JotterError::from)?;
        AppendMenuW(bar, MF_POPUP, help.0 as usize, w!("&Help")).map_err(JotterError::from)?;

        Ok(bar)
    }
}

// ── Message loop ──────────────────────────────────────────────────────────────

fn message_loop() -> Result<()> {
    let mut msg = MSG::default();

    loop {
        // SAFETY: &mut msg is a valid MSG pointer; HWND::default() retrieves
        // messages for all windows on this thread; 0,0 filter accepts all.
        let ret = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };

        match ret.0 {
            // GetMessageW returns -1 on error.
            -1 => return Err(last_error("GetMessageW")),
            // Returns 0 when WM_QUIT is retrieved; exit the loop cleanly.
            0 => break,
            // Any other value: a normal message to dispatch.
            _ => unsafe {
                // SAFETY: msg was populated by a successful GetMessageW call.
                // TranslateMessage return value (whether it generated WM_CHAR)
                // and DispatchMessageW's LRESULT are intentionally unused.
                let _ = TranslateMessage(&msg);
                let _ = DispatchMessageW(&msg);
            },
        }
    }

    Ok(())
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        // ── Lifecycle ─────────────────────────────────────────────────────────
        WM_CREATE => match WindowState::create(hwnd) {
            Ok(state) => {
                let ptr = Box::into_raw(Box::new(state));
                // SAFETY: hwnd is valid; ptr stays live until WM_DESTROY,
                // which is the only place that reclaims it.
                let _ = SetWindowLongPtrW(hwnd, GWLP_USERDATA, ptr as isize);
                // SAFETY: ptr was just leaked above and nothing else holds it.
                refresh_chrome(hwnd, &*ptr);
                LRESULT(0)
            }
            Err(e) => {
                alerts::show(
                    hwnd,
                    "Jotter",
                    &format!("The editor window could not be created.\n\n{e}"),
                    Severity::Error,
                );
                // Returning -1 from WM_CREATE aborts window creation.
                LRESULT(-1)
            }
        },

        WM_CLOSE => {
            // SAFETY: hwnd is the window being closed; DestroyWindow triggers
            // WM_DESTROY, which posts WM_QUIT via PostQuitMessage.
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => {
            // Windows has already destroyed the child windows; dropping
            // WindowState only frees the Rust side.
            let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowState;
            if !ptr.is_null() {
                let _ = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
                // SAFETY: ptr came from Box::into_raw in WM_CREATE and was
                // cleared above, so this is the only reclamation.
                drop(Box::from_raw(ptr));
            }
            // SAFETY: PostQuitMessage with exit code 0 is always safe to call
            // from WM_DESTROY. It posts WM_QUIT to the thread's message queue.
            PostQuitMessage(0);
            LRESULT(0)
        }

        // ── Layout ────────────────────────────────────────────────────────────
        WM_SIZE => {
            // lparam low word = new client width, high word = new client height.
            if let Some(state) = window_state(hwnd) {
                let width = (lparam.0 & 0xFFFF) as i32;
                let height = ((lparam.0 >> 16) & 0xFFFF) as i32;
                layout_children(hwnd, state, width, height);
            }
            LRESULT(0)
        }

        WM_DPICHANGED => {
            // lparam points at the suggested window rectangle for the new DPI.
            // SAFETY: Windows guarantees lparam is a valid *const RECT for
            // this message.
            let rect = *(lparam.0 as *const RECT);
            // SAFETY: hwnd is valid; moving to the suggested rectangle is the
            // documented response.  The ensuing WM_SIZE re-lays out the
            // children, so the Result is intentionally unused.
            let _ = SetWindowPos(
                hwnd,
                HWND::default(),
                rect.left,
                rect.top,
                rect.right - rect.left,
                rect.bottom - rect.top,
                SWP_NOZORDER | SWP_NOACTIVATE,
            );
            LRESULT(0)
        }

        // ── Commands ──────────────────────────────────────────────────────────
        WM_COMMAND => {
            // Menu commands arrive with lparam == 0; notifications from the
            // child controls carry the child HWND instead and take the
            // default path.
            let cmd = if lparam.0 == 0 {
                Command::from_menu_id(wparam.0 & 0xFFFF)
            } else {
                None
            };
            match cmd {
                Some(cmd) => {
                    handle_command(hwnd, cmd);
                    LRESULT(0)
                }
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            }
        }

        // Default processing for all unhandled messages.
        // SAFETY: hwnd and message parameters are valid; provided by Windows.
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Stack the child controls: status bar along the bottom edge, edit view
/// filling the remaining client area.
fn layout_children(hwnd: HWND, state: &WindowState, client_width: i32, client_height: i32) {
    state.status.layout(client_width, dpi::get_for_window(hwnd));
    let status_height = state.status.height();
    state
        .edit
        .resize(0, 0, client_width, (client_height - status_height).max(0));
}

// ── Command dispatch ──────────────────────────────────────────────────────────

/// Route one menu command to its workflow.
///
/// Discipline for every arm: a `WindowState` borrow must end before any modal
/// call (file dialog, alert) starts.  Modal dialogs pump this thread's
/// message queue, and a re-entered `wnd_proc` must never find the state
/// already borrowed.
fn handle_command(hwnd: HWND, cmd: Command) {
    match cmd {
        Command::NewFile => {
            let result = match window_state(hwnd) {
                Some(state) => {
                    let r = state.app.new_document(&mut state.edit);
                    if r.is_ok() {
                        refresh_chrome(hwnd, state);
                    }
                    r
                }
                None => return,
            };
            if let Err(e) = result {
                alerts::show(
                    hwnd,
                    "Jotter",
                    &format!("The document could not be cleared.\n\n{e}"),
                    Severity::Error,
                );
            }
        }

        Command::OpenFile => {
            let path = match dialogs::show_open_dialog(hwnd) {
                Some(p) => p,
                // Cancelled: nothing changes.
                None => return,
            };
            let result = match window_state(hwnd) {
                Some(state) => {
                    let r = state.app.open_document(&mut state.edit, &path);
                    if r.is_ok() {
                        refresh_chrome(hwnd, state);
                    }
                    r
                }
                None => return,
            };
            if let Err(e) = result {
                alerts::show(
                    hwnd,
                    "Jotter",
                    &format!("\"{}\" could not be opened.\n\n{e}", path.display()),
                    Severity::Error,
                );
            }
        }

        Command::SaveFile => {
            // Short borrow just for the dialog's default filename.
            let default_name = match window_state(hwnd) {
                Some(state) => state.app.session().display_name(),
                None => return,
            };
            let path = match dialogs::show_save_dialog(hwnd, &default_name) {
                Some(p) => p,
                // Cancelled: nothing changes.
                None => return,
            };
            let result = match window_state(hwnd) {
                Some(state) => {
                    let r = state.app.save_document(&mut state.edit, &path);
                    if r.is_ok() {
                        refresh_chrome(hwnd, state);
                    }
                    r
                }
                None => return,
            };
            if let Err(e) = result {
                alerts::show(
                    hwnd,
                    "Jotter",
                    &format!("\"{}\" could not be saved.\n\n{e}", path.display()),
                    Severity::Error,
                );
            }
        }

        Command::Exit => {
            // SAFETY: DestroyWindow triggers WM_DESTROY, which posts WM_QUIT.
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }

        Command::Cut => {
            if let Some(state) = window_state(hwnd) {
                state.edit.cut();
            }
        }

        Command::Copy => {
            if let Some(state) = window_state(hwnd) {
                state.edit.copy_to_clipboard();
            }
        }

        Command::Paste => {
            if let Some(state) = window_state(hwnd) {
                state.edit.paste();
            }
        }

        Command::About => about_dialog(hwnd),
    }
}

// ── Window chrome ─────────────────────────────────────────────────────────────

/// Push the window title and both status-bar parts from the current session.
///
/// Called once at startup and again after every successful state-changing
/// command.  Failed or cancelled commands refresh nothing.
fn refresh_chrome(hwnd: HWND, state: &WindowState) {
    let title: Vec<u16> = state
        .app
        .window_title()
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();
    // SAFETY: title is a valid null-terminated UTF-16 string that outlives
    // the call; hwnd is valid.  A failed title update is cosmetic and the
    // Result is intentionally unused.
    unsafe {
        let _ = SetWindowTextW(hwnd, PCWSTR(title.as_ptr()));
    }

    state.status.render(state.app.session());
}

// ── Helper dialogs ────────────────────────────────────────────────────────────

/// Display the "About Jotter" information dialog.
fn about_dialog(hwnd: HWND) {
    let body = concat!(
        "Jotter 0.1.0\n\n",
        "A small, fast plain-text editor for Windows 10/11.\n\n",
        "Licensed under MIT OR Apache-2.0.",
    );
    alerts::show(hwnd, "About Jotter", body, Severity::Info);
}

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in a `JotterError`.
///
/// Call immediately after a Win32 function that signals failure; `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
fn last_error(function: &'static str) -> JotterError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    JotterError::Win32 {
        function,
        code: code.0,
    }
}
