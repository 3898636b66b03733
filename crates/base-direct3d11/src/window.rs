use eyre::WrapErr;
use tracing::info;
use tracing::warn;
use widestring::U16CString;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::HBRUSH;
use windows::Win32::Graphics::Gdi::UpdateWindow;
use windows::Win32::System::LibraryLoader::*;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::*;

use crate::sample_config::SampleConfig;

const WINDOW_CLASS: PCWSTR = w!("DX11Window");

/// Registers the window class and creates a window whose client area is `config.window_size`.
pub fn create_window(config: &SampleConfig) -> eyre::Result<HWND> {
    let instance = unsafe { GetModuleHandleW(None)? };

    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        hbrBackground: HBRUSH::default(),
        lpszClassName: WINDOW_CLASS,
        ..Default::default()
    };

    if unsafe { RegisterClassExW(&wc) } == 0 {
        warn!("Failed to register window. Err: {:?}", unsafe { GetLastError() });
    }

    let (width, height) = config.window_size;
    let mut rect = RECT {
        left: 0,
        top: 0,
        right: width as i32,
        bottom: height as i32,
    };
    unsafe { AdjustWindowRect(&mut rect, WS_OVERLAPPEDWINDOW, false)? };

    let title = U16CString::from_str(&config.title).wrap_err("window title contains a nul")?;

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            WINDOW_CLASS,
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            rect.right - rect.left,
            rect.bottom - rect.top,
            None,
            None,
            Some(instance.into()),
            None,
        )
    }
    .wrap_err("failed to create window")?;

    info!("Created {}x{} window", width, height);
    Ok(hwnd)
}

pub fn show_window(hwnd: HWND) {
    unsafe {
        _ = ShowWindow(hwnd, SW_SHOW);
        _ = UpdateWindow(hwnd);
    }
}

/// Drains the message queue. Returns false once WM_QUIT has been seen.
pub fn pump_messages() -> bool {
    let mut running = true;
    let mut message = MSG::default();
    while unsafe { PeekMessageW(&mut message, None, 0, 0, PM_REMOVE) }.as_bool() {
        if message.message == WM_QUIT {
            running = false;
        } else {
            unsafe {
                _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            }
        }
    }
    running
}

extern "system" fn wndproc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match message {
        WM_CLOSE | WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(window, message, wparam, lparam) },
    }
}
