use eyre::WrapErr;
use tracing::error;
use tracing::info;
use tracing::warn;
use widestring::U16CString;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::HBRUSH;
use windows::Win32::Graphics::Gdi::UpdateWindow;
use windows::Win32::System::LibraryLoader::*;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::*;

use crate::debug_messages::print_dxgi_debug_messages;
use crate::dx_sample::DXSample;
use crate::sample_config::build_command_line;

const WINDOW_CLASS: PCWSTR = w!("DX12Window");

/// Runs a DirectX sample that implements the DXSample trait
pub fn run_sample<S>() -> eyre::Result<()>
where
    S: DXSample,
{
    let command_line = build_command_line(std::env::args());
    let (mut sample, info_queue) =
        S::new(&command_line).wrap_err("failed to create the Direct3D 12 device")?;

    let hwnd = create_window(&sample.title(), sample.window_size())?;

    if let Err(e) = sample.bind_to_window(&hwnd) {
        print_dxgi_debug_messages(&info_queue);
        return Err(e).wrap_err("failed to bind the sample to its window");
    }

    unsafe {
        _ = ShowWindow(hwnd, SW_SHOW);
        _ = UpdateWindow(hwnd);
    }

    while pump_messages() {
        if let Err(e) = sample.render() {
            error!("Render error: {:?}", e);
            print_dxgi_debug_messages(&info_queue);
        }
    }

    sample.on_destroy();
    Ok(())
}

fn create_window(title: &str, size: (u32, u32)) -> eyre::Result<HWND> {
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
        warn!("Failed to register window class: {:?}", unsafe { GetLastError() });
    }

    // Grow the outer rect so the client area is exactly `size`.
    let mut window_rect = RECT {
        left: 0,
        top: 0,
        right: size.0 as i32,
        bottom: size.1 as i32,
    };
    unsafe { AdjustWindowRect(&mut window_rect, WS_OVERLAPPEDWINDOW, false)? };

    let title = U16CString::from_str(title).wrap_err("window title contains a nul")?;

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            WINDOW_CLASS,
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
            None,
            None,
            Some(instance.into()),
            None,
        )
    }
    .wrap_err("failed to create window")?;

    info!("Created {}x{} window", size.0, size.1);
    Ok(hwnd)
}

/// Drains the message queue. Returns false once WM_QUIT has been seen.
fn pump_messages() -> bool {
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
