use std::ffi::CStr;

use eyre::WrapErr;
use tracing::info;
use tracing::warn;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::Graphics::OpenGL::*;

use crate::pixel_format::PixelFormatRequest;

/// A WGL context made current on the window's device context.
///
/// Dropping it unbinds and deletes the context, then releases the DC.
pub struct GlContext {
    hwnd: HWND,
    hdc: HDC,
    hglrc: HGLRC,
}

impl GlContext {
    pub fn create(hwnd: HWND, request: &PixelFormatRequest) -> eyre::Result<Self> {
        let hdc = unsafe { GetDC(Some(hwnd)) };
        if hdc.is_invalid() {
            eyre::bail!("GetDC returned no device context");
        }

        let descriptor = request.descriptor();
        let pixel_format = unsafe { ChoosePixelFormat(hdc, &descriptor) };
        if pixel_format == 0 {
            unsafe { _ = ReleaseDC(Some(hwnd), hdc) };
            eyre::bail!("no pixel format matches {:?}", request);
        }

        if let Err(e) = unsafe { SetPixelFormat(hdc, pixel_format, &descriptor) } {
            warn!("Unable to set the pixel format: {:?}", e);
        }

        let hglrc = match unsafe { wglCreateContext(hdc) } {
            Ok(hglrc) => hglrc,
            Err(e) => {
                unsafe { _ = ReleaseDC(Some(hwnd), hdc) };
                return Err(e).wrap_err("unable to create an OpenGL context");
            }
        };

        // From here on Drop owns the teardown.
        let context = Self { hwnd, hdc, hglrc };
        unsafe { wglMakeCurrent(context.hdc, context.hglrc) }
            .wrap_err("unable to make the OpenGL context current")?;

        info!("Using pixel format {}", pixel_format);
        Ok(context)
    }

    pub fn log_version_strings(&self) {
        info!("GL_VENDOR: {}", gl_string(GL_VENDOR));
        info!("GL_RENDERER: {}", gl_string(GL_RENDERER));
        info!("GL_VERSION: {}", gl_string(GL_VERSION));
    }

    pub fn swap_buffers(&self) {
        if let Err(e) = unsafe { SwapBuffers(self.hdc) } {
            warn!("SwapBuffers failed: {:?}", e);
        }
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        unsafe {
            if let Err(e) = wglMakeCurrent(HDC::default(), HGLRC::default()) {
                warn!("Unable to unbind the OpenGL context: {:?}", e);
            }
            if let Err(e) = wglDeleteContext(self.hglrc) {
                warn!("Unable to delete the OpenGL context: {:?}", e);
            }
            _ = ReleaseDC(Some(self.hwnd), self.hdc);
        }
    }
}

fn gl_string(name: u32) -> String {
    let ptr = unsafe { glGetString(name) };
    if ptr.is_null() {
        return "<unavailable>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}
