use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::*;

use crate::sample_config::SampleCommandLine;

/// Seam between the window runner and a Direct3D sample.
pub trait DXSample {
    /// Creates the device; the info queue is only present in debug builds.
    fn new(command_line: &SampleCommandLine) -> Result<(Self, Option<IDXGIInfoQueue>)>
    where
        Self: Sized;

    /// Creates every window-dependent object and flushes the GPU once.
    fn bind_to_window(&mut self, hwnd: &HWND) -> Result<()>;

    /// Records, submits and presents one frame.
    fn render(&mut self) -> Result<()>;

    /// Waits for outstanding GPU work before the sample is dropped.
    fn on_destroy(&mut self);

    fn title(&self) -> String;

    fn window_size(&self) -> (u32, u32);
}
