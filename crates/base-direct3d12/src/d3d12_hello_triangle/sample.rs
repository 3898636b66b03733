use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::*;

use crate::dx_sample::DXSample;
use crate::sample_config::SampleCommandLine;
use crate::sample_config::SampleConfig;

use super::create_device::create_device;
use super::resources::Resources;

pub struct Sample {
    pub dxgi_factory: IDXGIFactory4,
    pub device: ID3D12Device,
    pub config: SampleConfig,
    pub command_line: SampleCommandLine,
    pub resources: Option<Resources>,
}

impl DXSample for Sample {
    fn new(command_line: &SampleCommandLine) -> Result<(Self, Option<IDXGIInfoQueue>)> {
        let (dxgi_factory, device, info_queue) = create_device(command_line)?;
        let sample = Self {
            dxgi_factory,
            device,
            config: SampleConfig::default(),
            command_line: command_line.clone(),
            resources: None,
        };
        Ok((sample, info_queue))
    }

    fn bind_to_window(&mut self, hwnd: &HWND) -> Result<()> {
        super::sample_bind_to_window::bind_to_window(self, hwnd)
    }

    fn render(&mut self) -> Result<()> {
        super::sample_render::render(self)
    }

    fn on_destroy(&mut self) {
        super::sample_on_destroy::on_destroy(self);
    }

    fn title(&self) -> String {
        self.config.window_title(&self.command_line)
    }

    fn window_size(&self) -> (u32, u32) {
        self.config.window_size
    }
}
