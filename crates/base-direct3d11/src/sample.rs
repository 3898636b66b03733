use tracing::info;
use tracing::warn;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::Win32::UI::WindowsAndMessaging::GetClientRect;
use windows::core::*;

use crate::compile_shader::blob_bytes;
use crate::compile_shader::compile_shader;
use crate::create_device::create_device_and_swap_chain;
use crate::sample_config::SampleConfig;
use crate::triangle::*;

/// Every object the sample draws with; released in field order on drop.
pub struct Sample {
    render_target_view: ID3D11RenderTargetView,
    vertex_shader: ID3D11VertexShader,
    pixel_shader: ID3D11PixelShader,
    input_layout: ID3D11InputLayout,
    vertex_buffer: Option<ID3D11Buffer>,
    viewport: D3D11_VIEWPORT,
    background_colour: [f32; 4],
    swap_chain: IDXGISwapChain,
    device_context: ID3D11DeviceContext,
    _device: ID3D11Device,
}

impl Sample {
    pub fn new(hwnd: HWND, config: &SampleConfig) -> Result<Self> {
        let (device, device_context, swap_chain) = create_device_and_swap_chain(hwnd)?;

        let framebuffer: ID3D11Texture2D = unsafe { swap_chain.GetBuffer(0)? };
        let mut render_target_view = None;
        unsafe { device.CreateRenderTargetView(&framebuffer, None, Some(&mut render_target_view))? };
        let render_target_view = render_target_view
            .ok_or_else(|| Error::new(E_POINTER, "no render target view"))?;

        let vs_blob = compile_shader(
            SHADER_SOURCE,
            VERTEX_SHADER_NAME,
            VERTEX_SHADER_ENTRY,
            VERTEX_SHADER_TARGET,
        )?;
        let ps_blob = compile_shader(
            SHADER_SOURCE,
            PIXEL_SHADER_NAME,
            PIXEL_SHADER_ENTRY,
            PIXEL_SHADER_TARGET,
        )?;

        let mut vertex_shader = None;
        unsafe { device.CreateVertexShader(blob_bytes(&vs_blob), None, Some(&mut vertex_shader))? };
        let vertex_shader =
            vertex_shader.ok_or_else(|| Error::new(E_POINTER, "no vertex shader"))?;

        let mut pixel_shader = None;
        unsafe { device.CreatePixelShader(blob_bytes(&ps_blob), None, Some(&mut pixel_shader))? };
        let pixel_shader = pixel_shader.ok_or_else(|| Error::new(E_POINTER, "no pixel shader"))?;

        let input_element_desc = [D3D11_INPUT_ELEMENT_DESC {
            SemanticName: PCSTR(POSITION_SEMANTIC.as_ptr().cast()),
            SemanticIndex: 0,
            Format: DXGI_FORMAT_R32G32B32_FLOAT,
            InputSlot: 0,
            AlignedByteOffset: 0,
            InputSlotClass: D3D11_INPUT_PER_VERTEX_DATA,
            InstanceDataStepRate: 0,
        }];
        let mut input_layout = None;
        unsafe {
            device.CreateInputLayout(
                &input_element_desc,
                blob_bytes(&vs_blob),
                Some(&mut input_layout),
            )?
        };
        let input_layout = input_layout.ok_or_else(|| Error::new(E_POINTER, "no input layout"))?;

        let vertex_buffer_desc = D3D11_BUFFER_DESC {
            ByteWidth: VERTEX_BUFFER_SIZE,
            Usage: D3D11_USAGE_DEFAULT,
            BindFlags: D3D11_BIND_VERTEX_BUFFER.0 as u32,
            ..Default::default()
        };
        let sub_resource_data = D3D11_SUBRESOURCE_DATA {
            pSysMem: TRIANGLE_VERTICES.as_ptr().cast(),
            ..Default::default()
        };
        let mut vertex_buffer = None;
        unsafe {
            device.CreateBuffer(
                &vertex_buffer_desc,
                Some(&sub_resource_data),
                Some(&mut vertex_buffer),
            )?
        };
        if vertex_buffer.is_none() {
            return Err(Error::new(E_POINTER, "no vertex buffer"));
        }

        let mut client_rect = RECT::default();
        unsafe { GetClientRect(hwnd, &mut client_rect)? };
        let viewport = D3D11_VIEWPORT {
            TopLeftX: 0.0,
            TopLeftY: 0.0,
            Width: (client_rect.right - client_rect.left) as f32,
            Height: (client_rect.bottom - client_rect.top) as f32,
            MinDepth: 0.0,
            MaxDepth: 1.0,
        };
        info!("Viewport {}x{}", viewport.Width, viewport.Height);

        Ok(Self {
            render_target_view,
            vertex_shader,
            pixel_shader,
            input_layout,
            vertex_buffer,
            viewport,
            background_colour: config.background_colour,
            swap_chain,
            device_context,
            _device: device,
        })
    }

    /// Clears, draws the triangle and presents with vsync.
    pub fn render(&self) {
        let context = &self.device_context;
        unsafe {
            // Flip-model presents unbind the back buffer, so bind it every frame.
            context.OMSetRenderTargets(Some(&[Some(self.render_target_view.clone())]), None);
            context.RSSetViewports(Some(&[self.viewport]));
            context.IASetPrimitiveTopology(D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST);
            context.IASetInputLayout(&self.input_layout);
            context.IASetVertexBuffers(
                0,
                1,
                Some(&self.vertex_buffer),
                Some(&VERTEX_STRIDE),
                Some(&VERTEX_OFFSET),
            );
            context.VSSetShader(&self.vertex_shader, None);
            context.PSSetShader(&self.pixel_shader, None);

            context.ClearRenderTargetView(&self.render_target_view, &self.background_colour);
            context.Draw(VERTEX_COUNT, 0);
        }

        if let Err(e) = unsafe { self.swap_chain.Present(1, DXGI_PRESENT(0)) }.ok() {
            warn!("Failed to present image to window: {:?}", e);
        }
    }
}

/// Lists DXGI objects still alive. Only meaningful in debug builds.
pub fn report_live_objects() {
    if !cfg!(debug_assertions) {
        return;
    }
    match unsafe { DXGIGetDebugInterface1::<IDXGIDebug>(0) } {
        Ok(debug) => {
            if let Err(e) = unsafe { debug.ReportLiveObjects(DXGI_DEBUG_ALL, DXGI_DEBUG_RLO_ALL) } {
                warn!("ReportLiveObjects failed: {:?}", e);
            }
        }
        Err(e) => warn!("DXGI debug interface unavailable: {:?}", e),
    }
}
