use tracing::info;
use tracing::warn;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::*;

use crate::adapter_utils::get_hardware_adapter;
use crate::sample_config::SampleCommandLine;

/// Creates the DXGI factory and the D3D12 device.
///
/// Debug builds enable the D3D12 debug layer and, when that works, return
/// the DXGI info queue so failures can be explained later.
pub fn create_device(
    command_line: &SampleCommandLine,
) -> Result<(IDXGIFactory4, ID3D12Device, Option<IDXGIInfoQueue>)> {
    let mut debug_flags = DXGI_CREATE_FACTORY_FLAGS(0);
    let mut info_queue: Option<IDXGIInfoQueue> = None;

    if cfg!(debug_assertions) {
        if enable_debug_layer() {
            debug_flags |= DXGI_CREATE_FACTORY_DEBUG;
            match unsafe { DXGIGetDebugInterface1::<IDXGIInfoQueue>(0) } {
                Ok(queue) => info_queue = Some(queue),
                Err(e) => warn!("Failed to get DXGI info queue: {:?}", e),
            }
        } else {
            warn!("D3D12 debug layer unavailable.");
        }
    }

    let dxgi_factory: IDXGIFactory4 = unsafe { CreateDXGIFactory2(debug_flags) }?;

    let adapter = if command_line.use_warp_device {
        info!("Using WARP adapter.");
        unsafe { dxgi_factory.EnumWarpAdapter()? }
    } else {
        get_hardware_adapter(&dxgi_factory)?
    };

    let mut device: Option<ID3D12Device> = None;
    unsafe { D3D12CreateDevice(&adapter, D3D_FEATURE_LEVEL_11_0, &mut device) }?;
    let device = device.ok_or_else(|| Error::new(E_POINTER, "D3D12CreateDevice returned no device"))?;

    Ok((dxgi_factory, device, info_queue))
}

fn enable_debug_layer() -> bool {
    unsafe {
        let mut debug1: Option<ID3D12Debug1> = None;
        if let Some(debug1) = D3D12GetDebugInterface(&mut debug1).ok().and(debug1) {
            debug1.EnableDebugLayer();
            debug1.SetEnableGPUBasedValidation(true);
            info!("D3D12 debug layer enabled (with GPU-based validation)");
            return true;
        }

        let mut debug: Option<ID3D12Debug> = None;
        if let Some(debug) = D3D12GetDebugInterface(&mut debug).ok().and(debug) {
            debug.EnableDebugLayer();
            info!("D3D12 debug layer enabled");
            return true;
        }
    }
    false
}
