use tracing::debug;
use tracing::info;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D12::D3D12CreateDevice;
use windows::Win32::Graphics::Direct3D12::ID3D12Device;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::*;

/// Returns the first hardware adapter that supports Direct3D 12 at feature level 11.0.
///
/// Adapters are visited in high-performance order when the factory supports
/// `IDXGIFactory6`, and in plain enumeration order otherwise. Software
/// adapters are skipped; WARP is requested explicitly instead.
pub fn get_hardware_adapter(factory: &IDXGIFactory4) -> Result<IDXGIAdapter1> {
    if let Ok(factory6) = factory.cast::<IDXGIFactory6>() {
        for i in 0.. {
            let adapter: IDXGIAdapter1 = match unsafe {
                factory6.EnumAdapterByGpuPreference(i, DXGI_GPU_PREFERENCE_HIGH_PERFORMANCE)
            } {
                Ok(a) => a,
                Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => break,
                Err(e) => return Err(e),
            };
            if is_suitable(&adapter, i)? {
                return Ok(adapter);
            }
        }
    } else {
        debug!("IDXGIFactory6 unavailable, enumerating adapters in default order");
    }

    for i in 0.. {
        let adapter = match unsafe { factory.EnumAdapters1(i) } {
            Ok(a) => a,
            Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => break,
            Err(e) => return Err(e),
        };
        if is_suitable(&adapter, i)? {
            return Ok(adapter);
        }
    }

    Err(Error::new(
        DXGI_ERROR_NOT_FOUND,
        "No suitable D3D12 hardware adapter found.",
    ))
}

fn is_suitable(adapter: &IDXGIAdapter1, index: u32) -> Result<bool> {
    let desc = unsafe { adapter.GetDesc1()? };
    let name = String::from_utf16_lossy(&desc.Description);
    let name = name.trim_end_matches('\0');

    if (DXGI_ADAPTER_FLAG(desc.Flags as i32) & DXGI_ADAPTER_FLAG_SOFTWARE)
        != DXGI_ADAPTER_FLAG_NONE
    {
        debug!("Adapter {}: {} (software, skipped)", index, name);
        return Ok(false);
    }

    // Passing no output pointer only checks that the device could be created.
    let supported = unsafe {
        D3D12CreateDevice(
            adapter,
            D3D_FEATURE_LEVEL_11_0,
            std::ptr::null_mut::<Option<ID3D12Device>>(),
        )
    }
    .is_ok();

    if supported {
        info!("Using hardware adapter {}: {}", index, name);
    } else {
        debug!("Adapter {}: {} (no feature level 11.0)", index, name);
    }
    Ok(supported)
}
