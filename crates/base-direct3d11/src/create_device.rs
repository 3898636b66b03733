use tracing::info;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::*;

/// Creates the device, its immediate context and a double-buffered flip swap chain in one call.
pub fn create_device_and_swap_chain(
    hwnd: HWND,
) -> Result<(ID3D11Device, ID3D11DeviceContext, IDXGISwapChain)> {
    let swap_chain_desc = DXGI_SWAP_CHAIN_DESC {
        BufferDesc: DXGI_MODE_DESC {
            RefreshRate: DXGI_RATIONAL {
                Numerator: 0,
                Denominator: 1,
            },
            Format: DXGI_FORMAT_B8G8R8A8_UNORM,
            ..Default::default()
        },
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        // Flip model needs at least two buffers.
        BufferCount: 2,
        OutputWindow: hwnd,
        Windowed: true.into(),
        SwapEffect: DXGI_SWAP_EFFECT_FLIP_SEQUENTIAL,
        ..Default::default()
    };

    let mut flags = D3D11_CREATE_DEVICE_SINGLETHREADED;
    if cfg!(debug_assertions) {
        flags |= D3D11_CREATE_DEVICE_DEBUG;
    }

    let mut swap_chain = None;
    let mut device = None;
    let mut feature_level = D3D_FEATURE_LEVEL::default();
    let mut device_context = None;
    unsafe {
        D3D11CreateDeviceAndSwapChain(
            None,
            D3D_DRIVER_TYPE_HARDWARE,
            HMODULE::default(),
            flags,
            None,
            D3D11_SDK_VERSION,
            Some(&swap_chain_desc),
            Some(&mut swap_chain),
            Some(&mut device),
            Some(&mut feature_level),
            Some(&mut device_context),
        )?
    };

    match (device, device_context, swap_chain) {
        (Some(device), Some(device_context), Some(swap_chain)) => {
            info!("Created Direct3D 11 device at feature level {:#x}", feature_level.0);
            Ok((device, device_context, swap_chain))
        }
        _ => Err(Error::new(
            E_POINTER,
            "D3D11CreateDeviceAndSwapChain returned a missing object",
        )),
    }
}
