use tracing::error;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D12::*;
use windows::core::*;

use super::compile_shader::blob_bytes;
use super::compile_shader::blob_text;

/// An empty root signature that only allows the input assembler layout.
pub fn create_root_signature(device: &ID3D12Device) -> Result<ID3D12RootSignature> {
    let desc = D3D12_ROOT_SIGNATURE_DESC {
        Flags: D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT,
        ..Default::default()
    };

    let mut signature_blob = None;
    let mut error_blob = None;

    let serialize_result = unsafe {
        D3D12SerializeRootSignature(
            &desc,
            D3D_ROOT_SIGNATURE_VERSION_1,
            &mut signature_blob,
            Some(&mut error_blob),
        )
    };

    if let Err(e) = serialize_result {
        if let Some(error) = error_blob {
            error!("Root signature serialization error: {}", blob_text(&error));
        }
        return Err(e);
    }

    let signature_blob = signature_blob
        .ok_or_else(|| Error::new(E_POINTER, "D3D12SerializeRootSignature returned no blob"))?;

    unsafe { device.CreateRootSignature(0, blob_bytes(&signature_blob)) }
}
