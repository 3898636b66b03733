use std::ffi::CStr;

use tracing::error;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::Fxc::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::core::*;

// Helper to compile shaders from the inline source
pub fn compile_shader(
    source: &str,
    source_name: &CStr,
    entry_point: &CStr,
    target: &CStr,
) -> Result<ID3DBlob> {
    let flags = if cfg!(debug_assertions) {
        D3DCOMPILE_ENABLE_STRICTNESS | D3DCOMPILE_DEBUG
    } else {
        D3DCOMPILE_ENABLE_STRICTNESS
    };

    let mut shader_blob = None;
    let mut error_blob = None;
    let result = unsafe {
        D3DCompile(
            source.as_ptr().cast(),
            source.len(),
            PCSTR(source_name.as_ptr().cast()),
            None,
            None,
            PCSTR(entry_point.as_ptr().cast()),
            PCSTR(target.as_ptr().cast()),
            flags,
            0,
            &mut shader_blob,
            Some(&mut error_blob),
        )
    };

    if let Err(e) = result {
        if let Some(error) = error_blob {
            let error_msg = String::from_utf8_lossy(blob_bytes(&error))
                .trim_end_matches('\0')
                .to_string();
            error!("Shader compile error ({:?}): {}", source_name, error_msg);
        }
        return Err(e);
    }

    shader_blob.ok_or_else(|| Error::new(E_POINTER, "D3DCompile returned no bytecode"))
}

pub fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    unsafe { std::slice::from_raw_parts(blob.GetBufferPointer() as *const u8, blob.GetBufferSize()) }
}
