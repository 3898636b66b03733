use std::ffi::CStr;

use tracing::error;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::Fxc::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::core::*;

/// Compiles one entry point of an in-memory HLSL source.
pub fn compile_shader(
    source: &str,
    source_name: &CStr,
    entry_point: &CStr,
    target: &CStr,
) -> Result<ID3DBlob> {
    let flags = if cfg!(debug_assertions) {
        D3DCOMPILE_ENABLE_STRICTNESS | D3DCOMPILE_DEBUG | D3DCOMPILE_SKIP_OPTIMIZATION
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
            error!(
                "Shader compile error ({:?} {:?}): {}",
                entry_point,
                target,
                blob_text(&error)
            );
        }
        return Err(e);
    }

    shader_blob.ok_or_else(|| Error::new(E_POINTER, "D3DCompile returned no bytecode"))
}

/// The bytes of a blob, e.g. compiler or serialiser output.
pub fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    unsafe { std::slice::from_raw_parts(blob.GetBufferPointer() as *const u8, blob.GetBufferSize()) }
}

/// Error blobs hold nul-terminated ANSI text.
pub fn blob_text(blob: &ID3DBlob) -> String {
    String::from_utf8_lossy(blob_bytes(blob))
        .trim_end_matches('\0')
        .trim()
        .to_string()
}
