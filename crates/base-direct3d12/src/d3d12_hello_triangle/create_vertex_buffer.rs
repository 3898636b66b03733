use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::core::*;

use bevy_math::Vec3;

use crate::triangle::TRIANGLE_VERTICES;
use crate::triangle::VERTEX_BUFFER_SIZE;
use crate::triangle::VERTEX_STRIDE;

/// Uploads the triangle into an upload-heap buffer and describes it for the input assembler.
pub fn create_vertex_buffer(
    device: &ID3D12Device,
) -> Result<(ID3D12Resource, D3D12_VERTEX_BUFFER_VIEW)> {
    let heap_props = D3D12_HEAP_PROPERTIES {
        Type: D3D12_HEAP_TYPE_UPLOAD,
        ..Default::default()
    };

    let resource_desc = D3D12_RESOURCE_DESC {
        Dimension: D3D12_RESOURCE_DIMENSION_BUFFER,
        Alignment: 0,
        Width: VERTEX_BUFFER_SIZE as u64,
        Height: 1,
        DepthOrArraySize: 1,
        MipLevels: 1,
        Format: DXGI_FORMAT_UNKNOWN,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        Layout: D3D12_TEXTURE_LAYOUT_ROW_MAJOR,
        Flags: D3D12_RESOURCE_FLAG_NONE,
    };

    let mut vertex_buffer: Option<ID3D12Resource> = None;
    unsafe {
        device.CreateCommittedResource(
            &heap_props,
            D3D12_HEAP_FLAG_NONE,
            &resource_desc,
            D3D12_RESOURCE_STATE_GENERIC_READ,
            None,
            &mut vertex_buffer,
        )?
    };
    let vertex_buffer = vertex_buffer
        .ok_or_else(|| Error::new(windows::Win32::Foundation::E_POINTER, "no vertex buffer"))?;
    unsafe { vertex_buffer.SetName(w!("VertexBuffer")) }.ok();

    unsafe {
        let mut data_ptr = std::ptr::null_mut();
        // Empty read range: the CPU never reads this buffer.
        let read_range = D3D12_RANGE { Begin: 0, End: 0 };
        vertex_buffer.Map(0, Some(&read_range), Some(&mut data_ptr))?;
        std::ptr::copy_nonoverlapping(
            TRIANGLE_VERTICES.as_ptr(),
            data_ptr as *mut Vec3,
            TRIANGLE_VERTICES.len(),
        );
        vertex_buffer.Unmap(0, None);
    }

    let vbv = D3D12_VERTEX_BUFFER_VIEW {
        BufferLocation: unsafe { vertex_buffer.GetGPUVirtualAddress() },
        StrideInBytes: VERTEX_STRIDE,
        SizeInBytes: VERTEX_BUFFER_SIZE,
    };

    Ok((vertex_buffer, vbv))
}
