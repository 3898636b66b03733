use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D12::*;
use windows::core::*;

use crate::render_target_slots::descriptor_offset;
use crate::triangle::VERTEX_COUNT;

use super::resources::Resources;
use super::transition_barrier::transition_barrier;

/// Re-records the frame: clear the current back buffer and draw the triangle.
///
/// Only valid once the previous frame's fence value has completed, since the
/// single allocator is reset here.
pub fn populate_command_list(resources: &Resources) -> Result<()> {
    let frame_index = unsafe { resources.swap_chain.GetCurrentBackBufferIndex() };
    let render_target = &resources.render_targets[frame_index as usize];

    unsafe { resources.command_allocator.Reset()? };

    let command_list = &resources.command_list;
    unsafe { command_list.Reset(&resources.command_allocator, &resources.pso)? };

    unsafe {
        command_list.SetGraphicsRootSignature(&resources.root_signature);
        command_list.RSSetViewports(&[resources.viewport]);
        command_list.RSSetScissorRects(&[resources.scissor_rect]);
    }

    let barrier_rt = transition_barrier(
        render_target,
        D3D12_RESOURCE_STATE_PRESENT,
        D3D12_RESOURCE_STATE_RENDER_TARGET,
    );
    unsafe { command_list.ResourceBarrier(&[barrier_rt]) };

    let rtv_handle = D3D12_CPU_DESCRIPTOR_HANDLE {
        ptr: unsafe { resources.rtv_heap.GetCPUDescriptorHandleForHeapStart() }.ptr
            + descriptor_offset(frame_index, resources.rtv_descriptor_size),
    };

    unsafe {
        command_list.OMSetRenderTargets(1, Some(&rtv_handle), false, None);
        command_list.ClearRenderTargetView(rtv_handle, &resources.clear_color, None);
        command_list.IASetPrimitiveTopology(D3D_PRIMITIVE_TOPOLOGY_TRIANGLELIST);
        command_list.IASetVertexBuffers(0, Some(&[resources.vbv]));
        command_list.DrawInstanced(VERTEX_COUNT, 1, 0, 0);

        let barrier_present = transition_barrier(
            render_target,
            D3D12_RESOURCE_STATE_RENDER_TARGET,
            D3D12_RESOURCE_STATE_PRESENT,
        );
        command_list.ResourceBarrier(&[barrier_present]);
    }

    unsafe { command_list.Close() }
}
