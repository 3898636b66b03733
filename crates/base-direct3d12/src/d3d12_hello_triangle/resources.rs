use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::*;

use crate::fence_timeline::FenceTimeline;
use crate::render_target_slots::FRAME_COUNT;

/// Everything created by `bind_to_window`, released in field order on drop.
pub struct Resources {
    pub command_queue: ID3D12CommandQueue,
    pub swap_chain: IDXGISwapChain3,
    pub render_targets: [ID3D12Resource; FRAME_COUNT],
    pub rtv_heap: ID3D12DescriptorHeap,
    pub rtv_descriptor_size: u32,
    pub viewport: D3D12_VIEWPORT,
    pub scissor_rect: RECT,
    pub command_allocator: ID3D12CommandAllocator,
    pub root_signature: ID3D12RootSignature,
    pub pso: ID3D12PipelineState,
    pub command_list: ID3D12GraphicsCommandList,
    pub vertex_buffer: ID3D12Resource,
    pub vbv: D3D12_VERTEX_BUFFER_VIEW,
    pub fence: ID3D12Fence,
    pub fence_event: HANDLE,
    pub fence_timeline: FenceTimeline,
    pub clear_color: [f32; 4],
}
