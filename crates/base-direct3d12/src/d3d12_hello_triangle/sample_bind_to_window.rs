use tracing::info;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::Win32::System::Threading::*;
use windows::core::*;

use crate::fence_timeline::FenceTimeline;
use crate::render_target_slots::FRAME_COUNT;
use crate::render_target_slots::descriptor_offset;

use super::create_pipeline_state::create_pipeline_state;
use super::create_root_signature::create_root_signature;
use super::create_vertex_buffer::create_vertex_buffer;
use super::resources::Resources;
use super::sample::Sample;
use super::wait_for_gpu::wait_for_gpu;

pub fn bind_to_window(sample: &mut Sample, hwnd: &HWND) -> Result<()> {
    let device = &sample.device;

    let command_queue: ID3D12CommandQueue = unsafe {
        device.CreateCommandQueue(&D3D12_COMMAND_QUEUE_DESC {
            Type: D3D12_COMMAND_LIST_TYPE_DIRECT,
            Flags: D3D12_COMMAND_QUEUE_FLAG_NONE,
            ..Default::default()
        })?
    };

    let (width, height) = sample.config.window_size;

    let swap_chain_desc = DXGI_SWAP_CHAIN_DESC1 {
        BufferCount: FRAME_COUNT as u32,
        Width: width,
        Height: height,
        Format: DXGI_FORMAT_R8G8B8A8_UNORM,
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        SwapEffect: DXGI_SWAP_EFFECT_FLIP_DISCARD,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            ..Default::default()
        },
        ..Default::default()
    };

    // The swap chain holds the queue so it can flush it on present.
    let swap_chain: IDXGISwapChain3 = unsafe {
        sample
            .dxgi_factory
            .CreateSwapChainForHwnd(&command_queue, *hwnd, &swap_chain_desc, None, None)?
    }
    .cast()?;

    unsafe {
        sample
            .dxgi_factory
            .MakeWindowAssociation(*hwnd, DXGI_MWA_NO_ALT_ENTER)?;
    }

    let rtv_heap: ID3D12DescriptorHeap = unsafe {
        device.CreateDescriptorHeap(&D3D12_DESCRIPTOR_HEAP_DESC {
            NumDescriptors: FRAME_COUNT as u32,
            Type: D3D12_DESCRIPTOR_HEAP_TYPE_RTV,
            Flags: D3D12_DESCRIPTOR_HEAP_FLAG_NONE,
            ..Default::default()
        })
    }?;

    let rtv_descriptor_size =
        unsafe { device.GetDescriptorHandleIncrementSize(D3D12_DESCRIPTOR_HEAP_TYPE_RTV) };
    let rtv_handle = unsafe { rtv_heap.GetCPUDescriptorHandleForHeapStart() };

    let render_targets: [ID3D12Resource; FRAME_COUNT] =
        array_init::try_array_init(|i| -> Result<ID3D12Resource> {
            let slot = i as u32;
            let resource: ID3D12Resource = unsafe { swap_chain.GetBuffer(slot)? };
            unsafe {
                device.CreateRenderTargetView(
                    &resource,
                    None,
                    D3D12_CPU_DESCRIPTOR_HANDLE {
                        ptr: rtv_handle.ptr + descriptor_offset(slot, rtv_descriptor_size),
                    },
                );
            }
            Ok(resource)
        })?;

    let command_allocator: ID3D12CommandAllocator =
        unsafe { device.CreateCommandAllocator(D3D12_COMMAND_LIST_TYPE_DIRECT)? };

    let root_signature = create_root_signature(device)?;
    let pso = create_pipeline_state(device, &root_signature)?;

    let command_list: ID3D12GraphicsCommandList = unsafe {
        device.CreateCommandList(0, D3D12_COMMAND_LIST_TYPE_DIRECT, &command_allocator, &pso)
    }?;
    // Created in the recording state; each frame expects it closed.
    unsafe { command_list.Close()? };

    let (vertex_buffer, vbv) = create_vertex_buffer(device)?;

    let viewport = D3D12_VIEWPORT {
        TopLeftX: 0.0,
        TopLeftY: 0.0,
        Width: width as f32,
        Height: height as f32,
        MinDepth: D3D12_MIN_DEPTH,
        MaxDepth: D3D12_MAX_DEPTH,
    };

    let scissor_rect = RECT {
        left: 0,
        top: 0,
        right: width as i32,
        bottom: height as i32,
    };

    let fence: ID3D12Fence = unsafe { device.CreateFence(0, D3D12_FENCE_FLAG_NONE)? };
    let fence_event = unsafe { CreateEventW(None, false, false, None)? };

    let mut resources = Resources {
        command_queue,
        swap_chain,
        render_targets,
        rtv_heap,
        rtv_descriptor_size,
        viewport,
        scissor_rect,
        command_allocator,
        root_signature,
        pso,
        command_list,
        vertex_buffer,
        vbv,
        fence,
        fence_event,
        fence_timeline: FenceTimeline::default(),
        clear_color: sample.config.clear_color,
    };

    // Nothing has been submitted yet, but flush so the first frame starts clean.
    wait_for_gpu(&mut resources)?;
    info!("Bound {}x{} swap chain with {} buffers", width, height, FRAME_COUNT);

    sample.resources = Some(resources);
    Ok(())
}
