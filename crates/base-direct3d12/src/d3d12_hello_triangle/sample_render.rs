use tracing::warn;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::*;

use super::populate_command_list::populate_command_list;
use super::sample::Sample;
use super::wait_for_gpu::wait_for_gpu;

pub fn render(sample: &mut Sample) -> Result<()> {
    let Some(resources) = &mut sample.resources else {
        return Ok(());
    };

    populate_command_list(resources)?;

    let command_lists = [Some(resources.command_list.cast::<ID3D12CommandList>()?)];
    unsafe { resources.command_queue.ExecuteCommandLists(&command_lists) };

    // Sync interval 1; a failed present still lets the frame's work drain.
    if let Err(e) = unsafe { resources.swap_chain.Present(1, DXGI_PRESENT(0)) }.ok() {
        warn!("Failed to present image to window: {:?}", e);
    }

    // Full stall: the next frame reuses the single allocator.
    wait_for_gpu(resources)
}
