use windows::Win32::Foundation::*;
use windows::Win32::System::Threading::*;
use windows::core::*;

use crate::fence_timeline::FenceTimeline;

use super::resources::Resources;

/// Signals the next fence value on the queue and blocks until the GPU reaches it.
pub fn wait_for_gpu(resources: &mut Resources) -> Result<()> {
    let fence_value = resources.fence_timeline.signal();
    unsafe {
        resources
            .command_queue
            .Signal(&resources.fence, fence_value)?
    };
    wait_for_fence_value(resources, fence_value)
}

/// Blocks until the last value ever signalled has completed.
pub fn wait_for_gpu_idle(resources: &Resources) -> Result<()> {
    match resources.fence_timeline.last_signaled() {
        Some(fence_value) => wait_for_fence_value(resources, fence_value),
        None => Ok(()),
    }
}

fn wait_for_fence_value(resources: &Resources, fence_value: u64) -> Result<()> {
    let completed = unsafe { resources.fence.GetCompletedValue() };
    if FenceTimeline::is_reached(fence_value, completed) {
        return Ok(());
    }

    unsafe {
        resources
            .fence
            .SetEventOnCompletion(fence_value, resources.fence_event)?;
        if WaitForSingleObjectEx(resources.fence_event, INFINITE, false) == WAIT_FAILED {
            return Err(HRESULT::from_win32(GetLastError().0).into());
        }
    }
    Ok(())
}
