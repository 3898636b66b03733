use tracing::error;
use tracing::info;
use windows::Win32::Foundation::*;

use super::sample::Sample;
use super::wait_for_gpu::wait_for_gpu_idle;

pub fn on_destroy(sample: &mut Sample) {
    if let Some(resources) = sample.resources.take() {
        if let Err(e) = wait_for_gpu_idle(&resources) {
            error!("Error waiting for GPU idle on destroy: {:?}", e);
        }
        if !resources.fence_event.is_invalid() {
            if let Err(e) = unsafe { CloseHandle(resources.fence_event) } {
                error!("Failed to close fence event: {:?}", e);
            }
        }
        // The remaining objects are released as `resources` drops here.
    }
    info!("Sample destroyed.");
}
