use eyre::WrapErr;
use tracing::debug;
use tracing::info;

/// The adapter the kernel runs on, with its device and queue.
pub struct GpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Opens the first GPU adapter found across every backend.
    pub fn new() -> eyre::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = select_gpu_adapter(&instance)
            .ok_or_else(|| eyre::eyre!("no GPU adapter with compute support was found"))?;
        Self::from_adapter(adapter)
    }

    pub fn from_adapter(adapter: wgpu::Adapter) -> eyre::Result<Self> {
        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("base_compute_device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            experimental_features: wgpu::ExperimentalFeatures::default(),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
            trace: wgpu::Trace::Off,
        }))
        .wrap_err("failed to create the compute device")?;

        info!("Compute device and queue initialised");
        Ok(Self {
            adapter,
            device,
            queue,
        })
    }
}

/// Software rasterisers and unknown devices are not GPUs.
pub fn is_gpu_device(device_type: wgpu::DeviceType) -> bool {
    matches!(
        device_type,
        wgpu::DeviceType::DiscreteGpu | wgpu::DeviceType::IntegratedGpu | wgpu::DeviceType::VirtualGpu
    )
}

pub fn supports_compute(adapter: &wgpu::Adapter) -> bool {
    adapter
        .get_downlevel_capabilities()
        .flags
        .contains(wgpu::DownlevelFlags::COMPUTE_SHADERS)
}

/// Logs every adapter and returns the first GPU that can run compute shaders.
pub fn select_gpu_adapter(instance: &wgpu::Instance) -> Option<wgpu::Adapter> {
    let adapters = instance.enumerate_adapters(wgpu::Backends::all());
    if adapters.is_empty() {
        debug!("No adapters enumerated");
    }

    for adapter in adapters {
        let adapter_info = adapter.get_info();
        info!(
            "Platform: {:?}, adapter: {} ({:?})",
            adapter_info.backend, adapter_info.name, adapter_info.device_type
        );

        if !is_gpu_device(adapter_info.device_type) {
            continue;
        }
        if !supports_compute(&adapter) {
            debug!("{} has no compute shader support", adapter_info.name);
            continue;
        }

        info!("Found: {}", adapter_info.name);
        return Some(adapter);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_device_types() {
        assert!(is_gpu_device(wgpu::DeviceType::DiscreteGpu));
        assert!(is_gpu_device(wgpu::DeviceType::IntegratedGpu));
        assert!(is_gpu_device(wgpu::DeviceType::VirtualGpu));
        assert!(!is_gpu_device(wgpu::DeviceType::Cpu));
        assert!(!is_gpu_device(wgpu::DeviceType::Other));
    }
}
