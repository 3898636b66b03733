use eyre::WrapErr;
use tracing::error;
use tracing::info;
use wgpu::util::DeviceExt;

use crate::gpu_context::GpuContext;
use crate::kernel::KERNEL_ENTRY;
use crate::kernel::KernelParams;
use crate::kernel::kernel_source;
use crate::kernel::workgroup_count;
use crate::kernel_config::KernelConfig;

/// Compiles the kernel, dispatches it once over `element_count` ids and reads the output back.
pub fn write_values(context: &GpuContext, config: &KernelConfig) -> eyre::Result<Vec<i32>> {
    let device = &context.device;
    let queue = &context.queue;

    let pipeline = create_pipeline(device, config)?;

    let params = KernelParams::new(config);
    let params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("write_value_params"),
        contents: bytemuck::bytes_of(&params),
        usage: wgpu::BufferUsages::UNIFORM,
    });

    let size = config.output_size_bytes();
    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("write_value_output"),
        size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: false,
    });
    let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("write_value_staging"),
        size,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("write_value_bind_group"),
        layout: &pipeline.get_bind_group_layout(0),
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: params_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: output_buffer.as_entire_binding(),
            },
        ],
    });

    let groups = workgroup_count(config.element_count, config.workgroup_size);
    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("write_value_encoder"),
    });
    {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("write_value_pass"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(groups, 1, 1);
    }
    encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, size);
    queue.submit(Some(encoder.finish()));
    info!(
        "Dispatched {} workgroups of {} for {} elements",
        groups, config.workgroup_size, config.element_count
    );

    let buffer_slice = staging_buffer.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |res| {
        let _ = tx.send(res);
    });
    device
        .poll(wgpu::PollType::wait_indefinitely())
        .wrap_err("device poll failed while reading back")?;
    rx.recv()
        .wrap_err("readback channel closed")?
        .wrap_err("failed to map the staging buffer")?;

    let values = {
        let mapped = buffer_slice.get_mapped_range();
        bytemuck::pod_collect_to_vec::<u8, i32>(&mapped)
    };
    staging_buffer.unmap();

    Ok(values)
}

fn create_pipeline(device: &wgpu::Device, config: &KernelConfig) -> eyre::Result<wgpu::ComputePipeline> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let source = kernel_source(config.workgroup_size);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("write_value_kernel"),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
        label: Some("write_value_pipeline"),
        layout: None,
        module: &module,
        entry_point: Some(KERNEL_ENTRY),
        compilation_options: wgpu::PipelineCompilationOptions::default(),
        cache: None,
    });

    if let Some(validation_error) = pollster::block_on(device.pop_error_scope()) {
        let compilation_info = pollster::block_on(module.get_compilation_info());
        for message in &compilation_info.messages {
            error!("{:?}: {}", message.message_type, message.message);
        }
        return Err(eyre::eyre!("{validation_error}")).wrap_err("kernel compilation failed");
    }

    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu_context::select_gpu_adapter;
    use crate::kernel::first_mismatch;

    #[test]
    fn dispatch_writes_offset_sequence() {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let Some(adapter) = select_gpu_adapter(&instance) else {
            eprintln!("no compute-capable GPU adapter; skipping");
            return;
        };
        let context = GpuContext::from_adapter(adapter).unwrap();

        let config = KernelConfig {
            element_count: 1000,
            ..KernelConfig::default()
        };
        let values = write_values(&context, &config).unwrap();
        assert_eq!(values.len(), 1000);
        assert_eq!(first_mismatch(&config, &values), None);
    }
}
