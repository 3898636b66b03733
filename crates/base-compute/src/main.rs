mod gpu_context;
mod kernel;
mod kernel_config;
mod write_values;

use eyre::Result;
use eyre::WrapErr;
use tracing::info;

use gpu_context::GpuContext;
use kernel::first_mismatch;
use kernel_config::KernelConfig;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();

    let config = KernelConfig::default();
    let context = GpuContext::new()?;
    info!(
        "Using {} for the write_value kernel",
        context.adapter.get_info().name
    );

    let values = write_values::write_values(&context, &config).wrap_err("kernel run failed")?;
    if let Some(mismatch) = first_mismatch(&config, &values) {
        eyre::bail!("This program failed: {}", mismatch);
    }

    info!("This program ran successfully.");
    Ok(())
}
