#![cfg_attr(not(windows), allow(dead_code))]

#[cfg(windows)]
mod compile_shader;
#[cfg(windows)]
mod create_device;
#[cfg(windows)]
mod sample;
mod sample_config;
mod triangle;
#[cfg(windows)]
mod window;

use eyre::Result;
use tracing::info;

use sample_config::SampleConfig;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();
    info!("Starting the Direct3D 11 triangle sample");

    run(SampleConfig::default())
}

#[cfg(windows)]
fn run(config: SampleConfig) -> Result<()> {
    use eyre::WrapErr;

    let hwnd = window::create_window(&config)?;
    {
        let sample = sample::Sample::new(hwnd, &config).wrap_err("failed to initialise Direct3D 11")?;
        window::show_window(hwnd);

        while window::pump_messages() {
            sample.render();
        }
    }
    // Every device object is gone by now, so anything reported is a leak.
    sample::report_live_objects();
    Ok(())
}

#[cfg(not(windows))]
fn run(_config: SampleConfig) -> Result<()> {
    eyre::bail!("the Direct3D 11 sample only runs on Windows")
}
