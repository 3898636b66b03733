#![cfg_attr(not(windows), allow(dead_code))]

#[cfg(windows)]
mod draw_frame;
#[cfg(windows)]
mod gl_context;
mod pixel_format;
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
    info!("Starting the OpenGL triangle sample");

    run(SampleConfig::default())
}

#[cfg(windows)]
fn run(config: SampleConfig) -> Result<()> {
    use eyre::WrapErr;

    use gl_context::GlContext;
    use pixel_format::PixelFormatRequest;

    let hwnd = window::create_window(&config)?;
    let context = GlContext::create(hwnd, &PixelFormatRequest::default())
        .wrap_err("failed to initialise OpenGL")?;
    context.log_version_strings();

    window::show_window(hwnd);

    while window::pump_messages() {
        draw_frame::draw_frame(&config);
        context.swap_buffers();
    }

    drop(context);
    info!("OpenGL context released");
    Ok(())
}

#[cfg(not(windows))]
fn run(_config: SampleConfig) -> Result<()> {
    eyre::bail!("the OpenGL sample only runs on Windows")
}
