#![cfg_attr(not(windows), allow(dead_code))]

#[cfg(windows)]
mod adapter_utils;
#[cfg(windows)]
mod d3d12_hello_triangle;
#[cfg(windows)]
mod debug_messages;
#[cfg(windows)]
mod dx_sample;
mod fence_timeline;
mod render_target_slots;
mod sample_config;
#[cfg(windows)]
mod sample_runner;
mod triangle;

use eyre::Result;
use tracing::info;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();
    info!("Starting the Direct3D 12 triangle sample");

    run()
}

#[cfg(windows)]
fn run() -> Result<()> {
    sample_runner::run_sample::<d3d12_hello_triangle::sample::Sample>()
}

#[cfg(not(windows))]
fn run() -> Result<()> {
    eyre::bail!("the Direct3D 12 sample only runs on Windows")
}
