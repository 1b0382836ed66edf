//! Default output device playback (cargo feature `playback`)

use crate::error::CliError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Play a mono buffer on the default output device and block until it has been consumed
///
/// The buffer is duplicated into every output channel. The device must accept
/// `sample_rate`; no rate conversion is done here.
pub fn play(samples: &[f64], sample_rate: u32) -> Result<(), CliError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| CliError::Playback("No audio output device found".to_string()))?;

    let default_config = device
        .default_output_config()
        .map_err(|e| CliError::Playback(format!("Failed to get audio config: {}", e)))?;
    let channels = default_config.channels() as usize;

    let config = cpal::StreamConfig {
        channels: default_config.channels(),
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    info!(
        "Audio: {} @ {}Hz, {} channel(s)",
        device.name().unwrap_or_else(|_| "Unknown".to_string()),
        sample_rate,
        channels
    );

    let waveform: Vec<f32> = samples.iter().map(|&s| s as f32).collect();
    let finished = Arc::new(AtomicBool::new(false));
    let finished_cb = Arc::clone(&finished);
    let mut index = 0;

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let value = waveform.get(index).copied().unwrap_or(0.0);
                    frame.fill(value);
                    index += 1;
                }
                if index >= waveform.len() {
                    finished_cb.store(true, Ordering::Release);
                }
            },
            |err| warn!("Audio stream error: {}", err),
            None,
        )
        .map_err(|e| CliError::Playback(format!("Failed to build audio stream: {}", e)))?;

    stream
        .play()
        .map_err(|e| CliError::Playback(format!("Failed to start audio stream: {}", e)))?;

    while !finished.load(Ordering::Acquire) {
        thread::sleep(Duration::from_millis(100));
    }
    // Let the device drain its last buffer
    thread::sleep(Duration::from_millis(100));
    Ok(())
}
