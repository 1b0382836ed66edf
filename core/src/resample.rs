//! Conditioning for captured audio before demodulation
//!
//! Captures arrive interleaved and at whatever rate the device or file used;
//! the demodulator needs mono samples at the modem's configured rate.

/// Mix interleaved multi-channel audio to mono by averaging each frame
///
/// A trailing incomplete frame is ignored. `channels` of 0 or 1 returns the
/// input unchanged.
pub fn downmix(samples: &[f64], channels: usize) -> Vec<f64> {
    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}

/// Resample audio to a target sample rate using linear interpolation
///
/// # Panics
/// If either rate is not a finite value > 0
///
/// # Example
/// ```
/// use swmodem_core::resample::resample_linear;
///
/// let audio_48k = vec![0.0; 4800];
/// let audio_16k = resample_linear(&audio_48k, 48000.0, 16000.0);
/// assert_eq!(audio_16k.len(), 1600);
/// ```
pub fn resample_linear(samples: &[f64], from_rate: f64, to_rate: f64) -> Vec<f64> {
    assert!(
        from_rate.is_finite() && from_rate > 0.0 && to_rate.is_finite() && to_rate > 0.0,
        "Sample rates must be finite and positive: {} -> {}",
        from_rate,
        to_rate
    );

    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = to_rate / from_rate;
    let new_length = (samples.len() as f64 * ratio).ceil() as usize;
    let last = samples.len() - 1;

    (0..new_length)
        .map(|i| {
            let src_idx = i as f64 / ratio;
            let floor = (src_idx.floor() as usize).min(last);
            let fraction = src_idx - floor as f64;

            if floor < last {
                samples[floor] * (1.0 - fraction) + samples[floor + 1] * fraction
            } else {
                samples[last]
            }
        })
        .collect()
}
