use crate::config::ModemConfig;
use std::f64::consts::PI;

/// Sine tone generator producing one bit's worth of samples
///
/// Sample `i` of a tone at `f` Hz is `sin(2π·f·i / sample_rate)`. Every tone
/// starts at phase zero, so a modulated buffer is not phase-continuous across
/// bit boundaries.
#[derive(Debug, Clone, Copy)]
pub struct ToneGenerator {
    sample_rate: f64,
    samples_per_tone: usize,
}

impl ToneGenerator {
    pub fn new(config: &ModemConfig) -> Self {
        Self {
            sample_rate: config.sample_rate(),
            samples_per_tone: config.samples_per_bit(),
        }
    }

    /// Number of samples in every generated tone
    pub fn len(&self) -> usize {
        self.samples_per_tone
    }

    pub fn is_empty(&self) -> bool {
        self.samples_per_tone == 0
    }

    /// Generate a tone block at `frequency` Hz
    ///
    /// Any real frequency is accepted; keeping it below Nyquist is up to the caller.
    pub fn generate(&self, frequency: f64) -> Vec<f64> {
        let angular_freq = 2.0 * PI * frequency;
        (0..self.samples_per_tone)
            .map(|i| (angular_freq * i as f64 / self.sample_rate).sin())
            .collect()
    }
}
