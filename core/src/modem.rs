use crate::config::ModemConfig;
use crate::demodulator::{FskDemodulator, PartialBytePolicy};
use crate::error::Result;
use crate::modulator::FskModulator;

/// Software FSK modem pairing a modulator and demodulator over one configuration
///
/// Holds no mutable state: `modulate` and `demodulate` take `&self`, allocate
/// their own buffers and can be called from several threads at once.
#[derive(Debug, Clone)]
pub struct Modem {
    modulator: FskModulator,
    demodulator: FskDemodulator,
}

impl Modem {
    pub fn new(sample_rate: f64, base_freq: f64, freq_step: f64, bit_duration: f64) -> Result<Self> {
        let config = ModemConfig::new(sample_rate, base_freq, freq_step, bit_duration)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: ModemConfig) -> Self {
        Self {
            modulator: FskModulator::new(config),
            demodulator: FskDemodulator::new(config),
        }
    }

    /// Select how a trailing byte with missing bit windows is handled
    pub fn with_partial_byte_policy(mut self, policy: PartialBytePolicy) -> Self {
        self.demodulator = FskDemodulator::with_policy(*self.config(), policy);
        self
    }

    pub fn config(&self) -> &ModemConfig {
        self.modulator.config()
    }

    pub fn sample_rate(&self) -> f64 {
        self.config().sample_rate()
    }

    pub fn base_freq(&self) -> f64 {
        self.config().base_freq()
    }

    pub fn freq_step(&self) -> f64 {
        self.config().freq_step()
    }

    pub fn bit_duration(&self) -> f64 {
        self.config().bit_duration()
    }

    pub fn samples_per_bit(&self) -> usize {
        self.config().samples_per_bit()
    }

    pub fn partial_byte_policy(&self) -> PartialBytePolicy {
        self.demodulator.policy()
    }

    /// Number of samples `modulate` produces for `num_bytes` bytes
    pub fn signal_len(&self, num_bytes: usize) -> usize {
        num_bytes * self.config().samples_per_byte()
    }

    pub fn modulate(&self, data: &[u8]) -> Vec<f64> {
        self.modulator.modulate(data)
    }

    pub fn demodulate(&self, signal: &[f64]) -> Vec<u8> {
        self.demodulator.demodulate(signal)
    }
}

impl Default for Modem {
    fn default() -> Self {
        Self::from_config(ModemConfig::default())
    }
}
