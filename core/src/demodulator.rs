use crate::config::ModemConfig;
use crate::goertzel::Goertzel;
use crate::BITS_PER_BYTE;
use log::{debug, trace};

/// What to do with a trailing byte that has fewer than 8 complete bit windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialBytePolicy {
    /// Keep the byte; bits without a complete window are 0
    #[default]
    PadWithZeros,
    /// Discard the incomplete trailing byte
    Drop,
}

/// Binary FSK demodulator
///
/// The signal is split positionally into byte blocks of `8 * samples_per_bit`
/// samples, starting at sample 0. For each complete bit window the Goertzel
/// power at the bit-1 frequency is compared against the bit-0 frequency; the
/// bit is 1 only when the bit-1 power is strictly greater, so ties decode as 0.
///
/// A final partial block stops at the first incomplete bit window. With
/// [`PartialBytePolicy::PadWithZeros`] the output has
/// `ceil(signal.len() / (8 * samples_per_bit))` bytes.
#[derive(Debug, Clone)]
pub struct FskDemodulator {
    config: ModemConfig,
    zero_filter: Goertzel,
    one_filter: Goertzel,
    policy: PartialBytePolicy,
}

impl FskDemodulator {
    pub fn new(config: ModemConfig) -> Self {
        Self::with_policy(config, PartialBytePolicy::default())
    }

    pub fn with_policy(config: ModemConfig, policy: PartialBytePolicy) -> Self {
        Self {
            zero_filter: Goertzel::new(config.zero_freq(), config.sample_rate()),
            one_filter: Goertzel::new(config.one_freq(), config.sample_rate()),
            config,
            policy,
        }
    }

    pub fn config(&self) -> &ModemConfig {
        &self.config
    }

    pub fn policy(&self) -> PartialBytePolicy {
        self.policy
    }

    /// Number of bytes `demodulate` returns for a signal of `signal_len` samples
    pub fn expected_len(&self, signal_len: usize) -> usize {
        let per_byte = self.config.samples_per_byte();
        match self.policy {
            PartialBytePolicy::PadWithZeros => signal_len.div_ceil(per_byte),
            PartialBytePolicy::Drop => signal_len / per_byte,
        }
    }

    /// Decide one bit from the window starting at `bit_start`
    ///
    /// # Panics
    /// If `bit_start + samples_per_bit` exceeds `signal.len()`.
    pub fn decide_bit(&self, signal: &[f64], bit_start: usize) -> bool {
        let samples_per_bit = self.config.samples_per_bit();
        let power_zero = self.zero_filter.power_at(signal, bit_start, samples_per_bit);
        let power_one = self.one_filter.power_at(signal, bit_start, samples_per_bit);
        trace!(
            "bit @{}: power_zero={:.3} power_one={:.3}",
            bit_start,
            power_zero,
            power_one
        );
        power_one > power_zero
    }

    /// Recover bytes from a sample buffer
    pub fn demodulate(&self, signal: &[f64]) -> Vec<u8> {
        let samples_per_bit = self.config.samples_per_bit();
        let samples_per_byte = self.config.samples_per_byte();
        let mut data = Vec::with_capacity(self.expected_len(signal.len()));

        for byte_start in (0..signal.len()).step_by(samples_per_byte) {
            let mut byte = 0u8;
            let mut complete_bits = 0;

            for bit_idx in 0..BITS_PER_BYTE {
                let bit_start = byte_start + bit_idx * samples_per_bit;
                if bit_start + samples_per_bit > signal.len() {
                    break;
                }
                if self.decide_bit(signal, bit_start) {
                    byte |= 1 << bit_idx;
                }
                complete_bits += 1;
            }

            if complete_bits < BITS_PER_BYTE {
                debug!(
                    "Trailing byte has {} of {} complete bit windows ({:?})",
                    complete_bits, BITS_PER_BYTE, self.policy
                );
                if self.policy == PartialBytePolicy::Drop {
                    break;
                }
            }
            data.push(byte);
        }

        debug!(
            "Demodulated {} samples into {} bytes",
            signal.len(),
            data.len()
        );
        data
    }
}

impl Default for FskDemodulator {
    fn default() -> Self {
        Self::new(ModemConfig::default())
    }
}
