use crate::config::ModemConfig;
use crate::tone::ToneGenerator;
use crate::BITS_PER_BYTE;
use log::debug;

/// Binary FSK modulator
///
/// Each byte becomes 8 tone blocks of `samples_per_bit` samples, LSB first.
/// Bit 0 is a tone at `base_freq`, bit 1 a tone at `base_freq + freq_step`.
/// Bytes are laid out in input order with no header or padding, so the
/// output is always `8 * samples_per_bit * data.len()` samples long.
///
/// Tones are deterministic, so both are synthesized once at construction and
/// copied per bit.
#[derive(Debug, Clone)]
pub struct FskModulator {
    config: ModemConfig,
    zero_tone: Vec<f64>,
    one_tone: Vec<f64>,
}

impl FskModulator {
    pub fn new(config: ModemConfig) -> Self {
        let generator = ToneGenerator::new(&config);
        Self {
            zero_tone: generator.generate(config.zero_freq()),
            one_tone: generator.generate(config.one_freq()),
            config,
        }
    }

    pub fn config(&self) -> &ModemConfig {
        &self.config
    }

    /// Tone block for a single bit
    pub fn modulate_bit(&self, bit: bool) -> &[f64] {
        if bit {
            &self.one_tone
        } else {
            &self.zero_tone
        }
    }

    /// Modulate a byte sequence into one contiguous sample buffer
    pub fn modulate(&self, data: &[u8]) -> Vec<f64> {
        let mut samples = Vec::with_capacity(data.len() * self.config.samples_per_byte());

        for &byte in data {
            for bit_idx in 0..BITS_PER_BYTE {
                let bit = (byte >> bit_idx) & 1 == 1;
                samples.extend_from_slice(self.modulate_bit(bit));
            }
        }

        debug!(
            "Modulated {} bytes into {} samples ({} per bit)",
            data.len(),
            samples.len(),
            self.config.samples_per_bit()
        );
        samples
    }
}

impl Default for FskModulator {
    fn default() -> Self {
        Self::new(ModemConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goertzel::Goertzel;

    #[test]
    fn test_empty_input() {
        let modulator = FskModulator::default();
        assert!(modulator.modulate(&[]).is_empty());
    }

    #[test]
    fn test_output_length() {
        let modulator = FskModulator::default();
        for len in [1, 2, 5, 17] {
            let data = vec![0xA5; len];
            assert_eq!(modulator.modulate(&data).len(), 8 * 441 * len);
        }
    }

    #[test]
    fn test_bit_blocks_are_tone_copies() {
        let config = ModemConfig::default();
        let modulator = FskModulator::new(config);
        let generator = ToneGenerator::new(&config);
        let samples = modulator.modulate(&[0x01]);

        let one = generator.generate(1500.0);
        let zero = generator.generate(1000.0);
        let blocks: Vec<&[f64]> = samples.chunks(441).collect();
        assert_eq!(blocks.len(), 8);
        assert_eq!(blocks[0], one.as_slice());
        for block in &blocks[1..] {
            assert_eq!(*block, zero.as_slice());
        }
    }

    #[test]
    fn test_lsb_first_ordering() {
        let config = ModemConfig::default();
        let modulator = FskModulator::new(config);
        let samples = modulator.modulate(&[0b1000_0010]);
        let zero = Goertzel::new(config.zero_freq(), config.sample_rate());
        let one = Goertzel::new(config.one_freq(), config.sample_rate());

        let bits: Vec<bool> = samples
            .chunks(441)
            .map(|block| one.power(block) > zero.power(block))
            .collect();
        assert_eq!(bits, [false, true, false, false, false, false, false, true]);
    }

    #[test]
    fn test_byte_order_preserved() {
        let modulator = FskModulator::default();
        let samples = modulator.modulate(&[0x00, 0xFF]);
        let per_byte = 8 * 441;

        assert_eq!(&samples[..441], modulator.modulate_bit(false));
        assert_eq!(&samples[per_byte..per_byte + 441], modulator.modulate_bit(true));
    }

    #[test]
    fn test_modulator_deterministic() {
        let first = FskModulator::default().modulate(b"Deterministic test");
        let second = FskModulator::default().modulate(b"Deterministic test");
        assert_eq!(first, second);
    }
}
