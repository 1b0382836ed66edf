use crate::error::{ModemError, Result};
use crate::{
    BITS_PER_BYTE, DEFAULT_BASE_FREQ, DEFAULT_BIT_DURATION, DEFAULT_FREQ_STEP,
    DEFAULT_SAMPLE_RATE, MAX_BIT_DURATION, MAX_SAMPLES_PER_BIT, MIN_BIT_DURATION,
};
use log::warn;

/// Immutable modem configuration shared by the modulator and demodulator
///
/// Both ends must agree on every field: bit boundaries in a sample buffer are
/// purely positional, derived from `samples_per_bit`.
///
/// Nyquist validity of the two tones and their separation relative to the bit
/// window's frequency resolution (~1/`bit_duration`) are not enforced. They are
/// reported with a warning at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModemConfig {
    sample_rate: f64,
    base_freq: f64,
    freq_step: f64,
    bit_duration: f64,
    samples_per_bit: usize,
}

impl ModemConfig {
    pub fn new(sample_rate: f64, base_freq: f64, freq_step: f64, bit_duration: f64) -> Result<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(ModemError::InvalidSampleRate(sample_rate));
        }
        check_frequency("base frequency", base_freq)?;
        check_frequency("frequency step", freq_step)?;

        if !(MIN_BIT_DURATION..=MAX_BIT_DURATION).contains(&bit_duration) {
            return Err(ModemError::BitDurationOutOfRange(bit_duration));
        }

        let exact_samples = (sample_rate * bit_duration).floor();
        if exact_samples > MAX_SAMPLES_PER_BIT as f64 {
            return Err(ModemError::TooManySamplesPerBit {
                sample_rate,
                bit_duration,
            });
        }

        let samples_per_bit = exact_samples as usize;
        if samples_per_bit == 0 {
            return Err(ModemError::ZeroSamplesPerBit {
                sample_rate,
                bit_duration,
            });
        }

        let config = Self {
            sample_rate,
            base_freq,
            freq_step,
            bit_duration,
            samples_per_bit,
        };
        config.warn_on_contract_risks();
        Ok(config)
    }

    /// Same as [`ModemConfig::new`] with [`DEFAULT_BIT_DURATION`]
    pub fn with_default_bit_duration(sample_rate: f64, base_freq: f64, freq_step: f64) -> Result<Self> {
        Self::new(sample_rate, base_freq, freq_step, DEFAULT_BIT_DURATION)
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn base_freq(&self) -> f64 {
        self.base_freq
    }

    pub fn freq_step(&self) -> f64 {
        self.freq_step
    }

    pub fn bit_duration(&self) -> f64 {
        self.bit_duration
    }

    /// floor(sample_rate * bit_duration), always >= 1
    pub fn samples_per_bit(&self) -> usize {
        self.samples_per_bit
    }

    pub fn samples_per_byte(&self) -> usize {
        self.samples_per_bit * BITS_PER_BYTE
    }

    /// Tone frequency for bit value 0
    pub fn zero_freq(&self) -> f64 {
        self.base_freq
    }

    /// Tone frequency for bit value 1
    pub fn one_freq(&self) -> f64 {
        self.base_freq + self.freq_step
    }

    pub fn frequency_for_bit(&self, bit: bool) -> f64 {
        if bit {
            self.one_freq()
        } else {
            self.zero_freq()
        }
    }

    fn warn_on_contract_risks(&self) {
        let nyquist = self.sample_rate / 2.0;
        if self.one_freq() >= nyquist {
            warn!(
                "Bit-1 tone {} Hz is at or above Nyquist ({} Hz); decoding will be unreliable",
                self.one_freq(),
                nyquist
            );
        }

        let resolution = 1.0 / self.bit_duration;
        if self.freq_step < resolution {
            warn!(
                "Frequency step {} Hz is below the bit window resolution (~{:.1} Hz)",
                self.freq_step, resolution
            );
        }
    }
}

impl Default for ModemConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            base_freq: DEFAULT_BASE_FREQ,
            freq_step: DEFAULT_FREQ_STEP,
            bit_duration: DEFAULT_BIT_DURATION,
            samples_per_bit: (DEFAULT_SAMPLE_RATE * DEFAULT_BIT_DURATION).floor() as usize,
        }
    }
}

fn check_frequency(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModemError::InvalidFrequency { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModemConfig::default();
        assert_eq!(config.sample_rate(), 44100.0);
        assert_eq!(config.base_freq(), 1000.0);
        assert_eq!(config.freq_step(), 500.0);
        assert_eq!(config.bit_duration(), DEFAULT_BIT_DURATION);
        assert_eq!(config.samples_per_bit(), 441);
        assert_eq!(config.samples_per_byte(), 441 * 8);
    }

    #[test]
    fn test_default_matches_validated_constructor() {
        let built = ModemConfig::with_default_bit_duration(44100.0, 1000.0, 500.0).unwrap();
        assert_eq!(built, ModemConfig::default());
    }

    #[test]
    fn test_bit_frequencies() {
        let config = ModemConfig::default();
        assert_eq!(config.zero_freq(), 1000.0);
        assert_eq!(config.one_freq(), 1500.0);
        assert_eq!(config.frequency_for_bit(false), 1000.0);
        assert_eq!(config.frequency_for_bit(true), 1500.0);
    }

    #[test]
    fn test_samples_per_bit_truncates() {
        // 44100 * 0.000454 = 20.02
        let config = ModemConfig::new(44100.0, 1000.0, 500.0, MIN_BIT_DURATION).unwrap();
        assert_eq!(config.samples_per_bit(), 20);

        // 8000 * 0.0015 = 12
        let config = ModemConfig::new(8000.0, 1000.0, 1000.0, 0.0015).unwrap();
        assert_eq!(config.samples_per_bit(), 12);
    }

    #[test]
    fn test_bit_duration_bounds_inclusive() {
        assert!(ModemConfig::new(44100.0, 1000.0, 500.0, MIN_BIT_DURATION).is_ok());
        assert!(ModemConfig::new(44100.0, 1000.0, 500.0, MAX_BIT_DURATION).is_ok());
    }

    #[test]
    fn test_bit_duration_out_of_range() {
        for duration in [0.0, -0.01, 0.0004, 0.2, f64::NAN, f64::INFINITY] {
            let result = ModemConfig::new(44100.0, 1000.0, 500.0, duration);
            assert!(
                matches!(result, Err(ModemError::BitDurationOutOfRange(_))),
                "duration {} should be rejected, got {:?}",
                duration,
                result
            );
        }
    }

    #[test]
    fn test_invalid_sample_rate() {
        for rate in [0.0, -44100.0, f64::NAN, f64::INFINITY] {
            let result = ModemConfig::new(rate, 1000.0, 500.0, DEFAULT_BIT_DURATION);
            assert!(matches!(result, Err(ModemError::InvalidSampleRate(_))));
        }
    }

    #[test]
    fn test_invalid_frequencies() {
        let result = ModemConfig::new(44100.0, 0.0, 500.0, DEFAULT_BIT_DURATION);
        assert!(matches!(
            result,
            Err(ModemError::InvalidFrequency { name: "base frequency", .. })
        ));

        let result = ModemConfig::new(44100.0, 1000.0, -500.0, DEFAULT_BIT_DURATION);
        assert!(matches!(
            result,
            Err(ModemError::InvalidFrequency { name: "frequency step", .. })
        ));

        let result = ModemConfig::new(44100.0, 1000.0, 0.0, DEFAULT_BIT_DURATION);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_samples_per_bit_rejected() {
        // 1000 * 0.000454 = 0.454 -> 0 samples
        let result = ModemConfig::new(1000.0, 100.0, 100.0, MIN_BIT_DURATION);
        assert_eq!(
            result,
            Err(ModemError::ZeroSamplesPerBit {
                sample_rate: 1000.0,
                bit_duration: MIN_BIT_DURATION,
            })
        );
    }

    #[test]
    fn test_huge_samples_per_bit_rejected() {
        let result = ModemConfig::new(1e300, 1000.0, 500.0, DEFAULT_BIT_DURATION);
        assert_eq!(
            result,
            Err(ModemError::TooManySamplesPerBit {
                sample_rate: 1e300,
                bit_duration: DEFAULT_BIT_DURATION,
            })
        );

        // One sample past the bound at 0.1s bits
        let rate = (MAX_SAMPLES_PER_BIT as f64 + 1.0) * 10.0;
        let result = ModemConfig::new(rate, 1000.0, 500.0, MAX_BIT_DURATION);
        assert!(matches!(result, Err(ModemError::TooManySamplesPerBit { .. })));
    }

    #[test]
    fn test_samples_per_bit_at_bound_accepted() {
        // 2^20 samples per bit; samples_per_byte stays well inside usize
        let rate = MAX_SAMPLES_PER_BIT as f64 * 10.0;
        let config = ModemConfig::new(rate, 1000.0, 500.0, MAX_BIT_DURATION).unwrap();
        assert!(config.samples_per_bit() <= MAX_SAMPLES_PER_BIT);
        assert_eq!(config.samples_per_byte(), config.samples_per_bit() * BITS_PER_BYTE);
    }

    #[test]
    fn test_nyquist_is_not_enforced() {
        // 20 kHz tone at 16 kHz is a caller problem, not a construction failure
        let config = ModemConfig::new(16000.0, 19000.0, 1000.0, DEFAULT_BIT_DURATION);
        assert!(config.is_ok());
    }
}
