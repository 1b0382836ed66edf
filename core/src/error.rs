use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModemError {
    #[error("Invalid sample rate: {0} (must be a finite value > 0)")]
    InvalidSampleRate(f64),

    #[error("Invalid {name}: {value} Hz (must be a finite value > 0)")]
    InvalidFrequency { name: &'static str, value: f64 },

    #[error(
        "Bit duration {0}s out of range [{min}, {max}]",
        min = crate::MIN_BIT_DURATION,
        max = crate::MAX_BIT_DURATION
    )]
    BitDurationOutOfRange(f64),

    #[error("Zero samples per bit at {sample_rate} Hz with {bit_duration}s bits")]
    ZeroSamplesPerBit { sample_rate: f64, bit_duration: f64 },

    #[error(
        "Too many samples per bit at {sample_rate} Hz with {bit_duration}s bits (max {max})",
        max = crate::MAX_SAMPLES_PER_BIT
    )]
    TooManySamplesPerBit { sample_rate: f64, bit_duration: f64 },
}

pub type Result<T> = std::result::Result<T, ModemError>;
