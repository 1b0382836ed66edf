//! Software audio modem using binary FSK
//!
//! Bytes are sent LSB-first, one fixed-duration sine tone per bit: `base_freq`
//! for a 0 and `base_freq + freq_step` for a 1. Recovery compares Goertzel power
//! at the two frequencies over each bit window.

pub mod config;
pub mod demodulator;
pub mod error;
pub mod goertzel;
pub mod modem;
pub mod modulator;
pub mod resample;
pub mod tone;

pub use config::ModemConfig;
pub use demodulator::{FskDemodulator, PartialBytePolicy};
pub use error::{ModemError, Result};
pub use goertzel::{goertzel_power, Goertzel};
pub use modem::Modem;
pub use modulator::FskModulator;
pub use tone::ToneGenerator;

// Default modem configuration
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;
pub const DEFAULT_BASE_FREQ: f64 = 1000.0; // Hz, bit 0
pub const DEFAULT_FREQ_STEP: f64 = 500.0; // Hz, added for bit 1

// Bit timing
pub const DEFAULT_BIT_DURATION: f64 = 0.01; // 441 samples at 44.1kHz
pub const MIN_BIT_DURATION: f64 = 0.000454; // ~20 samples at 44.1kHz
pub const MAX_BIT_DURATION: f64 = 0.1; // 4410 samples at 44.1kHz

pub const BITS_PER_BYTE: usize = 8;

/// Upper bound on samples per bit (~10.5 MHz sample rate at `MAX_BIT_DURATION`)
pub const MAX_SAMPLES_PER_BIT: usize = 1 << 20;
