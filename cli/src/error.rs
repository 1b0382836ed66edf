use swmodem_core::ModemError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unsupported WAV format: {bits}-bit {format:?}")]
    UnsupportedWavFormat {
        bits: u16,
        format: hound::SampleFormat,
    },

    #[error("WAV file declares an invalid sample rate of {0} Hz")]
    InvalidWavSampleRate(u32),

    #[error("Sample rate {0} Hz is not a whole number and cannot be written to WAV")]
    NonIntegerSampleRate(f64),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Modem error: {0}")]
    Modem(#[from] ModemError),

    #[error("Audio playback error: {0}")]
    Playback(String),
}
