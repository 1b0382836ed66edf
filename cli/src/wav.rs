use crate::error::CliError;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;
use swmodem_core::resample::downmix;

/// Mono capture read from a WAV file
pub struct WavCapture {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Write mono samples as 16-bit PCM, or 32-bit float when `float` is set
pub fn write_wav(path: &Path, samples: &[f64], sample_rate: f64, float: bool) -> Result<(), CliError> {
    if sample_rate.fract() != 0.0 || sample_rate > u32::MAX as f64 {
        return Err(CliError::NonIntegerSampleRate(sample_rate));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: sample_rate as u32,
        bits_per_sample: if float { 32 } else { 16 },
        sample_format: if float { SampleFormat::Float } else { SampleFormat::Int },
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        // Clamp to [-1.0, 1.0] so full-scale tones do not wrap
        let clamped = sample.clamp(-1.0, 1.0);
        if float {
            writer.write_sample(clamped as f32)?;
        } else {
            writer.write_sample((clamped * 32767.0) as i16)?;
        }
    }
    writer.finalize()?;
    Ok(())
}

/// Read a 16-bit PCM or 32-bit float WAV file and mix it down to mono
pub fn read_wav(path: &Path) -> Result<WavCapture, CliError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    check_capture_rate(spec.sample_rate)?;

    let interleaved: Vec<f64> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|s| s as f64 / 32768.0))
            .collect::<Result<_, _>>()?,
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        (format, bits) => return Err(CliError::UnsupportedWavFormat { bits, format }),
    };

    Ok(WavCapture {
        samples: downmix(&interleaved, spec.channels as usize),
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

/// A capture rate of 0 Hz cannot be resampled or demodulated
fn check_capture_rate(sample_rate: u32) -> Result<(), CliError> {
    if sample_rate == 0 {
        return Err(CliError::InvalidWavSampleRate(sample_rate));
    }
    Ok(())
}
