mod error;
#[cfg(feature = "playback")]
mod playback;
mod wav;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use log::{debug, info};
use std::io::{self, BufRead};
use std::path::PathBuf;
use swmodem_core::resample::resample_linear;
use swmodem_core::{
    Modem, ModemError, PartialBytePolicy, DEFAULT_BASE_FREQ, DEFAULT_BIT_DURATION, DEFAULT_FREQ_STEP,
    DEFAULT_SAMPLE_RATE,
};

#[derive(Parser)]
#[command(name = "swmodem")]
#[command(about = "Binary FSK software modem: bytes to tones and back")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Modem parameters shared by every subcommand; both ends must use the same values
#[derive(Args, Clone, Copy)]
struct ModemArgs {
    /// Sample rate in Hz (decode defaults to the WAV file's rate)
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Tone frequency for bit 0, in Hz
    #[arg(long, default_value_t = DEFAULT_BASE_FREQ)]
    base_freq: f64,

    /// Offset added to the base frequency for bit 1, in Hz
    #[arg(long, default_value_t = DEFAULT_FREQ_STEP)]
    freq_step: f64,

    /// Seconds per bit
    #[arg(long, default_value_t = DEFAULT_BIT_DURATION)]
    bit_duration: f64,
}

impl ModemArgs {
    fn build(&self, fallback_rate: f64) -> Result<Modem, ModemError> {
        let sample_rate = self.sample_rate.map(f64::from).unwrap_or(fallback_rate);
        Modem::new(sample_rate, self.base_freq, self.freq_step, self.bit_duration)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data to WAV audio file
    Encode {
        /// Input binary file
        #[arg(value_name = "INPUT.BIN")]
        input: PathBuf,

        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,

        /// Write 32-bit float samples instead of 16-bit PCM
        #[arg(long)]
        float: bool,

        #[command(flatten)]
        modem: ModemArgs,
    },

    /// Decode WAV audio file to binary data
    Decode {
        /// Input WAV file
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,

        /// Output binary file
        #[arg(value_name = "OUTPUT.BIN")]
        output: PathBuf,

        /// Discard a trailing byte with missing bit windows instead of zero-padding it
        #[arg(long)]
        drop_partial: bool,

        #[command(flatten)]
        modem: ModemArgs,
    },

    /// Modulate text and demodulate it straight back, printing each byte
    Text {
        /// Text to encode (read one line from stdin when omitted)
        text: Option<String>,

        #[command(flatten)]
        modem: ModemArgs,
    },

    /// Play binary data as tones on the default audio output device
    Play {
        /// Input binary file
        #[arg(value_name = "INPUT.BIN")]
        input: PathBuf,

        #[command(flatten)]
        modem: ModemArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            float,
            modem,
        } => encode_command(&input, &output, float, modem)?,
        Commands::Decode {
            input,
            output,
            drop_partial,
            modem,
        } => decode_command(&input, &output, drop_partial, modem)?,
        Commands::Text { text, modem } => text_command(text, modem)?,
        Commands::Play { input, modem } => play_command(&input, modem)?,
    }

    Ok(())
}

fn encode_command(
    input_path: &PathBuf,
    output_path: &PathBuf,
    float: bool,
    args: ModemArgs,
) -> Result<(), CliError> {
    let data = std::fs::read(input_path)?;
    println!("Read {} bytes from {}", data.len(), input_path.display());

    let modem = args.build(DEFAULT_SAMPLE_RATE)?;
    let samples = modem.modulate(&data);
    println!(
        "Encoded to {} audio samples ({} per bit)",
        samples.len(),
        modem.samples_per_bit()
    );

    wav::write_wav(output_path, &samples, modem.sample_rate(), float)?;
    println!(
        "Wrote {} at {} Hz",
        output_path.display(),
        modem.sample_rate()
    );
    Ok(())
}

fn decode_command(
    input_path: &PathBuf,
    output_path: &PathBuf,
    drop_partial: bool,
    args: ModemArgs,
) -> Result<(), CliError> {
    let capture = wav::read_wav(input_path)?;
    println!(
        "Read WAV: {} Hz, {} channels, {} samples",
        capture.sample_rate,
        capture.channels,
        capture.samples.len()
    );

    let wav_rate = f64::from(capture.sample_rate);
    let policy = if drop_partial {
        PartialBytePolicy::Drop
    } else {
        PartialBytePolicy::PadWithZeros
    };
    let modem = args.build(wav_rate)?.with_partial_byte_policy(policy);

    let samples = if modem.sample_rate() != wav_rate {
        info!("Resampling {} Hz capture to {} Hz", wav_rate, modem.sample_rate());
        resample_linear(&capture.samples, wav_rate, modem.sample_rate())
    } else {
        capture.samples
    };

    let data = modem.demodulate(&samples);
    println!("Decoded {} bytes", data.len());

    std::fs::write(output_path, &data)?;
    println!("Wrote {} bytes to {}", data.len(), output_path.display());
    Ok(())
}

fn text_command(text: Option<String>, args: ModemArgs) -> Result<(), CliError> {
    let text = match text {
        Some(text) => text,
        None => {
            println!("input string to encode: ");
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let modem = args.build(DEFAULT_SAMPLE_RATE)?;
    let samples = modem.modulate(text.as_bytes());
    println!("Generated {} audio samples.", samples.len());

    let decoded = modem.demodulate(&samples);
    debug!("Decoded {} bytes from {} samples", decoded.len(), samples.len());
    println!("Decoded data:");
    for byte in &decoded {
        println!("0x{:02x}", byte);
    }
    println!("As text: {}", String::from_utf8_lossy(&decoded));
    Ok(())
}

fn play_command(input_path: &PathBuf, args: ModemArgs) -> Result<(), CliError> {
    let data = std::fs::read(input_path)?;
    let modem = args.build(DEFAULT_SAMPLE_RATE)?;
    let samples = modem.modulate(&data);
    let sample_rate = modem.sample_rate();

    println!(
        "Playing {} bytes as {} samples ({:.2}s)",
        data.len(),
        samples.len(),
        samples.len() as f64 / sample_rate
    );
    play_samples(&samples, sample_rate as u32)?;
    println!("Playback complete");
    Ok(())
}

#[cfg(feature = "playback")]
fn play_samples(samples: &[f64], sample_rate: u32) -> Result<(), CliError> {
    playback::play(samples, sample_rate)
}

#[cfg(not(feature = "playback"))]
fn play_samples(_samples: &[f64], _sample_rate: u32) -> Result<(), CliError> {
    Err(CliError::Playback(
        "swmodem was built without the `playback` feature".to_string(),
    ))
}
