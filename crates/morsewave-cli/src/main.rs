use clap::Parser;
use morsewave_ask::{synthesize, text_to_morse, AskModulator, SignalParams};
use std::path::PathBuf;
use std::time::Duration;

const OUTPUT_LEVEL_DB_DOWN: f32 = 20.0;
const DRAIN_MARGIN_SECS: f32 = 0.5;

#[derive(Parser, Debug)]
#[command(name = "morsewave-cli", about = "Text to Morse ASK waveform")]
struct Args {
    /// Text to encode.
    text: String,

    /// Write the waveform to a 16-bit mono WAV file.
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Play the waveform on the default audio output.
    #[arg(long)]
    play: bool,

    /// Use the audible carrier (700 Hz at 48 kHz) for --wav instead of the
    /// plotting defaults.
    #[arg(long)]
    audible: bool,

    /// Regex to select the output audio device.
    #[arg(long)]
    device: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.text.trim().is_empty() {
        return Err("enter text to transmit".into());
    }

    let morse = text_to_morse(args.text.trim());
    println!("{morse}");

    if let Some(path) = &args.wav {
        let params = if args.audible {
            SignalParams::audible(48_000.0)
        } else {
            SignalParams::default()
        };
        let envelope = synthesize(&morse, &params);
        let wave = AskModulator::new(&params).modulate(&envelope);
        write_wav(path, &wave.samples, params.sample_rate_hz as u32)?;
    }

    if args.play {
        play(&morse, args.device.as_deref())?;
    }

    Ok(())
}

fn write_wav(
    path: &PathBuf,
    samples: &[f32],
    sample_rate_hz: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in samples {
        writer.write_sample((sample * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

fn play(morse: &str, device_regex: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = std::sync::mpsc::channel();
    let level = 10.0_f32.powf(-OUTPUT_LEVEL_DB_DOWN / 20.0);
    let (_stream, device_rate_hz) =
        morsewave_audio::device::start_default_output(rx, level, device_regex)?;

    // Synthesize at the device rate; the 10 Hz plotting carrier is inaudible.
    let params = SignalParams::audible(device_rate_hz as f32);
    let envelope = synthesize(morse, &params);
    let wave = AskModulator::new(&params).modulate(&envelope);
    let secs = wave.samples.len() as f32 / params.sample_rate_hz + DRAIN_MARGIN_SECS;
    tx.send(wave.samples)?;

    std::thread::sleep(Duration::from_secs_f32(secs));
    Ok(())
}
