use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use regex::Regex;
use ringbuf::HeapRb;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

const OUTPUT_RING_CAP: usize = 48_000 * 4;

/// Open the default (or regex-selected) output device and start a stream
/// that plays sample chunks received on `rx`.
///
/// Chunks are staged through a heap ring buffer and written mono to every
/// channel of the device; when the ring runs dry the stream plays silence.
/// Returns the live stream together with its sample rate so callers can
/// synthesize at the device rate. The stream stops when dropped.
pub fn start_default_output(
    rx: Receiver<Vec<f32>>,
    output_level: f32,
    device_regex: Option<&str>,
) -> Result<(cpal::Stream, u32), Box<dyn std::error::Error>> {
    let host = cpal::default_host();
    let device = select_output_device(&host, device_regex)?;
    let config = device.default_output_config()?;
    let sample_format = config.sample_format();
    let config: cpal::StreamConfig = config.into();
    let sample_rate_hz = config.sample_rate.0;
    let channels = config.channels as usize;

    let ring = HeapRb::<f32>::new(OUTPUT_RING_CAP);
    let (mut producer, mut consumer) = ring.split();

    let err_fn = |err| eprintln!("audio stream error: {}", err);

    let mut pending: VecDeque<f32> = VecDeque::new();

    let stream = match sample_format {
        cpal::SampleFormat::F32 => device.build_output_stream(
            &config,
            move |data: &mut [f32], _| {
                while let Some(sample) = pending.front().copied() {
                    if producer.push(sample).is_ok() {
                        pending.pop_front();
                    } else {
                        break;
                    }
                }

                while let Ok(chunk) = rx.try_recv() {
                    for sample in chunk {
                        pending.push_back(sample);
                    }
                }

                for frame in data.chunks_mut(channels) {
                    let sample = consumer.pop().unwrap_or(0.0) * output_level;
                    for chan in frame.iter_mut() {
                        *chan = sample;
                    }
                }
            },
            err_fn,
            None,
        )?,
        _ => return Err("unsupported sample format (expected f32)".into()),
    };

    stream.play()?;
    Ok((stream, sample_rate_hz))
}

fn select_output_device(
    host: &cpal::Host,
    device_regex: Option<&str>,
) -> Result<cpal::Device, Box<dyn std::error::Error>> {
    if let Some(pattern) = device_regex {
        let re = Regex::new(pattern)?;
        for dev in host.output_devices()? {
            let name = dev.name().unwrap_or_else(|_| "<unknown>".to_string());
            if re.is_match(&name) {
                return Ok(dev);
            }
        }
        return Err("no output device matched regex".into());
    }

    host.default_output_device()
        .ok_or_else(|| "no default output device available".into())
}
