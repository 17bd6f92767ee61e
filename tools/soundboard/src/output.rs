//! Audio output using cpal and ring buffer

use anyhow::{Context, Result, anyhow, bail};
use brainrot_synth::audio::SampleBuffer;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::{
    HeapRb,
    traits::{Consumer, Producer, Split},
};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Ring buffer length in seconds of device audio
const RING_BUFFER_SECONDS: f32 = 0.5;

/// How long to sleep while the ring is full
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Extra wait past the clip's end so the device flushes its own buffer
const TAIL: Duration = Duration::from_millis(100);

/// Audio output on the default device
pub struct AudioOutput {
    /// Producer side of the ring buffer (main thread writes here)
    producer: ringbuf::HeapProd<f32>,
    /// The cpal stream (kept alive for the duration)
    _stream: cpal::Stream,
    /// Device sample rate
    sample_rate: u32,
    /// Device channel count
    channels: u16,
}

impl AudioOutput {
    /// Open the default output device
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("No audio output device available"))?;
        info!(
            "Audio device: {}",
            device.name().unwrap_or_else(|_| "(no name)".to_string())
        );

        let config = device
            .default_output_config()
            .context("Failed to get default output config")?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels();

        let capacity = (sample_rate as f32 * RING_BUFFER_SECONDS) as usize * channels as usize;
        let ring = HeapRb::<f32>::new(capacity.max(1024));
        let (producer, mut consumer) = ring.split();

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => device.build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let popped = consumer.pop_slice(data);
                    data[popped..].fill(0.0);
                },
                |err| error!("Audio stream error: {}", err),
                None,
            ),
            cpal::SampleFormat::I16 => {
                let mut temp_buffer: Vec<f32> = vec![0.0; 4096];
                device.build_output_stream(
                    &config.into(),
                    move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
                        if temp_buffer.len() < data.len() {
                            temp_buffer.resize(data.len(), 0.0);
                        }
                        let popped = consumer.pop_slice(&mut temp_buffer[..data.len()]);
                        for (out, &f) in data.iter_mut().zip(&temp_buffer[..popped]) {
                            *out = (f * 32767.0).clamp(-32768.0, 32767.0) as i16;
                        }
                        data[popped..].fill(0);
                    },
                    |err| error!("Audio stream error: {}", err),
                    None,
                )
            }
            cpal::SampleFormat::U16 => {
                let mut temp_buffer: Vec<f32> = vec![0.0; 4096];
                device.build_output_stream(
                    &config.into(),
                    move |data: &mut [u16], _: &cpal::OutputCallbackInfo| {
                        if temp_buffer.len() < data.len() {
                            temp_buffer.resize(data.len(), 0.0);
                        }
                        let popped = consumer.pop_slice(&mut temp_buffer[..data.len()]);
                        for (out, &f) in data.iter_mut().zip(&temp_buffer[..popped]) {
                            *out = (f * 32767.0 + 32768.0).clamp(0.0, 65535.0) as u16;
                        }
                        // 0x8000 is silence for u16 audio
                        data[popped..].fill(32768);
                    },
                    |err| error!("Audio stream error: {}", err),
                    None,
                )
            }
            other => bail!("Unsupported sample format: {:?}", other),
        }
        .context("Failed to build audio stream")?;

        stream.play().context("Failed to play audio stream")?;

        debug!(sample_rate, channels, "Audio stream started");

        Ok(Self {
            producer,
            _stream: stream,
            sample_rate,
            channels,
        })
    }

    /// Play a clip to completion, blocking the calling thread
    pub fn play(&mut self, clip: &SampleBuffer, volume: f32) {
        let samples = prepare(clip, self.sample_rate, self.channels, volume);
        debug!(
            frames = clip.len(),
            device_samples = samples.len(),
            "Queueing clip"
        );

        let frames = samples.len() / self.channels.max(1) as usize;
        let playback = Duration::from_secs_f64(frames as f64 / self.sample_rate as f64);
        let started = Instant::now();

        let mut written = 0;
        while written < samples.len() {
            written += self.producer.push_slice(&samples[written..]);
            if written < samples.len() {
                thread::sleep(POLL_INTERVAL);
            }
        }

        // The callback drains in real time, so the clip ends `playback` after the first push
        thread::sleep((started + playback + TAIL).saturating_duration_since(Instant::now()));
    }
}

/// Convert a mono clip to interleaved device samples at the device rate
fn prepare(clip: &SampleBuffer, device_rate: u32, channels: u16, volume: f32) -> Vec<f32> {
    let mono = resample_linear(&clip.to_f32(), clip.sample_rate(), device_rate);
    let channels = channels.max(1) as usize;

    let mut interleaved = Vec::with_capacity(mono.len() * channels);
    for sample in mono {
        let sample = sample * volume;
        interleaved.extend(std::iter::repeat_n(sample, channels));
    }
    interleaved
}

/// Resample audio using linear interpolation
///
/// Not as high quality as sinc resampling, but fast and adequate for short
/// effects.
pub fn resample_linear(samples: &[f32], source_rate: u32, target_rate: u32) -> Vec<f32> {
    if samples.is_empty() || source_rate == target_rate || source_rate == 0 || target_rate == 0 {
        return samples.to_vec();
    }

    let ratio = source_rate as f64 / target_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let src_pos = i as f64 * ratio;
        let src_idx = src_pos.floor() as usize;
        let frac = (src_pos - src_idx as f64) as f32;

        let sample = match (samples.get(src_idx), samples.get(src_idx + 1)) {
            (Some(&s1), Some(&s2)) => s1 + (s2 - s1) * frac,
            (Some(&s1), None) => s1,
            _ => *samples.last().unwrap_or(&0.0),
        };
        output.push(sample);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_same_rate() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(resample_linear(&samples, 22050, 22050), samples);
    }

    #[test]
    fn test_resample_upsample_doubles_length() {
        let samples = vec![0.0, 1.0, 0.0, -1.0];
        let out = resample_linear(&samples, 22050, 44100);
        assert_eq!(out.len(), 8);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.5).abs() < 1e-6);
        assert_eq!(out[2], 1.0);
        assert_eq!(out[7], -1.0);
    }

    #[test]
    fn test_resample_to_48k_length() {
        let samples = vec![0.0; 22050];
        let out = resample_linear(&samples, 22050, 48000);
        assert!(out.len().abs_diff(48000) <= 1);
    }

    #[test]
    fn test_resample_empty() {
        assert!(resample_linear(&[], 22050, 44100).is_empty());
    }

    #[test]
    fn test_prepare_interleaves_and_scales() {
        let clip = SampleBuffer::from_pcm(44100, vec![i16::MAX, -i16::MAX]);
        let out = prepare(&clip, 44100, 2, 0.5);
        assert_eq!(out.len(), 4);
        assert!((out[0] - 0.5).abs() < 1e-6);
        assert_eq!(out[0], out[1]);
        assert!((out[2] + 0.5).abs() < 1e-6);
        assert_eq!(out[2], out[3]);
    }
}
