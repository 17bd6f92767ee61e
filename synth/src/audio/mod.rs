//! Procedural audio synthesis
//!
//! This module provides the raw oscillators, envelope shaping, PCM export and
//! the [`ToneSynthesizer`] front end used by the soundboard.
//!
//! # Example
//! ```
//! use brainrot_synth::audio::*;
//!
//! let mut synth = ToneSynthesizer::with_seed(SAMPLE_RATE, 7);
//!
//! let ding = synth.tone(1200.0, 0.5, 0.3).unwrap();
//! let whoosh = synth.sweep(1000.0, 100.0, 0.4, 0.4).unwrap();
//! let static_burst = synth.noise_burst(0.3, 0.2).unwrap();
//!
//! assert_eq!(ding.len(), 11025);
//! assert_eq!(whoosh.len(), 8820);
//! assert_eq!(static_burst.len(), 6615);
//! ```

mod envelope;
mod export;
mod oscillators;
mod request;
mod synth;

/// Default sample rate (22.05kHz)
pub const SAMPLE_RATE: u32 = 22050;

// Oscillators
pub use oscillators::{gaussian_noise, linear_chirp, sine};

// Envelope
pub use envelope::Envelope;

// Requests
pub use request::{SynthesisRequest, Waveform};

// Synth API
pub use synth::{
    ToneSynthesizer, generate_noise_burst, generate_noise_burst_with_rng, generate_sweep,
    generate_tone,
};

// Utilities and export
pub use export::{frame_count, from_pcm_i16, to_pcm_i16, to_stereo};

#[cfg(feature = "wav-export")]
pub use export::write_wav;

/// Immutable buffer of mono 16-bit PCM samples at a fixed sample rate.
///
/// Produced by a single generation call and owned by whoever requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    sample_rate: u32,
    samples: Vec<i16>,
}

impl SampleBuffer {
    /// Wrap already-converted PCM samples
    pub fn from_pcm(sample_rate: u32, samples: Vec<i16>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    /// Quantize floating-point samples (nominally -1.0 to 1.0) into a buffer
    pub fn from_f64(sample_rate: u32, samples: &[f64]) -> Self {
        Self::from_pcm(sample_rate, to_pcm_i16(samples))
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Mono PCM samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consume the buffer, returning its samples
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Interleaved stereo copy with both channels identical
    pub fn to_stereo(&self) -> Vec<i16> {
        to_stereo(&self.samples)
    }

    /// Samples as f32 in -1.0 to 1.0, for playback sinks
    pub fn to_f32(&self) -> Vec<f32> {
        from_pcm_i16(&self.samples)
    }
}
