//! Tone synthesizer
//!
//! Maps generation parameters to [`SampleBuffer`]s. The free functions are
//! the stateless API; [`ToneSynthesizer`] binds a sample rate and a seedable
//! RNG for callers that render many sounds.

use super::SampleBuffer;
use super::envelope::Envelope;
use super::export::frame_count;
use super::oscillators::{gaussian_noise, linear_chirp, sine};
use super::request::{SynthesisRequest, Waveform};
use crate::error::{Result, SynthError};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::debug;

/// Longest buffer a single call may produce, in frames
const MAX_FRAMES: f64 = u32::MAX as f64;

/// Validate the shared timing parameters and return the frame count
fn frames_for(duration: f64, sample_rate: u32) -> Result<usize> {
    if sample_rate == 0 {
        return Err(SynthError::invalid(
            "sample_rate",
            0.0,
            "must be greater than zero",
        ));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(SynthError::invalid(
            "duration",
            duration,
            "must be a finite, non-negative number of seconds",
        ));
    }
    if (duration * sample_rate as f64).round() > MAX_FRAMES {
        return Err(SynthError::invalid(
            "duration",
            duration,
            "exceeds u32::MAX frames at this sample rate",
        ));
    }
    Ok(frame_count(duration, sample_rate))
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SynthError::invalid(name, value, "must be finite"))
    }
}

/// Generate a steady sine tone
///
/// No envelope is applied; the tone starts and stops abruptly.
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Amplitude scale (nominally 0.0 to 1.0, not checked)
pub fn generate_tone(
    frequency: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> Result<SampleBuffer> {
    let frames = frames_for(duration, sample_rate)?;
    ensure_finite("frequency", frequency)?;
    ensure_finite("amplitude", amplitude)?;

    let samples = sine(frequency, amplitude, frames, sample_rate);
    debug!(frequency, frames, "generated tone");
    Ok(SampleBuffer::from_f64(sample_rate, &samples))
}

/// Generate a linear frequency sweep with faded edges
///
/// The first and last 10% of frames are linearly faded to avoid clicks.
///
/// # Arguments
/// * `start_freq` - Starting frequency in Hz
/// * `end_freq` - Ending frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Amplitude scale (nominally 0.0 to 1.0, not checked)
pub fn generate_sweep(
    start_freq: f64,
    end_freq: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> Result<SampleBuffer> {
    let frames = frames_for(duration, sample_rate)?;
    ensure_finite("start_freq", start_freq)?;
    ensure_finite("end_freq", end_freq)?;
    ensure_finite("amplitude", amplitude)?;

    let mut samples = linear_chirp(start_freq, end_freq, amplitude, frames, sample_rate);
    Envelope::edge_fade().apply(&mut samples);
    debug!(start_freq, end_freq, frames, "generated sweep");
    Ok(SampleBuffer::from_f64(sample_rate, &samples))
}

/// Generate a decaying static burst using the thread-local RNG
///
/// See [`generate_noise_burst_with_rng`].
pub fn generate_noise_burst(duration: f64, sample_rate: u32, amplitude: f64) -> Result<SampleBuffer> {
    generate_noise_burst_with_rng(duration, sample_rate, amplitude, &mut rand::rng())
}

/// Generate a decaying static burst
///
/// Samples are drawn from Normal(0, `amplitude`) and multiplied by
/// `exp(-5 * i / frames)`.
///
/// # Arguments
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Standard deviation of the noise (not checked)
/// * `rng` - Random source
pub fn generate_noise_burst_with_rng<R: Rng + ?Sized>(
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
    rng: &mut R,
) -> Result<SampleBuffer> {
    let frames = frames_for(duration, sample_rate)?;
    ensure_finite("amplitude", amplitude)?;

    let mut samples = gaussian_noise(amplitude, frames, rng);
    Envelope::static_decay().apply(&mut samples);
    debug!(frames, "generated noise burst");
    Ok(SampleBuffer::from_f64(sample_rate, &samples))
}

/// Synthesizer bound to a sample rate and a noise RNG
///
/// # Example
/// ```
/// use brainrot_synth::audio::*;
///
/// let mut synth = ToneSynthesizer::with_seed(SAMPLE_RATE, 42);
///
/// let airhorn = synth.render(&SynthesisRequest::tone(1000.0, 0.3, 0.6)).unwrap();
/// let zap = synth.render(&SynthesisRequest::noise(0.1, 0.5)).unwrap();
///
/// assert_eq!(airhorn.len(), 6615);
/// assert_eq!(zap.len(), 2205);
/// ```
pub struct ToneSynthesizer {
    sample_rate: u32,
    rng: Pcg32,
}

impl ToneSynthesizer {
    /// Create a synthesizer with an entropy-seeded RNG
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Create a synthesizer whose noise output is reproducible
    pub fn with_seed(sample_rate: u32, seed: u64) -> Self {
        Self {
            sample_rate,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Default sample rate for requests that leave it unset
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Generate a steady sine tone
    pub fn tone(&self, frequency: f64, duration: f64, amplitude: f64) -> Result<SampleBuffer> {
        generate_tone(frequency, duration, self.sample_rate, amplitude)
    }

    /// Generate a faded linear sweep
    pub fn sweep(
        &self,
        start_freq: f64,
        end_freq: f64,
        duration: f64,
        amplitude: f64,
    ) -> Result<SampleBuffer> {
        generate_sweep(start_freq, end_freq, duration, self.sample_rate, amplitude)
    }

    /// Generate a decaying static burst
    pub fn noise_burst(&mut self, duration: f64, amplitude: f64) -> Result<SampleBuffer> {
        generate_noise_burst_with_rng(duration, self.sample_rate, amplitude, &mut self.rng)
    }

    /// Render a request, filling unset fields from the synthesizer and waveform defaults
    pub fn render(&mut self, request: &SynthesisRequest) -> Result<SampleBuffer> {
        let sample_rate = request.sample_rate.unwrap_or(self.sample_rate);
        let amplitude = request.amplitude();

        match request.waveform {
            Waveform::Tone { frequency } => {
                generate_tone(frequency, request.duration, sample_rate, amplitude)
            }
            Waveform::Sweep {
                start_freq,
                end_freq,
            } => generate_sweep(start_freq, end_freq, request.duration, sample_rate, amplitude),
            Waveform::Noise => generate_noise_burst_with_rng(
                request.duration,
                sample_rate,
                amplitude,
                &mut self.rng,
            ),
        }
    }
}
