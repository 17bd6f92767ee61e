//! Raw waveform generators
//!
//! Produce unquantized f64 samples. Amplitude scaling happens here; envelope
//! shaping and PCM conversion are applied by the caller.

use rand::Rng;
use std::f64::consts::PI;

/// Generate a constant-frequency sine wave
///
/// `sample[i] = amplitude * sin(2π * frequency * i / sample_rate)`
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `amplitude` - Peak amplitude (nominally 0.0 to 1.0)
/// * `frames` - Number of samples to generate
/// * `sample_rate` - Sample rate in Hz
pub fn sine(frequency: f64, amplitude: f64, frames: usize, sample_rate: u32) -> Vec<f64> {
    let sample_rate = sample_rate as f64;
    (0..frames)
        .map(|i| amplitude * (2.0 * PI * frequency * i as f64 / sample_rate).sin())
        .collect()
}

/// Generate a linear frequency sweep
///
/// The instantaneous frequency moves linearly from `start_freq` towards
/// `end_freq`, and each sample uses `sin(2π * freq(i) * i / sample_rate)`
/// rather than an integrated phase, so the perceived pitch is not a true
/// linear chirp.
///
/// # Arguments
/// * `start_freq` - Frequency at frame 0 in Hz
/// * `end_freq` - Frequency approached at the final frame in Hz
/// * `amplitude` - Peak amplitude (nominally 0.0 to 1.0)
/// * `frames` - Number of samples to generate
/// * `sample_rate` - Sample rate in Hz
pub fn linear_chirp(
    start_freq: f64,
    end_freq: f64,
    amplitude: f64,
    frames: usize,
    sample_rate: u32,
) -> Vec<f64> {
    let sample_rate = sample_rate as f64;
    (0..frames)
        .map(|i| {
            let t = i as f64 / frames as f64;
            let freq = start_freq + (end_freq - start_freq) * t;
            amplitude * (2.0 * PI * freq * i as f64 / sample_rate).sin()
        })
        .collect()
}

/// Generate Gaussian white noise
///
/// Samples are independent draws from Normal(0, `std_dev`), using the
/// Box-Muller transform over the supplied RNG.
pub fn gaussian_noise<R: Rng + ?Sized>(std_dev: f64, frames: usize, rng: &mut R) -> Vec<f64> {
    let mut samples = Vec::with_capacity(frames);

    while samples.len() < frames {
        // 1 - u keeps the log argument in (0, 1]
        let u1 = 1.0 - rng.random::<f64>();
        let u2 = rng.random::<f64>();
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        samples.push(std_dev * radius * theta.cos());
        if samples.len() < frames {
            samples.push(std_dev * radius * theta.sin());
        }
    }

    samples
}
