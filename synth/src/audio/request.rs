//! Declarative generation requests
//!
//! A [`SynthesisRequest`] captures every parameter of one generation call so
//! sounds can be listed in tables or loaded from TOML.

use serde::Deserialize;

/// Waveform class and its kind-specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Waveform {
    /// Steady sine wave
    Tone { frequency: f64 },
    /// Linear frequency sweep with faded edges
    Sweep { start_freq: f64, end_freq: f64 },
    /// Gaussian noise with exponential decay
    Noise,
}

impl Waveform {
    /// Amplitude used when a request leaves it unset
    pub fn default_amplitude(&self) -> f64 {
        match self {
            Waveform::Tone { .. } | Waveform::Sweep { .. } => 0.5,
            Waveform::Noise => 0.3,
        }
    }

    /// Lowercase kind name, as written in TOML
    pub fn kind(&self) -> &'static str {
        match self {
            Waveform::Tone { .. } => "tone",
            Waveform::Sweep { .. } => "sweep",
            Waveform::Noise => "noise",
        }
    }
}

/// Parameters for a single generation call
///
/// ```
/// use brainrot_synth::audio::{SynthesisRequest, Waveform};
///
/// let request: SynthesisRequest = toml::from_str(
///     r#"
///     kind = "sweep"
///     start_freq = 80.0
///     end_freq = 40.0
///     duration = 0.5
///     amplitude = 0.8
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(request, SynthesisRequest::sweep(80.0, 40.0, 0.5, 0.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SynthesisRequest {
    #[serde(flatten)]
    pub waveform: Waveform,
    /// Duration in seconds
    pub duration: f64,
    /// Sample rate in Hz; the synthesizer's rate when unset
    #[serde(default)]
    pub sample_rate: Option<u32>,
    /// Amplitude scale; the waveform default when unset
    #[serde(default)]
    pub amplitude: Option<f64>,
}

impl SynthesisRequest {
    pub const fn tone(frequency: f64, duration: f64, amplitude: f64) -> Self {
        Self {
            waveform: Waveform::Tone { frequency },
            duration,
            sample_rate: None,
            amplitude: Some(amplitude),
        }
    }

    pub const fn sweep(start_freq: f64, end_freq: f64, duration: f64, amplitude: f64) -> Self {
        Self {
            waveform: Waveform::Sweep {
                start_freq,
                end_freq,
            },
            duration,
            sample_rate: None,
            amplitude: Some(amplitude),
        }
    }

    pub const fn noise(duration: f64, amplitude: f64) -> Self {
        Self {
            waveform: Waveform::Noise,
            duration,
            sample_rate: None,
            amplitude: Some(amplitude),
        }
    }

    /// Pin the request to a specific sample rate
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Effective amplitude
    pub fn amplitude(&self) -> f64 {
        self.amplitude
            .unwrap_or_else(|| self.waveform.default_amplitude())
    }
}
