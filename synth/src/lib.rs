//! Procedural sound synthesis for the Brainrot soundboard
//!
//! Generates fixed-duration 16-bit PCM buffers for three waveform classes:
//! steady sine tones, linear frequency sweeps and decaying noise bursts.
//! Every generator is a pure function of its parameters (noise draws from
//! a caller-supplied or thread-local RNG).
//!
//! # Example
//! ```no_run
//! use brainrot_synth::audio::*;
//!
//! // MLG airhorn
//! let airhorn = generate_tone(1000.0, 0.3, SAMPLE_RATE, 0.6)?;
//! assert_eq!(airhorn.len(), 6615);
//!
//! // Vine boom
//! let boom = generate_sweep(80.0, 40.0, 0.5, SAMPLE_RATE, 0.8)?;
//!
//! // Stereo sinks get the mono channel duplicated
//! let stereo = boom.to_stereo();
//! assert_eq!(stereo.len(), boom.len() * 2);
//!
//! // Export to WAV (requires wav-export feature)
//! #[cfg(feature = "wav-export")]
//! write_wav(&boom, 1, std::path::Path::new("vine_boom.wav"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audio;
pub mod error;

pub use error::{Result, SynthError};
