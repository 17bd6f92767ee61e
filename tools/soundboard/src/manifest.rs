//! soundboard.toml manifest parsing
//!
//! ```toml
//! [soundboard]
//! output_dir = "assets/sounds"
//! volume = 0.5
//! sample_rate = 22050
//! seed = 42
//!
//! [[sounds]]
//! id = "laser"
//! name = "Laser"
//! kind = "sweep"
//! start_freq = 1200.0
//! end_freq = 300.0
//! duration = 0.3
//! amplitude = 0.5
//! ```

use crate::catalog::{Catalog, SoundDef};
use anyhow::{Context, Result};
use brainrot_synth::audio::{SAMPLE_RATE, SynthesisRequest, ToneSynthesizer};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest picked up from the working directory when `--manifest` is not given
pub const DEFAULT_MANIFEST: &str = "soundboard.toml";

/// soundboard.toml manifest structure
#[derive(Debug, Default, Deserialize)]
pub struct SoundboardManifest {
    #[serde(default)]
    pub soundboard: SoundboardSection,
    #[serde(default)]
    pub sounds: Vec<CustomSound>,
}

/// Global settings section
#[derive(Debug, Deserialize)]
pub struct SoundboardSection {
    /// Directory `generate` writes WAV files into.
    /// Default: assets/sounds
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Playback gain (0.0 to 1.0).
    /// Default: 0.5
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Sample rate used for sounds that do not set their own.
    /// Default: 22050
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Seed for noise and random picks. Entropy-seeded when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/sounds")
}

fn default_volume() -> f32 {
    0.5
}

fn default_sample_rate() -> u32 {
    SAMPLE_RATE
}

impl Default for SoundboardSection {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            volume: default_volume(),
            sample_rate: default_sample_rate(),
            seed: None,
        }
    }
}

/// Custom sound entry
#[derive(Debug, Clone, Deserialize)]
pub struct CustomSound {
    pub id: String,
    /// Display name. Defaults to the id.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub request: SynthesisRequest,
}

impl From<CustomSound> for SoundDef {
    fn from(sound: CustomSound) -> Self {
        let name = sound.name.unwrap_or_else(|| sound.id.clone());
        SoundDef::new(sound.id, name, sound.request)
    }
}

impl SoundboardManifest {
    /// Load manifest from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse manifest from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let mut manifest: Self = toml::from_str(content)?;

        let volume = manifest.soundboard.volume;
        if !(0.0..=1.0).contains(&volume) {
            tracing::warn!("Volume {} out of range, clamping to 0.0..=1.0", volume);
            manifest.soundboard.volume = if volume.is_nan() {
                default_volume()
            } else {
                volume.clamp(0.0, 1.0)
            };
        }
        if manifest.soundboard.sample_rate == 0 {
            anyhow::bail!("sample_rate must be greater than zero");
        }

        Ok(manifest)
    }

    /// Load the manifest at `path`, or `soundboard.toml` in the working
    /// directory if present, or fall back to defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_MANIFEST);
                if default_path.exists() {
                    tracing::info!("Using {}", default_path.display());
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Built-in catalog extended with this manifest's custom sounds
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::builtin();
        catalog
            .extend(self.sounds.iter().map(|s| SoundDef::from(s.clone())))
            .context("Invalid [[sounds]] entry in manifest")?;
        Ok(catalog)
    }

    /// Synthesizer at the manifest's sample rate, seeded when `seed` is set
    pub fn synthesizer(&self) -> ToneSynthesizer {
        let sample_rate = self.soundboard.sample_rate;
        match self.soundboard.seed {
            Some(seed) => ToneSynthesizer::with_seed(sample_rate, seed),
            None => ToneSynthesizer::new(sample_rate),
        }
    }

    /// RNG for random and chaos picks
    ///
    /// Derived from `seed` (offset so it does not mirror the noise stream),
    /// otherwise seeded from the thread RNG.
    pub fn picker_rng(&self) -> Pcg64 {
        match self.soundboard.seed {
            Some(seed) => Pcg64::seed_from_u64(seed.wrapping_add(1)),
            None => Pcg64::from_rng(&mut rand::rng()),
        }
    }
}
