//! Live playback: single sounds, random picks and chaos mode

use crate::catalog::SoundDef;
use crate::manifest::SoundboardManifest;
use crate::output::AudioOutput;
use anyhow::{Context, Result, anyhow};
use brainrot_synth::audio::{SampleBuffer, ToneSynthesizer};
use clap::Args;
use std::thread;
use std::time::{Duration, Instant};

/// Minimum spacing between the starts of consecutive chaos sounds
pub const CHAOS_SPACING: Duration = Duration::from_secs(1);

#[derive(Args)]
pub struct VolumeArgs {
    /// Playback gain from 0.0 to 1.0 (defaults to the manifest volume)
    #[arg(long, value_parser = parse_volume)]
    pub volume: Option<f32>,
}

impl VolumeArgs {
    fn resolve(&self, manifest: &SoundboardManifest) -> f32 {
        self.volume.unwrap_or(manifest.soundboard.volume)
    }
}

#[derive(Args)]
pub struct PlayArgs {
    /// Sound id (see `soundboard list`)
    pub id: String,

    #[command(flatten)]
    pub volume: VolumeArgs,
}

fn parse_volume(value: &str) -> Result<f32, String> {
    let volume: f32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=1.0).contains(&volume) {
        Ok(volume)
    } else {
        Err(format!("volume must be between 0.0 and 1.0, got {volume}"))
    }
}

/// Play one sound by id
pub fn play(args: PlayArgs, manifest: &SoundboardManifest) -> Result<()> {
    let catalog = manifest.catalog()?;
    let sound = catalog.select(std::slice::from_ref(&args.id))?[0];
    play_sequence(&[sound], manifest, args.volume.resolve(manifest), None)
}

/// Play one sound picked at random
pub fn random(args: VolumeArgs, manifest: &SoundboardManifest) -> Result<()> {
    let catalog = manifest.catalog()?;
    let sound = catalog
        .pick_random(&mut manifest.picker_rng())
        .ok_or_else(|| anyhow!("Catalog is empty"))?;
    println!("Random pick: {}", sound.name);
    play_sequence(&[sound], manifest, args.resolve(manifest), None)
}

/// Play a burst of distinct random sounds back to back
pub fn chaos(args: VolumeArgs, manifest: &SoundboardManifest) -> Result<()> {
    let catalog = manifest.catalog()?;
    let sounds = catalog.chaos_selection(&mut manifest.picker_rng());
    println!("CHAOS MODE: {} sounds incoming", sounds.len());
    play_sequence(&sounds, manifest, args.resolve(manifest), Some(CHAOS_SPACING))
}

/// Render every sound up front, then play them in order on one output
///
/// With `spacing`, each sound starts no sooner than `spacing` after the
/// previous one started.
fn play_sequence(
    sounds: &[&SoundDef],
    manifest: &SoundboardManifest,
    volume: f32,
    spacing: Option<Duration>,
) -> Result<()> {
    let mut synth = manifest.synthesizer();
    let clips = render_all(sounds, &mut synth)?;

    let mut output = AudioOutput::new().context("Failed to open audio output")?;

    for (sound, clip) in sounds.iter().zip(&clips) {
        let started = Instant::now();
        println!(
            "Playing: {} [{}] ({:.2}s)",
            sound.name,
            sound.vibe(),
            clip.duration()
        );
        output.play(clip, volume);

        if let Some(spacing) = spacing {
            thread::sleep((started + spacing).saturating_duration_since(Instant::now()));
        }
    }

    Ok(())
}

fn render_all(sounds: &[&SoundDef], synth: &mut ToneSynthesizer) -> Result<Vec<SampleBuffer>> {
    sounds
        .iter()
        .map(|sound| {
            synth
                .render(&sound.request)
                .with_context(|| format!("Failed to synthesize '{}'", sound.id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use brainrot_synth::audio::SAMPLE_RATE;

    #[test]
    fn test_parse_volume() {
        assert_eq!(parse_volume("0.25"), Ok(0.25));
        assert_eq!(parse_volume("1"), Ok(1.0));
        assert!(parse_volume("1.5").is_err());
        assert!(parse_volume("-0.1").is_err());
        assert!(parse_volume("loud").is_err());
    }

    #[test]
    fn test_volume_falls_back_to_manifest() {
        let manifest = SoundboardManifest::parse("[soundboard]\nvolume = 0.4\n").unwrap();
        assert_eq!(VolumeArgs { volume: None }.resolve(&manifest), 0.4);
        assert_eq!(VolumeArgs { volume: Some(0.9) }.resolve(&manifest), 0.9);
    }

    #[test]
    fn test_render_all_keeps_order() {
        let catalog = Catalog::builtin();
        let sounds = catalog
            .select(&["zap".to_string(), "airhorn".to_string()])
            .unwrap();
        let mut synth = ToneSynthesizer::with_seed(SAMPLE_RATE, 1);

        let clips = render_all(&sounds, &mut synth).unwrap();
        assert_eq!(clips[0].len(), 2205);
        assert_eq!(clips[1].len(), 6615);
    }
}
