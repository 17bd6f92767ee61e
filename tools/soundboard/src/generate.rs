//! WAV export of catalog sounds
//!
//! Each sound is saved as `{id}.wav` (e.g. `vine_boom.wav`) in the output
//! directory.

use crate::catalog::SoundDef;
use crate::manifest::SoundboardManifest;
use anyhow::{Context, Result};
use brainrot_synth::audio::{ToneSynthesizer, write_wav};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct GenerateArgs {
    /// Output directory (defaults to the manifest's output_dir)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write two identical channels instead of mono
    #[arg(long)]
    pub stereo: bool,

    /// Sound ids to generate (all when omitted)
    pub ids: Vec<String>,
}

/// Summary of one written file
#[derive(Debug)]
pub struct GeneratedSound {
    pub path: PathBuf,
    pub frames: usize,
    pub seconds: f64,
}

pub fn execute(args: GenerateArgs, manifest: &SoundboardManifest) -> Result<()> {
    let catalog = manifest.catalog()?;
    let sounds = catalog.select(&args.ids)?;
    let output_dir = args
        .out
        .unwrap_or_else(|| manifest.soundboard.output_dir.clone());
    let channels = if args.stereo { 2 } else { 1 };

    println!("Generating {} sounds", sounds.len());
    println!("  Output -> {}", output_dir.display());

    let mut synth = manifest.synthesizer();
    let generated = generate_sounds(&sounds, &mut synth, &output_dir, channels)?;

    for (sound, file) in sounds.iter().zip(&generated) {
        println!(
            "    -> {}.wav ({} samples, {:.2}s) - {}",
            sound.id, file.frames, file.seconds, sound.name
        );
    }

    println!("Done! Generated {} sounds", generated.len());
    Ok(())
}

/// Render and write each sound to `output_dir/{id}.wav`
pub fn generate_sounds(
    sounds: &[&SoundDef],
    synth: &mut ToneSynthesizer,
    output_dir: &Path,
    channels: u16,
) -> Result<Vec<GeneratedSound>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create audio output directory: {}",
            output_dir.display()
        )
    })?;

    sounds
        .iter()
        .map(|sound| {
            let buffer = synth
                .render(&sound.request)
                .with_context(|| format!("Failed to synthesize '{}'", sound.id))?;
            let path = output_dir.join(format!("{}.wav", sound.id));

            write_wav(&buffer, channels, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(id = %sound.id, path = %path.display(), "generated sound");

            Ok(GeneratedSound {
                path,
                frames: buffer.len(),
                seconds: buffer.duration(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use brainrot_synth::audio::SAMPLE_RATE;

    #[test]
    fn test_generate_all_builtin_sounds() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        let sounds = catalog.select(&[]).unwrap();
        let mut synth = ToneSynthesizer::with_seed(SAMPLE_RATE, 5);

        let generated = generate_sounds(&sounds, &mut synth, dir.path(), 1).unwrap();

        assert_eq!(generated.len(), 15);
        for (sound, file) in sounds.iter().zip(&generated) {
            assert_eq!(file.path, dir.path().join(format!("{}.wav", sound.id)));
            assert!(file.path.exists());
        }
    }

    #[test]
    fn test_generate_stereo_wav_contents() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        let sounds = catalog.select(&["airhorn".to_string()]).unwrap();
        let mut synth = ToneSynthesizer::with_seed(SAMPLE_RATE, 5);

        let out_dir = dir.path().join("nested");
        let generated = generate_sounds(&sounds, &mut synth, &out_dir, 2).unwrap();
        assert_eq!(generated[0].frames, 6615);
        assert!((generated[0].seconds - 0.3).abs() < 1e-9);

        let mut reader = hound::WavReader::open(&generated[0].path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(reader.len(), 6615 * 2);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert!(samples.chunks(2).all(|frame| frame[0] == frame[1]));
        assert!(samples.iter().all(|s| s.abs() <= 19660));
    }
}
