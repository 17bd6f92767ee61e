//! Brainrot soundboard - meme sound effects synthesized on the fly
//!
//! # Commands
//!
//! - `soundboard list` - Show every sound with its vibe and duration label
//! - `soundboard generate` - Render sounds to WAV files
//! - `soundboard play <ID>` - Play one sound on the default output device
//! - `soundboard random` - Play a random sound
//! - `soundboard chaos` - Play a burst of random sounds back to back
//!
//! # Usage
//!
//! ```bash
//! # Export the whole catalog as stereo WAVs
//! soundboard generate --stereo --out assets/sounds
//!
//! # Export just two sounds
//! soundboard generate vine_boom airhorn
//!
//! # Quiet airhorn
//! soundboard play airhorn --volume 0.3
//! ```
//!
//! Settings and custom sounds are read from `soundboard.toml` in the working
//! directory, or from the file given with `--manifest`.

mod catalog;
mod generate;
mod manifest;
mod output;
mod play;

use anyhow::Result;
use clap::{Parser, Subcommand};
use manifest::SoundboardManifest;
use std::path::PathBuf;

/// Brainrot soundboard - meme sound effects synthesized on the fly
#[derive(Parser)]
#[command(name = "soundboard")]
#[command(about = "Synthesize and play meme sound effects")]
#[command(version)]
struct Cli {
    /// Path to soundboard.toml (defaults to ./soundboard.toml when present)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every sound with its vibe and duration label
    List,

    /// Render sounds to WAV files
    Generate(generate::GenerateArgs),

    /// Play one sound on the default output device
    Play(play::PlayArgs),

    /// Play a random sound
    Random(play::VolumeArgs),

    /// Play a burst of random sounds back to back
    Chaos(play::VolumeArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let manifest = SoundboardManifest::discover(cli.manifest.as_deref())?;

    match cli.command {
        Commands::List => list(&manifest),
        Commands::Generate(args) => generate::execute(args, &manifest),
        Commands::Play(args) => play::play(args, &manifest),
        Commands::Random(args) => play::random(args, &manifest),
        Commands::Chaos(args) => play::chaos(args, &manifest),
    }
}

fn list(manifest: &SoundboardManifest) -> Result<()> {
    let catalog = manifest.catalog()?;
    if catalog.is_empty() {
        println!("No sounds available");
        return Ok(());
    }

    println!("{} sounds:", catalog.len());
    for sound in catalog.sounds() {
        println!(
            "  {:<14} {:<20} {:<9} {}  ({}, {:.2}s)",
            sound.id,
            sound.name,
            sound.vibe().to_string(),
            sound.duration_label(),
            sound.request.waveform.kind(),
            sound.request.duration
        );
    }
    Ok(())
}
