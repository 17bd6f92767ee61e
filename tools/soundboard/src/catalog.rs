//! Meme sound catalog
//!
//! The built-in effects plus any custom sounds declared in the manifest.

use anyhow::{Result, bail};
use brainrot_synth::audio::SynthesisRequest;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;

/// Maximum number of sounds queued by chaos mode
pub const CHAOS_LENGTH: usize = 5;

/// Built-in sound definition: (id, display_name, request)
type BuiltinDef = (&'static str, &'static str, SynthesisRequest);

/// All built-in sounds, in playlist order
const BUILTIN_SOUNDS: &[BuiltinDef] = &[
    ("airhorn", "MLG Airhorn", SynthesisRequest::tone(1000.0, 0.3, 0.6)),
    ("vine_boom", "Vine Boom", SynthesisRequest::sweep(80.0, 40.0, 0.5, 0.8)),
    ("windows_xp", "Windows XP Startup", SynthesisRequest::sweep(200.0, 800.0, 1.0, 0.4)),
    ("error", "Error Sound", SynthesisRequest::sweep(600.0, 200.0, 0.8, 0.5)),
    ("success", "Success Sound", SynthesisRequest::sweep(300.0, 600.0, 0.6, 0.4)),
    ("notification", "Notification", SynthesisRequest::tone(800.0, 0.2, 0.3)),
    ("whoosh", "Whoosh", SynthesisRequest::sweep(1000.0, 100.0, 0.4, 0.4)),
    ("static", "Static", SynthesisRequest::noise(0.3, 0.2)),
    ("ding", "Ding", SynthesisRequest::tone(1200.0, 0.5, 0.3)),
    ("buzzer", "Buzzer", SynthesisRequest::tone(150.0, 0.8, 0.5)),
    ("sad_trombone", "Sad Trombone", SynthesisRequest::sweep(200.0, 100.0, 1.2, 0.4)),
    ("zap", "Zap", SynthesisRequest::noise(0.1, 0.5)),
    ("bass_drop", "Bass Drop", SynthesisRequest::sweep(60.0, 30.0, 0.8, 0.9)),
    ("guitar_riff", "Guitar Riff", SynthesisRequest::tone(440.0, 0.4, 0.5)),
    ("robot_beep", "Robot Beep", SynthesisRequest::tone(1500.0, 0.15, 0.4)),
];

/// Mood label shown next to each sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Epic,
    Ominous,
    Positive,
    Powerful,
    Chaotic,
}

impl Vibe {
    /// Classify a sound by keywords in its display name (first match wins)
    pub fn from_name(name: &str) -> Self {
        let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
        if has(&["Error", "Buzzer"]) {
            Vibe::Ominous
        } else if has(&["Success", "Ding"]) {
            Vibe::Positive
        } else if has(&["Boom", "Bass"]) {
            Vibe::Powerful
        } else if has(&["Static", "Zap"]) {
            Vibe::Chaotic
        } else {
            Vibe::Epic
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Vibe::Epic => "Epic",
            Vibe::Ominous => "Ominous",
            Vibe::Positive => "Positive",
            Vibe::Powerful => "Powerful",
            Vibe::Chaotic => "Chaotic",
        };
        f.write_str(label)
    }
}

/// A named, renderable sound
#[derive(Debug, Clone, PartialEq)]
pub struct SoundDef {
    pub id: String,
    pub name: String,
    pub request: SynthesisRequest,
}

impl SoundDef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, request: SynthesisRequest) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            request,
        }
    }

    pub fn vibe(&self) -> Vibe {
        Vibe::from_name(&self.name)
    }

    /// Playlist duration label, e.g. "0:03"
    ///
    /// Nominal label keyed off the name, not the rendered length.
    pub fn duration_label(&self) -> &'static str {
        let has = |words: &[&str]| words.iter().any(|w| self.name.contains(w));
        if has(&["Startup", "Trombone"]) {
            "0:05"
        } else if has(&["Beep", "Ding"]) {
            "0:01"
        } else {
            "0:03"
        }
    }
}

/// Ordered collection of sounds with unique ids
#[derive(Debug, Clone)]
pub struct Catalog {
    sounds: Vec<SoundDef>,
}

impl Catalog {
    /// The built-in meme sounds
    pub fn builtin() -> Self {
        Self {
            sounds: BUILTIN_SOUNDS
                .iter()
                .map(|&(id, name, request)| SoundDef::new(id, name, request))
                .collect(),
        }
    }

    /// Append custom sounds, rejecting ids already present
    pub fn extend(&mut self, custom: impl IntoIterator<Item = SoundDef>) -> Result<()> {
        for sound in custom {
            if self.get(&sound.id).is_some() {
                bail!("Duplicate sound id '{}'", sound.id);
            }
            tracing::debug!(id = %sound.id, kind = sound.request.waveform.kind(), "added custom sound");
            self.sounds.push(sound);
        }
        Ok(())
    }

    pub fn sounds(&self) -> &[SoundDef] {
        &self.sounds
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Find a sound by id (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&SoundDef> {
        self.sounds.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// Resolve a list of ids, or every sound when the list is empty
    pub fn select(&self, ids: &[String]) -> Result<Vec<&SoundDef>> {
        if ids.is_empty() {
            return Ok(self.sounds.iter().collect());
        }
        ids.iter()
            .map(|id| match self.get(id) {
                Some(sound) => Ok(sound),
                None => bail!("Unknown sound '{}'. Run `soundboard list` to see available ids", id),
            })
            .collect()
    }

    /// Pick one sound uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&SoundDef> {
        self.sounds.choose(rng)
    }

    /// Up to [`CHAOS_LENGTH`] distinct sounds in random order
    pub fn chaos_selection<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&SoundDef> {
        let count = CHAOS_LENGTH.min(self.sounds.len());
        let mut picked: Vec<&SoundDef> = self.sounds.choose_multiple(rng, count).collect();
        picked.shuffle(rng);
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainrot_synth::audio::Waveform;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.sounds()[0].id, "airhorn");
        assert_eq!(catalog.sounds()[14].id, "robot_beep");
    }

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        for (i, a) in catalog.sounds().iter().enumerate() {
            for b in &catalog.sounds()[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let catalog = Catalog::builtin();
        let boom = catalog.get("VINE_BOOM").unwrap();
        assert_eq!(boom.name, "Vine Boom");
        assert_eq!(
            boom.request.waveform,
            Waveform::Sweep {
                start_freq: 80.0,
                end_freq: 40.0
            }
        );
        assert!(catalog.get("rickroll").is_none());
    }

    #[test]
    fn test_vibes() {
        let catalog = Catalog::builtin();
        let vibe = |id: &str| catalog.get(id).unwrap().vibe();
        assert_eq!(vibe("error"), Vibe::Ominous);
        assert_eq!(vibe("buzzer"), Vibe::Ominous);
        assert_eq!(vibe("success"), Vibe::Positive);
        assert_eq!(vibe("ding"), Vibe::Positive);
        assert_eq!(vibe("vine_boom"), Vibe::Powerful);
        assert_eq!(vibe("bass_drop"), Vibe::Powerful);
        assert_eq!(vibe("static"), Vibe::Chaotic);
        assert_eq!(vibe("zap"), Vibe::Chaotic);
        assert_eq!(vibe("airhorn"), Vibe::Epic);
        assert_eq!(Vibe::Powerful.to_string(), "Powerful");
    }

    #[test]
    fn test_duration_labels() {
        let catalog = Catalog::builtin();
        let label = |id: &str| catalog.get(id).unwrap().duration_label();
        assert_eq!(label("windows_xp"), "0:05");
        assert_eq!(label("sad_trombone"), "0:05");
        assert_eq!(label("robot_beep"), "0:01");
        assert_eq!(label("ding"), "0:01");
        assert_eq!(label("airhorn"), "0:03");
    }

    #[test]
    fn test_extend_rejects_duplicates() {
        let mut catalog = Catalog::builtin();
        let laser = SoundDef::new("laser", "Laser", SynthesisRequest::sweep(1200.0, 300.0, 0.3, 0.5));
        catalog.extend([laser]).unwrap();
        assert_eq!(catalog.len(), 16);

        let clash = SoundDef::new("Zap", "Other Zap", SynthesisRequest::noise(0.2, 0.1));
        assert!(catalog.extend([clash]).is_err());
    }

    #[test]
    fn test_select() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.select(&[]).unwrap().len(), 15);

        let picked = catalog
            .select(&["ding".to_string(), "zap".to_string()])
            .unwrap();
        assert_eq!(picked[0].id, "ding");
        assert_eq!(picked[1].id, "zap");

        assert!(catalog.select(&["nope".to_string()]).is_err());
    }

    #[test]
    fn test_chaos_selection_distinct() {
        let catalog = Catalog::builtin();
        let mut rng = Pcg64::seed_from_u64(3);
        let chaos = catalog.chaos_selection(&mut rng);
        assert_eq!(chaos.len(), CHAOS_LENGTH);
        for (i, a) in chaos.iter().enumerate() {
            for b in &chaos[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_chaos_selection_small_catalog() {
        let catalog = Catalog {
            sounds: vec![SoundDef::new("a", "A", SynthesisRequest::noise(0.1, 0.1))],
        };
        let mut rng = Pcg64::seed_from_u64(3);
        assert_eq!(catalog.chaos_selection(&mut rng).len(), 1);
        assert_eq!(catalog.pick_random(&mut rng).unwrap().id, "a");
    }
}
