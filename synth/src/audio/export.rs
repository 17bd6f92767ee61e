//! Audio export and utility functions
//!
//! Provides PCM conversion, channel duplication and WAV export.

#[cfg(feature = "wav-export")]
use super::SampleBuffer;
#[cfg(feature = "wav-export")]
use std::path::Path;

/// Number of frames covering `duration` seconds, `round(duration * sample_rate)`
pub fn frame_count(duration: f64, sample_rate: u32) -> usize {
    (duration * sample_rate as f64).round() as usize
}

/// Convert f64 samples (-1.0 to 1.0) to PCM i16
///
/// Each sample becomes `round(s * 32767)`. Out-of-range input clips to
/// ±32767 without being reported.
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    let max = i16::MAX as f64;
    samples
        .iter()
        .map(|&s| (s * max).round().clamp(-max, max) as i16)
        .collect()
}

/// Convert PCM i16 samples to f32 (-1.0 to 1.0)
pub fn from_pcm_i16(samples: &[i16]) -> Vec<f32> {
    samples
        .iter()
        .map(|&s| s as f32 / i16::MAX as f32)
        .collect()
}

/// Duplicate a mono channel into interleaved stereo (L, R, L, R, ...)
pub fn to_stereo(samples: &[i16]) -> Vec<i16> {
    samples.iter().flat_map(|&s| [s, s]).collect()
}

/// Write a sample buffer to a 16-bit PCM WAV file
///
/// With `channels > 1` the mono buffer is duplicated into every channel.
///
/// Requires the `wav-export` feature.
///
/// # Arguments
/// * `buffer` - Mono PCM buffer
/// * `channels` - Channel count written to the file
/// * `path` - Output file path
#[cfg(feature = "wav-export")]
pub fn write_wav(buffer: &SampleBuffer, channels: u16, path: &Path) -> std::io::Result<()> {
    use hound::{SampleFormat, WavSpec, WavWriter};

    let spec = WavSpec {
        channels: channels.max(1),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(std::io::Error::other)?;

    for &sample in buffer.samples() {
        for _ in 0..spec.channels {
            writer.write_sample(sample).map_err(std::io::Error::other)?;
        }
    }

    writer.finalize().map_err(std::io::Error::other)?;

    tracing::debug!(
        path = %path.display(),
        frames = buffer.len(),
        channels = spec.channels,
        "wrote WAV"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count(0.3, 22050), 6615);
        assert_eq!(frame_count(0.5, 22050), 11025);
        assert_eq!(frame_count(0.15, 22050), 3308); // 3307.5 rounds up
        assert_eq!(frame_count(0.0, 22050), 0);
    }

    #[test]
    fn test_to_pcm_i16() {
        let samples = vec![0.0, 0.5, 1.0, -1.0, -0.5];
        let pcm = to_pcm_i16(&samples);

        assert_eq!(pcm.len(), 5);
        assert_eq!(pcm[0], 0);
        assert_eq!(pcm[1], 16384); // 16383.5 rounds away from zero
        assert_eq!(pcm[2], i16::MAX);
        assert_eq!(pcm[3], -i16::MAX); // Note: -32767, not -32768
        assert_eq!(pcm[4], -16384);
    }

    #[test]
    fn test_to_pcm_i16_clamp() {
        let samples = vec![2.0, -2.0]; // Out of range
        let pcm = to_pcm_i16(&samples);

        assert_eq!(pcm[0], i16::MAX);
        assert_eq!(pcm[1], -i16::MAX);
    }

    #[test]
    fn test_from_pcm_i16() {
        let pcm = vec![0, i16::MAX, -i16::MAX];
        let samples = from_pcm_i16(&pcm);

        assert!((samples[0] - 0.0).abs() < 0.001);
        assert!((samples[1] - 1.0).abs() < 0.001);
        assert!((samples[2] - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_to_stereo() {
        assert_eq!(to_stereo(&[1, 2]), vec![1, 1, 2, 2]);
        assert!(to_stereo(&[]).is_empty());
    }

    #[cfg(feature = "wav-export")]
    #[test]
    fn test_write_wav_stereo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let buffer = SampleBuffer::from_pcm(22050, vec![100, -200, 300]);

        write_wav(&buffer, 2, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, 16);
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, vec![100, 100, -200, -200, 300, 300]);
    }
}
