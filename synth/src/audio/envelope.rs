//! Amplitude envelopes
//!
//! Envelopes are applied relative to the buffer length rather than to
//! absolute times, so the same shape stretches over any duration.

/// Time-varying gain applied across a whole buffer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Envelope {
    /// Unity gain
    #[default]
    None,
    /// Linear fade in over the first `percent` of frames and a mirrored fade
    /// out over the last `percent`.
    ///
    /// The fade is `frames * percent / 100` frames long (integer division),
    /// capped at half the buffer, and ramps `k / (n - 1)` for `k in 0..n`, so
    /// the outermost samples are exactly silent.
    LinearFade { percent: usize },
    /// Exponential decay, `exp(-rate * i / frames)`
    ExponentialDecay { rate: f64 },
}

impl Envelope {
    /// Click-free edges used by sweeps (10% fade each side)
    pub fn edge_fade() -> Self {
        Self::LinearFade { percent: 10 }
    }

    /// Static-burst decay used by noise (e^-5 over the buffer)
    pub fn static_decay() -> Self {
        Self::ExponentialDecay { rate: 5.0 }
    }

    /// Apply envelope to samples in place
    pub fn apply(&self, samples: &mut [f64]) {
        let frames = samples.len();
        if frames == 0 {
            return;
        }

        match *self {
            Envelope::None => {}
            Envelope::LinearFade { percent } => {
                // Fade in and fade out never overlap
                let fade_len = (frames.saturating_mul(percent) / 100).min(frames / 2);
                for k in 0..fade_len {
                    let gain = fade_ramp(k, fade_len);
                    samples[k] *= gain;
                    samples[frames - 1 - k] *= gain;
                }
            }
            Envelope::ExponentialDecay { rate } => {
                for (i, sample) in samples.iter_mut().enumerate() {
                    *sample *= (-rate * i as f64 / frames as f64).exp();
                }
            }
        }
    }

    /// Generate envelope curve as samples
    ///
    /// Useful for visualization or debugging.
    pub fn generate(&self, frames: usize) -> Vec<f64> {
        let mut curve = vec![1.0; frames];
        self.apply(&mut curve);
        curve
    }
}

/// Evenly spaced ramp from 0.0 to 1.0 inclusive over `len` points
fn fade_ramp(k: usize, len: usize) -> f64 {
    if len > 1 {
        k as f64 / (len - 1) as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_none() {
        let curve = Envelope::None.generate(16);
        assert!(curve.iter().all(|&g| g == 1.0));
    }

    #[test]
    fn test_edge_fade_endpoints() {
        let curve = Envelope::edge_fade().generate(1000);
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[999], 0.0);
        // 100-frame ramp reaches unity at its last point
        assert_eq!(curve[99], 1.0);
        assert_eq!(curve[900], 1.0);
        assert_eq!(curve[500], 1.0);
    }

    #[test]
    fn test_edge_fade_is_symmetric_and_monotonic() {
        let curve = Envelope::edge_fade().generate(200);
        for k in 0..20 {
            assert_eq!(curve[k], curve[199 - k]);
        }
        for k in 1..20 {
            assert!(curve[k] > curve[k - 1]);
        }
    }

    #[test]
    fn test_edge_fade_short_buffer() {
        // Fewer than ten frames: no fade at all
        let curve = Envelope::edge_fade().generate(9);
        assert!(curve.iter().all(|&g| g == 1.0));

        // Exactly one faded frame on each side is silenced
        let curve = Envelope::edge_fade().generate(10);
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[9], 0.0);
        assert_eq!(curve[5], 1.0);
    }

    #[test]
    fn test_wide_fade_capped_at_half() {
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 0.75, 0.5, 0.25, 0.0];
        for percent in [50, 80, 200, usize::MAX] {
            let curve = Envelope::LinearFade { percent }.generate(10);
            assert_eq!(curve, expected, "percent {percent}");
        }

        // Odd length leaves the middle frame at unity
        let curve = Envelope::LinearFade { percent: 100 }.generate(11);
        assert_eq!(curve[5], 1.0);
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[10], 0.0);
    }

    #[test]
    fn test_static_decay() {
        let curve = Envelope::static_decay().generate(1000);
        assert_eq!(curve[0], 1.0);
        assert!(curve.windows(2).all(|w| w[1] < w[0]));
        let last = curve[999];
        assert!((last - (-5.0 * 999.0 / 1000.0f64).exp()).abs() < 1e-12);
        assert!(last < 0.01);
    }

    #[test]
    fn test_envelope_empty_samples() {
        let mut samples: Vec<f64> = vec![];
        Envelope::edge_fade().apply(&mut samples);
        Envelope::static_decay().apply(&mut samples);
        assert!(samples.is_empty());
    }
}
