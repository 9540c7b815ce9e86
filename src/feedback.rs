// Page-turn feedback
// A hook notified whenever a transition starts, and the paper-rustle sound that implements it.

use crate::error::FeedbackError;
use rand::Rng;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use std::f32::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Notified by the paginator when a page turn has been committed.
///
/// Errors are reported back to the paginator, which logs and drops them.
pub trait TransitionHook {
    fn transition_started(&mut self, from: usize, to: usize) -> Result<(), FeedbackError>;
}

/// Hook that does nothing. Used when sound is turned off.
pub struct Silent;

impl TransitionHook for Silent {
    fn transition_started(&mut self, _from: usize, _to: usize) -> Result<(), FeedbackError> {
        Ok(())
    }
}

pub const SAMPLE_RATE: u32 = 44_100;
pub const DURATION_SECS: f32 = 0.15;
const NOISE_LEVEL: f32 = 0.08;
const BAND_CENTER_HZ: f32 = 3000.0;
const BAND_Q: f32 = 0.5;

/// Short burst of band-passed noise, played on its own output stream.
pub struct PageTurnSound {
    volume: f32,
    unavailable: Arc<AtomicBool>,
}

impl PageTurnSound {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Render the rustle: noise under a fast-attack envelope, band-passed, scaled by `volume`.
    pub fn synthesize<R: Rng>(rng: &mut R, sample_rate: u32, volume: f32) -> Vec<f32> {
        let len = (sample_rate as f32 * DURATION_SECS) as usize;
        let mut filter = BandPass::new(sample_rate as f32, BAND_CENTER_HZ, BAND_Q);

        (0..len)
            .map(|i| {
                let t = i as f32 / len as f32;
                let envelope = (1.0 - t).powi(2) * (t * PI).sin();
                let noise = rng.gen_range(-1.0f32..1.0) * envelope * NOISE_LEVEL;
                filter.process(noise) * volume
            })
            .collect()
    }
}

impl TransitionHook for PageTurnSound {
    fn transition_started(&mut self, _from: usize, _to: usize) -> Result<(), FeedbackError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(FeedbackError::Unavailable);
        }

        let samples = Self::synthesize(&mut rand::thread_rng(), SAMPLE_RATE, self.volume);
        let unavailable = Arc::clone(&self.unavailable);
        thread::Builder::new()
            .name("page-turn".into())
            .spawn(move || match play(samples) {
                Ok(()) => {}
                Err(err @ FeedbackError::NoDevice(_)) => {
                    tracing::info!(%err, "disabling page-turn sound");
                    unavailable.store(true, Ordering::Relaxed);
                }
                Err(err) => tracing::debug!(%err, "page-turn sound failed"),
            })
            .map_err(FeedbackError::Spawn)?;
        Ok(())
    }
}

fn play(samples: Vec<f32>) -> Result<(), FeedbackError> {
    // The stream must outlive playback, so it lives on this thread until the sink drains.
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;
    sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
    sink.sleep_until_end();
    Ok(())
}

/// Biquad band-pass with 0 dB peak gain (RBJ cookbook).
struct BandPass {
    b0: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl BandPass {
    fn new(sample_rate: f32, center: f32, q: f32) -> Self {
        let w0 = 2.0 * PI * center / sample_rate;
        let alpha = w0.sin() / (2.0 * q);
        let a0 = 1.0 + alpha;
        Self {
            b0: alpha / a0,
            b2: -alpha / a0,
            a1: -2.0 * w0.cos() / a0,
            a2: (1.0 - alpha) / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn process(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b2 * self.x2 - self.a1 * self.y1 - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_buffer_length_matches_duration() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = PageTurnSound::synthesize(&mut rng, 44_100, 0.3);
        assert_eq!(samples.len(), 6615);

        let samples = PageTurnSound::synthesize(&mut rng, 48_000, 0.3);
        assert_eq!(samples.len(), 7200);
    }

    #[test]
    fn test_rustle_is_quiet_and_fades() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = PageTurnSound::synthesize(&mut rng, SAMPLE_RATE, 0.3);
        assert!(samples.iter().all(|s| s.is_finite() && s.abs() < 0.1));
        assert_eq!(samples[0], 0.0);

        let peak_head = samples[..1000].iter().fold(0.0f32, |m, s| m.max(s.abs()));
        let peak_tail = samples[samples.len() - 200..]
            .iter()
            .fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak_tail < peak_head);
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = PageTurnSound::synthesize(&mut rng, SAMPLE_RATE, 0.0);
        assert!(samples.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_band_pass_rejects_dc() {
        let mut filter = BandPass::new(44_100.0, 3000.0, 0.5);
        let mut last = 1.0;
        for _ in 0..2000 {
            last = filter.process(1.0);
        }
        assert!(last.abs() < 1e-3);
    }

    #[test]
    fn test_unavailable_output_short_circuits() {
        let mut sound = PageTurnSound::new(0.3);
        sound.unavailable.store(true, Ordering::Relaxed);
        assert!(matches!(
            sound.transition_started(0, 1),
            Err(FeedbackError::Unavailable)
        ));
    }

    #[test]
    fn test_silent_hook() {
        assert!(Silent.transition_started(0, 1).is_ok());
    }
}
