//! Turn-completion sounds.
//!
//! Each completed turn plays a short synthesized click, one of five
//! pitches chosen at random, detached from the frame loop so playback
//! never blocks an update.

use std::time::Duration;

use rand::Rng;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, StreamError};

/// Click pitches (a pentatonic-ish run so repeats do not grate).
const CLICK_PITCHES_HZ: [f32; 5] = [523.25, 587.33, 659.25, 783.99, 880.0];

const CLICK_DURATION: Duration = Duration::from_millis(90);

const CLICK_GAIN: f32 = 0.15;

/// Owns the audio output stream for the lifetime of the viewer.
pub struct TurnSounds {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl TurnSounds {
    /// Opens the default audio output device.
    pub fn new() -> Result<Self, StreamError> {
        let (_stream, handle) = OutputStream::try_default()?;
        Ok(Self { _stream, handle })
    }

    /// Plays one click, fire-and-forget.
    pub fn play<R: Rng>(&self, rng: &mut R) {
        let pitch = CLICK_PITCHES_HZ[rng.random_range(0..CLICK_PITCHES_HZ.len())];
        let click = SineWave::new(pitch)
            .take_duration(CLICK_DURATION)
            .amplify(CLICK_GAIN);
        // an error here only means the stream went away mid-shutdown
        let _ = self.handle.play_raw(click.convert_samples());
    }
}
