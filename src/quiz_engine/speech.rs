//! Text-to-speech collaborator.
//!
//! The round controller never waits on speech: it cancels whatever is
//! playing and hands the next utterance over, fire-and-forget.

use crate::quiz_engine::config::SpeechSettings;

pub trait Speaker {
    /// Stop any utterance currently playing.
    fn cancel(&mut self);

    /// Start speaking `text`. Must not block.
    fn speak(&mut self, text: &str, language: &str, rate: f32);
}

/// Cancel, then speak `text` with the configured voice settings.
pub fn say(speaker: &mut dyn Speaker, text: &str, settings: &SpeechSettings) {
    speaker.cancel();
    speaker.speak(text, &settings.language, settings.rate);
}

/// Speaker for headless runs: every utterance becomes a log line.
#[derive(Debug, Default)]
pub struct LogSpeaker {
    spoken: usize,
}

impl LogSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of utterances started so far.
    pub fn spoken(&self) -> usize {
        self.spoken
    }
}

impl Speaker for LogSpeaker {
    fn cancel(&mut self) {
        log::trace!("speech cancelled");
    }

    fn speak(&mut self, text: &str, language: &str, rate: f32) {
        self.spoken += 1;
        log::info!("speaking '{text}' ({language}, rate {rate})");
    }
}
