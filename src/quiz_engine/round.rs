//! Round state machine for one play session.
//!
//! ```text
//!   build_deck ──► [word shown, Unanswered] ──submit_answer──► [Correct | Incorrect]
//!                        ▲                                            │
//!                        └─────────────── advance ◄───────────────────┘
//!                          (last word: Exhausted, reshuffle, position 0)
//! ```
//!
//! Options are regenerated on every position change. They are *revealed*
//! only after the caller reports that the picture for the current word is
//! ready, which is also the moment the word is spoken aloud.

use rand::{rngs::StdRng, Rng};

use crate::quiz_engine::{
    config::QuizConfig,
    deck::RoundDeck,
    distractor::generate_distractors_with,
    helpers,
    models::{Advance, Feedback, RoundStatus, WordEntry},
    speech::{self, Speaker},
};

pub struct RoundController<R: Rng = StdRng> {
    class_name: String,
    /// Every word known when the deck was built, used for fallback options.
    pool: Vec<WordEntry>,
    deck: RoundDeck,
    options: Vec<String>,
    feedback: Feedback,
    asset_ready: bool,
    config: QuizConfig,
    rng: R,
}

impl RoundController<StdRng> {
    /// Build a controller for `class_name` using the RNG described by `config`.
    pub fn start(all_words: &[WordEntry], class_name: &str, config: QuizConfig) -> Self {
        let rng = config.rng();
        let mut controller = RoundController::new(config, rng);
        controller.build_deck(all_words, class_name);
        controller
    }
}

impl<R: Rng> RoundController<R> {
    /// A controller with no deck yet; call [`build_deck`](Self::build_deck).
    pub fn new(config: QuizConfig, rng: R) -> Self {
        RoundController {
            class_name: String::new(),
            pool: Vec::new(),
            deck: RoundDeck::default(),
            options: Vec::new(),
            feedback: Feedback::Unanswered,
            asset_ready: false,
            config,
            rng,
        }
    }

    /// Snapshot the words of `class_name`, shuffle them and show the first one.
    pub fn build_deck(&mut self, all_words: &[WordEntry], class_name: &str) -> RoundStatus {
        self.class_name = class_name.to_string();
        self.pool = all_words.to_vec();
        self.deck = RoundDeck::for_class(all_words, class_name, &mut self.rng);
        self.options_for_current();

        let status = self.status();
        match status {
            RoundStatus::Ready => log::info!(
                "built deck of {} words for class '{class_name}'",
                self.deck.len()
            ),
            RoundStatus::EmptyDeck => log::info!("class '{class_name}' has no words to play"),
        }
        status
    }

    pub fn status(&self) -> RoundStatus {
        if self.deck.is_empty() {
            RoundStatus::EmptyDeck
        } else {
            RoundStatus::Ready
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn deck(&self) -> &RoundDeck {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.deck.position()
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        self.deck.current()
    }

    /// The three choices for the current word, in display order.
    pub fn current_options(&self) -> &[String] {
        &self.options
    }

    /// The choices, but only once the current word's picture is ready.
    pub fn visible_options(&self) -> Option<&[String]> {
        if self.asset_ready && !self.options.is_empty() {
            Some(&self.options)
        } else {
            None
        }
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn is_asset_ready(&self) -> bool {
        self.asset_ready
    }

    /// `(word number, deck length)`, 1-based, for a "3 / 10" style header.
    pub fn progress(&self) -> Option<(usize, usize)> {
        if self.deck.is_empty() {
            None
        } else {
            Some((self.deck.position() + 1, self.deck.len()))
        }
    }

    /// Rebuild the option set for the current word.
    ///
    /// Uses the word's stored wrong spellings when both are usable, otherwise
    /// samples two other words from the whole pool. The set is shuffled, and
    /// feedback and picture readiness are reset.
    pub fn options_for_current(&mut self) -> &[String] {
        self.feedback = Feedback::Unanswered;
        self.asset_ready = false;

        let Some(current) = self.deck.current().cloned() else {
            self.options.clear();
            return &self.options;
        };

        let mut options = Vec::with_capacity(3);
        options.push(current.text.clone());
        match current.stored_distractors() {
            Some((w1, w2)) => options.extend([w1.to_string(), w2.to_string()]),
            None => options.extend(self.sample_distractors(&current.text)),
        }
        helpers::shuffle(&mut options, &mut self.rng);
        self.options = options;
        &self.options
    }

    fn sample_distractors(&mut self, correct: &str) -> Vec<String> {
        let key = correct.to_lowercase();
        let others: Vec<String> = self
            .pool
            .iter()
            .filter(|w| w.text.to_lowercase() != key)
            .map(|w| w.text.clone())
            .collect();
        let mut picked = helpers::sample(&others, 2, &mut self.rng);

        if picked.len() < 2 {
            log::debug!("word pool too small for '{correct}', padding with fallback words");
            for literal in &self.config.fallback_words {
                let lower = literal.trim().to_lowercase();
                let taken = picked.iter().any(|p| p.to_lowercase() == lower);
                if picked.len() < 2 && !lower.is_empty() && lower != key && !taken {
                    picked.push(literal.trim().to_string());
                }
            }
        }

        // Only reachable when a fallback word is the answer itself.
        if picked.len() < 2 {
            let (a, b) = generate_distractors_with(correct, &self.config.distractors, &mut self.rng);
            for candidate in [a, b] {
                if picked.len() < 2 && !picked.contains(&candidate) {
                    picked.push(candidate);
                }
            }
        }
        picked
    }

    /// Record the player's pick. Only the first answer per word counts.
    pub fn submit_answer(&mut self, choice: &str) -> Feedback {
        if self.feedback.is_answered() {
            return self.feedback;
        }
        let Some(current) = self.deck.current() else {
            return self.feedback;
        };
        self.feedback = if choice == current.text {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        log::debug!("answer '{choice}' for '{}' is {}", current.text, self.feedback);
        self.feedback
    }

    /// Move to the next word, reshuffling after the last one.
    pub fn advance(&mut self) -> Advance {
        if self.deck.is_empty() {
            return Advance::EmptyDeck;
        }
        let event = if self.deck.step() {
            Advance::Moved
        } else {
            log::info!("all words of class '{}' played, reshuffling", self.class_name);
            self.deck.reshuffle(&mut self.rng);
            Advance::Exhausted
        };
        self.options_for_current();
        event
    }

    /// The picture for the current word finished loading.
    ///
    /// Reveals the options and, when sound is on, speaks the word.
    pub fn mark_asset_ready(&mut self, speaker: &mut dyn Speaker, sound_on: bool) {
        let Some(current) = self.deck.current() else {
            return;
        };
        self.asset_ready = true;
        if sound_on {
            speech::say(speaker, &current.text, &self.config.speech);
        }
    }

    /// Speak the current word again. Ignored until the picture is ready.
    pub fn replay_audio(&self, speaker: &mut dyn Speaker) -> bool {
        match self.deck.current() {
            Some(current) if self.asset_ready => {
                speech::say(speaker, &current.text, &self.config.speech);
                true
            }
            _ => false,
        }
    }
}
