//! Tunable knobs for the quiz engine.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock behaviour. The retry bounds are the values the app has
//! always shipped with; they are kept configurable rather than hard-coded.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistractorSettings {
    /// Random rules tried per mutation step before accepting an unchanged word.
    pub mutation_attempts: u32,
    /// Regenerations of a colliding distractor before the suffix fallback.
    pub collision_retries: u32,
    /// Chance that a phonetic mistake applies two mutations instead of one.
    pub second_mistake_probability: f64,
}

impl Default for DistractorSettings {
    fn default() -> Self {
        DistractorSettings {
            mutation_attempts: 15,
            collision_retries: 10,
            second_mistake_probability: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub language: String,
    pub rate: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        SpeechSettings {
            language: "en-US".to_string(),
            rate: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Fixed seed for reproducible sessions; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    pub distractors: DistractorSettings,
    /// Words used to pad the answer choices when the word pool is too small.
    pub fallback_words: Vec<String>,
    pub speech: SpeechSettings,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            rng_seed: None,
            distractors: DistractorSettings::default(),
            fallback_words: vec!["Apple".to_string(), "Banana".to_string()],
            speech: SpeechSettings::default(),
        }
    }
}

impl QuizConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.distractors.second_mistake_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(
                "distractors.second_mistake_probability",
                format!("{p} is not between 0 and 1"),
            ));
        }
        if !self.speech.rate.is_finite() || self.speech.rate <= 0.0 {
            return Err(ConfigError::Invalid(
                "speech.rate",
                format!("{} must be a positive number", self.speech.rate),
            ));
        }
        let usable = self.fallback_words.iter().filter(|w| !w.trim().is_empty()).count();
        if usable < 2 {
            return Err(ConfigError::Invalid(
                "fallback_words",
                format!("need at least 2 non-empty words, got {usable}"),
            ));
        }
        Ok(())
    }

    /// RNG for one session: seeded when `rng_seed` is set, entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}
