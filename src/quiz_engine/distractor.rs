use rand::Rng;

use crate::quiz_engine::{config::DistractorSettings, phonetics::phonetic_mistake};

/// Two plausible wrong spellings of `word` using the default settings.
pub fn generate_distractors<R: Rng>(word: &str, rng: &mut R) -> (String, String) {
    generate_distractors_with(word, &DistractorSettings::default(), rng)
}

/// Two plausible wrong spellings of `word`.
///
/// Words shorter than two characters get `word + "s"` / `word + "e"` without
/// any mutation. Otherwise each candidate is a [`phonetic_mistake`]; a first
/// candidate equal to the word is regenerated, and so is a second candidate
/// equal to the word or to the first one. When the retry budget runs out the
/// suffix fallbacks `word + "s"` and `word + "z"` are used instead.
pub fn generate_distractors_with<R: Rng>(
    word: &str,
    settings: &DistractorSettings,
    rng: &mut R,
) -> (String, String) {
    let clean = word.trim();
    if clean.chars().count() < 2 {
        return (format!("{clean}s"), format!("{clean}e"));
    }

    let mut first = phonetic_mistake(clean, settings, rng);
    let mut second = phonetic_mistake(clean, settings, rng);

    let mut retries = 0;
    while first == clean && retries < settings.collision_retries {
        first = phonetic_mistake(clean, settings, rng);
        retries += 1;
    }
    retries = 0;
    while (second == clean || second == first) && retries < settings.collision_retries {
        second = phonetic_mistake(clean, settings, rng);
        retries += 1;
    }

    if first == clean {
        log::debug!("no mutation found for '{clean}', using suffix fallback");
        first = format!("{clean}s");
    }
    if second == clean || second == first {
        log::debug!("second distractor for '{clean}' collided, using suffix fallback");
        second = format!("{clean}z");
    }

    (first, second)
}
