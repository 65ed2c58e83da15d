//! Phonetic misspelling rules.
//!
//! A mistake is one or two substring substitutions drawn from [`RULES`]. Each
//! substitution replaces a single randomly chosen occurrence of its target,
//! which keeps the result close enough to the real word to be a plausible
//! wrong answer for a young reader.

use rand::Rng;

use crate::quiz_engine::{config::DistractorSettings, helpers};

/// One substring substitution (or the silent-e drop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Replace(&'static str, &'static str),
    /// Drop a trailing `e` from words longer than three characters.
    DropTrailingE,
}

pub const RULES: &[Rule] = &[
    // vowels
    Rule::Replace("a", "e"),
    Rule::Replace("e", "i"),
    Rule::Replace("i", "ee"),
    Rule::Replace("ee", "i"),
    Rule::Replace("o", "u"),
    Rule::Replace("u", "o"),
    Rule::Replace("ea", "ee"),
    Rule::Replace("ai", "ay"),
    Rule::Replace("ay", "ai"),
    // consonant sounds
    Rule::Replace("c", "k"),
    Rule::Replace("k", "c"),
    Rule::Replace("ph", "f"),
    Rule::Replace("f", "ph"),
    Rule::Replace("s", "z"),
    Rule::Replace("z", "s"),
    Rule::Replace("tion", "shun"),
    Rule::Replace("ck", "k"),
    // doubled letters
    Rule::Replace("tt", "t"),
    Rule::Replace("pp", "p"),
    Rule::Replace("ll", "l"),
    Rule::Replace("mm", "m"),
    Rule::Replace("nn", "n"),
    Rule::Replace("t", "tt"),
    Rule::Replace("p", "pp"),
    Rule::Replace("l", "ll"),
    Rule::Replace("m", "mm"),
    Rule::DropTrailingE,
];

impl Rule {
    /// Apply the rule once. Returns the input unchanged when it does not match.
    pub fn apply<R: Rng>(self, word: &str, rng: &mut R) -> String {
        match self {
            Rule::Replace(target, replacement) => replace_random(word, target, replacement, rng),
            Rule::DropTrailingE => {
                if word.chars().count() > 3 && word.ends_with('e') {
                    word[..word.len() - 1].to_string()
                } else {
                    word.to_string()
                }
            }
        }
    }
}

/// Replace one uniformly chosen, non-overlapping occurrence of `target`.
pub fn replace_random<R: Rng>(word: &str, target: &str, replacement: &str, rng: &mut R) -> String {
    let hits: Vec<usize> = word.match_indices(target).map(|(i, _)| i).collect();
    if hits.is_empty() {
        return word.to_string();
    }
    let at = hits[rng.gen_range(0..hits.len())];
    format!("{}{}{}", &word[..at], replacement, &word[at + target.len()..])
}

/// Produce one misspelling of `source`.
///
/// Works on a lower-cased copy; the first character is upper-cased again if
/// `source` started with one. A step whose random rules all miss leaves the
/// word as it was, so the result may equal `source`.
pub fn phonetic_mistake<R: Rng>(source: &str, settings: &DistractorSettings, rng: &mut R) -> String {
    let mut modified = source.to_lowercase();
    let mutations = if rng.gen_bool(settings.second_mistake_probability) { 2 } else { 1 };

    for _ in 0..mutations {
        let mut attempt = modified.clone();
        let mut tries = 0;
        while attempt == modified && tries < settings.mutation_attempts {
            let rule = RULES[rng.gen_range(0..RULES.len())];
            attempt = rule.apply(&modified, rng);
            tries += 1;
        }
        modified = attempt;
    }

    if helpers::starts_capitalised(source) {
        helpers::capitalise_first(&modified)
    } else {
        modified
    }
}
