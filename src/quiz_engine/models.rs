use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary records
// ---------------------------------------------------------------------------

/// One vocabulary word as entered by the teacher.
///
/// Field names follow the persisted/exported JSON layout so that files
/// written by older versions of the app import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: String,
    /// Correct spelling, trimmed.
    pub text: String,
    #[serde(rename = "wrongOption1", default)]
    pub wrong1: String,
    #[serde(rename = "wrongOption2", default)]
    pub wrong2: String,
    /// Class names this word belongs to.
    pub classes: Vec<String>,
}

impl WordEntry {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        wrong1: impl Into<String>,
        wrong2: impl Into<String>,
        classes: Vec<String>,
    ) -> Self {
        WordEntry {
            id: id.into(),
            text: text.into(),
            wrong1: wrong1.into(),
            wrong2: wrong2.into(),
            classes,
        }
    }

    pub fn in_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    /// Both stored wrong spellings, if they are usable as answer options.
    ///
    /// An option that is blank or identical to the correct text does not count.
    pub fn stored_distractors(&self) -> Option<(&str, &str)> {
        let usable = |w: &str| !w.is_empty() && w != self.text;
        if usable(&self.wrong1) && usable(&self.wrong2) {
            Some((self.wrong1.as_str(), self.wrong2.as_str()))
        } else {
            None
        }
    }
}

/// Full repository contents, the shape used for import and export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryData {
    pub classes: Vec<String>,
    pub words: Vec<WordEntry>,
}

// ---------------------------------------------------------------------------
// Round state
// ---------------------------------------------------------------------------

/// Answer feedback for the word currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn is_answered(self) -> bool {
        !matches!(self, Feedback::Unanswered)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Unanswered => write!(f, "unanswered"),
            Feedback::Correct    => write!(f, "correct"),
            Feedback::Incorrect  => write!(f, "incorrect"),
        }
    }
}

/// Whether a built deck has anything to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Ready,
    /// No word carries the chosen class; the caller should offer a way back.
    EmptyDeck,
}

/// Outcome of [`RoundController::advance`](crate::RoundController::advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next word of the same deck.
    Moved,
    /// The last word was passed; the deck was reshuffled and restarted.
    Exhausted,
    EmptyDeck,
}
