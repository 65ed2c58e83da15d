//! # spelling_bee
//!
//! An offline engine for a picture-and-audio vocabulary quiz for young
//! language learners.
//!
//! A teacher keeps a list of classes and vocabulary words. A student picks a
//! class and plays through its words: for each word a picture is shown, the
//! word is spoken, and the student chooses the right spelling out of three.
//!
//! ## How it works
//!
//! 1. Words live in a [`Library`], loaded from any [`KeyValueStore`]. Adding a
//!    word with [`Library::add_word_generated`] runs [`generate_distractors`],
//!    which builds two plausible misspellings from a table of phonetic rules
//!    (`a→e`, `ph→f`, `tion→shun`, doubled letters, silent `e`, ...).
//! 2. A [`RoundController`] snapshots the words of one class into a shuffled
//!    deck and exposes the current word plus three shuffled choices. Words
//!    without stored misspellings borrow other words from the pool instead.
//! 3. The caller reports picture readiness (which reveals the choices and
//!    speaks the word through a [`Speaker`]), submits one answer per word, and
//!    advances. Passing the last word reshuffles the deck and starts over.
//!
//! ## Key features
//!
//! - **Deterministic**: every random step takes an injected `rand::Rng`; set
//!   `QuizConfig::rng_seed` to replay the exact same session.
//! - **Never stuck**: empty decks, thin word pools and unmutable words all
//!   degrade to well-defined values instead of errors.
//!
//! ## Quick start
//!
//! ```rust
//! use spelling_bee::{
//!     Feedback, Library, LogSpeaker, MemoryStore, QuizConfig, RoundController,
//!     RoundStatus, WordRepository,
//! };
//!
//! // An empty store is seeded with a demo class.
//! let mut store = MemoryStore::new();
//! let library = Library::load(&mut store);
//! let class = library.list_classes()[0].clone();
//!
//! let config = QuizConfig { rng_seed: Some(42), ..QuizConfig::default() };
//! let mut round = RoundController::start(library.list_words(), &class, config);
//! assert_eq!(round.status(), RoundStatus::Ready);
//!
//! let mut speaker = LogSpeaker::new();
//! round.mark_asset_ready(&mut speaker, library.sound_enabled());
//! let answer = round.current_word().unwrap().text.clone();
//! assert_eq!(round.submit_answer(&answer), Feedback::Correct);
//! round.advance();
//! ```

pub mod quiz_engine;

pub use quiz_engine::{
    generate_distractors, generate_distractors_with, Advance, ConfigError, DistractorSettings,
    Feedback, JsonFileStore, KeyValueStore, Library, LibraryData, LibraryError, LogSpeaker,
    MemoryStore, QuizConfig, RoundController, RoundDeck, RoundStatus, Speaker, SpeechSettings,
    WordEntry, WordRepository,
};
