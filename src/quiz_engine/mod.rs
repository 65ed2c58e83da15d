//! Core quiz engine: distractor generation, round sequencing and word storage.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: word entries, feedback, round events, import/export shape |
//! | `config`     | `QuizConfig` with retry bounds, fallback words and speech settings |
//! | `error`      | `LibraryError` and `ConfigError` |
//! | `helpers`    | Fisher-Yates shuffle, sampling and capitalisation helpers |
//! | `phonetics`  | Misspelling rule table and a single phonetic mistake |
//! | `distractor` | `generate_distractors()` with collision avoidance |
//! | `deck`       | Per-class shuffled deck with reshuffle on exhaustion |
//! | `round`      | `RoundController` state machine for one play session |
//! | `speech`     | Text-to-speech collaborator trait |
//! | `storage`    | Key-value backends (in-memory, JSON file) |
//! | `library`    | Classes and words: load/save, import/export, search |

pub mod config;
pub mod deck;
pub mod distractor;
pub mod error;
pub mod helpers;
pub mod library;
pub mod models;
pub mod phonetics;
pub mod round;
pub mod speech;
pub mod storage;

pub use config::{DistractorSettings, QuizConfig, SpeechSettings};
pub use deck::RoundDeck;
pub use distractor::{generate_distractors, generate_distractors_with};
pub use error::{ConfigError, LibraryError};
pub use library::{Library, WordRepository};
pub use models::{Advance, Feedback, LibraryData, RoundStatus, WordEntry};
pub use round::RoundController;
pub use speech::{LogSpeaker, Speaker};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
