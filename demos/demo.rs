//! End-to-end demo of the quiz engine.
//!
//! Run with: `RUST_LOG=info cargo run --example demo`
//!
//! 1. **Library**: loads from an empty in-memory store (which seeds the demo
//!    class), adds a class and a few words with generated misspellings.
//! 2. **Round**: plays two passes over the class, answering every other word
//!    wrong, so the deck exhausts and reshuffles once.
//! 3. **Export**: prints the library as the JSON a teacher would download.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spelling_bee::{
    Advance, Feedback, Library, LogSpeaker, MemoryStore, QuizConfig, RoundController,
    RoundStatus, WordRepository,
};

const CLASS: &str = "1-A";

fn main() {
    env_logger::init();

    let mut store = MemoryStore::new();
    let mut library = Library::load(&mut store);
    library.add_class(CLASS);

    let mut rng = StdRng::seed_from_u64(7);
    let classes = vec![CLASS.to_string()];
    for text in ["Elephant", "Rabbit", "Station", "Phone", "Summer"] {
        match library.add_word_generated(text, &classes, &mut rng) {
            Ok(w) => println!("  added {:<10} distractors: {} / {}", w.text, w.wrong1, w.wrong2),
            Err(e) => eprintln!("  could not add {text}: {e}"),
        }
    }
    // A word without stored misspellings borrows other words as options.
    if let Err(e) = library.add_word("Tree", "", "", &classes) {
        eprintln!("  could not add Tree: {e}");
    }
    if let Err(e) = library.save(&mut store) {
        eprintln!("  could not save: {e}");
    }

    let config = QuizConfig { rng_seed: Some(42), ..QuizConfig::default() };
    let mut round = RoundController::start(library.list_words(), CLASS, config);
    if round.status() == RoundStatus::EmptyDeck {
        println!("No words in {CLASS}.");
        return;
    }

    let mut speaker = LogSpeaker::new();
    let plays = round.deck().len() * 2;
    for turn in 0..plays {
        round.mark_asset_ready(&mut speaker, library.sound_enabled());
        let Some(word) = round.current_word().map(|w| w.text.clone()) else {
            break;
        };
        let options = round.visible_options().unwrap_or_default().to_vec();
        let (n, total) = round.progress().unwrap_or((0, 0));

        // Pick the right answer on even turns, the first wrong one otherwise.
        let pick = if turn % 2 == 0 {
            word.clone()
        } else {
            options.iter().find(|o| **o != word).cloned().unwrap_or_default()
        };
        let verdict = match round.submit_answer(&pick) {
            Feedback::Correct => "correct",
            Feedback::Incorrect => "wrong",
            Feedback::Unanswered => "?",
        };
        println!("[{n}/{total}] {:<30} picked {pick:<10} {verdict}", options.join(" | "));

        if round.advance() == Advance::Exhausted {
            println!("── all words played, reshuffling ──");
        }
    }
    println!("Spoke {} words.", speaker.spoken());

    match library.export_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("export failed: {e}"),
    }
}
