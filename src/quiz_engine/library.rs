//! Classes and words managed by the teacher, plus their persistence.
//!
//! The three persisted fields (class list, word list, sound flag) are
//! stored under separate keys and loaded independently: a corrupt class
//! list does not stop a valid word list from loading (the class names are
//! recovered from the word tags). When nothing usable is stored, a small
//! demo class is seeded so a fresh install has something to play.

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::quiz_engine::{
    distractor::generate_distractors,
    error::LibraryError,
    models::{LibraryData, WordEntry},
    storage::KeyValueStore,
};

pub const CLASSES_KEY: &str = "nt_spelling_bee_classes";
pub const WORDS_KEY: &str = "nt_spelling_bee_words";
pub const SOUND_KEY: &str = "nt_spelling_bee_sound";

pub const DEMO_CLASS: &str = "1-Sinf (Demo)";

/// The operations the rest of the app needs from a word store.
pub trait WordRepository {
    fn list_words(&self) -> &[WordEntry];
    fn list_classes(&self) -> &[String];
    /// Add a class. Blank and duplicate names are ignored (returns `false`).
    fn add_class(&mut self, name: &str) -> bool;
    fn add_word(
        &mut self,
        text: &str,
        wrong1: &str,
        wrong2: &str,
        classes: &[String],
    ) -> Result<WordEntry, LibraryError>;
    /// Remove a word by id. Returns `false` if no such word existed.
    fn delete_word(&mut self, id: &str) -> bool;
    /// Replace everything with `data`. Nothing is merged.
    fn import_all(&mut self, data: LibraryData);
    fn export_all(&self) -> LibraryData;
}

#[derive(Debug)]
pub struct Library {
    data: LibraryData,
    sound_enabled: bool,
    id_rng: StdRng,
}

impl Default for Library {
    fn default() -> Self {
        Library::new(LibraryData::default())
    }
}

impl Library {
    pub fn new(data: LibraryData) -> Self {
        let mut library = Library {
            data: LibraryData::default(),
            sound_enabled: true,
            id_rng: StdRng::from_entropy(),
        };
        library.import_all(data);
        library
    }

    /// The class and words a fresh install starts with.
    pub fn demo_data() -> LibraryData {
        let classes = vec![DEMO_CLASS.to_string()];
        LibraryData {
            words: vec![
                WordEntry::new("demo_1", "Apple", "Epple", "Aplle", classes.clone()),
                WordEntry::new("demo_2", "School", "Skool", "Scool", classes.clone()),
            ],
            classes,
        }
    }

    /// Load from `store`, falling back per field and seeding demo data.
    pub fn load(store: &mut dyn KeyValueStore) -> Self {
        let classes = store
            .get(CLASSES_KEY)
            .and_then(|raw| match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(classes) => Some(classes),
                Err(e) => {
                    log::warn!("discarding malformed class list: {e}");
                    None
                }
            })
            .filter(|classes| !classes.is_empty());

        let words = store
            .get(WORDS_KEY)
            .and_then(|raw| match serde_json::from_str::<Vec<WordEntry>>(&raw) {
                Ok(words) => Some(words),
                Err(e) => {
                    log::warn!("discarding malformed word list: {e}");
                    None
                }
            })
            .unwrap_or_default();

        let sound_enabled = store
            .get(SOUND_KEY)
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(true);

        let mut library = match (classes, words.is_empty()) {
            (Some(classes), _) => Library::new(LibraryData { classes, words }),
            (None, false) => {
                log::warn!("class list missing, rebuilding it from word tags");
                Library::new(LibraryData { classes: classes_from_tags(&words), words })
            }
            (None, true) => {
                log::info!("no saved data found, seeding demo data");
                let library = Library::new(Library::demo_data());
                if let Err(e) = library.save_lists(store) {
                    log::warn!("failed to persist demo data: {e}");
                }
                library
            }
        };
        library.sound_enabled = sound_enabled;
        library
    }

    /// Write all three fields to `store`.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), LibraryError> {
        self.save_lists(store)?;
        store.set(SOUND_KEY, serde_json::to_string(&self.sound_enabled)?)
    }

    fn save_lists(&self, store: &mut dyn KeyValueStore) -> Result<(), LibraryError> {
        store.set(CLASSES_KEY, serde_json::to_string(&self.data.classes)?)?;
        store.set(WORDS_KEY, serde_json::to_string(&self.data.words)?)
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, on: bool) {
        self.sound_enabled = on;
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Add a word whose wrong spellings are generated automatically.
    pub fn add_word_generated<R: Rng>(
        &mut self,
        text: &str,
        classes: &[String],
        rng: &mut R,
    ) -> Result<WordEntry, LibraryError> {
        let text = validate_word(text, classes)?;
        let (wrong1, wrong2) = generate_distractors(text, rng);
        self.add_word(text, &wrong1, &wrong2, classes)
    }

    /// Words whose text contains `term` (case-insensitive), newest first.
    pub fn search(&self, term: &str) -> Vec<&WordEntry> {
        let needle = term.trim().to_lowercase();
        self.data
            .words
            .iter()
            .rev()
            .filter(|w| w.text.to_lowercase().contains(&needle))
            .collect()
    }

    /// Parse an exported file and replace the library with it.
    ///
    /// The document must be an object carrying both `classes` and `words`;
    /// anything else is rejected and the library is left as it was.
    pub fn import_json(&mut self, json: &str) -> Result<(), LibraryError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let has_shape = value
            .as_object()
            .map_or(false, |o| o.contains_key("classes") && o.contains_key("words"));
        if !has_shape {
            return Err(LibraryError::InvalidImport(
                "expected an object with 'classes' and 'words'".to_string(),
            ));
        }
        let data: LibraryData = serde_json::from_value(value)?;
        log::info!("importing {} classes and {} words", data.classes.len(), data.words.len());
        self.import_all(data);
        Ok(())
    }

    pub fn export_json(&self) -> Result<String, LibraryError> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    fn next_id(&mut self) -> String {
        loop {
            let id = format!("W-{:08X}", self.id_rng.next_u32());
            if !self.data.words.iter().any(|w| w.id == id) {
                return id;
            }
        }
    }
}

impl WordRepository for Library {
    fn list_words(&self) -> &[WordEntry] {
        &self.data.words
    }

    fn list_classes(&self) -> &[String] {
        &self.data.classes
    }

    fn add_class(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.data.classes.iter().any(|c| c == name) {
            return false;
        }
        self.data.classes.push(name.to_string());
        true
    }

    fn add_word(
        &mut self,
        text: &str,
        wrong1: &str,
        wrong2: &str,
        classes: &[String],
    ) -> Result<WordEntry, LibraryError> {
        let text = validate_word(text, classes)?;
        let entry = WordEntry::new(
            self.next_id(),
            text,
            wrong1.trim(),
            wrong2.trim(),
            classes.to_vec(),
        );
        self.data.words.push(entry.clone());
        Ok(entry)
    }

    fn delete_word(&mut self, id: &str) -> bool {
        let before = self.data.words.len();
        self.data.words.retain(|w| w.id != id);
        self.data.words.len() != before
    }

    fn import_all(&mut self, data: LibraryData) {
        let mut classes: Vec<String> = Vec::with_capacity(data.classes.len());
        for class in data.classes {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        self.data = LibraryData { classes, words: data.words };
    }

    fn export_all(&self) -> LibraryData {
        self.data.clone()
    }
}

/// Class names in order of first appearance across the words' tags.
fn classes_from_tags(words: &[WordEntry]) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for class in words.iter().flat_map(|w| w.classes.iter()) {
        if !classes.contains(class) {
            classes.push(class.clone());
        }
    }
    classes
}

fn validate_word<'a>(text: &'a str, classes: &[String]) -> Result<&'a str, LibraryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LibraryError::EmptyWord);
    }
    if classes.is_empty() {
        return Err(LibraryError::NoClassSelected(text.to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::storage::MemoryStore;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_store_is_seeded_and_written_back() {
        let mut store = MemoryStore::new();
        let library = Library::load(&mut store);
        assert_eq!(library.list_classes(), &[DEMO_CLASS.to_string()]);
        assert_eq!(library.list_words().len(), 2);
        assert!(library.sound_enabled());
        assert!(store.get(CLASSES_KEY).is_some());
        assert!(store.get(WORDS_KEY).is_some());
    }

    #[test]
    fn corrupt_classes_do_not_block_words() {
        let mut store = MemoryStore::new();
        store.set(CLASSES_KEY, "{not json".to_string()).unwrap();
        store
            .set(WORDS_KEY, r#"[{"id":"1","text":"Cat","classes":["A","B"]},{"id":"2","text":"Dog","classes":["B"]}]"#.to_string())
            .unwrap();
        store.set(SOUND_KEY, "false".to_string()).unwrap();

        let library = Library::load(&mut store);
        assert_eq!(library.list_classes(), &classes(&["A", "B"]));
        assert_eq!(library.list_words().len(), 2);
        assert!(!library.sound_enabled());
    }

    #[test]
    fn missing_wrong_options_and_bad_sound_flag_use_defaults() {
        let mut store = MemoryStore::new();
        store.set(CLASSES_KEY, r#"["A"]"#.to_string()).unwrap();
        store.set(WORDS_KEY, r#"[{"id":"1","text":"Cat","classes":["A"]}]"#.to_string()).unwrap();
        store.set(SOUND_KEY, "maybe".to_string()).unwrap();

        let library = Library::load(&mut store);
        assert_eq!(library.list_classes(), &classes(&["A"]));
        assert_eq!(library.list_words()[0].text, "Cat");
        assert_eq!(library.list_words()[0].wrong1, "");
        assert!(library.sound_enabled());
    }

    #[test]
    fn empty_class_list_with_no_words_is_reseeded() {
        let mut store = MemoryStore::new();
        store.set(CLASSES_KEY, "[]".to_string()).unwrap();
        store.set(WORDS_KEY, "[]".to_string()).unwrap();
        let library = Library::load(&mut store);
        assert_eq!(library.list_classes(), &[DEMO_CLASS.to_string()]);
    }

    #[test]
    fn corrupt_words_load_as_empty() {
        let mut store = MemoryStore::new();
        store.set(CLASSES_KEY, r#"["A","B"]"#.to_string()).unwrap();
        store.set(WORDS_KEY, r#"{"oops":true}"#.to_string()).unwrap();
        let library = Library::load(&mut store);
        assert_eq!(library.list_classes(), &classes(&["A", "B"]));
        assert!(library.list_words().is_empty());
    }

    #[test]
    fn save_then_load_restores_everything() {
        let mut store = MemoryStore::new();
        let mut library = Library::new(LibraryData::default());
        library.add_class("2-B");
        library.add_word("Sun", "Son", "Sen", &classes(&["2-B"])).unwrap();
        library.set_sound_enabled(false);
        library.save(&mut store).unwrap();

        let loaded = Library::load(&mut store);
        assert_eq!(loaded.export_all(), library.export_all());
        assert!(!loaded.sound_enabled());
    }

    #[test]
    fn add_class_trims_and_rejects_duplicates() {
        let mut library = Library::default();
        assert!(library.add_class(" 1-A "));
        assert!(!library.add_class("1-A"));
        assert!(!library.add_class("   "));
        assert_eq!(library.list_classes(), &classes(&["1-A"]));
    }

    #[test]
    fn add_word_validates_and_trims() {
        let mut library = Library::default();
        assert!(matches!(
            library.add_word("  ", "a", "b", &classes(&["A"])),
            Err(LibraryError::EmptyWord)
        ));
        assert!(matches!(
            library.add_word("Cat", "Kat", "Cet", &[]),
            Err(LibraryError::NoClassSelected(_))
        ));
        let cat = library.add_word(" Cat ", " Kat", "Cet ", &classes(&["A"])).unwrap();
        assert_eq!((cat.text.as_str(), cat.wrong1.as_str(), cat.wrong2.as_str()), ("Cat", "Kat", "Cet"));
        assert_eq!(library.list_words().len(), 1);
    }

    #[test]
    fn generated_word_gets_two_distractors() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut library = Library::default();
        let entry = library
            .add_word_generated("Rabbit", &classes(&["A"]), &mut rng)
            .unwrap();
        assert!(entry.stored_distractors().is_some());
        assert_ne!(entry.wrong1, entry.wrong2);
    }

    #[test]
    fn ids_are_unique_and_deletable() {
        let mut library = Library::default();
        let a = library.add_word("Cat", "", "", &classes(&["A"])).unwrap();
        let b = library.add_word("Dog", "", "", &classes(&["A"])).unwrap();
        assert_ne!(a.id, b.id);
        assert!(library.delete_word(&a.id));
        assert!(!library.delete_word(&a.id));
        assert_eq!(library.list_words(), &[b]);
    }

    #[test]
    fn search_is_case_insensitive_newest_first() {
        let mut library = Library::default();
        library.add_word("Apple", "", "", &classes(&["A"])).unwrap();
        library.add_word("Pineapple", "", "", &classes(&["A"])).unwrap();
        library.add_word("Dog", "", "", &classes(&["A"])).unwrap();
        let hits: Vec<&str> = library.search("APPLE").iter().map(|w| w.text.as_str()).collect();
        assert_eq!(hits, vec!["Pineapple", "Apple"]);
        assert_eq!(library.search("").len(), 3);
    }

    #[test]
    fn import_rejects_wrong_shape_and_keeps_state() {
        let mut library = Library::new(Library::demo_data());
        let before = library.export_all();

        assert!(matches!(
            library.import_json(r#"{"classes": ["A"]}"#),
            Err(LibraryError::InvalidImport(_))
        ));
        assert!(matches!(library.import_json("[1, 2]"), Err(LibraryError::InvalidImport(_))));
        assert!(matches!(library.import_json("nope"), Err(LibraryError::Json(_))));
        assert!(matches!(
            library.import_json(r#"{"classes": "A", "words": []}"#),
            Err(LibraryError::Json(_))
        ));
        assert_eq!(library.export_all(), before);
    }

    #[test]
    fn export_json_uses_the_file_layout() {
        let library = Library::new(Library::demo_data());
        let json = library.export_json().unwrap();
        assert!(json.contains("\"wrongOption1\": \"Epple\""));
        assert!(json.contains("\"classes\""));

        let mut other = Library::default();
        other.import_json(&json).unwrap();
        assert_eq!(other.export_all(), library.export_all());
    }

    #[test]
    fn import_all_drops_duplicate_classes() {
        let mut library = Library::default();
        library.import_all(LibraryData { classes: classes(&["A", "B", "A"]), words: vec![] });
        assert_eq!(library.list_classes(), &classes(&["A", "B"]));
    }

    #[test]
    fn toggle_sound_flips_the_flag() {
        let mut library = Library::default();
        assert!(!library.toggle_sound());
        assert!(library.toggle_sound());
    }
}
