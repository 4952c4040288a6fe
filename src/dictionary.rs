use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::info_log;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() { None } else { Some(word) }
}

/// The set of valid secrets and guesses.
///
/// Words are lowercased on the way in. Iteration is in sorted order, which
/// keeps seeded random draws reproducible across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().filter_map(|w| normalize(w.as_ref())).collect(),
        }
    }

    pub fn from_str_data(data: &str) -> Self {
        Self::from_words(data.lines())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut words = BTreeSet::new();
        for line in reader.lines() {
            if let Some(word) = normalize(&line?) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    pub fn embedded() -> Self {
        Self::from_str_data(EMBEDDED_DICTIONARY)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Uniform random member, or `None` when empty.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.iter().choose(rng).map(String::as_str)
    }
}

/// `<config dir>/distle/dictionary.txt`, when the platform has a config dir.
pub fn default_dictionary_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("distle").join("dictionary.txt"))
}

/// Loads the dictionary named on the command line, falling back to the user's
/// default file and finally to the built-in word list.
pub fn resolve_dictionary(path: Option<&Path>) -> io::Result<Dictionary> {
    if let Some(path) = path {
        info_log!("Loading dictionary from {}", path.display());
        return Dictionary::load_from_file(path);
    }
    if let Some(default_path) = default_dictionary_path()
        && default_path.is_file()
    {
        info_log!("Loading dictionary from {}", default_path.display());
        return Dictionary::load_from_file(default_path);
    }
    info_log!("Using embedded dictionary");
    Ok(Dictionary::embedded())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    #[test]
    fn test_from_str_normalizes_and_dedups() {
        let dict = Dictionary::from_str_data("Cat\ncat\n  DOG \n\nact\n");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("act"));
        assert!(!dict.contains("Cat"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let dict = Dictionary::from_words(["dog", "act", "cat"]);
        assert_eq!(dict.to_vec(), vec!["act", "cat", "dog"]);
    }

    #[test]
    fn test_embedded_dictionary_loads() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("distle_dictionary_test.txt");
        fs::write(&path, "Apple\nbanana\nAPPLE\n").unwrap();
        let dict = Dictionary::load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(dict.to_vec(), vec!["apple", "banana"]);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = std::env::temp_dir().join("distle_does_not_exist.txt");
        assert!(Dictionary::load_from_file(path).is_err());
    }

    #[test]
    fn test_random_word_is_seeded() {
        let dict = Dictionary::from_words(["cat", "cot", "dog", "act"]);
        let a = dict.random_word(&mut StdRng::seed_from_u64(7)).map(str::to_owned);
        let b = dict.random_word(&mut StdRng::seed_from_u64(7)).map(str::to_owned);
        assert_eq!(a, b);
        assert!(dict.contains(&a.unwrap()));
        assert_eq!(Dictionary::default().random_word(&mut StdRng::seed_from_u64(7)), None);
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = std::env::temp_dir().join("distle_resolve_test.txt");
        fs::write(&path, "one\ntwo\n").unwrap();
        let dict = resolve_dictionary(Some(path.as_path())).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(dict.len(), 2);
    }
}
