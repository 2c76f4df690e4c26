//! Flat-file vocabulary store.
//!
//! Words learned from user input, kept as a newline-delimited UTF-8 file.
//! An absent file loads as an empty vocabulary; saving rewrites the whole
//! file.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, StrataError};

/// Ordered list of words seen so far, first occurrence first.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Load a vocabulary from `path`; an absent file yields an empty one.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| StrataError::StoreReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let words = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        debug!("Loaded {} vocabulary words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Rewrite the vocabulary file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = self.words.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content).map_err(|e| StrataError::StoreWriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Record every unseen word of `text`, returning the newly learned ones
    /// in encounter order.
    pub fn learn(&mut self, text: &str) -> Vec<String> {
        let mut learned = Vec::new();
        for word in text.split_whitespace() {
            if !self.contains(word) {
                self.words.push(word.to_string());
                learned.push(word.to_string());
            }
        }
        learned
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|known| known == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_absent_file_is_empty() {
        let dir = tempdir().unwrap();
        let vocabulary = Vocabulary::load(&dir.path().join("vocabulary.txt")).unwrap();
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn test_learn_records_new_words_once() {
        let mut vocabulary = Vocabulary::default();

        let learned = vocabulary.learn("hello there hello");
        assert_eq!(learned, vec!["hello", "there"]);

        let learned_again = vocabulary.learn("hello there");
        assert!(learned_again.is_empty());
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");

        let mut vocabulary = Vocabulary::default();
        vocabulary.learn("alpha beta gamma");
        vocabulary.save(&path).unwrap();

        let loaded = Vocabulary::load(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains("beta"));
    }

    #[test]
    fn test_save_empty_vocabulary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");

        Vocabulary::default().save(&path).unwrap();
        assert!(Vocabulary::load(&path).unwrap().is_empty());
    }
}
