use std::collections::HashMap;

use crate::rank::{Word, WordId};

/**
    Owns the canonical [`Word`] record of every distinct word seen during a scan.

    Records live in an arena and are addressed by [`WordId`], so the top-k selector can
    refer to a record without holding a second copy of it.
*/
#[derive(Default)]
pub struct FrequencyTable {
    index: HashMap<String, WordId>,
    words: Vec<Word>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word` and returns its record after the increment.
    pub fn record(&mut self, word: &str) -> &Word {
        self.total += 1;

        let id = match self.index.get(word) {
            Some(&id) => {
                self.words[id].count += 1;
                id
            }
            None => {
                let id = self.words.len();
                self.words.push(Word::new(id, String::from(word)));
                self.index.insert(String::from(word), id);
                id
            }
        };

        &self.words[id]
    }

    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn lookup(&self, word: &str) -> Option<&Word> {
        self.index.get(word).map(|&id| &self.words[id])
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of tokens recorded, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[test]
fn test_record_creates_then_increments() {
    let mut table = FrequencyTable::new();

    let first = table.record("hate").clone();
    assert_eq!(first.count, 1);
    assert_eq!(first.content, "hate");

    table.record("love");
    let again = table.record("hate");
    assert_eq!(again.count, 2);
    assert_eq!(again.id, first.id);

    assert_eq!(table.len(), 2);
    assert_eq!(table.total(), 3);
}

#[test]
fn test_lookup_and_get_agree() {
    let mut table = FrequencyTable::new();
    for w in ["a", "b", "a", "", "a"] {
        table.record(w);
    }

    let a = table.lookup("a").unwrap();
    assert_eq!(a.count, 3);
    assert_eq!(table.get(a.id).unwrap().content, "a");
    assert_eq!(table.lookup("").unwrap().count, 1);
    assert!(table.lookup("c").is_none());
    assert_eq!(table.iter().map(|w| w.count).sum::<usize>(), table.total());
}
