use serde::Serialize;
use tracing::debug;

use crate::tokenize::{Tokenization, Tokenizer};

pub mod selector;
pub mod table;

pub use selector::{Candidate, TopKSelector};
pub use table::FrequencyTable;

/// Index of a [`Word`] inside its [`FrequencyTable`].
pub type WordId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub content: String,
    pub count: usize,
}

impl Word {
    pub fn new(id: WordId, content: String) -> Self {
        Self {
            id,
            content,
            count: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

/// Words ordered from most to least frequent. Equal counts appear in no particular order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedWords(pub Vec<RankedWord>);

impl RankedWords {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedWord> {
        self.0.iter()
    }

    pub fn into_words(self) -> Vec<String> {
        self.0.into_iter().map(|w| w.word).collect()
    }
}

impl IntoIterator for RankedWords {
    type Item = RankedWord;
    type IntoIter = std::vec::IntoIter<RankedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/**
    Finds the `k` most frequent words of a text in a single pass.

    Every word updates its record in a [`FrequencyTable`] and the updated count is
    folded into a [`TopKSelector`] of capacity `k`, so memory beyond the table itself
    stays proportional to `k`.
*/
#[derive(Copy, Clone, Debug)]
pub struct TopWords {
    k: usize,
    tokenization: Tokenization,
}

impl TopWords {
    pub fn new(k: usize) -> Self {
        TopWords {
            k,
            tokenization: Tokenization::default(),
        }
    }

    pub fn tokenization(mut self, tokenization: Tokenization) -> Self {
        self.tokenization = tokenization;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    #[tracing::instrument(skip_all, fields(k = self.k, tokenization = ?self.tokenization))]
    pub fn rank(&self, input: &str) -> RankedWords {
        if self.k == 0 {
            return RankedWords::default();
        }

        let tokenizer = Tokenizer::new(input, self.tokenization);
        let mut table = FrequencyTable::new();
        let mut selector = TopKSelector::with_capacity(self.k);

        for token in tokenizer.tokens() {
            let word = table.record(token);
            selector.offer(word.id, word.count);
        }

        let ranked = selector
            .into_descending()
            .into_iter()
            .filter_map(|c| table.get(c.id))
            .map(|w| RankedWord {
                word: w.content.clone(),
                count: w.count,
            })
            .collect::<Vec<RankedWord>>();

        debug!(
            tokens = table.total(),
            distinct = table.len(),
            selected = ranked.len(),
            "ranked input"
        );

        RankedWords(ranked)
    }

    pub fn words(&self, input: &str) -> Vec<String> {
        self.rank(input).into_words()
    }
}

/**
    Returns the `k` most frequent space-separated words of `input`, lower-cased and
    ordered from most to least frequent.

    A missing input or a `k` of zero or less gives an empty result. The relative order
    of words with equal counts, and which of them makes the cut at position `k`, is
    unspecified.
*/
pub fn word_frequency(input: Option<&str>, k: isize) -> Vec<String> {
    match (input, usize::try_from(k)) {
        (Some(input), Ok(k)) if k > 0 => TopWords::new(k).words(input),
        _ => Vec::new(),
    }
}

#[cfg(test)]
fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn test_midterms_tie() {
    let top = word_frequency(Some("i love to hAtE midterms I hate MiDTeRms SEASON"), 3);
    assert_eq!(sorted(top), vec!["hate", "i", "midterms"]);
}

#[test]
fn test_unambiguous_order() {
    assert_eq!(word_frequency(Some("a a a b b c"), 2), vec!["a", "b"]);
}

#[test]
fn test_degenerate_inputs() {
    assert!(word_frequency(None, 5).is_empty());
    assert!(word_frequency(Some("x"), 0).is_empty());
    assert!(word_frequency(Some("x"), -3).is_empty());
}

#[test]
fn test_k_larger_than_distinct_words() {
    assert_eq!(word_frequency(Some("c b c a c b"), 10), vec!["c", "b", "a"]);
}

#[test]
fn test_late_winner_displaces_early_words() {
    let input = "a b c d d d d";
    assert_eq!(word_frequency(Some(input), 1), vec!["d"]);

    let top = TopWords::new(2).rank(input);
    assert_eq!(top.0[0], RankedWord { word: String::from("d"), count: 4 });
    assert_eq!(top.0[1].count, 1);
}

#[test]
fn test_empty_words_are_counted_in_single_space_mode() {
    let input = "a  b  c  a";
    let top = TopWords::new(1).words(input);
    assert_eq!(top, vec![""]);

    let top = TopWords::new(1)
        .tokenization(Tokenization::Whitespace)
        .words(input);
    assert_eq!(top, vec!["a"]);
}

#[test]
fn test_rank_reports_counts() {
    let ranked = TopWords::new(3).rank("to be or not to be to");
    let counts: Vec<usize> = ranked.iter().map(|w| w.count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
    assert_eq!(ranked.0[0].word, "to");
    assert_eq!(ranked.0[1].word, "be");
}

#[test]
fn test_empty_input_is_one_empty_word() {
    assert_eq!(word_frequency(Some(""), 2), vec![""]);
    assert!(TopWords::new(2)
        .tokenization(Tokenization::Whitespace)
        .rank("")
        .is_empty());
}
