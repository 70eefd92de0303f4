use std::iter::FusedIterator;
use std::str::SplitWhitespace;

const DELIMITER: char = ' ';

/// How a lower-cased input is cut into words.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tokenization {
    /**
        Split on every single space. Runs of spaces produce empty words, which are
        counted like any other word. Trailing empty words are dropped, and an input
        without any space is one word, even when it is empty.
    */
    #[default]
    SingleSpace,
    /// Split on runs of whitespace. Never produces empty words.
    Whitespace,
}

/**
    Owns the lower-cased copy of an input. Every call to [`Tokenizer::tokens`] walks
    the same sequence again from the start.
*/
pub struct Tokenizer {
    lowered: String,
    mode: Tokenization,
}

impl Tokenizer {
    pub fn new(input: &str, mode: Tokenization) -> Self {
        Tokenizer {
            lowered: input.to_lowercase(),
            mode,
        }
    }

    pub fn mode(&self) -> Tokenization {
        self.mode
    }

    pub fn tokens(&self) -> Tokens<'_> {
        match self.mode {
            Tokenization::SingleSpace => Tokens::SingleSpace(SingleSpaceTokens::new(&self.lowered)),
            Tokenization::Whitespace => Tokens::Whitespace(self.lowered.split_whitespace()),
        }
    }
}

pub enum Tokens<'a> {
    SingleSpace(SingleSpaceTokens<'a>),
    Whitespace(SplitWhitespace<'a>),
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Tokens::SingleSpace(t) => t.next(),
            Tokens::Whitespace(t) => t.next(),
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/**
    Lazy single-space splitter. Empty words are held back until a non-empty word follows
    them, which is how trailing ones get dropped without buffering the whole input.
*/
pub struct SingleSpaceTokens<'a> {
    underlying: std::str::Split<'a, char>,
    pending_empty: usize,
    held: Option<&'a str>,
    unsplit: bool,
}

impl<'a> SingleSpaceTokens<'a> {
    fn new(lowered: &'a str) -> Self {
        SingleSpaceTokens {
            underlying: lowered.split(DELIMITER),
            pending_empty: 0,
            held: None,
            unsplit: !lowered.contains(DELIMITER),
        }
    }
}

impl<'a> Iterator for SingleSpaceTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.held.is_some() {
                if self.pending_empty > 0 {
                    self.pending_empty -= 1;
                    return Some("");
                }
                return self.held.take();
            }

            match self.underlying.next() {
                None => return None,
                Some("") if self.unsplit => return Some(""),
                Some("") => self.pending_empty += 1,
                Some(word) => self.held = Some(word),
            }
        }
    }
}

impl FusedIterator for SingleSpaceTokens<'_> {}

#[cfg(test)]
fn collect(input: &str, mode: Tokenization) -> Vec<String> {
    Tokenizer::new(input, mode)
        .tokens()
        .map(String::from)
        .collect()
}

#[test]
fn test_single_space_lowercases() {
    assert_eq!(
        collect("i love to hAtE MiDTeRms", Tokenization::SingleSpace),
        vec!["i", "love", "to", "hate", "midterms"]
    );
}

#[test]
fn test_single_space_keeps_inner_and_leading_empty_words() {
    assert_eq!(
        collect("a  b", Tokenization::SingleSpace),
        vec!["a", "", "b"]
    );
    assert_eq!(
        collect("  a   b", Tokenization::SingleSpace),
        vec!["", "", "a", "", "", "b"]
    );
}

#[test]
fn test_single_space_drops_trailing_empty_words() {
    assert_eq!(collect("a b  ", Tokenization::SingleSpace), vec!["a", "b"]);
    assert!(collect("   ", Tokenization::SingleSpace).is_empty());
}

#[test]
fn test_single_space_unsplit_input_is_one_word() {
    assert_eq!(collect("", Tokenization::SingleSpace), vec![""]);
    assert_eq!(collect("Word", Tokenization::SingleSpace), vec!["word"]);
}

#[test]
fn test_single_space_leaves_tabs_and_punctuation() {
    assert_eq!(
        collect("hi,\tthere! Hi,", Tokenization::SingleSpace),
        vec!["hi,\tthere!", "hi,"]
    );
}

#[test]
fn test_whitespace_collapses_runs() {
    assert_eq!(
        collect("  A  b\t\nc  ", Tokenization::Whitespace),
        vec!["a", "b", "c"]
    );
    assert!(collect("", Tokenization::Whitespace).is_empty());
}

#[test]
fn test_tokens_restart() {
    let tokenizer = Tokenizer::new("x y  x", Tokenization::SingleSpace);
    let first: Vec<&str> = tokenizer.tokens().collect();
    let second: Vec<&str> = tokenizer.tokens().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}
