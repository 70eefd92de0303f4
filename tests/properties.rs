use std::collections::HashMap;

use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use topwords::{word_frequency, Tokenization, TopWords};

const VOCABULARY: &[&str] = &[
    "the", "The", "cat", "CAT", "hat", "bat", "sat", "on", "mat", "a", "An", "x",
];

fn random_text(rng: &mut SmallRng, words: usize) -> String {
    let mut s = String::new();
    for i in 0..words {
        if i > 0 {
            // mostly single spaces, sometimes a run
            let spaces = if rng.gen_ratio(1, 8) { rng.gen_range(2..4) } else { 1 };
            s.push_str(&" ".repeat(spaces));
        }
        s.push_str(VOCABULARY[rng.gen_range(0..VOCABULARY.len())]);
    }
    s
}

/// Brute-force counts over the tokens each mode is expected to produce.
fn oracle(input: &str, tokenization: Tokenization) -> HashMap<String, usize> {
    let lowered = input.to_lowercase();
    match tokenization {
        Tokenization::SingleSpace => {
            let mut tokens: Vec<&str> = lowered.split(' ').collect();
            if tokens.len() > 1 {
                while tokens.last() == Some(&"") {
                    tokens.pop();
                }
            }
            tokens.into_iter().map(String::from).counts()
        }
        Tokenization::Whitespace => lowered.split_whitespace().map(String::from).counts(),
    }
}

fn check(input: &str, k: usize, tokenization: Tokenization) {
    let counts = oracle(input, tokenization);
    let top = TopWords::new(k).tokenization(tokenization).words(input);

    assert_eq!(top.len(), usize::min(k, counts.len()), "input {input:?}, k {k}");
    assert!(top.iter().all_unique());

    let selected: Vec<usize> = top.iter().map(|w| counts[w]).collect();
    assert!(
        selected.windows(2).all(|p| p[0] >= p[1]),
        "not descending: {selected:?}"
    );

    let floor = selected.last().copied().unwrap_or(0);
    for (word, count) in &counts {
        if !top.contains(word) {
            assert!(*count <= floor, "{word:?} ({count}) left out above {floor}");
        }
    }
}

#[test]
fn test_random_inputs_single_space() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let words = rng.gen_range(0..60);
        let input = random_text(&mut rng, words);
        let k = rng.gen_range(1..12);
        check(&input, k, Tokenization::SingleSpace);
    }
}

#[test]
fn test_random_inputs_whitespace() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..300 {
        let words = rng.gen_range(0..60);
        let input = random_text(&mut rng, words);
        let k = rng.gen_range(1..12);
        check(&input, k, Tokenization::Whitespace);
    }
}

#[test]
fn test_winner_arrives_last() {
    let mut input = (0..50).map(|i| format!("w{}", i % 10)).join(" ");
    input.push_str(&" late".repeat(6));

    let top = word_frequency(Some(&input), 3);
    assert_eq!(top[0], "late");
    check(&input, 3, Tokenization::SingleSpace);
}

#[test]
fn test_repeated_runs_agree_on_counts() {
    let mut rng = SmallRng::seed_from_u64(7);
    let input = random_text(&mut rng, 200);
    let counts = oracle(&input, Tokenization::SingleSpace);

    let first: Vec<usize> = word_frequency(Some(&input), 5).iter().map(|w| counts[w]).collect();
    let second: Vec<usize> = word_frequency(Some(&input), 5).iter().map(|w| counts[w]).collect();
    assert_eq!(first, second);
}

#[test]
fn test_all_distinct_words_when_k_is_large() {
    let input = "b a c a b a";
    let top = word_frequency(Some(input), 100);
    assert_eq!(top, vec!["a", "b", "c"]);
}

#[test]
fn test_ranked_words_serialize_as_list() {
    let ranked = TopWords::new(2).rank("a a b");
    let json = serde_json::to_value(&ranked).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"word": "a", "count": 2}, {"word": "b", "count": 1}])
    );
}
