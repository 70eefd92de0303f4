use topwords::{word_frequency, Tokenization, TopWords};

fn main() {
    let s = "i love to hAtE midterms I hate MiDTeRms SEASON";

    for word in word_frequency(Some(s), 3) {
        println!("{word}");
    }

    let ranked = TopWords::new(3)
        .tokenization(Tokenization::Whitespace)
        .rank("the cat  and the hat   and the bat");

    for w in ranked.iter() {
        println!("{}: {}x", w.word, w.count);
    }
}
