/*!
    Streaming top-k word frequency counting.

    ```ignore
    let top = topwords::word_frequency(Some("a a a b b c"), 2);
    assert_eq!(top, vec!["a", "b"]);
    ```
*/
mod error;
pub mod io;
pub mod rank;
pub mod tokenize;

pub use error::{Error, Result};
pub use rank::{word_frequency, RankedWord, RankedWords, TopWords};
pub use tokenize::Tokenization;
