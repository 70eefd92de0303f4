use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't read standard input: {0}")]
    Stdin(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
