use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/**
    Reads the contents of a file to a string.
*/
pub fn read_string_from_file(path: &Path) -> Result<String> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_err)?;

    Ok(contents)
}

/**
    Reads the text to rank: the named file, or standard input when no path or `-` is given.
*/
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => read_string_from_file(p),
        _ => {
            let mut contents = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut contents)
                .map_err(Error::Stdin)?;
            Ok(contents)
        }
    }
}

#[test]
fn test_read_string_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a a b").unwrap();

    let contents = read_input(Some(file.path())).unwrap();
    assert_eq!(contents, "a a b");
}

#[test]
fn test_missing_file_names_path() {
    let err = read_string_from_file(Path::new("does/not/exist.txt")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.txt"));
}
