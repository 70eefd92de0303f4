mod file;

pub use file::{read_input, read_string_from_file};
