//! Utility modules

pub mod file_io;
pub mod text;

pub use text::{big_word_class, char_class, digit_count, CharClass};

pub use file_io::{
    filename_for_display, is_likely_binary, read_text_file, validate_file_for_opening,
    write_text_file, FileOpenError, MAX_FILE_SIZE,
};
