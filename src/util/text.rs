//! Character classification for word navigation

/// Character class used by the word motions.
///
/// Classification is checked in declaration order: whitespace first, then
/// word characters, and everything else is a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Space, tab, or a line break
    Whitespace,
    /// Alphanumeric characters and underscore
    Word,
    /// Punctuation and every other character
    Symbol,
}

/// Check if a character counts as whitespace for word navigation
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

/// Check if a character is part of a word (alphanumeric or underscore)
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Get the character class for word navigation (`w`/`b` style motions)
pub fn char_class(ch: char) -> CharClass {
    if is_whitespace(ch) {
        CharClass::Whitespace
    } else if is_word_char(ch) {
        CharClass::Word
    } else {
        CharClass::Symbol
    }
}

/// Get the character class for big-word navigation (`W`/`B` style motions)
///
/// Any run of non-whitespace is a single class, so symbols fold into `Word`.
pub fn big_word_class(ch: char) -> CharClass {
    if is_whitespace(ch) {
        CharClass::Whitespace
    } else {
        CharClass::Word
    }
}

/// Number of decimal digits needed to print `n` (at least 1)
pub fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
