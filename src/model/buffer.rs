//! Text buffer - an ordered, never-empty sequence of lines
//!
//! Lines are stored without their terminators. Columns are `char` indices,
//! so every mutation converts to a byte offset before touching the `String`.

use std::fmt;

/// Line terminator style detected on load and re-emitted on save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "LF"),
            LineEnding::CrLf => write!(f, "CRLF"),
        }
    }
}

/// The lines of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    line_ending: LineEnding,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the `column`th char in `line`, or `line.len()` past the end
#[inline]
fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

impl TextBuffer {
    /// Create a buffer holding a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            line_ending: LineEnding::Lf,
        }
    }

    /// Create a buffer from file content
    pub fn from_text(content: &str) -> Self {
        let mut buffer = Self::new();
        buffer.load(content);
        buffer
    }

    /// Replace the buffer contents, splitting at `\n`, `\r\n` or a lone `\r`
    ///
    /// One trailing terminator is discarded, so `"abc\n"` loads as `["abc"]`.
    /// Empty input yields a single empty line.
    pub fn load(&mut self, content: &str) {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut ended_with_terminator = false;
        let mut crlf_count = 0usize;
        let mut lf_count = 0usize;

        let mut chars = content.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        crlf_count += 1;
                    }
                    lines.push(std::mem::take(&mut current));
                    ended_with_terminator = true;
                }
                '\n' => {
                    lf_count += 1;
                    lines.push(std::mem::take(&mut current));
                    ended_with_terminator = true;
                }
                _ => {
                    current.push(ch);
                    ended_with_terminator = false;
                }
            }
        }

        if !ended_with_terminator {
            lines.push(current);
        }

        self.lines = lines;
        self.line_ending = if crlf_count > lf_count {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
    }

    /// Produce the save payload: every line followed by the line terminator
    ///
    /// A buffer holding only one empty line serializes to the empty string.
    pub fn serialize(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let terminator = self.line_ending.as_str();
        let capacity = self
            .lines
            .iter()
            .map(|l| l.len() + terminator.len())
            .sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push_str(terminator);
        }
        out
    }

    /// Reset to a single empty line
    pub fn reset(&mut self) {
        self.lines.clear();
        self.lines.push(String::new());
        self.line_ending = LineEnding::Lf;
    }

    /// True when the buffer holds exactly one empty line
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Line content without terminator
    #[inline]
    pub fn line(&self, line: usize) -> &str {
        &self.lines[line]
    }

    /// Line length in chars
    #[inline]
    pub fn line_len(&self, line: usize) -> usize {
        self.lines[line].chars().count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Character at (line, column), `None` past the end of the line
    pub fn char_at(&self, line: usize, column: usize) -> Option<char> {
        self.lines.get(line)?.chars().nth(column)
    }

    /// Splice `text` into `line` at `column`; `text` must not contain terminators
    pub fn insert_text(&mut self, line: usize, column: usize, text: &str) {
        debug_assert!(!text.contains(['\n', '\r']));
        let target = &mut self.lines[line];
        let at = byte_index(target, column);
        target.insert_str(at, text);
    }

    /// Split `line` at `column`, moving the suffix onto a new following line
    pub fn split_line(&mut self, line: usize, column: usize) {
        let target = &mut self.lines[line];
        let at = byte_index(target, column);
        let suffix = target.split_off(at);
        self.lines.insert(line + 1, suffix);
    }

    /// Append `line` to the previous line; no-op on the first line
    pub fn join_with_previous(&mut self, line: usize) {
        if line == 0 {
            return;
        }
        let removed = self.lines.remove(line);
        self.lines[line - 1].push_str(&removed);
    }

    /// Append the next line to `line`; no-op on the last line
    pub fn join_with_next(&mut self, line: usize) {
        if line >= self.last_line() {
            return;
        }
        let removed = self.lines.remove(line + 1);
        self.lines[line].push_str(&removed);
    }

    /// Remove the character before `column`; no-op at column 0
    pub fn delete_before(&mut self, line: usize, column: usize) {
        if column == 0 {
            return;
        }
        self.delete_at(line, column - 1);
    }

    /// Remove the character at `column`; no-op at end of line
    pub fn delete_at(&mut self, line: usize, column: usize) {
        let target = &mut self.lines[line];
        if let Some((at, _)) = target.char_indices().nth(column) {
            target.remove(at);
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
