//! Cursor motions over a text buffer
//!
//! `Motion` borrows the buffer and the cursor for the duration of one motion.
//! Every method keeps `cursor.line < line_count` and
//! `cursor.column <= line_len(cursor.line)`.

use super::buffer::TextBuffer;
use super::cursor::Cursor;
use crate::util::{big_word_class, char_class, CharClass};

/// Virtual character at the end of every line
const LINE_END: char = '\n';

/// Rows moved by a half-page motion
#[inline]
pub fn half_page_rows(visible_lines: usize) -> usize {
    (visible_lines.saturating_sub(1) / 2).max(1)
}

/// Rows moved by a full-page motion
#[inline]
pub fn full_page_rows(visible_lines: usize) -> usize {
    visible_lines.saturating_sub(1).max(1)
}

/// Direction for word and page motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub struct Motion<'a> {
    buffer: &'a TextBuffer,
    cursor: &'a mut Cursor,
}

impl<'a> Motion<'a> {
    pub fn new(buffer: &'a TextBuffer, cursor: &'a mut Cursor) -> Self {
        Self { buffer, cursor }
    }

    #[inline]
    fn line_len(&self) -> usize {
        self.buffer.line_len(self.cursor.line)
    }

    pub fn at_begin(&self) -> bool {
        self.cursor.line == 0 && self.cursor.column == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor.line == self.buffer.last_line() && self.cursor.column == self.line_len()
    }

    /// Character under the cursor; end of line reads as a newline
    pub fn current_char(&self) -> char {
        self.buffer
            .char_at(self.cursor.line, self.cursor.column)
            .unwrap_or(LINE_END)
    }

    fn clamp_column(&mut self) {
        self.cursor.column = self.cursor.column.min(self.line_len());
    }

    // =========================================================================
    // Character and line motions
    // =========================================================================

    pub fn left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.line_len();
        }
    }

    pub fn right(&mut self) {
        if self.cursor.column < self.line_len() {
            self.cursor.column += 1;
        } else if self.cursor.line < self.buffer.last_line() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
    }

    /// Up one line; on the first line the column snaps to 0
    pub fn up(&mut self) {
        self.page_up(1);
    }

    /// Down one line; on the last line the column snaps to end of line
    pub fn down(&mut self) {
        self.page_down(1);
    }

    pub fn line_start(&mut self) {
        self.cursor.column = 0;
    }

    pub fn line_end(&mut self) {
        self.cursor.column = self.line_len();
    }

    // =========================================================================
    // Page motions
    // =========================================================================

    pub fn page_up(&mut self, rows: usize) {
        if self.cursor.line == 0 {
            self.cursor.column = 0;
        } else {
            self.cursor.line = self.cursor.line.saturating_sub(rows);
            self.clamp_column();
        }
    }

    pub fn page_down(&mut self, rows: usize) {
        let last = self.buffer.last_line();
        if self.cursor.line == last {
            self.cursor.column = self.line_len();
        } else {
            self.cursor.line = self.cursor.line.saturating_add(rows).min(last);
            self.clamp_column();
        }
    }

    pub fn half_page(&mut self, direction: Direction, visible_lines: usize) {
        self.page(direction, half_page_rows(visible_lines));
    }

    pub fn full_page(&mut self, direction: Direction, visible_lines: usize) {
        self.page(direction, full_page_rows(visible_lines));
    }

    fn page(&mut self, direction: Direction, rows: usize) {
        match direction {
            Direction::Up | Direction::Left => self.page_up(rows),
            Direction::Down | Direction::Right => self.page_down(rows),
        }
    }

    // =========================================================================
    // Word motions
    // =========================================================================

    /// Previous start of a word/symbol run
    pub fn word_left(&mut self) {
        self.previous_run_start(char_class);
    }

    /// Next start of a word/symbol run
    pub fn word_right(&mut self) {
        self.next_run_start(char_class);
    }

    /// Previous start of a non-whitespace run
    pub fn big_word_left(&mut self) {
        self.previous_run_start(big_word_class);
    }

    /// Next start of a non-whitespace run
    pub fn big_word_right(&mut self) {
        self.next_run_start(big_word_class);
    }

    pub fn word(&mut self, direction: Direction) {
        match direction {
            Direction::Left | Direction::Up => self.word_left(),
            Direction::Right | Direction::Down => self.word_right(),
        }
    }

    pub fn big_word(&mut self, direction: Direction) {
        match direction {
            Direction::Left | Direction::Up => self.big_word_left(),
            Direction::Right | Direction::Down => self.big_word_right(),
        }
    }

    fn class(&self, classify: fn(char) -> CharClass) -> CharClass {
        classify(self.current_char())
    }

    fn previous_run_start(&mut self, classify: fn(char) -> CharClass) {
        if self.at_begin() {
            return;
        }
        self.left();
        while !self.at_begin() && self.class(classify) == CharClass::Whitespace {
            self.left();
        }

        let run = self.class(classify);
        if run == CharClass::Whitespace {
            // Only whitespace between here and buffer begin
            return;
        }
        while !self.at_begin() && self.class(classify) == run {
            self.left();
        }
        if self.class(classify) != run {
            self.right();
        }
    }

    fn next_run_start(&mut self, classify: fn(char) -> CharClass) {
        let run = self.class(classify);
        if run != CharClass::Whitespace {
            while !self.at_end() && self.class(classify) == run {
                self.right();
            }
        }
        while !self.at_end() && self.class(classify) == CharClass::Whitespace {
            self.right();
        }
    }
}
