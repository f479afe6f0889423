//! Editing and feedback surfaces the interpreter drives
//!
//! The interpreter never owns the document or the on-screen word list; it
//! talks to them through these traits. `TextBuffer` and `WordTray` are the
//! in-memory implementations used by the CLI and tests.

use std::fmt;

/// Cursor location, 0-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub row: usize,
    pub column: usize,
}

pub trait EditingSurface {
    fn insert_text(&mut self, text: &str);
    fn line_count(&self) -> usize;
    fn cursor_position(&self) -> CursorPosition;
    fn set_cursor_position(&mut self, row: usize, column: usize);
}

/// Shows the command words recognized so far.
pub trait FeedbackSurface {
    fn add_words(&mut self, words: &[&str]);
    fn clear_words(&mut self);
}

/// Move the cursor to the start of a 1-based line.
///
/// Out-of-range requests are clamped to the first or last line rather than
/// rejected; a misheard number should still land somewhere sensible.
pub fn go_to_line<E: EditingSurface + ?Sized>(editor: &mut E, requested: usize) -> usize {
    let last = editor.line_count().max(1);
    let line = requested.clamp(1, last);
    editor.set_cursor_position(line - 1, 0);
    line
}

/// In-memory document with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: CursorPosition,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: CursorPosition::default(),
        }
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document; the cursor starts at the top.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(String::from).collect();
        // "a\nb\n" is two lines, not three
        if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self {
            lines,
            cursor: CursorPosition::default(),
        }
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Byte offset of the cursor column within its line.
    fn cursor_byte(&self) -> usize {
        let line = &self.lines[self.cursor.row];
        line.char_indices()
            .nth(self.cursor.column)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl EditingSurface for TextBuffer {
    fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let at = self.cursor_byte();
        let tail = self.lines[self.cursor.row].split_off(at);
        let mut pieces = text.split('\n');

        // split always yields at least one piece
        let first = pieces.next().unwrap_or_default();
        self.lines[self.cursor.row].push_str(first);

        for piece in pieces {
            self.cursor.row += 1;
            self.lines.insert(self.cursor.row, piece.to_string());
        }

        let line = &mut self.lines[self.cursor.row];
        self.cursor.column = line.chars().count();
        line.push_str(&tail);
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn cursor_position(&self) -> CursorPosition {
        self.cursor
    }

    fn set_cursor_position(&mut self, row: usize, column: usize) {
        let row = row.min(self.lines.len() - 1);
        let column = column.min(self.lines[row].chars().count());
        self.cursor = CursorPosition { row, column };
    }
}

/// Accumulates the words of a command in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTray {
    words: Vec<String>,
}

impl WordTray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for WordTray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

impl FeedbackSurface for WordTray {
    fn add_words(&mut self, words: &[&str]) {
        self.words.extend(words.iter().map(|w| w.to_string()));
    }

    fn clear_words(&mut self) {
        self.words.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(lines: usize) -> TextBuffer {
        let text: Vec<String> = (1..=lines).map(|n| format!("line {n}")).collect();
        TextBuffer::from_text(&text.join("\n"))
    }

    #[test]
    fn test_go_to_line_clamps() {
        let mut buffer = document(50);

        assert_eq!(go_to_line(&mut buffer, 0), 1);
        assert_eq!(buffer.cursor_position(), CursorPosition { row: 0, column: 0 });

        assert_eq!(go_to_line(&mut buffer, 999), 50);
        assert_eq!(buffer.cursor_position(), CursorPosition { row: 49, column: 0 });

        assert_eq!(go_to_line(&mut buffer, 12), 12);
        assert_eq!(buffer.cursor_position(), CursorPosition { row: 11, column: 0 });
    }

    #[test]
    fn test_go_to_line_resets_column() {
        let mut buffer = document(3);
        buffer.set_cursor_position(1, 4);
        go_to_line(&mut buffer, 3);
        assert_eq!(buffer.cursor_position(), CursorPosition { row: 2, column: 0 });
    }

    #[test]
    fn test_go_to_line_on_empty_document() {
        let mut buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(go_to_line(&mut buffer, 7), 1);
        assert_eq!(buffer.cursor_position(), CursorPosition::default());
    }

    #[test]
    fn test_from_text_trailing_newline() {
        assert_eq!(TextBuffer::from_text("a\nb\n").line_count(), 2);
        assert_eq!(TextBuffer::from_text("a\nb").line_count(), 2);
        assert_eq!(TextBuffer::from_text("").line_count(), 1);
        assert_eq!(TextBuffer::from_text("\n").line_count(), 1);
    }

    #[test]
    fn test_insert_text() {
        let mut buffer = TextBuffer::from_text("hello world");
        buffer.set_cursor_position(0, 6);
        buffer.insert_text("big ");
        assert_eq!(buffer.to_string(), "hello big world");
        assert_eq!(buffer.cursor_position(), CursorPosition { row: 0, column: 10 });
    }

    #[test]
    fn test_insert_text_with_newlines() {
        let mut buffer = TextBuffer::from_text("ab");
        buffer.set_cursor_position(0, 1);
        buffer.insert_text("1\n2\n3");
        assert_eq!(buffer.to_string(), "a1\n2\n3b");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.cursor_position(), CursorPosition { row: 2, column: 1 });
    }

    #[test]
    fn test_insert_text_multibyte() {
        let mut buffer = TextBuffer::from_text("héllo");
        buffer.set_cursor_position(0, 2);
        buffer.insert_text("-");
        assert_eq!(buffer.line(0), Some("hé-llo"));
    }

    #[test]
    fn test_set_cursor_position_stays_in_document() {
        let mut buffer = TextBuffer::from_text("abc\nde");
        buffer.set_cursor_position(9, 9);
        assert_eq!(buffer.cursor_position(), CursorPosition { row: 1, column: 2 });
    }

    #[test]
    fn test_word_tray() {
        let mut tray = WordTray::new();
        tray.add_words(&["go"]);
        tray.add_words(&["to", "line"]);
        assert_eq!(tray.to_string(), "go to line");
        assert_eq!(tray.words().len(), 3);

        tray.clear_words();
        assert!(tray.is_empty());
    }
}
