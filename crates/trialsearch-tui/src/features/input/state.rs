//! Editable query text state.

/// Single-line query input with a byte-offset cursor.
///
/// The cursor always sits on a char boundary. Mutated on every keystroke;
/// the value is never null — an empty string means "nothing typed".
#[derive(Debug, Default)]
pub struct InputState {
    value: String,
    cursor: usize,
}

impl InputState {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Byte offset of the cursor within the value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True if the value is empty or whitespace-only (submit guard).
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set_text(&mut self, text: &str) {
        self.value = text.to_string();
        self.cursor = self.value.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Inserts text at the cursor, collapsing newlines to spaces and
    /// dropping other control characters (paste hygiene).
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' | '\r' | '\t' => self.insert_char(' '),
                c if c.is_control() => {}
                c => self.insert_char(c),
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Kills from the cursor to the beginning of the line.
    pub fn kill_to_start(&mut self) {
        self.value.drain(..self.cursor);
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().last().map(|(idx, _)| idx)
    }
}
