//! On-screen keyboard for the text prompt.
//!
//! ```text
//! 1 2 3 4 5 6 7 8 9 0
//! q w e r t y u i o p
//! a s d f g h j k l @
//! z x c v b n m , . - _ +
//!  Aa   spc   del   OK
//! ```
//!
//! LEFT/RIGHT wrap around within a row. UP/DOWN stop at the first and last
//! row and keep the cursor at the same relative position when the rows
//! have different widths.

use super::input_logic::{wrap_next, wrap_prev};

/// One key of the on-screen keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Char(char),
    /// Upper-case the next letter.
    Shift,
    Space,
    Backspace,
    /// Submit the text.
    Save,
}

impl Key {
    /// Caption for the keys that are not a single character.
    pub const fn caption(self) -> Option<&'static str> {
        match self {
            Key::Char(_) => None,
            Key::Shift => Some("Aa"),
            Key::Space => Some("spc"),
            Key::Backspace => Some("del"),
            Key::Save => Some("OK"),
        }
    }
}

macro_rules! char_row {
    ($($c:literal)*) => { [$(Key::Char($c)),*] };
}

const ROW_DIGITS: [Key; 10] = char_row!('1' '2' '3' '4' '5' '6' '7' '8' '9' '0');
const ROW_TOP: [Key; 10] = char_row!('q' 'w' 'e' 'r' 't' 'y' 'u' 'i' 'o' 'p');
const ROW_HOME: [Key; 10] = char_row!('a' 's' 'd' 'f' 'g' 'h' 'j' 'k' 'l' '@');
const ROW_BOTTOM: [Key; 12] = char_row!('z' 'x' 'c' 'v' 'b' 'n' 'm' ',' '.' '-' '_' '+');
const ROW_SPECIAL: [Key; 4] = [Key::Shift, Key::Space, Key::Backspace, Key::Save];

/// Keyboard rows, top to bottom.
pub const ROWS: [&[Key]; 5] = [&ROW_DIGITS, &ROW_TOP, &ROW_HOME, &ROW_BOTTOM, &ROW_SPECIAL];

/// Cursor and shift state of the keyboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyboard {
    row: usize,
    col: usize,
    shift: bool,
}

impl Keyboard {
    /// Cursor starts on the first letter row.
    pub const fn new() -> Self {
        Self {
            row: 1,
            col: 0,
            shift: false,
        }
    }

    pub fn rows(&self) -> &'static [&'static [Key]] {
        &ROWS
    }

    /// `(row, column)` of the highlighted key.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn selected(&self) -> Key {
        ROWS[self.row][self.col]
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.change_row(self.row - 1);
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < ROWS.len() {
            self.change_row(self.row + 1);
        }
    }

    pub fn move_left(&mut self) {
        self.col = wrap_prev(self.col, ROWS[self.row].len());
    }

    pub fn move_right(&mut self) {
        self.col = wrap_next(self.col, ROWS[self.row].len());
    }

    pub fn toggle_shift(&mut self) {
        self.shift = !self.shift;
    }

    /// Character typed by `c` under the current shift state; consumes the shift.
    pub fn type_char(&mut self, c: char) -> char {
        let typed = if self.shift { c.to_ascii_uppercase() } else { c };
        self.shift = false;
        typed
    }

    fn change_row(&mut self, row: usize) {
        let from = ROWS[self.row].len();
        let to = ROWS[row].len();
        self.col = (self.col * to / from).min(to - 1);
        self.row = row;
    }
}
