//! Single-line text prompt driven by the on-screen keyboard.

use super::keyboard::{Key, Keyboard};
use super::ButtonEvent;
use crate::record::{copy_truncated, FieldText};

#[derive(Clone, Debug)]
pub struct TextInput {
    header: &'static str,
    text: FieldText,
    /// The default text is still untouched and the next key replaces it.
    clear_default_text: bool,
    minimum_length: usize,
    keyboard: Keyboard,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    pub const fn new() -> Self {
        Self {
            header: "",
            text: FieldText::new(),
            clear_default_text: false,
            minimum_length: 0,
            keyboard: Keyboard::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_header_text(&mut self, header: &'static str) {
        self.header = header;
    }

    pub fn set_minimum_length(&mut self, minimum_length: usize) {
        self.minimum_length = minimum_length;
    }

    /// Start editing from `default_text`.
    ///
    /// With `clear_default_text` the first typed key (or DEL) replaces the
    /// whole default instead of appending to it.
    pub fn set_default_text(&mut self, default_text: &str, clear_default_text: bool) {
        copy_truncated(&mut self.text, default_text);
        self.clear_default_text = clear_default_text && !self.text.is_empty();
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// `true` while the default text is shown and would be replaced by typing.
    pub fn default_text_pending(&self) -> bool {
        self.clear_default_text
    }

    /// Feed one press. Returns `true` when the user submitted the text.
    ///
    /// BACK is not handled here; the dispatcher turns it into navigation.
    pub fn handle_button(&mut self, button: ButtonEvent) -> bool {
        match button {
            ButtonEvent::Up => self.keyboard.move_up(),
            ButtonEvent::Down => self.keyboard.move_down(),
            ButtonEvent::Left => self.keyboard.move_left(),
            ButtonEvent::Right => self.keyboard.move_right(),
            ButtonEvent::Select => return self.press(self.keyboard.selected()),
            ButtonEvent::Back => {}
        }
        false
    }

    fn press(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => {
                let typed = self.keyboard.type_char(c);
                self.type_char(typed);
            }
            Key::Space => self.type_char(' '),
            Key::Shift => self.keyboard.toggle_shift(),
            Key::Backspace => {
                if self.clear_default_text {
                    self.clear_default();
                } else {
                    self.text.pop();
                }
            }
            Key::Save => {
                if self.text.len() >= self.minimum_length {
                    self.clear_default_text = false;
                    return true;
                }
            }
        }
        false
    }

    fn type_char(&mut self, c: char) {
        if self.clear_default_text {
            self.clear_default();
        }
        // A full buffer swallows further characters.
        let _ = self.text.push(c);
    }

    fn clear_default(&mut self) {
        self.text.clear();
        self.clear_default_text = false;
    }
}
