//! Composited read-only panel: positioned strings plus scrollable text.
//!
//! Coordinates follow the 128×64 screen. A string element is anchored at
//! `(x, y)` and aligned around that point; a text-scroll element owns the
//! rectangle `(x, y, width, height)` and shows its text word-wrapped to the
//! width, one line of `LINE_HEIGHT` pixels at a time.

use super::input_logic::{scroll_down, select_prev};
use super::ButtonEvent;
use crate::config::{GLYPH_WIDTH, LINE_HEIGHT};
use crate::error::Error;
use crate::record::copy_truncated;
use heapless::{String, Vec};

/// Maximum number of elements on one panel.
pub const WIDGET_MAX_ELEMENTS: usize = 12;

/// Bytes of text one element can hold.
pub const ELEMENT_TEXT_CAPACITY: usize = 64;

/// Upper bound on wrapped lines of one element (one character per line).
pub const MAX_WRAPPED_LINES: usize = ELEMENT_TEXT_CAPACITY;

pub type ElementText = String<ELEMENT_TEXT_CAPACITY>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    /// Bold title font.
    Primary,
    /// Regular body font.
    Secondary,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringElement {
    pub x: i32,
    pub y: i32,
    pub horizontal: Align,
    pub vertical: Align,
    pub font: Font,
    pub text: ElementText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextScrollElement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub text: ElementText,
    offset: usize,
}

impl TextScrollElement {
    /// Characters per wrapped line.
    pub fn columns(&self) -> usize {
        (self.width / GLYPH_WIDTH).max(1) as usize
    }

    /// Lines that fit in the element's height (at least one).
    pub fn visible_lines(&self) -> usize {
        (self.height / LINE_HEIGHT).max(1) as usize
    }

    pub fn lines(&self) -> Vec<&str, MAX_WRAPPED_LINES> {
        wrap_lines(&self.text, self.columns())
    }

    /// Index of the first line in view.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The wrapped lines currently in view.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.lines()
            .into_iter()
            .skip(self.offset)
            .take(self.visible_lines())
    }

    fn scroll_up(&mut self) {
        self.offset = select_prev(self.offset);
    }

    fn scroll_down(&mut self) {
        let total = self.lines().len();
        self.offset = scroll_down(self.offset, total, self.visible_lines());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    String(StringElement),
    TextScroll(TextScrollElement),
}

#[derive(Clone, Debug, Default)]
pub struct Widget {
    elements: Vec<Element, WIDGET_MAX_ELEMENTS>,
}

impl Widget {
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.elements.clear();
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Add a single line of text. Text beyond `ELEMENT_TEXT_CAPACITY` is cut.
    pub fn add_string_element(
        &mut self,
        x: i32,
        y: i32,
        horizontal: Align,
        vertical: Align,
        font: Font,
        text: &str,
    ) -> Result<(), Error> {
        let mut owned = ElementText::new();
        copy_truncated(&mut owned, text);
        self.push(Element::String(StringElement {
            x,
            y,
            horizontal,
            vertical,
            font,
            text: owned,
        }))
    }

    /// Add a word-wrapped text region that UP/DOWN scroll.
    pub fn add_text_scroll_element(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        text: &str,
    ) -> Result<(), Error> {
        let mut owned = ElementText::new();
        copy_truncated(&mut owned, text);
        self.push(Element::TextScroll(TextScrollElement {
            x,
            y,
            width,
            height,
            text: owned,
            offset: 0,
        }))
    }

    /// UP/DOWN scroll every text region. Returns `true` if the press was used.
    pub fn handle_button(&mut self, button: ButtonEvent) -> bool {
        let mut consumed = false;
        for element in self.elements.iter_mut() {
            if let Element::TextScroll(scroll) = element {
                match button {
                    ButtonEvent::Up => scroll.scroll_up(),
                    ButtonEvent::Down => scroll.scroll_down(),
                    _ => continue,
                }
                consumed = true;
            }
        }
        consumed
    }

    fn push(&mut self, element: Element) -> Result<(), Error> {
        self.elements
            .push(element)
            .map_err(|_| Error::BufferOverflow)
    }
}

/// Greedy word wrap of `text` into lines of at most `columns` characters.
///
/// Breaks at the last space that fits; a word longer than a whole line is
/// split mid-word. Spaces at a break are dropped.
pub fn wrap_lines(text: &str, columns: usize) -> Vec<&str, MAX_WRAPPED_LINES> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut rest = text.trim_start_matches(' ');

    while !rest.is_empty() {
        let limit = rest
            .char_indices()
            .nth(columns)
            .map_or(rest.len(), |(i, _)| i);

        let (line, next) = if limit == rest.len() {
            (rest, "")
        } else {
            match rest[..limit].rfind(' ') {
                _ if rest[limit..].starts_with(' ') => rest.split_at(limit),
                Some(space) if space > 0 => rest.split_at(space),
                _ => rest.split_at(limit),
            }
        };

        if lines.push(line.trim_end_matches(' ')).is_err() {
            break;
        }
        rest = next.trim_start_matches(' ');
    }

    lines
}
