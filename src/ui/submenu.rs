//! Selectable list with a header.

use super::input_logic::{select_next, select_prev};
use super::ButtonEvent;
use crate::error::Error;
use crate::scene::CustomEvent;
use heapless::Vec;

/// Maximum number of entries in one list.
pub const SUBMENU_MAX_ITEMS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmenuItem {
    pub label: &'static str,
    /// Event sent to the scene when the item is chosen.
    pub event: CustomEvent,
}

#[derive(Clone, Debug, Default)]
pub struct Submenu {
    header: &'static str,
    items: Vec<SubmenuItem, SUBMENU_MAX_ITEMS>,
    selected: usize,
}

impl Submenu {
    pub const fn new() -> Self {
        Self {
            header: "",
            items: Vec::new(),
            selected: 0,
        }
    }

    /// Drop the header, all items and the selection.
    pub fn reset(&mut self) {
        self.header = "";
        self.items.clear();
        self.selected = 0;
    }

    pub fn set_header(&mut self, header: &'static str) {
        self.header = header;
    }

    pub fn add_item(&mut self, label: &'static str, event: CustomEvent) -> Result<(), Error> {
        self.items
            .push(SubmenuItem { label, event })
            .map_err(|_| Error::BufferOverflow)
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn items(&self) -> &[SubmenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// UP/DOWN move the selection, SELECT reports the highlighted item's event.
    pub fn handle_button(&mut self, button: ButtonEvent) -> Option<CustomEvent> {
        match button {
            ButtonEvent::Up => {
                self.selected = select_prev(self.selected);
                None
            }
            ButtonEvent::Down => {
                self.selected = select_next(self.selected, self.items.len());
                None
            }
            ButtonEvent::Select => self.items.get(self.selected).map(|item| item.event),
            _ => None,
        }
    }
}
