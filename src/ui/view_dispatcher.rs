//! Owns the three views and routes button presses to the visible one.

use super::{ButtonEvent, Submenu, TextInput, Widget};
use crate::record::{copy_truncated, FieldText};
use crate::scene::{CustomEvent, SceneEvent};

/// Which of the views is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewId {
    Submenu,
    Widget,
    TextInput,
}

#[derive(Clone, Debug, Default)]
pub struct ViewDispatcher {
    pub submenu: Submenu,
    pub widget: Widget,
    pub text_input: TextInput,
    current: Option<ViewId>,
}

impl ViewDispatcher {
    pub const fn new() -> Self {
        Self {
            submenu: Submenu::new(),
            widget: Widget::new(),
            text_input: TextInput::new(),
            current: None,
        }
    }

    pub fn switch_to_view(&mut self, view: ViewId) {
        self.current = Some(view);
    }

    pub fn current_view(&self) -> Option<ViewId> {
        self.current
    }

    /// Route one press to the current view.
    ///
    /// BACK always becomes a navigation event. When the text prompt is
    /// submitted, its text is copied into `buffer` before the save event
    /// is reported.
    pub fn handle_button(
        &mut self,
        button: ButtonEvent,
        buffer: &mut FieldText,
    ) -> Option<SceneEvent> {
        if button == ButtonEvent::Back {
            return Some(SceneEvent::Back);
        }
        match self.current? {
            ViewId::Submenu => self.submenu.handle_button(button).map(SceneEvent::Custom),
            ViewId::Widget => {
                self.widget.handle_button(button);
                None
            }
            ViewId::TextInput => {
                if self.text_input.handle_button(button) {
                    copy_truncated(buffer, self.text_input.text());
                    Some(SceneEvent::Custom(CustomEvent::TextInputSaved))
                } else {
                    None
                }
            }
        }
    }
}
