//! User interface subsystem - view models behind the OLED.
//!
//! Scenes fill three reusable views with content; the views keep their own
//! cursor state and turn button presses into scene events. Nothing here
//! draws: the firmware's `display` module renders whichever view is
//! current.
//!
//! ## Components
//!
//! - **Submenu**: header + selectable list
//! - **Widget**: positioned strings and scrollable text regions
//! - **TextInput**: header, edited text and on-screen keyboard
//! - **ViewDispatcher**: owns the three views, routes presses to the current one

pub mod input_logic;
pub mod keyboard;
pub mod submenu;
pub mod text_input;
pub mod view_dispatcher;
pub mod widget;

pub use submenu::Submenu;
pub use text_input::TextInput;
pub use view_dispatcher::{ViewDispatcher, ViewId};
pub use widget::Widget;

/// Physical button events (after debouncing).
///
/// Six buttons, laid out like a handheld's D-pad:
///   - UP/DOWN/LEFT/RIGHT: move through lists, text and the keyboard
///   - SELECT: activate the highlighted item or key
///   - BACK: leave the current screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
}
