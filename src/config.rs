//! Application-wide constants and compile-time configuration.
//!
//! Field sizes, the record file format, display layout, timing parameters
//! and the flash region used for storage live here so they can be tuned in
//! one place.

// Record

/// Size of one text field buffer on the device, including the terminator.
pub const FIELD_SIZE: usize = 64;

/// Usable bytes per text field.
pub const FIELD_CAPACITY: usize = FIELD_SIZE - 1;

// Record file

/// Fixed location of the saved record.
pub const ID_SAVE_PATH: &str = "/ext/id.txt";

/// Value of the `Filetype` header line.
pub const FILE_TYPE: &str = "ID Data";

/// Value of the `Version` header line.
pub const FILE_VERSION: u32 = 1;

/// Largest record file we read or write (bytes).
/// 2 header lines + 5 × (key + 63-byte value) stays well below this.
pub const MAX_FILE_SIZE: usize = 1024;

// Scenes

/// Maximum depth of the scene stack.
/// The deepest real path is menu → 5 prompts → confirmation (7).
pub const SCENE_STACK_DEPTH: usize = 16;

/// Header shown above the main menu.
pub const MAIN_MENU_HEADER: &str = "ID Card v2";

/// About screen lines.
pub const ABOUT_TITLE: &str = "Simple ID app";
pub const ABOUT_VERSION: &str = concat!("Version ", env!("CARGO_PKG_VERSION"));
pub const ABOUT_AUTHOR: &str = "author:@evillero";

// Display geometry (SSD1306 128×64)

pub const SCREEN_WIDTH: i32 = 128;
pub const SCREEN_HEIGHT: i32 = 64;

/// Glyph cell of the secondary font (FONT_6X10).
pub const GLYPH_WIDTH: u32 = 6;
pub const LINE_HEIGHT: u32 = 10;

/// Menu rows visible below the header.
pub const SUBMENU_VISIBLE_ROWS: usize = 5;

// ID card layout

/// Centre line of the first label/value row.
pub const ID_CARD_FIRST_ROW_Y: i32 = 16;

/// Vertical distance between rows.
pub const ID_CARD_ROW_STEP: i32 = 10;

/// Column where values start ("Email:" is 6 glyphs wide).
pub const ID_CARD_VALUE_X: i32 = 38;

/// The notes region starts this far above its label's centre line.
pub const ID_CARD_NOTES_RAISE: i32 = 5;

// Buttons
//
// nRF52840-DK style wiring, all active-low with internal pull-up.
// Adjust for your board in `main.rs`.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button LEFT    → P0.24
//   Button RIGHT   → P0.25
//   Button OK      → P0.02
//   Button BACK    → P0.03
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Depth of the button event channel.
pub const BUTTON_QUEUE_DEPTH: usize = 4;

/// Enable automatic OLED screen power-off after inactivity.
pub const SCREEN_AUTO_OFF_ENABLED: bool = true;

/// Inactivity timeout before OLED is turned off (seconds).
pub const SCREEN_AUTO_OFF_TIMEOUT_SECS: u64 = 120;

// Flash storage

/// Flash page index where record storage starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for record storage.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;
