//! ID card app for a handheld with a 128×64 OLED and six buttons.
//!
//! The user fills in five fields (name, email, telephone, address, notes)
//! through a chain of text prompts, the record is written to a small text
//! file, and an "ID card" screen shows it again.
//!
//! This crate holds everything that does not touch hardware - the record
//! and its file format, the scenes and scene manager, and the view models -
//! so it builds and tests on the host.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary (main.rs, `embedded` feature) adds the button
//! tasks, the SSD1306 renderer and flash storage on top of this library.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod error;
pub mod power_logic;
pub mod record;
pub mod scene;
pub mod store;
pub mod ui;

pub use app::{run, App, AppContext};
pub use error::Error;
pub use record::{FieldKind, Record};
pub use scene::Scene;
pub use store::FileStorage;
pub use ui::ButtonEvent;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::config::{FIELD_CAPACITY, ID_SAVE_PATH, MAX_FILE_SIZE};
    use super::record::{FieldKind, Record};
    use super::store::{self, FileStorage, MemStorage};
    use super::ui::keyboard::{Key, Keyboard};
    use super::ui::widget::{wrap_lines, Align, Element, Font, Widget};
    use super::ui::{ButtonEvent, Submenu, TextInput};
    use super::Error;
    use proptest::prelude::*;

    fn record(name: &str, email: &str, tel: &str, addr: &str, notes: &str) -> Record {
        let mut r = Record::new();
        r.set(FieldKind::Name, name);
        r.set(FieldKind::Email, email);
        r.set(FieldKind::Tel, tel);
        r.set(FieldKind::Addr, addr);
        r.set(FieldKind::Notes, notes);
        r
    }

    // ════════════════════════════════════════════════════════════════════════
    // Record Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn record_starts_empty() {
        let r = Record::new();
        assert!(r.is_empty());
        assert_eq!(r, Record::default());
    }

    #[test]
    fn record_set_and_get_each_field() {
        let r = record("Ann", "ann@x.com", "555", "Main St", "likes tea");
        assert_eq!(r.get(FieldKind::Name), "Ann");
        assert_eq!(r.get(FieldKind::Email), "ann@x.com");
        assert_eq!(r.get(FieldKind::Tel), "555");
        assert_eq!(r.get(FieldKind::Addr), "Main St");
        assert_eq!(r.get(FieldKind::Notes), "likes tea");
        assert!(!r.is_empty());
    }

    #[test]
    fn record_set_truncates_to_field_capacity() {
        let mut r = Record::new();
        let long = "x".repeat(FIELD_CAPACITY + 10);
        assert!(!r.set(FieldKind::Name, &long));
        assert_eq!(r.name.len(), FIELD_CAPACITY);

        let exact = "y".repeat(FIELD_CAPACITY);
        assert!(r.set(FieldKind::Name, &exact));
        assert_eq!(r.name.as_str(), exact);
    }

    #[test]
    fn record_set_truncates_on_char_boundary() {
        let mut r = Record::new();
        // 32 two-byte characters = 64 bytes, one byte over capacity.
        let accented = "é".repeat(32);
        assert!(!r.set(FieldKind::Notes, &accented));
        assert_eq!(r.notes.chars().count(), 31);
        assert_eq!(r.notes.len(), 62);
    }

    #[test]
    fn field_kind_keys_resolve_back() {
        for field in FieldKind::ALL {
            assert_eq!(FieldKind::from_key(field.key()), Some(field));
        }
        assert_eq!(FieldKind::from_key("Phone"), None);
        assert_eq!(FieldKind::from_key("name"), None);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Record Store Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn encode_writes_header_then_fields_in_order() {
        let r = record("A", "b@x.com", "1", "Addr1", "hi");
        let text = store::encode(&r).unwrap();
        assert_eq!(
            text.as_str(),
            "Filetype: ID Data\nVersion: 1\nName: A\nEmail: b@x.com\nTel: 1\nAddr: Addr1\nNotes: hi\n"
        );
    }

    #[test]
    fn encode_keeps_empty_fields_as_empty_lines() {
        let text = store::encode(&Record::new()).unwrap();
        assert!(text.contains("Name: \n"));
        assert!(text.ends_with("Notes: \n"));
    }

    #[test]
    fn encode_fits_full_record() {
        let full = "z".repeat(FIELD_CAPACITY);
        let r = record(&full, &full, &full, &full, &full);
        let text = store::encode(&r).unwrap();
        assert!(text.len() < MAX_FILE_SIZE);
    }

    #[test]
    fn decode_partial_file_keeps_other_fields() {
        let mut r = record("old", "old@x", "555", "Somewhere", "keep me");
        let applied = store::decode("Filetype: ID Data\nVersion: 1\nName: New\nEmail: new@x\n", &mut r);
        assert_eq!(applied, 2);
        assert_eq!(r.get(FieldKind::Name), "New");
        assert_eq!(r.get(FieldKind::Email), "new@x");
        assert_eq!(r.get(FieldKind::Tel), "555");
        assert_eq!(r.get(FieldKind::Addr), "Somewhere");
        assert_eq!(r.get(FieldKind::Notes), "keep me");
    }

    #[test]
    fn decode_skips_comments_blank_lines_and_unknown_keys() {
        let mut r = Record::new();
        let text = "# saved by hand\n\nColor: blue\nnot a pair\nTel: 42\n";
        assert_eq!(store::decode(text, &mut r), 1);
        assert_eq!(r.get(FieldKind::Tel), "42");
        assert_eq!(r.get(FieldKind::Name), "");
    }

    #[test]
    fn decode_matches_by_key_not_position() {
        let mut r = Record::new();
        store::decode("Notes: first\nName: Bo\n", &mut r);
        assert_eq!(r.get(FieldKind::Name), "Bo");
        assert_eq!(r.get(FieldKind::Notes), "first");
    }

    #[test]
    fn decode_first_occurrence_wins() {
        let mut r = Record::new();
        assert_eq!(store::decode("Name: one\nName: two\n", &mut r), 1);
        assert_eq!(r.get(FieldKind::Name), "one");
    }

    #[test]
    fn decode_value_keeps_colons_and_inner_spaces() {
        let mut r = Record::new();
        store::decode("Notes: at 10:30  sharp\r\nAddr:no-space\n", &mut r);
        assert_eq!(r.get(FieldKind::Notes), "at 10:30  sharp");
        assert_eq!(r.get(FieldKind::Addr), "no-space");
    }

    #[test]
    fn decode_empty_value_clears_field() {
        let mut r = record("x", "x", "x", "x", "x");
        store::decode("Tel: \n", &mut r);
        assert_eq!(r.get(FieldKind::Tel), "");
    }

    #[test]
    fn decode_reads_fields_despite_foreign_header() {
        let mut r = Record::new();
        store::decode("Filetype: Something Else\nVersion: 7\nName: Cy\n", &mut r);
        assert_eq!(r.get(FieldKind::Name), "Cy");
    }

    #[test]
    fn decode_truncates_hand_edited_long_value() {
        let mut r = Record::new();
        let text = format!("Name: {}\n", "n".repeat(200));
        assert_eq!(store::decode(&text, &mut r), 1);
        assert_eq!(r.name.len(), FIELD_CAPACITY);
    }

    #[test]
    fn load_missing_file_leaves_record_untouched() {
        let mut storage = MemStorage::new();
        let mut r = Record::new();
        let result = store::load(&mut storage, "/ext/nothing.txt", &mut r);
        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(r, Record::new());
    }

    #[test]
    fn load_rejects_non_utf8_without_touching_record() {
        let mut storage = MemStorage::new();
        storage.write(ID_SAVE_PATH, &[b'N', b'a', 0xFF, 0xFE]).unwrap();
        let mut r = record("keep", "", "", "", "");
        assert_eq!(store::load(&mut storage, ID_SAVE_PATH, &mut r), Err(Error::Encoding));
        assert_eq!(r.get(FieldKind::Name), "keep");
    }

    #[test]
    fn load_oversized_file_keeps_leading_fields() {
        let big = format!(
            "Filetype: ID Data\nVersion: 1\nName: Bo\nEmail: me@x.com\nNotes: {}\nTel: 555\n",
            "n".repeat(MAX_FILE_SIZE + 76)
        );
        let mut storage = MemStorage::new().with_file(ID_SAVE_PATH, &big);
        let mut r = record("", "", "old", "", "keep");
        assert_eq!(store::load(&mut storage, ID_SAVE_PATH, &mut r), Ok(2));
        assert_eq!(r.get(FieldKind::Name), "Bo");
        assert_eq!(r.get(FieldKind::Email), "me@x.com");
        // The cut-off line and everything after it are not read.
        assert_eq!(r.get(FieldKind::Notes), "keep");
        assert_eq!(r.get(FieldKind::Tel), "old");
    }

    #[test]
    fn load_oversized_file_without_line_break_reads_nothing() {
        let big = format!("Name: {}", "x".repeat(MAX_FILE_SIZE * 2));
        let mut storage = MemStorage::new().with_file(ID_SAVE_PATH, &big);
        let mut r = Record::new();
        assert_eq!(store::load(&mut storage, ID_SAVE_PATH, &mut r), Ok(0));
        assert!(r.is_empty());
    }

    #[test]
    fn storage_read_copies_prefix_and_reports_full_size() {
        let mut storage = MemStorage::new().with_file("/ext/a.txt", "abcdef");
        let mut buf = [0u8; 4];
        assert_eq!(storage.read("/ext/a.txt", &mut buf), Ok(6));
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn save_overwrites_previous_file() {
        let mut storage = MemStorage::new().with_file(ID_SAVE_PATH, "Name: stale\nExtra: line\n");
        store::save(&mut storage, ID_SAVE_PATH, &record("fresh", "", "", "", "")).unwrap();
        let text = storage.file(ID_SAVE_PATH).unwrap();
        assert!(text.contains("Name: fresh\n"));
        assert!(!text.contains("stale"));
        assert!(!text.contains("Extra"));
    }

    #[test]
    fn save_reports_storage_failure() {
        let mut storage = MemStorage::new();
        storage.fail_writes(true);
        let result = store::save(&mut storage, ID_SAVE_PATH, &Record::new());
        assert_eq!(result, Err(Error::Storage));
        assert!(storage.file(ID_SAVE_PATH).is_none());
    }

    proptest! {
        #[test]
        fn save_then_load_restores_printable_record(
            name in "[ -~]{0,63}",
            email in "[ -~]{0,63}",
            tel in "[ -~]{0,63}",
            addr in "[ -~]{0,63}",
            notes in "[ -~]{0,63}",
        ) {
            let saved = record(&name, &email, &tel, &addr, &notes);
            let mut storage = MemStorage::new();
            store::save(&mut storage, ID_SAVE_PATH, &saved).unwrap();

            let mut loaded = Record::new();
            let applied = store::load(&mut storage, ID_SAVE_PATH, &mut loaded).unwrap();
            prop_assert_eq!(applied, FieldKind::COUNT);
            prop_assert_eq!(loaded, saved);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // View Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn ui_input_logic_selection_boundaries() {
        use super::ui::input_logic::{select_next, select_prev};
        assert_eq!(select_prev(0), 0);
        assert_eq!(select_prev(3), 2);
        assert_eq!(select_next(0, 1), 0);
        assert_eq!(select_next(0, 3), 1);
        assert_eq!(select_next(2, 3), 2);
    }

    #[test]
    fn ui_input_logic_window_and_scroll() {
        use super::ui::input_logic::{scroll_down, window_start, wrap_next, wrap_prev};
        assert_eq!(window_start(0, 4), 0);
        assert_eq!(window_start(3, 4), 0);
        assert_eq!(window_start(4, 4), 1);
        assert_eq!(scroll_down(0, 3, 1), 1);
        assert_eq!(scroll_down(2, 3, 1), 2);
        assert_eq!(scroll_down(0, 2, 4), 0);
        assert_eq!(wrap_prev(0, 10), 9);
        assert_eq!(wrap_next(9, 10), 0);
        assert_eq!(wrap_next(3, 10), 4);
    }

    #[test]
    fn wrap_lines_breaks_at_spaces() {
        let lines = wrap_lines("hello world foo", 11);
        assert_eq!(lines.as_slice(), &["hello world", "foo"]);

        let lines = wrap_lines("ab cdefgh", 4);
        assert_eq!(lines.as_slice(), &["ab", "cdef", "gh"]);
    }

    #[test]
    fn wrap_lines_splits_long_words_and_handles_empty() {
        let lines = wrap_lines("abcdefghij", 4);
        assert_eq!(lines.as_slice(), &["abcd", "efgh", "ij"]);
        assert!(wrap_lines("", 10).is_empty());
        assert!(wrap_lines("   ", 10).is_empty());
        assert_eq!(wrap_lines("short", 15).as_slice(), &["short"]);
    }

    #[test]
    fn widget_text_scroll_stops_at_last_line() {
        let mut widget = Widget::new();
        // 12 columns × 1 visible line.
        widget
            .add_text_scroll_element(0, 0, 72, 10, "one two three four five")
            .unwrap();
        assert!(widget.handle_button(ButtonEvent::Down));
        assert!(widget.handle_button(ButtonEvent::Down));
        assert!(widget.handle_button(ButtonEvent::Down));
        assert!(!widget.handle_button(ButtonEvent::Select));

        let Element::TextScroll(scroll) = &widget.elements()[0] else {
            panic!("expected text scroll element");
        };
        assert_eq!(scroll.lines().as_slice(), &["one two", "three four", "five"]);
        assert_eq!(scroll.offset(), 2);
        assert_eq!(scroll.visible().collect::<Vec<_>>(), vec!["five"]);
    }

    #[test]
    fn widget_without_scroll_region_ignores_arrows() {
        let mut widget = Widget::new();
        widget
            .add_string_element(0, 0, Align::Left, Align::Top, Font::Primary, "x")
            .unwrap();
        assert!(!widget.handle_button(ButtonEvent::Down));
    }

    #[test]
    fn submenu_moves_and_reports_selected_event() {
        use super::scene::CustomEvent;
        let mut menu = Submenu::new();
        menu.add_item("One", CustomEvent::MenuIdCard).unwrap();
        menu.add_item("Two", CustomEvent::MenuSetup).unwrap();

        assert_eq!(menu.handle_button(ButtonEvent::Up), None);
        assert_eq!(menu.selected(), 0);
        menu.handle_button(ButtonEvent::Down);
        menu.handle_button(ButtonEvent::Down);
        assert_eq!(menu.selected(), 1);
        assert_eq!(menu.handle_button(ButtonEvent::Select), Some(CustomEvent::MenuSetup));

        menu.reset();
        assert!(menu.items().is_empty());
        assert_eq!(menu.handle_button(ButtonEvent::Select), None);
    }

    #[test]
    fn keyboard_starts_on_letters_and_wraps_sideways() {
        let mut kb = Keyboard::new();
        assert_eq!(kb.selected(), Key::Char('q'));
        kb.move_left();
        assert_eq!(kb.selected(), Key::Char('p'));
        kb.move_right();
        assert_eq!(kb.selected(), Key::Char('q'));
    }

    #[test]
    fn keyboard_maps_column_between_rows_of_different_width() {
        let mut kb = Keyboard::new();
        kb.move_left(); // 'p', column 9
        kb.move_down();
        kb.move_down();
        kb.move_down();
        assert_eq!(kb.selected(), Key::Save);
        kb.move_down();
        assert_eq!(kb.selected(), Key::Save);
        kb.move_up();
        assert_eq!(kb.cursor(), (3, 9));
        for _ in 0..10 {
            kb.move_up();
        }
        assert_eq!(kb.cursor().0, 0);
    }

    #[test]
    fn keyboard_shift_is_one_shot() {
        let mut kb = Keyboard::new();
        kb.toggle_shift();
        assert_eq!(kb.type_char('a'), 'A');
        assert!(!kb.shift());
        assert_eq!(kb.type_char('a'), 'a');
        kb.toggle_shift();
        assert_eq!(kb.type_char('@'), '@');
    }

    #[test]
    fn text_input_first_key_replaces_default_text() {
        let mut input = TextInput::new();
        input.set_default_text("old", true);
        assert!(input.default_text_pending());

        // 'q' is under the cursor.
        assert!(!input.handle_button(ButtonEvent::Select));
        assert_eq!(input.text(), "q");
        assert!(!input.default_text_pending());

        input.handle_button(ButtonEvent::Select);
        assert_eq!(input.text(), "qq");
    }

    #[test]
    fn text_input_delete_and_submit() {
        let mut input = TextInput::new();
        input.set_default_text("abc", false);

        // Walk to the special row: Shift, Space, Del, OK.
        for _ in 0..3 {
            input.handle_button(ButtonEvent::Down);
        }
        assert_eq!(input.keyboard().selected(), Key::Shift);
        input.handle_button(ButtonEvent::Right);
        input.handle_button(ButtonEvent::Right);
        assert_eq!(input.keyboard().selected(), Key::Backspace);
        input.handle_button(ButtonEvent::Select);
        assert_eq!(input.text(), "ab");

        input.handle_button(ButtonEvent::Right);
        assert!(input.handle_button(ButtonEvent::Select));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn text_input_respects_minimum_length() {
        let mut input = TextInput::new();
        input.set_minimum_length(1);
        for _ in 0..3 {
            input.handle_button(ButtonEvent::Down);
        }
        input.handle_button(ButtonEvent::Left);
        assert_eq!(input.keyboard().selected(), Key::Save);
        assert!(!input.handle_button(ButtonEvent::Select));

        input.set_minimum_length(0);
        assert!(input.handle_button(ButtonEvent::Select));
    }

    #[test]
    fn text_input_full_buffer_ignores_more_keys() {
        let mut input = TextInput::new();
        input.set_default_text(&"k".repeat(FIELD_CAPACITY), false);
        input.handle_button(ButtonEvent::Select);
        assert_eq!(input.text().len(), FIELD_CAPACITY);
        assert!(input.text().chars().all(|c| c == 'k'));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Display Power Policy Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn screen_power_policy_auto_off_enabled_after_timeout() {
        assert!(crate::power_logic::screen_should_be_on(true, 119, 120));
        assert!(!crate::power_logic::screen_should_be_on(true, 120, 120));
        assert!(!crate::power_logic::screen_should_be_on(true, 240, 120));
    }

    #[test]
    fn screen_power_policy_auto_off_disabled_stays_on() {
        assert!(crate::power_logic::screen_should_be_on(false, 120, 120));
        assert!(crate::power_logic::screen_should_be_on(false, 3600, 120));
    }
}
