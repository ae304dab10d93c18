//! SSD1306 OLED display wrapper.
//!
//! Renders whichever view the app currently shows: the menu list, a
//! widget panel, or the text prompt with its on-screen keyboard.

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_6X13_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use id_card::config::{LINE_HEIGHT, SCREEN_WIDTH, SUBMENU_VISIBLE_ROWS};
use id_card::ui::input_logic::window_start;
use id_card::ui::keyboard::Key;
use id_card::ui::widget::{Align, Element, Font, StringElement, TextScrollElement};
use id_card::ui::{Submenu, TextInput, ViewDispatcher, ViewId, Widget};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Height of one menu row in pixels.
const MENU_ROW_HEIGHT: i32 = 10;

/// Keyboard geometry: first row top, row height, character key width.
const KEYBOARD_TOP: i32 = 24;
const KEY_ROW_HEIGHT: i32 = 8;
const KEY_WIDTH: i32 = 12;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style(font: Font) -> MonoTextStyle<'static, BinaryColor> {
    let font = match font {
        Font::Primary => &FONT_6X13_BOLD,
        Font::Secondary => &FONT_6X10,
    };
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

fn inverted_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::Off)
        .background_color(BinaryColor::On)
        .build()
}

fn placement(horizontal: Align, vertical: Align) -> TextStyle {
    let alignment = match horizontal {
        Align::Right => Alignment::Right,
        Align::Center => Alignment::Center,
        _ => Alignment::Left,
    };
    let baseline = match vertical {
        Align::Top => Baseline::Top,
        Align::Bottom => Baseline::Bottom,
        _ => Baseline::Middle,
    };
    TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(baseline)
        .build()
}

fn top_left() -> TextStyle {
    placement(Align::Left, Align::Top)
}

/// Render the view the app currently shows.
pub fn draw_views<I2C>(display: &mut Display<I2C>, views: &ViewDispatcher)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    match views.current_view() {
        Some(ViewId::Submenu) => draw_submenu(display, &views.submenu),
        Some(ViewId::Widget) => draw_widget(display, &views.widget),
        Some(ViewId::TextInput) => draw_text_input(display, &views.text_input),
        None => {}
    }

    let _ = display.flush();
}

/// Shown once the app has exited; the next press restarts the device.
pub fn draw_exit<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    let _ = Text::with_text_style(
        "Press any button",
        Point::new(SCREEN_WIDTH / 2, 32),
        text_style(Font::Secondary),
        placement(Align::Center, Align::Center),
    )
    .draw(display);
    let _ = display.flush();
}

fn draw_submenu<D: DrawTarget<Color = BinaryColor>>(display: &mut D, submenu: &Submenu) {
    let _ = Text::with_text_style(
        submenu.header(),
        Point::new(0, 0),
        text_style(Font::Primary),
        top_left(),
    )
    .draw(display);

    let first = window_start(submenu.selected(), SUBMENU_VISIBLE_ROWS);
    let rows = submenu
        .items()
        .iter()
        .enumerate()
        .skip(first)
        .take(SUBMENU_VISIBLE_ROWS);

    for (row, (index, item)) in rows.enumerate() {
        let y = 14 + row as i32 * MENU_ROW_HEIGHT;
        let style = if index == submenu.selected() {
            let _ = Rectangle::new(
                Point::new(0, y),
                Size::new(SCREEN_WIDTH as u32, MENU_ROW_HEIGHT as u32),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
            inverted_style(&FONT_6X10)
        } else {
            text_style(Font::Secondary)
        };
        let _ = Text::with_text_style(item.label, Point::new(4, y), style, top_left()).draw(display);
    }
}

fn draw_widget<D: DrawTarget<Color = BinaryColor>>(display: &mut D, widget: &Widget) {
    for element in widget.elements() {
        match element {
            Element::String(s) => draw_string(display, s),
            Element::TextScroll(t) => draw_text_scroll(display, t),
        }
    }
}

fn draw_string<D: DrawTarget<Color = BinaryColor>>(display: &mut D, element: &StringElement) {
    let _ = Text::with_text_style(
        &element.text,
        Point::new(element.x, element.y),
        text_style(element.font),
        placement(element.horizontal, element.vertical),
    )
    .draw(display);
}

fn draw_text_scroll<D: DrawTarget<Color = BinaryColor>>(
    display: &mut D,
    element: &TextScrollElement,
) {
    for (row, line) in element.visible().enumerate() {
        let y = element.y + row as i32 * LINE_HEIGHT as i32;
        let _ = Text::with_text_style(
            line,
            Point::new(element.x, y),
            text_style(Font::Secondary),
            top_left(),
        )
        .draw(display);
    }
}

fn draw_text_input<D: DrawTarget<Color = BinaryColor>>(display: &mut D, input: &TextInput) {
    let _ = Text::with_text_style(
        input.header(),
        Point::new(0, 0),
        text_style(Font::Secondary),
        top_left(),
    )
    .draw(display);

    let _ = Rectangle::new(Point::new(0, 10), Size::new(SCREEN_WIDTH as u32, 13))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display);

    // Keep the end of the text in view; 19 glyphs and the cursor fit in the frame.
    let text = input.text();
    let skip = text.chars().count().saturating_sub(19);
    let tail = text.char_indices().nth(skip).map_or("", |(i, _)| &text[i..]);
    let style = if input.default_text_pending() {
        inverted_style(&FONT_6X10)
    } else {
        text_style(Font::Secondary)
    };
    let end = Text::with_text_style(tail, Point::new(2, 12), style, top_left())
        .draw(display)
        .unwrap_or(Point::new(2, 12));
    if !input.default_text_pending() {
        let _ = Text::with_text_style("_", end, text_style(Font::Secondary), top_left())
            .draw(display);
    }

    draw_keyboard(display, input);
}

fn draw_keyboard<D: DrawTarget<Color = BinaryColor>>(display: &mut D, input: &TextInput) {
    let keyboard = input.keyboard();
    let (cursor_row, cursor_col) = keyboard.cursor();

    for (row, keys) in keyboard.rows().iter().enumerate() {
        let y = KEYBOARD_TOP + row as i32 * KEY_ROW_HEIGHT;
        let width = SCREEN_WIDTH / keys.len() as i32;
        for (col, key) in keys.iter().enumerate() {
            let mut glyph = [0u8; 4];
            let label: &str = match (key.caption(), key) {
                (Some(caption), _) => caption,
                (None, Key::Char(c)) => {
                    let c = if keyboard.shift() { c.to_ascii_uppercase() } else { *c };
                    &*c.encode_utf8(&mut glyph)
                }
                (None, _) => "",
            };

            let x = col as i32 * width + width.min(KEY_WIDTH) / 2;
            let style = if (row, col) == (cursor_row, cursor_col) {
                inverted_style(&FONT_5X8)
            } else {
                MonoTextStyleBuilder::new()
                    .font(&FONT_5X8)
                    .text_color(BinaryColor::On)
                    .build()
            };
            let _ = Text::with_text_style(label, Point::new(x, y), style, top_left()).draw(display);
        }
    }
}
