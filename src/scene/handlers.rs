//! Enter/event/exit behaviour of every scene.

use super::{CustomEvent, Scene, SceneEvent, Transition};
use crate::app::AppContext;
use crate::config::{
    ABOUT_AUTHOR, ABOUT_TITLE, ABOUT_VERSION, ID_CARD_FIRST_ROW_Y, ID_CARD_NOTES_RAISE,
    ID_CARD_ROW_STEP, ID_CARD_VALUE_X, MAIN_MENU_HEADER, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::error::Error;
use crate::record::{FieldKind, Record};
use crate::store::FileStorage;
use crate::ui::widget::{Align, Font};
use crate::ui::{Submenu, ViewId, Widget};

impl Scene {
    pub fn on_enter<S: FileStorage>(self, ctx: &mut AppContext<S>) {
        match self {
            Scene::MainMenu => main_menu_on_enter(ctx),
            Scene::IdCard => id_card_on_enter(ctx),
            Scene::InputName => input_on_enter(ctx, FieldKind::Name),
            Scene::InputEmail => input_on_enter(ctx, FieldKind::Email),
            Scene::InputTel => input_on_enter(ctx, FieldKind::Tel),
            Scene::InputAddr => input_on_enter(ctx, FieldKind::Addr),
            Scene::InputNotes => input_on_enter(ctx, FieldKind::Notes),
            Scene::Saved => saved_on_enter(ctx),
            Scene::About => about_on_enter(ctx),
        }
    }

    pub fn on_event<S: FileStorage>(self, event: SceneEvent, ctx: &mut AppContext<S>) -> Transition {
        match self {
            Scene::MainMenu => main_menu_on_event(event),
            Scene::InputName => input_on_event(ctx, FieldKind::Name, event),
            Scene::InputEmail => input_on_event(ctx, FieldKind::Email, event),
            Scene::InputTel => input_on_event(ctx, FieldKind::Tel, event),
            Scene::InputAddr => input_on_event(ctx, FieldKind::Addr, event),
            Scene::InputNotes => input_on_event(ctx, FieldKind::Notes, event),
            Scene::Saved => saved_on_event(event),
            Scene::IdCard | Scene::About => Transition::Ignored,
        }
    }

    pub fn on_exit<S: FileStorage>(self, ctx: &mut AppContext<S>) {
        match self {
            Scene::MainMenu => ctx.views.submenu.reset(),
            Scene::Saved | Scene::About => ctx.views.widget.reset(),
            Scene::IdCard
            | Scene::InputName
            | Scene::InputEmail
            | Scene::InputTel
            | Scene::InputAddr
            | Scene::InputNotes => {}
        }
    }
}

// Main menu

fn main_menu_on_enter<S: FileStorage>(ctx: &mut AppContext<S>) {
    let submenu = &mut ctx.views.submenu;
    submenu.reset();
    if let Err(e) = fill_main_menu(submenu) {
        error!("scene: main menu incomplete: {}", e);
    }
    ctx.views.switch_to_view(ViewId::Submenu);
}

fn fill_main_menu(submenu: &mut Submenu) -> Result<(), Error> {
    submenu.set_header(MAIN_MENU_HEADER);
    submenu.add_item("ID Card", CustomEvent::MenuIdCard)?;
    submenu.add_item("Setup", CustomEvent::MenuSetup)?;
    submenu.add_item("About", CustomEvent::MenuAbout)?;
    Ok(())
}

fn main_menu_on_event(event: SceneEvent) -> Transition {
    match event {
        SceneEvent::Custom(CustomEvent::MenuIdCard) => Transition::Next(Scene::IdCard),
        SceneEvent::Custom(CustomEvent::MenuSetup) => Transition::Next(Scene::InputName),
        SceneEvent::Custom(CustomEvent::MenuAbout) => Transition::Next(Scene::About),
        _ => Transition::Ignored,
    }
}

// ID card

fn id_card_on_enter<S: FileStorage>(ctx: &mut AppContext<S>) {
    // Pick up whatever is on storage now, not just what this session typed.
    ctx.load_data();
    if let Err(e) = layout_id_card(&mut ctx.views.widget, &ctx.record) {
        error!("scene: id card layout incomplete: {}", e);
    }
    ctx.views.switch_to_view(ViewId::Widget);
}

/// Lay out the card: title, then one label/value row per non-empty field.
///
/// Empty fields take no row. Notes gets a scrollable region from its row
/// to the bottom of the screen instead of a single line.
pub fn layout_id_card(widget: &mut Widget, record: &Record) -> Result<(), Error> {
    widget.reset();
    widget.add_string_element(
        SCREEN_WIDTH - 1,
        5,
        Align::Right,
        Align::Center,
        Font::Primary,
        "ID Card",
    )?;

    let mut y = ID_CARD_FIRST_ROW_Y;
    for field in FieldKind::ALL {
        let value = record.get(field);
        if value.is_empty() {
            continue;
        }
        widget.add_string_element(0, y, Align::Left, Align::Center, Font::Secondary, field.label())?;

        if field == FieldKind::Notes {
            let top = y - ID_CARD_NOTES_RAISE;
            widget.add_text_scroll_element(
                ID_CARD_VALUE_X,
                top,
                (SCREEN_WIDTH - ID_CARD_VALUE_X) as u32,
                (SCREEN_HEIGHT - top) as u32,
                value,
            )?;
        } else {
            widget.add_string_element(
                ID_CARD_VALUE_X,
                y,
                Align::Left,
                Align::Center,
                Font::Secondary,
                value,
            )?;
        }
        y += ID_CARD_ROW_STEP;
    }
    Ok(())
}

// Text prompts

fn input_on_enter<S: FileStorage>(ctx: &mut AppContext<S>, field: FieldKind) {
    // The shared buffer starts from the stored value; it only reaches the
    // record again if the prompt is submitted.
    ctx.input_buffer.clear();
    let _ = ctx.input_buffer.push_str(ctx.record.get(field));

    let text_input = &mut ctx.views.text_input;
    text_input.reset();
    text_input.set_header_text(field.prompt());
    text_input.set_minimum_length(0);
    text_input.set_default_text(&ctx.input_buffer, true);
    ctx.views.switch_to_view(ViewId::TextInput);
}

fn input_on_event<S: FileStorage>(
    ctx: &mut AppContext<S>,
    field: FieldKind,
    event: SceneEvent,
) -> Transition {
    if event != SceneEvent::Custom(CustomEvent::TextInputSaved) {
        return Transition::Ignored;
    }
    ctx.record.set(field, &ctx.input_buffer);

    match next_field(field) {
        Some(next) => Transition::Next(Scene::input_for(next)),
        None => {
            ctx.save_data();
            Transition::Next(Scene::Saved)
        }
    }
}

fn next_field(field: FieldKind) -> Option<FieldKind> {
    FieldKind::ALL.get(field.index() + 1).copied()
}

// Confirmation

fn saved_on_enter<S: FileStorage>(ctx: &mut AppContext<S>) {
    let widget = &mut ctx.views.widget;
    widget.reset();
    if let Err(e) = widget.add_string_element(
        SCREEN_WIDTH / 2,
        SCREEN_HEIGHT / 2,
        Align::Center,
        Align::Center,
        Font::Primary,
        "Saved!",
    ) {
        error!("scene: saved screen incomplete: {}", e);
    }
    ctx.views.switch_to_view(ViewId::Widget);
}

fn saved_on_event(event: SceneEvent) -> Transition {
    match event {
        SceneEvent::Back => Transition::BackTo(Scene::MainMenu),
        SceneEvent::Custom(_) => Transition::Ignored,
    }
}

// About

fn about_on_enter<S: FileStorage>(ctx: &mut AppContext<S>) {
    if let Err(e) = layout_about(&mut ctx.views.widget) {
        error!("scene: about screen incomplete: {}", e);
    }
    ctx.views.switch_to_view(ViewId::Widget);
}

fn layout_about(widget: &mut Widget) -> Result<(), Error> {
    widget.reset();
    widget.add_string_element(5, 5, Align::Left, Align::Center, Font::Secondary, ABOUT_TITLE)?;
    widget.add_string_element(5, 15, Align::Left, Align::Center, Font::Secondary, ABOUT_VERSION)?;
    widget.add_string_element(5, 55, Align::Left, Align::Center, Font::Primary, ABOUT_AUTHOR)?;
    Ok(())
}
