//! Scenes and the scene manager.
//!
//! A scene is one full-screen state with enter/event/exit behaviour
//! (see `handlers`). The manager keeps a stack of scenes: moving forward
//! pushes, BACK pops, and every scene that is entered is exited exactly
//! once before the next one is entered.
//!
//! Handlers never navigate themselves; they return a [`Transition`] and the
//! manager applies it.

mod handlers;


pub use handlers::layout_id_card;

use crate::app::AppContext;
use crate::config::SCENE_STACK_DEPTH;
use crate::error::Error;
use crate::record::FieldKind;
use crate::store::FileStorage;
use heapless::Vec;

/// Every screen of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scene {
    MainMenu,
    IdCard,
    InputName,
    InputEmail,
    InputTel,
    InputAddr,
    InputNotes,
    /// Confirmation shown after the record was written.
    Saved,
    About,
}

impl Scene {
    /// The prompt scene that edits `field`.
    pub const fn input_for(field: FieldKind) -> Scene {
        match field {
            FieldKind::Name => Scene::InputName,
            FieldKind::Email => Scene::InputEmail,
            FieldKind::Tel => Scene::InputTel,
            FieldKind::Addr => Scene::InputAddr,
            FieldKind::Notes => Scene::InputNotes,
        }
    }
}

/// App-level events produced by the views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomEvent {
    MenuIdCard,
    MenuSetup,
    MenuAbout,
    /// The text prompt was submitted; its text is in the input buffer.
    TextInputSaved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SceneEvent {
    Custom(CustomEvent),
    Back,
}

/// What a scene asks the manager to do after handling an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Not handled; BACK falls through to the previous scene.
    Ignored,
    /// Handled, stay on this scene.
    Consumed,
    /// Push `Scene` on top of this one.
    Next(Scene),
    /// Unwind the stack down to an earlier `Scene`.
    BackTo(Scene),
}

#[derive(Clone, Debug, Default)]
pub struct SceneManager {
    stack: Vec<Scene, SCENE_STACK_DEPTH>,
}

impl SceneManager {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn current(&self) -> Option<Scene> {
        self.stack.last().copied()
    }

    /// Scenes from the bottom (first entered) to the top (current).
    pub fn stack(&self) -> &[Scene] {
        &self.stack
    }

    /// Leave the current scene and enter `scene` on top of it.
    ///
    /// A full stack refuses the push and the current scene stays active.
    pub fn next_scene<S: FileStorage>(
        &mut self,
        scene: Scene,
        ctx: &mut AppContext<S>,
    ) -> Result<(), Error> {
        if self.stack.is_full() {
            warn!("scene: stack full, not entering {}", scene);
            return Err(Error::SceneStackFull);
        }
        if let Some(current) = self.current() {
            current.on_exit(ctx);
        }
        let _ = self.stack.push(scene);
        debug!("scene: enter {}", scene);
        scene.on_enter(ctx);
        Ok(())
    }

    /// Offer a custom event to the current scene. Returns `true` if it was handled.
    pub fn handle_custom_event<S: FileStorage>(
        &mut self,
        event: CustomEvent,
        ctx: &mut AppContext<S>,
    ) -> bool {
        let Some(current) = self.current() else {
            return false;
        };
        let transition = current.on_event(SceneEvent::Custom(event), ctx);
        self.apply(transition, ctx)
    }

    /// Offer BACK to the current scene, then fall back to the previous one.
    ///
    /// Returns `false` when there is nothing to go back to and the app
    /// should stop.
    pub fn handle_back_event<S: FileStorage>(&mut self, ctx: &mut AppContext<S>) -> bool {
        let Some(current) = self.current() else {
            return false;
        };
        match current.on_event(SceneEvent::Back, ctx) {
            Transition::Ignored => self.previous_scene(ctx),
            transition => self.apply(transition, ctx) || self.previous_scene(ctx),
        }
    }

    /// Leave the current scene and re-enter the one below it.
    ///
    /// The last remaining scene is never popped; `false` tells the caller
    /// to stop instead.
    pub fn previous_scene<S: FileStorage>(&mut self, ctx: &mut AppContext<S>) -> bool {
        if self.stack.len() < 2 {
            return false;
        }
        if let Some(current) = self.stack.pop() {
            current.on_exit(ctx);
        }
        match self.current() {
            Some(previous) => {
                debug!("scene: back to {}", previous);
                previous.on_enter(ctx);
                true
            }
            None => false,
        }
    }

    /// Leave the current scene and unwind to the most recent `scene` on the stack.
    ///
    /// If `scene` is not on the stack nothing changes and `false` is returned.
    pub fn search_and_switch_to_previous_scene<S: FileStorage>(
        &mut self,
        scene: Scene,
        ctx: &mut AppContext<S>,
    ) -> bool {
        let Some(target) = self.stack.iter().rposition(|&s| s == scene) else {
            warn!("scene: {} not on stack", scene);
            return false;
        };
        if let Some(current) = self.current() {
            current.on_exit(ctx);
        }
        self.stack.truncate(target + 1);
        debug!("scene: back to {}", scene);
        scene.on_enter(ctx);
        true
    }

    /// Exit the active scene and forget the stack.
    pub fn stop<S: FileStorage>(&mut self, ctx: &mut AppContext<S>) {
        if let Some(current) = self.current() {
            current.on_exit(ctx);
        }
        self.stack.clear();
    }

    fn apply<S: FileStorage>(&mut self, transition: Transition, ctx: &mut AppContext<S>) -> bool {
        match transition {
            Transition::Ignored => false,
            Transition::Consumed => true,
            Transition::Next(scene) => {
                // A refused push has been logged; the press is still used up.
                let _ = self.next_scene(scene, ctx);
                true
            }
            Transition::BackTo(scene) => self.search_and_switch_to_previous_scene(scene, ctx),
        }
    }
}
