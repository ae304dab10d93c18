//! Application shell - owns all state and feeds button presses to the scenes.
//!
//! `AppContext` is what scene handlers may touch: the record, the single
//! input buffer shared by every prompt, the views and the storage backend.
//! The scene manager sits next to it in `App`, so a handler always gets the
//! context by exclusive reference and never aliases the manager.

use crate::config::ID_SAVE_PATH;
use crate::error::Error;
use crate::record::{FieldText, Record};
use crate::scene::{Scene, SceneEvent, SceneManager};
use crate::store::{self, FileStorage};
use crate::ui::{ButtonEvent, ViewDispatcher};

/// State shared by all scenes.
pub struct AppContext<S> {
    pub record: Record,
    /// Result of the last submitted prompt.
    pub input_buffer: FieldText,
    pub views: ViewDispatcher,
    storage: S,
    save_path: &'static str,
}

impl<S: FileStorage> AppContext<S> {
    /// Refresh the record from storage. Any failure leaves it as it was.
    pub fn load_data(&mut self) {
        match store::load(&mut self.storage, self.save_path, &mut self.record) {
            Ok(fields) => info!("app: loaded {} fields from {=str}", fields, self.save_path),
            Err(Error::NotFound) => debug!("app: no record at {=str}", self.save_path),
            Err(e) => warn!("app: load of {=str} skipped: {}", self.save_path, e),
        }
    }

    /// Write the record to storage. A failure is logged and otherwise ignored.
    pub fn save_data(&mut self) {
        match store::save(&mut self.storage, self.save_path, &self.record) {
            Ok(()) => info!("app: record saved to {=str}", self.save_path),
            Err(e) => warn!("app: save to {=str} failed: {}", self.save_path, e),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

pub struct App<S> {
    scene_manager: SceneManager,
    ctx: AppContext<S>,
    running: bool,
}

impl<S: FileStorage> App<S> {
    /// Build the app around `storage`, reading any saved record.
    pub fn new(storage: S) -> Self {
        Self::with_save_path(storage, ID_SAVE_PATH)
    }

    pub fn with_save_path(storage: S, save_path: &'static str) -> Self {
        let mut app = Self {
            scene_manager: SceneManager::new(),
            ctx: AppContext {
                record: Record::new(),
                input_buffer: FieldText::new(),
                views: ViewDispatcher::new(),
                storage,
                save_path,
            },
            running: false,
        };
        app.ctx.load_data();
        app
    }

    /// Enter the main menu.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = self
            .scene_manager
            .next_scene(Scene::MainMenu, &mut self.ctx)
            .is_ok();
    }

    /// Handle one button press. Returns `false` once the app has stopped.
    pub fn handle_button(&mut self, button: ButtonEvent) -> bool {
        if !self.running {
            return false;
        }
        let event = self
            .ctx
            .views
            .handle_button(button, &mut self.ctx.input_buffer);
        match event {
            Some(SceneEvent::Back) => {
                if !self.scene_manager.handle_back_event(&mut self.ctx) {
                    self.stop();
                }
            }
            Some(SceneEvent::Custom(custom)) => {
                self.scene_manager.handle_custom_event(custom, &mut self.ctx);
            }
            None => {}
        }
        self.running
    }

    /// Exit the active scene. Returns the exit status, always 0.
    pub fn stop(&mut self) -> i32 {
        if self.running {
            self.scene_manager.stop(&mut self.ctx);
            self.running = false;
            info!("app: stopped");
        }
        0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_scene(&self) -> Option<Scene> {
        self.scene_manager.current()
    }

    pub fn scene_stack(&self) -> &[Scene] {
        self.scene_manager.stack()
    }

    pub fn record(&self) -> &Record {
        &self.ctx.record
    }

    pub fn input_buffer(&self) -> &str {
        &self.ctx.input_buffer
    }

    pub fn views(&self) -> &ViewDispatcher {
        &self.ctx.views
    }

    pub fn storage(&self) -> &S {
        self.ctx.storage()
    }

    /// Scene manager and context, for driving scenes directly.
    pub fn parts_mut(&mut self) -> (&mut SceneManager, &mut AppContext<S>) {
        (&mut self.scene_manager, &mut self.ctx)
    }

    pub fn into_storage(mut self) -> S {
        self.stop();
        self.ctx.storage
    }
}

/// Run the app over a sequence of presses.
///
/// `on_frame` sees the views after start and after every press. Stops when
/// BACK leaves the main menu or the presses run out, and returns the exit
/// status (always 0).
pub fn run<S, I, F>(storage: S, buttons: I, mut on_frame: F) -> i32
where
    S: FileStorage,
    I: IntoIterator<Item = ButtonEvent>,
    F: FnMut(Option<Scene>, &ViewDispatcher),
{
    let mut app = App::new(storage);
    app.start();
    on_frame(app.current_scene(), app.views());

    for button in buttons {
        if !app.handle_button(button) {
            break;
        }
        on_frame(app.current_scene(), app.views());
    }

    app.stop()
}
