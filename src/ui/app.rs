use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::analysis::Signal;
use crate::config::{PERSISTENCE, WEB};
use crate::data::{MemoryStore, PreviewUrl, SelectedPhoto, decode_preview};
use crate::domain::AppError;
use crate::platform::{self, PhotoInbox};
use crate::ui::controller::WidgetController;
use crate::ui::ui_panels::WidgetEvent;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Startup options coming from the command line (native) or defaults (web)
#[derive(Debug, Default)]
pub struct LaunchOptions {
    pub photo: Option<SelectedPhoto>,
    pub reset_preferences: bool,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OptiBotApp {
    // Calculator field survives restarts along with the window state
    pub(super) calc_input: String,

    #[serde(skip)]
    pub(super) controller: WidgetController<MemoryStore>,

    // Async analysis state
    #[serde(skip)]
    pub(super) analysis_promise: Option<Promise<Signal>>,

    // Photos arriving from the browser file picker
    #[serde(skip)]
    pub(super) photo_inbox: PhotoInbox,
    #[cfg(target_arch = "wasm32")]
    #[serde(skip)]
    pub(super) photo_picker: Option<platform::PhotoPicker>,
    #[serde(skip)]
    pub(super) preview_texture: Option<(PreviewUrl, egui::TextureHandle)>,

    // Native stand-in for the file picker
    #[serde(skip)]
    pub(super) photo_path_input: String,
    #[serde(skip)]
    pub(super) show_path_entry: bool,
}

impl OptiBotApp {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        let mut app: OptiBotApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let keys = [PERSISTENCE.keys.language, PERSISTENCE.keys.timeframe];
        let store = match cc.storage {
            Some(storage) if !launch.reset_preferences => MemoryStore::preload(storage, &keys),
            _ => MemoryStore::new(),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_preference_io {
            log::info!(
                "Preferences restored (reset requested: {})",
                launch.reset_preferences
            );
        }

        app.controller = WidgetController::new(store, Default::default());
        if launch.reset_preferences {
            // Language is written by apply_language; the timeframe only on selection
            app.controller.persist_timeframe();
        }

        if let Some(photo) = launch.photo {
            app.controller.show_preview(photo);
        }

        platform::register_service_worker(WEB.service_worker_path);

        app
    }

    fn handle_widget_events(&mut self, ctx: &egui::Context, events: Vec<WidgetEvent>) {
        for event in events {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("UI event: {:?}", event);
            }

            match event {
                WidgetEvent::ToggleLanguage => self.controller.toggle_language(),
                WidgetEvent::SelectPair(value) => self.controller.select_pair(&value),
                WidgetEvent::OpenPhotoPicker => self.open_photo_picker(ctx),
                WidgetEvent::RemovePhoto => {
                    self.controller.remove_photo();
                    self.preview_texture = None;
                    self.photo_path_input.clear();
                }
                WidgetEvent::LoadPhotoPath(path) => self.load_photo_path(&path),
                WidgetEvent::Analyze => self.start_analysis(),
                WidgetEvent::SelectTimeframe(token) => self.controller.select_timeframe(token),
                WidgetEvent::Calculate => {
                    self.controller.calculate(&self.calc_input);
                }
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn open_photo_picker(&mut self, ctx: &egui::Context) {
        let inbox = &self.photo_inbox;
        let picker = platform::reuse_or_build(&mut self.photo_picker, || {
            platform::PhotoPicker::new(inbox.clone(), ctx.clone())
        });
        if let Some(picker) = picker {
            picker.open();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_photo_picker(&mut self, _ctx: &egui::Context) {
        self.show_path_entry = !self.show_path_entry;
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_photo_path(&mut self, path: &str) {
        match SelectedPhoto::read_from_path(std::path::Path::new(path)) {
            Ok(photo) => {
                self.controller.show_preview(photo);
                self.show_path_entry = false;
            }
            Err(e) => self
                .controller
                .report_photo_error(AppError::PhotoRead(format!("{:#}", e))),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn load_photo_path(&mut self, path: &str) {
        self.controller
            .report_photo_error(AppError::PhotoRead(path.to_string()));
    }

    /// Collects photos from the picker inbox and from files dropped on the window.
    /// Only the most recent one is shown.
    fn receive_photos(&mut self, ctx: &egui::Context) {
        let mut incoming = platform::take_photos(&self.photo_inbox);

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(bytes) = file.bytes {
                incoming.push(SelectedPhoto::new(file.name, bytes));
                continue;
            }
            #[cfg(not(target_arch = "wasm32"))]
            if let Some(path) = file.path {
                match SelectedPhoto::read_from_path(&path) {
                    Ok(photo) => incoming.push(photo),
                    Err(e) => self
                        .controller
                        .report_photo_error(AppError::PhotoRead(format!("{:#}", e))),
                }
            }
        }

        if let Some(photo) = incoming.pop() {
            self.controller.show_preview(photo);
        }
    }

    /// Decodes the photo behind the current preview URL into a texture, then
    /// releases the URL.
    fn load_preview_texture(&mut self, ctx: &egui::Context) {
        let Some(url) = self.controller.preview_source().cloned() else {
            self.preview_texture = None;
            return;
        };
        if self
            .preview_texture
            .as_ref()
            .is_some_and(|(loaded, _)| *loaded == url)
        {
            return;
        }
        let Some(photo) = self.controller.resolve_preview(&url) else {
            return;
        };

        match decode_preview(&photo.bytes) {
            Ok(image) => {
                let texture = ctx.load_texture(url.as_str(), image, egui::TextureOptions::LINEAR);
                self.preview_texture = Some((url.clone(), texture));
                self.controller.preview_loaded(&url);
            }
            Err(e) => {
                self.preview_texture = None;
                self.controller
                    .preview_failed(&url, AppError::PhotoDecode(format!("{:#}", e)));
            }
        }
    }

    fn flush_preferences(&mut self, storage: &mut dyn eframe::Storage) {
        let store = self.controller.store_mut();
        if store.has_pending() {
            store.flush_into(storage);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_preference_io {
                log::info!("Preferences flushed to storage");
            }
        }
    }
}

impl eframe::App for OptiBotApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop the in-flight analysis so its sender is gone before the runtime
        if let Some(promise) = self.analysis_promise.take() {
            drop(promise);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.flush_preferences(storage);
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_analysis(ctx);
        self.receive_photos(ctx);
        self.load_preview_texture(ctx);

        let mut events = self.render_top_panel(ctx);
        events.extend(self.render_central_panel(ctx));
        self.handle_widget_events(ctx, events);

        if let Some(storage) = frame.storage_mut() {
            self.flush_preferences(storage);
        }
    }
}
