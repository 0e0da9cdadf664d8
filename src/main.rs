#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use optibotx::{LaunchOptions, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use optibotx::config::WEB;

    // A. Init Logging
    console_error_panic_hook::set_once();
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!("AI OptiBotX starting in WASM mode...");

    // B. Find the canvas element by ID
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document on the global window")?;
    let canvas = document
        .get_element_by_id(WEB.canvas_id)
        .ok_or_else(|| format!("Failed to find canvas with id '{}'", WEB.canvas_id))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("{} was not a valid HtmlCanvasElement", WEB.canvas_id))?;

    // C. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(run_app(cc, LaunchOptions::default()))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use optibotx::Cli;
    use optibotx::config::PERSISTENCE;
    use optibotx::data::SelectedPhoto;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for the analysis promise
    let rt = Runtime::new().map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;
    let _guard = rt.enter();

    let photo = args.photo.as_deref().and_then(|path| {
        SelectedPhoto::read_from_path(path)
            .map_err(|e| log::warn!("Ignoring --photo: {:#}", e))
            .ok()
    });
    let launch = LaunchOptions {
        photo,
        reset_preferences: args.reset_preferences,
    };

    // D. Run the App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([460.0, 720.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI OptiBotX",
        options,
        Box::new(|cc| Ok(run_app(cc, launch))),
    )
}
