use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::{PhotoInbox, push_photo};
use crate::config::WEB;
use crate::data::SelectedPhoto;

/// Fire-and-forget registration. Failures are ignored.
pub fn register_service_worker(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        return;
    }

    let registration = navigator.service_worker().register(path);
    spawn_local(async move {
        let _ = JsFuture::from(registration).await;
    });
}

/// `setTimeout` wrapped in a promise, so waiting yields to the browser event loop
pub async fn sleep(duration: Duration) {
    let ms = duration.as_millis().min(i32::MAX as u128) as i32;
    let timer = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(timer).await;
}

/// Hidden `<input type=file>` (camera on mobile) created once and reused for
/// every open. Picked files are read asynchronously, pushed into the inbox and
/// followed by a repaint request.
pub struct PhotoPicker {
    input: web_sys::HtmlInputElement,
    _on_change: Closure<dyn FnMut(web_sys::Event)>,
}

impl PhotoPicker {
    pub fn new(inbox: PhotoInbox, ctx: eframe::egui::Context) -> Option<Self> {
        let document = web_sys::window().and_then(|w| w.document())?;
        let input = match document
            .create_element("input")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            Some(input) => input,
            None => {
                log::error!("Could not create file input element");
                return None;
            }
        };

        input.set_type("file");
        input.set_accept(WEB.photo_accept);
        let _ = input.set_attribute("capture", "environment");

        let picked = input.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let Some(file) = picked.files().and_then(|files| files.get(0)) else {
                return;
            };
            let name = file.name();
            let inbox = inbox.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                match JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        push_photo(&inbox, SelectedPhoto::new(name, bytes));
                        ctx.request_repaint();
                    }
                    Err(e) => log::warn!("Failed to read picked photo: {:?}", e),
                }
            });
        });
        input.set_onchange(Some(on_change.as_ref().unchecked_ref()));

        Some(Self {
            input,
            _on_change: on_change,
        })
    }

    /// Clears the previous value so picking the same file again still fires `change`.
    pub fn open(&self) {
        self.input.set_value("");
        self.input.click();
    }
}

impl Drop for PhotoPicker {
    fn drop(&mut self) {
        // Detach before the closure is freed
        self.input.set_onchange(None);
    }
}
