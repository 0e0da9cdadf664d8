//! config/web.rs Browser build specific configuration.

pub struct WebConfig {
    /// Service worker script, relative to the page
    pub service_worker_path: &'static str,
    /// Canvas element eframe renders into
    pub canvas_id: &'static str,
    /// `accept` attribute of the photo file input
    pub photo_accept: &'static str,
}

pub const WEB: WebConfig = WebConfig {
    service_worker_path: "service-worker.js",
    canvas_id: "the_canvas_id",
    photo_accept: "image/*",
};
