use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

use crate::analysis::{EntropySource, run_analysis};
use crate::config::ANALYSIS;
use crate::platform;
use crate::ui::app::OptiBotApp;

impl OptiBotApp {
    /// Starts the simulated analysis unless one is already in flight.
    pub(super) fn start_analysis(&mut self) {
        if self.analysis_promise.is_some() || !self.controller.begin_analysis() {
            return;
        }

        let wait = platform::sleep(Duration::from_millis(ANALYSIS.delay_ms));
        let work = run_analysis(wait, EntropySource::new());

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_async(work);

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::spawn_local(work);

        self.analysis_promise = Some(promise);
    }

    pub(super) fn poll_analysis(&mut self, ctx: &egui::Context) {
        let signal = self
            .analysis_promise
            .as_ref()
            .and_then(|promise| promise.ready().copied());

        if let Some(signal) = signal {
            self.analysis_promise = None;
            self.controller.complete_analysis(signal);
        } else if self.analysis_promise.is_some() {
            ctx.request_repaint();
        }
    }
}
