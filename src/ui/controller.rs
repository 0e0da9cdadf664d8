//! The widget controller: all behaviour of the page, independent of egui.
//!
//! State lives in this struct; every visible effect goes through the `View`
//! and every persisted preference through the `PreferenceStore`.

use crate::analysis::{AnalysisResult, CalcOutcome, Direction, Signal, calculate};
use crate::config::{ANALYSIS, PERSISTENCE};
use crate::data::{MemoryStore, PreferenceStore, PreviewUrl, PreviewUrls, SelectedPhoto};
use crate::domain::{AppError, Language, PairCatalog, TimeframeSelector};
use crate::ui::config::{UI_CONFIG, ui_text};
use crate::ui::view::{ElementId, View, ViewModel};
use crate::utils::app_time::{AppInstant, now};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Simulated analysis state. The trigger is disabled for the whole of `Analyzing`,
/// so at most one analysis is ever in flight. There is no cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisPhase {
    Idle,
    Analyzing { started_at: AppInstant },
}

pub struct WidgetController<S: PreferenceStore, V: View = ViewModel> {
    store: S,
    view: V,
    language: Language,
    timeframes: TimeframeSelector,
    catalog: PairCatalog,
    selected_pair: Option<String>,

    // Photo input and preview
    photo_input: Option<SelectedPhoto>,
    preview_src: Option<PreviewUrl>,
    preview_urls: PreviewUrls,
    photo_error: Option<AppError>,

    phase: AnalysisPhase,
    /// Set once the result area holds a real analysis result, so that
    /// re-applying the language does not overwrite it.
    result_is_custom: bool,
}

impl Default for WidgetController<MemoryStore, ViewModel> {
    fn default() -> Self {
        Self::new(MemoryStore::default(), ViewModel::new())
    }
}

impl<S: PreferenceStore, V: View> WidgetController<S, V> {
    /// Restores both preferences from `store` and renders the initial page.
    pub fn new(store: S, view: V) -> Self {
        let language = match store.get_string(PERSISTENCE.keys.language) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|e| {
                log::warn!("{}; falling back to {}", e, Language::default());
                Language::default()
            }),
            None => Language::default(),
        };
        let persisted_timeframe = store.get_string(PERSISTENCE.keys.timeframe);
        let timeframes = TimeframeSelector::restored(persisted_timeframe.as_deref());

        let mut controller = Self {
            store,
            view,
            language,
            timeframes,
            catalog: PairCatalog::default(),
            selected_pair: None,
            photo_input: None,
            preview_src: None,
            preview_urls: PreviewUrls::default(),
            photo_error: None,
            phase: AnalysisPhase::Idle,
            result_is_custom: false,
        };

        controller.populate_pairs();
        controller.apply_language();
        controller.refresh_timeframes();
        controller
    }

    // --- Accessors ---

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selected_timeframe(&self) -> &'static str {
        self.timeframes.selected()
    }

    pub fn selected_pair(&self) -> Option<&str> {
        self.selected_pair.as_deref()
    }

    pub fn photo_input(&self) -> Option<&SelectedPhoto> {
        self.photo_input.as_ref()
    }

    pub fn preview_source(&self) -> Option<&PreviewUrl> {
        self.preview_src.as_ref()
    }

    pub fn photo_error(&self) -> Option<&AppError> {
        self.photo_error.as_ref()
    }

    pub fn live_preview_urls(&self) -> usize {
        self.preview_urls.live_count()
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Analyzing { .. })
    }

    // --- Language ---

    /// Writes every label for the current language, persists it and rebuilds the pair list.
    pub fn apply_language(&mut self) {
        let text = ui_text(self.language);

        self.view.set_text(ElementId::Title, text.title);
        self.view.set_text(ElementId::PairLabel, text.select_pair);
        self.view.set_text(ElementId::PhotoLabel, text.upload_photo);
        self.view.set_text(ElementId::CameraText, text.take_photo);
        self.view.set_text(ElementId::DropHint, text.drop_hint);
        self.view
            .set_text(ElementId::RemovePhotoButton, text.remove_photo);
        self.view.set_text(ElementId::PhotoPathHint, text.photo_path_hint);
        self.view.set_text(ElementId::AnalyzeButton, text.analyze);
        self.view.set_text(ElementId::LoadingText, text.analyzing);
        self.view.set_text(ElementId::TimeframeLabel, text.timeframe);
        self.view.set_text(ElementId::CalcLabel, text.calculator);
        self.view.set_text(ElementId::CalcButton, text.calculate);

        if !self.result_is_custom {
            self.view.set_text(ElementId::Result, text.result);
        }

        self.view
            .set_text(ElementId::LangToggle, &self.language.badge());

        self.store
            .set_string(PERSISTENCE.keys.language, self.language.code());
        self.populate_pairs();
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Language switched to {}", self.language);
        }

        self.apply_language();
    }

    // --- Pairs ---

    /// Rebuilds the pair options. Like a freshly rebuilt select control, the
    /// selection always resets to the first option (the localised photo entry).
    pub fn populate_pairs(&mut self) {
        self.catalog = PairCatalog::build(ui_text(self.language).photo_analysis);

        let first = self.catalog.first_value();
        self.view.set_pair_options(&self.catalog, first);
        self.selected_pair = Some(first.to_string());
    }

    pub fn select_pair(&mut self, value: &str) {
        if !self.catalog.contains(value) {
            log::warn!("Ignoring unknown pair option: {}", value);
            return;
        }
        if self.selected_pair.as_deref() == Some(value) {
            return;
        }

        self.selected_pair = Some(value.to_string());
        self.view.set_pair_options(&self.catalog, value);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("A new pair was selected: {}", value);
        }
    }

    // --- Photo ---

    /// Makes `photo` the file input's value and shows it in the preview.
    /// Any preview URL that is still live is released first.
    pub fn show_preview(&mut self, photo: SelectedPhoto) {
        if let Some(previous) = self.preview_src.take() {
            self.release_preview_url(&previous);
        }

        let url = self.preview_urls.create(&photo);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_photo_lifecycle {
            log::info!("[photo] created {} ({} bytes)", url, photo.bytes.len());
        }

        self.photo_input = Some(photo);
        self.photo_error = None;
        self.view.set_preview_source(Some(&url));
        self.view.set_visible(ElementId::Preview, true);
        self.preview_src = Some(url);
    }

    /// Bytes behind a live preview URL, for the renderer to decode
    pub fn resolve_preview(&self, url: &PreviewUrl) -> Option<&SelectedPhoto> {
        self.preview_urls.resolve(url)
    }

    /// The preview image finished loading: its URL is no longer needed.
    pub fn preview_loaded(&mut self, url: &PreviewUrl) {
        self.release_preview_url(url);
    }

    pub fn preview_failed(&mut self, url: &PreviewUrl, error: AppError) {
        self.release_preview_url(url);
        self.report_photo_error(error);
    }

    /// Shown under the photo area until the next photo or removal.
    pub fn report_photo_error(&mut self, error: AppError) {
        log::warn!("{}", error);
        self.photo_error = Some(error);
    }

    /// Clears the file input and hides the preview.
    pub fn remove_photo(&mut self) {
        self.photo_input = None;
        if let Some(url) = self.preview_src.take() {
            self.release_preview_url(&url);
        }
        self.photo_error = None;
        self.view.set_preview_source(None);
        self.view.set_visible(ElementId::Preview, false);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Photo removed");
        }
    }

    fn release_preview_url(&mut self, url: &PreviewUrl) {
        let _released = self.preview_urls.revoke(url);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_photo_lifecycle && _released {
            log::info!("[photo] revoked {}", url);
        }
    }

    // --- Analysis ---

    /// Idle -> Analyzing. Returns false (and does nothing) if an analysis is already running.
    pub fn begin_analysis(&mut self) -> bool {
        if self.is_analyzing() {
            return false;
        }

        self.phase = AnalysisPhase::Analyzing { started_at: now() };
        self.view.set_visible(ElementId::Loading, true);
        self.view.set_text(ElementId::Result, "");
        self.result_is_custom = false;
        self.view.set_enabled(ElementId::AnalyzeButton, false);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_analysis_events {
            log::info!("[analysis] started");
        }
        true
    }

    /// Analyzing -> Idle, rendering the result for the pair selected right now.
    /// A completion that arrives while idle is ignored.
    pub fn complete_analysis(&mut self, signal: Signal) -> Option<AnalysisResult> {
        let AnalysisPhase::Analyzing { started_at: _started_at } = self.phase else {
            log::warn!("Ignoring analysis completion while idle");
            return None;
        };

        let pair = self
            .selected_pair
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ANALYSIS.fallback_pair.to_string());
        let result = AnalysisResult { pair, signal };

        let color = match signal.direction {
            Direction::Buy => UI_CONFIG.colors.signal_buy,
            Direction::Sell => UI_CONFIG.colors.signal_sell,
        };
        self.view.set_color(ElementId::Result, Some(color));
        self.view.set_text(ElementId::Result, &result.to_string());
        self.result_is_custom = true;

        self.view.set_visible(ElementId::Loading, false);
        self.view.set_enabled(ElementId::AnalyzeButton, true);
        self.phase = AnalysisPhase::Idle;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_analysis_events {
            log::info!(
                "[analysis] {} after {:.2}s",
                result,
                _started_at.elapsed().as_secs_f32()
            );
        }

        Some(result)
    }

    // --- Timeframe ---

    pub fn select_timeframe(&mut self, token: &str) {
        if let Err(e) = self.timeframes.select(token) {
            log::warn!("{}", e);
            return;
        }
        self.persist_timeframe();
        self.refresh_timeframes();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Timeframe set to {}", token);
        }
    }

    pub fn persist_timeframe(&mut self) {
        self.store.set_string(
            PERSISTENCE.keys.timeframe,
            self.timeframes.selected().to_string(),
        );
    }

    fn refresh_timeframes(&mut self) {
        let states: Vec<_> = self.timeframes.active_states().collect();
        self.view.set_timeframes(&states);
    }

    // --- Calculator ---

    pub fn calculate(&mut self, input: &str) -> CalcOutcome {
        let outcome = calculate(input);
        let color = if outcome.is_ok() {
            UI_CONFIG.colors.calc_ok
        } else {
            UI_CONFIG.colors.calc_error
        };
        self.view
            .set_text(ElementId::CalcResult, &outcome.display_text());
        self.view.set_color(ElementId::CalcResult, Some(color));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::signal::tests::FixedSource;
    use crate::analysis::run_analysis;
    use crate::ui::ui_text::{UI_TEXT_EN, UI_TEXT_RU};
    use futures::executor::block_on;
    use std::future::ready;
    use strum::IntoEnumIterator;

    type TestController = WidgetController<MemoryStore, ViewModel>;

    fn controller() -> TestController {
        TestController::default()
    }

    fn controller_with(prefs: &[(&str, &str)]) -> TestController {
        let mut store = MemoryStore::new();
        for (k, v) in prefs {
            store.set_string(k, v.to_string());
        }
        WidgetController::new(store, ViewModel::new())
    }

    fn photo(name: &str) -> SelectedPhoto {
        SelectedPhoto::new(name, vec![0u8; 4])
    }

    #[test]
    fn apply_language_writes_every_label_and_persists() {
        for lang in Language::iter() {
            let store = {
                let mut s = MemoryStore::new();
                s.set_string("lang", lang.code());
                s
            };
            let c = WidgetController::new(store, ViewModel::new());
            let text = ui_text(lang);
            let view = c.view();

            for id in ElementId::iter() {
                let expected = match id {
                    ElementId::Title => text.title.to_string(),
                    ElementId::PairLabel => text.select_pair.to_string(),
                    ElementId::PhotoLabel => text.upload_photo.to_string(),
                    ElementId::CameraText => text.take_photo.to_string(),
                    ElementId::AnalyzeButton => text.analyze.to_string(),
                    ElementId::LoadingText => text.analyzing.to_string(),
                    ElementId::Result => text.result.to_string(),
                    ElementId::LangToggle => lang.badge(),
                    ElementId::DropHint => text.drop_hint.to_string(),
                    ElementId::RemovePhotoButton => text.remove_photo.to_string(),
                    ElementId::PhotoPathHint => text.photo_path_hint.to_string(),
                    ElementId::TimeframeLabel => text.timeframe.to_string(),
                    ElementId::CalcLabel => text.calculator.to_string(),
                    ElementId::CalcButton => text.calculate.to_string(),
                    // Containers and output lines carry no label
                    ElementId::Loading | ElementId::Preview | ElementId::CalcResult => {
                        String::new()
                    }
                };
                assert_eq!(view.text(id), expected, "{:?} in {}", id, lang);
            }
            assert_eq!(c.store().get_string("lang"), Some(lang.code()));
        }
    }

    #[test]
    fn defaults_without_stored_preferences() {
        let c = controller();
        assert_eq!(c.language(), Language::En);
        assert_eq!(c.selected_timeframe(), "1m");
        assert_eq!(c.store().get_string("lang").as_deref(), Some("en"));
        assert_eq!(c.view().text(ElementId::LangToggle), "EN");
    }

    #[test]
    fn unknown_stored_language_falls_back_to_english() {
        let c = controller_with(&[("lang", "fr")]);
        assert_eq!(c.language(), Language::En);
        assert_eq!(c.view().text(ElementId::Title), UI_TEXT_EN.title);
    }

    #[test]
    fn toggle_language_flips_and_reapplies() {
        let mut c = controller();
        c.toggle_language();
        assert_eq!(c.language(), Language::Ru);
        assert_eq!(c.view().text(ElementId::PairLabel), UI_TEXT_RU.select_pair);
        assert_eq!(c.view().text(ElementId::LangToggle), "RU");
        assert_eq!(c.store().get_string("lang").as_deref(), Some("ru"));

        c.toggle_language();
        assert_eq!(c.language(), Language::En);
        assert_eq!(c.view().text(ElementId::Result), UI_TEXT_EN.result);
    }

    #[test]
    fn pair_list_has_fifty_three_options_and_localized_first_entry() {
        let mut c = controller();
        assert_eq!(c.view().pair_options().option_count(), 53);
        assert_eq!(c.view().pair_options().first_value(), "Photo analysis");
        assert_eq!(c.selected_pair(), Some("Photo analysis"));

        c.toggle_language();
        assert_eq!(c.view().pair_options().option_count(), 53);
        assert_eq!(c.view().pair_options().first_value(), "Анализ по фото");
        assert_eq!(c.view().selected_pair(), "Анализ по фото");
    }

    #[test]
    fn language_change_resets_pair_to_photo_option() {
        let mut c = controller();
        c.select_pair("GBP/JPY OTC");
        c.toggle_language();
        assert_eq!(c.selected_pair(), Some("Анализ по фото"));
        assert_eq!(c.view().selected_pair(), "Анализ по фото");

        c.begin_analysis();
        let result = c.complete_analysis(Signal::from_unit(0.9)).unwrap();
        assert_eq!(result.to_string(), "Анализ по фото: BUY ↑ (0.80)");
    }

    #[test]
    fn unknown_pair_selection_is_ignored() {
        let mut c = controller();
        c.select_pair("GBP/JPY OTC");
        c.select_pair("XXX/YYY");
        assert_eq!(c.selected_pair(), Some("GBP/JPY OTC"));
    }

    #[test]
    fn analysis_disables_trigger_until_complete() {
        let mut c = controller();
        c.select_pair("EUR/JPY");

        assert!(c.begin_analysis());
        assert!(c.is_analyzing());
        assert!(!c.view().is_enabled(ElementId::AnalyzeButton));
        assert!(c.view().is_visible(ElementId::Loading));
        assert_eq!(c.view().text(ElementId::Result), "");

        // A second click while analysing is refused
        assert!(!c.begin_analysis());

        let signal = block_on(run_analysis(ready(()), FixedSource::new(&[0.9])));
        let result = c.complete_analysis(signal).unwrap();

        assert_eq!(result.pair, "EUR/JPY");
        assert_eq!(result.signal.direction, Direction::Buy);
        assert_eq!(c.phase(), AnalysisPhase::Idle);
        assert!(c.view().is_enabled(ElementId::AnalyzeButton));
        assert!(!c.view().is_visible(ElementId::Loading));
        assert_eq!(c.view().text(ElementId::Result), "EUR/JPY: BUY ↑ (0.80)");
        assert_eq!(
            c.view().color(ElementId::Result),
            Some(UI_CONFIG.colors.signal_buy)
        );
    }

    #[test]
    fn sell_result_uses_sell_colour() {
        let mut c = controller();
        c.select_pair("USD/CAD");
        c.begin_analysis();
        c.complete_analysis(Signal::from_unit(0.25));
        assert_eq!(c.view().text(ElementId::Result), "USD/CAD: SELL ↓ (-0.50)");
        assert_eq!(
            c.view().color(ElementId::Result),
            Some(UI_CONFIG.colors.signal_sell)
        );
    }

    #[test]
    fn completion_while_idle_is_ignored() {
        let mut c = controller();
        assert!(c.complete_analysis(Signal::from_unit(0.9)).is_none());
        assert_eq!(c.view().text(ElementId::Result), UI_TEXT_EN.result);
    }

    #[test]
    fn score_and_direction_hold_for_many_draws() {
        let mut c = controller();
        let units: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        for unit in units {
            c.begin_analysis();
            let result = c.complete_analysis(Signal::from_unit(unit)).unwrap();
            assert!((-1.0..=1.0).contains(&result.signal.score));
            assert_eq!(
                result.signal.direction == Direction::Buy,
                result.signal.score > 0.0
            );
            assert!(c.view().is_enabled(ElementId::AnalyzeButton));
        }
    }

    #[test]
    fn custom_result_survives_language_toggle() {
        let mut c = controller();
        c.begin_analysis();
        c.complete_analysis(Signal::from_unit(0.9));
        let shown = c.view().text(ElementId::Result).to_string();

        c.toggle_language();
        assert_eq!(c.view().text(ElementId::Result), shown);
    }

    #[test]
    fn language_toggle_during_analysis_restores_placeholder() {
        let mut c = controller();
        c.begin_analysis();
        c.toggle_language();
        assert_eq!(c.view().text(ElementId::Result), UI_TEXT_RU.result);
    }

    #[test]
    fn falls_back_to_default_pair_when_nothing_selected() {
        let mut c = controller();
        c.selected_pair = None;
        c.begin_analysis();
        let result = c.complete_analysis(Signal::from_unit(0.9)).unwrap();
        assert_eq!(result.pair, "EUR/USD");
    }

    #[test]
    fn timeframe_selection_is_exclusive_and_persisted() {
        let mut c = controller();
        c.select_timeframe("15m");

        let active: Vec<_> = c
            .view()
            .timeframes()
            .iter()
            .filter(|(_, a)| *a)
            .map(|(t, _)| *t)
            .collect();
        assert_eq!(active, vec!["15m"]);
        assert_eq!(c.store().get_string("timeframe").as_deref(), Some("15m"));

        c.select_timeframe("nope");
        assert_eq!(c.selected_timeframe(), "15m");
    }

    #[test]
    fn persisted_timeframe_is_restored_on_reload() {
        let mut first = controller();
        first.select_timeframe("30s");
        let store = first.store().clone();

        let reloaded = WidgetController::new(store, ViewModel::new());
        assert_eq!(reloaded.selected_timeframe(), "30s");
        let active = reloaded.view().timeframes().iter().filter(|(_, a)| *a).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn select_then_remove_photo_hides_preview_and_clears_input() {
        let mut c = controller();
        c.show_preview(photo("chart.png"));
        assert!(c.view().is_visible(ElementId::Preview));
        assert!(c.photo_input().is_some());
        assert!(c.view().preview_source().is_some());

        c.remove_photo();
        assert!(!c.view().is_visible(ElementId::Preview));
        assert!(c.photo_input().is_none());
        assert!(c.view().preview_source().is_none());
        assert_eq!(c.live_preview_urls(), 0);
    }

    #[test]
    fn preview_url_released_on_load_and_on_replacement() {
        let mut c = controller();
        c.show_preview(photo("a.png"));
        let first = c.preview_source().cloned().unwrap();
        assert_eq!(c.live_preview_urls(), 1);

        // Replaced before it ever loaded
        c.show_preview(photo("b.png"));
        let second = c.preview_source().cloned().unwrap();
        assert_ne!(first, second);
        assert_eq!(c.live_preview_urls(), 1);
        assert!(c.resolve_preview(&first).is_none());

        c.preview_loaded(&second);
        assert_eq!(c.live_preview_urls(), 0);
        // The image stays on screen after its URL is released
        assert_eq!(c.view().preview_source(), Some(&second));
        assert!(c.view().is_visible(ElementId::Preview));
    }

    #[test]
    fn failed_preview_releases_url_and_records_error() {
        let mut c = controller();
        c.show_preview(photo("broken.png"));
        let url = c.preview_source().cloned().unwrap();
        c.preview_failed(&url, AppError::PhotoDecode("bad".to_string()));
        assert_eq!(c.live_preview_urls(), 0);
        assert!(matches!(c.photo_error(), Some(AppError::PhotoDecode(_))));

        c.remove_photo();
        assert!(c.photo_error().is_none());
    }

    #[test]
    fn calculator_renders_result_and_error() {
        let mut c = controller();
        c.calculate("22");
        assert_eq!(c.view().text(ElementId::CalcResult), "= 2.0000");
        assert_eq!(
            c.view().color(ElementId::CalcResult),
            Some(UI_CONFIG.colors.calc_ok)
        );

        let outcome = c.calculate("abc");
        assert!(!outcome.is_ok());
        assert_eq!(c.view().text(ElementId::CalcResult), "Введите число");
        assert_eq!(
            c.view().color(ElementId::CalcResult),
            Some(UI_CONFIG.colors.calc_error)
        );
    }

    #[test]
    fn calculator_error_is_not_language_switched() {
        let mut c = controller();
        assert_eq!(c.language(), Language::En);
        c.calculate("?");
        assert_eq!(c.view().text(ElementId::CalcResult), "Введите число");
    }
}
