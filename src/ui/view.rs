//! The view interface the controller writes to.
//!
//! `ViewModel` is a retained copy of everything on screen. egui renders from it
//! every frame and tests inspect it directly.

use eframe::egui::Color32;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::data::PreviewUrl;
use crate::domain::PairCatalog;

/// Addressable elements of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ElementId {
    Title,
    PairLabel,
    PhotoLabel,
    CameraText,
    AnalyzeButton,
    Loading,
    LoadingText,
    Result,
    LangToggle,
    Preview,
    DropHint,
    RemovePhotoButton,
    PhotoPathHint,
    TimeframeLabel,
    CalcLabel,
    CalcButton,
    CalcResult,
}

pub trait View {
    fn set_text(&mut self, id: ElementId, text: &str);
    fn set_visible(&mut self, id: ElementId, visible: bool);
    fn set_enabled(&mut self, id: ElementId, enabled: bool);
    /// `None` restores the default text colour
    fn set_color(&mut self, id: ElementId, color: Option<Color32>);
    fn set_pair_options(&mut self, catalog: &PairCatalog, selected: &str);
    fn set_timeframes(&mut self, states: &[(&'static str, bool)]);
    fn set_preview_source(&mut self, src: Option<&PreviewUrl>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub text: String,
    pub visible: bool,
    pub enabled: bool,
    pub color: Option<Color32>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: true,
            enabled: true,
            color: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewModel {
    elements: HashMap<ElementId, ElementState>,
    pair_options: PairCatalog,
    selected_pair: String,
    timeframes: Vec<(&'static str, bool)>,
    preview_src: Option<PreviewUrl>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel {
    /// Everything visible and enabled, except the loading indicator and the
    /// photo preview which start hidden.
    pub fn new() -> Self {
        let mut elements: HashMap<ElementId, ElementState> = ElementId::iter()
            .map(|id| (id, ElementState::default()))
            .collect();
        for hidden in [ElementId::Loading, ElementId::Preview] {
            if let Some(state) = elements.get_mut(&hidden) {
                state.visible = false;
            }
        }
        Self {
            elements,
            pair_options: PairCatalog::default(),
            selected_pair: String::new(),
            timeframes: Vec::new(),
            preview_src: None,
        }
    }

    fn element_mut(&mut self, id: ElementId) -> &mut ElementState {
        self.elements.entry(id).or_default()
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.element(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.element(id).map(|e| e.visible).unwrap_or(false)
    }

    pub fn is_enabled(&self, id: ElementId) -> bool {
        self.element(id).map(|e| e.enabled).unwrap_or(false)
    }

    pub fn color(&self, id: ElementId) -> Option<Color32> {
        self.element(id).and_then(|e| e.color)
    }

    pub fn pair_options(&self) -> &PairCatalog {
        &self.pair_options
    }

    pub fn selected_pair(&self) -> &str {
        &self.selected_pair
    }

    pub fn timeframes(&self) -> &[(&'static str, bool)] {
        &self.timeframes
    }

    pub fn preview_source(&self) -> Option<&PreviewUrl> {
        self.preview_src.as_ref()
    }
}

impl View for ViewModel {
    fn set_text(&mut self, id: ElementId, text: &str) {
        self.element_mut(id).text = text.to_string();
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        self.element_mut(id).visible = visible;
    }

    fn set_enabled(&mut self, id: ElementId, enabled: bool) {
        self.element_mut(id).enabled = enabled;
    }

    fn set_color(&mut self, id: ElementId, color: Option<Color32>) {
        self.element_mut(id).color = color;
    }

    fn set_pair_options(&mut self, catalog: &PairCatalog, selected: &str) {
        self.pair_options = catalog.clone();
        self.selected_pair = selected.to_string();
    }

    fn set_timeframes(&mut self, states: &[(&'static str, bool)]) {
        self.timeframes = states.to_vec();
    }

    fn set_preview_source(&mut self, src: Option<&PreviewUrl>) {
        self.preview_src = src.cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_and_preview_start_hidden() {
        let view = ViewModel::new();
        assert!(!view.is_visible(ElementId::Loading));
        assert!(!view.is_visible(ElementId::Preview));
        assert!(view.is_visible(ElementId::Result));
        assert!(view.is_enabled(ElementId::AnalyzeButton));
        assert_eq!(view.text(ElementId::Title), "");
    }

    #[test]
    fn writes_are_reflected() {
        let mut view = ViewModel::new();
        view.set_text(ElementId::Result, "EUR/USD: BUY ↑ (0.10)");
        view.set_color(ElementId::Result, Some(Color32::RED));
        view.set_enabled(ElementId::AnalyzeButton, false);
        assert_eq!(view.text(ElementId::Result), "EUR/USD: BUY ↑ (0.10)");
        assert_eq!(view.color(ElementId::Result), Some(Color32::RED));
        assert!(!view.is_enabled(ElementId::AnalyzeButton));
    }
}
