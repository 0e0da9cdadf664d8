use eframe::egui::load::SizedTexture;
use eframe::egui::{
    Button, ComboBox, Frame, Image, Key, RichText, Sense, Spinner, TextEdit, TextureHandle, Ui,
    UiBuilder,
};

use crate::domain::AppError;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::ui::view::{ElementId, ViewModel};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Everything the user can do to the widget in one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    ToggleLanguage,
    SelectPair(String),
    OpenPhotoPicker,
    RemovePhoto,
    LoadPhotoPath(String),
    Analyze,
    SelectTimeframe(&'static str),
    Calculate,
}

/// Removing the photo must not also reopen the picker from the surrounding drop zone.
pub fn resolve_photo_events(mut events: Vec<WidgetEvent>) -> Vec<WidgetEvent> {
    if events.contains(&WidgetEvent::RemovePhoto) {
        events.retain(|e| *e != WidgetEvent::OpenPhotoPicker);
    }
    events
}

/// Title bar with the language toggle
pub struct HeaderPanel<'a> {
    view: &'a ViewModel,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }
}

impl<'a> Panel for HeaderPanel<'a> {
    type Event = WidgetEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.label_header(self.view.text(ElementId::Title));
            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| {
                    if ui.button(self.view.text(ElementId::LangToggle)).clicked() {
                        events.push(WidgetEvent::ToggleLanguage);
                    }
                },
            );
        });
        events
    }
}

/// Pair selector. Option groups are shown as captions inside the popup.
pub struct PairPanel<'a> {
    view: &'a ViewModel,
}

impl<'a> PairPanel<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }
}

impl<'a> Panel for PairPanel<'a> {
    type Event = WidgetEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let catalog = self.view.pair_options();
        let selected = self.view.selected_pair();

        ui.label_subheader(self.view.text(ElementId::PairLabel));
        ComboBox::from_id_salt("pair_selector")
            .selected_text(selected)
            .width(UI_CONFIG.content_max_width)
            .height(320.0)
            .show_ui(ui, |ui| {
                let photo = catalog.photo_option.as_str();
                if ui.selectable_label(selected == photo, photo).clicked() {
                    events.push(WidgetEvent::SelectPair(photo.to_string()));
                }
                for group in &catalog.groups {
                    ui.add_space(4.0);
                    ui.label(RichText::new(group.label).small().strong());
                    for pair in &group.pairs {
                        if ui.selectable_label(selected == *pair, *pair).clicked() {
                            events.push(WidgetEvent::SelectPair(pair.to_string()));
                        }
                    }
                }
            });
        events
    }
}

/// What the preview area shows next to the remove button
#[derive(Debug, PartialEq)]
pub enum PreviewSlot<'a, T> {
    Image(&'a T),
    Decoding,
    /// Decoding failed; the error is shown below the drop zone instead
    Empty,
}

pub fn preview_slot<'a, T>(
    texture: Option<&'a T>,
    error: Option<&AppError>,
) -> PreviewSlot<'a, T> {
    match (texture, error) {
        (Some(texture), _) => PreviewSlot::Image(texture),
        (None, Some(_)) => PreviewSlot::Empty,
        (None, None) => PreviewSlot::Decoding,
    }
}

/// Photo drop zone, preview and the camera / remove buttons
pub struct PhotoPanel<'a> {
    view: &'a ViewModel,
    texture: Option<&'a TextureHandle>,
    error: Option<&'a AppError>,
    /// Native builds type a path instead of using a browser file picker
    path_input: Option<&'a mut String>,
}

impl<'a> PhotoPanel<'a> {
    pub fn new(
        view: &'a ViewModel,
        texture: Option<&'a TextureHandle>,
        error: Option<&'a AppError>,
        path_input: Option<&'a mut String>,
    ) -> Self {
        Self {
            view,
            texture,
            error,
            path_input,
        }
    }

    fn render_drop_zone(&self, ui: &mut Ui, events: &mut Vec<WidgetEvent>) {
        // The zone senses clicks before its children, so the remove button on top wins.
        let zone = ui.scope_builder(UiBuilder::new().sense(Sense::click()), |ui| {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(UI_CONFIG.content_max_width);
                if self.view.is_visible(ElementId::Preview) {
                    ui.horizontal(|ui| {
                        match preview_slot(self.texture, self.error) {
                            PreviewSlot::Image(texture) => {
                                ui.add(
                                    Image::new(SizedTexture::from_handle(texture))
                                        .max_height(UI_CONFIG.preview_max_height)
                                        .maintain_aspect_ratio(true),
                                );
                            }
                            PreviewSlot::Decoding => {
                                ui.add(Spinner::new());
                            }
                            PreviewSlot::Empty => {}
                        }
                        if ui
                            .small_button(self.view.text(ElementId::RemovePhotoButton))
                            .clicked()
                        {
                            events.push(WidgetEvent::RemovePhoto);
                        }
                    });
                } else {
                    ui.label_subdued(self.view.text(ElementId::DropHint));
                }
            });
        });

        if zone.response.clicked() {
            events.push(WidgetEvent::OpenPhotoPicker);
        }
    }
}

impl<'a> Panel for PhotoPanel<'a> {
    type Event = WidgetEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label_subheader(self.view.text(ElementId::PhotoLabel));
        self.render_drop_zone(ui, &mut events);

        ui.add_space(4.0);
        if ui.button(self.view.text(ElementId::CameraText)).clicked() {
            events.push(WidgetEvent::OpenPhotoPicker);
        }

        if let Some(path) = self.path_input.as_deref_mut() {
            let response = ui.add(
                TextEdit::singleline(path)
                    .hint_text(self.view.text(ElementId::PhotoPathHint))
                    .desired_width(UI_CONFIG.content_max_width),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                let trimmed = path.trim();
                if !trimmed.is_empty() {
                    events.push(WidgetEvent::LoadPhotoPath(trimmed.to_string()));
                }
            }
        }

        if let Some(error) = self.error {
            ui.label_error(error.to_string());
        }

        resolve_photo_events(events)
    }
}

/// Analyze trigger, loading indicator and the result line
pub struct AnalyzePanel<'a> {
    view: &'a ViewModel,
}

impl<'a> AnalyzePanel<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }
}

impl<'a> Panel for AnalyzePanel<'a> {
    type Event = WidgetEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        let button = Button::new(RichText::new(self.view.text(ElementId::AnalyzeButton)).strong())
            .min_size([UI_CONFIG.content_max_width, 32.0].into());
        if ui
            .add_enabled(self.view.is_enabled(ElementId::AnalyzeButton), button)
            .clicked()
        {
            events.push(WidgetEvent::Analyze);
        }

        if self.view.is_visible(ElementId::Loading) {
            ui.horizontal(|ui| {
                ui.add(Spinner::new());
                ui.label_subdued(self.view.text(ElementId::LoadingText));
            });
        }

        ui.add_space(6.0);
        ui.label_tinted(
            self.view.text(ElementId::Result),
            self.view.color(ElementId::Result),
        );
        events
    }
}

/// One toggle button per timeframe token
pub struct TimeframePanel<'a> {
    view: &'a ViewModel,
}

impl<'a> TimeframePanel<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }
}

impl<'a> Panel for TimeframePanel<'a> {
    type Event = WidgetEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label_subheader(self.view.text(ElementId::TimeframeLabel));
        ui.horizontal_wrapped(|ui| {
            for (token, active) in self.view.timeframes() {
                if ui.selectable_label(*active, *token).clicked() {
                    events.push(WidgetEvent::SelectTimeframe(*token));
                }
            }
        });
        events
    }
}

pub struct CalculatorPanel<'a> {
    view: &'a ViewModel,
    input: &'a mut String,
}

impl<'a> CalculatorPanel<'a> {
    pub fn new(view: &'a ViewModel, input: &'a mut String) -> Self {
        Self { view, input }
    }
}

impl<'a> Panel for CalculatorPanel<'a> {
    type Event = WidgetEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label_subheader(self.view.text(ElementId::CalcLabel));
        ui.horizontal(|ui| {
            let response = ui.add(TextEdit::singleline(&mut *self.input).desired_width(140.0));
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if ui.button(self.view.text(ElementId::CalcButton)).clicked() || submitted {
                events.push(WidgetEvent::Calculate);
            }
        });

        let result = self.view.text(ElementId::CalcResult);
        if !result.is_empty() {
            ui.label_tinted(result, self.view.color(ElementId::CalcResult));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_suppresses_picker_reopen() {
        let events = resolve_photo_events(vec![
            WidgetEvent::RemovePhoto,
            WidgetEvent::OpenPhotoPicker,
        ]);
        assert_eq!(events, vec![WidgetEvent::RemovePhoto]);
    }

    #[test]
    fn failed_decode_stops_the_spinner() {
        let error = AppError::PhotoDecode("bad".to_string());
        assert_eq!(preview_slot::<u8>(None, Some(&error)), PreviewSlot::Empty);
        assert_eq!(preview_slot::<u8>(None, None), PreviewSlot::Decoding);
        assert_eq!(preview_slot(Some(&7u8), None), PreviewSlot::Image(&7u8));
    }

    #[test]
    fn picker_opens_when_nothing_is_removed() {
        let events = resolve_photo_events(vec![WidgetEvent::OpenPhotoPicker]);
        assert_eq!(events, vec![WidgetEvent::OpenPhotoPicker]);
    }
}
