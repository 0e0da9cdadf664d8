use eframe::egui::{CentralPanel, Context, Frame, Margin, ScrollArea, TopBottomPanel};

use crate::ui::config::UI_CONFIG;
use crate::ui::ui_panels::{
    AnalyzePanel, CalculatorPanel, HeaderPanel, PairPanel, Panel, PhotoPanel, TimeframePanel,
    WidgetEvent,
};
use crate::ui::utils::spaced_separator;

use super::app::OptiBotApp;

impl OptiBotApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) -> Vec<WidgetEvent> {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::symmetric(12, 8));
        TopBottomPanel::top("header")
            .frame(frame)
            .show(ctx, |ui| HeaderPanel::new(self.controller.view()).render(ui))
            .inner
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> Vec<WidgetEvent> {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        // Only hand the texture to the panel while it still matches the preview source
        let texture = self
            .preview_texture
            .as_ref()
            .filter(|(url, _)| Some(url) == self.controller.preview_source())
            .map(|(_, texture)| texture);
        let view = self.controller.view();
        let photo_error = self.controller.photo_error();
        let path_input = self.show_path_entry.then_some(&mut self.photo_path_input);
        let calc_input = &mut self.calc_input;

        CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                let mut events = Vec::new();
                ScrollArea::vertical()
                    .id_salt("widget_scroll")
                    .show(ui, |ui| {
                        ui.set_max_width(UI_CONFIG.content_max_width);

                        events.extend(PairPanel::new(view).render(ui));
                        spaced_separator(ui);

                        events.extend(PhotoPanel::new(view, texture, photo_error, path_input).render(ui));
                        spaced_separator(ui);

                        events.extend(TimeframePanel::new(view).render(ui));
                        spaced_separator(ui);

                        events.extend(AnalyzePanel::new(view).render(ui));
                        spaced_separator(ui);

                        events.extend(CalculatorPanel::new(view, calc_input).render(ui));
                    });
                events
            })
            .inner
    }
}
