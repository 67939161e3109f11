//! egui renderer for the application UI.

use std::time::Duration;

use eframe::egui::{self, RichText, TextureHandle, TextureOptions};

use crate::config::AppConfig;
use crate::egui_app::anim;
use crate::egui_app::controller::Controller;

mod drop_zone;
mod notices;
mod result_panel;
pub(crate) mod style;

/// Smallest usable window size.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(460.0, 640.0);

/// Renders the egui UI using the shared controller state.
pub struct BreedLensApp {
    controller: Controller,
    visuals_set: bool,
    preview_tex: Option<TextureHandle>,
}

impl BreedLensApp {
    pub fn new(settings: AppConfig) -> Self {
        Self {
            controller: Controller::new(settings),
            visuals_set: false,
            preview_tex: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Upload the most recent decoded preview as a texture.
    fn upload_pending_preview(&mut self, ctx: &egui::Context) {
        if let Some(pending) = self.controller.take_preview_image() {
            self.preview_tex = Some(ctx.load_texture(
                "candidate_preview",
                pending.image,
                TextureOptions::LINEAR,
            ));
        }
        if self.controller.ui.preview.is_none() {
            self.preview_tex = None;
        }
    }

    /// Forward window-level drag/drop events to the intake pipeline.
    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        self.controller.set_drop_target_active(hovering);

        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        // Exactly one candidate is live at a time; the first dropped path wins.
        if let Some(path) = dropped_files.into_iter().find_map(|file| file.path) {
            self.controller.handle_dropped_path(path);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::default().fill(palette.bg_secondary))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("BreedLens")
                            .strong()
                            .size(18.0)
                            .color(palette.text_primary),
                    );
                    ui.label(
                        RichText::new("dog breed classification")
                            .size(12.0)
                            .color(palette.text_muted),
                    );
                });
            });
    }

    fn render_loading(&mut self, ui: &mut egui::Ui) {
        let Some(loading) = self.controller.ui.loading else {
            return;
        };
        let palette = style::palette();
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.label(
                RichText::new(anim::loading_text(loading.started_at.elapsed()))
                    .color(palette.text_muted),
            );
        });
    }

    /// Whether any time-driven visual still needs frames.
    fn animating(&self) -> bool {
        let ui = &self.controller.ui;
        if ui.loading.is_some() || ui.notices.any_visible() {
            return true;
        }
        if let Some(result) = &ui.result {
            if anim::result_animating(result.revealed_at.elapsed()) {
                return true;
            }
        }
        if let Some(preview) = &ui.preview {
            if preview.shown_at.elapsed() < anim::PREVIEW_FADE {
                return true;
            }
        }
        false
    }
}

impl eframe::App for BreedLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.tick();
        self.apply_visuals(ctx);
        self.upload_pending_preview(ctx);
        self.handle_file_drops(ctx);

        self.render_top_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                drop_zone::render(self, ui);
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui
                        .button(RichText::new("Classify").size(16.0))
                        .clicked()
                    {
                        self.controller.submit();
                    }
                });
                self.render_loading(ui);
                result_panel::render(self, ui);
                ui.add_space(24.0);
            });
        });
        notices::render(self, ctx);

        if self.animating() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
