//! Staged rendering of a classification result: breed label, not-a-dog
//! branch, and the animated confidence readout.

use eframe::egui::{self, Color32, Mesh, RichText, StrokeKind};

use crate::egui_app::anim;

use super::style;
use super::BreedLensApp;

const PANEL_MAX_WIDTH: f32 = 440.0;
const BAR_HEIGHT: f32 = 12.0;

pub(super) fn render(app: &mut BreedLensApp, ui: &mut egui::Ui) {
    let Some(result) = app.controller.ui.result.clone() else {
        return;
    };
    let palette = style::palette();
    let elapsed = result.revealed_at.elapsed();
    let reveal = anim::reveal(elapsed);
    let band = anim::confidence_band(result.confidence, &app.controller.settings.confidence_bands);
    let band_palette = style::band_palette(band);

    ui.add_space(12.0 + reveal.offset);
    ui.vertical_centered(|ui| {
        ui.set_max_width(PANEL_MAX_WIDTH);
        ui.scope(|ui| {
            ui.set_opacity(reveal.alpha);

            let breed_outline = if result.is_dog {
                palette.panel_outline
            } else {
                palette.not_dog
            };
            egui::Frame::new()
                .fill(palette.bg_secondary)
                .stroke(egui::Stroke::new(1.5, breed_outline))
                .corner_radius(8.0)
                .inner_margin(12)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Breed").small().color(palette.text_muted));
                    ui.label(
                        RichText::new(&result.breed)
                            .size(24.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                });

            // Not-a-dog branch: one message block directly under the breed box.
            if let Some(message) = result.not_dog_message() {
                ui.add_space(6.0);
                egui::Frame::new()
                    .fill(style::with_alpha(palette.not_dog, 24))
                    .stroke(egui::Stroke::new(1.0, palette.not_dog))
                    .corner_radius(6.0)
                    .inner_margin(10)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("⚠").color(palette.not_dog));
                            ui.label(RichText::new(message).color(palette.text_primary));
                        });
                    });
            }

            ui.add_space(10.0);
            let counter = anim::counter_value(elapsed, result.confidence);
            ui.label(
                RichText::new(format!("{counter:.2}%"))
                    .size(28.0)
                    .strong()
                    .color(band_palette.text),
            );
            ui.label(RichText::new("confidence").small().color(palette.text_muted));

            ui.add_space(6.0);
            let fraction = anim::bar_fraction(elapsed, result.confidence);
            confidence_bar(ui, fraction, &band_palette);
        });
    });
}

/// Track plus an eased, gradient-filled bar at `fraction` of full width.
fn confidence_bar(ui: &mut egui::Ui, fraction: f32, band: &style::BandPalette) {
    let palette = style::palette();
    let width = ui.available_width().min(PANEL_MAX_WIDTH - 24.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), egui::Sense::hover());
    ui.painter().rect_filled(rect, 6.0, palette.bg_tertiary);
    ui.painter().rect_stroke(
        rect,
        6.0,
        egui::Stroke::new(1.0, palette.panel_outline),
        StrokeKind::Inside,
    );
    if fraction <= 0.0 {
        return;
    }
    let fill = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width() * fraction.clamp(0.0, 1.0), rect.height()),
    );
    fill_horizontal_gradient(ui, fill, band.bar_start, band.bar_end);
}

/// Left-to-right two-stop gradient, painted as a quad mesh.
fn fill_horizontal_gradient(ui: &egui::Ui, rect: egui::Rect, left: Color32, right: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    ui.painter().add(mesh);
}
