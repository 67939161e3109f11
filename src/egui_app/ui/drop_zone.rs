//! The clickable/droppable acquisition zone with the candidate preview.

use eframe::egui::{self, Align2, RichText, Sense, StrokeKind, TextStyle};

use crate::egui_app::anim;

use super::style;
use super::BreedLensApp;

const ZONE_HEIGHT: f32 = 260.0;
const ZONE_MAX_WIDTH: f32 = 440.0;

pub(super) fn render(app: &mut BreedLensApp, ui: &mut egui::Ui) {
    let palette = style::palette();
    ui.vertical_centered(|ui| {
        let width = ui.available_width().min(ZONE_MAX_WIDTH);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, ZONE_HEIGHT), Sense::click());

        let highlighted = app.controller.ui.drop_zone.active || response.hovered();
        let fill = if highlighted {
            palette.bg_tertiary
        } else {
            palette.bg_secondary
        };
        let outline = if highlighted {
            palette.accent
        } else {
            palette.panel_outline
        };
        ui.painter().rect_filled(rect, 8.0, fill);
        ui.painter().rect_stroke(
            rect,
            8.0,
            egui::Stroke::new(2.0, outline),
            StrokeKind::Inside,
        );

        match (&app.preview_tex, &app.controller.ui.preview) {
            (Some(texture), Some(preview)) => {
                let alpha = anim::preview_alpha(preview.shown_at.elapsed());
                let tint = style::with_alpha(egui::Color32::WHITE, (alpha * 255.0) as u8);
                let image_rect = fit_rect(rect.shrink(12.0), preview.size);
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter().image(texture.id(), image_rect, uv, tint);
                ui.painter().text(
                    rect.shrink(6.0).left_bottom(),
                    Align2::LEFT_BOTTOM,
                    &preview.file_name,
                    TextStyle::Small.resolve(ui.style()),
                    palette.text_muted,
                );
            }
            _ => {
                ui.painter().text(
                    rect.center() - egui::vec2(0.0, 12.0),
                    Align2::CENTER_CENTER,
                    "Drop a dog photo here",
                    TextStyle::Heading.resolve(ui.style()),
                    palette.text_primary,
                );
                ui.painter().text(
                    rect.center() + egui::vec2(0.0, 14.0),
                    Align2::CENTER_CENTER,
                    "or click to browse",
                    TextStyle::Body.resolve(ui.style()),
                    palette.text_muted,
                );
            }
        }

        if response.clicked() {
            app.controller.browse_for_image();
        }
    });

    if app.controller.ui.drop_zone.active {
        hint_overlay(ui.ctx());
    }
}

/// Center `size` inside `bounds`, preserving aspect ratio.
fn fit_rect(bounds: egui::Rect, size: [usize; 2]) -> egui::Rect {
    let (width, height) = (size[0].max(1) as f32, size[1].max(1) as f32);
    let scale = (bounds.width() / width).min(bounds.height() / height).min(1.0);
    egui::Rect::from_center_size(
        bounds.center(),
        egui::vec2(width * scale, height * scale),
    )
}

/// Full-window affordance while files hover over the app.
fn hint_overlay(ctx: &egui::Context) {
    let palette = style::palette();
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("drop_hint_overlay"),
    ));
    painter.rect_filled(rect, 0.0, style::with_alpha(palette.accent, 24));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Release to select",
        TextStyle::Heading.resolve(&ctx.style()),
        palette.text_primary,
    );
}
