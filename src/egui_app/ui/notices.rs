//! Transient toast notices, bottom-right, sliding in from the edge.

use eframe::egui::{self, Align2, RichText};

use crate::egui_app::anim;
use crate::egui_app::state::{Notice, NoticeTone};

use super::style;
use super::BreedLensApp;

const NOTICE_WIDTH: f32 = 300.0;
const EDGE_MARGIN: f32 = 16.0;

pub(super) fn render(app: &mut BreedLensApp, ctx: &egui::Context) {
    let notices = app.controller.ui.notices.clone();
    if let Some(leaving) = &notices.leaving {
        let slide = anim::notice_slide_out(leaving.evicted_at.elapsed());
        // Stack the exiting notice above the active one so they can overlap.
        let lift = if notices.active.is_some() { 72.0 } else { 0.0 };
        show_notice(ctx, "notice_leaving", &leaving.notice, slide, lift);
    }
    if let Some(active) = &notices.active {
        let slide = anim::notice_slide_in(active.posted_at.elapsed());
        show_notice(ctx, "notice_active", active, slide, 0.0);
    }
}

/// Render one toast. `slide` is 0 when settled and 1 when fully off-screen.
fn show_notice(ctx: &egui::Context, id: &str, notice: &Notice, slide: f32, lift: f32) {
    let palette = style::palette();
    let accent = style::notice_accent(notice.tone);
    let offset_x = slide * (NOTICE_WIDTH + EDGE_MARGIN * 2.0);
    egui::Area::new(egui::Id::new(id))
        .anchor(
            Align2::RIGHT_BOTTOM,
            egui::vec2(-EDGE_MARGIN + offset_x, -EDGE_MARGIN - lift),
        )
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_max_width(NOTICE_WIDTH);
            egui::Frame::new()
                .fill(style::with_alpha(palette.bg_secondary, 242))
                .stroke(egui::Stroke::new(1.0, palette.panel_outline))
                .corner_radius(6.0)
                .inner_margin(12)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(tone_icon(notice.tone)).color(accent).strong());
                        ui.label(RichText::new(&notice.message).color(palette.text_primary));
                    });
                });
        });
}

fn tone_icon(tone: NoticeTone) -> &'static str {
    match tone {
        NoticeTone::Info => "ℹ",
        NoticeTone::Warning => "⚠",
        NoticeTone::Error => "⊘",
    }
}
