//! Palette and shared visual tweaks.

use eframe::egui::{Color32, Visuals};

use crate::egui_app::anim::ConfidenceBand;
use crate::egui_app::state::NoticeTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub not_dog: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(16, 16, 22),
        bg_secondary: Color32::from_rgb(26, 26, 36),
        bg_tertiary: Color32::from_rgb(38, 38, 52),
        panel_outline: Color32::from_rgb(54, 54, 72),
        text_primary: Color32::from_rgb(232, 234, 240),
        text_muted: Color32::from_rgb(150, 154, 168),
        accent: Color32::from_rgb(58, 134, 255),
        not_dog: Color32::from_rgb(255, 209, 102),
    }
}

/// Gradient endpoints for the confidence bar plus the counter text color.
#[derive(Clone, Copy)]
pub struct BandPalette {
    pub bar_start: Color32,
    pub bar_end: Color32,
    pub text: Color32,
}

/// Three-tier confidence palette, mirroring the service UI's colors.
pub fn band_palette(band: ConfidenceBand) -> BandPalette {
    match band {
        ConfidenceBand::Low => BandPalette {
            bar_start: Color32::from_rgb(0xF7, 0x25, 0x85),
            bar_end: Color32::from_rgb(0xB5, 0x17, 0x9E),
            text: Color32::from_rgb(0xF7, 0x25, 0x85),
        },
        ConfidenceBand::Medium => BandPalette {
            bar_start: Color32::from_rgb(0xFF, 0xD1, 0x66),
            bar_end: Color32::from_rgb(0xEF, 0x8E, 0x19),
            text: Color32::from_rgb(0xFF, 0xD1, 0x66),
        },
        ConfidenceBand::High => BandPalette {
            bar_start: Color32::from_rgb(0x70, 0xE0, 0x00),
            bar_end: Color32::from_rgb(0x38, 0xB0, 0x00),
            text: Color32::from_rgb(0x70, 0xE0, 0x00),
        },
    }
}

/// Accent color of a notice's severity stripe and icon.
pub fn notice_accent(tone: NoticeTone) -> Color32 {
    match tone {
        NoticeTone::Info => Color32::from_rgb(0x3A, 0x86, 0xFF),
        NoticeTone::Warning => Color32::from_rgb(0xFF, 0xD1, 0x66),
        NoticeTone::Error => Color32::from_rgb(0xF7, 0x25, 0x85),
    }
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.inactive.bg_fill = palette.bg_tertiary;
    visuals.widgets.hovered.bg_fill = palette.bg_tertiary;
    visuals.widgets.active.bg_fill = palette.bg_tertiary;
    visuals.selection.bg_fill = with_alpha(palette.accent, 80);
}
