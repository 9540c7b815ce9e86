use crate::model::{Tone, Variant};
use eframe::egui;

/// Colors for one page variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: egui::Color32,
    pub text: egui::Color32,
    pub dim: egui::Color32,
    pub accent: egui::Color32,
}

pub const DARK: Palette = Palette {
    background: egui::Color32::from_rgb(18, 18, 18),
    text: egui::Color32::from_rgb(236, 232, 224),
    dim: egui::Color32::from_rgb(140, 136, 128),
    accent: egui::Color32::from_rgb(214, 178, 110),
};

pub const LIGHT: Palette = Palette {
    background: egui::Color32::from_rgb(245, 241, 232),
    text: egui::Color32::from_rgb(26, 24, 22),
    dim: egui::Color32::from_rgb(120, 114, 104),
    accent: egui::Color32::from_rgb(150, 98, 32),
};

pub fn palette(variant: Variant) -> Palette {
    match variant {
        Variant::Dark => DARK,
        Variant::Light => LIGHT,
    }
}

impl Palette {
    pub fn tone_color(&self, tone: Tone) -> egui::Color32 {
        match tone {
            Tone::Plain | Tone::Emphasis => self.text,
            Tone::Dim | Tone::Struck => self.dim,
            Tone::Question => self.accent,
        }
    }
}

/// Chrome (header, dots, footer) follows the variant of the page underneath.
pub fn apply_chrome(ctx: &egui::Context, variant: Variant) {
    let visuals = match variant {
        Variant::Dark => egui::Visuals::dark(),
        Variant::Light => egui::Visuals::light(),
    };
    let p = palette(variant);
    ctx.set_visuals(egui::Visuals {
        panel_fill: p.background,
        window_fill: p.background,
        hyperlink_color: p.accent,
        ..visuals
    });
}
