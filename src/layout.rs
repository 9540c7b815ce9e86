// Layout constants for Folio

use eframe::egui;

// --- Sizing ---
pub const HEADER_HEIGHT: f32 = 44.0;
pub const FOOTER_HEIGHT: f32 = 40.0;
pub const PAGE_MAX_WIDTH: f32 = 560.0;
pub const PAGE_TOP_RATIO: f32 = 0.16;
pub const DOT_RADIUS: f32 = 4.0;
pub const DOT_SPACING: f32 = 18.0;
pub const DOTS_MARGIN: f32 = 24.0;
pub const EDITOR_AVATAR: f32 = 50.0;
pub const NEWSLETTER_INPUT_WIDTH: f32 = 240.0;

// --- Type scale ---
pub const TITLE_SIZE: f32 = 40.0;
pub const SUBTITLE_SIZE: f32 = 18.0;
pub const LABEL_SIZE: f32 = 12.0;
pub const BODY_SIZE: f32 = 19.0;
pub const NOTE_SIZE: f32 = 14.0;
pub const BLOCK_SPACING: f32 = 18.0;

// --- Page-turn animation ---
pub const TURN_TRAVEL: f32 = 48.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

/// Rect of the page column inside `area`, horizontally centered.
pub fn page_column(area: egui::Rect) -> egui::Rect {
    let width = area.width().min(PAGE_MAX_WIDTH);
    let left = area.center().x - width / 2.0;
    let top = area.top() + area.height() * PAGE_TOP_RATIO;
    egui::Rect::from_min_max(egui::pos2(left, top), egui::pos2(left + width, area.bottom()))
}

/// Smoothstep easing for page-turn progress.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
