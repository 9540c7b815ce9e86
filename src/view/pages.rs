// Page area rendering
// Mounts the paginator's slots and cross-animates them during a page turn.

use crate::app::{Action, Folio};
use crate::layout;
use crate::model::{spans, Block, Tone};
use crate::state::{SlotRole, UIState};
use crate::style::{self, Palette};
use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use std::time::Instant;

impl Folio {
    pub(crate) fn render_pages(&mut self, ctx: &egui::Context, now: Instant, action: &mut Option<Action>) {
        let progress = layout::ease(self.paginator.progress(now));
        let slots = self.paginator.slots();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let area = ui.max_rect();
                for slot in slots {
                    let (offset, opacity) = match slot.role {
                        SlotRole::Current => (0.0, 1.0),
                        SlotRole::Leaving => (-layout::TURN_TRAVEL * progress, 1.0 - progress),
                        SlotRole::Entering => (layout::TURN_TRAVEL * (1.0 - progress), progress),
                    };
                    let palette = style::palette(self.book.variant(slot.index));

                    // The entering page fades in over the leaving one
                    let background = match slot.role {
                        SlotRole::Entering => palette.background.gamma_multiply(opacity),
                        _ => palette.background,
                    };
                    ui.painter().rect_filled(area, 0.0, background);

                    let Some(page) = self.book.page(slot.index) else {
                        continue;
                    };
                    let column = layout::page_column(area.translate(egui::vec2(0.0, offset)));
                    let mut child = ui.new_child(
                        egui::UiBuilder::new()
                            .id_salt(("page", slot.index))
                            .max_rect(column)
                            .layout(egui::Layout::top_down(egui::Align::Center)),
                    );
                    child.set_clip_rect(area);
                    child.set_opacity(opacity);
                    // The wheel turns pages, so long pages scroll by their scroll bar only
                    egui::ScrollArea::vertical()
                        .id_salt(("page_scroll", slot.index))
                        .scroll_source(egui::scroll_area::ScrollSource::SCROLL_BAR)
                        .auto_shrink([false, false])
                        .show(&mut child, |ui| {
                            ui.vertical_centered(|ui| {
                                render_blocks(ui, &page.blocks, palette, &mut self.ui, action);
                            });
                        });
                }
            });
    }
}

pub(crate) fn render_blocks(
    ui: &mut egui::Ui,
    blocks: &[Block],
    palette: Palette,
    state: &mut UIState,
    action: &mut Option<Action>,
) {
    for block in blocks {
        match block {
            Block::Title { text } => {
                ui.label(
                    egui::RichText::new(text)
                        .size(layout::TITLE_SIZE)
                        .strong()
                        .color(palette.text),
                );
            }
            Block::Subtitle { text } => {
                ui.label(
                    egui::RichText::new(text)
                        .size(layout::SUBTITLE_SIZE)
                        .color(palette.dim),
                );
            }
            Block::Label { text } => {
                ui.label(
                    egui::RichText::new(text.to_uppercase())
                        .size(layout::LABEL_SIZE)
                        .extra_letter_spacing(2.0)
                        .color(palette.accent),
                );
            }
            Block::Text { text, tone } => {
                ui.label(text_job(text, *tone, palette));
            }
            Block::Editors { names } => render_editors(ui, names, palette),
            Block::Link { text, href } => {
                let link = egui::RichText::new(text)
                    .size(layout::BODY_SIZE)
                    .color(palette.accent);
                if ui.link(link).clicked() {
                    *action = Some(Action::OpenLink(href.clone()));
                }
            }
            Block::Note { text } => {
                ui.label(
                    egui::RichText::new(text)
                        .size(layout::NOTE_SIZE)
                        .color(palette.dim),
                );
            }
            Block::Newsletter {
                placeholder,
                button,
            } => render_newsletter(ui, placeholder, button, state, action),
        }
        ui.add_space(layout::BLOCK_SPACING);
    }
}

/// Body text with its tone applied and `~~struck~~` runs drawn through.
pub(crate) fn text_job(text: &str, tone: Tone, palette: Palette) -> LayoutJob {
    let color = palette.tone_color(tone);
    let size = match tone {
        Tone::Emphasis => layout::BODY_SIZE * 1.2,
        _ => layout::BODY_SIZE,
    };

    let mut job = LayoutJob::default();
    for span in spans(text) {
        let struck = span.struck || tone == Tone::Struck;
        let format = TextFormat {
            font_id: egui::FontId::proportional(size),
            line_height: Some(size * 1.5),
            color,
            italics: tone == Tone::Question,
            strikethrough: if struck {
                egui::Stroke::new(1.5, color)
            } else {
                egui::Stroke::NONE
            },
            ..Default::default()
        };
        job.append(span.text, 0.0, format);
    }
    job
}

pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn render_editors(ui: &mut egui::Ui, names: &[String], palette: Palette) {
    const CELL: f32 = 110.0;
    ui.label(
        egui::RichText::new("EDITORS")
            .size(layout::LABEL_SIZE)
            .color(palette.dim),
    );

    let size = egui::vec2(CELL * names.len() as f32, layout::EDITOR_AVATAR + 28.0);
    ui.allocate_ui(size, |ui| {
        ui.horizontal(|ui| {
            for name in names {
                ui.allocate_ui_with_layout(
                    egui::vec2(CELL, size.y),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(layout::EDITOR_AVATAR, layout::EDITOR_AVATAR),
                            egui::Sense::hover(),
                        );
                        let painter = ui.painter();
                        painter.circle_filled(rect.center(), layout::EDITOR_AVATAR / 2.0, palette.dim);
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            initials(name),
                            egui::FontId::proportional(16.0),
                            palette.background,
                        );
                        ui.label(
                            egui::RichText::new(name)
                                .size(layout::NOTE_SIZE)
                                .color(palette.text),
                        );
                    },
                );
            }
        });
    });
}

fn render_newsletter(
    ui: &mut egui::Ui,
    placeholder: &str,
    button: &str,
    state: &mut UIState,
    action: &mut Option<Action>,
) {
    let size = egui::vec2(layout::NEWSLETTER_INPUT_WIDTH + 110.0, 32.0);
    ui.allocate_ui(size, |ui| {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.email)
                    .hint_text(placeholder)
                    .desired_width(layout::NEWSLETTER_INPUT_WIDTH),
            );
            if response.changed() {
                state.form_error = None;
            }
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(button).clicked() || entered {
                *action = Some(Action::Subscribe);
            }
        });
    });

    if let Some(err) = &state.form_error {
        ui.label(
            egui::RichText::new(err)
                .size(layout::NOTE_SIZE)
                .color(ui.visuals().error_fg_color),
        );
    }
}
