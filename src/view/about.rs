// The static about view

use super::pages::render_blocks;
use crate::app::{Action, Folio};
use crate::layout;
use crate::model::Variant;
use crate::style;
use eframe::egui;

impl Folio {
    pub(crate) fn render_about(&mut self, ctx: &egui::Context, action: &mut Option<Action>) {
        let palette = style::palette(Variant::Light);

        egui::TopBottomPanel::top("about_header")
            .exact_height(layout::HEADER_HEIGHT)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if ui.add(egui::Button::new("← Back").frame(false)).clicked() {
                        *action = Some(Action::ShowBook);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let sections: Vec<(usize, &str)> = self.book.sections().collect();
                        for (index, label) in sections.into_iter().rev() {
                            if ui.add(egui::Button::new(label).frame(false)).clicked() {
                                *action = Some(Action::OpenSection(index));
                            }
                        }
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("about_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(layout::PAGE_MAX_WIDTH);
                        ui.add_space(layout::HEADER_HEIGHT);
                        ui.label(
                            egui::RichText::new(&self.book.about.heading)
                                .size(layout::TITLE_SIZE * 0.8)
                                .strong()
                                .color(palette.text),
                        );
                        ui.add_space(layout::BLOCK_SPACING);
                        render_blocks(ui, &self.book.about.blocks, palette, &mut self.ui, action);
                        if let Some(signature) = &self.book.about.signature {
                            ui.label(egui::RichText::new(signature).italics().color(palette.dim));
                        }
                    });
                });
        });
    }
}
