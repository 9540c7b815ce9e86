// Book chrome: logo, section navigation, page dots, footer
// Everything around the page area; clicks become deferred actions.

use crate::app::{Action, Folio};
use crate::layout;
use eframe::egui;

impl Folio {
    pub(crate) fn render_header(&self, ctx: &egui::Context, action: &mut Option<Action>) {
        egui::TopBottomPanel::top("header")
            .exact_height(layout::HEADER_HEIGHT)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let logo = egui::Button::new(egui::RichText::new(&self.book.title).strong())
                        .frame(false);
                    let logo = ui.add(logo);
                    let logo = if self.book.description.is_empty() {
                        logo
                    } else {
                        logo.on_hover_text(&self.book.description)
                    };
                    if logo.clicked() {
                        *action = Some(Action::First);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(egui::Button::new("About").frame(false)).clicked() {
                            *action = Some(Action::ShowAbout);
                        }
                        ui.separator();

                        // Right-to-left: walk the sections backwards to keep book order
                        let current = self.paginator.highlighted_page();
                        let sections: Vec<(usize, &str)> = self.book.sections().collect();
                        for (index, label) in sections.into_iter().rev() {
                            if ui.selectable_label(index == current, label).clicked() {
                                *action = Some(Action::GoTo(index));
                            }
                        }
                    });
                });
            });
    }

    pub(crate) fn render_footer(&self, ctx: &egui::Context, action: &mut Option<Action>) {
        let total = self.paginator.total_pages();
        let on_last = self.paginator.is_last_page();
        let skip_target = self.book.newsletter_page().unwrap_or(total.saturating_sub(1));
        let show_skip = self.paginator.current_page() != skip_target;

        egui::TopBottomPanel::bottom("footer")
            .exact_height(layout::FOOTER_HEIGHT)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if show_skip && ui.add(egui::Button::new("Skip to subscribe").frame(false)).clicked() {
                        *action = Some(Action::SkipToSubscribe);
                    }

                    if let Some((err, _)) = &self.ui.error_message {
                        ui.colored_label(ui.visuals().error_fg_color, err);
                    } else if let Some((info, _)) = &self.ui.info_message {
                        ui.label(info);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{} / {}", self.paginator.current_page() + 1, total));

                        if !on_last && !self.paginator.is_transitioning() {
                            ui.add_space(24.0);
                            if ui.button("Continue ↓").clicked() {
                                *action = Some(Action::Advance);
                            }
                        }
                    });
                });
            });
    }

    pub(crate) fn render_dots(&self, ctx: &egui::Context, action: &mut Option<Action>) {
        let current = self.paginator.highlighted_page();

        egui::Area::new(egui::Id::new("page_dots"))
            .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-layout::DOTS_MARGIN, 0.0))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                let color = ui.visuals().text_color();
                for index in 0..self.paginator.total_pages() {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(layout::DOT_SPACING, layout::DOT_SPACING),
                        egui::Sense::click(),
                    );
                    let radius = if index == current || response.hovered() {
                        layout::DOT_RADIUS * 1.4
                    } else {
                        layout::DOT_RADIUS
                    };
                    if index == current {
                        ui.painter().circle_filled(rect.center(), radius, color);
                    } else {
                        ui.painter().circle_stroke(
                            rect.center(),
                            radius,
                            egui::Stroke::new(1.0, color.gamma_multiply(0.6)),
                        );
                    }

                    let hover = match self.book.label(index) {
                        Some(label) => format!("Go to page {} ({})", index + 1, label),
                        None => format!("Go to page {}", index + 1),
                    };
                    let response = response.on_hover_text(hover);
                    if response.clicked() {
                        *action = Some(Action::GoTo(index));
                    }
                }
            });
    }
}
