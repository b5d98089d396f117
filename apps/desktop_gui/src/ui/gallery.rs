//! Templates tab: carousel controls, the active template card, and the picker list.

use crossbeam_channel::Sender;
use shared::{TemplateIcon, TemplateRecord};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{orchestration::dispatch_backend_command, Gallery};
use crate::ui::page::badge;

pub fn icon_glyph(icon: TemplateIcon) -> &'static str {
    match icon {
        TemplateIcon::FileText => "📄",
        TemplateIcon::Desktop => "🖥",
        TemplateIcon::TestTube => "🧪",
    }
}

pub fn copy_button_label(copied: bool) -> &'static str {
    if copied {
        "✔ Copied"
    } else {
        "📋 Copy"
    }
}

pub fn show_gallery(
    ui: &mut egui::Ui,
    gallery: &Gallery,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut Option<String>,
) {
    show_controls(ui, gallery);
    ui.add_space(12.0);

    let Some(active) = gallery.active_template() else {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("No templates available.").weak());
        });
        return;
    };

    let copied = gallery.is_copied(active.id.as_str());
    if show_active_card(ui, active, copied) {
        dispatch_backend_command(
            cmd_tx,
            BackendCommand::CopyTemplate {
                template_id: active.id.clone(),
            },
            status,
        );
    }

    ui.add_space(12.0);
    show_picker(ui, gallery);
}

fn show_controls(ui: &mut egui::Ui, gallery: &Gallery) {
    let snapshot = gallery.snapshot();
    ui.horizontal(|ui| {
        ui.heading("Template Gallery");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(snapshot.can_navigate, egui::Button::new("▶"))
                .clicked()
            {
                gallery.next();
            }
            let position = snapshot
                .position_label()
                .unwrap_or_else(|| format!("0 of {}", snapshot.len));
            ui.label(egui::RichText::new(position).weak());
            if ui
                .add_enabled(snapshot.can_navigate, egui::Button::new("◀"))
                .clicked()
            {
                gallery.previous();
            }
        });
    });
}

/// Returns true when the copy button was clicked.
fn show_active_card(ui: &mut egui::Ui, template: &TemplateRecord, copied: bool) -> bool {
    let mut copy_clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon_glyph(template.icon)).size(22.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&template.title).strong().size(20.0));
                ui.label(egui::RichText::new(&template.subtitle).weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                copy_clicked = ui.button(copy_button_label(copied)).clicked();
            });
        });
        ui.add_space(6.0);
        ui.label(template.description.as_str());
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for feature in &template.features {
                badge(ui, feature);
            }
        });
        ui.add_space(8.0);
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("template_content")
                    .max_height(360.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(&template.content).monospace());
                    });
            });
    });
    copy_clicked
}

fn show_picker(ui: &mut egui::Ui, gallery: &Gallery) {
    let active_index = gallery.active_index();
    let mut picked = None;
    for (index, template) in gallery.catalog().iter().enumerate() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let title = format!("{} {}", icon_glyph(template.icon), template.title);
            if ui
                .selectable_label(active_index == Some(index), title)
                .clicked()
            {
                picked = Some(index);
            }
            ui.label(egui::RichText::new(&template.subtitle).weak().small());
        });
    }
    if let Some(index) = picked {
        gallery.select(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_label_reflects_acknowledgment() {
        assert_eq!(copy_button_label(false), "📋 Copy");
        assert_eq!(copy_button_label(true), "✔ Copied");
    }

    #[test]
    fn every_icon_has_a_distinct_glyph() {
        let glyphs = [
            icon_glyph(TemplateIcon::FileText),
            icon_glyph(TemplateIcon::Desktop),
            icon_glyph(TemplateIcon::TestTube),
        ];
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }
}
