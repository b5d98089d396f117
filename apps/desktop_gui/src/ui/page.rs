//! Static page sections: header, hero, footer, and informational tab cards.

use shared::page::{cards_for, InfoCard, Tab, FOOTER, HEADER, HERO};

pub fn show_header(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new(HEADER.title).strong().size(26.0));
            ui.label(egui::RichText::new(HEADER.tagline).weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            badge(ui, HEADER.version);
        });
    });
}

pub fn show_hero(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(egui::RichText::new(HERO.headline).strong().size(30.0));
        ui.add_space(8.0);
        ui.label(HERO.blurb);
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for label in HERO.badges {
                badge(ui, label);
            }
        });
        ui.add_space(4.0);
        ui.label(egui::RichText::new(HERO.inspiration).weak().small());
        ui.add_space(12.0);
    });
}

pub fn show_footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(FOOTER).weak());
    });
}

pub fn show_info_tab(ui: &mut egui::Ui, tab: Tab) {
    for card in cards_for(tab) {
        info_card(ui, card);
        ui.add_space(10.0);
    }
}

fn info_card(ui: &mut egui::Ui, card: &InfoCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(card.title).strong().size(18.0));
        if !card.body.is_empty() {
            ui.add_space(4.0);
            ui.label(card.body);
        }
        for point in card.points {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(*point);
            });
        }
    });
}

pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}
