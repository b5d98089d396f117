use std::{path::PathBuf, time::Instant};

use crossbeam_channel::{Receiver, Sender};
use shared::{config::Settings, page::Tab, TemplateCatalog};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, Gallery};
use crate::ui::{gallery, page, toast::ToastQueue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub catalog_path: Option<PathBuf>,
    pub start_tab: Tab,
}

impl StartupConfig {
    /// Command-line flags win over settings.
    pub fn resolve(
        catalog_flag: Option<PathBuf>,
        tab_flag: Option<&str>,
        settings: &Settings,
    ) -> anyhow::Result<Self> {
        let start_tab = match tab_flag {
            Some(raw) => Tab::from_key(raw)
                .ok_or_else(|| anyhow::anyhow!("unknown tab '{raw}'"))?,
            None => settings.start_tab,
        };
        Ok(Self {
            catalog_path: catalog_flag.or_else(|| settings.catalog_path.clone()),
            start_tab,
        })
    }

    pub fn load_catalog(&self) -> anyhow::Result<TemplateCatalog> {
        use anyhow::Context as _;

        match &self.catalog_path {
            Some(path) => TemplateCatalog::load(path)
                .with_context(|| format!("failed to load catalog '{}'", path.display())),
            None => Ok(TemplateCatalog::builtin()),
        }
    }
}

#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
}

pub struct DesktopGuiApp {
    gallery: Gallery,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    active_tab: Tab,
    toasts: ToastQueue,
    status: Option<String>,
    banner: Option<StatusBanner>,
}

impl DesktopGuiApp {
    pub fn new(
        gallery: Gallery,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        start_tab: Tab,
    ) -> Self {
        Self {
            gallery,
            cmd_tx,
            ui_rx,
            active_tab: start_tab,
            toasts: ToastQueue::default(),
            status: None,
            banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Notice { kind, message } => {
                    self.toasts.push(kind, message, now);
                }
                UiEvent::BackendStopped(message) => {
                    tracing::error!("{message}");
                    self.banner = Some(StatusBanner { message });
                }
            }
        }
    }

    fn show_status(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = &self.banner {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, banner.message.as_str());
        }
        let mut clear = false;
        if let Some(status) = &self.status {
            ui.horizontal(|ui| {
                let color = ui.visuals().warn_fg_color;
                ui.colored_label(color, status.as_str());
                clear = ui.small_button("Dismiss").clicked();
            });
        }
        if clear {
            self.status = None;
        }
    }

    fn show_tab_strip(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut self.active_tab, tab, tab.label());
            }
        });
    }

    fn show_active_tab(&mut self, ui: &mut egui::Ui) {
        match self.active_tab {
            Tab::Templates => {
                gallery::show_gallery(ui, &self.gallery, &self.cmd_tx, &mut self.status)
            }
            tab => page::show_info_tab(ui, tab),
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("app_header").show(ctx, |ui| {
            ui.add_space(6.0);
            page::show_header(ui);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("app_footer").show(ctx, |ui| {
            ui.add_space(4.0);
            page::show_footer(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                page::show_hero(ui);
                self.show_status(ui);
                self.show_tab_strip(ui);
                ui.separator();
                ui.add_space(8.0);
                self.show_active_tab(ui);
            });
        });

        self.toasts.show(ctx);

        // Copy acknowledgments and toasts expire on their own; keep frames coming.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
