//! Toast notifications: a queue with auto-dismiss and the overlay that draws it.

use std::time::{Duration, Instant};

use shared::NoticeKind;

pub const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            expires_at: now + TOAST_TTL,
        });
        if self.toasts.len() > MAX_VISIBLE {
            self.toasts.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in self.visible() {
                    let (icon, color) = match toast.kind {
                        NoticeKind::Success => ("✔", egui::Color32::from_rgb(72, 187, 120)),
                        NoticeKind::Failure => ("✖", egui::Color32::from_rgb(229, 83, 75)),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(color, icon);
                            ui.label(toast.message.as_str());
                            if ui.small_button("Dismiss").clicked() {
                                dismissed = Some(toast.id);
                            }
                        });
                    });
                    ui.add_space(6.0);
                }
            });

        if let Some(id) = dismissed {
            self.dismiss(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_dismiss_removes_one() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        let first = queue.push(NoticeKind::Success, "copied", now);
        let second = queue.push(NoticeKind::Failure, "failed", now);
        assert!(second > first);

        queue.dismiss(first);
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].id, second);
    }

    #[test]
    fn toasts_expire_after_ttl() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        queue.push(NoticeKind::Success, "copied", now);

        queue.prune(now + TOAST_TTL - Duration::from_millis(1));
        assert!(!queue.is_empty());

        queue.prune(now + TOAST_TTL);
        assert!(queue.is_empty());
    }

    #[test]
    fn oldest_toast_is_dropped_past_capacity() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        for n in 0..=MAX_VISIBLE {
            queue.push(NoticeKind::Success, format!("toast {n}"), now);
        }
        assert_eq!(queue.visible().len(), MAX_VISIBLE);
        assert_eq!(queue.visible()[0].message, "toast 1");
    }
}
