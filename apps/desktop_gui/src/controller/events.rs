//! Backend-to-UI events and the notifier that feeds them.

use crossbeam_channel::{Sender, TrySendError};
use gallery_core::NotificationService;
use shared::NoticeKind;

pub enum UiEvent {
    Notice { kind: NoticeKind, message: String },
    BackendStopped(String),
}

/// Routes gallery notices onto the UI event queue, where they become toasts.
#[derive(Clone)]
pub struct ChannelNotifier {
    ui_tx: Sender<UiEvent>,
}

impl ChannelNotifier {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }
}

impl NotificationService for ChannelNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let event = UiEvent::Notice {
            kind,
            message: message.to_string(),
        };
        match self.ui_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!(notice = message, "ui event queue full; dropping notice")
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(notice = message, "ui gone; dropping notice")
            }
        }
    }
}
