use std::sync::Arc;

use async_trait::async_trait;
use shared::{error::ClipboardWriteError, NoticeKind};

#[cfg(feature = "system-clipboard")]
pub mod clipboard;
pub mod controller;

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use controller::{
    CopyOutcome, GalleryController, GallerySnapshot, COPY_ACK_WINDOW, COPY_FAILURE_MESSAGE,
    COPY_SUCCESS_MESSAGE,
};

/// Platform capability that places text on the system clipboard.
#[async_trait]
pub trait ClipboardService: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError>;
}

/// Sink for transient user-facing notices. Fire-and-forget.
pub trait NotificationService: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

#[async_trait]
impl<T: ClipboardService + ?Sized> ClipboardService for Arc<T> {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError> {
        (**self).write_text(text).await
    }
}

impl<T: NotificationService + ?Sized> NotificationService for Arc<T> {
    fn notify(&self, kind: NoticeKind, message: &str) {
        (**self).notify(kind, message)
    }
}
