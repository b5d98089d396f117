//! System clipboard backed by `arboard`.

use std::sync::Arc;

use arboard::Clipboard;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::error::ClipboardWriteError;

use crate::ClipboardService;

/// Keeps one platform handle alive for the life of the app. On X11/Wayland
/// the copied text disappears once the last handle is dropped.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardService for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError> {
        let handle = Arc::clone(&self.handle);
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut slot = handle.lock();
            if slot.is_none() {
                *slot = Some(
                    Clipboard::new().map_err(|err| ClipboardWriteError::new(err.to_string()))?,
                );
            }
            let Some(clipboard) = slot.as_mut() else {
                return Err(ClipboardWriteError::new("clipboard unavailable"));
            };
            let result = clipboard.set_text(text);
            if let Err(err) = result {
                // Drop the handle so the next attempt reconnects.
                *slot = None;
                return Err(ClipboardWriteError::new(err.to_string()));
            }
            Ok(())
        })
        .await
        .map_err(|err| ClipboardWriteError::new(format!("clipboard worker failed: {err}")))?
    }
}
