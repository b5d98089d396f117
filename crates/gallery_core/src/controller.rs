//! Template gallery state: the active index and per-template copy acknowledgments.

use std::{
    collections::HashMap,
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;
use shared::{NoticeKind, TemplateCatalog, TemplateId, TemplateRecord};
use tokio::{task::JoinHandle, time::Instant};
use tracing::{debug, trace, warn};

use crate::{ClipboardService, NotificationService};

/// How long a template stays marked as copied after a successful write.
pub const COPY_ACK_WINDOW: Duration = Duration::from_millis(2000);
pub const COPY_SUCCESS_MESSAGE: &str = "Template copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    UnknownTemplate,
}

/// Point-in-time view of the gallery for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySnapshot {
    pub active_index: Option<usize>,
    pub len: usize,
    /// Ids currently showing the copied acknowledgment, in catalog order.
    pub copied: Vec<TemplateId>,
    pub can_navigate: bool,
}

impl GallerySnapshot {
    /// "2 of 3" style label; `None` for an empty catalog.
    pub fn position_label(&self) -> Option<String> {
        self.active_index
            .map(|index| format!("{} of {}", index + 1, self.len))
    }

    pub fn is_copied(&self, id: &TemplateId) -> bool {
        self.copied.contains(id)
    }
}

struct CopyAck {
    generation: u64,
    reset: JoinHandle<()>,
}

#[derive(Default)]
struct GalleryState {
    active_index: usize,
    copied: HashMap<TemplateId, CopyAck>,
    next_generation: u64,
}

impl Drop for GalleryState {
    fn drop(&mut self) {
        for ack in self.copied.values() {
            ack.reset.abort();
        }
    }
}

struct Inner<C, N> {
    catalog: TemplateCatalog,
    clipboard: C,
    notifier: N,
    state: Arc<Mutex<GalleryState>>,
}

/// Owns gallery navigation and copy state. Clones share state, so a copy
/// can be awaited on one task while another keeps navigating.
///
/// Copy acknowledgments expire on tokio timers; [`GalleryController::copy`]
/// must be polled inside a tokio runtime.
pub struct GalleryController<C, N> {
    inner: Arc<Inner<C, N>>,
}

impl<C, N> Clone for GalleryController<C, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, N> GalleryController<C, N>
where
    C: ClipboardService,
    N: NotificationService,
{
    pub fn new(catalog: TemplateCatalog, clipboard: C, notifier: N) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog,
                clipboard,
                notifier,
                state: Arc::new(Mutex::new(GalleryState::default())),
            }),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.inner.catalog
    }

    /// `None` only when the catalog is empty.
    pub fn active_index(&self) -> Option<usize> {
        if self.inner.catalog.is_empty() {
            return None;
        }
        Some(self.inner.state.lock().active_index)
    }

    pub fn active_template(&self) -> Option<&TemplateRecord> {
        self.active_index()
            .and_then(|index| self.inner.catalog.by_index(index))
    }

    /// Navigation is disabled for catalogs with fewer than two templates.
    pub fn can_navigate(&self) -> bool {
        self.inner.catalog.len() > 1
    }

    /// Out-of-range indices are ignored. Returns whether the index was accepted.
    pub fn select(&self, index: usize) -> bool {
        if index >= self.inner.catalog.len() {
            debug!(
                index,
                len = self.inner.catalog.len(),
                "ignoring out-of-range template selection"
            );
            return false;
        }
        self.inner.state.lock().active_index = index;
        true
    }

    pub fn next(&self) {
        let len = self.inner.catalog.len();
        if len <= 1 {
            return;
        }
        let mut state = self.inner.state.lock();
        state.active_index = (state.active_index + 1) % len;
    }

    pub fn previous(&self) {
        let len = self.inner.catalog.len();
        if len <= 1 {
            return;
        }
        let mut state = self.inner.state.lock();
        state.active_index = (state.active_index + len - 1) % len;
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.inner.state.lock().copied.contains_key(id)
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        let state = self.inner.state.lock();
        let catalog = &self.inner.catalog;
        GallerySnapshot {
            active_index: (!catalog.is_empty()).then_some(state.active_index),
            len: catalog.len(),
            copied: catalog
                .iter()
                .filter(|record| state.copied.contains_key(&record.id))
                .map(|record| record.id.clone())
                .collect(),
            can_navigate: catalog.len() > 1,
        }
    }

    /// Writes the template's content to the clipboard and reports the result
    /// through the notifier. Errors never escape; the outcome is returned for
    /// callers that want it.
    pub async fn copy(&self, id: &str) -> CopyOutcome {
        let Some(record) = self.inner.catalog.by_id(id) else {
            warn!(template_id = id, "copy requested for unknown template");
            return CopyOutcome::UnknownTemplate;
        };

        match self.inner.clipboard.write_text(&record.content).await {
            Ok(()) => {
                self.acknowledge_copy(record.id.clone());
                debug!(template_id = id, bytes = record.content.len(), "template copied");
                self.inner
                    .notifier
                    .notify(NoticeKind::Success, COPY_SUCCESS_MESSAGE);
                CopyOutcome::Copied
            }
            Err(err) => {
                warn!(template_id = id, error = %err, "template copy failed");
                self.inner
                    .notifier
                    .notify(NoticeKind::Failure, COPY_FAILURE_MESSAGE);
                CopyOutcome::Failed
            }
        }
    }

    /// Copies whichever template is active when called.
    pub async fn copy_active(&self) -> CopyOutcome {
        let Some(id) = self.active_template().map(|record| record.id.clone()) else {
            return CopyOutcome::UnknownTemplate;
        };
        self.copy(id.as_str()).await
    }

    fn acknowledge_copy(&self, id: TemplateId) {
        let deadline = Instant::now() + COPY_ACK_WINDOW;
        let mut state = self.inner.state.lock();
        state.next_generation += 1;
        let generation = state.next_generation;

        let reset = tokio::spawn(expire_copy_ack(
            Arc::downgrade(&self.inner.state),
            id.clone(),
            generation,
            deadline,
        ));

        // A newer success restarts the window; the older timer must not clear it.
        if let Some(previous) = state.copied.insert(id, CopyAck { generation, reset }) {
            previous.reset.abort();
        }
    }
}

async fn expire_copy_ack(
    state: Weak<Mutex<GalleryState>>,
    id: TemplateId,
    generation: u64,
    deadline: Instant,
) {
    tokio::time::sleep_until(deadline).await;

    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.lock();
    if state
        .copied
        .get(&id)
        .is_some_and(|ack| ack.generation == generation)
    {
        state.copied.remove(&id);
        trace!(template_id = %id, "copy acknowledgment expired");
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
