//! Worker thread that owns the tokio runtime and runs gallery copies.

use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, Gallery};

pub fn launch(cmd_rx: Receiver<BackendCommand>, gallery: Gallery, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendStopped(format!(
                    "Clipboard worker failed to start: {err}"
                )));
                return;
            }
        };

        tracing::debug!("clipboard worker started");

        // Each copy runs on its own task so a slow clipboard never delays the next one.
        for cmd in cmd_rx.iter() {
            match cmd {
                BackendCommand::CopyTemplate { template_id } => {
                    let gallery = gallery.clone();
                    runtime.spawn(async move {
                        gallery.copy(template_id.as_str()).await;
                    });
                }
            }
        }

        tracing::debug!("ui command queue closed; clipboard worker exiting");
    });
}
