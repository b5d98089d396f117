//! UI layer for desktop GUI: app shell, static page sections, gallery view, and toasts.

pub mod app;
pub mod gallery;
pub mod page;
pub mod toast;

pub use app::{DesktopGuiApp, StartupConfig};
