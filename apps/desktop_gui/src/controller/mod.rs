//! Controller layer: UI events, the shared gallery handle, and command orchestration.

use gallery_core::{GalleryController, SystemClipboard};

pub mod events;
pub mod orchestration;

pub type Gallery = GalleryController<SystemClipboard, events::ChannelNotifier>;
