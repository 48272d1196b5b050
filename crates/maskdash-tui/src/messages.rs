//! TUI message types (Elm Messages).

use maskdash_assets::AssetStatus;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum DashMessage {
    /// Availability of one asset, from the background probe.
    AssetStatus(AssetStatus),
    /// The probe has checked every catalog asset.
    ProbeFinished { available: usize, total: usize },
    /// Log message.
    Log(String),
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
}
