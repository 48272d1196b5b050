//! Background asset probe feeding the TUI channel.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use maskdash_assets::{AssetState, AssetStatus, ImageStore};
use maskdash_core::AssetCatalog;

use crate::messages::DashMessage;

/// Probe every catalog asset on a worker thread.
///
/// Sends one [`DashMessage::AssetStatus`] per asset followed by
/// [`DashMessage::ProbeFinished`]. Stops early if the receiver is dropped.
pub fn spawn_probe(
    store: Arc<dyn ImageStore>,
    catalog: AssetCatalog,
    tx: Sender<DashMessage>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let assets = catalog.all();
        let total = assets.len();
        let mut available = 0;
        for asset in assets {
            let status = AssetStatus::probe(store.as_ref(), asset);
            let log = match &status.state {
                AssetState::Found { .. } => {
                    available += 1;
                    format!("[INFO] loaded {}", status.path.display())
                }
                AssetState::Missing => format!("[WARN] missing {}", status.path.display()),
                AssetState::Unreadable { reason } => {
                    format!("[ERROR] {}: {reason}", status.path.display())
                }
            };
            if tx.send(DashMessage::Log(log)).is_err()
                || tx.send(DashMessage::AssetStatus(status)).is_err()
            {
                tracing::debug!("probe receiver dropped");
                return;
            }
        }
        let _ = tx.send(DashMessage::ProbeFinished { available, total });
    })
}
