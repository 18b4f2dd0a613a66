use std::sync::Arc;

use tokio::sync::watch;

/// Post-commit change signal for one table.
///
/// Writers bump the version after every committed mutation; each live view
/// holds a subscription and requeries the table on every bump. Consumers
/// always receive full snapshots, never deltas.
#[derive(Debug, Clone)]
pub struct StoreNotifier {
    version: Arc<watch::Sender<u64>>,
}

impl StoreNotifier {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self {
            version: Arc::new(tx),
        }
    }

    pub fn notify(&self) {
        self.version.send_modify(|v| *v += 1);
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }
}

impl Default for StoreNotifier {
    fn default() -> Self {
        Self::new()
    }
}
