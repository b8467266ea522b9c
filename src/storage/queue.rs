use crate::{
    drag::{MoveRequest, MoveSink},
    storage::Storage,
};
use std::sync::Arc;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

/// A move the store rejected; the UI should resync from the stored board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFailure {
    pub request: MoveRequest,
    pub error: String,
}

/// Hands completed drops to a background worker without waiting on storage.
///
/// Requests are applied in submission order. The worker stops once every
/// queue handle has been dropped and returns the number of moves it applied.
#[derive(Debug, Clone)]
pub struct PersistenceQueue {
    sender: mpsc::UnboundedSender<MoveRequest>,
}

impl PersistenceQueue {
    /// Spawns the worker on the current tokio runtime
    pub fn spawn(storage: Arc<dyn Storage>) -> (Self, JoinHandle<usize>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(storage, receiver, None));
        (Self { sender }, handle)
    }

    /// Like [`PersistenceQueue::spawn`], also reporting rejected moves
    pub fn spawn_with_failures(
        storage: Arc<dyn Storage>,
    ) -> (Self, JoinHandle<usize>, mpsc::UnboundedReceiver<MoveFailure>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (failure_tx, failure_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(storage, receiver, Some(failure_tx)));
        (Self { sender }, handle, failure_rx)
    }
}

impl MoveSink for PersistenceQueue {
    fn submit(&mut self, request: MoveRequest) {
        if let Err(err) = self.sender.send(request) {
            warn!(card = %err.0.card_id, "persistence worker stopped, move dropped");
        }
    }
}

async fn run_worker(
    storage: Arc<dyn Storage>,
    mut receiver: mpsc::UnboundedReceiver<MoveRequest>,
    failures: Option<mpsc::UnboundedSender<MoveFailure>>,
) -> usize {
    let mut applied = 0;

    while let Some(request) = receiver.recv().await {
        match storage.move_card(&request).await {
            Ok(_) => {
                debug!(
                    card = %request.card_id,
                    column = %request.target_column,
                    position = request.target_position,
                    "move persisted"
                );
                applied += 1;
            }
            Err(e) => {
                warn!(card = %request.card_id, error = %e, "failed to persist move");
                if let Some(failures) = &failures {
                    if let Err(err) = failures.send(MoveFailure {
                        request,
                        error: e.to_string(),
                    }) {
                        debug!(card = %err.0.request.card_id, "failure receiver closed, not reported");
                    }
                }
            }
        }
    }

    applied
}
