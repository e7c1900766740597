//! Persistence worker: runs store I/O off the UI thread.
//!
//! DESIGN
//! ======
//! The session builds a [`CanvasModel`] snapshot synchronously, then hands
//! it to a background task over a bounded queue. The task performs the I/O
//! and reports every outcome on a completion channel that the session
//! drains on its own schedule. Snapshots are immutable values, so no canvas
//! state is ever shared across the two sides.
//!
//! ERROR HANDLING
//! ==============
//! Saves are fire-and-forget: failures are logged and reported as
//! [`Completion::Failed`], never retried. A full queue drops the request
//! with a warning instead of blocking the caller.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use canvas::doc::CanvasModel;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::services::store::Store;

/// Work the session can ask for.
#[derive(Debug, Clone)]
pub enum Request {
    Save(CanvasModel),
    Load(String),
    Delete(String),
    SaveImage { id: String, bytes: Vec<u8> },
}

impl Request {
    fn label(&self) -> &'static str {
        match self {
            Self::Save(_) => "save",
            Self::Load(_) => "load",
            Self::Delete(_) => "delete",
            Self::SaveImage { .. } => "save_image",
        }
    }

    fn subject(&self) -> &str {
        match self {
            Self::Save(model) => &model.name,
            Self::Load(name) | Self::Delete(name) => name,
            Self::SaveImage { id, .. } => id,
        }
    }
}

/// Outcome of one request, delivered back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Saved { name: String },
    Loaded(CanvasModel),
    Deleted { name: String },
    ImageSaved { id: String },
    Failed { op: &'static str, subject: String, error: String },
}

/// Sending half held by the session.
pub type RequestSender = mpsc::Sender<Request>;
/// Receiving half held by the session.
pub type CompletionReceiver = mpsc::Receiver<Completion>;

/// Spawn the worker and return the request sender and completion receiver.
///
/// The worker exits once every sender is dropped and the queue is drained.
#[must_use]
pub fn spawn_persistence_worker(store: Store, queue_capacity: usize) -> (RequestSender, CompletionReceiver) {
    let capacity = queue_capacity.max(1);
    let (req_tx, mut req_rx) = mpsc::channel::<Request>(capacity);
    let (done_tx, done_rx) = mpsc::channel::<Completion>(capacity);

    info!(queue_capacity = capacity, root = %store.root().display(), "persistence worker configured");

    tokio::spawn(async move {
        while let Some(request) = req_rx.recv().await {
            let completion = perform(&store, request).await;
            if done_tx.send(completion).await.is_err() {
                debug!("completion receiver dropped; stopping persistence worker");
                break;
            }
        }
        debug!("persistence worker stopped");
    });

    (req_tx, done_rx)
}

async fn perform(store: &Store, request: Request) -> Completion {
    let op = request.label();
    let subject = request.subject().to_owned();
    let result = match request {
        Request::Save(model) => store.save(&model).await.map(|_| Completion::Saved { name: model.name }),
        Request::Load(name) => store.load(&name).await.map(Completion::Loaded),
        Request::Delete(name) => store.delete(&name).await.map(|()| Completion::Deleted { name }),
        Request::SaveImage { id, bytes } => store.save_image(&id, &bytes).await.map(|_| Completion::ImageSaved { id }),
    };

    result.unwrap_or_else(|e| {
        error!(op, subject = %subject, error = %e, "persistence request failed");
        Completion::Failed { op, subject, error: e.to_string() }
    })
}

/// Non-blocking enqueue. Returns false if the request was dropped.
pub fn enqueue(tx: &RequestSender, request: Request) -> bool {
    let op = request.label();
    match tx.try_send(request) {
        Ok(()) => true,
        Err(mpsc::error::TrySendError::Full(request)) => {
            warn!(op, subject = %request.subject(), "persistence queue full; dropping request");
            false
        }
        Err(mpsc::error::TrySendError::Closed(request)) => {
            warn!(op, subject = %request.subject(), "persistence worker gone; dropping request");
            false
        }
    }
}
