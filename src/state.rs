//! UI-thread session: one open canvas plus its line to the persistence worker.
//!
//! The session owns the [`Engine`]. Gestures are applied synchronously;
//! saving takes a snapshot on this thread and hands the immutable record to
//! the worker. Completions are applied only when the session drains them,
//! so a load can never race an in-flight gesture.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use canvas::engine::{Action, Engine};
use canvas::input::{DropSession, Gesture};
use canvas::widget::WidgetId;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::services::collection::now_rfc3339;
use crate::services::persistence::{Completion, CompletionReceiver, Request, RequestSender, enqueue};
use crate::services::store::StoreError;

pub struct Session {
    engine: Engine,
    requests: RequestSender,
    completions: CompletionReceiver,
    dirty: bool,
}

impl Session {
    #[must_use]
    pub fn new(engine: Engine, requests: RequestSender, completions: CompletionReceiver) -> Self {
        Self { engine, requests, completions, dirty: false }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Whether the canvas changed since the last save was queued.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Apply a gesture and remember whether it changed the document.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Vec<Action> {
        let actions = self.engine.handle_gesture(gesture);
        self.track(&actions);
        actions
    }

    pub fn perform_drop(&mut self, drop: DropSession) -> Vec<Action> {
        let actions = self.engine.perform_drop(drop);
        self.track(&actions);
        actions
    }

    /// Commit a widget's edit draft.
    pub fn finish_editing(&mut self, id: WidgetId) -> Vec<Action> {
        let actions = self.engine.finish_editing(id);
        self.track(&actions);
        actions
    }

    fn track(&mut self, actions: &[Action]) {
        let changed = actions.iter().any(|a| {
            matches!(
                a,
                Action::WidgetCreated(_) | Action::WidgetUpdated { .. } | Action::WidgetDeleted { .. } | Action::EditCommitted { .. }
            )
        });
        if changed {
            self.dirty = true;
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Stamp the canvas, snapshot it, and queue a save.
    ///
    /// Returns whether the save was queued.
    pub fn save(&mut self) -> Result<bool, StoreError> {
        let now = now_rfc3339()?;
        let meta = &mut self.engine.meta;
        if meta.created_at.is_empty() {
            meta.created_at.clone_from(&now);
        }
        meta.last_modified_at = now;

        let model = self.engine.snapshot();
        debug!(name = %model.name, widgets = model.widget_count(), "queueing save");
        let queued = enqueue(&self.requests, Request::Save(model));
        if queued {
            self.dirty = false;
        }
        Ok(queued)
    }

    /// Queue a load of `name`. The canvas is replaced when the completion is applied.
    pub fn request_load(&self, name: &str) -> bool {
        enqueue(&self.requests, Request::Load(name.to_owned()))
    }

    /// Queue raw image bytes for `media/<id>.png`.
    pub fn save_image(&self, id: &str, bytes: Vec<u8>) -> bool {
        enqueue(&self.requests, Request::SaveImage { id: id.to_owned(), bytes })
    }

    /// React to one worker completion.
    pub fn apply(&mut self, completion: &Completion) -> Vec<Action> {
        match completion {
            Completion::Loaded(model) => {
                info!(name = %model.name, "applying loaded canvas");
                self.dirty = false;
                self.engine.restore(model)
            }
            Completion::Failed { op, subject, error } => {
                warn!(op, subject = %subject, error = %error, "persistence request failed");
                Vec::new()
            }
            Completion::Saved { .. } | Completion::Deleted { .. } | Completion::ImageSaved { .. } => {
                debug!(?completion, "persistence request completed");
                Vec::new()
            }
        }
    }

    /// Drain every completion that is ready without waiting.
    pub fn poll_completions(&mut self) -> Vec<Completion> {
        let mut drained = Vec::new();
        loop {
            match self.completions.try_recv() {
                Ok(completion) => {
                    self.apply(&completion);
                    drained.push(completion);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("persistence worker disconnected");
                    break;
                }
            }
        }
        drained
    }

    /// Wait for the next completion and apply it. `None` once the worker is gone.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let completion = self.completions.recv().await?;
        self.apply(&completion);
        Some(completion)
    }
}
