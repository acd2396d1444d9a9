//! Orchestrates gateway calls in response to user actions.
//!
//! # Design
//! Every mutation follows the same shape: build the payload from the form,
//! make one gateway call, and only on success touch the view (notice, close
//! form, clear fields) before reloading the whole collection. A failure is
//! logged and returned; the view is exactly what it was before the call.
//! The local collection is never patched in place.

use tracing::{debug, error, info};

use crate::error::ControllerError;
use crate::gateway::TodoGateway;
use crate::notify::{Confirmation, Notice, Notifier};
use crate::types::{Todo, TodoId};
use crate::view::TodoView;

pub struct TodoController<G, N> {
    gateway: G,
    notifier: N,
    view: TodoView,
}

impl<G: TodoGateway, N: Notifier> TodoController<G, N> {
    pub fn new(gateway: G, notifier: N) -> Self {
        Self {
            gateway,
            notifier,
            view: TodoView::new(),
        }
    }

    pub fn view(&self) -> &TodoView {
        &self.view
    }

    /// Filter, pagination and form edits go straight to the view.
    pub fn view_mut(&mut self) -> &mut TodoView {
        &mut self.view
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// First load on activation.
    pub async fn init(&mut self) -> Result<(), ControllerError> {
        self.fetch_todos().await
    }

    /// Reload the full collection. On failure the previous collection stays.
    pub async fn fetch_todos(&mut self) -> Result<(), ControllerError> {
        match self.gateway.list().await {
            Ok(todos) => {
                debug!(count = todos.len(), "fetched todos");
                self.view.replace_todos(todos);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "error fetching todo items");
                Err(err.into())
            }
        }
    }

    /// Create a todo from the form. The form stays open with its contents if
    /// the server rejects it.
    pub async fn submit_add(&mut self) -> Result<Todo, ControllerError> {
        let new_todo = self.view.form().to_new_todo();
        let created = self
            .gateway
            .create(&new_todo)
            .await
            .inspect_err(|err| error!(error = %err, "error adding todo"))?;

        info!(id = %created.id, "todo added");
        self.notifier.notify(&Notice::ADDED);
        self.view.cancel();
        self.refresh_after_mutation().await;
        Ok(created)
    }

    /// Save the form over the item currently open for editing.
    pub async fn submit_edit(&mut self) -> Result<Todo, ControllerError> {
        let Some(id) = self.view.edit_target().cloned() else {
            error!("edit submitted with no todo open");
            return Err(ControllerError::NoEditTarget);
        };
        let todo = self.view.form().to_todo(id);
        let updated = self
            .gateway
            .update(&todo)
            .await
            .inspect_err(|err| error!(id = %todo.id, error = %err, "failed to edit todo"))?;

        info!(id = %updated.id, "todo updated");
        self.notifier.notify(&Notice::UPDATED);
        self.view.cancel();
        self.refresh_after_mutation().await;
        Ok(updated)
    }

    /// Delete after the user confirms. Returns `Ok(false)` when declined,
    /// in which case no request is made.
    pub async fn delete(&mut self, id: &TodoId) -> Result<bool, ControllerError> {
        if !self.notifier.confirm(&Confirmation::DELETE).await {
            debug!(%id, "delete declined");
            return Ok(false);
        }
        self.gateway
            .delete(id)
            .await
            .inspect_err(|err| error!(%id, error = %err, "failed to delete todo"))?;

        info!(%id, "todo deleted");
        self.notifier.notify(&Notice::DELETED);
        self.refresh_after_mutation().await;
        Ok(true)
    }

    pub fn cancel(&mut self) {
        self.view.cancel();
    }

    /// The mutation already succeeded; a failed reload only leaves the view
    /// stale, so it is logged (by `fetch_todos`) and swallowed.
    async fn refresh_after_mutation(&mut self) {
        let _ = self.fetch_todos().await;
    }
}

