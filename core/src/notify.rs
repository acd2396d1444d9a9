//! User-facing notices and confirmation prompts.
//!
//! The controller only needs two things from the UI: a transient success
//! message and a yes/no question whose answer arrives asynchronously.

use std::time::Duration;

use async_trait::async_trait;

/// How long a success notice stays up before dismissing itself.
pub const NOTICE_TIMEOUT: Duration = Duration::from_millis(1500);

/// A transient, auto-dismissing success message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub text: &'static str,
    pub timeout: Duration,
}

impl Notice {
    const fn success(title: &'static str, text: &'static str) -> Self {
        Self {
            title,
            text,
            timeout: NOTICE_TIMEOUT,
        }
    }

    pub const ADDED: Notice = Notice::success("Success!", "New Item Added to the list successfully");
    pub const UPDATED: Notice =
        Notice::success("Data Updated Successful!", "The operation was successfully updated.");
    pub const DELETED: Notice =
        Notice::success("Delete Successful!", "The operation was successfully deleted.");
}

/// A blocking yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub text: &'static str,
    pub confirm_label: &'static str,
}

impl Confirmation {
    pub const DELETE: Confirmation = Confirmation {
        title: "Confirmation",
        text: "Are you sure you want to delete it?",
        confirm_label: "Yes, delete it!",
    };
}

#[async_trait(?Send)]
pub trait Notifier {
    fn notify(&self, notice: &Notice);

    /// Resolves to `true` only if the user explicitly confirmed.
    async fn confirm(&self, prompt: &Confirmation) -> bool;
}
