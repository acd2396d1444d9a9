//! Terminal rendering and the stdin/stdout `Notifier`.

use std::fmt::Write as _;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use todo_core::{Confirmation, Notice, Notifier, Todo, TodoView};
use tracing::warn;

pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait(?Send)]
impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        println!("{} {}", notice.title, notice.text);
    }

    async fn confirm(&self, prompt: &Confirmation) -> bool {
        if self.assume_yes {
            return true;
        }
        let question = format!("{}: {} [{} y/N] ", prompt.title, prompt.text, prompt.confirm_label);
        let mut stdout = tokio::io::stdout();
        if stdout.write_all(question.as_bytes()).await.is_err() || stdout.flush().await.is_err() {
            return false;
        }
        let mut line = String::new();
        match BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
            Ok(_) => is_yes(&line),
            Err(err) => {
                warn!(error = %err, "could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn format_row(todo: &Todo) -> String {
    format!(
        "{:<36}  {:<40}  {:<10}  {}",
        todo.id, todo.description, todo.due_date, todo.priority
    )
}

/// The current page followed by a position footer.
pub fn render_page(view: &TodoView) -> String {
    let mut out = String::new();
    for todo in view.page_items() {
        let _ = writeln!(out, "{}", format_row(todo));
    }
    let _ = write!(
        out,
        "page {} of {} ({} matching, {} total)",
        view.current_page(),
        view.total_pages().max(1),
        view.filtered().len(),
        view.todos().len()
    );
    out
}
