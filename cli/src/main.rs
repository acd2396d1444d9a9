mod args;
mod terminal;
mod transport;

use anyhow::{bail, Context, Result};
use clap::Parser;
use todo_core::{HttpGateway, TodoClient, TodoController, TodoId};

use args::{Cli, Commands};
use terminal::{render_page, TerminalNotifier};
use transport::UreqTransport;

type Controller = TodoController<HttpGateway<UreqTransport>, TerminalNotifier>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let gateway = HttpGateway::new(TodoClient::new(&cli.api_url), UreqTransport::new());
    let mut controller = TodoController::new(gateway, TerminalNotifier::new(assume_yes));
    controller
        .init()
        .await
        .with_context(|| format!("load todos from {}", cli.api_url))?;

    run(&mut controller, cli.command).await
}

async fn run(controller: &mut Controller, command: Commands) -> Result<()> {
    match command {
        Commands::List { filter, by, page } => {
            let view = controller.view_mut();
            view.set_filter_field(by);
            view.set_filter_text(filter);
            for _ in 1..page {
                view.next_page();
            }
            println!("{}", render_page(controller.view()));
        }
        Commands::Add {
            description,
            due,
            priority,
        } => {
            let view = controller.view_mut();
            view.toggle_add_form();
            let form = view.form_mut();
            form.description = description;
            form.due_date = due;
            form.priority = priority;
            let created = controller.submit_add().await.context("add todo")?;
            println!("{}", created.id);
        }
        Commands::Edit {
            id,
            description,
            due,
            priority,
        } => {
            let id = TodoId::new(id);
            let Some(existing) = controller.view().find(&id).cloned() else {
                bail!("no todo with id {id}");
            };
            let view = controller.view_mut();
            view.open_edit_form(&existing);
            let form = view.form_mut();
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(due) = due {
                form.due_date = due;
            }
            if let Some(priority) = priority {
                form.priority = priority;
            }
            controller.submit_edit().await.context("edit todo")?;
        }
        Commands::Delete { id, .. } => {
            let id = TodoId::new(id);
            if !controller.delete(&id).await.context("delete todo")? {
                println!("cancelled");
            }
        }
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("todo={level},todo_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
