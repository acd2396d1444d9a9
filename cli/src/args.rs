use clap::{Parser, Subcommand};
use todo_core::{FilterField, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Manage a remote TODO list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Server hosting `/api/todos`.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one page of todos, optionally filtered.
    List {
        #[arg(long, default_value = "")]
        filter: String,

        #[arg(long, default_value = "description")]
        by: FilterField,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    Add {
        #[arg(long)]
        description: String,

        #[arg(long, default_value = "")]
        due: String,

        #[arg(long, default_value = "")]
        priority: String,
    },

    /// Change fields of an existing todo. Omitted fields keep their value.
    Edit {
        id: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        priority: Option<String>,
    },

    Delete {
        id: String,

        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults() {
        let cli = Cli::try_parse_from(["todo", "list"]).unwrap();
        match cli.command {
            Commands::List { filter, by, page } => {
                assert_eq!(filter, "");
                assert_eq!(by, FilterField::Description);
                assert_eq!(page, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_by_priority() {
        let cli = Cli::try_parse_from(["todo", "list", "--by", "priority", "--filter", "hi", "--page", "2"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::List { by: FilterField::Priority, page: 2, .. }
        ));
    }

    #[test]
    fn unknown_filter_field_is_rejected() {
        assert!(Cli::try_parse_from(["todo", "list", "--by", "due"]).is_err());
    }

    #[test]
    fn delete_takes_short_yes() {
        let cli = Cli::try_parse_from(["todo", "delete", "abc", "-y"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { yes: true, .. }));
    }

    #[test]
    fn api_url_flag_is_global() {
        let cli = Cli::try_parse_from(["todo", "add", "--description", "x", "--api-url", "http://h:1"])
            .unwrap();
        assert_eq!(cli.api_url, "http://h:1");
    }
}
