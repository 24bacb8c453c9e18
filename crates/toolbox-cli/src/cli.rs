//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Toolbox - find the right utility tool
#[derive(Parser, Debug)]
#[command(name = "toolbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./toolbox.toml when present)
    #[arg(short, long, global = true, env = "TOOLBOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Search tools by name, id, tags, description or category
    ///
    /// Matching tolerates small typos. Without a query every tool is
    /// listed alphabetically.
    ///
    /// Examples:
    ///   toolbox search json
    ///   toolbox search pasword       # still finds the password tools
    ///   toolbox search pdf merge --limit 3
    Search {
        /// Free-text query
        query: Vec<String>,

        /// Show at most this many results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show detailed information about a tool
    Show {
        /// Tool id (e.g., "json-formatter")
        id: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List tools grouped by category
    ///
    /// Examples:
    ///   toolbox list
    ///   toolbox list --category encoder
    List {
        /// Filter by category (encoder, converter, formatter, generator,
        /// calculator, designer, security, developer, other)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List categories with their tool counts
    Categories,

    /// Check the catalog (built-ins plus configured extras) for errors
    Validate,

    /// Generate shell completions
    ///
    /// Examples:
    ///   toolbox completions bash > ~/.local/share/bash-completion/completions/toolbox
    ///   toolbox completions zsh > ~/.zfunc/_toolbox
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_words() {
        let cli = Cli::try_parse_from(["toolbox", "search", "pdf", "merge", "--limit", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                query: vec!["pdf".into(), "merge".into()],
                limit: Some(3),
                json: false,
            })
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["toolbox", "list", "-v", "--config", "alt.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_parse_list_category() {
        let cli = Cli::try_parse_from(["toolbox", "list", "-C", "encoder", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                category: Some("encoder".into()),
                json: true,
            })
        );
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["toolbox", "show"]).is_err());
    }
}
