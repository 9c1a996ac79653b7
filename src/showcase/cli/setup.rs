use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "showcase", bin_name = "showcase", version)]
#[command(about = "Browse the component-library demo catalogs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read catalogs from this directory (<view>.json), overriding config
    #[arg(long, global = true, value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the items of a view, optionally filtered
    #[command(alias = "ls")]
    Browse {
        /// View to browse (home, library, discover, playlists)
        view: Option<String>,

        /// Only show this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive text to look for in titles, descriptions and tags
        #[arg(short, long, num_args = 1..)]
        search: Vec<String>,

        /// Toggle the like on an item before listing (repeatable)
        #[arg(long, value_name = "ID")]
        like: Vec<String>,

        /// Show only liked items
        #[arg(long)]
        liked: bool,
    },

    /// List the categories of a view
    #[command(alias = "cats")]
    Categories {
        /// View to inspect
        view: Option<String>,
    },

    /// List the available views
    Views,

    /// Show the account profile, optionally editing it
    Account {
        /// New full name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Interactive session reading one command per line from stdin
    #[command(alias = "sh")]
    Shell {
        /// View to start in
        view: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-view, trim-query, catalog-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the visible items
    #[command(alias = "ls")]
    List,
    /// Select a category ("all" to show every category)
    #[command(alias = "cat")]
    Category { name: String },
    /// Set the search text (no text clears it)
    #[command(alias = "s")]
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Reset category and search
    Clear,
    /// Toggle the like on an item
    Like { id: String },
    /// Show liked items
    Liked,
    /// Add a product to the cart (home view)
    Cart { id: String },
    /// Show the category bar
    Categories,
    /// Navigate to another view
    #[command(alias = "go")]
    Open { view: String },
    /// Start editing the profile (account view)
    Edit,
    /// Set a draft field: name or email
    Set {
        field: String,
        #[arg(default_value = "")]
        value: String,
    },
    /// Commit the draft
    Save,
    /// Discard the draft
    Cancel,
    /// Show the profile (account view)
    Profile,
    /// Show available commands
    Help,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Parses a shell line into a command. `Ok(None)` for blank lines.
///
/// Only the command word (and the field name of `set`) is split off. The text after it is
/// passed through as typed, so repeated spaces and leading dashes reach search queries,
/// category names and profile values unchanged.
pub fn parse_shell_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let line = line.trim_start();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = split_word(line);

    let resolved = ShellLine::command()
        .find_subcommand(word)
        .map(|sub| sub.get_name().to_string());
    let args: Vec<&str> = match resolved.as_deref() {
        Some("category" | "search") if !rest.is_empty() => vec![word, "--", rest],
        Some("set") => match split_word(rest.trim_start()) {
            ("", _) => vec![word],
            (field, "") => vec![word, "--", field],
            (field, value) => vec![word, "--", field, value],
        },
        _ => std::iter::once(word).chain(rest.split_whitespace()).collect(),
    };
    ShellLine::try_parse_from(args).map(|parsed| Some(parsed.command))
}

/// Splits at the first whitespace character, which is dropped.
fn split_word(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace).unwrap_or((line, ""))
}
