use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "patchbook")]
#[command(about = "Browse and load examples from the patchbook catalog")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.patchbook)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Extra example source (TOML or JSON), merged after configured sources
    #[arg(long = "source", value_name = "FILE", global = true)]
    pub sources: Vec<PathBuf>,

    /// Merge every *.toml / *.json source found below this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub source_dir: Option<PathBuf>,

    /// Refuse to build a catalog with integrity violations
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show category groups with their categories and subcategories
    Groups,

    /// List all categories (flattened) with example counts
    Categories,

    /// List examples, optionally filtered
    List {
        /// Category id (e.g., basics)
        #[arg(short, long)]
        category: Option<String>,

        /// Subcategory id (e.g., hello-world)
        #[arg(short, long)]
        subcategory: Option<String>,

        /// Glob matched against example ids (e.g., "hello-*")
        #[arg(short = 'm', long = "match", value_name = "GLOB")]
        pattern: Option<String>,
    },

    /// Print the content that would be loaded into the editor
    Show {
        /// Example id
        id: String,

        /// Print this file of a multi-file example instead of the main file
        #[arg(short, long, value_name = "PATH")]
        file: Option<String>,
    },

    /// List the files of an example
    Files {
        /// Example id
        id: String,
    },

    /// Check catalog integrity (unknown categories, duplicate ids, missing main files)
    Check,

    /// Export examples as JSON
    Export {
        /// Only export this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., catalog.policy)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., catalog.sources)
        key: String,

        /// Value to set (e.g., "strict" or "a.toml,b.json")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
