use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drugai", bin_name = "drugai", version)]
#[command(about = "Browse, rank and run published biomolecular AI models", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Configuration directory (defaults to $DRUGAI_HOME, then the OS config dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List models, one page at a time
    #[command(alias = "ls", display_order = 1)]
    Models(BrowseArgs),

    /// List every tag in the catalog
    #[command(display_order = 2)]
    Tags,

    /// Show subscription plans
    #[command(alias = "plans", display_order = 3)]
    Pricing,

    /// Subscribe to the Pro plan
    #[command(display_order = 4)]
    Subscribe {
        /// Billing email for the checkout session
        #[arg(long)]
        email: Option<String>,
    },

    /// Run a prompt through the hosted inference endpoint
    #[command(alias = "run", display_order = 5)]
    Invoke {
        /// Prompt words (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// Show sign-in state and the configured API URL
    #[command(display_order = 6)]
    Status,

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (e.g. page-size-wide)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Only models carrying this tag ("All" for every model)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Case-insensitive substring of title or description
    #[arg(short, long)]
    pub search: Option<String>,

    /// trending, likes, citations or recency
    #[arg(long)]
    pub sort: Option<String>,

    /// Page to show (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Records per page (overrides the width-based size)
    #[arg(long)]
    pub page_size: Option<usize>,
}
