use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DEFAULT_BASE_URL;
use crate::services::LinkKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "chess-results tournament page scraper")]
pub struct Cli {
    /// Base URL of the results site
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// List the tournaments found in a saved search results page
    Search {
        /// Path to the saved HTML page
        file: PathBuf,
    },
    /// Extract tournament info from a saved tournament page
    Tournament {
        /// Tournament key
        key: String,
        /// Path to the saved HTML page
        file: PathBuf,
    },
    /// Build a link for a tournament key
    Link {
        /// Tournament key
        key: String,
        #[arg(short, long, value_enum, default_value_t = LinkKind::Homepage)]
        kind: LinkKind,
        /// Round number (required for round links, defaults to 9 for excel links)
        #[arg(short, long)]
        round: Option<u32>,
    },
    /// Print the tournament key of a tournament URL
    Key {
        url: String,
    },
    /// Check whether a URL is a tournament link
    Check {
        url: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
