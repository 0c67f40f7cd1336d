//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zenmodes_core::{OptionKey, SendersCategory};

/// zenmodes - Choose who can interrupt each Do Not Disturb mode
#[derive(Parser, Debug)]
#[command(name = "zenmodes")]
#[command(about = "Choose who can interrupt each Do Not Disturb mode", long_about = None)]
pub struct Args {
    /// Project directory containing .zenmodes/ (defaults to the current directory)
    #[arg(long, value_name = "DIR", global = true)]
    pub project: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create .zenmodes/config.toml with defaults
    Init,

    /// List modes and who can interrupt them
    List,

    /// Show the calls or messages senders screen of a mode
    Show {
        /// Mode id
        mode: String,

        /// calls or messages
        category: SendersCategory,
    },

    /// Click an option on a senders screen and save the result
    Click {
        /// Mode id
        mode: String,

        /// calls or messages
        category: SendersCategory,

        /// Option id, e.g. senders_contacts or the short form contacts
        option: OptionKey,
    },
}
