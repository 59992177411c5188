//! CLI command definitions and dispatch for the `scoach` binary.
//!
//! Uses clap derive macros. Two real commands: `serve` runs the gateway,
//! `chat` runs the terminal client against one.

pub mod chat;
pub mod suggestions;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Classroom study coach: completion gateway and terminal chat client.
#[derive(Parser)]
#[command(name = "scoach", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the completion gateway.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 8017)]
        port: u16,

        /// Host interface to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Chat with the study coach from the terminal.
    Chat {
        /// Base URL of a running gateway.
        #[arg(long, default_value = "http://127.0.0.1:8017")]
        url: String,

        /// Project stage to tag questions with (e.g. "stage3").
        #[arg(long)]
        section: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
