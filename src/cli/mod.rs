//! CLI module for basicweb

pub mod serve;

use clap::{Parser, Subcommand};

/// Basic web login and registration pages
#[derive(Parser)]
#[command(name = "basicweb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve(serve::ServeArgs),
}
