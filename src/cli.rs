//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NicheAtlas route resolver and view assembler
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root
    #[arg(short = 'C', long, default_value = "nicheatlas.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a path and print its route and view-model as JSON
    Resolve {
        /// Navigation path, e.g. `/category/tech-ai` or `#/shop`
        path: String,
    },

    /// Print the route table
    Routes,

    /// Load and validate the catalog, then print its counts
    Check,

    /// Print the navigation model as JSON
    Nav,

    /// Serve view-models as JSON over HTTP
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port to try first
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["nicheatlas", "resolve", "#/shop"]);
        assert!(matches!(cli.command, Commands::Resolve { ref path } if path == "#/shop"));
        assert_eq!(cli.config, PathBuf::from("nicheatlas.toml"));
        assert_eq!(cli.root, None);
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::parse_from(["nicheatlas", "-r", "site", "serve", "-i", "0.0.0.0", "-p", "8080"]);
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert!(matches!(
            cli.command,
            Commands::Serve { interface: Some(ref i), port: Some(8080) } if i == "0.0.0.0"
        ));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["nicheatlas", "-C", "x.toml"]).is_err());
    }
}
