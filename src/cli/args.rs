//! CLI argument definitions using clap
//!
//! Commands:
//! - codexplain serve [--host H] [--port P]
//! - codexplain explain --file <path> [--detail <level>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::explain::DetailLevel;

/// codexplain - A self-hostable code explanation service
#[derive(Parser, Debug)]
#[command(name = "codexplain")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the codexplain HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Explain a source file and exit
    Explain {
        /// Path to the source file ("-" reads stdin)
        #[arg(long)]
        file: PathBuf,

        /// Explanation detail level
        #[arg(long, value_enum, default_value_t = DetailLevel::Medium)]
        detail: DetailLevel,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["codexplain", "serve"]).unwrap();
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8080);
            }
            _ => panic!("Expected Serve"),
        }
    }

    #[test]
    fn test_explain_args() {
        let cli = Cli::try_parse_from([
            "codexplain",
            "explain",
            "--file",
            "main.rs",
            "--detail",
            "brief",
        ])
        .unwrap();

        match cli.command {
            Command::Explain { file, detail } => {
                assert_eq!(file, PathBuf::from("main.rs"));
                assert_eq!(detail, DetailLevel::Brief);
            }
            _ => panic!("Expected Explain"),
        }
    }

    #[test]
    fn test_explain_requires_file() {
        assert!(Cli::try_parse_from(["codexplain", "explain"]).is_err());
    }
}
