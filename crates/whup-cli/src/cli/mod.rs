//! CLI for the whup uploader.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use whup_core::config;

use commands::{run_config, run_put};

/// Top-level CLI for the whup uploader.
#[derive(Debug, Parser)]
#[command(name = "whup")]
#[command(about = "whup: HTTP PUT uploader for WebHDFS-style storage endpoints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload files to the configured endpoint, one record per file.
    Put {
        /// Files to upload; each becomes one record named after the file.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Override the configured base URL for this run.
        #[arg(long)]
        base_url: Option<String>,

        /// Override the configured user for this run.
        #[arg(long)]
        user: Option<String>,

        /// Override the configured output directory for this run.
        #[arg(long)]
        output_dir: Option<String>,

        /// Upload up to N files concurrently (default 1).
        #[arg(long, default_value = "1", value_name = "N")]
        jobs: usize,
    },

    /// Show the config file path and effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        CliCommand::Put {
            files,
            base_url,
            user,
            output_dir,
            jobs,
        } => {
            let mut cfg = config::load_or_init()?;
            if let Some(v) = base_url {
                cfg.base_url = v;
            }
            if let Some(v) = user {
                cfg.user = v;
            }
            if let Some(v) = output_dir {
                cfg.output_directory = v;
            }
            run_put(cfg, files, jobs)
        }
        CliCommand::Config => run_config(),
        CliCommand::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "whup", &mut std::io::stdout());
            Ok(())
        }
    }
}
