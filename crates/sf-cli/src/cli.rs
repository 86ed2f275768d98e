//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// sqlferry - apply versioned SQL migration files to PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing migration scripts
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value = "./migrations",
        env = "MIGRATIONS_PATH"
    )]
    pub migrations_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply discovered migration scripts to the database
    Run(RunArgs),

    /// List migration scripts in application order
    Ls(LsArgs),
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Database host
    #[arg(long, env = "POSTGRES_HOST")]
    pub host: String,

    /// Database port
    #[arg(long, env = "POSTGRES_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database name
    #[arg(long, env = "POSTGRES_DB")]
    pub database: String,

    /// Database user
    #[arg(long, env = "POSTGRES_USER")]
    pub username: String,

    /// Database password
    #[arg(long, env = "POSTGRES_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Exit with code 2 if any script failed
    #[arg(long)]
    pub strict: bool,

    /// Print the full batch report as JSON instead of per-script lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Show script sizes alongside paths
    #[arg(short, long)]
    pub long: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
