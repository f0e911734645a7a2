//! CLI command definitions and execution
//!
//! Each command parses its path arguments, resolves an alias into an
//! OSS client, performs exactly one storage operation, and maps the
//! result to an exit code.

use clap::{Parser, Subcommand};

use oc_core::{AliasManager, RemotePath};
use oc_oss::OssClient;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod alias;
mod cat;
mod cp;
mod ls;
mod rm;
mod share;

/// oc - OSS CLI client
///
/// A command-line interface for Aliyun-OSS-compatible object storage
/// services.
#[derive(Parser, Debug)]
#[command(name = "oc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable progress indication
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage storage service aliases
    #[command(subcommand)]
    Alias(alias::AliasCommands),

    /// List objects in a bucket
    Ls(ls::LsArgs),

    /// Copy an object (local<->OSS)
    Cp(cp::CpArgs),

    /// Display object contents
    Cat(cat::CatArgs),

    /// Remove an object
    Rm(rm::RmArgs),

    /// Generate a delegated-upload policy
    Share(share::ShareArgs),
}

/// Execute the CLI command and return an exit code
pub fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        no_progress: cli.no_progress,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Alias(cmd) => alias::execute(cmd, output_config),
        Commands::Ls(args) => ls::execute(args, output_config),
        Commands::Cp(args) => cp::execute(args, output_config),
        Commands::Cat(args) => cat::execute(args, output_config),
        Commands::Rm(args) => rm::execute(args, output_config),
        Commands::Share(args) => share::execute(args, output_config),
    }
}

/// Resolve a remote path's alias into a bucket-bound client.
///
/// Reports the failure through the formatter and returns the exit code
/// the command should bail with.
fn client_for(path: &RemotePath, formatter: &Formatter) -> Result<OssClient, ExitCode> {
    let alias_manager = AliasManager::new().map_err(|e| {
        formatter.error(&format!("Failed to load aliases: {e}"));
        ExitCode::GeneralError
    })?;

    let alias = alias_manager.get(&path.alias).map_err(|_| {
        formatter.error(&format!("Alias '{}' not found", path.alias));
        ExitCode::NotFound
    })?;

    OssClient::from_alias(&alias, &path.bucket).map_err(|e| {
        formatter.error(&format!("Failed to create OSS client: {e}"));
        ExitCode::GeneralError
    })
}
