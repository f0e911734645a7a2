//! Alias management commands
//!
//! Aliases are named OSS endpoints with their credentials. Keys can be
//! passed as arguments or picked up from the environment.

use clap::Subcommand;
use serde::Serialize;

use oc_core::{Alias, AliasManager};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Alias subcommands
#[derive(Subcommand, Debug)]
pub enum AliasCommands {
    /// Add or update an alias
    Set(SetArgs),

    /// List all configured aliases
    List,

    /// Remove an alias
    Remove(RemoveArgs),
}

/// Arguments for the `alias set` command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Alias name (e.g., "hangzhou")
    pub name: String,

    /// OSS endpoint host (e.g., "oss-cn-hangzhou.aliyuncs.com")
    pub endpoint: String,

    /// Access key identifier
    #[arg(env = "OSS_ACCESS_KEY_ID")]
    pub access_key_id: String,

    /// Access key secret
    #[arg(env = "OSS_ACCESS_KEY_SECRET", hide_env_values = true)]
    pub access_key_secret: String,

    /// Service region
    #[arg(long, default_value = "cn-hangzhou")]
    pub region: String,
}

/// Arguments for the `alias remove` command
#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Alias name to remove
    pub name: String,
}

/// Listing row; the secret is never echoed back
#[derive(Debug, Serialize)]
struct AliasOutput {
    name: String,
    endpoint: String,
    access_key_id: String,
    region: String,
}

impl From<Alias> for AliasOutput {
    fn from(alias: Alias) -> Self {
        Self {
            name: alias.name,
            endpoint: alias.endpoint,
            access_key_id: alias.access_key_id,
            region: alias.region,
        }
    }
}

/// Execute an alias subcommand
pub fn execute(command: AliasCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let manager = match AliasManager::new() {
        Ok(m) => m,
        Err(e) => {
            formatter.error(&format!("Failed to open configuration: {e}"));
            return ExitCode::GeneralError;
        }
    };

    match command {
        AliasCommands::Set(args) => {
            let mut alias = Alias::new(
                &args.name,
                &args.endpoint,
                &args.access_key_id,
                &args.access_key_secret,
            );
            alias.region = args.region;

            match manager.set(alias) {
                Ok(()) => {
                    formatter.success(&format!("Alias '{}' saved", args.name));
                    ExitCode::Success
                }
                Err(e) => {
                    formatter.error(&format!("Failed to save alias: {e}"));
                    ExitCode::from_error(&e)
                }
            }
        }
        AliasCommands::List => match manager.list() {
            Ok(aliases) => {
                let rows: Vec<AliasOutput> = aliases.into_iter().map(Into::into).collect();
                if formatter.is_json() {
                    formatter.json(&rows);
                } else {
                    for row in &rows {
                        formatter.println(&format!(
                            "{}\t{}\t{}\t{}",
                            row.name, row.endpoint, row.access_key_id, row.region
                        ));
                    }
                }
                ExitCode::Success
            }
            Err(e) => {
                formatter.error(&format!("Failed to list aliases: {e}"));
                ExitCode::from_error(&e)
            }
        },
        AliasCommands::Remove(args) => match manager.remove(&args.name) {
            Ok(()) => {
                formatter.success(&format!("Alias '{}' removed", args.name));
                ExitCode::Success
            }
            Err(e) => {
                formatter.error(&format!("Failed to remove alias: {e}"));
                ExitCode::from_error(&e)
            }
        },
    }
}
