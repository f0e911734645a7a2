//! rm command - Remove an object
//!
//! One delete is one HTTP exchange; the service confirms with
//! 204 No Content and nothing else counts as success.

use clap::Args;
use serde::Serialize;

use oc_core::{ObjectStore as _, ParsedPath, parse_path};

use crate::commands::client_for;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Remove an object
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Object path (alias/bucket/key)
    pub path: String,
}

#[derive(Debug, Serialize)]
struct RmOutput {
    status: &'static str,
    path: String,
}

/// Execute the rm command
pub fn execute(args: RmArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let remote = match parse_path(&args.path) {
        Ok(ParsedPath::Remote(remote)) if !remote.key.is_empty() => remote,
        Ok(_) => {
            formatter.error(&format!(
                "Invalid path '{}'. Expected: alias/bucket/key",
                args.path
            ));
            return ExitCode::UsageError;
        }
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::UsageError;
        }
    };

    let client = match client_for(&remote, &formatter) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match client.delete_object(&remote.key) {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&RmOutput {
                    status: "removed",
                    path: args.path,
                });
            } else {
                formatter.success(&format!("Removed {}", args.path));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to remove {}: {e}", args.path));
            ExitCode::from_error(&e)
        }
    }
}
