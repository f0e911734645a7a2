//! cat command - Display object contents
//!
//! Writes the object's bytes straight to stdout.

use std::io::{self, Write};

use clap::Args;

use oc_core::{ObjectStore as _, ParsedPath, parse_path};

use crate::commands::client_for;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Display object contents
#[derive(Args, Debug)]
pub struct CatArgs {
    /// Object path (alias/bucket/key)
    pub path: String,
}

/// Execute the cat command
pub fn execute(args: CatArgs, output_config: OutputConfig) -> ExitCode {
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

    match client.get_object(&remote.key) {
        Ok(data) => {
            // Raw bytes, not through the formatter, to keep binary
            // content intact.
            if let Err(e) = io::stdout().write_all(&data) {
                formatter.error(&format!("Failed to write to stdout: {e}"));
                return ExitCode::GeneralError;
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to read {}: {e}", args.path));
            ExitCode::from_error(&e)
        }
    }
}
