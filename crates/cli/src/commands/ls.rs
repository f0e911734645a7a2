//! ls command - List objects
//!
//! Lists the objects under a prefix, in the order the service returns
//! them.

use clap::Args;
use serde::Serialize;

use oc_core::{Error, ObjectInfo, ObjectStore as _, ParsedPath, parse_path};

use crate::commands::client_for;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List objects
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Remote path (alias/bucket[/prefix])
    pub path: String,

    /// Summarize output (show totals at the end)
    #[arg(long)]
    pub summarize: bool,
}

/// JSON output for the ls command
#[derive(Debug, Serialize)]
struct LsOutput {
    items: Vec<ObjectInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
}

#[derive(Debug, Serialize)]
struct Summary {
    total_objects: usize,
    total_size_bytes: i64,
}

/// Execute the ls command
pub fn execute(args: LsArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let remote = match parse_path(&args.path) {
        Ok(ParsedPath::Remote(remote)) => remote,
        Ok(ParsedPath::Local(_)) => {
            formatter.error(&format!(
                "'{}' is a local path. Use format: alias/bucket[/prefix]",
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

    match client.list_objects(&remote.key) {
        Ok(objects) => {
            let total_size: i64 = objects.iter().map(|o| o.size).sum();
            let total = objects.len();

            if formatter.is_json() {
                formatter.json(&LsOutput {
                    summary: args.summarize.then_some(Summary {
                        total_objects: total,
                        total_size_bytes: total_size,
                    }),
                    items: objects,
                });
            } else {
                for object in &objects {
                    formatter.println(&format!(
                        "[{}] {:>10} {:<12} {}",
                        object.last_modified.strftime("%Y-%m-%d %H:%M:%S"),
                        object.size_human(),
                        object.storage_class,
                        object.key
                    ));
                }
                if args.summarize {
                    formatter.println(&format!(
                        "\nTotal: {} objects, {}",
                        total,
                        humansize::format_size(total_size.max(0) as u64, humansize::BINARY)
                    ));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            report_list_error(&e, &formatter);
            ExitCode::from_error(&e)
        }
    }
}

fn report_list_error(error: &Error, formatter: &Formatter) {
    match error {
        Error::Decode(_) => formatter.error(&format!("Listing response was malformed: {error}")),
        _ => formatter.error(&format!("Failed to list objects: {error}")),
    }
}
