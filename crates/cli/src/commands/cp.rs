//! cp command - Copy a single object
//!
//! Uploads (local -> OSS) or downloads (OSS -> local). One copy is one
//! HTTP exchange; there is no multipart or resumable path, and a failed
//! download leaves its destination indeterminate.

use std::path::Path;

use clap::Args;
use serde::Serialize;

use oc_core::{ObjectStore as _, ParsedPath, RemotePath, parse_path};

use crate::commands::client_for;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, ProgressSpinner};

/// Copy an object
#[derive(Args, Debug)]
pub struct CpArgs {
    /// Source path (local path or alias/bucket/key)
    pub source: String,

    /// Destination path (local path or alias/bucket/key)
    pub target: String,

    /// Content type for uploads (default: application/octet-stream)
    #[arg(long)]
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize)]
struct CpOutput {
    status: &'static str,
    source: String,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    size_bytes: usize,
}

/// Execute the cp command
pub fn execute(args: CpArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());

    let source = match parse_path(&args.source) {
        Ok(p) => p,
        Err(e) => {
            formatter.error(&format!("Invalid source path: {e}"));
            return ExitCode::UsageError;
        }
    };

    let target = match parse_path(&args.target) {
        Ok(p) => p,
        Err(e) => {
            formatter.error(&format!("Invalid target path: {e}"));
            return ExitCode::UsageError;
        }
    };

    match (&source, &target) {
        (ParsedPath::Local(src), ParsedPath::Remote(dst)) => {
            upload(src, dst, &args, &formatter, &output_config)
        }
        (ParsedPath::Remote(src), ParsedPath::Local(dst)) => {
            download(src, dst, &formatter, &output_config)
        }
        (ParsedPath::Remote(_), ParsedPath::Remote(_)) => {
            formatter.error("Remote-to-remote copy is not supported.");
            ExitCode::UsageError
        }
        (ParsedPath::Local(_), ParsedPath::Local(_)) => {
            formatter.error("Cannot copy between two local paths. Use the system cp command.");
            ExitCode::UsageError
        }
    }
}

fn upload(
    src: &Path,
    dst: &RemotePath,
    args: &CpArgs,
    formatter: &Formatter,
    output_config: &OutputConfig,
) -> ExitCode {
    if dst.key.is_empty() {
        formatter.error("Upload target must include an object key: alias/bucket/key");
        return ExitCode::UsageError;
    }

    let data = match std::fs::read(src) {
        Ok(data) => data,
        Err(e) => {
            formatter.error(&format!("Failed to read {}: {e}", src.display()));
            return ExitCode::GeneralError;
        }
    };
    let size = data.len();

    let client = match client_for(dst, formatter) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let spinner = ProgressSpinner::start(output_config, &format!("Uploading {}", src.display()));
    let result = client.put_object(&dst.key, data, args.content_type.as_deref());
    spinner.finish();

    match result {
        Ok(url) => {
            if formatter.is_json() {
                formatter.json(&CpOutput {
                    status: "uploaded",
                    source: src.display().to_string(),
                    target: dst.to_string(),
                    url: Some(url),
                    size_bytes: size,
                });
            } else {
                formatter.success(&format!("{} -> {url}", src.display()));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Upload failed: {e}"));
            ExitCode::from_error(&e)
        }
    }
}

fn download(
    src: &RemotePath,
    dst: &Path,
    formatter: &Formatter,
    output_config: &OutputConfig,
) -> ExitCode {
    if src.key.is_empty() {
        formatter.error("Download source must include an object key: alias/bucket/key");
        return ExitCode::UsageError;
    }

    let client = match client_for(src, formatter) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let spinner = ProgressSpinner::start(output_config, &format!("Downloading {src}"));
    let result = client.get_object(&src.key);
    spinner.finish();

    let data = match result {
        Ok(data) => data,
        Err(e) => {
            formatter.error(&format!("Download failed: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    if let Err(e) = std::fs::write(dst, &data) {
        formatter.error(&format!("Failed to write {}: {e}", dst.display()));
        return ExitCode::GeneralError;
    }

    if formatter.is_json() {
        formatter.json(&CpOutput {
            status: "downloaded",
            source: src.to_string(),
            target: dst.display().to_string(),
            url: None,
            size_bytes: data.len(),
        });
    } else {
        formatter.success(&format!("{src} -> {}", dst.display()));
    }
    ExitCode::Success
}
