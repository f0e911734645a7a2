//! share command - Generate a delegated-upload policy
//!
//! Prints a signed, time-limited policy an untrusted uploader (e.g. a
//! browser) can use for one constrained upload without the account
//! secret.

use clap::Args;

use oc_core::{ParsedPath, parse_path};

use crate::commands::client_for;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Generate a delegated-upload policy
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Remote path (alias/bucket[/key-prefix])
    pub path: String,

    /// Policy lifetime in seconds
    #[arg(long, default_value_t = 3600)]
    pub expires_in: i64,

    /// Maximum upload size in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    pub max_size: i64,
}

/// Execute the share command
pub fn execute(args: ShareArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let remote = match parse_path(&args.path) {
        Ok(ParsedPath::Remote(remote)) => remote,
        Ok(ParsedPath::Local(_)) => {
            formatter.error(&format!(
                "'{}' is a local path. Use format: alias/bucket[/key-prefix]",
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

    match client.generate_upload_policy(args.expires_in, args.max_size, &remote.key) {
        Ok(policy) => {
            if formatter.is_json() {
                formatter.json(&policy);
            } else {
                formatter.println(&format!("AccessKeyId : {}", policy.access_key_id));
                formatter.println(&format!("Policy      : {}", policy.policy));
                formatter.println(&format!("Signature   : {}", policy.signature));
                formatter.println(&format!("Bucket      : {}", policy.bucket));
                formatter.println(&format!("Endpoint    : {}", policy.endpoint));
                formatter.println(&format!("Expire      : {}", policy.expire));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to generate upload policy: {e}"));
            ExitCode::from_error(&e)
        }
    }
}
