//! oc - OSS CLI client
//!
//! A command-line interface for Aliyun-OSS-compatible object storage
//! services.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use oss_cli::commands::{self, Cli};

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let exit_code = commands::execute(cli);

    std::process::exit(exit_code.as_i32());
}
