//! oc-core: Core library for the oc OSS CLI client
//!
//! This crate provides the backend-independent pieces of the oc CLI:
//! - Configuration file management
//! - Credential alias management
//! - Remote path parsing
//! - The ObjectStore trait and object metadata types
//!
//! It knows nothing about the OSS wire protocol or HTTP; the oc-oss
//! crate implements the ObjectStore trait on top of this crate.

pub mod alias;
pub mod config;
pub mod error;
pub mod path;
pub mod traits;

pub use alias::{Alias, AliasManager};
pub use config::{Config, ConfigManager};
pub use error::{Error, Result};
pub use path::{ParsedPath, RemotePath, parse_path};
pub use traits::{ObjectInfo, ObjectStore};
