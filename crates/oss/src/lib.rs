//! oc-oss: OSS protocol adapter for the oc CLI client
//!
//! Implements the ObjectStore trait from oc-core against an
//! Aliyun-OSS-compatible HTTP service. This is the only crate that
//! knows the wire protocol: the canonical-string HMAC-SHA1 signing
//! scheme, the delegated-upload policy format, and the
//! `ListBucketResult` XML listing document.

pub mod client;
pub mod model;
pub mod policy;
pub mod sign;
pub mod transport;

pub use client::{Credentials, OssClient};
pub use policy::{Condition, PolicyDocument, UploadPolicy};
pub use transport::{Headers, HttpTransport, Request, Response, Transport};
