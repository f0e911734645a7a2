//! Delegated-upload policy documents.
//!
//! A policy lets an untrusted uploader (typically a browser) perform
//! one constrained upload without ever holding the account secret. The
//! policy document is JSON, Base64-encoded, and signed with the same
//! HMAC-SHA1 scheme as requests; the server enforces the expiration
//! and the conditions.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use oc_core::Result;
use serde::{Deserialize, Serialize};

use crate::sign::sign_base64;

/// A single condition constraining the delegated upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// `["content-length-range", min, max]`
    ContentLengthRange(String, i64, i64),
    /// `{"key": "<prefix>"}`, restricts the upload path
    KeyPrefix { key: String },
}

impl Condition {
    /// Limit the uploaded object size to `0..=max` bytes
    pub fn content_length_range(max: i64) -> Self {
        Condition::ContentLengthRange("content-length-range".to_string(), 0, max)
    }

    /// Restrict the upload to keys under `prefix`
    pub fn key_prefix(prefix: impl Into<String>) -> Self {
        Condition::KeyPrefix { key: prefix.into() }
    }
}

/// The policy document handed to the server for verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Expiration as an RFC-3339 UTC timestamp
    pub expiration: String,
    /// Conditions, in the order they were declared
    pub conditions: Vec<Condition>,
}

impl PolicyDocument {
    /// Build the standard upload policy: a size limit and a key prefix.
    pub fn new(expiration: jiff::Timestamp, max_file_size: i64, key_prefix: &str) -> Self {
        Self {
            expiration: expiration.to_string(),
            conditions: vec![
                Condition::content_length_range(max_file_size),
                Condition::key_prefix(key_prefix),
            ],
        }
    }

    /// Serialize to JSON and Base64-encode.
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(BASE64.encode(json))
    }

    /// Decode a Base64-encoded policy back into its document form.
    pub fn decode(encoded: &str) -> Result<Self> {
        let json = BASE64
            .decode(encoded)
            .map_err(|e| oc_core::Error::General(format!("invalid policy encoding: {e}")))?;
        Ok(serde_json::from_slice(&json)?)
    }
}

/// A signed, self-contained upload grant for a delegated uploader.
///
/// Serializes to the wire shape consumed by browser upload widgets:
/// `{accessKeyId, policy, signature, bucket, endpoint, expire}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPolicy {
    /// Access key identifier of the granting account
    pub access_key_id: String,
    /// Base64-encoded JSON policy document
    pub policy: String,
    /// Base64(HMAC-SHA1(secret, policy))
    pub signature: String,
    /// Target bucket
    pub bucket: String,
    /// Service endpoint
    pub endpoint: String,
    /// Expiration in epoch seconds
    pub expire: i64,
}

impl UploadPolicy {
    /// Sign an encoded policy with the account secret.
    pub fn sign(policy_base64: &str, secret: &str) -> String {
        sign_base64(secret, policy_base64)
    }
}
