//! ObjectStore trait definition
//!
//! The interface the CLI programs against. A store is bound to a single
//! bucket on a single endpoint; each method performs exactly one
//! blocking HTTP exchange and returns, with no internal retries.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metadata for a stored object, as reported by a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Object key
    pub key: String,

    /// Last modified timestamp
    pub last_modified: jiff::Timestamp,

    /// ETag, without surrounding quotes
    pub etag: String,

    /// Size in bytes
    pub size: i64,

    /// Storage class reported by the service
    pub storage_class: String,
}

impl ObjectInfo {
    /// Human-readable size, e.g. "1.5 MiB"
    pub fn size_human(&self) -> String {
        humansize::format_size(self.size.max(0) as u64, humansize::BINARY)
    }
}

/// Bucket-scoped object storage operations.
///
/// Implemented by the OSS adapter; small enough to stub by hand in
/// tests. No operation sorts, retries, or paginates; results come
/// back exactly as the service returned them.
pub trait ObjectStore {
    /// Upload an object. Returns the canonical object URL on success.
    fn put_object(&self, key: &str, data: Vec<u8>, content_type: Option<&str>) -> Result<String>;

    /// Download an object's content.
    fn get_object(&self, key: &str) -> Result<Vec<u8>>;

    /// List objects under a prefix, in service order.
    fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>>;

    /// Delete an object.
    fn delete_object(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(size: i64) -> ObjectInfo {
        ObjectInfo {
            key: "a.txt".into(),
            last_modified: jiff::Timestamp::UNIX_EPOCH,
            etag: "d41d8cd98f00b204e9800998ecf8427e".into(),
            size,
            storage_class: "Standard".into(),
        }
    }

    #[test]
    fn test_size_human() {
        assert_eq!(info(1024).size_human(), "1 KiB");
        assert_eq!(info(0).size_human(), "0 B");
    }

    #[test]
    fn test_object_info_serializes_timestamp_as_rfc3339() {
        let json = serde_json::to_string(&info(10)).unwrap();
        assert!(json.contains("1970-01-01T00:00:00Z"));
        assert!(json.contains("\"size\":10"));
    }
}
