//! Wire model for the listing response.
//!
//! The service returns listings as a `ListBucketResult` XML document.
//! These types mirror the document exactly; conversion to the
//! backend-independent [`ObjectInfo`] happens at the boundary, and a
//! document that does not match this shape is a decode error rather
//! than a silently defaulted value.

use oc_core::ObjectInfo;
use serde::Deserialize;

/// Root element of the listing response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBucketResult {
    /// Bucket name
    pub name: String,

    /// Prefix the listing was filtered by
    #[serde(default)]
    pub prefix: String,

    /// Pagination marker
    #[serde(default)]
    pub marker: String,

    /// Maximum keys the service would return
    #[serde(default)]
    pub max_keys: i32,

    /// Listed objects, in service order
    #[serde(default)]
    pub contents: Vec<Contents>,
}

/// One `Contents` element of the listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contents {
    pub key: String,
    pub last_modified: jiff::Timestamp,
    pub e_tag: String,
    pub size: i64,
    #[serde(default)]
    pub storage_class: String,
}

impl From<Contents> for ObjectInfo {
    fn from(contents: Contents) -> Self {
        ObjectInfo {
            key: contents.key,
            last_modified: contents.last_modified,
            // The service wraps ETags in literal quotes.
            etag: contents.e_tag.trim_matches('"').to_string(),
            size: contents.size,
            storage_class: contents.storage_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult>
  <Name>photos</Name>
  <Prefix>2024/</Prefix>
  <Marker></Marker>
  <MaxKeys>100</MaxKeys>
  <Contents>
    <Key>a.txt</Key>
    <LastModified>2024-01-01T12:00:00.000Z</LastModified>
    <ETag>"etag-a"</ETag>
    <Size>10</Size>
    <StorageClass>Standard</StorageClass>
  </Contents>
  <Contents>
    <Key>b.txt</Key>
    <LastModified>2024-01-02T00:00:00.000Z</LastModified>
    <ETag>"etag-b"</ETag>
    <Size>20</Size>
    <StorageClass>IA</StorageClass>
  </Contents>
</ListBucketResult>"#;

    #[test]
    fn test_parse_listing() {
        let result: ListBucketResult = quick_xml::de::from_str(LISTING).unwrap();
        assert_eq!(result.name, "photos");
        assert_eq!(result.prefix, "2024/");
        assert_eq!(result.marker, "");
        assert_eq!(result.max_keys, 100);
        assert_eq!(result.contents.len(), 2);
    }

    #[test]
    fn test_contents_preserve_order_and_fields() {
        let result: ListBucketResult = quick_xml::de::from_str(LISTING).unwrap();
        let infos: Vec<ObjectInfo> = result.contents.into_iter().map(Into::into).collect();

        assert_eq!(infos[0].key, "a.txt");
        assert_eq!(infos[0].size, 10);
        assert_eq!(infos[0].etag, "etag-a"); // quotes stripped
        assert_eq!(infos[0].storage_class, "Standard");
        assert_eq!(infos[1].key, "b.txt");
        assert_eq!(infos[1].size, 20);
        assert_eq!(infos[1].storage_class, "IA");
        assert!(infos[0].last_modified < infos[1].last_modified);
    }

    #[test]
    fn test_empty_listing() {
        let xml = r#"<ListBucketResult><Name>photos</Name><Prefix></Prefix><Marker></Marker><MaxKeys>100</MaxKeys></ListBucketResult>"#;
        let result: ListBucketResult = quick_xml::de::from_str(xml).unwrap();
        assert!(result.contents.is_empty());
    }

    #[test]
    fn test_malformed_listing_is_an_error() {
        let xml = "<NotAListing></NotAListing>";
        assert!(quick_xml::de::from_str::<ListBucketResult>(xml).is_err());
    }
}
