//! OSS client: request execution and storage operations.
//!
//! [`OssClient`] is bound to one bucket on one endpoint and implements
//! the ObjectStore trait from oc-core. Every operation is one blocking
//! HTTP exchange: build the URL, finalize headers, sign, send,
//! classify the status. The client holds no mutable state, so a single
//! instance can be shared freely across threads.

use jiff::Timestamp;
use oc_core::{Alias, Error, ObjectInfo, ObjectStore, Result};
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::model::ListBucketResult;
use crate::policy::{PolicyDocument, UploadPolicy};
use crate::sign::{authorization, sign_base64, string_to_sign};
use crate::transport::{Headers, HttpTransport, Request, Response, Transport};

/// Immutable account credentials, owned by the client for its lifetime
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Access key identifier
    pub access_key_id: String,
    /// Access key secret
    pub access_key_secret: String,
    /// Service region
    pub region: String,
}

impl Credentials {
    /// Create a new credential set
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
            region: region.into(),
        }
    }
}

/// Client for one bucket on an OSS-compatible endpoint
pub struct OssClient {
    transport: Box<dyn Transport>,
    credentials: Credentials,
    bucket: String,
    endpoint: String,
}

impl OssClient {
    /// Create a client using the production HTTP transport
    pub fn new(
        credentials: Credentials,
        bucket: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::with_transport(
            credentials,
            bucket,
            endpoint,
            Box::new(HttpTransport::new()?),
        ))
    }

    /// Create a client from a stored alias
    pub fn from_alias(alias: &Alias, bucket: impl Into<String>) -> Result<Self> {
        Self::new(
            Credentials::new(
                alias.access_key_id.clone(),
                alias.access_key_secret.clone(),
                alias.region.clone(),
            ),
            bucket,
            alias.endpoint.clone(),
        )
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(
        credentials: Credentials,
        bucket: impl Into<String>,
        endpoint: impl Into<String>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            transport,
            credentials,
            bucket: bucket.into(),
            endpoint: endpoint.into(),
        }
    }

    /// The bucket this client is bound to
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn object_url(&self, key: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "https://{}.{}/{}",
            self.bucket, self.endpoint, key
        ))?)
    }

    fn list_url(&self, prefix: &str) -> Result<Url> {
        let base = format!("https://{}.{}/", self.bucket, self.endpoint);
        Ok(Url::parse_with_params(&base, &[("prefix", prefix)])?)
    }

    /// Execute one signed request.
    ///
    /// Defaults (`Content-Type: application/json`, `Date: now`) are set
    /// first, then caller-supplied headers override them. Signing uses
    /// the final header values: the Authorization header must reflect
    /// exactly what goes on the wire or the server's recomputation
    /// will not match.
    fn execute(
        &self,
        method: Method,
        url: Url,
        body: Vec<u8>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Response> {
        let mut headers = Headers::new();
        headers.set("Content-Type", "application/json");
        headers.set("Date", http_date(Timestamp::now()));
        for (name, value) in extra_headers {
            headers.set(*name, *value);
        }

        let content_type = headers.get("Content-Type").unwrap_or("").to_string();
        let date = headers.get("Date").unwrap_or("").to_string();
        let to_sign = string_to_sign(
            method.as_str(),
            &content_type,
            &date,
            url.path(),
            url.query().unwrap_or(""),
        );
        debug!(string_to_sign = ?to_sign, "signing request");

        let signature = sign_base64(&self.credentials.access_key_secret, &to_sign);
        headers.set(
            "Authorization",
            authorization(&self.credentials.access_key_id, &signature),
        );

        debug!(%method, %url, "dispatching request");
        self.transport.send(Request {
            method,
            url,
            headers,
            body,
        })
    }

    /// Generate a time-limited delegated-upload policy.
    ///
    /// The returned value is self-contained: the uploader never sees
    /// the account secret, and the server enforces the expiration.
    pub fn generate_upload_policy(
        &self,
        expire_seconds: i64,
        max_file_size: i64,
        key_prefix: &str,
    ) -> Result<UploadPolicy> {
        let expire = Timestamp::now().as_second() + expire_seconds;
        let expiration =
            Timestamp::from_second(expire).map_err(|e| Error::General(e.to_string()))?;

        let document = PolicyDocument::new(expiration, max_file_size, key_prefix);
        let policy = document.encode()?;
        let signature = UploadPolicy::sign(&policy, &self.credentials.access_key_secret);

        Ok(UploadPolicy {
            access_key_id: self.credentials.access_key_id.clone(),
            policy,
            signature,
            bucket: self.bucket.clone(),
            endpoint: self.endpoint.clone(),
            expire,
        })
    }
}

/// Current time in RFC-1123 HTTP-date format, always GMT
fn http_date(now: Timestamp) -> String {
    now.strftime("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

impl ObjectStore for OssClient {
    fn put_object(&self, key: &str, data: Vec<u8>, content_type: Option<&str>) -> Result<String> {
        let url = self.object_url(key)?;
        let content_type = content_type.unwrap_or("application/octet-stream");
        let response = self.execute(
            Method::PUT,
            url.clone(),
            data,
            &[("Content-Type", content_type)],
        )?;

        match response.status {
            200 | 201 => Ok(url.to_string()),
            status => Err(Error::Upload {
                status,
                body: response.body_text(),
            }),
        }
    }

    fn get_object(&self, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(key)?;
        let response = self.execute(Method::GET, url, Vec::new(), &[])?;

        match response.status {
            200 => Ok(response.body),
            status => Err(Error::Download {
                status,
                body: response.body_text(),
            }),
        }
    }

    fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>> {
        let url = self.list_url(prefix)?;
        let response = self.execute(Method::GET, url, Vec::new(), &[])?;

        if response.status != 200 {
            return Err(Error::List {
                status: response.status,
                body: response.body_text(),
            });
        }

        let listing: ListBucketResult = quick_xml::de::from_str(&response.body_text())
            .map_err(|e| Error::Decode(e.to_string()))?;
        Ok(listing.contents.into_iter().map(Into::into).collect())
    }

    fn delete_object(&self, key: &str) -> Result<()> {
        let url = self.object_url(key)?;
        let response = self.execute(Method::DELETE, url, Vec::new(), &[])?;

        // Anything but 204 is a failure, 200 included.
        match response.status {
            204 => Ok(()),
            status => Err(Error::Delete {
                status,
                body: response.body_text(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;

    fn client_with(transport: MockTransport) -> OssClient {
        OssClient::with_transport(
            Credentials::new("testkey", "testsecret", "cn-hangzhou"),
            "photos",
            "oss-cn-hangzhou.aliyuncs.com",
            Box::new(transport),
        )
    }

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_http_date_format() {
        let ts = Timestamp::from_second(1_704_110_400).unwrap();
        assert_eq!(http_date(ts), "Mon, 01 Jan 2024 12:00:00 GMT");
    }

    #[test]
    fn test_put_success_returns_object_url() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::PUT
                    && req.url.as_str()
                        == "https://photos.oss-cn-hangzhou.aliyuncs.com/example.txt"
                    && req.headers.get("Content-Type") == Some("application/octet-stream")
                    && req.body == b"hello"
            })
            .returning(|_| Ok(response(201, "")));

        let url = client_with(transport)
            .put_object("example.txt", b"hello".to_vec(), None)
            .unwrap();
        assert_eq!(
            url,
            "https://photos.oss-cn-hangzhou.aliyuncs.com/example.txt"
        );
    }

    #[test]
    fn test_put_failure_carries_status_and_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(response(403, "AccessDenied")));

        let err = client_with(transport)
            .put_object("example.txt", Vec::new(), None)
            .unwrap_err();
        match err {
            Error::Upload { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "AccessDenied");
            }
            other => panic!("expected upload error, got {other:?}"),
        }
    }

    #[test]
    fn test_requests_carry_a_valid_authorization_header() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                let auth = req.headers.get("Authorization").unwrap_or("");
                let Some(rest) = auth.strip_prefix("ACS testkey:") else {
                    return false;
                };
                // Signature must be decodable Base64 and the Date header
                // must be present, since both feed the canonical string.
                BASE64.decode(rest).is_ok() && req.headers.get("Date").is_some()
            })
            .returning(|_| Ok(response(200, "")));

        client_with(transport).get_object("example.txt").unwrap();
    }

    #[test]
    fn test_get_success_returns_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(response(200, "content")));

        let body = client_with(transport).get_object("a.txt").unwrap();
        assert_eq!(body, b"content");
    }

    #[test]
    fn test_get_failure_is_download_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(response(404, "NoSuchKey")));

        let err = client_with(transport).get_object("a.txt").unwrap_err();
        assert!(matches!(err, Error::Download { status: 404, .. }));
    }

    #[test]
    fn test_list_parses_entries_in_order() {
        let xml = r#"<ListBucketResult>
            <Name>photos</Name><Prefix></Prefix><Marker></Marker><MaxKeys>100</MaxKeys>
            <Contents><Key>a.txt</Key><LastModified>2024-01-01T00:00:00Z</LastModified><ETag>"x"</ETag><Size>10</Size><StorageClass>Standard</StorageClass></Contents>
            <Contents><Key>b.txt</Key><LastModified>2024-01-02T00:00:00Z</LastModified><ETag>"y"</ETag><Size>20</Size><StorageClass>Standard</StorageClass></Contents>
        </ListBucketResult>"#
            .to_string();
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::GET
                    && req.url.as_str()
                        == "https://photos.oss-cn-hangzhou.aliyuncs.com/?prefix="
            })
            .returning(move |_| Ok(response(200, &xml)));

        let objects = client_with(transport).list_objects("").unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].key, "a.txt");
        assert_eq!(objects[0].size, 10);
        assert_eq!(objects[1].key, "b.txt");
        assert_eq!(objects[1].size, 20);
    }

    #[test]
    fn test_list_garbage_body_is_decode_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(response(200, "not xml at all")));

        let err = client_with(transport).list_objects("").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_delete_requires_exactly_204() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| Ok(response(204, "")));
        client_with(transport).delete_object("a.txt").unwrap();

        // A 200 is a failure here, by contract.
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| Ok(response(200, "ok")));
        let err = client_with(transport).delete_object("a.txt").unwrap_err();
        assert!(matches!(err, Error::Delete { status: 200, .. }));
    }

    #[test]
    fn test_transport_failure_propagates() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(Error::Transport("connection refused".into())));

        let err = client_with(transport).get_object("a.txt").unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_upload_policy_is_self_contained() {
        let transport = MockTransport::new();
        let client = client_with(transport);

        let policy = client.generate_upload_policy(3600, 10_485_760, "uploads/").unwrap();
        assert_eq!(policy.access_key_id, "testkey");
        assert_eq!(policy.bucket, "photos");
        assert_eq!(policy.endpoint, "oss-cn-hangzhou.aliyuncs.com");
        assert!(policy.expire > Timestamp::now().as_second());

        // The encoded document round-trips and the signature matches a
        // re-signing of the same encoded policy.
        let document = PolicyDocument::decode(&policy.policy).unwrap();
        assert_eq!(document.conditions.len(), 2);
        assert_eq!(
            policy.signature,
            UploadPolicy::sign(&policy.policy, "testsecret")
        );
    }
}
