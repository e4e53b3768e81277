//! Result of a single file-upload operation.

use http::HeaderMap;
use serde::Serialize;

use crate::errors::TransferError;
use crate::transfer::headers::{fold_header_fields, fold_header_map};

/// Encapsulates the result and/or status of uploading a file to a remote server.
///
/// A result is created with all defaults when an upload attempt starts. The
/// transport layer then populates it incrementally: bytes as they go out on
/// the wire, the final status code, the response body, and the response
/// headers. At completion the caller exports it once via
/// [`to_json`](Self::to_json) and discards it; the object has no identity
/// beyond the single operation it represents.
///
/// There is no internal synchronization. The expected usage is single writer
/// followed by a single reader; callers that read while a background task is
/// still writing must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Bytes sent so far.
    bytes_sent: u64,
    /// HTTP response code, -1 until a response has been received.
    response_code: i32,
    /// HTTP response body.
    response: Option<String>,
    /// Transfer object id assigned by the caller.
    object_id: Option<String>,
    /// Folded response headers. Written only through the fold operations,
    /// never assigned arbitrary text.
    headers: Option<String>,
}

impl Default for UploadResult {
    fn default() -> Self {
        Self {
            bytes_sent: 0,
            response_code: -1,
            response: None,
            object_id: None,
            headers: None,
        }
    }
}

impl UploadResult {
    /// Creates a result with all fields at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes_sent(&self) -> u64 {
        self.bytes_sent
    }

    pub fn set_bytes_sent(&mut self, bytes: u64) {
        self.bytes_sent = bytes;
    }

    pub fn response_code(&self) -> i32 {
        self.response_code
    }

    pub fn set_response_code(&mut self, code: i32) {
        self.response_code = code;
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn set_response(&mut self, response: Option<String>) {
        self.response = response;
    }

    pub fn object_id(&self) -> Option<&str> {
        self.object_id.as_deref()
    }

    pub fn set_object_id(&mut self, object_id: Option<String>) {
        self.object_id = object_id;
    }

    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    /// Folds `fields` (see [`fold_header_fields`]) and assigns the outcome to
    /// the `headers` field. Folding an empty sequence assigns the empty
    /// string, which is distinct from headers never having been set.
    pub fn set_response_headers<I, N, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (N, Vec<V>)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        self.headers = Some(fold_header_fields(fields));
    }

    /// Folds a received [`http::HeaderMap`] and assigns the outcome to the
    /// `headers` field.
    pub fn set_response_headers_from_map(&mut self, headers: &HeaderMap) {
        self.headers = Some(fold_header_map(headers));
    }

    /// Serializes the result into its JSON document form.
    ///
    /// Member names and order are a wire contract with existing consumers:
    ///
    /// `{"bytesSent":<int>,"responseCode":<int>,"headers":<string|null>,"response":<string|null>,"objectId":<string|null>}`
    ///
    /// Absent text fields serialize as unquoted `null`. Errors from the JSON
    /// encoder propagate as [`TransferError::Serialization`]; the document is
    /// never truncated.
    pub fn to_json(&self) -> Result<String, TransferError> {
        let doc = serde_json::to_string(&UploadResultDoc {
            bytes_sent: self.bytes_sent,
            response_code: self.response_code,
            headers: self.headers.as_deref(),
            response: self.response.as_deref(),
            object_id: self.object_id.as_deref(),
        })?;

        log::trace!("serialized upload result ({} bytes)", doc.len());
        Ok(doc)
    }
}

/// Wire view of [`UploadResult`]. Member names and declaration order are part
/// of the consumer contract and must not change.
#[derive(Serialize)]
struct UploadResultDoc<'a> {
    #[serde(rename = "bytesSent")]
    bytes_sent: u64,
    #[serde(rename = "responseCode")]
    response_code: i32,
    headers: Option<&'a str>,
    response: Option<&'a str>,
    #[serde(rename = "objectId")]
    object_id: Option<&'a str>,
}
