//! Declarative description of a single HTTP call.
//!
//! Descriptors carry no base URL and perform no I/O; the request builder in
//! `roster-http` compiles them into transport-ready requests.

use std::fmt;

use serde::Serialize;

use super::headers::HeaderSet;
use crate::ports::NetworkError;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    pub field_name: String,
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub mime_type: String,
}

impl MultipartPart {
    pub fn new(
        field_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            data: data.into(),
            filename: None,
            mime_type: mime_type.into(),
        }
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A JSON document, serialized to UTF-8 when the request is built.
    Json(serde_json::Value),
    /// Bytes sent as-is.
    Raw(Vec<u8>),
    /// `multipart/form-data`; parts are encoded in the given order.
    Multipart {
        boundary: String,
        parts: Vec<MultipartPart>,
    },
}

impl Body {
    /// Capture any serializable value as a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, NetworkError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| NetworkError::EncodingFailed(e.to_string()))
    }
}

/// Immutable description of one logical API call shape.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDescriptor {
    pub path: String,
    pub method: HttpMethod,
    pub headers: Option<HeaderSet>,
    pub query: Option<Vec<(String, String)>>,
    pub body: Option<Body>,
}

impl EndpointDescriptor {
    /// A bodyless `GET` with no extra headers or query.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            headers: None,
            query: None,
            body: None,
        }
    }

    #[must_use]
    pub const fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderSet) -> Self {
        self.headers = Some(headers);
        self
    }

    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct NewPost<'a> {
        title: &'a str,
        user_id: u64,
    }

    #[test]
    fn test_json_body_captures_serializable_values() {
        let body = Body::json(&NewPost {
            title: "hello",
            user_id: 7,
        })
        .unwrap();
        assert_eq!(body, Body::Json(json!({"title": "hello", "user_id": 7})));
    }

    #[test]
    fn test_json_body_reports_encoding_failure() {
        use std::collections::HashMap;

        // Non-string map keys cannot become JSON object keys
        let mut bad = HashMap::new();
        bad.insert((1, 2), "value");
        let err = Body::json(&bad).unwrap_err();
        assert!(matches!(err, NetworkError::EncodingFailed(_)));
    }

    #[test]
    fn test_query_params_keep_order() {
        let descriptor = EndpointDescriptor::get("/posts")
            .with_query_param("userId", "1")
            .with_query_param("_sort", "id");
        assert_eq!(
            descriptor.query,
            Some(vec![
                ("userId".to_string(), "1".to_string()),
                ("_sort".to_string(), "id".to_string()),
            ])
        );
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(
            EndpointDescriptor::get("/x")
                .with_method(HttpMethod::Delete)
                .method
                .as_str(),
            "DELETE"
        );
    }
}
