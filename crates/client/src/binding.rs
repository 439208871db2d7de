//! HTTP binding of requests: method, path, query string, and JSON body.
//!
//! Responsibilities:
//! - Substitute `{Member}` placeholders in an operation's URI template with
//!   percent-encoded member values.
//! - Move query-bound members into the query string.
//! - Leave every remaining member in the JSON body.
//! - Combine a resolved binding with a configured endpoint into a full URL.
//!
//! Does NOT handle:
//! - Sending anything. Signing, retries, and transport live outside this crate.
//!
//! Invariants:
//! - A member bound to the path or query never also appears in the body.
//! - Every placeholder is resolved or the whole binding fails.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{ModelError, Result};

/// Characters percent-encoded inside a path segment.
///
/// Identifiers and ARNs may contain `/` and `:`, which must not split or
/// reinterpret the path.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'=')
    .add(b'@');

/// Percent-encode a value for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request resolved against its operation's binding metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpBinding {
    pub method: HttpMethod,
    /// Path with placeholders substituted and encoded, e.g.
    /// `/accounts/111122223333/data-sources/ds-1`.
    pub path: String,
    /// Query pairs in binding order; list members repeat their name.
    pub query: Vec<(String, String)>,
    /// Members bound to neither the path nor the query.
    pub body: Option<Value>,
}

impl HttpBinding {
    /// Resolve a serialized request against a URI template and query bindings.
    ///
    /// `query` pairs are `(query name, member wire name)`.
    pub fn resolve<T: Serialize + ?Sized>(
        operation: &'static str,
        method: HttpMethod,
        uri_template: &str,
        query: &[(&str, &str)],
        request: &T,
    ) -> Result<Self> {
        let mut members = match serde_json::to_value(request)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let path = expand_template(operation, uri_template, &mut members)?;

        let mut pairs = Vec::new();
        for (name, member) in query {
            match members.remove(*member) {
                Some(Value::Array(items)) => {
                    pairs.extend(items.iter().map(|item| ((*name).to_string(), scalar(item))));
                }
                Some(Value::Null) | None => {}
                Some(value) => pairs.push(((*name).to_string(), scalar(&value))),
            }
        }

        let body = (!members.is_empty()).then_some(Value::Object(members));

        tracing::debug!(
            operation,
            %method,
            path = %path,
            query_params = pairs.len(),
            has_body = body.is_some(),
            "Resolved HTTP binding"
        );

        Ok(Self {
            method,
            path,
            query: pairs,
            body,
        })
    }

    /// Full request URL against `endpoint`.
    ///
    /// The binding path is appended to any path the endpoint already has.
    pub fn url(&self, endpoint: &Url) -> Result<Url> {
        if endpoint.cannot_be_a_base() {
            return Err(ModelError::InvalidUrl(format!(
                "Cannot append {} to {}",
                self.path, endpoint
            )));
        }
        let prefix = endpoint.path().trim_end_matches('/');
        let mut url = endpoint.clone();
        url.set_path(&format!("{prefix}{}", self.path));
        url.set_query(None);
        url.set_fragment(None);
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

fn expand_template(
    operation: &'static str,
    template: &str,
    members: &mut Map<String, Value>,
) -> Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            path.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let member = &after[..end];
        let value = match members.remove(member) {
            Some(Value::Null) | None => {
                return Err(ModelError::MissingPathParameter {
                    operation,
                    parameter: member.to_string(),
                });
            }
            Some(value) => scalar(&value),
        };
        if value.is_empty() {
            return Err(ModelError::MissingPathParameter {
                operation,
                parameter: member.to_string(),
            });
        }
        path.push_str(&encode_path_segment(&value));
        rest = &after[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
