use std::fmt;

/// The resource path requested by a client.
///
/// Extracted from the `GET` line of the request header block. Nothing else
/// about the request (method, headers, body) is retained. An empty target
/// means no request line was seen and always resolves to "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTarget(String);

impl RequestTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RequestTarget {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
