//! The simulated response value and its field-level assertions
//!
//! [`TestResponse`] is the single shared input every assertion in this crate
//! reads from: an integer status code, an insertion-ordered header map, and
//! a text body. It is immutable once built; assertions only borrow it.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{TestError, TestResult};

/// Outcome of a simulated HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResponse {
    status: u16,
    headers: IndexMap<String, String>,
    body: String,
}

impl TestResponse {
    /// Create a response with the given status code, no headers, empty body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: IndexMap::new(),
            body: String::new(),
        }
    }

    /// Add a header. Names are stored as given; lookups are exact-match.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add multiple headers, preserving iteration order.
    pub fn with_headers(
        mut self,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Serialize `data` as the JSON body and set the matching Content-Type.
    pub fn with_json_body<T: Serialize>(self, data: &T) -> TestResult<Self> {
        let body = serde_json::to_string(data)?;
        Ok(self
            .with_header("Content-Type", "application/json")
            .with_body(body))
    }

    /// Get the response status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get response headers
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Get a single header value by exact name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Get response body as text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Assert the response status code.
    pub fn assert_status(&self, expected: u16) -> TestResult<()> {
        if self.status != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected response status to be '{}', but was '{}'",
                    expected, self.status
                ),
            });
        }
        Ok(())
    }

    /// Assert a header value. An absent header compares as the empty string.
    pub fn assert_header(&self, name: &str, expected: &str) -> TestResult<()> {
        let actual = self.header(name).unwrap_or("");
        if actual != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected response header '{}' to be '{}', but was '{}'",
                    name, expected, actual
                ),
            });
        }
        Ok(())
    }

    /// Assert the full body text. No parsing, pure string equality.
    pub fn assert_body(&self, expected: &str) -> TestResult<()> {
        if self.body != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected response to be '{}', but was '{}'",
                    expected, self.body
                ),
            });
        }
        Ok(())
    }
}
