//! The seam to the HTTP-simulation collaborator
//!
//! This crate does not simulate HTTP itself. A test harness implements
//! [`HttpSimulator::request`] however it likes (routing into an in-process
//! app, replaying canned responses, ...) and gets the JSON request
//! shortcuts for free as provided methods.

use std::fmt;

use serde::Serialize;

use crate::response::TestResponse;
use crate::TestResult;

/// HTTP method of a simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collaborator that executes simulated HTTP requests.
///
/// Implement [`request`](HttpSimulator::request); the `*_json` shortcuts
/// serialize their params, make sure a JSON Content-Type is present, and
/// delegate. Headers the caller passes explicitly always win: the
/// `application/json` Content-Type is only added when the caller did not
/// set one.
pub trait HttpSimulator {
    /// Execute one simulated request and produce its response.
    fn request(
        &mut self,
        method: Method,
        path: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> TestResult<TestResponse>;

    /// Send a GET request with a JSON body.
    fn get_json<T: Serialize>(
        &mut self,
        path: &str,
        params: &T,
        headers: Vec<(String, String)>,
    ) -> TestResult<TestResponse> {
        self.json_request(Method::Get, path, params, headers)
    }

    /// Send a POST request with a JSON body.
    fn post_json<T: Serialize>(
        &mut self,
        path: &str,
        params: &T,
        headers: Vec<(String, String)>,
    ) -> TestResult<TestResponse> {
        self.json_request(Method::Post, path, params, headers)
    }

    /// Send a PUT request with a JSON body.
    fn put_json<T: Serialize>(
        &mut self,
        path: &str,
        params: &T,
        headers: Vec<(String, String)>,
    ) -> TestResult<TestResponse> {
        self.json_request(Method::Put, path, params, headers)
    }

    /// Send a DELETE request with a JSON body.
    fn delete_json<T: Serialize>(
        &mut self,
        path: &str,
        params: &T,
        headers: Vec<(String, String)>,
    ) -> TestResult<TestResponse> {
        self.json_request(Method::Delete, path, params, headers)
    }

    /// Serialize `params` to JSON and dispatch with a JSON Content-Type
    /// unless the caller already provided one.
    fn json_request<T: Serialize>(
        &mut self,
        method: Method,
        path: &str,
        params: &T,
        mut headers: Vec<(String, String)>,
    ) -> TestResult<TestResponse> {
        let body = serde_json::to_string(params)?;
        let has_content_type = headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("Content-Type"));
        if !has_content_type {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        tracing::debug!(method = %method, path, "dispatching simulated JSON request");
        self.request(method, path, body, headers)
    }
}
