//! Test fixtures and a recording simulator
//!
//! Canned values used by this crate's own tests and handy as starting
//! points in downstream suites.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::client::{HttpSimulator, Method};
use crate::response::TestResponse;
use crate::TestResult;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TestUser {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl TestUser {
    pub fn new(id: u32, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    pub fn alice() -> Self {
        Self::new(1, "Alice", "alice@example.com")
    }

    pub fn bob() -> Self {
        Self::new(2, "Bob", "bob@example.com")
    }
}

/// A 200 response carrying `value` as its JSON body.
pub fn ok_json(value: &JsonValue) -> TestResponse {
    TestResponse::new(200)
        .with_header("Content-Type", "application/json")
        .with_body(value.to_string())
}

/// A 200 response carrying an HTML body.
pub fn html(body: &str) -> TestResponse {
    TestResponse::new(200)
        .with_header("Content-Type", "text/html")
        .with_body(body)
}

/// One request as the simulator received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

/// An [`HttpSimulator`] that records every dispatched request and replays
/// queued responses in order. With an empty queue it answers
/// `{"success": true}` with status 200.
#[derive(Debug, Default)]
pub struct MockSimulator {
    queued: VecDeque<TestResponse>,
    pub requests: Vec<RecordedRequest>,
}

impl MockSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response the next request will receive.
    pub fn enqueue(&mut self, response: TestResponse) -> &mut Self {
        self.queued.push_back(response);
        self
    }

    /// The most recently dispatched request, if any.
    pub fn last_request(&self) -> Option<&RecordedRequest> {
        self.requests.last()
    }
}

impl HttpSimulator for MockSimulator {
    fn request(
        &mut self,
        method: Method,
        path: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> TestResult<TestResponse> {
        self.requests.push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            headers,
        });
        Ok(self
            .queued
            .pop_front()
            .unwrap_or_else(|| ok_json(&serde_json::json!({"success": true}))))
    }
}
