//! Fluent expectation syntax
//!
//! A second calling convention over the same checks. Every `must_have_*`
//! method is a one-line delegation to the canonical assertion and hands the
//! wrapper back, so expectations chain with `?`:
//!
//! ```rust
//! use response_assert::prelude::*;
//!
//! # fn main() -> TestResult<()> {
//! let response = TestResponse::new(200)
//!     .with_json_body(&json!({"success": true, "message": "created"}))?;
//!
//! expect(&response)
//!     .must_have_status(200)?
//!     .must_have_json_success(true)?
//!     .must_have_json_message("created")?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::response::TestResponse;
use crate::TestResult;

/// Wrap a response for fluent expectations.
pub fn expect(response: &TestResponse) -> Expect<'_> {
    Expect { response }
}

/// Borrowed view over a [`TestResponse`] exposing the `must_have_*` syntax.
#[derive(Clone, Copy, Debug)]
pub struct Expect<'a> {
    response: &'a TestResponse,
}

impl<'a> Expect<'a> {
    /// The wrapped response.
    pub fn response(&self) -> &'a TestResponse {
        self.response
    }

    pub fn must_have_status(self, expected: u16) -> TestResult<Self> {
        self.response.assert_status(expected)?;
        Ok(self)
    }

    pub fn must_have_header(self, name: &str, expected: &str) -> TestResult<Self> {
        self.response.assert_header(name, expected)?;
        Ok(self)
    }

    pub fn must_have_body(self, expected: &str) -> TestResult<Self> {
        self.response.assert_body(expected)?;
        Ok(self)
    }

    pub fn must_have_json_data(self, expected: &JsonValue) -> TestResult<Self> {
        self.response.assert_json_data(expected)?;
        Ok(self)
    }

    pub fn must_have_json_success(self, expected: bool) -> TestResult<Self> {
        self.response.assert_json_success_is(expected)?;
        Ok(self)
    }

    pub fn must_have_json_error(self, errno: impl std::fmt::Display) -> TestResult<Self> {
        self.response.assert_json_error_is(errno)?;
        Ok(self)
    }

    pub fn must_have_json_message(self, expected: impl Into<JsonValue>) -> TestResult<Self> {
        self.response.assert_json_message(expected)?;
        Ok(self)
    }

    pub fn must_have_json_key(self, key: &str) -> TestResult<Self> {
        self.response.assert_json_key(key)?;
        Ok(self)
    }

    pub fn must_have_json_model<T: Serialize>(self, key: &str, model: &T) -> TestResult<Self> {
        self.response.assert_json_model(key, model)?;
        Ok(self)
    }

    pub fn must_have_json_model_key(self, model: &str, key: &str) -> TestResult<Self> {
        self.response.assert_json_model_key(model, key)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ok_json;
    use crate::TestError;
    use serde_json::json;

    #[test]
    fn expectations_chain_on_success() {
        let response = ok_json(&json!({"success": true, "user": {"id": 1}}));

        let checked = expect(&response)
            .must_have_status(200)
            .unwrap()
            .must_have_header("Content-Type", "application/json")
            .unwrap()
            .must_have_json_success(true)
            .unwrap()
            .must_have_json_model_key("user", "id")
            .unwrap();

        assert_eq!(checked.response().status(), 200);
    }

    #[test]
    fn a_failing_link_breaks_the_chain_with_the_canonical_message() {
        let response = ok_json(&json!({"success": false}));

        let err = expect(&response)
            .must_have_status(200)
            .unwrap()
            .must_have_json_success(true)
            .unwrap_err();

        match err {
            TestError::Assertion { message } => {
                assert!(message.contains(r#""success": true"#));
            }
            other => panic!("expected assertion failure, got {other:?}"),
        }
    }
}
