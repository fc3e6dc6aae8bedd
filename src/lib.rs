//! # response-assert - HTTP Response Assertions
//!
//! Assertion helpers for inspecting the outcome of a simulated HTTP request
//! in ordinary `cargo test` tests: status codes, header values, raw bodies,
//! and JSON body contents down to nested key paths.
//!
//! The crate owns no HTTP machinery. A test harness produces a
//! [`TestResponse`] (directly, through the builder, or through an
//! [`HttpSimulator`](client::HttpSimulator) implementation) and every
//! assertion is a plain synchronous method call that returns
//! `Err(TestError::Assertion { .. })` when the expectation does not hold.
//!
//! ## Quick Start
//!
//! ```rust
//! use response_assert::prelude::*;
//!
//! # fn main() -> TestResult<()> {
//! let response = TestResponse::new(200)
//!     .with_header("Content-Type", "application/json")
//!     .with_body(r#"{"success": true, "user": {"name": "Alice"}}"#);
//!
//! response.assert_ok()?;
//! response.assert_header_type_is_json()?;
//! response.assert_json_success()?;
//! assert_has_key(&response.json_data()?, "user.name")?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod expect;
pub mod fixtures;
pub mod headers;
pub mod json;
pub mod keypath;
pub mod response;
pub mod status;

// Re-export commonly used types
pub use client::{HttpSimulator, Method};
pub use expect::{expect, Expect};
pub use response::TestResponse;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        client::{HttpSimulator, Method},
        expect::{expect, Expect},
        fixtures::{MockSimulator, TestUser},
        keypath::{assert_has_key, assert_has_key_msg, refute_has_key},
        response::TestResponse,
        TestError, TestResult,
    };

    // Re-export commonly used external types
    pub use serde_json::{json, Value as JsonValue};
}

// Error handling
#[derive(thiserror::Error, Debug)]
pub enum TestError {
    /// An expectation did not hold. The normal "test failed" signal.
    #[error("Assertion failed: {message}")]
    Assertion { message: String },

    /// An argument violated the call contract (an empty key or key path).
    /// Distinct from `Assertion` so tests can tell a misuse of the API apart
    /// from a failed check.
    #[error("Invalid argument: {message}")]
    Contract { message: String },

    /// The response body was not valid JSON, or a model failed to serialize.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TestResult<T> = Result<T, TestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_render_distinct_messages() {
        let assertion = TestError::Assertion {
            message: "status mismatch".to_string(),
        };
        assert_eq!(assertion.to_string(), "Assertion failed: status mismatch");

        let contract = TestError::Contract {
            message: "key must not be empty".to_string(),
        };
        assert_eq!(
            contract.to_string(),
            "Invalid argument: key must not be empty"
        );
    }

    #[test]
    fn serialization_errors_convert_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: TestError = parse_err.into();
        assert!(matches!(err, TestError::Serialization(_)));
    }
}
