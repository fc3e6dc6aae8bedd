//! JSON body parsing and shallow key/value assertions
//!
//! Everything here reparses the response body on each call. That keeps a
//! response free of hidden state: two identical assertions against the same
//! response see the same bytes and produce the same outcome.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::keypath;
use crate::response::TestResponse;
use crate::{TestError, TestResult};

impl TestResponse {
    /// Parse the response body as JSON.
    ///
    /// A body that is not valid JSON surfaces as
    /// [`TestError::Serialization`], never as an assertion failure.
    pub fn json_data(&self) -> TestResult<JsonValue> {
        tracing::debug!(bytes = self.body().len(), "parsing response body as JSON");
        let data = serde_json::from_str(self.body())?;
        Ok(data)
    }

    /// Asserts the parsed JSON body is deep-equal to `expected`.
    pub fn assert_json_data(&self, expected: &JsonValue) -> TestResult<()> {
        let data = self.json_data()?;
        if &data != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected response JSON data to be '{expected}', but was '{data}'"
                ),
            });
        }
        Ok(())
    }

    /// Asserts the JSON body carries `"success": true`.
    pub fn assert_json_success(&self) -> TestResult<()> {
        self.assert_json_success_is(true)
    }

    /// Asserts the JSON body carries `"success"` with the given value.
    /// A missing key compares as JSON null and fails either expectation.
    pub fn assert_json_success_is(&self, expected: bool) -> TestResult<()> {
        let data = self.json_data()?;
        let actual = data.get("success").cloned().unwrap_or(JsonValue::Null);
        if actual != JsonValue::Bool(expected) {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected response JSON data to include '\"success\": {expected}', but was '{data}'"
                ),
            });
        }
        Ok(())
    }

    /// Asserts the JSON body carries `"error": "404"`, the source library's
    /// historical default code.
    pub fn assert_json_error(&self) -> TestResult<()> {
        self.assert_json_error_is("404")
    }

    /// Asserts the JSON body carries `"error"` with the given code. Both
    /// sides are compared in string form, so `404` and `"404"` match the
    /// same responses.
    pub fn assert_json_error_is(&self, errno: impl std::fmt::Display) -> TestResult<()> {
        let data = self.json_data()?;
        let expected = errno.to_string();
        let actual = match data.get("error") {
            Some(JsonValue::String(code)) => code.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        if actual != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected response JSON data to include '\"error\": {expected}', but was '{data}'"
                ),
            });
        }
        Ok(())
    }

    /// Asserts the JSON body carries `"message"` exactly equal to
    /// `expected`. No type coercion: `json!("1")` does not match `json!(1)`.
    pub fn assert_json_message(&self, expected: impl Into<JsonValue>) -> TestResult<()> {
        let expected = expected.into();
        let data = self.json_data()?;
        let actual = data.get("message").cloned().unwrap_or(JsonValue::Null);
        if actual != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected response JSON data to include '\"message\": {expected}', but was '{data}'"
                ),
            });
        }
        Ok(())
    }

    /// Asserts `parsed[key]` is deep-equal to the serialized form of
    /// `model`. Serialized field order is irrelevant; content must match.
    ///
    /// When `key` is absent entirely, the failure comes from the key-path
    /// assertion so it names the missing key rather than a value mismatch.
    pub fn assert_json_model<T: Serialize>(&self, key: &str, model: &T) -> TestResult<()> {
        if key.is_empty() {
            return Err(TestError::Contract {
                message: "assert_json_model requires a non-empty key".to_string(),
            });
        }
        let data = self.json_data()?;
        let expected = serde_json::to_value(model)?;
        match data.get(key) {
            Some(actual) => {
                if actual != &expected {
                    return Err(TestError::Assertion {
                        message: format!(
                            "Expected response JSON data to include '{key}: {expected}', but was '{actual}'"
                        ),
                    });
                }
                Ok(())
            }
            None => keypath::assert_has_key_msg(
                &data,
                key,
                &format!("Expected response JSON data to include key: '{key}', but JSON is '{data}'"),
            ),
        }
    }

    /// Asserts `key` is present in the JSON body with a non-empty value.
    /// Null, `""`, `[]`, and `{}` are empty; numbers and booleans are not.
    pub fn assert_json_key(&self, key: &str) -> TestResult<()> {
        if key.is_empty() {
            return Err(TestError::Contract {
                message: "assert_json_key requires a non-empty key".to_string(),
            });
        }
        let data = self.json_data()?;
        match data.get(key) {
            Some(value) => {
                if is_empty_value(value) {
                    return Err(TestError::Assertion {
                        message: format!(
                            "Expected response JSON data to include key '{key}' with a non-empty value, but was '{value}'"
                        ),
                    });
                }
                Ok(())
            }
            None => keypath::assert_has_key_msg(
                &data,
                key,
                &format!("Expected response JSON data to include key: '{key}', but JSON is '{data}'"),
            ),
        }
    }

    /// Asserts `parsed[model][key]` exists with a non-empty value. The
    /// failure names exactly the level that was missing: `model` alone when
    /// the top-level key is absent, `model.key` otherwise.
    pub fn assert_json_model_key(&self, model: &str, key: &str) -> TestResult<()> {
        if model.is_empty() || key.is_empty() {
            return Err(TestError::Contract {
                message: "assert_json_model_key requires non-empty model and key".to_string(),
            });
        }
        let data = self.json_data()?;
        match data.get(model) {
            Some(value) => match value.get(key) {
                Some(nested) => {
                    if is_empty_value(nested) {
                        return Err(TestError::Assertion {
                            message: format!(
                                "Expected response JSON data value at '{model}.{key}' to not be empty, but was '{nested}'"
                            ),
                        });
                    }
                    Ok(())
                }
                None => keypath::assert_has_key_msg(
                    &data,
                    &format!("{model}.{key}"),
                    &format!(
                        "Expected response JSON data to include model.key: '{model}.{key}', but it did not"
                    ),
                ),
            },
            None => keypath::assert_has_key_msg(
                &data,
                model,
                &format!("Expected response JSON data to include model: '{model}', but it did not"),
            ),
        }
    }
}

fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(text) => text.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(map) => map.is_empty(),
        JsonValue::Bool(_) | JsonValue::Number(_) => false,
    }
}
