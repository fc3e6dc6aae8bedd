//! Nested key-path assertions over parsed JSON
//!
//! A key path is a dot-delimited string (`"user.email"`) naming a location
//! inside nested JSON objects. [`assert_has_key`] walks the path segment by
//! segment and, on failure, reports the longest prefix that did resolve, the
//! value traversal stopped at, and the keys available there. Literal dots
//! inside a segment are not supported; there is no escape syntax.
//!
//! All keys are plain strings. Segments match object keys exactly.

use serde_json::Value as JsonValue;

use crate::{TestError, TestResult};

/// Asserts that `path` fully resolves through nested objects in `root`.
///
/// ```rust
/// use response_assert::keypath::assert_has_key;
/// use serde_json::json;
///
/// let root = json!({"a": {"b": 1}});
/// assert_has_key(&root, "a.b").unwrap();
/// assert!(assert_has_key(&root, "a.c").is_err());
/// ```
pub fn assert_has_key(root: &JsonValue, path: &str) -> TestResult<()> {
    match resolve(root, path)? {
        Ok(_) => Ok(()),
        Err(stop) => Err(TestError::Assertion {
            message: traversal_failure(root, path, stop),
        }),
    }
}

/// Like [`assert_has_key`], but fails with the caller's message instead of
/// the built diagnostic.
pub fn assert_has_key_msg(root: &JsonValue, path: &str, msg: &str) -> TestResult<()> {
    match resolve(root, path)? {
        Ok(_) => Ok(()),
        Err(_) => Err(TestError::Assertion {
            message: msg.to_string(),
        }),
    }
}

/// Logical negation of [`assert_has_key`]: succeeds only if `path` does NOT
/// fully resolve.
pub fn refute_has_key(root: &JsonValue, path: &str) -> TestResult<()> {
    match resolve(root, path)? {
        Ok(value) => Err(TestError::Assertion {
            message: format!(
                "Expected JSON to not contain key path '{path}', but it resolved to '{value}'"
            ),
        }),
        Err(_) => Ok(()),
    }
}

/// Where a failed traversal came to rest.
struct TraversalStop<'a> {
    /// Segments consumed before the walk stopped.
    consumed: usize,
    /// The value that either was not an object or lacked the next segment.
    value: &'a JsonValue,
}

/// Walks `path` through `root`. `Ok(Ok(..))` is the resolved value,
/// `Ok(Err(..))` is a stop. Contract violations (empty path, empty segment)
/// surface as `Err`.
fn resolve<'a>(
    root: &'a JsonValue,
    path: &str,
) -> TestResult<Result<&'a JsonValue, TraversalStop<'a>>> {
    let segments = split_path(path)?;

    let mut current = root;
    for (consumed, segment) in segments.iter().enumerate() {
        match current.as_object().and_then(|map| map.get(*segment)) {
            Some(next) => current = next,
            None => {
                return Ok(Err(TraversalStop {
                    consumed,
                    value: current,
                }))
            }
        }
    }
    Ok(Ok(current))
}

fn split_path(path: &str) -> TestResult<Vec<&str>> {
    if path.is_empty() {
        return Err(TestError::Contract {
            message: "key path must not be empty".to_string(),
        });
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(TestError::Contract {
            message: format!("key path '{path}' contains an empty segment"),
        });
    }
    Ok(segments)
}

fn traversal_failure(root: &JsonValue, path: &str, stop: TraversalStop<'_>) -> String {
    let segments: Vec<&str> = path.split('.').collect();
    let prefix = segments[..stop.consumed].join(".");

    let mut msg = if prefix.is_empty() {
        format!("Expected JSON to contain key path '{path}', but traversal stopped at the root.\n")
    } else {
        format!("Expected JSON to contain key path '{path}', but traversal stopped after '{prefix}'.\n")
    };
    msg.push_str(&format!("Root JSON: {root}\n"));
    msg.push_str(&format!("Stopped at value: {}", stop.value));
    if let JsonValue::Object(map) = stop.value {
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        msg.push_str(&format!("\nAvailable keys at this level: {keys:?}"));
    }
    msg
}
