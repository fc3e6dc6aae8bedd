//! Named status-code assertions
//!
//! Every method here is a fixed-code shortcut over
//! [`TestResponse::assert_status`]. The set of names and codes lives in one
//! table; the methods are generated from it.

use crate::response::TestResponse;
use crate::TestResult;

macro_rules! status_assertions {
    ($($fn_name:ident => $code:literal, $reason:literal;)+) => {
        impl TestResponse {
            $(
                #[doc = concat!("Asserts the response status is ", $code, " ", $reason, ".")]
                pub fn $fn_name(&self) -> TestResult<()> {
                    self.assert_status($code)
                }
            )+
        }

        /// Reason phrase to status code, in declaration order. One entry per
        /// generated assertion method.
        pub const NAMED_STATUSES: &[(&str, u16)] = &[
            $(($reason, $code),)+
        ];
    };
}

status_assertions! {
    // 2xx success
    assert_ok => 200, "OK";
    assert_created => 201, "Created";
    assert_accepted => 202, "Accepted";
    assert_no_content => 204, "No Content";
    assert_reset_content => 205, "Reset Content";
    assert_partial_content => 206, "Partial Content";

    // 3xx redirection
    assert_multiple_choices => 300, "Multiple Choices";
    assert_moved_permanently => 301, "Moved Permanently";
    assert_found => 302, "Found";
    assert_not_modified => 304, "Not Modified";
    assert_use_proxy => 305, "Use Proxy";
    assert_switch_proxy => 306, "Switch Proxy";
    assert_temporary_redirect => 307, "Temporary Redirect";
    assert_permanent_redirect => 308, "Permanent Redirect";

    // 4xx client error
    assert_bad_request => 400, "Bad Request";
    assert_unauthorized => 401, "Unauthorized";
    assert_forbidden => 403, "Forbidden";
    assert_not_found => 404, "Not Found";
    assert_method_not_allowed => 405, "Method Not Allowed";
    assert_not_acceptable => 406, "Not Acceptable";
    assert_proxy_authentication_required => 407, "Proxy Authentication Required";
    assert_request_timeout => 408, "Request Timeout";
    assert_unsupported_media_type => 415, "Unsupported Media Type";
    assert_unprocessable_entity => 422, "Unprocessable Entity";
    assert_too_many_requests => 429, "Too Many Requests";

    // 5xx server error
    assert_internal_server_error => 500, "Internal Server Error";
    assert_not_implemented => 501, "Not Implemented";
    assert_bad_gateway => 502, "Bad Gateway";
    assert_service_unavailable => 503, "Service Unavailable";
    assert_loop_detected => 508, "Loop Detected";
}

/// Look up the reason phrase for a status code covered by the table.
pub fn status_name(code: u16) -> Option<&'static str> {
    NAMED_STATUSES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestError;

    #[test]
    fn named_assertions_delegate_to_assert_status() {
        TestResponse::new(200).assert_ok().unwrap();
        TestResponse::new(201).assert_created().unwrap();
        TestResponse::new(204).assert_no_content().unwrap();
        TestResponse::new(302).assert_found().unwrap();
        TestResponse::new(404).assert_not_found().unwrap();
        TestResponse::new(422).assert_unprocessable_entity().unwrap();
        TestResponse::new(500).assert_internal_server_error().unwrap();
        TestResponse::new(508).assert_loop_detected().unwrap();
    }

    #[test]
    fn named_assertion_failure_reports_both_codes() {
        let err = TestResponse::new(200).assert_not_found().unwrap_err();
        match err {
            TestError::Assertion { message } => {
                assert!(message.contains("'404'"));
                assert!(message.contains("'200'"));
            }
            other => panic!("expected assertion failure, got {other:?}"),
        }
    }

    #[test]
    fn table_covers_every_generated_method() {
        assert_eq!(NAMED_STATUSES.len(), 30);
        assert_eq!(status_name(200), Some("OK"));
        assert_eq!(status_name(306), Some("Switch Proxy"));
        assert_eq!(status_name(429), Some("Too Many Requests"));
        assert_eq!(status_name(599), None);
    }

    #[test]
    fn table_codes_are_unique() {
        let mut codes: Vec<u16> = NAMED_STATUSES.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), NAMED_STATUSES.len());
    }
}
