//! Named header assertions
//!
//! Fixed-name shortcuts over [`TestResponse::assert_header`]. Plain
//! name-for-name shortcuts are generated from the `KNOWN_HEADERS` table;
//! the variants that format their expected value first (Content-Length,
//! attachments, MIME type families) are written out below.

use std::fmt::Display;

use crate::response::TestResponse;
use crate::TestResult;

macro_rules! header_assertions {
    ($($fn_name:ident => $friendly:literal, $header:literal;)+) => {
        impl TestResponse {
            $(
                #[doc = concat!("Asserts the `", $header, "` response header equals the expected value.")]
                pub fn $fn_name(&self, expected: &str) -> TestResult<()> {
                    self.assert_header($header, expected)
                }
            )+
        }

        /// Friendly name to canonical header name, one entry per generated
        /// assertion method.
        pub const KNOWN_HEADERS: &[(&str, &str)] = &[
            $(($friendly, $header),)+
        ];
    };
}

header_assertions! {
    assert_header_accept => "accept", "Accept";
    assert_header_content_encoding => "content_encoding", "Content-Encoding";
    assert_header_content_language => "content_language", "Content-Language";
    assert_header_content_location => "content_location", "Content-Location";
    assert_header_content_type => "content_type", "Content-Type";
    assert_header_etag => "etag", "ETag";
    assert_header_expires => "expires", "Expires";
    assert_header_last_modified => "last_modified", "Last-Modified";
    assert_header_server => "server", "Server";
    assert_header_www_authenticate => "www_authenticate", "WWW-Authenticate";
}

impl TestResponse {
    /// Alias for [`TestResponse::assert_header_content_encoding`].
    pub fn assert_header_encoding(&self, expected: &str) -> TestResult<()> {
        self.assert_header_content_encoding(expected)
    }

    /// Alias for [`TestResponse::assert_header_content_language`].
    pub fn assert_header_language(&self, expected: &str) -> TestResult<()> {
        self.assert_header_content_language(expected)
    }

    /// Asserts the `Content-Length` header. The expected length is coerced
    /// to its string form, so integer and string inputs both work.
    pub fn assert_header_content_length(&self, length: impl Display) -> TestResult<()> {
        self.assert_header("Content-Length", &length.to_string())
    }

    /// Asserts the `Content-Type` header is `application/<subtype>`.
    pub fn assert_header_application_type(&self, subtype: &str) -> TestResult<()> {
        self.assert_header("Content-Type", &format!("application/{subtype}"))
    }

    /// Asserts the `Content-Type` header is `image/<subtype>`.
    pub fn assert_header_image_type(&self, subtype: &str) -> TestResult<()> {
        self.assert_header("Content-Type", &format!("image/{subtype}"))
    }

    /// Asserts the `Content-Type` header is `text/<subtype>`.
    pub fn assert_header_text_type(&self, subtype: &str) -> TestResult<()> {
        self.assert_header("Content-Type", &format!("text/{subtype}"))
    }

    /// Asserts the `Content-Disposition` header announces a file download
    /// with the given filename.
    pub fn assert_header_attachment(&self, filename: &str) -> TestResult<()> {
        self.assert_header(
            "Content-Disposition",
            &format!("attachment; filename=\"{filename}\""),
        )
    }

    /// Asserts the `Content-Type` header is exactly `application/json`.
    pub fn assert_header_type_is_json(&self) -> TestResult<()> {
        self.assert_header("Content-Type", "application/json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestError;

    #[test]
    fn generated_shortcuts_check_their_canonical_header() {
        let response = TestResponse::new(200)
            .with_header("Accept", "text/plain")
            .with_header("ETag", "\"737060cd\"")
            .with_header("Server", "nginx/1.24");

        response.assert_header_accept("text/plain").unwrap();
        response.assert_header_etag("\"737060cd\"").unwrap();
        response.assert_header_server("nginx/1.24").unwrap();
        assert!(response.assert_header_accept("application/json").is_err());
    }

    #[test]
    fn encoding_and_language_aliases_delegate() {
        let response = TestResponse::new(200)
            .with_header("Content-Encoding", "gzip")
            .with_header("Content-Language", "en");

        response.assert_header_encoding("gzip").unwrap();
        response.assert_header_language("en").unwrap();
    }

    #[test]
    fn content_length_accepts_integers_and_strings() {
        let response = TestResponse::new(200).with_header("Content-Length", "348");

        response.assert_header_content_length(348).unwrap();
        response.assert_header_content_length("348").unwrap();
        assert!(response.assert_header_content_length(999).is_err());
    }

    #[test]
    fn mime_type_families_format_the_expected_value() {
        let pdf = TestResponse::new(200).with_header("Content-Type", "application/pdf");
        pdf.assert_header_application_type("pdf").unwrap();

        let png = TestResponse::new(200).with_header("Content-Type", "image/png");
        png.assert_header_image_type("png").unwrap();

        let html = TestResponse::new(200).with_header("Content-Type", "text/html");
        html.assert_header_text_type("html").unwrap();
        assert!(html.assert_header_text_type("plain").is_err());
    }

    #[test]
    fn attachment_formats_a_disposition_value() {
        let response = TestResponse::new(200)
            .with_header("Content-Disposition", "attachment; filename=\"report.pdf\"");

        response.assert_header_attachment("report.pdf").unwrap();

        let err = response.assert_header_attachment("other.pdf").unwrap_err();
        match err {
            TestError::Assertion { message } => {
                assert!(message.contains("attachment; filename=\"other.pdf\""));
            }
            other => panic!("expected assertion failure, got {other:?}"),
        }
    }

    #[test]
    fn json_content_type_shortcut() {
        let response = TestResponse::new(200).with_header("Content-Type", "application/json");
        response.assert_header_type_is_json().unwrap();

        let html = TestResponse::new(200).with_header("Content-Type", "text/html");
        assert!(html.assert_header_type_is_json().is_err());
    }

    #[test]
    fn known_headers_table_matches_generated_methods() {
        assert_eq!(KNOWN_HEADERS.len(), 10);
        assert!(KNOWN_HEADERS.contains(&("etag", "ETag")));
        assert!(KNOWN_HEADERS.contains(&("www_authenticate", "WWW-Authenticate")));
    }
}
