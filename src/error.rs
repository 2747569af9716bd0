// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the PhantomJsCloud client
//!
//! Every failure is surfaced to the caller; there is no retry or fallback.
//! The single exception is response metadata header parsing, where malformed
//! numeric values are ignored because those fields are advisory.

use thiserror::Error;

/// Result type alias for PhantomJsCloud operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PhantomJsCloud client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connect, read, write, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error status in [400, 600)
    #[error("phantomjscloud returned HTTP status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Response envelope could not be decoded as JSON
    #[error("failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rendered artifact could not be base64-decoded
    #[error("failed to decode base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Endpoint URL parsing failed
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response envelope was well-formed but carried zero page responses
    #[error("no page response returned")]
    NoPageResponse,

    /// An automation call completed without recording a value
    #[error("automation result was omitted or empty in response")]
    MissingAutomationResult,

    /// Caller cancelled the request via its cancellation token
    #[error("request cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NoPageResponse.to_string(),
            "no page response returned"
        );
        assert!(Error::MissingAutomationResult
            .to_string()
            .contains("automation result"));
        let up = Error::Upstream {
            status: 402,
            body: "quota exceeded".into(),
        };
        assert_eq!(
            up.to_string(),
            "phantomjscloud returned HTTP status 402: quota exceeded"
        );
    }
}
