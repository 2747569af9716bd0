// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Embedded fingerprint-evasion payload
//!
//! A combined stealth evasion script derived from
//! puppeteer-extra-plugin-stealth. Injected via
//! [`ScriptBuilder::apply_stealth`](crate::ScriptBuilder::apply_stealth) as
//! the argument of `page.evaluateOnNewDocument`. The content is opaque to
//! this crate.

/// The stealth evasion function, embedded at build time.
pub const STEALTH_JS: &str = include_str!("evasions.js");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_present_and_shaped_like_a_function() {
        assert!(!STEALTH_JS.is_empty());
        assert!(STEALTH_JS.trim_start().starts_with("() =>"));
    }

    #[test]
    fn test_payload_covers_core_evasions() {
        assert!(STEALTH_JS.contains("navigator.webdriver"));
        assert!(STEALTH_JS.contains("chrome.csi"));
        assert!(STEALTH_JS.contains("plugins"));
    }
}
