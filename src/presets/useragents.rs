// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! User-agent strings and fingerprint profiles
//!
//! Kept to major current browser versions; update periodically as new
//! versions release.

use std::collections::BTreeMap;

// Chrome on Windows
pub const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
pub const CHROME_WIN11: &str = "Mozilla/5.0 (Windows NT 11.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

// Chrome on macOS and Linux
pub const CHROME_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
pub const CHROME_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

// Firefox
pub const FIREFOX_WIN: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:123.0) Gecko/20100101 Firefox/123.0";
pub const FIREFOX_MAC: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.3; rv:123.0) Gecko/20100101 Firefox/123.0";

// Safari on macOS and iOS
pub const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_3_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3.1 Safari/605.1.15";
pub const SAFARI_IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 17_3_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3.1 Mobile/15E148 Safari/604.1";
pub const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_3_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3.1 Mobile/15E148 Safari/604.1";

// Edge on Windows
pub const EDGE_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36 Edg/122.0.0.0";

// Mobile Chrome on Android
pub const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.6261.90 Mobile Safari/537.36";
pub const CHROME_ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 14; Pixel Tablet) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.6261.90 Safari/537.36";

// Bots - useful for sites that grant more access to known crawlers
pub const GOOGLEBOT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
pub const GOOGLEBOT_MOBILE: &str = "Mozilla/5.0 (Linux; Android 6.0.1; Nexus 5X Build/MMB29P) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.6261.90 Mobile Safari/537.36 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
pub const BINGBOT: &str = "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)";

/// A UA string bundled with the request headers that accompany it
///
/// Apply via [`PageRequestBuilder::profile`](crate::PageRequestBuilder::profile)
/// or [`ScriptBuilder::use_profile`](crate::ScriptBuilder::use_profile) for a
/// fully consistent fingerprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// The full User-Agent string
    pub user_agent: String,
    /// Commonly expected headers that accompany this UA
    pub headers: BTreeMap<String, String>,
}

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Complete Chrome/Windows browser profile with a consistent user agent and
/// realistic accompanying request headers.
pub fn chrome_windows_profile() -> Profile {
    Profile {
        user_agent: CHROME_WIN.to_string(),
        headers: headers(&[
            ("Accept-Language", "en-US,en;q=0.9"),
            ("Accept-Encoding", "gzip, deflate, br"),
            ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"),
            ("Upgrade-Insecure-Requests", "1"),
            ("Sec-CH-UA", r#""Chromium";v="122", "Not(A:Brand";v="24", "Google Chrome";v="122""#),
            ("Sec-CH-UA-Mobile", "?0"),
            ("Sec-CH-UA-Platform", r#""Windows""#),
            ("Sec-Fetch-Dest", "document"),
            ("Sec-Fetch-Mode", "navigate"),
            ("Sec-Fetch-Site", "none"),
            ("Sec-Fetch-User", "?1"),
        ]),
    }
}

/// Complete Chrome/Mac browser profile.
pub fn chrome_mac_profile() -> Profile {
    Profile {
        user_agent: CHROME_MAC.to_string(),
        headers: headers(&[
            ("Accept-Language", "en-US,en;q=0.9"),
            ("Accept-Encoding", "gzip, deflate, br"),
            ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"),
            ("Upgrade-Insecure-Requests", "1"),
            ("Sec-CH-UA", r#""Chromium";v="122", "Not(A:Brand";v="24", "Google Chrome";v="122""#),
            ("Sec-CH-UA-Mobile", "?0"),
            ("Sec-CH-UA-Platform", r#""macOS""#),
            ("Sec-Fetch-Dest", "document"),
            ("Sec-Fetch-Mode", "navigate"),
            ("Sec-Fetch-Site", "none"),
            ("Sec-Fetch-User", "?1"),
        ]),
    }
}

/// Complete Firefox/Windows browser profile.
pub fn firefox_windows_profile() -> Profile {
    Profile {
        user_agent: FIREFOX_WIN.to_string(),
        headers: headers(&[
            ("Accept-Language", "en-US,en;q=0.5"),
            ("Accept-Encoding", "gzip, deflate, br"),
            (
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
            ("DNT", "1"),
            ("Sec-Fetch-Dest", "document"),
            ("Sec-Fetch-Mode", "navigate"),
            ("Sec-Fetch-Site", "none"),
            ("Sec-Fetch-User", "?1"),
        ]),
    }
}

/// Complete Firefox/Mac browser profile.
pub fn firefox_mac_profile() -> Profile {
    Profile {
        user_agent: FIREFOX_MAC.to_string(),
        ..firefox_windows_profile()
    }
}

/// Complete Safari/Mac browser profile.
pub fn safari_mac_profile() -> Profile {
    Profile {
        user_agent: SAFARI_MAC.to_string(),
        headers: headers(&[
            ("Accept-Language", "en-US,en;q=0.9"),
            ("Accept-Encoding", "gzip, deflate, br"),
            (
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
            ("Sec-Fetch-Dest", "document"),
            ("Sec-Fetch-Mode", "navigate"),
            ("Sec-Fetch-Site", "none"),
        ]),
    }
}

/// Complete Safari/iPad browser profile.
pub fn safari_ipad_profile() -> Profile {
    Profile {
        user_agent: SAFARI_IPAD.to_string(),
        ..safari_mac_profile()
    }
}

/// Complete Safari/iPhone browser profile.
pub fn safari_iphone_profile() -> Profile {
    Profile {
        user_agent: SAFARI_IPHONE.to_string(),
        ..safari_mac_profile()
    }
}

/// Complete Edge/Windows browser profile.
pub fn edge_windows_profile() -> Profile {
    Profile {
        user_agent: EDGE_WIN.to_string(),
        headers: headers(&[
            ("Accept-Language", "en-US,en;q=0.9"),
            ("Accept-Encoding", "gzip, deflate, br"),
            ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"),
            ("Upgrade-Insecure-Requests", "1"),
            ("Sec-CH-UA", r#""Chromium";v="122", "Not(A:Brand";v="24", "Microsoft Edge";v="122""#),
            ("Sec-CH-UA-Mobile", "?0"),
            ("Sec-CH-UA-Platform", r#""Windows""#),
            ("Sec-Fetch-Dest", "document"),
            ("Sec-Fetch-Mode", "navigate"),
            ("Sec-Fetch-Site", "none"),
            ("Sec-Fetch-User", "?1"),
        ]),
    }
}

/// Complete Chrome/Android browser profile.
pub fn chrome_android_profile() -> Profile {
    Profile {
        user_agent: CHROME_ANDROID.to_string(),
        headers: headers(&[
            ("Accept-Language", "en-US,en;q=0.9"),
            ("Accept-Encoding", "gzip, deflate, br"),
            ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"),
            ("Upgrade-Insecure-Requests", "1"),
            ("Sec-CH-UA", r#""Chromium";v="122", "Not(A:Brand";v="24", "Google Chrome";v="122""#),
            ("Sec-CH-UA-Mobile", "?1"),
            ("Sec-CH-UA-Platform", r#""Android""#),
            ("Sec-Fetch-Dest", "document"),
            ("Sec-Fetch-Mode", "navigate"),
            ("Sec-Fetch-Site", "none"),
            ("Sec-Fetch-User", "?1"),
        ]),
    }
}

/// Complete Chrome/Android tablet browser profile.
pub fn chrome_android_tablet_profile() -> Profile {
    let mut p = chrome_android_profile();
    p.user_agent = CHROME_ANDROID_TABLET.to_string();
    p.headers
        .insert("Sec-CH-UA-Mobile".to_string(), "?0".to_string());
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_windows_profile_is_consistent() {
        let p = chrome_windows_profile();
        assert!(p.user_agent.contains("Windows NT 10.0"));
        assert_eq!(p.headers["Sec-CH-UA-Platform"], r#""Windows""#);
        assert_eq!(p.headers["Sec-CH-UA-Mobile"], "?0");
    }

    #[test]
    fn test_mobile_profiles_flag_mobile() {
        assert_eq!(chrome_android_profile().headers["Sec-CH-UA-Mobile"], "?1");
        assert_eq!(
            chrome_android_tablet_profile().headers["Sec-CH-UA-Mobile"],
            "?0"
        );
    }

    #[test]
    fn test_firefox_profiles_share_headers() {
        let win = firefox_windows_profile();
        let mac = firefox_mac_profile();
        assert_ne!(win.user_agent, mac.user_agent);
        assert_eq!(win.headers, mac.headers);
    }

    #[test]
    fn test_all_profiles_carry_accept_language() {
        for p in [
            chrome_windows_profile(),
            chrome_mac_profile(),
            firefox_windows_profile(),
            safari_mac_profile(),
            safari_ipad_profile(),
            safari_iphone_profile(),
            edge_windows_profile(),
            chrome_android_profile(),
        ] {
            assert!(p.headers.contains_key("Accept-Language"), "{}", p.user_agent);
        }
    }
}
