// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Regex blocklists for resource requests
//!
//! Pass the returned rules to
//! [`PageRequestBuilder::blocklist`](crate::PageRequestBuilder::blocklist).
//! Blocking ads, trackers and fonts reduces page load time and billing cost
//! without affecting content accuracy on most sites.

use crate::types::ResourceModifier;

fn block(regex: &str) -> ResourceModifier {
    ResourceModifier::block(regex)
}

/// Rules blocking the most common advertising networks.
pub fn ads() -> Vec<ResourceModifier> {
    vec![
        block(r".*doubleclick\.net.*"),
        block(r".*googlesyndication\.com.*"),
        block(r".*googleadservices\.com.*"),
        block(r".*adnxs\.com.*"),
        block(r".*serving-sys\.com.*"),
        block(r".*amazon-adsystem\.com.*"),
        block(r".*ads\.twitter\.com.*"),
        block(r".*advertising\.com.*"),
        block(r".*ads\.linkedin\.com.*"),
        block(r".*adsymptotic\.com.*"),
        block(r".*moatads\.com.*"),
        block(r".*criteo\.com.*"),
        block(r".*taboola\.com.*"),
        block(r".*outbrain\.com.*"),
        block(r".*revcontent\.com.*"),
        block(r".*adroll\.com.*"),
        block(r".*pubmatic\.com.*"),
        block(r".*openx\.net.*"),
        block(r".*rubiconproject\.com.*"),
        block(r".*smartadserver\.com.*"),
    ]
}

/// Rules blocking analytics and tracking beacons.
pub fn trackers() -> Vec<ResourceModifier> {
    vec![
        block(r".*google-analytics\.com.*"),
        block(r".*googletagmanager\.com.*"),
        block(r".*segment\.com.*"),
        block(r".*segment\.io.*"),
        block(r".*mixpanel\.com.*"),
        block(r".*fullstory\.com.*"),
        block(r".*hotjar\.com.*"),
        block(r".*mouseflow\.com.*"),
        block(r".*crazyegg\.com.*"),
        block(r".*heap\.io.*"),
        block(r".*amplitude\.com.*"),
        block(r".*clarity\.ms.*"),
        block(r".*intercom\.io.*"),
        block(r".*intercomcdn\.com.*"),
        block(r".*drift\.com.*"),
        block(r".*hubspot\.com.*"),
        block(r".*marketo\.net.*"),
        block(r".*pardot\.com.*"),
        block(r".*sentry\.io.*"),
        block(r".*newrelic\.com.*"),
        block(r".*nr-data\.net.*"),
        block(r".*datadog-browser-agent\.com.*"),
        block(r".*facebook\.net.*"),
        block(r".*connect\.facebook\.net.*"),
        block(r".*ads\.facebook\.com.*"),
        block(r".*bat\.bing\.com.*"),
        block(r".*sc-static\.net.*"),
        block(r".*tiktok\.com.*"),
    ]
}

/// Rules blocking image, video and audio assets. Use when only the page
/// text or DOM structure matters; can cut load time in half.
pub fn media() -> Vec<ResourceModifier> {
    vec![
        block(r".*\.(jpg|jpeg|png|gif|webp|svg|ico|avif|bmp|tiff)(\?.*)?$"),
        block(r".*\.(mp4|webm|ogg|avi|mov|mkv|flv)(\?.*)?$"),
        block(r".*\.(mp3|wav|flac|aac|m4a)(\?.*)?$"),
    ]
}

/// Rules blocking web font requests.
pub fn fonts() -> Vec<ResourceModifier> {
    vec![
        block(r".*fonts\.googleapis\.com.*"),
        block(r".*fonts\.gstatic\.com.*"),
        block(r".*use\.typekit\.net.*"),
        block(r".*fast\.fonts\.net.*"),
        block(r".*cloud\.typography\.com.*"),
        block(r".*\.(woff|woff2|ttf|eot|otf)(\?.*)?$"),
    ]
}

/// Combined Ads + Trackers + Fonts blocklist. The recommended default for
/// most scraping tasks.
pub fn lightweight() -> Vec<ResourceModifier> {
    let mut rules = Vec::with_capacity(60);
    rules.extend(ads());
    rules.extend(trackers());
    rules.extend(fonts());
    rules
}

/// Complete Ads + Trackers + Fonts + Media blocklist. Use when only plain
/// text or DOM structure is needed.
pub fn full() -> Vec<ResourceModifier> {
    let mut rules = lightweight();
    rules.extend(media());
    rules
}
