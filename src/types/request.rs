// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request document types
//!
//! The root POST payload is a [`UserRequest`] carrying one [`PageRequest`]
//! per page to render. Field names follow the service's camelCase wire
//! format; unset fields are omitted from the serialized body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{is_default, is_false, is_zero_f64};

/// Root POST payload: one entry in `pages` per page to render
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRequest {
    pub pages: Vec<PageRequest>,
    /// Proxy applied to every page unless overridden per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<Proxy>,
    /// Wrap the response in a full JSON envelope
    #[serde(skip_serializing_if = "is_false")]
    pub output_as_json: bool,
}

impl UserRequest {
    /// Create a request from a list of page requests
    pub fn new(pages: Vec<PageRequest>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    /// Wrap a single page request
    pub fn single(page: PageRequest) -> Self {
        Self::new(vec![page])
    }
}

/// A single page-render job
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub url: String,
    /// Inline HTML rendered instead of fetching `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub render_type: RenderType,
    #[serde(skip_serializing_if = "is_false")]
    pub output_as_json: bool,
    /// Automation script executed remotely against the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overseer_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<Proxy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    /// Response envelope fields to strip when `outputAsJson` is set
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suppress_json: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_json: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_settings: Option<UrlSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Scripts>,
    #[serde(skip_serializing_if = "is_default")]
    pub request_settings: RequestSettings,
    #[serde(skip_serializing_if = "is_default")]
    pub render_settings: RenderSettings,
}

impl PageRequest {
    /// Create a page request for the given URL with all defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Kind of artifact the service returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderType {
    /// Rendered page HTML (the service default)
    #[default]
    Html,
    /// Page text stripped of all markup
    PlainText,
    Jpeg,
    Png,
    Pdf,
    /// Generic JSON envelope
    Json,
    /// Raw automation result
    Automation,
}

/// Proxy selection: a symbolic preset string or a structured record
///
/// Serializes untagged, so `Proxy::Named("anon-us")` emits the bare string
/// and `Proxy::Custom(..)` emits the inner object directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Proxy {
    /// Short symbolic form, e.g. `anon-us`, `geo-uk`, `anon-any`
    Named(String),
    /// Structured form with a geolocation and optional credentials
    Custom(ProxyOptions),
}

impl Proxy {
    /// Symbolic preset proxy, e.g. `Proxy::named("anon-us")`
    pub fn named(name: impl Into<String>) -> Self {
        Proxy::Named(name.into())
    }

    /// Builtin rotating proxy pinned to a geolocation from
    /// [`proxy_location`](super::proxy_location)
    pub fn location(location: impl Into<String>) -> Self {
        Proxy::Custom(ProxyOptions {
            location: location.into(),
            ..Default::default()
        })
    }
}

/// Structured proxy configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyOptions {
    /// Geolocation, e.g. `us`, `de`, `jp`, `any`
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// HTTP method/body override for the initial page fetch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlSettings {
    /// HTTP verb, e.g. `POST`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Request body sent with the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// Per-lifecycle script hooks evaluated in the page context
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scripts {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub load: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dom_ready: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub load_finished: Vec<String>,
}

/// Settings controlling how the page is fetched and when it is done
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestSettings {
    /// Milliseconds to keep waiting after the page fires its done event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io_wait: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wait: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_wait: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_timeout: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub ignore_images: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_javascript: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Declarative completion triggers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub done_when: Vec<DoneWhen>,
    /// Regex rules blocking or rewriting resource requests; accumulated
    /// append-only by the request builder
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_modifier: Vec<ResourceModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_resource_body: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_secure_headers: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub web_security_enabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub xss_auditing_enabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub clear_cache: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub clear_cookies: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<Cookie>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub delete_cookies: Vec<Cookie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulate_device: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub stop_on_error: bool,
}

/// HTTP basic authentication credentials
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Authentication {
    pub user_name: String,
    pub password: String,
}

impl Authentication {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

/// Cookie injected into (or reported from) the browser context
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub secure: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub http_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
    /// Unix timestamp in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
}

/// Declarative termination condition for a page render
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoneWhen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
}

impl DoneWhen {
    /// Done when the named browser event fires (e.g. `load`, `networkidle0`)
    pub fn event(event: impl Into<String>) -> Self {
        Self {
            event: Some(event.into()),
            ..Default::default()
        }
    }

    /// Done when an element matching the selector exists
    pub fn selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            ..Default::default()
        }
    }

    /// Done when the page text contains the fragment
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Done when the main response carries the status code
    pub fn status_code(code: i32) -> Self {
        Self {
            status_code: Some(code),
            ..Default::default()
        }
    }
}

/// Regex rule applied to outgoing resource requests
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceModifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Refuse matching requests entirely
    #[serde(skip_serializing_if = "is_false")]
    pub is_blacklisted: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub set_header: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_url: Option<String>,
}

impl ResourceModifier {
    /// Blacklist rule refusing every request whose URL matches `regex`
    pub fn block(regex: impl Into<String>) -> Self {
        Self {
            regex: Some(regex.into()),
            is_blacklisted: true,
            ..Default::default()
        }
    }
}

/// Settings controlling how the finished page is rendered into an artifact
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    /// JPEG quality, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub pass_through_headers: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pass_through_status_code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_rectangle: Option<ClipRectangle>,
    /// Capture only the element matching this selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_dom: Option<String>,
    /// CSS media type to emulate, e.g. `print` or `screen`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulate_media: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_response_headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_options: Option<PdfOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png_options: Option<PngOptions>,
    #[serde(rename = "iFrameMaxCount", skip_serializing_if = "Option::is_none")]
    pub iframe_max_count: Option<u32>,
    #[serde(rename = "iFrameMaxDepth", skip_serializing_if = "Option::is_none")]
    pub iframe_max_depth: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub omit_background: bool,
    #[serde(rename = "renderIFrame", skip_serializing_if = "is_false")]
    pub render_iframe: bool,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub zoom_factor: f64,
}

/// PNG encoder options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PngOptions {
    /// zlib compression level, 0-9
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<u32>,
}

/// Simulated display dimensions and emulation flags
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub device_scale_factor: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub is_mobile: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub has_touch: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_landscape: bool,
}

impl Viewport {
    /// Plain desktop viewport with no emulation flags
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

/// Pixel region the capture is clipped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClipRectangle {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

/// PDF layout options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfOptions {
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub scale: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub display_header_footer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_template: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub print_background: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub landscape: bool,
    /// Pages to print, e.g. `1-3, 5`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ranges: Option<String>,
    /// Paper format, e.g. `A4`, `Letter`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Paper width with unit, e.g. `8.5in`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// PDF page margins, each with unit, e.g. `1cm`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Margin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
}
