// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fluent page request builder

use std::collections::BTreeMap;

use crate::presets::useragents::Profile;
use crate::script::ScriptBuilder;
use crate::types::{
    Authentication, ClipRectangle, Cookie, DoneWhen, PageRequest, PdfOptions, Proxy,
    RenderSettings, RenderType, RequestSettings, ResourceModifier, Scripts, UrlSettings, Viewport,
};

/// Constructs a [`PageRequest`] using a fluent API
///
/// The recommended way to compose requests from [`presets`](crate::presets)
/// without manually nesting `RequestSettings` and `RenderSettings`:
///
/// ```
/// use phantomjscloud::presets::{blocklist, useragents, viewport};
/// use phantomjscloud::{PageRequestBuilder, Proxy, RenderType};
///
/// let req = PageRequestBuilder::new("https://example.com")
///     .render_type(RenderType::Jpeg)
///     .proxy(Proxy::location("us"))
///     .render_settings(viewport::FHD.as_render_settings())
///     .profile(&useragents::chrome_windows_profile())
///     .blocklist(blocklist::lightweight())
///     .build();
/// ```
///
/// Field setters follow last-write-wins semantics, including after a
/// whole-struct replace via [`request_settings`](Self::request_settings) or
/// [`render_settings`](Self::render_settings). The one exception is
/// [`blocklist`](Self::blocklist), which accumulates across calls.
#[derive(Debug, Clone, Default)]
pub struct PageRequestBuilder {
    req: PageRequest,
}

impl PageRequestBuilder {
    /// Builder for the given URL. The render type defaults to HTML when
    /// never set.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            req: PageRequest::new(url),
        }
    }

    /// Override the target URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.req.url = url.into();
        self
    }

    /// Set the output format.
    pub fn render_type(mut self, rt: RenderType) -> Self {
        self.req.render_type = rt;
        self
    }

    /// Wrap the response in a full JSON envelope.
    pub fn output_as_json(mut self, v: bool) -> Self {
        self.req.output_as_json = v;
        self
    }

    /// Set the proxy: a symbolic preset string or a structured record.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.req.proxy = Some(proxy);
        self
    }

    /// Set the User-Agent string. Prefer [`profile`](Self::profile) for a
    /// complete fingerprint.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.req.request_settings.user_agent = Some(ua.into());
        self
    }

    /// Replace all custom request headers. To add individual headers
    /// without clearing existing ones use [`header`](Self::header).
    pub fn custom_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.req.request_settings.custom_headers = headers;
        self
    }

    /// Add or override a single custom request header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.req
            .request_settings
            .custom_headers
            .insert(key.into(), value.into());
        self
    }

    /// Set the user agent and merge the full matching header bundle
    /// (Accept, Sec-CH-UA, Accept-Language, Sec-Fetch-* etc.) from a
    /// [`presets::useragents`](crate::presets::useragents) profile in one
    /// call.
    pub fn profile(mut self, p: &Profile) -> Self {
        self.req.request_settings.user_agent = Some(p.user_agent.clone());
        for (k, v) in &p.headers {
            self.req
                .request_settings
                .custom_headers
                .insert(k.clone(), v.clone());
        }
        self
    }

    /// Set HTTP basic authentication credentials.
    pub fn authentication(
        mut self,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.req.request_settings.authentication =
            Some(Authentication::new(user_name, password));
        self
    }

    /// Initialize the browser cookie jar.
    pub fn cookies(mut self, cookies: Vec<Cookie>) -> Self {
        self.req.request_settings.cookies = cookies;
        self
    }

    /// Set the completion trigger conditions for the request.
    pub fn done_when(mut self, events: Vec<DoneWhen>) -> Self {
        self.req.request_settings.done_when = events;
        self
    }

    /// Milliseconds to wait after the page fires its done event.
    pub fn wait_interval(mut self, ms: u32) -> Self {
        self.req.request_settings.wait_interval = Some(ms);
        self
    }

    /// Skip loading all image resources, cutting request time and cost.
    pub fn ignore_images(mut self, v: bool) -> Self {
        self.req.request_settings.ignore_images = v;
        self
    }

    /// Force a cache-busting re-fetch of all resources.
    pub fn clear_cache(mut self, v: bool) -> Self {
        self.req.request_settings.clear_cache = v;
        self
    }

    /// Replace the entire request-settings block. Individual setters still
    /// work after this call and overwrite individual fields.
    pub fn request_settings(mut self, rs: RequestSettings) -> Self {
        self.req.request_settings = rs;
        self
    }

    /// Append resource-modifier rules used to block or redirect network
    /// resources. Successive calls accumulate; pass values from
    /// [`presets::blocklist`](crate::presets::blocklist):
    ///
    /// ```
    /// use phantomjscloud::{presets::blocklist, PageRequestBuilder};
    ///
    /// let req = PageRequestBuilder::new("https://example.com")
    ///     .blocklist(blocklist::ads())
    ///     .blocklist(blocklist::fonts())
    ///     .build();
    /// ```
    pub fn blocklist(mut self, rules: Vec<ResourceModifier>) -> Self {
        self.req.request_settings.resource_modifier.extend(rules);
        self
    }

    /// Alias for [`blocklist`](Self::blocklist) for arbitrary
    /// resource-modifier rules (e.g. `change_url`), not just blacklists.
    pub fn resource_modifier(self, rules: Vec<ResourceModifier>) -> Self {
        self.blocklist(rules)
    }

    /// Set the viewport dimensions. For full emulation flag presets use
    /// [`render_settings`](Self::render_settings) with
    /// [`presets::viewport`](crate::presets::viewport).
    pub fn viewport(mut self, v: Viewport) -> Self {
        self.req.render_settings.viewport = Some(v);
        self
    }

    /// Clip the capture to a pixel region.
    pub fn clip_rectangle(mut self, cr: ClipRectangle) -> Self {
        self.req.render_settings.clip_rectangle = Some(cr);
        self
    }

    /// Set the render zoom factor.
    pub fn zoom_factor(mut self, z: f64) -> Self {
        self.req.render_settings.zoom_factor = z;
        self
    }

    /// Set the CSS media type to emulate (e.g. `print`, `screen`).
    pub fn emulate_media(mut self, media: impl Into<String>) -> Self {
        self.req.render_settings.emulate_media = Some(media.into());
        self
    }

    /// Set the PDF layout options. Only meaningful with
    /// [`RenderType::Pdf`].
    pub fn pdf_options(mut self, opts: PdfOptions) -> Self {
        self.req.render_settings.pdf_options = Some(opts);
        self
    }

    /// Set the JPEG quality (0-100).
    pub fn quality(mut self, quality: u32) -> Self {
        self.req.render_settings.quality = Some(quality);
        self
    }

    /// Replace the entire render-settings block, e.g. with a preset:
    ///
    /// ```
    /// use phantomjscloud::{presets::viewport, PageRequestBuilder};
    ///
    /// let req = PageRequestBuilder::new("https://example.com")
    ///     .render_settings(viewport::THUMBNAIL_1200.as_render_settings())
    ///     .build();
    /// ```
    pub fn render_settings(mut self, rs: RenderSettings) -> Self {
        self.req.render_settings = rs;
        self
    }

    /// Set a raw automation script string. Use
    /// [`script_builder`](Self::script_builder) for the fluent alternative.
    pub fn overseer_script(mut self, script: impl Into<String>) -> Self {
        self.req.overseer_script = Some(script.into());
        self
    }

    /// Build the given [`ScriptBuilder`] and adopt the result as the
    /// overseer script.
    pub fn script_builder(mut self, sb: &ScriptBuilder) -> Self {
        self.req.overseer_script = Some(sb.build());
        self
    }

    /// Set inline HTML content to render instead of fetching the URL.
    pub fn content(mut self, html: impl Into<String>) -> Self {
        self.req.content = Some(html.into());
        self
    }

    /// Override the HTTP method/body/encoding of the initial page fetch.
    pub fn url_settings(mut self, settings: UrlSettings) -> Self {
        self.req.url_settings = Some(settings);
        self
    }

    /// Set per-lifecycle script hooks.
    pub fn scripts(mut self, scripts: Scripts) -> Self {
        self.req.scripts = Some(scripts);
        self
    }

    /// Strip the named fields from the JSON response envelope.
    pub fn suppress_json(mut self, fields: Vec<String>) -> Self {
        self.req.suppress_json = fields;
        self
    }

    /// Attach a JSON query evaluated against the response envelope.
    pub fn query_json(mut self, query: serde_json::Value) -> Self {
        self.req.query_json = Some(query);
        self
    }

    /// Select a specific service backend.
    pub fn backend(mut self, backend: impl Into<String>) -> Self {
        self.req.backend = Some(backend.into());
        self
    }

    /// Return the fully configured request. Safe to call multiple times;
    /// each call returns an independent copy of the current state.
    pub fn build(&self) -> PageRequest {
        self.req.clone()
    }
}
