// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! PhantomJsCloud API client
//!
//! Serializes request documents, POSTs them to the service endpoint and
//! decodes the response envelope plus the `pjsc-*` metadata headers. One
//! outbound HTTPS request per call, awaited to completion; no retries, no
//! internal state.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::HeaderMap;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::{Error, Result};
use crate::script::ScriptBuilder;
use crate::types::{
    PageRequest, PdfOptions, RenderSettings, RenderType, ResponseMetadata, UserRequest,
    UserResponse, UserResponseWithMeta,
};

const BASE_ENDPOINT: &str = "https://phantomjscloud.com/api/browser/v2/";

/// Shared demo key with a low per-IP quota. Not for production use.
pub const DEMO_API_KEY: &str = "a-demo-key-with-low-quota-per-ip-address";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, applied to the whole call
    pub timeout: Duration,
    /// Base endpoint the API key path segment is appended to
    pub endpoint: String,
    /// Pre-built HTTP client; overrides `timeout` when set
    pub http_client: Option<reqwest::Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            endpoint: BASE_ENDPOINT.to_string(),
            http_client: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the base endpoint (for testing against a mock server).
    /// Must end with `/`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Supply a custom HTTP client
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

/// A PhantomJsCloud API client
///
/// Reusable across tasks; the underlying HTTP client pools connections and
/// is cheap to clone.
///
/// ```no_run
/// use phantomjscloud::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api_key = std::env::var("PHANTOMJSCLOUD_API_KEY").unwrap_or_default();
///     let client = Client::new(&api_key)?;
///     let text = client.fetch_plain_text("https://example.com").await?;
///     println!("{text}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    endpoint: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client with the default configuration. An empty `api_key`
    /// substitutes [`DEMO_API_KEY`] (not recommended for production).
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        let api_key = if api_key.is_empty() {
            DEMO_API_KEY
        } else {
            api_key
        };
        // Validate early so a bad endpoint fails at construction, not submit.
        Url::parse(&config.endpoint)?;

        let http = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().timeout(config.timeout).build()?,
        };

        Ok(Self {
            api_key: api_key.to_string(),
            endpoint: config.endpoint,
            http,
        })
    }

    /// The effective API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Serialize the request, POST it and parse the response envelope plus
    /// the metadata headers.
    pub async fn execute(&self, req: &UserRequest) -> Result<UserResponseWithMeta> {
        let url = format!("{}{}/", self.endpoint, self.api_key);
        tracing::debug!(pages = req.pages.len(), "submitting render request");

        let resp = self.http.post(&url).json(req).send().await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.text().await?;

        if (400..600).contains(&status) {
            tracing::warn!(status, "upstream error response");
            return Err(Error::Upstream { status, body });
        }

        let response: UserResponse = serde_json::from_str(&body)?;
        let metadata = parse_metadata(&headers);
        tracing::debug!(
            status = %response.status,
            credit_cost = metadata.billing_credit_cost,
            "render response received"
        );

        Ok(UserResponseWithMeta { response, metadata })
    }

    /// Wrap a single page request in a [`UserRequest`] and execute it.
    pub async fn execute_page(&self, page: PageRequest) -> Result<UserResponseWithMeta> {
        self.execute(&UserRequest::single(page)).await
    }

    /// [`execute`](Self::execute) racing a caller-supplied cancellation
    /// token. A token cancelled before submission errors without touching
    /// the network; cancellation mid-flight aborts the request.
    pub async fn execute_cancellable(
        &self,
        req: &UserRequest,
        cancel: &CancellationToken,
    ) -> Result<UserResponseWithMeta> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        tokio::select! {
            _ = cancel.cancelled() => Err(Error::Cancelled),
            res = self.execute(req) => res,
        }
    }

    /// Single-page variant of [`execute_cancellable`](Self::execute_cancellable).
    pub async fn execute_page_cancellable(
        &self,
        page: PageRequest,
        cancel: &CancellationToken,
    ) -> Result<UserResponseWithMeta> {
        self.execute_cancellable(&UserRequest::single(page), cancel)
            .await
    }

    /// Fetch a URL rendered as PDF, returning the decoded bytes.
    pub async fn fetch_pdf(&self, url: &str, options: Option<PdfOptions>) -> Result<Vec<u8>> {
        let mut page = PageRequest::new(url);
        page.render_type = RenderType::Pdf;
        if let Some(opts) = options {
            page.render_settings.pdf_options = Some(opts);
        }

        let res = self.execute_page(page).await?;
        let first = res
            .response
            .page_responses
            .first()
            .ok_or(Error::NoPageResponse)?;
        Ok(BASE64.decode(&first.content)?)
    }

    /// Fetch the page text stripped of all markup. Useful for feeding
    /// lightweight text into LLM pipelines or semantic analysis.
    pub async fn fetch_plain_text(&self, url: &str) -> Result<String> {
        let mut page = PageRequest::new(url);
        page.render_type = RenderType::PlainText;

        let res = self.execute_page(page).await?;
        let first = res
            .response
            .page_responses
            .first()
            .ok_or(Error::NoPageResponse)?;
        Ok(first.content.clone())
    }

    /// Fetch a screenshot of a URL, returning the decoded image bytes.
    /// Render types other than PNG and JPEG are normalized to PNG.
    pub async fn fetch_screenshot(
        &self,
        url: &str,
        render_type: RenderType,
        render_settings: Option<RenderSettings>,
    ) -> Result<Vec<u8>> {
        let mut page = PageRequest::new(url);
        page.render_type = match render_type {
            RenderType::Png | RenderType::Jpeg => render_type,
            _ => RenderType::Png,
        };
        if let Some(rs) = render_settings {
            page.render_settings = rs;
        }

        let res = self.execute_page(page).await?;
        let first = res
            .response
            .page_responses
            .first()
            .ok_or(Error::NoPageResponse)?;
        Ok(BASE64.decode(&first.content)?)
    }

    /// Render inline HTML instead of fetching a URL, returning the decoded
    /// artifact bytes. Render types other than PNG, JPEG and PDF are
    /// normalized to PNG.
    pub async fn render_raw_html(
        &self,
        html: &str,
        render_type: RenderType,
        render_settings: Option<RenderSettings>,
    ) -> Result<Vec<u8>> {
        let mut page = PageRequest::new("http://localhost/blank");
        page.content = Some(html.to_string());
        page.render_type = match render_type {
            RenderType::Png | RenderType::Jpeg | RenderType::Pdf => render_type,
            _ => RenderType::Png,
        };
        if let Some(rs) = render_settings {
            page.render_settings = rs;
        }

        let res = self.execute_page(page).await?;
        let first = res
            .response
            .page_responses
            .first()
            .ok_or(Error::NoPageResponse)?;
        Ok(BASE64.decode(&first.content)?)
    }

    /// Execute a built overseer script and extract the recorded
    /// `automationResult` value. A missing or null result is
    /// [`Error::MissingAutomationResult`].
    pub async fn fetch_with_automation(
        &self,
        url: &str,
        builder: &ScriptBuilder,
    ) -> Result<serde_json::Value> {
        let mut page = PageRequest::new(url);
        page.render_type = RenderType::Automation;
        page.output_as_json = true;
        page.overseer_script = Some(builder.build());

        let res = self.execute_page(page).await?;
        let first = res
            .response
            .page_responses
            .first()
            .ok_or(Error::NoPageResponse)?;

        match &first.automation_result {
            Some(value) if !value.is_null() => Ok(value.clone()),
            _ => Err(Error::MissingAutomationResult),
        }
    }
}

/// Extract the advisory `pjsc-*` headers. Malformed numeric values are
/// ignored, leaving the field at zero.
fn parse_metadata(headers: &HeaderMap) -> ResponseMetadata {
    let mut meta = ResponseMetadata::default();

    if let Some(cost) = header_str(headers, "pjsc-billing-credit-cost") {
        if let Ok(cost) = cost.parse::<f64>() {
            meta.billing_credit_cost = cost;
        }
    }
    if let Some(code) = header_str(headers, "pjsc-content-status-code") {
        if let Ok(code) = code.parse::<i32>() {
            meta.content_status_code = code;
        }
    }
    if let Some(done_when) = header_str(headers, "pjsc-content-done-when") {
        meta.content_done_when = done_when.to_string();
    }

    meta
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> Client {
        Client::with_config(
            "test-key",
            ClientConfig::new().endpoint(format!("{}/api/browser/v2/", server.uri())),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_api_key_uses_demo_key() {
        let client = Client::new("").unwrap();
        assert_eq!(client.api_key(), DEMO_API_KEY);

        let client = Client::new("real-key").unwrap();
        assert_eq!(client.api_key(), "real-key");
    }

    #[test]
    fn test_invalid_endpoint_rejected_at_construction() {
        let res = Client::with_config("k", ClientConfig::new().endpoint("not a url"));
        assert!(matches!(res, Err(Error::Url(_))));
    }

    #[test]
    fn test_parse_metadata() {
        let mut headers = HeaderMap::new();
        headers.insert("pjsc-billing-credit-cost", "2.25".parse().unwrap());
        headers.insert("pjsc-content-status-code", "201".parse().unwrap());
        headers.insert("pjsc-content-done-when", "load".parse().unwrap());

        let meta = parse_metadata(&headers);
        assert_eq!(meta.billing_credit_cost, 2.25);
        assert_eq!(meta.content_status_code, 201);
        assert_eq!(meta.content_done_when, "load");
    }

    #[test]
    fn test_parse_metadata_ignores_malformed_numbers() {
        let mut headers = HeaderMap::new();
        headers.insert("pjsc-billing-credit-cost", "not-a-float".parse().unwrap());
        headers.insert("pjsc-content-status-code", "2O1".parse().unwrap());
        headers.insert("pjsc-content-done-when", "selector".parse().unwrap());

        let meta = parse_metadata(&headers);
        assert_eq!(meta.billing_credit_cost, 0.0);
        assert_eq!(meta.content_status_code, 0);
        assert_eq!(meta.content_done_when, "selector");
    }

    #[test]
    fn test_parse_metadata_absent_headers() {
        let meta = parse_metadata(&HeaderMap::new());
        assert_eq!(meta, ResponseMetadata::default());
    }

    #[tokio::test]
    async fn test_execute_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/browser/v2/test-key/"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "pages": [
                    {"url": "http://example.com/one"},
                    {"url": "http://example.com/two"}
                ],
                "proxy": {"location": "de"}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("pjsc-billing-credit-cost", "1.00")
                    .set_body_json(json!({
                        "status": "success",
                        "billing": {"creditCost": 1.0, "quotaUsage": 0.0},
                        "pageResponses": []
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let req = UserRequest {
            pages: vec![
                PageRequest::new("http://example.com/one"),
                PageRequest::new("http://example.com/two"),
            ],
            proxy: Some(crate::types::Proxy::location("de")),
            output_as_json: true,
        };

        let res = client.execute(&req).await.unwrap();
        assert_eq!(res.response.billing.credit_cost, 1.0);
        assert_eq!(res.metadata.billing_credit_cost, 1.0);
    }

    #[tokio::test]
    async fn test_execute_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(402).set_body_string("payment required"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .execute(&UserRequest::single(PageRequest::new("http://example.com")))
            .await
            .unwrap_err();

        match err {
            Error::Upstream { status, body } => {
                assert_eq!(status, 402);
                assert_eq!(body, "payment required");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .execute(&UserRequest::single(PageRequest::new("http://example.com")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_with_automation() {
        let want_script = "await page.goto('https://example.com');\n";

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "pages": [{
                    "renderType": "automation",
                    "outputAsJson": true,
                    "overseerScript": want_script
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": [{"automationResult": {"ok": true}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client
            .fetch_with_automation(
                "https://example.com",
                &ScriptBuilder::new().goto("https://example.com"),
            )
            .await
            .unwrap();
        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_fetch_with_automation_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": [{"automationResult": null}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .fetch_with_automation("https://example.com", &ScriptBuilder::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("automation result"));
    }

    #[tokio::test]
    async fn test_fetch_pdf_decodes_base64() {
        let pdf_bytes = b"%PDF-1.4 fake";
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "pages": [{"renderType": "pdf"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": [{"content": BASE64.encode(pdf_bytes)}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let bytes = client
            .fetch_pdf("https://example.com", None)
            .await
            .unwrap();
        assert_eq!(bytes, pdf_bytes);
    }

    #[tokio::test]
    async fn test_fetch_pdf_invalid_base64() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": [{"content": "@@not-base64@@"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .fetch_pdf("https://example.com", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
    }

    #[tokio::test]
    async fn test_fetch_plain_text_returns_content_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "pages": [{"renderType": "plainText"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": [{"content": "Example Domain"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let text = client.fetch_plain_text("https://example.com").await.unwrap();
        assert_eq!(text, "Example Domain");
    }

    #[tokio::test]
    async fn test_fetch_screenshot_normalizes_render_type() {
        let png_bytes = b"\x89PNG fake";
        let server = MockServer::start().await;
        // Asking for plainText as a screenshot must submit png.
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "pages": [{"renderType": "png"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": [{"content": BASE64.encode(png_bytes)}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let bytes = client
            .fetch_screenshot("https://example.com", RenderType::PlainText, None)
            .await
            .unwrap();
        assert_eq!(bytes, png_bytes);
    }

    #[tokio::test]
    async fn test_render_raw_html_submits_inline_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "pages": [{
                    "url": "http://localhost/blank",
                    "content": "<h1>hi</h1>",
                    "renderType": "pdf"
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": [{"content": BASE64.encode(b"%PDF")}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let bytes = client
            .render_raw_html("<h1>hi</h1>", RenderType::Pdf, None)
            .await
            .unwrap();
        assert_eq!(bytes, b"%PDF");
    }

    #[tokio::test]
    async fn test_empty_page_responses_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "pageResponses": []
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .fetch_plain_text("https://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoPageResponse));
    }

    #[tokio::test]
    async fn test_cancelled_token_skips_network() {
        // No mock mounted: any network hit would fail loudly with expect().
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client
            .execute_cancellable(
                &UserRequest::single(PageRequest::new("http://example.com")),
                &cancel,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(30))
                    .set_body_json(json!({"status": "success"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let err = client
            .execute_page_cancellable(PageRequest::new("http://example.com"), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.endpoint, BASE_ENDPOINT);
        assert!(config.http_client.is_none());
    }

    #[test]
    fn test_config_fluent_setters() {
        let config = ClientConfig::new()
            .timeout(Duration::from_secs(30))
            .endpoint("https://localhost:9999/api/browser/v2/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.endpoint.starts_with("https://localhost"));
    }
}
