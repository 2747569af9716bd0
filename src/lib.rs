// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # PhantomJsCloud Client
//!
//! An async client for the PhantomJsCloud remote headless-browser rendering
//! service. Builds render requests, submits them over HTTPS and decodes the
//! response envelope; all browser execution happens server-side.
//!
//! ## Features
//!
//! - Render any URL as HTML, plain text, PNG, JPEG or PDF
//! - Overseer script builder: emit Puppeteer-style automation scripts
//!   without writing JavaScript by hand
//! - Fluent page request builder over the full request surface
//! - Curated presets: viewports, browser profiles, resource blocklists and
//!   a stealth fingerprint-evasion payload
//! - Cancellation-aware request execution via `CancellationToken`
//! - Per-response billing and status metadata from the `pjsc-*` headers
//!
//! ## Example
//!
//! ```rust,no_run
//! use phantomjscloud::{Client, PageRequestBuilder, RenderType, ScriptBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(&std::env::var("PHANTOMJSCLOUD_API_KEY")?)?;
//!
//!     // Plain text of a page, one call.
//!     let text = client.fetch_plain_text("https://example.com").await?;
//!     println!("{text}");
//!
//!     // Drive the remote browser and collect a result.
//!     let script = ScriptBuilder::new()
//!         .goto("https://example.com")
//!         .wait_for_selector("h1")
//!         .evaluate("document.title")
//!         .done();
//!     let result = client
//!         .fetch_with_automation("https://example.com", &script)
//!         .await?;
//!     println!("{result}");
//!
//!     // Full control over the request document.
//!     let page = PageRequestBuilder::new("https://example.com")
//!         .render_type(RenderType::Png)
//!         .viewport(phantomjscloud::presets::viewport::FHD.viewport)
//!         .blocklist(phantomjscloud::presets::blocklist::lightweight())
//!         .build();
//!     let res = client.execute_page(page).await?;
//!     println!("cost: {}", res.metadata.billing_credit_cost);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod presets;
pub mod request;
pub mod script;
pub mod types;

// Re-exports for convenience

// Client
pub use client::{Client, ClientConfig, DEMO_API_KEY};

// Builders
pub use request::PageRequestBuilder;
pub use script::ScriptBuilder;

// Errors
pub use error::{Error, Result};

// Request model
pub use types::{
    Authentication, ClipRectangle, Cookie, DoneWhen, PageRequest, PdfOptions, PngOptions, Proxy,
    ProxyOptions, RenderSettings, RenderType, RequestSettings, ResourceModifier, Scripts,
    UrlSettings, UserRequest, Viewport,
};

// Response model
pub use types::{
    Billing, Event, FrameData, Metrics, PageResponse, ResourceSummary, ResponseMetadata,
    UserResponse, UserResponseWithMeta,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
