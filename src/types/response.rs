// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response document types
//!
//! The service answers with a [`UserResponse`] envelope: one
//! [`PageResponse`] per requested page plus billing and status. Binary
//! artifacts (PNG, JPEG, PDF) arrive base64-encoded in `content`; HTML and
//! plain text arrive as raw text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Cookie, DoneWhen};

/// Root response envelope
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserResponse {
    pub page_responses: Vec<PageResponse>,
    pub billing: Billing,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_json: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_request: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Credit cost and quota consumption for one call
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Billing {
    pub credit_cost: f64,
    pub quota_usage: f64,
}

/// Result for a single requested page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageResponse {
    /// The rendered artifact: raw text for html/plainText, base64 otherwise
    pub content: String,
    pub metrics: Metrics,
    /// Captured network events grouped by lifecycle phase
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, Vec<Event>>,
    pub status_code: i32,
    pub status_text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub done_when: Vec<DoneWhen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_data: Option<FrameData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<Cookie>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_errors: Vec<String>,
    /// Value recorded by the overseer script, schema-free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_phase: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<serde_json::Value>,
}

/// Per-page render timings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    pub wait_interval: i32,
    pub billing_render_ms: i32,
    pub page_load_start_time: i64,
    pub page_load_finish_time: i64,
    pub total_render_time_ms: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_summary: Option<ResourceSummary>,
}

/// Resource request counts by terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSummary {
    pub aborted: i32,
    pub active: i32,
    pub complete: i32,
    pub failed: i32,
    pub late: i32,
    pub orphaned: i32,
}

/// A captured network event
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_base64: Option<String>,
}

/// Rendered iframe tree node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameData {
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_frames: Vec<FrameData>,
}

/// Out-of-band signals parsed from the `pjsc-*` response headers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseMetadata {
    /// Value of `pjsc-billing-credit-cost`; 0 when absent or malformed
    pub billing_credit_cost: f64,
    /// Value of `pjsc-content-status-code`; 0 when absent or malformed
    pub content_status_code: i32,
    /// Value of `pjsc-content-done-when`; empty when absent
    pub content_done_when: String,
}

/// A decoded [`UserResponse`] paired with its header-derived metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserResponseWithMeta {
    pub response: UserResponse,
    pub metadata: ResponseMetadata,
}
