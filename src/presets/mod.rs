// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Preset lookup tables
//!
//! Ready-made viewports, user-agent fingerprint profiles, resource
//! blocklists and the embedded stealth payload. These are data, not
//! engineering; pass them to [`PageRequestBuilder`](crate::PageRequestBuilder)
//! and [`ScriptBuilder`](crate::ScriptBuilder).

pub mod blocklist;
pub mod stealth;
pub mod useragents;
pub mod viewport;
