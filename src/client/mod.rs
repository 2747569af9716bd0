// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP transport to the PhantomJsCloud API

mod client;

pub use client::{Client, ClientConfig, DEMO_API_KEY};
