// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request composition
//!
//! Fluent construction of [`PageRequest`](crate::types::PageRequest)
//! documents from presets and individual settings.

mod builder;

pub use builder::PageRequestBuilder;
