// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Overseer script construction
//!
//! The automation API executes a JavaScript program ("overseer script")
//! remotely inside the browser context. [`ScriptBuilder`] composes that
//! program one statement at a time.

mod builder;

pub use builder::ScriptBuilder;
