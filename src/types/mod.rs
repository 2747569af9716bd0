// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Wire types for the PhantomJsCloud API
//!
//! Request documents serialize with omit-when-empty semantics: only the
//! populated fields appear in the JSON the service receives. Response
//! documents deserialize leniently, defaulting every missing field.

mod request;
mod response;

pub use request::{
    Authentication, ClipRectangle, Cookie, DoneWhen, Margin, PageRequest, PdfOptions, PngOptions,
    Proxy, ProxyOptions, RenderSettings, RenderType, RequestSettings, ResourceModifier, Scripts,
    UrlSettings, UserRequest, Viewport,
};
pub use response::{
    Billing, Event, FrameData, Metrics, PageResponse, ResourceSummary, ResponseMetadata,
    UserResponse, UserResponseWithMeta,
};

/// Symbolic proxy geolocations accepted by [`ProxyOptions`]
pub mod proxy_location {
    pub const US: &str = "us";
    pub const UK: &str = "uk";
    pub const DE: &str = "de";
    pub const FR: &str = "fr";
    pub const CA: &str = "ca";
    pub const JP: &str = "jp";
    pub const AU: &str = "au";
    pub const ANY: &str = "any";
}

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}

pub(crate) fn is_zero_f64(v: &f64) -> bool {
    *v == 0.0
}

pub(crate) fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}
