// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Named viewport presets

use crate::types::{ClipRectangle, RenderSettings, Viewport};

/// A named viewport configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub viewport: Viewport,
    /// `None` means no clip (full page)
    pub clip_rectangle: Option<ClipRectangle>,
    /// 0 means use the service default (1.0)
    pub zoom_factor: f64,
}

impl Preset {
    /// Convert the preset into a [`RenderSettings`] ready to drop into a
    /// page request.
    pub fn as_render_settings(&self) -> RenderSettings {
        RenderSettings {
            viewport: Some(self.viewport),
            clip_rectangle: self.clip_rectangle,
            zoom_factor: self.zoom_factor,
            ..Default::default()
        }
    }
}

const fn desktop(width: u32, height: u32) -> Viewport {
    Viewport {
        width,
        height,
        device_scale_factor: 0.0,
        is_mobile: false,
        has_touch: false,
        is_landscape: false,
    }
}

// ── Desktop presets ──────────────────────────────────────────────────────

/// Standard 1280×720 desktop viewport.
pub const HD: Preset = Preset {
    viewport: desktop(1280, 720),
    clip_rectangle: None,
    zoom_factor: 0.0,
};

/// 1920×1080 Full HD desktop viewport, the most common monitor resolution.
pub const FHD: Preset = Preset {
    viewport: desktop(1920, 1080),
    clip_rectangle: None,
    zoom_factor: 0.0,
};

/// 2560×1440 Quad HD desktop viewport.
pub const QHD: Preset = Preset {
    viewport: desktop(2560, 1440),
    clip_rectangle: None,
    zoom_factor: 0.0,
};

/// 3840×2160 4K desktop viewport.
pub const UHD: Preset = Preset {
    viewport: desktop(3840, 2160),
    clip_rectangle: None,
    zoom_factor: 0.0,
};

/// Common laptop viewport (1366×768).
pub const LAPTOP: Preset = Preset {
    viewport: desktop(1366, 768),
    clip_rectangle: None,
    zoom_factor: 0.0,
};

// ── Mobile presets ───────────────────────────────────────────────────────

/// Standard smartphone in portrait orientation (390×844, Pixel 8 /
/// iPhone 15 Pro class).
pub const MOBILE_PORTRAIT: Preset = Preset {
    viewport: Viewport {
        width: 390,
        height: 844,
        device_scale_factor: 3.0,
        is_mobile: true,
        has_touch: true,
        is_landscape: false,
    },
    clip_rectangle: None,
    zoom_factor: 0.0,
};

/// Standard smartphone in landscape orientation.
pub const MOBILE_LANDSCAPE: Preset = Preset {
    viewport: Viewport {
        width: 844,
        height: 390,
        device_scale_factor: 3.0,
        is_mobile: true,
        has_touch: true,
        is_landscape: true,
    },
    clip_rectangle: None,
    zoom_factor: 0.0,
};

/// Tablet in portrait orientation (768×1024, iPad-ish).
pub const TABLET_PORTRAIT: Preset = Preset {
    viewport: Viewport {
        width: 768,
        height: 1024,
        device_scale_factor: 2.0,
        is_mobile: true,
        has_touch: true,
        is_landscape: false,
    },
    clip_rectangle: None,
    zoom_factor: 0.0,
};

/// Tablet in landscape orientation.
pub const TABLET_LANDSCAPE: Preset = Preset {
    viewport: Viewport {
        width: 1024,
        height: 768,
        device_scale_factor: 2.0,
        is_mobile: true,
        has_touch: true,
        is_landscape: true,
    },
    clip_rectangle: None,
    zoom_factor: 0.0,
};

// ── Thumbnail presets ────────────────────────────────────────────────────

/// Full-width render clipped to a 640×480 thumbnail. Ideal for link
/// previews and card images.
pub const THUMBNAIL_640: Preset = Preset {
    viewport: desktop(1280, 800),
    clip_rectangle: Some(ClipRectangle {
        top: 0,
        left: 0,
        width: 640,
        height: 480,
    }),
    zoom_factor: 0.5,
};

/// Standard 1200×630 Open Graph thumbnail. Use with
/// [`RenderType::Jpeg`](crate::RenderType::Jpeg) for maximum compatibility.
pub const THUMBNAIL_1200: Preset = Preset {
    viewport: desktop(1200, 630),
    clip_rectangle: Some(ClipRectangle {
        top: 0,
        left: 0,
        width: 1200,
        height: 630,
    }),
    zoom_factor: 0.0,
};

/// Simple preset from a width and height with no clip or zoom.
pub fn custom(width: u32, height: u32) -> Preset {
    Preset {
        viewport: desktop(width, height),
        clip_rectangle: None,
        zoom_factor: 0.0,
    }
}
