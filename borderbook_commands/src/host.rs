// Copyright 2025 the Borderbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary to the host application's live render-border state.

/// Read/write access to the host's live render border.
///
/// The live border is a single rectangle on the active document's render
/// configuration: an enable flag plus normalized `(min, max)` spans along X
/// and Y. Capture reads it; Apply writes it. Hosts implement this trait over
/// whatever their render-settings object looks like; [`LiveBorder`] is a
/// plain in-memory implementation for tests and embedders without one.
///
/// Spans follow the same conventions as
/// [`BorderRecord`](borderbook_store::BorderRecord): both bounds nominally in
/// `[0.0, 1.0]`, ordering not enforced.
pub trait RenderHost {
    /// Returns `true` if render-border cropping is enabled.
    fn border_enabled(&self) -> bool;

    /// Enables or disables render-border cropping.
    fn set_border_enabled(&mut self, enabled: bool);

    /// Returns the live border's `(min, max)` span along X.
    fn border_x(&self) -> [f64; 2];

    /// Returns the live border's `(min, max)` span along Y.
    fn border_y(&self) -> [f64; 2];

    /// Sets the live border's X span.
    fn set_border_x(&mut self, range: [f64; 2]);

    /// Sets the live border's Y span.
    fn set_border_y(&mut self, range: [f64; 2]);
}

/// An in-memory [`RenderHost`]: a bare enable flag plus the two spans.
///
/// Defaults to a disabled, full-frame border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveBorder {
    /// Whether render-border cropping is enabled.
    pub enabled: bool,
    /// Normalized `(min, max)` span along X.
    pub x_range: [f64; 2],
    /// Normalized `(min, max)` span along Y.
    pub y_range: [f64; 2],
}

impl Default for LiveBorder {
    fn default() -> Self {
        Self {
            enabled: false,
            x_range: [0.0, 1.0],
            y_range: [0.0, 1.0],
        }
    }
}

impl RenderHost for LiveBorder {
    fn border_enabled(&self) -> bool {
        self.enabled
    }

    fn set_border_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn border_x(&self) -> [f64; 2] {
        self.x_range
    }

    fn border_y(&self) -> [f64; 2] {
        self.y_range
    }

    fn set_border_x(&mut self, range: [f64; 2]) {
        self.x_range = range;
    }

    fn set_border_y(&mut self, range: [f64; 2]) {
        self.y_range = range;
    }
}
