//! Screen metrics.

use serde::{Deserialize, Serialize};

/// Pixel size of the display the layout is rendered on.
///
/// Captured once by whoever owns the display and injected into every engine;
/// it is treated as constant for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    /// Screen width in pixels
    pub width: i32,
    /// Screen height in pixels
    pub height: i32,
}

impl ScreenMetrics {
    /// Create new screen metrics.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
