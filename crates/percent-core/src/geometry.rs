//! Layout parameter primitives: `Axis`, `Dimension`, `Edges`, `Margins`, `Rect`.

use serde::{Deserialize, Serialize};

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis
    Width,
    /// Vertical axis
    Height,
}

impl Axis {
    /// Check if this is the horizontal axis.
    #[must_use]
    pub const fn is_width(self) -> bool {
        matches!(self, Self::Width)
    }
}

/// A declared width or height in a child's layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    /// Fill the space offered by the parent
    MatchParent,
    /// Size to content (the intrinsic-sizing sentinel)
    WrapContent,
    /// Absolute size in pixels
    Px(i32),
}

impl Dimension {
    /// Check if this is the intrinsic-sizing sentinel.
    #[must_use]
    pub const fn is_wrap_content(self) -> bool {
        matches!(self, Self::WrapContent)
    }
}

impl Default for Dimension {
    /// Absent width/height attributes read as zero pixels.
    fn default() -> Self {
        Self::Px(0)
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Self::Px(px)
    }
}

/// Pixel insets on the four physical sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges {
    /// Left inset
    pub left: i32,
    /// Top inset
    pub top: i32,
    /// Right inset
    pub right: i32,
    /// Bottom inset
    pub bottom: i32,
}

impl Edges {
    /// No insets.
    pub const ZERO: Self = Self::uniform(0);

    /// Create edges from individual sides.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create edges with the same inset on every side.
    #[must_use]
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Total horizontal inset.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical inset.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Pixel rectangle assigned to a container during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Reading direction used to map start/end margins to physical sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Start is left
    #[default]
    Ltr,
    /// Start is right
    Rtl,
}

/// Per-side spacing of a margin-capable child.
///
/// `start` and `end` are relative to the reading direction. When set they take
/// precedence over the physical side they map to, see [`Margins::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margins {
    /// Left margin
    pub left: i32,
    /// Top margin
    pub top: i32,
    /// Right margin
    pub right: i32,
    /// Bottom margin
    pub bottom: i32,
    /// Start margin, unset by default
    pub start: Option<i32>,
    /// End margin, unset by default
    pub end: Option<i32>,
}

impl Margins {
    /// Create margins from the four physical sides.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            start: None,
            end: None,
        }
    }

    /// Create margins with the same value on every physical side.
    #[must_use]
    pub const fn uniform(margin: i32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Set the start margin.
    #[must_use]
    pub const fn with_start(mut self, start: i32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end margin.
    #[must_use]
    pub const fn with_end(mut self, end: i32) -> Self {
        self.end = Some(end);
        self
    }

    /// Physical margins after applying start/end for the given direction.
    #[must_use]
    pub fn resolve(&self, direction: LayoutDirection) -> Edges {
        let mut edges = Edges::new(self.left, self.top, self.right, self.bottom);
        match direction {
            LayoutDirection::Ltr => {
                if let Some(start) = self.start {
                    edges.left = start;
                }
                if let Some(end) = self.end {
                    edges.right = end;
                }
            }
            LayoutDirection::Rtl => {
                if let Some(start) = self.start {
                    edges.right = start;
                }
                if let Some(end) = self.end {
                    edges.left = end;
                }
            }
        }
        edges
    }
}
