//! Measurement specs handed from a container to its children.

use serde::{Deserialize, Serialize};

/// How a [`MeasureSpec`] size constrains the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasureMode {
    /// No constraint, the size is only a hint
    #[default]
    Unspecified,
    /// The child must be exactly this size
    Exactly,
    /// The child may be up to this size
    AtMost,
}

/// Space offered along one axis during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// Offered size in pixels
    pub size: i32,
    /// Constraint mode
    pub mode: MeasureMode,
}

impl MeasureSpec {
    /// Create a new spec.
    #[must_use]
    pub const fn new(size: i32, mode: MeasureMode) -> Self {
        Self { size, mode }
    }

    /// Spec requiring an exact size.
    #[must_use]
    pub const fn exactly(size: i32) -> Self {
        Self::new(size, MeasureMode::Exactly)
    }

    /// Spec allowing any size up to `size`.
    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self::new(size, MeasureMode::AtMost)
    }

    /// Spec with no constraint.
    #[must_use]
    pub const fn unspecified(size: i32) -> Self {
        Self::new(size, MeasureMode::Unspecified)
    }

    /// Same mode with a different size.
    #[must_use]
    pub const fn with_size(self, size: i32) -> Self {
        Self::new(size, self.mode)
    }

    /// Check if the spec carries no constraint.
    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self.mode, MeasureMode::Unspecified)
    }

    /// Reconcile a desired size with this spec.
    ///
    /// Returns the size to report and whether it was clamped below `desired`.
    #[must_use]
    pub fn resolve(&self, desired: i32) -> (i32, AxisState) {
        match self.mode {
            MeasureMode::Unspecified => (desired, AxisState::Fits),
            MeasureMode::AtMost if self.size < desired => (self.size, AxisState::TooSmall),
            MeasureMode::AtMost => (desired, AxisState::Fits),
            MeasureMode::Exactly if self.size < desired => (self.size, AxisState::TooSmall),
            MeasureMode::Exactly => (self.size, AxisState::Fits),
        }
    }
}

/// Outcome of measuring one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisState {
    /// The measured size satisfies the content
    #[default]
    Fits,
    /// The measured size was clamped below what the content needs
    TooSmall,
}

/// Per-axis state recorded by the host after measuring a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasuredState {
    /// Horizontal outcome
    pub width: AxisState,
    /// Vertical outcome
    pub height: AxisState,
}

impl MeasuredState {
    /// Create a new measured state.
    #[must_use]
    pub const fn new(width: AxisState, height: AxisState) -> Self {
        Self { width, height }
    }

    /// Check if the horizontal measurement was clamped.
    #[must_use]
    pub const fn width_too_small(&self) -> bool {
        matches!(self.width, AxisState::TooSmall)
    }

    /// Check if the vertical measurement was clamped.
    #[must_use]
    pub const fn height_too_small(&self) -> bool {
        matches!(self.height, AxisState::TooSmall)
    }
}
