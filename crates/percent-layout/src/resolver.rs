//! Base reference resolution.

use percent_core::{Axis, ScreenMetrics};
use serde::{Deserialize, Serialize};

use crate::error::PercentError;
use crate::parser::{BaseReference, PercentValue};

/// Design-space dimensions used by the auto base references.
///
/// An auto value scales by `screen / design`, so a child authored against a
/// 360px wide mock-up keeps its proportions on any screen width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignReference {
    /// Nominal design width in pixels
    pub width: Option<f32>,
    /// Nominal design height in pixels
    pub height: Option<f32>,
}

impl DesignReference {
    /// Create a design reference with both axes set.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Design dimension for an axis, checked to be usable as a divisor.
    pub fn checked(&self, axis: Axis) -> Result<f32, PercentError> {
        let value = match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
        .ok_or(PercentError::MissingDesignReference { axis })?;

        if value > 0.0 {
            Ok(value)
        } else {
            Err(PercentError::InvalidDesignReference { axis, value })
        }
    }
}

/// Measurement context for one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    /// Width offered to the container
    pub width_hint: i32,
    /// Height offered to the container
    pub height_hint: i32,
    /// Screen metrics
    pub screen: ScreenMetrics,
}

impl ResolveContext {
    /// Create a new context.
    #[must_use]
    pub const fn new(width_hint: i32, height_hint: i32, screen: ScreenMetrics) -> Self {
        Self {
            width_hint,
            height_hint,
            screen,
        }
    }
}

/// Concrete quantity a base reference stands for.
pub fn resolve_base(
    base: BaseReference,
    ctx: &ResolveContext,
    design: &DesignReference,
) -> Result<f32, PercentError> {
    let value = match base {
        BaseReference::ContainerWidth => ctx.width_hint as f32,
        BaseReference::ContainerHeight => ctx.height_hint as f32,
        BaseReference::ScreenWidth => ctx.screen.width as f32,
        BaseReference::ScreenHeight => ctx.screen.height as f32,
        BaseReference::AutoWidth => ctx.screen.width as f32 / design.checked(Axis::Width)?,
        BaseReference::AutoHeight => ctx.screen.height as f32 / design.checked(Axis::Height)?,
    };
    Ok(value)
}

impl PercentValue {
    /// Resolve to pixels, truncating toward zero.
    pub fn to_pixels(
        &self,
        ctx: &ResolveContext,
        design: &DesignReference,
    ) -> Result<i32, PercentError> {
        let base = resolve_base(self.base(), ctx, design)?;
        Ok((base * self.fraction()) as i32)
    }
}
