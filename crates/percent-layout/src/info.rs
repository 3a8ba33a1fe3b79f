//! Per-child percent layout information.

use percent_core::{Dimension, Margins};
use serde::{Deserialize, Serialize};

use crate::error::PercentError;
use crate::parser::PercentValue;
use crate::resolver::{DesignReference, ResolveContext};

/// Width, height and margins as they stood before the latest resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreservedParams {
    /// Declared width
    pub width: Dimension,
    /// Declared height
    pub height: Dimension,
    /// Declared margins
    pub margins: Margins,
}

/// Percent attributes declared by one child, plus the snapshot used to undo
/// their resolution.
///
/// A value with every percent field unset is valid and resolves to nothing.
/// Read from attributes with [`LayoutInfo::from_attributes`], which validates
/// the design reference; there is no direct deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutInfo {
    /// Width
    pub width: Option<PercentValue>,
    /// Height
    pub height: Option<PercentValue>,
    /// Left margin
    pub margin_left: Option<PercentValue>,
    /// Top margin
    pub margin_top: Option<PercentValue>,
    /// Right margin
    pub margin_right: Option<PercentValue>,
    /// Bottom margin
    pub margin_bottom: Option<PercentValue>,
    /// Start margin, wins over the physical side it maps to
    pub margin_start: Option<PercentValue>,
    /// End margin, wins over the physical side it maps to
    pub margin_end: Option<PercentValue>,
    /// Left padding
    pub padding_left: Option<PercentValue>,
    /// Top padding
    pub padding_top: Option<PercentValue>,
    /// Right padding
    pub padding_right: Option<PercentValue>,
    /// Bottom padding
    pub padding_bottom: Option<PercentValue>,
    /// Text size in pixels
    pub text_size: Option<PercentValue>,
    /// Minimum width
    pub min_width: Option<PercentValue>,
    /// Minimum height
    pub min_height: Option<PercentValue>,
    /// Maximum width
    pub max_width: Option<PercentValue>,
    /// Maximum height
    pub max_height: Option<PercentValue>,
    /// Design reference for auto bases
    pub design: DesignReference,
    #[serde(skip)]
    pub(crate) preserved: PreservedParams,
}

impl LayoutInfo {
    /// Create an empty layout info.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the design reference.
    #[must_use]
    pub fn with_design(mut self, design: DesignReference) -> Self {
        self.design = design;
        self
    }

    /// Every percent field, in declaration order.
    fn values(&self) -> [Option<PercentValue>; 17] {
        [
            self.width,
            self.height,
            self.margin_left,
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_start,
            self.margin_end,
            self.padding_left,
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
            self.text_size,
            self.min_width,
            self.min_height,
            self.max_width,
            self.max_height,
        ]
    }

    /// Check if no percent field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(Option::is_none)
    }

    /// Check that every auto value has a usable design reference.
    pub fn validate(&self) -> Result<(), PercentError> {
        for value in self.values().into_iter().flatten() {
            if let Some(axis) = value.base().design_axis() {
                self.design.checked(axis)?;
            }
        }
        Ok(())
    }

    /// Resolve one value against this child's design reference.
    pub fn pixels(&self, value: &PercentValue, ctx: &ResolveContext) -> Result<i32, PercentError> {
        value.to_pixels(ctx, &self.design)
    }

    /// Resolve an optional value.
    pub(crate) fn pixels_of(
        &self,
        value: Option<PercentValue>,
        ctx: &ResolveContext,
    ) -> Result<Option<i32>, PercentError> {
        value.map(|v| self.pixels(&v, ctx)).transpose()
    }

    /// Record the pre-resolution width, height and margins.
    ///
    /// Overwrites the previous snapshot; capturing twice without a restore in
    /// between loses the authored values.
    pub fn capture(&mut self, width: Dimension, height: Dimension, margins: Option<Margins>) {
        self.preserved = PreservedParams {
            width,
            height,
            margins: margins.unwrap_or_default(),
        };
    }

    /// Snapshot taken by the latest [`capture`](Self::capture).
    #[must_use]
    pub const fn preserved(&self) -> &PreservedParams {
        &self.preserved
    }
}
