//! Percent resolution engine.

use percent_core::{Dimension, Edges, ScreenMetrics};
use serde::{Deserialize, Serialize};

use crate::child::{Capability, PercentChild, PercentHost};
use crate::error::PercentError;
use crate::info::LayoutInfo;
use crate::resolver::ResolveContext;

/// Where the engine stands in the current resolution cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CyclePhase {
    /// No values applied yet
    #[default]
    Unresolved,
    /// Percent values applied to the children
    Resolved,
    /// At least one axis reset to wrap-content for a second measure pass
    Relaxed,
    /// Authored values written back
    Restored,
}

/// Pixel values computed for one child in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedValues {
    /// Text size
    pub text_size: Option<i32>,
    /// Left padding
    pub padding_left: Option<i32>,
    /// Top padding
    pub padding_top: Option<i32>,
    /// Right padding
    pub padding_right: Option<i32>,
    /// Bottom padding
    pub padding_bottom: Option<i32>,
    /// Maximum width
    pub max_width: Option<i32>,
    /// Maximum height
    pub max_height: Option<i32>,
    /// Minimum width
    pub min_width: Option<i32>,
    /// Minimum height
    pub min_height: Option<i32>,
    /// Width
    pub width: Option<i32>,
    /// Height
    pub height: Option<i32>,
    /// Left margin
    pub margin_left: Option<i32>,
    /// Top margin
    pub margin_top: Option<i32>,
    /// Right margin
    pub margin_right: Option<i32>,
    /// Bottom margin
    pub margin_bottom: Option<i32>,
    /// Start margin
    pub margin_start: Option<i32>,
    /// End margin
    pub margin_end: Option<i32>,
}

impl ResolvedValues {
    /// Resolve every declared attribute of `info`.
    pub fn compute(info: &LayoutInfo, ctx: &ResolveContext) -> Result<Self, PercentError> {
        Ok(Self {
            text_size: info.pixels_of(info.text_size, ctx)?,
            padding_left: info.pixels_of(info.padding_left, ctx)?,
            padding_top: info.pixels_of(info.padding_top, ctx)?,
            padding_right: info.pixels_of(info.padding_right, ctx)?,
            padding_bottom: info.pixels_of(info.padding_bottom, ctx)?,
            max_width: info.pixels_of(info.max_width, ctx)?,
            max_height: info.pixels_of(info.max_height, ctx)?,
            min_width: info.pixels_of(info.min_width, ctx)?,
            min_height: info.pixels_of(info.min_height, ctx)?,
            width: info.pixels_of(info.width, ctx)?,
            height: info.pixels_of(info.height, ctx)?,
            margin_left: info.pixels_of(info.margin_left, ctx)?,
            margin_top: info.pixels_of(info.margin_top, ctx)?,
            margin_right: info.pixels_of(info.margin_right, ctx)?,
            margin_bottom: info.pixels_of(info.margin_bottom, ctx)?,
            margin_start: info.pixels_of(info.margin_start, ctx)?,
            margin_end: info.pixels_of(info.margin_end, ctx)?,
        })
    }

    /// Padding with unset sides taken from `current`.
    #[must_use]
    pub fn padding_over(&self, current: Edges) -> Edges {
        Edges::new(
            self.padding_left.unwrap_or(current.left),
            self.padding_top.unwrap_or(current.top),
            self.padding_right.unwrap_or(current.right),
            self.padding_bottom.unwrap_or(current.bottom),
        )
    }

    fn bounds(&self) -> [(Capability, Option<i32>); 4] {
        [
            (Capability::MaxWidth, self.max_width),
            (Capability::MaxHeight, self.max_height),
            (Capability::MinWidth, self.min_width),
            (Capability::MinHeight, self.min_height),
        ]
    }
}

/// Resolves percent attributes of a container's children and restores the
/// authored values afterwards.
///
/// One helper belongs to one container. A cycle is:
///
/// 1. [`apply_all`](Self::apply_all) at the start of measurement
/// 2. the host's own measurement
/// 3. [`needs_second_pass`](Self::needs_second_pass), re-measuring once if it
///    returns `true`
/// 4. the host's own layout
/// 5. [`restore_all`](Self::restore_all)
///
/// The helper and the children it touches are single-threaded state; drive a
/// cycle from the thread that owns the container.
#[derive(Debug)]
pub struct PercentLayoutHelper {
    screen: ScreenMetrics,
    phase: CyclePhase,
}

impl PercentLayoutHelper {
    /// Create a helper for a container shown on `screen`.
    #[must_use]
    pub const fn new(screen: ScreenMetrics) -> Self {
        Self {
            screen,
            phase: CyclePhase::Unresolved,
        }
    }

    /// Screen metrics used for screen and auto bases.
    #[must_use]
    pub const fn screen(&self) -> ScreenMetrics {
        self.screen
    }

    /// Current cycle phase.
    #[must_use]
    pub const fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: CyclePhase) {
        self.phase = phase;
    }

    /// Resolve and apply percent attributes to every eligible child.
    ///
    /// All children are resolved before any is modified, so an error leaves
    /// the host untouched. Calling this again before
    /// [`restore_all`](Self::restore_all) overwrites the snapshot with
    /// already-resolved values and the authored ones are lost.
    pub fn apply_all<H: PercentHost + ?Sized>(
        &mut self,
        host: &mut H,
        width_hint: i32,
        height_hint: i32,
    ) -> Result<(), PercentError> {
        if matches!(self.phase, CyclePhase::Resolved | CyclePhase::Relaxed) {
            tracing::warn!(
                phase = ?self.phase,
                "percent values applied again before restore; authored values will be lost"
            );
        }

        let ctx = ResolveContext::new(width_hint, height_hint, self.screen);
        tracing::debug!(
            width_hint,
            height_hint,
            children = host.child_count(),
            "adjusting children"
        );

        let mut plans = Vec::with_capacity(host.child_count());
        for i in 0..host.child_count() {
            let plan = match &host.child(i).layout_params().info {
                Some(info) => Some(ResolvedValues::compute(info, &ctx)?),
                None => None,
            };
            plans.push(plan);
        }

        for (i, plan) in plans.iter().enumerate() {
            if let Some(values) = plan {
                apply_child(host.child_mut(i), values);
            }
        }

        self.phase = CyclePhase::Resolved;
        Ok(())
    }

    /// Write the snapshot taken by [`apply_all`](Self::apply_all) back into
    /// every eligible child, discarding whatever the host did in between.
    ///
    /// Does nothing unless a successful apply happened since the last
    /// restore, so a failed apply never clobbers authored values.
    pub fn restore_all<H: PercentHost + ?Sized>(&mut self, host: &mut H) {
        if matches!(self.phase, CyclePhase::Unresolved | CyclePhase::Restored) {
            tracing::warn!(phase = ?self.phase, "restoring without a preceding apply, skipped");
            return;
        }

        for i in 0..host.child_count() {
            let params = host.child_mut(i).layout_params_mut();
            let Some(info) = &params.info else {
                continue;
            };
            let preserved = *info.preserved();
            params.width = preserved.width;
            params.height = preserved.height;
            if let Some(margins) = params.margins.as_mut() {
                *margins = preserved.margins;
            }
            tracing::debug!(index = i, width = ?params.width, height = ?params.height, "restored child");
        }

        self.phase = CyclePhase::Restored;
    }
}

fn apply_child(child: &mut dyn PercentChild, values: &ResolvedValues) {
    if let Some(px) = values.text_size {
        if child.supports(Capability::TextSize) {
            child.apply(Capability::TextSize, px);
        }
    }

    let padding = values.padding_over(child.padding());
    if padding != child.padding() {
        child.set_padding(padding);
    }

    for (capability, value) in values.bounds() {
        let Some(px) = value else { continue };
        if child.supports(capability) {
            child.apply(capability, px);
        } else {
            tracing::trace!(?capability, "child does not support capability, skipped");
        }
    }

    let params = child.layout_params_mut();
    let (width, height, margins) = (params.width, params.height, params.margins);
    if let Some(info) = params.info.as_mut() {
        info.capture(width, height, margins);
    }

    if let Some(px) = values.width {
        params.width = Dimension::Px(px);
    }
    if let Some(px) = values.height {
        params.height = Dimension::Px(px);
    }

    if let Some(margins) = params.margins.as_mut() {
        let sides = [
            (&mut margins.left, values.margin_left),
            (&mut margins.top, values.margin_top),
            (&mut margins.right, values.margin_right),
            (&mut margins.bottom, values.margin_bottom),
        ];
        for (side, value) in sides {
            if let Some(px) = value {
                *side = px;
            }
        }
        // Relative sides last so they win over left/right
        if values.margin_start.is_some() {
            margins.start = values.margin_start;
        }
        if values.margin_end.is_some() {
            margins.end = values.margin_end;
        }
    }

    tracing::debug!(width = ?params.width, height = ?params.height, margins = ?params.margins, "after fill");
}
