//! Second-pass detection after the host's first measurement.

use percent_core::Dimension;

use crate::child::PercentHost;
use crate::engine::{CyclePhase, PercentLayoutHelper};
use crate::parser::PercentValue;

/// Check if a resolved axis should fall back to wrap-content.
///
/// True when the axis carried a percent value, was authored as wrap-content,
/// and the host reported the resolved size as too small for the content.
fn should_relax(value: Option<PercentValue>, preserved: Dimension, too_small: bool) -> bool {
    value.is_some_and(|v| v.fraction() >= 0.0) && preserved.is_wrap_content() && too_small
}

impl PercentLayoutHelper {
    /// Reset clamped wrap-content axes and report whether the host must
    /// measure again.
    ///
    /// Call after the host's first measurement following
    /// [`apply_all`](Self::apply_all). Every eligible axis is reset to
    /// [`Dimension::WrapContent`]; one extra measurement is enough because a
    /// relaxed axis no longer carries a resolved value.
    pub fn needs_second_pass<H: PercentHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let mut relaxed = false;

        for i in 0..host.child_count() {
            let child = host.child_mut(i);
            let state = child.measured_state();
            let params = child.layout_params_mut();
            let Some(info) = &params.info else {
                continue;
            };

            let preserved = *info.preserved();
            let relax_width = should_relax(info.width, preserved.width, state.width_too_small());
            let relax_height = should_relax(info.height, preserved.height, state.height_too_small());

            if relax_width {
                params.width = Dimension::WrapContent;
            }
            if relax_height {
                params.height = Dimension::WrapContent;
            }
            if relax_width || relax_height {
                tracing::debug!(index = i, relax_width, relax_height, "relaxing to wrap-content");
                relaxed = true;
            }
        }

        if relaxed {
            self.set_phase(CyclePhase::Relaxed);
        }
        relaxed
    }
}
