//! Container driver running a full measure/layout cycle around a host.

use percent_core::{MeasureSpec, Rect, ScreenMetrics};
use serde::{Deserialize, Serialize};

use crate::child::PercentHost;
use crate::engine::{CyclePhase, PercentLayoutHelper};
use crate::error::PercentError;

/// Scrolling ancestor of a container, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollParent {
    /// Not inside a scroll view
    #[default]
    None,
    /// Inside a vertically scrolling view
    Vertical,
    /// Inside a horizontally scrolling view
    Horizontal,
}

/// Measurement and placement performed by the host itself.
pub trait HostLayout: PercentHost {
    /// Measure children against the container's specs, recording each
    /// child's [`MeasuredState`](percent_core::MeasuredState).
    fn on_measure(&mut self, width: MeasureSpec, height: MeasureSpec);

    /// Place children inside `bounds`.
    fn on_layout(&mut self, bounds: Rect);
}

/// A host wrapped with percent resolution.
///
/// [`measure`](Self::measure) resolves, measures and re-measures once if
/// needed. [`layout`](Self::layout) places children and writes the authored
/// values back.
#[derive(Debug)]
pub struct PercentContainer<H> {
    host: H,
    helper: PercentLayoutHelper,
    scroll_parent: ScrollParent,
}

impl<H: HostLayout> PercentContainer<H> {
    /// Wrap `host`, resolving screen and auto bases against `screen`.
    pub fn new(host: H, screen: ScreenMetrics) -> Self {
        Self {
            host,
            helper: PercentLayoutHelper::new(screen),
            scroll_parent: ScrollParent::None,
        }
    }

    /// Declare the scrolling ancestor.
    #[must_use]
    pub fn with_scroll_parent(mut self, scroll_parent: ScrollParent) -> Self {
        self.scroll_parent = scroll_parent;
        self
    }

    /// Width and height hints for one pass.
    ///
    /// An unconstrained axis inside a scroll view along that axis offers no
    /// usable size, so the screen size stands in for it.
    #[must_use]
    pub fn hints(&self, width: MeasureSpec, height: MeasureSpec) -> (i32, i32) {
        let screen = self.helper.screen();
        let mut hints = (width.size, height.size);
        match self.scroll_parent {
            ScrollParent::Vertical if height.is_unspecified() => hints.1 = screen.height,
            ScrollParent::Horizontal if width.is_unspecified() => hints.0 = screen.width,
            _ => {}
        }
        hints
    }

    /// Resolve percent values and measure the host.
    ///
    /// Returns the number of host measurements performed, 1 or 2.
    ///
    /// # Errors
    ///
    /// Returns the resolution error of the first failing child; the host is
    /// neither modified nor measured in that case.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Result<usize, PercentError> {
        let (width_hint, height_hint) = self.hints(width, height);
        self.helper.apply_all(&mut self.host, width_hint, height_hint)?;
        self.host.on_measure(width, height);

        if self.helper.needs_second_pass(&mut self.host) {
            tracing::debug!("measuring again after relaxing children");
            self.host.on_measure(width, height);
            self.helper.set_phase(CyclePhase::Resolved);
            return Ok(2);
        }
        Ok(1)
    }

    /// Place children, then restore their authored parameters.
    pub fn layout(&mut self, bounds: Rect) {
        self.host.on_layout(bounds);
        self.helper.restore_all(&mut self.host);
    }

    /// Wrapped host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Resolution helper.
    pub const fn helper(&self) -> &PercentLayoutHelper {
        &self.helper
    }

    /// Unwrap the host.
    pub fn into_inner(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::child::{PercentChild, PercentLayoutParams};
    use crate::info::LayoutInfo;
    use crate::parser::{BaseReference, PercentValue};
    use percent_core::{AxisState, Dimension, Edges, Margins, MeasuredState};

    #[derive(Default)]
    struct Label {
        params: PercentLayoutParams,
        content_width: i32,
        measured_width: i32,
        state: MeasuredState,
    }

    impl PercentChild for Label {
        fn layout_params(&self) -> &PercentLayoutParams {
            &self.params
        }

        fn layout_params_mut(&mut self) -> &mut PercentLayoutParams {
            &mut self.params
        }

        fn padding(&self) -> Edges {
            Edges::ZERO
        }

        fn set_padding(&mut self, _padding: Edges) {}

        fn measured_state(&self) -> MeasuredState {
            self.state
        }
    }

    /// Records hints and lays children out in a row.
    #[derive(Default)]
    struct Row {
        children: Vec<Label>,
        measures: usize,
        laid_out: Option<Rect>,
    }

    impl PercentHost for Row {
        fn child_count(&self) -> usize {
            self.children.len()
        }

        fn child(&self, index: usize) -> &dyn PercentChild {
            &self.children[index]
        }

        fn child_mut(&mut self, index: usize) -> &mut dyn PercentChild {
            &mut self.children[index]
        }
    }

    impl HostLayout for Row {
        fn on_measure(&mut self, width: MeasureSpec, _height: MeasureSpec) {
            self.measures += 1;
            for child in &mut self.children {
                let spec = match child.params.width {
                    Dimension::Px(px) => MeasureSpec::at_most(px),
                    Dimension::MatchParent => MeasureSpec::exactly(width.size),
                    Dimension::WrapContent => MeasureSpec::at_most(width.size),
                };
                let (size, state) = spec.resolve(child.content_width);
                child.measured_width = size;
                child.state = MeasuredState::new(state, AxisState::Fits);
            }
        }

        fn on_layout(&mut self, bounds: Rect) {
            self.laid_out = Some(bounds);
        }
    }

    fn label(authored: Dimension, percent: f32, content_width: i32) -> Label {
        let info = LayoutInfo {
            width: Some(PercentValue::new(percent, BaseReference::ContainerWidth)),
            ..LayoutInfo::default()
        };
        Label {
            params: PercentLayoutParams::new(authored, Dimension::WrapContent).with_info(info),
            content_width,
            ..Label::default()
        }
    }

    fn container(children: Vec<Label>) -> PercentContainer<Row> {
        PercentContainer::new(
            Row {
                children,
                ..Row::default()
            },
            ScreenMetrics::new(1080, 1920),
        )
    }

    #[test]
    fn test_hints_pass_through() {
        let c = container(Vec::new());
        assert_eq!(c.hints(MeasureSpec::exactly(300), MeasureSpec::at_most(400)), (300, 400));
        assert_eq!(c.hints(MeasureSpec::exactly(300), MeasureSpec::unspecified(0)), (300, 0));
    }

    #[test]
    fn test_hints_vertical_scroll_uses_screen_height() {
        let c = container(Vec::new()).with_scroll_parent(ScrollParent::Vertical);
        assert_eq!(c.hints(MeasureSpec::exactly(300), MeasureSpec::unspecified(0)), (300, 1920));
        assert_eq!(c.hints(MeasureSpec::unspecified(0), MeasureSpec::exactly(50)), (0, 50));
    }

    #[test]
    fn test_hints_horizontal_scroll_uses_screen_width() {
        let c = container(Vec::new()).with_scroll_parent(ScrollParent::Horizontal);
        assert_eq!(c.hints(MeasureSpec::unspecified(0), MeasureSpec::exactly(50)), (1080, 50));
        assert_eq!(c.hints(MeasureSpec::exactly(300), MeasureSpec::unspecified(0)), (300, 0));
    }

    #[test]
    fn test_single_pass_when_content_fits() {
        let mut c = container(vec![label(Dimension::WrapContent, 0.5, 100)]);
        let passes = c.measure(MeasureSpec::exactly(1000), MeasureSpec::exactly(500)).unwrap();
        assert_eq!(passes, 1);
        assert_eq!(c.host().children[0].measured_width, 100);
    }

    #[test]
    fn test_second_pass_for_clamped_wrap_content() {
        let mut c = container(vec![label(Dimension::WrapContent, 0.1, 300)]);
        let passes = c.measure(MeasureSpec::exactly(1000), MeasureSpec::exactly(500)).unwrap();
        assert_eq!(passes, 2);
        assert_eq!(c.host().measures, 2);
        assert_eq!(c.host().children[0].measured_width, 300);
        assert_eq!(c.helper().phase(), CyclePhase::Resolved);
    }

    #[test]
    fn test_fixed_child_stays_clamped() {
        let mut c = container(vec![label(Dimension::Px(20), 0.1, 300)]);
        let passes = c.measure(MeasureSpec::exactly(1000), MeasureSpec::exactly(500)).unwrap();
        assert_eq!(passes, 1);
        assert_eq!(c.host().children[0].measured_width, 100);
    }

    #[test]
    fn test_layout_restores_authored_values() {
        let mut c = container(vec![label(Dimension::Px(20), 0.5, 10)]);
        c.measure(MeasureSpec::exactly(1000), MeasureSpec::exactly(500)).unwrap();
        assert_eq!(c.host().children[0].params.width, Dimension::Px(500));

        let bounds = Rect::new(0, 0, 1000, 500);
        c.layout(bounds);
        assert_eq!(c.host().laid_out, Some(bounds));
        assert_eq!(c.host().children[0].params.width, Dimension::Px(20));
        assert_eq!(c.helper().phase(), CyclePhase::Restored);
    }

    #[test]
    fn test_measure_error_skips_host() {
        let info = LayoutInfo {
            width: Some(PercentValue::new(1.0, BaseReference::AutoWidth)),
            ..LayoutInfo::default()
        };
        let child = Label {
            params: PercentLayoutParams::new(Dimension::Px(0), Dimension::Px(0)).with_info(info),
            ..Label::default()
        };
        let mut c = container(vec![child]);
        assert!(c.measure(MeasureSpec::exactly(100), MeasureSpec::exactly(100)).is_err());
        assert_eq!(c.into_inner().measures, 0);
    }

    #[test]
    fn test_layout_after_failed_measure_keeps_authored_values() {
        let info = LayoutInfo {
            width: Some(PercentValue::new(1.0, BaseReference::AutoWidth)),
            ..LayoutInfo::default()
        };
        let child = Label {
            params: PercentLayoutParams::new(Dimension::Px(20), Dimension::MatchParent)
                .with_margins(Margins::uniform(4))
                .with_info(info),
            ..Label::default()
        };
        let mut c = container(vec![child]);
        assert!(c.measure(MeasureSpec::exactly(100), MeasureSpec::exactly(100)).is_err());
        c.layout(Rect::new(0, 0, 100, 100));

        let params = &c.host().children[0].params;
        assert_eq!(params.width, Dimension::Px(20));
        assert_eq!(params.height, Dimension::MatchParent);
        assert_eq!(params.margins, Some(Margins::uniform(4)));
        assert_eq!(c.helper().phase(), CyclePhase::Unresolved);
    }
}
