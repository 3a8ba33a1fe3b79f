//! Child and host interfaces.

use percent_core::{Dimension, Edges, Margins, MeasuredState};
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSource;
use crate::error::PercentError;
use crate::info::LayoutInfo;

/// Optional setters a child may expose to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Text size in pixels
    TextSize,
    /// Maximum width
    MaxWidth,
    /// Maximum height
    MaxHeight,
    /// Minimum width
    MinWidth,
    /// Minimum height
    MinHeight,
}

/// Layout parameters of one child as seen by the engine.
///
/// Parameters carrying `margins` are margin-capable and get their margins
/// resolved and restored along with width and height. Only children whose
/// parameters carry a [`LayoutInfo`] take part in resolution.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PercentLayoutParams {
    /// Declared width
    pub width: Dimension,
    /// Declared height
    pub height: Dimension,
    /// Per-side spacing, for containers that support it
    pub margins: Option<Margins>,
    /// Percent attributes
    pub info: Option<LayoutInfo>,
}

impl PercentLayoutParams {
    /// Create parameters without margins or percent attributes.
    #[must_use]
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            margins: None,
            info: None,
        }
    }

    /// Create margin-capable parameters with percent attributes read from
    /// `attrs`.
    ///
    /// # Errors
    ///
    /// Returns the first parse error; no parameters are built in that case.
    pub fn from_attributes<A: AttributeSource + ?Sized>(
        width: Dimension,
        height: Dimension,
        attrs: &A,
    ) -> Result<Self, PercentError> {
        let info = LayoutInfo::from_attributes(attrs)?;
        Ok(Self::new(width, height)
            .with_margins(Margins::default())
            .with_info(info))
    }

    /// Make the parameters margin-capable.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Attach percent attributes.
    #[must_use]
    pub fn with_info(mut self, info: LayoutInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Check if margins are part of these parameters.
    #[must_use]
    pub const fn is_margin_capable(&self) -> bool {
        self.margins.is_some()
    }
}

/// A child view the engine can resolve percent attributes for.
///
/// Text size and min/max bounds are optional: a child advertises them through
/// [`supports`](Self::supports) and receives values through
/// [`apply`](Self::apply). Unsupported capabilities are skipped.
pub trait PercentChild {
    /// Current layout parameters.
    fn layout_params(&self) -> &PercentLayoutParams;

    /// Mutable layout parameters.
    fn layout_params_mut(&mut self) -> &mut PercentLayoutParams;

    /// Current padding.
    fn padding(&self) -> Edges;

    /// Replace the padding.
    fn set_padding(&mut self, padding: Edges);

    /// State recorded by the host's latest measurement of this child.
    fn measured_state(&self) -> MeasuredState {
        MeasuredState::default()
    }

    /// Check if the child accepts values for `capability`.
    fn supports(&self, capability: Capability) -> bool {
        let _ = capability;
        false
    }

    /// Apply a resolved pixel value. Only called for supported capabilities.
    fn apply(&mut self, capability: Capability, px: i32) {
        let _ = (capability, px);
    }
}

/// A container whose children take part in percent resolution.
pub trait PercentHost {
    /// Number of children.
    fn child_count(&self) -> usize;

    /// Child at `index`, in layout order.
    fn child(&self, index: usize) -> &dyn PercentChild;

    /// Mutable child at `index`, in layout order.
    fn child_mut(&mut self, index: usize) -> &mut dyn PercentChild;
}

impl<C: PercentChild> PercentHost for Vec<C> {
    fn child_count(&self) -> usize {
        self.len()
    }

    fn child(&self, index: usize) -> &dyn PercentChild {
        &self[index]
    }

    fn child_mut(&mut self, index: usize) -> &mut dyn PercentChild {
        &mut self[index]
    }
}

impl<C: PercentChild + ?Sized> PercentChild for Box<C> {
    fn layout_params(&self) -> &PercentLayoutParams {
        (**self).layout_params()
    }

    fn layout_params_mut(&mut self) -> &mut PercentLayoutParams {
        (**self).layout_params_mut()
    }

    fn padding(&self) -> Edges {
        (**self).padding()
    }

    fn set_padding(&mut self, padding: Edges) {
        (**self).set_padding(padding);
    }

    fn measured_state(&self) -> MeasuredState {
        (**self).measured_state()
    }

    fn supports(&self, capability: Capability) -> bool {
        (**self).supports(capability)
    }

    fn apply(&mut self, capability: Capability, px: i32) {
        (**self).apply(capability, px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        params: PercentLayoutParams,
        padding: Edges,
    }

    impl PercentChild for Plain {
        fn layout_params(&self) -> &PercentLayoutParams {
            &self.params
        }

        fn layout_params_mut(&mut self) -> &mut PercentLayoutParams {
            &mut self.params
        }

        fn padding(&self) -> Edges {
            self.padding
        }

        fn set_padding(&mut self, padding: Edges) {
            self.padding = padding;
        }
    }

    #[test]
    fn test_params_new_is_plain() {
        let params = PercentLayoutParams::new(Dimension::Px(10), Dimension::WrapContent);
        assert!(!params.is_margin_capable());
        assert!(params.info.is_none());
    }

    #[test]
    fn test_params_from_attributes_is_margin_capable() {
        let attrs: &[(&str, &str)] = &[("widthPercent", "50%")];
        let params =
            PercentLayoutParams::from_attributes(Dimension::WrapContent, Dimension::Px(0), attrs)
                .unwrap();
        assert!(params.is_margin_capable());
        assert!(params.info.unwrap().width.is_some());
    }

    #[test]
    fn test_params_from_attributes_propagates_errors() {
        let attrs: &[(&str, &str)] = &[("widthPercent", "fifty")];
        assert!(PercentLayoutParams::from_attributes(Dimension::Px(0), Dimension::Px(0), attrs).is_err());
    }

    #[test]
    fn test_child_defaults() {
        let mut child = Plain {
            params: PercentLayoutParams::default(),
            padding: Edges::ZERO,
        };
        assert!(!child.supports(Capability::TextSize));
        assert!(!child.supports(Capability::MaxHeight));
        child.apply(Capability::MinWidth, 10);
        assert_eq!(child.measured_state(), MeasuredState::default());
    }

    #[test]
    fn test_vec_host() {
        let mut host = vec![Plain {
            params: PercentLayoutParams::default(),
            padding: Edges::uniform(2),
        }];
        assert_eq!(host.child_count(), 1);
        host.child_mut(0).set_padding(Edges::ZERO);
        assert_eq!(host.child(0).padding(), Edges::ZERO);
    }

    #[test]
    fn test_boxed_children_forward() {
        let mut host: Vec<Box<dyn PercentChild>> = vec![Box::new(Plain {
            params: PercentLayoutParams::new(Dimension::Px(5), Dimension::Px(6)),
            padding: Edges::uniform(1),
        })];
        host.child_mut(0).layout_params_mut().width = Dimension::MatchParent;
        assert_eq!(host.child(0).layout_params().width, Dimension::MatchParent);
        assert_eq!(host.child(0).padding(), Edges::uniform(1));
        assert!(!host.child(0).supports(Capability::TextSize));
    }
}
