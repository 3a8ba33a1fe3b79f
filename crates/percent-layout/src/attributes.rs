//! Construction-time attribute sources.
//!
//! A child declares its percent layout through flat, string-valued attributes
//! such as `widthPercent="50%"` or `marginPercent="10%w"`. The names are the
//! constants in [`names`]. Any [`AttributeSource`] can be turned into a
//! [`LayoutInfo`] with [`LayoutInfo::from_attributes`].

use std::collections::{BTreeMap, HashMap};

use percent_core::Axis;
use serde::{Deserialize, Serialize};

use crate::error::PercentError;
use crate::info::LayoutInfo;
use crate::parser::{parse_percent, PercentValue};
use crate::resolver::DesignReference;

/// Attribute names understood by [`LayoutInfo::from_attributes`].
pub mod names {
    /// Width
    pub const WIDTH_PERCENT: &str = "widthPercent";
    /// Height
    pub const HEIGHT_PERCENT: &str = "heightPercent";
    /// All four margins
    pub const MARGIN_PERCENT: &str = "marginPercent";
    /// Left margin
    pub const MARGIN_LEFT_PERCENT: &str = "marginLeftPercent";
    /// Top margin
    pub const MARGIN_TOP_PERCENT: &str = "marginTopPercent";
    /// Right margin
    pub const MARGIN_RIGHT_PERCENT: &str = "marginRightPercent";
    /// Bottom margin
    pub const MARGIN_BOTTOM_PERCENT: &str = "marginBottomPercent";
    /// Start margin
    pub const MARGIN_START_PERCENT: &str = "marginStartPercent";
    /// End margin
    pub const MARGIN_END_PERCENT: &str = "marginEndPercent";
    /// All four paddings
    pub const PADDING_PERCENT: &str = "paddingPercent";
    /// Left padding
    pub const PADDING_LEFT_PERCENT: &str = "paddingLeftPercent";
    /// Top padding
    pub const PADDING_TOP_PERCENT: &str = "paddingTopPercent";
    /// Right padding
    pub const PADDING_RIGHT_PERCENT: &str = "paddingRightPercent";
    /// Bottom padding
    pub const PADDING_BOTTOM_PERCENT: &str = "paddingBottomPercent";
    /// Text size
    pub const TEXT_SIZE_PERCENT: &str = "textSizePercent";
    /// Minimum width
    pub const MIN_WIDTH_PERCENT: &str = "minWidthPercent";
    /// Minimum height
    pub const MIN_HEIGHT_PERCENT: &str = "minHeightPercent";
    /// Maximum width
    pub const MAX_WIDTH_PERCENT: &str = "maxWidthPercent";
    /// Maximum height
    pub const MAX_HEIGHT_PERCENT: &str = "maxHeightPercent";
    /// Design width for auto values
    pub const WIDTH_DESIGN: &str = "widthDesign";
    /// Design height for auto values
    pub const HEIGHT_DESIGN: &str = "heightDesign";
}

/// A flat lookup of named string attributes.
pub trait AttributeSource {
    /// Raw value of an attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

/// Typed attribute set, deserializable from YAML or JSON.
///
/// ```yaml
/// widthPercent: 50%
/// marginPercent: 10%w
/// widthDesign: "360px"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PercentAttributes {
    /// `widthPercent`
    pub width_percent: Option<String>,
    /// `heightPercent`
    pub height_percent: Option<String>,
    /// `marginPercent`, all four margins
    pub margin_percent: Option<String>,
    /// `marginLeftPercent`
    pub margin_left_percent: Option<String>,
    /// `marginTopPercent`
    pub margin_top_percent: Option<String>,
    /// `marginRightPercent`
    pub margin_right_percent: Option<String>,
    /// `marginBottomPercent`
    pub margin_bottom_percent: Option<String>,
    /// `marginStartPercent`
    pub margin_start_percent: Option<String>,
    /// `marginEndPercent`
    pub margin_end_percent: Option<String>,
    /// `paddingPercent`, all four paddings
    pub padding_percent: Option<String>,
    /// `paddingLeftPercent`
    pub padding_left_percent: Option<String>,
    /// `paddingTopPercent`
    pub padding_top_percent: Option<String>,
    /// `paddingRightPercent`
    pub padding_right_percent: Option<String>,
    /// `paddingBottomPercent`
    pub padding_bottom_percent: Option<String>,
    /// `textSizePercent`
    pub text_size_percent: Option<String>,
    /// `minWidthPercent`
    pub min_width_percent: Option<String>,
    /// `minHeightPercent`
    pub min_height_percent: Option<String>,
    /// `maxWidthPercent`
    pub max_width_percent: Option<String>,
    /// `maxHeightPercent`
    pub max_height_percent: Option<String>,
    /// `widthDesign`, pixels with optional `px`
    pub width_design: Option<String>,
    /// `heightDesign`, pixels with optional `px`
    pub height_design: Option<String>,
}

impl PercentAttributes {
    /// Parse an attribute set from YAML (or JSON, which YAML accepts).
    pub fn from_yaml(input: &str) -> Result<Self, PercentError> {
        Ok(serde_yaml_ng::from_str(input)?)
    }
}

impl AttributeSource for PercentAttributes {
    fn attribute(&self, name: &str) -> Option<&str> {
        let value = match name {
            names::WIDTH_PERCENT => &self.width_percent,
            names::HEIGHT_PERCENT => &self.height_percent,
            names::MARGIN_PERCENT => &self.margin_percent,
            names::MARGIN_LEFT_PERCENT => &self.margin_left_percent,
            names::MARGIN_TOP_PERCENT => &self.margin_top_percent,
            names::MARGIN_RIGHT_PERCENT => &self.margin_right_percent,
            names::MARGIN_BOTTOM_PERCENT => &self.margin_bottom_percent,
            names::MARGIN_START_PERCENT => &self.margin_start_percent,
            names::MARGIN_END_PERCENT => &self.margin_end_percent,
            names::PADDING_PERCENT => &self.padding_percent,
            names::PADDING_LEFT_PERCENT => &self.padding_left_percent,
            names::PADDING_TOP_PERCENT => &self.padding_top_percent,
            names::PADDING_RIGHT_PERCENT => &self.padding_right_percent,
            names::PADDING_BOTTOM_PERCENT => &self.padding_bottom_percent,
            names::TEXT_SIZE_PERCENT => &self.text_size_percent,
            names::MIN_WIDTH_PERCENT => &self.min_width_percent,
            names::MIN_HEIGHT_PERCENT => &self.min_height_percent,
            names::MAX_WIDTH_PERCENT => &self.max_width_percent,
            names::MAX_HEIGHT_PERCENT => &self.max_height_percent,
            names::WIDTH_DESIGN => &self.width_design,
            names::HEIGHT_DESIGN => &self.height_design,
            _ => return None,
        };
        value.as_deref()
    }
}

fn percent<A: AttributeSource + ?Sized>(
    attrs: &A,
    name: &str,
    axis: Axis,
) -> Result<Option<PercentValue>, PercentError> {
    let value = parse_percent(attrs.attribute(name), axis)?;
    if let Some(v) = &value {
        tracing::trace!(attribute = name, fraction = v.fraction(), base = ?v.base(), "parsed percent attribute");
    }
    Ok(value)
}

/// Read a design dimension: a plain pixel count, optionally suffixed `px`.
fn design_dimension<A: AttributeSource + ?Sized>(
    attrs: &A,
    name: &str,
) -> Result<Option<f32>, PercentError> {
    let Some(raw) = attrs.attribute(name) else {
        return Ok(None);
    };
    let digits = raw.strip_suffix("px").unwrap_or(raw);
    digits
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| PercentError::InvalidDimension {
            attribute: name.to_string(),
            input: raw.to_string(),
        })
}

impl LayoutInfo {
    /// Build layout info from declared attributes.
    ///
    /// Shorthand attributes (`marginPercent`, `paddingPercent`) are applied
    /// first and the per-side attributes after them, so a specific side wins.
    /// Bare `%` margins resolve against width for left/right/start/end and
    /// height for top/bottom; padding and the shorthand margin always use the
    /// width axis, text size the height axis.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed attribute, or when an auto value has no
    /// usable design reference. No partially built info is returned.
    pub fn from_attributes<A: AttributeSource + ?Sized>(attrs: &A) -> Result<Self, PercentError> {
        let mut info = Self::new().with_design(DesignReference {
            width: design_dimension(attrs, names::WIDTH_DESIGN)?,
            height: design_dimension(attrs, names::HEIGHT_DESIGN)?,
        });

        info.width = percent(attrs, names::WIDTH_PERCENT, Axis::Width)?;
        info.height = percent(attrs, names::HEIGHT_PERCENT, Axis::Height)?;

        if let Some(margin) = percent(attrs, names::MARGIN_PERCENT, Axis::Width)? {
            info.margin_left = Some(margin);
            info.margin_top = Some(margin);
            info.margin_right = Some(margin);
            info.margin_bottom = Some(margin);
        }
        let specific = [
            (names::MARGIN_LEFT_PERCENT, Axis::Width, &mut info.margin_left),
            (names::MARGIN_TOP_PERCENT, Axis::Height, &mut info.margin_top),
            (names::MARGIN_RIGHT_PERCENT, Axis::Width, &mut info.margin_right),
            (names::MARGIN_BOTTOM_PERCENT, Axis::Height, &mut info.margin_bottom),
            (names::MARGIN_START_PERCENT, Axis::Width, &mut info.margin_start),
            (names::MARGIN_END_PERCENT, Axis::Width, &mut info.margin_end),
        ];
        for (name, axis, slot) in specific {
            if let Some(value) = percent(attrs, name, axis)? {
                *slot = Some(value);
            }
        }

        info.text_size = percent(attrs, names::TEXT_SIZE_PERCENT, Axis::Height)?;

        info.max_width = percent(attrs, names::MAX_WIDTH_PERCENT, Axis::Width)?;
        info.max_height = percent(attrs, names::MAX_HEIGHT_PERCENT, Axis::Height)?;
        info.min_width = percent(attrs, names::MIN_WIDTH_PERCENT, Axis::Width)?;
        info.min_height = percent(attrs, names::MIN_HEIGHT_PERCENT, Axis::Height)?;

        if let Some(padding) = percent(attrs, names::PADDING_PERCENT, Axis::Width)? {
            info.padding_left = Some(padding);
            info.padding_top = Some(padding);
            info.padding_right = Some(padding);
            info.padding_bottom = Some(padding);
        }
        let specific = [
            (names::PADDING_LEFT_PERCENT, &mut info.padding_left),
            (names::PADDING_TOP_PERCENT, &mut info.padding_top),
            (names::PADDING_RIGHT_PERCENT, &mut info.padding_right),
            (names::PADDING_BOTTOM_PERCENT, &mut info.padding_bottom),
        ];
        for (name, slot) in specific {
            if let Some(value) = percent(attrs, name, Axis::Width)? {
                *slot = Some(value);
            }
        }

        info.validate()?;
        tracing::debug!(empty = info.is_empty(), "constructed layout info");
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{BaseReference, PercentValue};

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_attributes_give_empty_info() {
        let info = LayoutInfo::from_attributes(&HashMap::new()).unwrap();
        assert!(info.is_empty());
        assert_eq!(info.design, DesignReference::default());
    }

    #[test]
    fn test_width_and_height() {
        let info = LayoutInfo::from_attributes(&attrs(&[
            ("widthPercent", "50%"),
            ("heightPercent", "25%"),
        ]))
        .unwrap();
        assert_eq!(info.width, Some(PercentValue::new(0.5, BaseReference::ContainerWidth)));
        assert_eq!(info.height, Some(PercentValue::new(0.25, BaseReference::ContainerHeight)));
    }

    #[test]
    fn test_margin_shorthand_then_specific_wins() {
        let info = LayoutInfo::from_attributes(&attrs(&[
            ("marginPercent", "10%"),
            ("marginLeftPercent", "5%"),
            ("marginTopPercent", "20%"),
        ]))
        .unwrap();
        assert_eq!(info.margin_left, Some(PercentValue::new(0.05, BaseReference::ContainerWidth)));
        assert_eq!(info.margin_top, Some(PercentValue::new(0.2, BaseReference::ContainerHeight)));
        // Shorthand is width-based on every side
        assert_eq!(info.margin_right, Some(PercentValue::new(0.1, BaseReference::ContainerWidth)));
        assert_eq!(info.margin_bottom, Some(PercentValue::new(0.1, BaseReference::ContainerWidth)));
        assert_eq!(info.margin_start, None);
    }

    #[test]
    fn test_padding_is_width_based_on_every_side() {
        let info = LayoutInfo::from_attributes(&attrs(&[("paddingTopPercent", "10%")])).unwrap();
        assert_eq!(info.padding_top, Some(PercentValue::new(0.1, BaseReference::ContainerWidth)));
        assert_eq!(info.padding_left, None);
    }

    #[test]
    fn test_text_size_defaults_to_height_axis() {
        let info = LayoutInfo::from_attributes(&attrs(&[("textSizePercent", "3%")])).unwrap();
        assert_eq!(info.text_size.unwrap().base(), BaseReference::ContainerHeight);
    }

    #[test]
    fn test_design_dimensions() {
        let info = LayoutInfo::from_attributes(&attrs(&[
            ("widthDesign", "360px"),
            ("heightDesign", "640"),
            ("widthPercent", "100a"),
        ]))
        .unwrap();
        assert_eq!(info.design, DesignReference::new(360.0, 640.0));
        assert_eq!(info.width.unwrap().base(), BaseReference::AutoWidth);
    }

    #[test]
    fn test_invalid_design_dimension() {
        let err = LayoutInfo::from_attributes(&attrs(&[("widthDesign", "wide")])).unwrap_err();
        assert!(matches!(err, PercentError::InvalidDimension { .. }));
    }

    #[test]
    fn test_auto_without_design_fails_construction() {
        let err = LayoutInfo::from_attributes(&attrs(&[("heightPercent", "10a")])).unwrap_err();
        assert!(matches!(err, PercentError::MissingDesignReference { axis: Axis::Height }));
    }

    #[test]
    fn test_malformed_attribute_fails_construction() {
        let err = LayoutInfo::from_attributes(&attrs(&[
            ("widthPercent", "50%"),
            ("minHeightPercent", "tall"),
        ]))
        .unwrap_err();
        assert!(matches!(err, PercentError::Malformed { .. }));
    }

    #[test]
    fn test_slice_source() {
        let pairs: &[(&str, &str)] = &[("widthPercent", "30%"), ("maxWidthPercent", "50sw")];
        let info = LayoutInfo::from_attributes(pairs).unwrap();
        assert_eq!(info.max_width.unwrap().base(), BaseReference::ScreenWidth);
    }

    #[test]
    fn test_btree_source() {
        let mut map = BTreeMap::new();
        map.insert("heightPercent".to_string(), "10sh".to_string());
        let info = LayoutInfo::from_attributes(&map).unwrap();
        assert_eq!(info.height.unwrap().base(), BaseReference::ScreenHeight);
    }

    #[test]
    fn test_percent_attributes_from_yaml() {
        let attrs = PercentAttributes::from_yaml(
            "widthPercent: 50%\nmarginPercent: 10%w\nwidthDesign: '360'\n",
        )
        .unwrap();
        assert_eq!(attrs.attribute(names::WIDTH_PERCENT), Some("50%"));
        assert_eq!(attrs.attribute(names::HEIGHT_PERCENT), None);
        assert_eq!(attrs.attribute("unknown"), None);

        let info = LayoutInfo::from_attributes(&attrs).unwrap();
        assert_eq!(info.margin_bottom.unwrap().base(), BaseReference::ContainerWidth);
    }

    #[test]
    fn test_yaml_auto_without_design_fails_construction() {
        let attrs = PercentAttributes::from_yaml("widthPercent: 2a\nheightDesign: '640'\n").unwrap();
        assert!(matches!(
            LayoutInfo::from_attributes(&attrs),
            Err(PercentError::MissingDesignReference { axis: Axis::Width })
        ));
    }

    #[test]
    fn test_percent_attributes_rejects_unknown_keys() {
        assert!(PercentAttributes::from_yaml("widthPrecent: 50%\n").is_err());
    }

    #[test]
    fn test_percent_attributes_from_json() {
        let attrs: PercentAttributes =
            serde_json::from_str(r#"{"paddingPercent": "2%", "textSizePercent": "5sw"}"#).unwrap();
        let info = LayoutInfo::from_attributes(&attrs).unwrap();
        assert!(info.padding_right.is_some());
        assert_eq!(info.text_size.unwrap().base(), BaseReference::ScreenWidth);
    }
}
