//! Percent expression parsing.
//!
//! Syntax: `<number><suffix>` where `<number>` is `12`, `12.5` or `.5` and the
//! suffix selects the base reference:
//!
//! | Suffix | Base                                   | Fraction   |
//! |--------|----------------------------------------|------------|
//! | `sw`   | screen width                           | number/100 |
//! | `sh`   | screen height                          | number/100 |
//! | `aw`   | auto (design-scaled) width             | number     |
//! | `ah`   | auto (design-scaled) height            | number     |
//! | `%`    | container width/height, by axis        | number/100 |
//! | `a`    | auto width/height, by axis             | number     |
//! | `w`    | container width                        | number/100 |
//! | `h`    | container height                       | number/100 |
//!
//! Suffixes are matched by `ends_with` in table order, so `50%sw` is a screen
//! width value and `50%w` a container width value.

use percent_core::Axis;
use serde::{Deserialize, Serialize};

use crate::error::PercentError;

/// The ambient quantity a percent fraction is multiplied against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseReference {
    /// Width hint offered to the container
    ContainerWidth,
    /// Height hint offered to the container
    ContainerHeight,
    /// Screen width
    ScreenWidth,
    /// Screen height
    ScreenHeight,
    /// Screen width divided by the width design reference
    AutoWidth,
    /// Screen height divided by the height design reference
    AutoHeight,
}

impl BaseReference {
    /// Axis whose design reference an auto base divides by.
    #[must_use]
    pub const fn design_axis(self) -> Option<Axis> {
        match self {
            Self::AutoWidth => Some(Axis::Width),
            Self::AutoHeight => Some(Axis::Height),
            _ => None,
        }
    }
}

/// A parsed percent expression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentValue {
    fraction: f32,
    base: BaseReference,
}

impl PercentValue {
    /// Create a value from an already scaled fraction.
    #[must_use]
    pub const fn new(fraction: f32, base: BaseReference) -> Self {
        Self { fraction, base }
    }

    /// Multiplier applied to the base quantity.
    #[must_use]
    pub const fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Base reference.
    #[must_use]
    pub const fn base(&self) -> BaseReference {
        self.base
    }

    /// Parse an expression, using `axis` to place bare `%` and `a` suffixes.
    ///
    /// # Errors
    ///
    /// Returns [`PercentError::Malformed`] when the input does not have the
    /// `<number><suffix>` shape and [`PercentError::InvalidSuffix`] when the
    /// suffix names no base reference.
    pub fn parse(input: &str, axis: Axis) -> Result<Self, PercentError> {
        let malformed = || PercentError::Malformed {
            input: input.to_string(),
        };

        let split = number_len(input).ok_or_else(malformed)?;
        let (number, suffix) = input.split_at(split);
        if !has_suffix_shape(suffix) {
            return Err(malformed());
        }
        let number: f32 = number.parse().map_err(|_| malformed())?;
        let scaled = number / 100.0;

        let (fraction, base) = if suffix.ends_with("sw") {
            (scaled, BaseReference::ScreenWidth)
        } else if suffix.ends_with("sh") {
            (scaled, BaseReference::ScreenHeight)
        } else if suffix.ends_with("aw") {
            (number, BaseReference::AutoWidth)
        } else if suffix.ends_with("ah") {
            (number, BaseReference::AutoHeight)
        } else if suffix.ends_with('%') {
            let base = if axis.is_width() {
                BaseReference::ContainerWidth
            } else {
                BaseReference::ContainerHeight
            };
            (scaled, base)
        } else if suffix.ends_with('a') {
            let base = if axis.is_width() {
                BaseReference::AutoWidth
            } else {
                BaseReference::AutoHeight
            };
            (number, base)
        } else if suffix.ends_with('w') {
            (scaled, BaseReference::ContainerWidth)
        } else if suffix.ends_with('h') {
            (scaled, BaseReference::ContainerHeight)
        } else {
            return Err(PercentError::InvalidSuffix {
                input: input.to_string(),
                suffix: suffix.to_string(),
            });
        };

        Ok(Self::new(fraction, base))
    }
}

/// Parse an optional attribute value.
///
/// A missing attribute yields `Ok(None)`; a present but invalid one is an error.
pub fn parse_percent(input: Option<&str>, axis: Axis) -> Result<Option<PercentValue>, PercentError> {
    input.map(|s| PercentValue::parse(s, axis)).transpose()
}

/// Byte length of the leading number, if there is one.
fn number_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut len = int_len;

    if bytes.get(len) == Some(&b'.') {
        let frac_len = bytes[len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            len += 1 + frac_len;
        }
    }

    (len > 0).then_some(len)
}

/// Check the suffix against `[%a]?s?[wh]?`, non-empty.
fn has_suffix_shape(suffix: &str) -> bool {
    let rest = suffix.strip_prefix(|c: char| c == '%' || c == 'a').unwrap_or(suffix);
    let rest = rest.strip_prefix('s').unwrap_or(rest);
    let rest = rest.strip_prefix(|c: char| c == 'w' || c == 'h').unwrap_or(rest);
    !suffix.is_empty() && rest.is_empty()
}
