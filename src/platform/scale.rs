//! Deriving an element's render-vs-layout scale from host measurements.
//!
//! Hosts that cannot report a transform scale directly can compare the
//! rendered rectangle against the element's CSS size.

use crate::{
    foundation::core::{Coords, RawRect},
    foundation::math::{non_zero_finite_or, round_half_up},
    style::css::ComputedStyle,
};

/// Layout size of an element as read from its computed style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssDimensions {
    pub width: f64,
    pub height: f64,
    /// Set when the CSS size disagreed with the integer offset size and the
    /// offset size was used instead.
    pub fallback: bool,
}

/// Read the CSS size of an element.
///
/// `offset_size` is the host's integer layout size (`offsetWidth` /
/// `offsetHeight`) when the element has one. If the rounded CSS size does
/// not match it (e.g. `width: auto` on an inline box), the offset size wins.
pub fn css_dimensions(style: &ComputedStyle, offset_size: Option<(f64, f64)>) -> CssDimensions {
    let width = style.width_px();
    let height = style.height_px();
    let (offset_width, offset_height) = offset_size.unwrap_or((width, height));

    let fallback = round_half_up(width) != offset_width || round_half_up(height) != offset_height;
    if fallback {
        CssDimensions {
            width: offset_width,
            height: offset_height,
            fallback,
        }
    } else {
        CssDimensions {
            width,
            height,
            fallback,
        }
    }
}

/// Ratio of rendered size to layout size, per axis.
///
/// Axes that come out zero or non-finite (zero-sized or detached elements)
/// are reported as `1`.
pub fn scale_from_rendered(rendered: RawRect, dims: CssDimensions) -> Coords {
    let (w, h) = if dims.fallback {
        (round_half_up(rendered.width), round_half_up(rendered.height))
    } else {
        (rendered.width, rendered.height)
    };
    Coords::new(
        non_zero_finite_or(w / dims.width, 1.0),
        non_zero_finite_or(h / dims.height, 1.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/platform/scale.rs"]
mod tests;
