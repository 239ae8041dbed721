//! Computed-style values consumed by the resolver.

/// Resolved style properties of one element, as strings the host reports.
///
/// Every property is optional; absent or unparsable values fall back to the
/// neutral value of the consumer (`1` for zoom, `0` for lengths).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ComputedStyle {
    /// CSS `zoom`, e.g. `"1.5"` or `"normal"`.
    pub zoom: Option<String>,
    /// Resolved CSS `width`, e.g. `"200px"`.
    pub width: Option<String>,
    /// Resolved CSS `height`.
    pub height: Option<String>,
    /// Resolved CSS `padding-left`.
    pub padding_left: Option<String>,
    /// Resolved CSS `padding-top`.
    pub padding_top: Option<String>,
}

impl ComputedStyle {
    /// Zoom multiplier; `1` when missing, unparsable, zero or non-finite.
    pub fn zoom_factor(&self) -> f64 {
        let z = self.zoom.as_deref().and_then(parse_float);
        crate::foundation::math::non_zero_finite_or(z.unwrap_or(f64::NAN), 1.0)
    }

    /// `padding-left` in pixels; `0` when missing or unparsable.
    pub fn padding_left_px(&self) -> f64 {
        length_or_zero(self.padding_left.as_deref())
    }

    /// `padding-top` in pixels; `0` when missing or unparsable.
    pub fn padding_top_px(&self) -> f64 {
        length_or_zero(self.padding_top.as_deref())
    }

    /// CSS `width` in pixels; `0` when missing or unparsable.
    pub fn width_px(&self) -> f64 {
        length_or_zero(self.width.as_deref())
    }

    /// CSS `height` in pixels; `0` when missing or unparsable.
    pub fn height_px(&self) -> f64 {
        length_or_zero(self.height.as_deref())
    }
}

fn length_or_zero(v: Option<&str>) -> f64 {
    v.and_then(parse_float)
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
///
/// Trailing units are ignored (`"12.5px"` parses as `12.5`). Returns `None`
/// when no number starts the string.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let mut num = &s[..i];
    if num.ends_with('.') {
        num = &num[..num.len() - 1];
    }
    num.parse::<f64>().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/style/css.rs"]
mod tests;
