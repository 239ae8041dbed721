pub use kurbo::{Rect, Vec2};

/// Two independent floating-point axes: an offset or a per-axis scale factor.
pub type Coords = Vec2;

/// Build a coordinate pair with both axes set to `v`.
#[inline]
pub fn create_coords(v: f64) -> Coords {
    Vec2::new(v, v)
}

/// Rectangle as reported by native measurement.
///
/// Always in rendered (post-transform) pixels, relative to the viewport of
/// the window that reported it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawRect {
    /// Left edge in rendered pixels.
    pub left: f64,
    /// Top edge in rendered pixels.
    pub top: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl RawRect {
    /// Build a raw rect from its origin and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a [`kurbo::Rect`] (edge form) into origin-and-size form.
    pub fn from_kurbo(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

/// Origin-and-size rectangle before edges are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectObject {
    /// Horizontal origin.
    pub x: f64,
    /// Vertical origin.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Final rectangle in the caller's coordinate space.
///
/// Edges are derived from `{x, y, width, height}` at construction and cannot
/// be set independently: `top == y`, `left == x`, `right == x + width`,
/// `bottom == y + height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RectObject")]
pub struct ClientRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl ClientRect {
    /// Derive a client rect from origin and size.
    pub fn from_rect(rect: RectObject) -> Self {
        let RectObject {
            x,
            y,
            width,
            height,
        } = rect;
        Self {
            x,
            y,
            width,
            height,
            top: y,
            right: x + width,
            bottom: y + height,
            left: x,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    /// Origin-and-size view of this rect.
    pub fn rect(&self) -> RectObject {
        RectObject {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Edge-form [`kurbo::Rect`] for downstream geometry.
    pub fn to_kurbo(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<RectObject> for ClientRect {
    fn from(rect: RectObject) -> Self {
        Self::from_rect(rect)
    }
}

/// Package an origin-and-size rectangle into a [`ClientRect`].
#[inline]
pub fn rect_to_client_rect(rect: RectObject) -> ClientRect {
    ClientRect::from_rect(rect)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
