//! Host capabilities the resolver measures through.
//!
//! The resolver never owns elements, windows or frames. A host (a browser
//! binding, a layout engine, or the in-memory [`crate::Scene`]) hands out
//! cheap handles and answers geometry queries about them through [`Platform`].

pub mod scale;

use crate::{
    foundation::core::{Coords, RawRect, create_coords},
    style::css::ComputedStyle,
};

/// Geometry and navigation queries answered by the host environment.
///
/// All queries read live host state; nothing is cached between calls.
pub trait Platform {
    /// Handle to a measurable element.
    type Element: Clone + PartialEq + std::fmt::Debug;
    /// Handle to a rendering surface (a window or frame document view).
    type Window: Clone + PartialEq + std::fmt::Debug;

    /// Rendered rectangle of `el`, relative to its own window's viewport.
    fn bounding_client_rect(&self, el: &Self::Element) -> RawRect;

    /// Resolved style of `el`.
    fn computed_style(&self, el: &Self::Element) -> ComputedStyle;

    /// Left border width of `el` (`clientLeft`).
    fn client_left(&self, el: &Self::Element) -> f64;

    /// Top border width of `el` (`clientTop`).
    fn client_top(&self, el: &Self::Element) -> f64;

    /// Rendered-to-layout size ratio of `el`; `{1, 1}` when untransformed.
    fn scale(&self, el: &Self::Element) -> Coords;

    /// Window that owns `el`.
    fn window_of(&self, el: &Self::Element) -> Self::Window;

    /// Frame element embedding `win`, or `None` at the top level and across
    /// origin boundaries.
    fn frame_element(&self, win: &Self::Window) -> Option<Self::Element>;

    /// Offset of the visual viewport from the layout viewport for the window
    /// owning `el`. Hosts without a visual viewport report `{0, 0}`.
    fn visual_offsets(&self, el: Option<&Self::Element>) -> Coords {
        let _ = el;
        create_coords(0.0)
    }

    /// Whether [`Platform::visual_offsets`] apply to a measurement.
    ///
    /// The default adds offsets only for fixed positioning measured against
    /// no reference frame, or against the element's own window.
    fn should_add_visual_offsets(
        &self,
        el: Option<&Self::Element>,
        is_fixed_strategy: bool,
        reference: Option<&ReferenceFrame<'_, Self::Element, Self::Window>>,
    ) -> bool {
        if !is_fixed_strategy {
            return false;
        }
        let Some(el) = el else {
            return false;
        };
        match reference {
            None => true,
            Some(ReferenceFrame::Window(win)) => **win == self.window_of(el),
            Some(ReferenceFrame::Element(_)) => false,
        }
    }
}

/// Synthetic positioning target that only knows its own rectangle.
pub trait VirtualElement<E> {
    /// Rectangle in rendered pixels of the context element's window.
    fn bounding_client_rect(&self) -> RawRect;

    /// Real element whose style and window the virtual element borrows.
    fn context_element(&self) -> Option<E> {
        None
    }
}

/// Virtual element with a fixed rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualRect<E> {
    /// Reported rectangle.
    pub rect: RawRect,
    /// Optional anchor element in the host tree.
    pub context: Option<E>,
}

impl<E> VirtualRect<E> {
    /// A free-floating virtual element with no context element.
    pub fn new(rect: RawRect) -> Self {
        Self {
            rect,
            context: None,
        }
    }

    /// Attach the element whose window and style this rect lives in.
    pub fn with_context(mut self, el: E) -> Self {
        self.context = Some(el);
        self
    }
}

impl<E: Clone> VirtualElement<E> for VirtualRect<E> {
    fn bounding_client_rect(&self) -> RawRect {
        self.rect
    }

    fn context_element(&self) -> Option<E> {
        self.context.clone()
    }
}

/// What is being measured: a real element or a virtual stand-in.
pub enum Subject<'a, E> {
    /// A host element.
    Element(&'a E),
    /// A virtual element.
    Virtual(&'a dyn VirtualElement<E>),
}

impl<E> Clone for Subject<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Subject<'_, E> {}

impl<E: std::fmt::Debug> std::fmt::Debug for Subject<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(el) => f.debug_tuple("Element").field(el).finish(),
            Self::Virtual(_) => f.write_str("Virtual"),
        }
    }
}

impl<E: Clone> Subject<'_, E> {
    /// Raw rendered rectangle of the subject.
    pub fn bounding_client_rect<P>(&self, platform: &P) -> RawRect
    where
        P: Platform<Element = E> + ?Sized,
    {
        match self {
            Self::Element(el) => platform.bounding_client_rect(el),
            Self::Virtual(v) => v.bounding_client_rect(),
        }
    }
}

/// Underlying host element of a subject: the element itself, or the virtual
/// element's context element.
pub fn unwrap_element<E: Clone>(subject: Subject<'_, E>) -> Option<E> {
    match subject {
        Subject::Element(el) => Some(el.clone()),
        Subject::Virtual(v) => v.context_element(),
    }
}

/// Coordinate space a result is expressed in.
#[derive(Debug)]
pub enum ReferenceFrame<'a, E, W> {
    /// A measurable element; its scale and window define the space.
    Element(&'a E),
    /// A bare rendering surface.
    Window(&'a W),
}

impl<E, W> Clone for ReferenceFrame<'_, E, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, W> Copy for ReferenceFrame<'_, E, W> {}

impl<E, W> ReferenceFrame<'_, E, W> {
    /// Whether the reference frame is a measurable element.
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// The reference frame's window.
    pub fn window<P>(&self, platform: &P) -> W
    where
        P: Platform<Element = E, Window = W> + ?Sized,
        W: Clone,
    {
        match self {
            Self::Element(el) => platform.window_of(el),
            Self::Window(win) => (*win).clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/platform/mod.rs"]
mod tests;
