//! framerect resolves the render-accurate bounding rectangle of an element.
//!
//! A native `getBoundingClientRect`-style measurement reports rendered pixels
//! in the coordinate space of the element's own window. framerect corrects
//! that measurement for:
//!
//! - **transform scale**: rendered size differs from layout size,
//! - **CSS zoom**: a uniform multiplier on top of transform scale,
//! - **nested frames**: each embedding frame adds its own offset, border,
//!   padding and scale between the element's window and the caller's.
//!
//! # Pipeline
//!
//! 1. **Measure**: raw rect from the host ([`Platform`]) or a [`VirtualElement`]
//! 2. **Normalize**: divide by scale and zoom, add visual-viewport offsets
//! 3. **Compound**: walk embedding frames out to the [`ReferenceFrame`]'s window
//! 4. **Package**: derive edges into a [`ClientRect`]
//!
//! Resolution is synchronous and never fails; nothing is cached between calls.
//! The host is anything implementing [`Platform`]; [`Scene`] is an in-memory
//! host that loads from JSON.
#![forbid(unsafe_code)]

mod foundation;
mod platform;
mod resolve;
mod scene;
mod style;

pub use foundation::core::{
    ClientRect, Coords, RawRect, Rect, RectObject, Vec2, create_coords, rect_to_client_rect,
};
pub use foundation::error::{FrameRectError, FrameRectResult};
pub use platform::scale::{CssDimensions, css_dimensions, scale_from_rendered};
pub use platform::{
    Platform, ReferenceFrame, Subject, VirtualElement, VirtualRect, unwrap_element,
};
pub use resolve::client_rect::{MAX_FRAME_DEPTH, ResolveOptions, get_bounding_client_rect};
pub use scene::model::{ElementId, Scene, SceneElement, SceneWindow, WindowId};
pub use style::css::{ComputedStyle, parse_float};
