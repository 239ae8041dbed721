use std::collections::BTreeMap;

use crate::{
    foundation::core::{Coords, RawRect},
    foundation::error::{FrameRectError, FrameRectResult},
    style::css::ComputedStyle,
};

/// Stable key of an element in a [`Scene`].
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub String);

/// Stable key of a window in a [`Scene`].
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// A snapshot of a host's windows and elements with their measured geometry.
///
/// A scene is plain data that can be:
/// - built programmatically (see [`Scene::with_window`] / [`Scene::with_element`])
/// - serialized/deserialized via Serde (JSON)
///
/// It implements [`crate::Platform`], so it can be measured with
/// [`crate::get_bounding_client_rect`] directly.
pub struct Scene {
    /// Windows keyed by id.
    #[serde(default)]
    pub windows: BTreeMap<WindowId, SceneWindow>,
    /// Elements keyed by id.
    #[serde(default)]
    pub elements: BTreeMap<ElementId, SceneElement>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A rendering surface: the top-level window or an embedded frame's view.
pub struct SceneWindow {
    /// Frame element (in the parent window) that embeds this window.
    #[serde(default)]
    pub frame_element: Option<ElementId>,
    /// Parent is on another origin; the embedding frame is not reachable.
    #[serde(default)]
    pub cross_origin: bool,
    /// Visual viewport offset from the layout viewport, when the host has one.
    #[serde(default)]
    pub visual_offset: Option<Coords>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A measurable element.
pub struct SceneElement {
    /// Owning window.
    pub window: WindowId,
    /// Rendered rect relative to the owning window's viewport.
    pub rect: RawRect,
    /// Resolved style properties.
    #[serde(default)]
    pub style: ComputedStyle,
    /// Left border width.
    #[serde(default)]
    pub client_left: f64,
    /// Top border width.
    #[serde(default)]
    pub client_top: f64,
    /// Integer layout size (`[width, height]`), when the element has one.
    #[serde(default)]
    pub offset_size: Option<[f64; 2]>,
    /// Pinned render-vs-layout scale; derived from `rect` and `style` when unset.
    #[serde(default)]
    pub scale: Option<Coords>,
}

impl SceneElement {
    /// Element in `window` with the given rendered rect and default style.
    pub fn new(window: WindowId, rect: RawRect) -> Self {
        Self {
            window,
            rect,
            style: ComputedStyle::default(),
            client_left: 0.0,
            client_top: 0.0,
            offset_size: None,
            scale: None,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a scene from JSON and validate it.
    pub fn from_json_str(s: &str) -> FrameRectResult<Self> {
        let scene: Self = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read a scene from JSON and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> FrameRectResult<Self> {
        let scene: Self = serde_json::from_reader(r)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn with_window(mut self, id: impl Into<String>, window: SceneWindow) -> Self {
        self.windows.insert(WindowId::new(id), window);
        self
    }

    pub fn with_element(mut self, id: impl Into<String>, element: SceneElement) -> Self {
        self.elements.insert(ElementId::new(id), element);
        self
    }

    pub fn element(&self, id: &ElementId) -> FrameRectResult<&SceneElement> {
        self.elements
            .get(id)
            .ok_or_else(|| FrameRectError::scene(format!("unknown element '{id}'")))
    }

    pub fn window(&self, id: &WindowId) -> FrameRectResult<&SceneWindow> {
        self.windows
            .get(id)
            .ok_or_else(|| FrameRectError::scene(format!("unknown window '{id}'")))
    }

    /// Number of embedding frames between `win` and the top of its reachable chain.
    pub fn frame_depth(&self, win: &WindowId) -> FrameRectResult<usize> {
        let mut depth = 0usize;
        let mut current = self.window(win)?;
        while let Some(frame) = current.frame_element.as_ref() {
            if current.cross_origin {
                break;
            }
            depth += 1;
            if depth > self.windows.len() {
                return Err(FrameRectError::scene(format!(
                    "frame chain of window '{win}' is cyclic"
                )));
            }
            current = self.window(&self.element(frame)?.window)?;
        }
        Ok(depth)
    }

    /// Check referential integrity and acyclic frame chains.
    pub fn validate(&self) -> FrameRectResult<()> {
        for (id, el) in &self.elements {
            if !self.windows.contains_key(&el.window) {
                return Err(FrameRectError::scene(format!(
                    "element '{id}' references missing window '{}'",
                    el.window
                )));
            }
            let r = el.rect;
            for (name, value) in [
                ("left", r.left),
                ("top", r.top),
                ("width", r.width),
                ("height", r.height),
                ("client_left", el.client_left),
                ("client_top", el.client_top),
            ] {
                if !value.is_finite() {
                    return Err(FrameRectError::validation(format!(
                        "element '{id}' {name} must be finite"
                    )));
                }
            }
            if r.width < 0.0 || r.height < 0.0 {
                return Err(FrameRectError::validation(format!(
                    "element '{id}' rect size must be >= 0"
                )));
            }
            if let Some(s) = el.scale
                && !(s.x.is_finite() && s.y.is_finite() && s.x != 0.0 && s.y != 0.0)
            {
                return Err(FrameRectError::validation(format!(
                    "element '{id}' scale must be finite and non-zero"
                )));
            }
        }

        for (id, win) in &self.windows {
            if let Some(frame) = &win.frame_element {
                let frame_el = self.element(frame).map_err(|_| {
                    FrameRectError::scene(format!(
                        "window '{id}' references missing frame element '{frame}'"
                    ))
                })?;
                if &frame_el.window == id {
                    return Err(FrameRectError::scene(format!(
                        "window '{id}' is embedded by its own element '{frame}'"
                    )));
                }
            }
        }

        for id in self.windows.keys() {
            self.frame_depth(id)?;
        }
        Ok(())
    }
}
