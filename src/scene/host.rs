use crate::{
    foundation::core::{Coords, RawRect, create_coords},
    platform::{
        Platform,
        scale::{css_dimensions, scale_from_rendered},
    },
    scene::model::{ElementId, Scene, SceneElement, WindowId},
    style::css::ComputedStyle,
};

impl Scene {
    fn lookup(&self, el: &ElementId) -> Option<&SceneElement> {
        let found = self.elements.get(el);
        if found.is_none() {
            tracing::warn!(element = %el, "measuring an element that is not in the scene");
        }
        found
    }
}

impl Platform for Scene {
    type Element = ElementId;
    type Window = WindowId;

    fn bounding_client_rect(&self, el: &ElementId) -> RawRect {
        self.lookup(el).map(|e| e.rect).unwrap_or_default()
    }

    fn computed_style(&self, el: &ElementId) -> ComputedStyle {
        self.lookup(el).map(|e| e.style.clone()).unwrap_or_default()
    }

    fn client_left(&self, el: &ElementId) -> f64 {
        self.lookup(el).map_or(0.0, |e| e.client_left)
    }

    fn client_top(&self, el: &ElementId) -> f64 {
        self.lookup(el).map_or(0.0, |e| e.client_top)
    }

    fn scale(&self, el: &ElementId) -> Coords {
        let Some(e) = self.lookup(el) else {
            return create_coords(1.0);
        };
        if let Some(pinned) = e.scale {
            return pinned;
        }
        let offset = e.offset_size.map(|[w, h]| (w, h));
        scale_from_rendered(e.rect, css_dimensions(&e.style, offset))
    }

    fn window_of(&self, el: &ElementId) -> WindowId {
        self.lookup(el)
            .map(|e| e.window.clone())
            .unwrap_or_else(|| WindowId::new(""))
    }

    fn frame_element(&self, win: &WindowId) -> Option<ElementId> {
        let w = self.windows.get(win)?;
        if w.cross_origin {
            return None;
        }
        w.frame_element.clone()
    }

    fn visual_offsets(&self, el: Option<&ElementId>) -> Coords {
        el.and_then(|el| self.elements.get(el))
            .and_then(|e| self.windows.get(&e.window))
            .and_then(|w| w.visual_offset)
            .unwrap_or_else(|| create_coords(0.0))
    }
}
