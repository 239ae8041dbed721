use crate::{
    foundation::core::{ClientRect, Coords, RectObject, create_coords, rect_to_client_rect},
    platform::{Platform, ReferenceFrame, Subject, unwrap_element},
};

/// Upper bound on embedding-frame hops while compounding frame offsets.
///
/// Hosts never nest this deep in practice; the bound stops a walk over a
/// navigation graph that loops back on itself.
pub const MAX_FRAME_DEPTH: usize = 64;

/// Switches for [`get_bounding_client_rect`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Divide out transform scale. Leave unset when the caller already works
    /// in rendered pixels.
    pub include_scale: bool,
    /// Measure for viewport-anchored (fixed) positioning, which is the only
    /// case visual-viewport offsets apply to.
    pub is_fixed_strategy: bool,
}

impl ResolveOptions {
    pub fn with_scale(mut self) -> Self {
        self.include_scale = true;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.is_fixed_strategy = true;
        self
    }
}

/// Resolve the render-accurate rectangle of `subject`.
///
/// The raw rendered rect is divided by transform scale and CSS zoom,
/// optionally shifted by the visual-viewport offset, and then (only when a
/// `reference` is given) carried outward through every embedding frame until
/// the reference's window is reached. Each frame multiplies the rect by its
/// own scale and translates it by the frame's content origin.
///
/// The walk stops silently when no embedding frame is reachable (top level or
/// a cross-origin boundary); the result is then relative to the last
/// reachable window.
#[tracing::instrument(level = "trace", skip(platform, subject, reference))]
pub fn get_bounding_client_rect<P>(
    platform: &P,
    subject: Subject<'_, P::Element>,
    options: ResolveOptions,
    reference: Option<ReferenceFrame<'_, P::Element, P::Window>>,
) -> ClientRect
where
    P: Platform + ?Sized,
{
    let raw = subject.bounding_client_rect(platform);
    let dom_element = unwrap_element(subject);

    let scale = if options.include_scale {
        match reference {
            Some(ReferenceFrame::Element(el)) => platform.scale(el),
            Some(ReferenceFrame::Window(_)) => create_coords(1.0),
            None => dom_element
                .as_ref()
                .map_or_else(|| create_coords(1.0), |el| platform.scale(el)),
        }
    } else {
        create_coords(1.0)
    };

    let zoom = dom_element
        .as_ref()
        .map_or(1.0, |el| platform.computed_style(el).zoom_factor());

    let visual_offsets = if platform.should_add_visual_offsets(
        dom_element.as_ref(),
        options.is_fixed_strategy,
        reference.as_ref(),
    ) {
        platform.visual_offsets(dom_element.as_ref())
    } else {
        create_coords(0.0)
    };

    let mut x = (raw.left + visual_offsets.x) / (scale.x * zoom);
    let mut y = (raw.top + visual_offsets.y) / (scale.y * zoom);
    let mut width = raw.width / (scale.x * zoom);
    let mut height = raw.height / (scale.y * zoom);

    if let (Some(el), Some(reference)) = (dom_element.as_ref(), reference) {
        let reference_win = reference.window(platform);
        let mut current_win = platform.window_of(el);
        let mut current_frame = platform.frame_element(&current_win);
        let mut depth = 0usize;

        while let Some(frame) = current_frame {
            if current_win == reference_win {
                break;
            }
            if depth == MAX_FRAME_DEPTH {
                tracing::warn!(
                    depth,
                    "frame chain did not reach the reference window; stopping"
                );
                break;
            }

            let frame_scale = platform.scale(&frame);
            let origin = frame_content_origin(platform, &frame, frame_scale);

            x = x * frame_scale.x + origin.x;
            y = y * frame_scale.y + origin.y;
            width *= frame_scale.x;
            height *= frame_scale.y;

            tracing::trace!(
                ?frame,
                scale_x = frame_scale.x,
                scale_y = frame_scale.y,
                origin_x = origin.x,
                origin_y = origin.y,
                "compounded embedding frame"
            );

            current_win = platform.window_of(&frame);
            current_frame = platform.frame_element(&current_win);
            depth += 1;
        }
    }

    rect_to_client_rect(RectObject {
        x,
        y,
        width,
        height,
    })
}

/// Top-left of a frame's content box in its parent window's viewport.
fn frame_content_origin<P>(platform: &P, frame: &P::Element, scale: Coords) -> Coords
where
    P: Platform + ?Sized,
{
    let rect = platform.bounding_client_rect(frame);
    let css = platform.computed_style(frame);
    Coords::new(
        rect.left + (platform.client_left(frame) + css.padding_left_px()) * scale.x,
        rect.top + (platform.client_top(frame) + css.padding_top_px()) * scale.y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/client_rect.rs"]
mod tests;
