use super::*;
use crate::{
    foundation::core::RawRect,
    platform::VirtualRect,
    scene::model::{ElementId, Scene, SceneElement, SceneWindow, WindowId},
    style::css::ComputedStyle,
};

fn element(window: &str, left: f64, top: f64, width: f64, height: f64) -> SceneElement {
    SceneElement::new(
        WindowId::new(window),
        RawRect::new(left, top, width, height),
    )
}

fn scaled(mut el: SceneElement, sx: f64, sy: f64) -> SceneElement {
    el.scale = Some(Coords::new(sx, sy));
    el
}

fn zoomed(mut el: SceneElement, zoom: &str) -> SceneElement {
    el.style.zoom = Some(zoom.to_string());
    el
}

fn embedded_by(frame: &str) -> SceneWindow {
    SceneWindow {
        frame_element: Some(ElementId::new(frame)),
        ..SceneWindow::default()
    }
}

fn resolve(
    scene: &Scene,
    id: &str,
    options: ResolveOptions,
    reference: Option<ReferenceFrame<'_, ElementId, WindowId>>,
) -> ClientRect {
    let id = ElementId::new(id);
    get_bounding_client_rect(scene, Subject::Element(&id), options, reference)
}

fn xywh(r: ClientRect) -> (f64, f64, f64, f64) {
    (r.x(), r.y(), r.width(), r.height())
}

/// `top` embeds `inner` through `frame` at (10, 20); `target` sits at (5, 5) in `inner`.
fn one_frame_scene() -> Scene {
    Scene::new()
        .with_window("top", SceneWindow::default())
        .with_window("inner", embedded_by("frame"))
        .with_element("frame", scaled(element("top", 10.0, 20.0, 300.0, 150.0), 1.0, 1.0))
        .with_element("target", element("inner", 5.0, 5.0, 30.0, 30.0))
}

#[test]
fn untransformed_element_keeps_raw_rect() {
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_element("target", element("top", 10.0, 20.0, 30.0, 40.0));
    let r = resolve(&scene, "target", ResolveOptions::default(), None);
    assert_eq!(xywh(r), (10.0, 20.0, 30.0, 40.0));
    assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (10.0, 20.0, 40.0, 60.0));
}

#[test]
fn include_scale_divides_out_transform_scale() {
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_element("target", scaled(element("top", 100.0, 50.0, 200.0, 100.0), 2.0, 2.0));

    let r = resolve(&scene, "target", ResolveOptions::default().with_scale(), None);
    assert_eq!(xywh(r), (50.0, 25.0, 100.0, 50.0));

    let r = resolve(&scene, "target", ResolveOptions::default(), None);
    assert_eq!(xywh(r), (100.0, 50.0, 200.0, 100.0));
}

#[test]
fn zoom_divides_regardless_of_include_scale() {
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_element("target", zoomed(element("top", 100.0, 50.0, 200.0, 100.0), "2"));
    let r = resolve(&scene, "target", ResolveOptions::default(), None);
    assert_eq!(xywh(r), (50.0, 25.0, 100.0, 50.0));
}

#[test]
fn scale_and_zoom_compose_multiplicatively() {
    let target = zoomed(scaled(element("top", 100.0, 50.0, 200.0, 100.0), 2.0, 2.0), "2");
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_element("target", target);
    let r = resolve(&scene, "target", ResolveOptions::default().with_scale(), None);
    assert_eq!(xywh(r), (25.0, 12.5, 50.0, 25.0));
}

#[test]
fn unparsable_zoom_is_neutral() {
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_element("target", zoomed(element("top", 8.0, 8.0, 8.0, 8.0), "normal"));
    let r = resolve(&scene, "target", ResolveOptions::default(), None);
    assert_eq!(xywh(r), (8.0, 8.0, 8.0, 8.0));
}

#[test]
fn derived_edges_hold_for_every_result() {
    let scene = one_frame_scene();
    let top = WindowId::new("top");
    let cases = [
        resolve(&scene, "target", ResolveOptions::default(), None),
        resolve(&scene, "target", ResolveOptions::default().with_scale(), None),
        resolve(
            &scene,
            "target",
            ResolveOptions::default(),
            Some(ReferenceFrame::Window(&top)),
        ),
        resolve(&scene, "frame", ResolveOptions::default().fixed(), None),
    ];
    for r in cases {
        assert_eq!(r.right() - r.left(), r.width());
        assert_eq!(r.bottom() - r.top(), r.height());
        assert_eq!(r.left(), r.x());
        assert_eq!(r.top(), r.y());
    }
}

#[test]
fn frame_origin_is_added_when_reference_is_outer_window() {
    let scene = one_frame_scene();
    let top = WindowId::new("top");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default(),
        Some(ReferenceFrame::Window(&top)),
    );
    assert_eq!(xywh(r), (15.0, 25.0, 30.0, 30.0));
}

#[test]
fn no_reference_means_no_frame_compounding() {
    let scene = one_frame_scene();
    let r = resolve(&scene, "target", ResolveOptions::default(), None);
    assert_eq!(xywh(r), (5.0, 5.0, 30.0, 30.0));
}

#[test]
fn reference_in_own_window_stops_before_any_frame() {
    let scene = one_frame_scene();
    let inner = WindowId::new("inner");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default(),
        Some(ReferenceFrame::Window(&inner)),
    );
    assert_eq!(xywh(r), (5.0, 5.0, 30.0, 30.0));
}

#[test]
fn cross_origin_parent_halts_traversal() {
    let mut scene = one_frame_scene();
    if let Some(inner) = scene.windows.get_mut(&WindowId::new("inner")) {
        inner.cross_origin = true;
    }
    let top = WindowId::new("top");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default(),
        Some(ReferenceFrame::Window(&top)),
    );
    assert_eq!(xywh(r), (5.0, 5.0, 30.0, 30.0));
}

#[test]
fn zero_sized_element_stays_zero() {
    let target = zoomed(scaled(element("top", 0.0, 0.0, 0.0, 0.0), 2.0, 3.0), "3");
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_element("target", target)
        .with_element("detached", element("top", 0.0, 0.0, 0.0, 0.0));

    let r = resolve(&scene, "target", ResolveOptions::default().with_scale(), None);
    assert_eq!(xywh(r), (0.0, 0.0, 0.0, 0.0));

    let r = resolve(&scene, "detached", ResolveOptions::default().with_scale(), None);
    assert_eq!(xywh(r), (0.0, 0.0, 0.0, 0.0));
    assert!(r.right().is_finite() && r.bottom().is_finite());
}

#[test]
fn nested_frames_compound_scale_and_content_origin() {
    let mut frame_a = scaled(element("top", 100.0, 100.0, 400.0, 400.0), 2.0, 2.0);
    frame_a.client_left = 1.0;
    frame_a.client_top = 3.0;
    frame_a.style = ComputedStyle {
        padding_left: Some("2px".to_string()),
        padding_top: Some("4px".to_string()),
        ..ComputedStyle::default()
    };

    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_window("a", embedded_by("frame_a"))
        .with_window("b", embedded_by("frame_b"))
        .with_element("frame_a", frame_a)
        .with_element("frame_b", scaled(element("a", 10.0, 10.0, 100.0, 100.0), 1.0, 1.0))
        .with_element("target", element("b", 5.0, 5.0, 10.0, 10.0));

    let top = WindowId::new("top");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default(),
        Some(ReferenceFrame::Window(&top)),
    );
    assert_eq!(xywh(r), (136.0, 144.0, 20.0, 20.0));

    let a = WindowId::new("a");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default(),
        Some(ReferenceFrame::Window(&a)),
    );
    assert_eq!(xywh(r), (15.0, 15.0, 10.0, 10.0));
}

#[test]
fn element_reference_supplies_scale_and_window() {
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_window("inner", embedded_by("frame"))
        .with_element("frame", scaled(element("top", 10.0, 20.0, 300.0, 150.0), 1.0, 1.0))
        .with_element("parent", scaled(element("top", 0.0, 0.0, 50.0, 50.0), 2.0, 2.0))
        .with_element("target", scaled(element("inner", 4.0, 4.0, 20.0, 20.0), 4.0, 4.0));

    let parent = ElementId::new("parent");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default().with_scale(),
        Some(ReferenceFrame::Element(&parent)),
    );
    assert_eq!(xywh(r), (12.0, 22.0, 10.0, 10.0));
}

#[test]
fn window_reference_keeps_scale_neutral() {
    let scene = Scene::new()
        .with_window("top", SceneWindow::default())
        .with_element("target", scaled(element("top", 40.0, 40.0, 40.0, 40.0), 4.0, 4.0));
    let top = WindowId::new("top");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default().with_scale(),
        Some(ReferenceFrame::Window(&top)),
    );
    assert_eq!(xywh(r), (40.0, 40.0, 40.0, 40.0));
}

#[test]
fn virtual_element_without_context_skips_zoom_and_frames() {
    let scene = one_frame_scene();
    let top = WindowId::new("top");
    let v = VirtualRect::<ElementId>::new(RawRect::new(7.0, 8.0, 9.0, 10.0));
    let r = get_bounding_client_rect(
        &scene,
        Subject::Virtual(&v),
        ResolveOptions::default().with_scale().fixed(),
        Some(ReferenceFrame::Window(&top)),
    );
    assert_eq!(xywh(r), (7.0, 8.0, 9.0, 10.0));
}

#[test]
fn virtual_element_with_context_uses_context_window() {
    let mut scene = one_frame_scene();
    if let Some(target) = scene.elements.get_mut(&ElementId::new("target")) {
        target.style.zoom = Some("2".to_string());
    }
    let top = WindowId::new("top");
    let v = VirtualRect::new(RawRect::new(20.0, 20.0, 2.0, 2.0)).with_context(ElementId::new("target"));
    let r = get_bounding_client_rect(
        &scene,
        Subject::Virtual(&v),
        ResolveOptions::default(),
        Some(ReferenceFrame::Window(&top)),
    );
    assert_eq!(xywh(r), (20.0, 30.0, 1.0, 1.0));
}

#[test]
fn visual_offsets_apply_only_to_fixed_strategy() {
    let scene = Scene::new()
        .with_window(
            "top",
            SceneWindow {
                visual_offset: Some(Coords::new(3.0, 4.0)),
                ..SceneWindow::default()
            },
        )
        .with_element("target", element("top", 10.0, 10.0, 5.0, 5.0))
        .with_element("other", element("top", 0.0, 0.0, 1.0, 1.0));

    let r = resolve(&scene, "target", ResolveOptions::default().fixed(), None);
    assert_eq!(xywh(r), (13.0, 14.0, 5.0, 5.0));

    let r = resolve(&scene, "target", ResolveOptions::default(), None);
    assert_eq!(xywh(r), (10.0, 10.0, 5.0, 5.0));

    let top = WindowId::new("top");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default().fixed(),
        Some(ReferenceFrame::Window(&top)),
    );
    assert_eq!(xywh(r), (13.0, 14.0, 5.0, 5.0));

    let other = ElementId::new("other");
    let r = resolve(
        &scene,
        "target",
        ResolveOptions::default().fixed(),
        Some(ReferenceFrame::Element(&other)),
    );
    assert_eq!(xywh(r), (10.0, 10.0, 5.0, 5.0));
}

#[derive(Clone, Debug, PartialEq)]
struct Node;

/// Host whose navigation loops forever: every window is embedded by a frame
/// at x = 1 that lives in the same window.
struct EndlessFrames;

impl Platform for EndlessFrames {
    type Element = Node;
    type Window = u8;

    fn bounding_client_rect(&self, _el: &Node) -> RawRect {
        RawRect::new(1.0, 0.0, 10.0, 10.0)
    }

    fn computed_style(&self, _el: &Node) -> ComputedStyle {
        ComputedStyle::default()
    }

    fn client_left(&self, _el: &Node) -> f64 {
        0.0
    }

    fn client_top(&self, _el: &Node) -> f64 {
        0.0
    }

    fn scale(&self, _el: &Node) -> Coords {
        create_coords(1.0)
    }

    fn window_of(&self, _el: &Node) -> u8 {
        1
    }

    fn frame_element(&self, _win: &u8) -> Option<Node> {
        Some(Node)
    }
}

#[test]
fn cyclic_navigation_is_bounded() {
    let unreachable = 0u8;
    let r = get_bounding_client_rect(
        &EndlessFrames,
        Subject::Element(&Node),
        ResolveOptions::default(),
        Some(ReferenceFrame::Window(&unreachable)),
    );
    assert_eq!(r.x(), 1.0 + MAX_FRAME_DEPTH as f64);
    assert_eq!(r.width(), 10.0);
}
