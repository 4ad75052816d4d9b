use super::*;
use crate::foundation::core::Rgba8Premul;

const RED: Rgba8 = Rgba8::rgba(255, 0, 0, 255);

#[test]
fn opaque_mask_yields_solid_fill() {
    let mut r = ShapeRenderer::new();
    let img = r.render_shape(&Shape::rect(0, 0, 6, 4, RED)).unwrap();
    let expected = Surface::filled(6, 4, RED.premultiply()).unwrap();
    assert_eq!(img, expected);
}

#[test]
fn fill_does_not_leak_outside_the_stencil() {
    let mut r = ShapeRenderer::new();
    let shape = Shape::rect(0, 0, 16, 16, RED).with_radius(8);
    let img = r.render_shape(&shape).unwrap();
    let mask = r.build_mask(&shape).unwrap();

    for y in 0..16 {
        for x in 0..16 {
            let px = img.pixel(x, y).unwrap();
            if mask.get_pixel(x, y).0[0] == 0 {
                assert_eq!(px, Rgba8Premul::transparent(), "({x},{y})");
            } else {
                assert_eq!(px, RED.premultiply(), "({x},{y})");
            }
        }
    }
}

#[test]
fn translucent_fill_keeps_its_alpha() {
    let mut r = ShapeRenderer::new();
    let c = Rgba8::rgba(0, 0, 255, 128);
    let img = r.render_shape(&Shape::rect(0, 0, 2, 2, c)).unwrap();
    assert_eq!(img.pixel(1, 1), Some(c.premultiply()));
}

#[test]
fn empty_shape_fails_with_surface_error() {
    let mut r = ShapeRenderer::new();
    let err = r.render_shape(&Shape::rect(0, 0, 0, 3, RED)).unwrap_err();
    assert!(matches!(err, ShapewatchError::Surface(_)));
}

#[test]
fn draw_shape_offsets_and_preserves_background() {
    let mut r = ShapeRenderer::new();
    let mut dst = Surface::new(10, 10).unwrap();
    r.draw_shape(&mut dst, &Shape::rect(3, 4, 2, 2, RED)).unwrap();

    assert_eq!(dst.pixel(3, 4), Some(RED.premultiply()));
    assert_eq!(dst.pixel(4, 5), Some(RED.premultiply()));
    assert_eq!(dst.pixel(2, 4), Some(Rgba8Premul::transparent()));
    assert_eq!(dst.pixel(5, 5), Some(Rgba8Premul::transparent()));
}

#[test]
fn corner_masks_are_reused_across_shapes() {
    let mut r = ShapeRenderer::new();
    for _ in 0..3 {
        r.render_shape(&Shape::rect(0, 0, 20, 20, RED).with_radius(4))
            .unwrap();
    }
    let st = r.corner_cache_stats();
    assert_eq!(st.misses, 1);
    assert_eq!(st.hits, 2);
}

#[test]
fn empty_stencil_leaves_nothing_of_the_fill() {
    let fill = Surface::filled(5, 3, RED.premultiply()).unwrap();
    let out = apply_stencil(&fill, &AlphaMask::new(5, 3)).unwrap();
    assert_eq!(out.width(), 5);
    assert!(out.data().iter().all(|b| *b == 0));
}

#[test]
fn full_stencil_keeps_the_whole_fill() {
    let fill = Surface::filled(5, 3, RED.premultiply()).unwrap();
    let stencil = AlphaMask::from_pixel(5, 3, image::Luma([0xFF]));
    assert_eq!(apply_stencil(&fill, &stencil).unwrap(), fill);
}

#[test]
fn stencil_size_must_match_fill() {
    let fill = Surface::filled(5, 3, RED.premultiply()).unwrap();
    let err = apply_stencil(&fill, &AlphaMask::new(3, 5)).unwrap_err();
    assert!(matches!(err, ShapewatchError::Surface(_)));
}

#[test]
fn unused_corner_masks_are_evicted() {
    let mut r = ShapeRenderer::new();
    r.build_mask(&Shape::rect(0, 0, 20, 20, RED).with_radius(3)).unwrap();
    r.build_mask(&Shape::rect(0, 0, 20, 20, RED).with_radius(7)).unwrap();
    assert_eq!(r.corner_cache_stats().retained, 2);

    r.retain_corner_masks(&Scene::new(vec![
        Shape::rect(0, 0, 20, 20, RED).with_radius(7),
        Shape::rect(0, 0, -1, 20, RED).with_radius(3),
    ]));
    let st = r.corner_cache_stats();
    assert_eq!(st.retained, 1);
    assert_eq!(st.evicted, 1);
}
