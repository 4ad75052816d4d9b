use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_blends_with_opaque_dst() {
    let dst = [0, 0, 255, 255];
    let src = [128, 0, 0, 128];
    let out = over(dst, src);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
    assert_eq!(out[2], 127);
}

#[test]
fn source_in_keeps_color_only_under_coverage() {
    let red = [255, 0, 0, 255];
    assert_eq!(source_in([255, 255, 255, 255], red), red);
    assert_eq!(source_in([0, 0, 0, 0], red), [0, 0, 0, 0]);

    let half = source_in([128, 128, 128, 128], red);
    assert_eq!(half, [128, 0, 0, 128]);
}

#[test]
fn copy_overwrites_alpha_too() {
    let dst = [255, 255, 255, 255];
    let src = [0, 0, 0, 0];
    assert_eq!(CompositeMode::Copy.apply(dst, src), src);
}

#[test]
fn composite_span_applies_mode_per_pixel() {
    let mut dst = vec![255u8, 255, 255, 255, 0, 0, 0, 0];
    let src = vec![0u8, 0, 255, 255, 0, 0, 255, 255];
    composite_span(&mut dst, &src, CompositeMode::SourceIn);
    assert_eq!(dst, vec![0, 0, 255, 255, 0, 0, 0, 0]);
}
