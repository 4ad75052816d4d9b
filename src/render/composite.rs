pub type PremulRgba8 = [u8; 4];

/// Porter-Duff operators used by the shape pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompositeMode {
    /// Destination becomes the source pixel, alpha included.
    Copy,
    /// Source kept only where the destination has coverage, scaled by that coverage.
    SourceIn,
    /// Standard alpha blending.
    SourceOver,
}

impl CompositeMode {
    pub fn apply(self, dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
        match self {
            Self::Copy => src,
            Self::SourceIn => source_in(dst, src),
            Self::SourceOver => over(dst, src),
        }
    }
}

pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

pub fn source_in(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let da = u16::from(dst[3]);
    match da {
        0 => [0; 4],
        255 => src,
        _ => [
            mul_div255(u16::from(src[0]), da),
            mul_div255(u16::from(src[1]), da),
            mul_div255(u16::from(src[2]), da),
            mul_div255(u16::from(src[3]), da),
        ],
    }
}

/// Row-by-row composite of equal-sized premultiplied RGBA8 spans.
pub(crate) fn composite_span(dst: &mut [u8], src: &[u8], mode: CompositeMode) {
    debug_assert_eq!(dst.len(), src.len());
    if mode == CompositeMode::Copy {
        dst.copy_from_slice(src);
        return;
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = mode.apply([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
