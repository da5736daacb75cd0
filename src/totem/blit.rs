//! Region-by-region blitting from a skin onto the totem canvas.

use super::regions::{RegionMap, TextureRegion};
use super::TotemImage;
use crate::skin::SkinImage;

/// Which regions contributed to a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Regions drawn, in paint order.
    pub drawn: Vec<&'static str>,
    /// Regions whose source rectangle lies outside the skin.
    pub skipped: Vec<&'static str>,
}

/// Render a totem using the classic arm table.
pub fn render(skin: &SkinImage) -> TotemImage {
    render_with(skin, RegionMap::classic())
}

/// Render a totem using the given region table.
pub fn render_with(skin: &SkinImage, map: RegionMap) -> TotemImage {
    render_report(skin, map).0
}

/// Render a totem and report which regions were drawn.
///
/// Regions that sample rows a legacy skin does not have are skipped without
/// error; their destination keeps whatever was painted before.
pub fn render_report(skin: &SkinImage, map: RegionMap) -> (TotemImage, RenderReport) {
    let mut totem = TotemImage::new();
    let mut report = RenderReport::default();

    for region in map.iter() {
        if !skin.contains(&region.src) {
            log::debug!(
                "Skipping region {}: source {:?} outside {}x{} skin",
                region.name,
                region.src,
                skin.width(),
                skin.height()
            );
            report.skipped.push(region.name);
            continue;
        }

        blit_region(skin, region, &mut totem);
        report.drawn.push(region.name);
    }

    (totem, report)
}

/// Draw one region with nearest-neighbour scaling and source-over blending.
fn blit_region(skin: &SkinImage, region: &TextureRegion, totem: &mut TotemImage) {
    let src = region.src;
    let dest = region.dest;
    if src.is_empty() || dest.is_empty() {
        return;
    }

    for dy in 0..dest.height {
        // Sample at the centre of each destination pixel
        let sy = src.y + ((2 * dy + 1) * src.height) / (2 * dest.height);
        for dx in 0..dest.width {
            let sx = src.x + ((2 * dx + 1) * src.width) / (2 * dest.width);

            let x = dest.x + dx;
            let y = dest.y + dy;
            let color = source_over(skin.get_pixel(sx, sy), totem.get_pixel(x, y));
            totem.set_pixel(x, y, color);
        }
    }
}

/// Straight-alpha source-over compositing in integer arithmetic.
fn source_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u32;
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    // Alpha values below are scaled by 255
    let da = dst[3] as u32 * (255 - sa);
    let alpha = sa * 255 + da;

    let mut out = [0u8; 4];
    for c in 0..3 {
        let value = (src[c] as u32 * sa * 255 + dst[c] as u32 * da + alpha / 2) / alpha;
        out[c] = value.min(255) as u8;
    }
    out[3] = ((alpha + 127) / 255).min(255) as u8;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totem::TOTEM_SIZE;
    use crate::types::{ArmModel, Rect, SkinFormat};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    /// A skin where every pixel has a distinct opaque color.
    fn gradient_skin(format: SkinFormat) -> SkinImage {
        let height = format.height();
        let mut pixels = Vec::with_capacity((64 * height * 4) as usize);
        for y in 0..height {
            for x in 0..64 {
                pixels.extend_from_slice(&[(x * 4) as u8, (y * 4) as u8, 128, 255]);
            }
        }
        SkinImage::new(64, height, pixels).unwrap()
    }

    fn opaque_skin(format: SkinFormat, color: [u8; 4]) -> SkinImage {
        let mut skin = SkinImage::blank(format);
        skin.fill_rect(Rect::new(0, 0, 64, format.height()), color);
        skin
    }

    #[test]
    fn test_face_scenario() {
        let mut skin = SkinImage::blank(SkinFormat::Modern);
        skin.fill_rect(Rect::new(8, 8, 8, 8), RED);

        let totem = render(&skin);
        for y in 0..TOTEM_SIZE {
            for x in 0..TOTEM_SIZE {
                let expected = if (4..12).contains(&x) && y < 8 { RED } else { [0, 0, 0, 0] };
                assert_eq!(totem.get_pixel(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_equal_size_regions_copy_exactly() {
        let skin = gradient_skin(SkinFormat::Modern);
        let totem = render(&skin);
        // The face is an 8x8 to 8x8 transfer with the hat drawn over it
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(totem.get_pixel(4 + x, y), skin.get_pixel(40 + x, 8 + y));
            }
        }
    }

    #[test]
    fn test_nearest_neighbour_downscale() {
        let skin = gradient_skin(SkinFormat::Modern);
        let map = RegionMap::classic();
        let mut totem = TotemImage::new();
        let body = map.get("body").unwrap();
        blit_region(&skin, body, &mut totem);

        // 12 source rows onto 5: centres land on rows 1, 3, 6, 8, 10
        let rows = [21, 23, 26, 28, 30];
        for (dy, sy) in rows.iter().enumerate() {
            assert_eq!(totem.get_pixel(4, 8 + dy as u32), skin.get_pixel(20, *sy));
            assert_eq!(totem.get_pixel(11, 8 + dy as u32), skin.get_pixel(27, *sy));
        }
    }

    #[test]
    fn test_deterministic() {
        let skin = gradient_skin(SkinFormat::Modern);
        let first = render(&skin).to_png().unwrap();
        let second = render(&skin).to_png().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overlay_wins_over_base() {
        let mut skin = SkinImage::blank(SkinFormat::Modern);
        let map = RegionMap::classic();
        for region in map.iter() {
            let color = if region.is_overlay() { BLUE } else { RED };
            skin.fill_rect(region.src, color);
        }

        let totem = render_with(&skin, map);
        for region in map.iter().filter(|r| r.is_overlay()) {
            for y in region.dest.y..region.dest.bottom() {
                for x in region.dest.x..region.dest.right() {
                    assert_eq!(totem.get_pixel(x, y), BLUE, "{} at ({}, {})", region.name, x, y);
                }
            }
        }
    }

    #[test]
    fn test_transparent_overlay_keeps_base() {
        let mut skin = SkinImage::blank(SkinFormat::Modern);
        let map = RegionMap::classic();
        for region in map.iter().filter(|r| !r.is_overlay()) {
            skin.fill_rect(region.src, RED);
        }

        let totem = render_with(&skin, map);
        for region in map.iter() {
            for y in region.dest.y..region.dest.bottom() {
                for x in region.dest.x..region.dest.right() {
                    assert_eq!(totem.get_pixel(x, y), RED);
                }
            }
        }
    }

    #[test]
    fn test_uncovered_pixels_stay_transparent() {
        for model in [ArmModel::Classic, ArmModel::Slim] {
            let map = RegionMap::for_model(model);
            let totem = render_with(&opaque_skin(SkinFormat::Modern, RED), map);
            for y in 0..TOTEM_SIZE {
                for x in 0..TOTEM_SIZE {
                    let covered = map.iter().any(|r| r.dest.contains(x, y));
                    let alpha = totem.get_pixel(x, y)[3];
                    if covered {
                        assert_eq!(alpha, 255, "({}, {}) should be drawn", x, y);
                    } else {
                        assert_eq!(alpha, 0, "({}, {}) should stay transparent", x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_legacy_skin_skips_second_layer() {
        let skin = opaque_skin(SkinFormat::Legacy, RED);
        let (totem, report) = render_report(&skin, RegionMap::classic());

        assert!(report.drawn.contains(&"face"));
        assert!(report.drawn.contains(&"faceOverlay"));
        assert!(report.drawn.contains(&"rightArm"));
        assert!(report.skipped.contains(&"bodyOverlay"));
        assert!(report.skipped.contains(&"leftArm"));
        assert!(report.skipped.contains(&"leftLegTop"));
        assert_eq!(report.drawn.len() + report.skipped.len(), RegionMap::classic().len());

        // Left arm and left leg only come from rows past 32
        assert_eq!(totem.get_pixel(13, 9)[3], 0);
        assert_eq!(totem.get_pixel(10, 13)[3], 0);
        assert_eq!(totem.get_pixel(2, 9), RED);
    }

    #[test]
    fn test_source_over_blending() {
        assert_eq!(source_over([9, 9, 9, 0], RED), RED);
        assert_eq!(source_over(BLUE, RED), BLUE);
        assert_eq!(source_over([0, 0, 255, 128], [0, 0, 0, 0]), [0, 0, 255, 128]);

        let mixed = source_over([0, 0, 255, 128], RED);
        assert_eq!(mixed[3], 255);
        assert_eq!(mixed[0], 127);
        assert_eq!(mixed[2], 128);
    }
}
