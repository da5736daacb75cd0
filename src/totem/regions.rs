//! Skin to totem region tables.
//!
//! Each entry copies one front-facing skin surface into the 16x16 totem
//! doll. Part proportions on the totem do not follow a linear scale-down of
//! the skin, so every region carries its own source and destination size.
//!
//! Entries are listed in paint order. Every overlay directly follows its
//! base so second-layer pixels land on top.

use crate::types::{ArmModel, Rect};

/// One named source to destination transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRegion {
    /// Unique key, e.g. `"face"` or `"rightArmOverlay"`.
    pub name: &'static str,
    /// Rectangle sampled from the skin.
    pub src: Rect,
    /// Rectangle drawn on the totem.
    pub dest: Rect,
}

impl TextureRegion {
    /// Whether this region samples the second skin layer.
    pub fn is_overlay(&self) -> bool {
        self.name.ends_with("Overlay")
    }

    /// Name of the region this overlay is painted over.
    pub fn base_name(&self) -> Option<&'static str> {
        self.name.strip_suffix("Overlay")
    }
}

/// An ordered, immutable set of regions. Iteration order is paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMap {
    regions: &'static [TextureRegion],
}

impl RegionMap {
    /// Table for classic (4 pixel arm) skins.
    pub fn classic() -> Self {
        Self { regions: &CLASSIC }
    }

    /// Table for slim (3 pixel arm) skins.
    pub fn slim() -> Self {
        Self { regions: &SLIM }
    }

    pub fn for_model(model: ArmModel) -> Self {
        match model {
            ArmModel::Classic => Self::classic(),
            ArmModel::Slim => Self::slim(),
        }
    }

    /// Look up a region by name.
    pub fn get(&self, name: &str) -> Option<&'static TextureRegion> {
        self.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, TextureRegion> {
        let regions: &'static [TextureRegion] = self.regions;
        regions.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.iter().map(|r| r.name)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionMap {
    fn default() -> Self {
        Self::classic()
    }
}

impl IntoIterator for RegionMap {
    type Item = &'static TextureRegion;
    type IntoIter = std::slice::Iter<'static, TextureRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

const REGION_COUNT: usize = 24;

static CLASSIC: [TextureRegion; REGION_COUNT] = layout(4);
static SLIM: [TextureRegion; REGION_COUNT] = layout(3);

const fn region(name: &'static str, src: Rect, dest: Rect) -> TextureRegion {
    TextureRegion { name, src, dest }
}

/// Build the table for a given arm width.
///
/// Arm cubes unwrap as top, bottom on the first row and right, front, left,
/// back below, so the palm (bottom face) starts `arm` pixels after the top.
const fn layout(arm: u32) -> [TextureRegion; REGION_COUNT] {
    let head = Rect::new(4, 0, 8, 8);
    let torso = Rect::new(4, 8, 8, 5);
    let right_arm = Rect::new(1, 8, 3, 4);
    let right_palm = Rect::new(1, 12, 3, 1);
    let left_arm = Rect::new(12, 8, 3, 4);
    let left_palm = Rect::new(12, 12, 3, 1);
    let right_leg = [Rect::new(4, 13, 4, 1), Rect::new(5, 14, 3, 1), Rect::new(6, 15, 2, 1)];
    let left_leg = [Rect::new(8, 13, 4, 1), Rect::new(8, 14, 3, 1), Rect::new(8, 15, 2, 1)];

    [
        region("face", Rect::new(8, 8, 8, 8), head),
        region("faceOverlay", Rect::new(40, 8, 8, 8), head),
        region("body", Rect::new(20, 20, 8, 12), torso),
        region("bodyOverlay", Rect::new(20, 36, 8, 12), torso),
        region("rightArm", Rect::new(44, 20, arm, 12), right_arm),
        region("rightArmOverlay", Rect::new(44, 36, arm, 12), right_arm),
        region("rightPalm", Rect::new(44 + arm, 16, arm, 4), right_palm),
        region("rightPalmOverlay", Rect::new(44 + arm, 32, arm, 4), right_palm),
        region("leftArm", Rect::new(36, 52, arm, 12), left_arm),
        region("leftArmOverlay", Rect::new(52, 52, arm, 12), left_arm),
        region("leftPalm", Rect::new(36 + arm, 48, arm, 4), left_palm),
        region("leftPalmOverlay", Rect::new(52 + arm, 48, arm, 4), left_palm),
        region("rightLegTop", Rect::new(4, 20, 4, 4), right_leg[0]),
        region("rightLegTopOverlay", Rect::new(4, 36, 4, 4), right_leg[0]),
        region("rightLegMiddle", Rect::new(4, 24, 4, 4), right_leg[1]),
        region("rightLegMiddleOverlay", Rect::new(4, 40, 4, 4), right_leg[1]),
        region("rightLegBottom", Rect::new(4, 28, 4, 4), right_leg[2]),
        region("rightLegBottomOverlay", Rect::new(4, 44, 4, 4), right_leg[2]),
        region("leftLegTop", Rect::new(20, 52, 4, 4), left_leg[0]),
        region("leftLegTopOverlay", Rect::new(4, 52, 4, 4), left_leg[0]),
        region("leftLegMiddle", Rect::new(20, 56, 4, 4), left_leg[1]),
        region("leftLegMiddleOverlay", Rect::new(4, 56, 4, 4), left_leg[1]),
        region("leftLegBottom", Rect::new(20, 60, 4, 4), left_leg[2]),
        region("leftLegBottomOverlay", Rect::new(4, 60, 4, 4), left_leg[2]),
    ]
}
