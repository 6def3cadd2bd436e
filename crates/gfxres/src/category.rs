//! Resource categories for the client's graphics libraries.

use std::fmt;

/// Identifies one of the shipped graphics libraries.
///
/// This is a closed set: every category corresponds to exactly one library
/// file, and the numbering is part of the on-disk contract. Category `n`
/// lives in `gfxNNN.egf` where `NNN` is `n` zero-padded to three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GfxCategory {
    PreLoginUi = 1,
    PostLoginUi = 2,
    MapTiles = 3,
    MapObjects = 4,
    MapOverlay = 5,
    MapWalls = 6,
    MapWallTop = 7,
    SkinSprites = 8,
    MaleHair = 9,
    FemaleHair = 10,
    MaleShoes = 11,
    FemaleShoes = 12,
    MaleArmor = 13,
    FemaleArmor = 14,
    MaleHat = 15,
    FemaleHat = 16,
    MaleWeapons = 17,
    FemaleWeapons = 18,
    MaleBack = 19,
    FemaleBack = 20,
    Npc = 21,
    Shadows = 22,
    Items = 23,
    Spells = 24,
    SpellIcons = 25,
}

impl GfxCategory {
    /// Every category, in library-file order.
    pub const ALL: [GfxCategory; 25] = [
        GfxCategory::PreLoginUi,
        GfxCategory::PostLoginUi,
        GfxCategory::MapTiles,
        GfxCategory::MapObjects,
        GfxCategory::MapOverlay,
        GfxCategory::MapWalls,
        GfxCategory::MapWallTop,
        GfxCategory::SkinSprites,
        GfxCategory::MaleHair,
        GfxCategory::FemaleHair,
        GfxCategory::MaleShoes,
        GfxCategory::FemaleShoes,
        GfxCategory::MaleArmor,
        GfxCategory::FemaleArmor,
        GfxCategory::MaleHat,
        GfxCategory::FemaleHat,
        GfxCategory::MaleWeapons,
        GfxCategory::FemaleWeapons,
        GfxCategory::MaleBack,
        GfxCategory::FemaleBack,
        GfxCategory::Npc,
        GfxCategory::Shadows,
        GfxCategory::Items,
        GfxCategory::Spells,
        GfxCategory::SpellIcons,
    ];

    /// The number of this category's library file.
    pub fn file_number(self) -> u8 {
        self as u8
    }

    /// The file name of this category's library, e.g. `gfx003.egf`.
    pub fn file_name(self) -> String {
        format!("gfx{:03}.egf", self as u8)
    }

    /// Look up a category by its library file number.
    ///
    /// Returns `None` for numbers outside the shipped set.
    pub fn from_file_number(number: u8) -> Option<GfxCategory> {
        GfxCategory::ALL.get(number.wrapping_sub(1) as usize).copied()
    }
}

impl fmt::Display for GfxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
