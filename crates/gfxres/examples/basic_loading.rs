//! Loads a few bitmaps through an in-memory provider.
//!
//! Run with: cargo run --example basic_loading

use gfxres::{GfxCategory, GfxLoader, LoadOptions, MemoryLibraryProvider, RgbaImage};
use image::Rgba;

fn checker(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([200, 200, 200, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    gfxres::logging::init();

    let mut provider = MemoryLibraryProvider::new();
    provider.insert(GfxCategory::MapTiles, 5, checker(16));
    provider.insert(GfxCategory::MapTiles, 9, checker(32));
    provider.insert(GfxCategory::Items, 1, checker(8));

    let mut loader = GfxLoader::new(provider);

    // First load for a category opens its library; the second reuses it.
    let tile = loader.load(GfxCategory::MapTiles, 5)?;
    println!("tile 5: {}x{}", tile.width(), tile.height());

    let tile = loader.load(GfxCategory::MapTiles, 9)?;
    println!("tile 9: {}x{}", tile.width(), tile.height());

    // Transparency keying turns the fill color into transparent pixels.
    let item = loader.load_with_options(
        GfxCategory::Items,
        1,
        LoadOptions::new().transparent(true),
    )?;
    let transparent = item.pixels().filter(|p| p.0[3] == 0).count();
    println!("item 1: {} transparent pixels", transparent);

    println!("open libraries: {}", loader.open_count());
    loader.dispose();

    Ok(())
}
