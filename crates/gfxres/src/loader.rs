//! The graphics loader: category plus resource id in, decoded bitmap out.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use image::{Rgba, RgbaImage};

use crate::category::GfxCategory;
use crate::error::{GfxError, GfxResult};
use crate::provider::{GfxLibrary, LibraryProvider};

/// Settings for how a bitmap should be loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Key the category's transparency color out of the returned image.
    pub transparent: bool,
}

impl LoadOptions {
    /// Create default load options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set transparency keying.
    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

/// Loads bitmaps from per-category graphics libraries, caching one opened
/// library per category.
///
/// Libraries are opened lazily on the first load for their category and
/// stay open until [`dispose`](GfxLoader::dispose) (or drop) releases them.
/// Every release happens exactly once; a disposed loader refuses further
/// loads rather than touching stale handles.
///
/// # Example
///
/// ```ignore
/// let mut loader = GfxLoader::new(Win32LibraryProvider::new("client/gfx"));
///
/// // First load for a category opens its library...
/// let tile = loader.load(GfxCategory::MapTiles, 5)?;
/// // ...subsequent loads reuse the cached handle.
/// let other = loader.load(GfxCategory::MapTiles, 9)?;
///
/// loader.dispose();
/// ```
pub struct GfxLoader<P: LibraryProvider> {
    /// Opens libraries on cache misses.
    provider: P,
    /// One opened library per category requested so far.
    libraries: HashMap<GfxCategory, P::Library>,
    /// Set once by `dispose`; never cleared.
    disposed: bool,
}

impl<P: LibraryProvider> GfxLoader<P> {
    /// Create a loader with an empty cache.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            libraries: HashMap::new(),
            disposed: false,
        }
    }

    /// Load the bitmap with the given resource id from a category's library.
    ///
    /// Opens and caches the category's library on first use. The caller owns
    /// the returned image; the loader keeps no reference to it.
    pub fn load(&mut self, category: GfxCategory, resource_id: u32) -> GfxResult<RgbaImage> {
        self.load_with_options(category, resource_id, LoadOptions::default())
    }

    /// Load a bitmap with explicit options.
    pub fn load_with_options(
        &mut self,
        category: GfxCategory,
        resource_id: u32,
        options: LoadOptions,
    ) -> GfxResult<RgbaImage> {
        let library = self.library_for(category)?;
        let mut image = library.load_bitmap(resource_id)?;

        if options.transparent {
            apply_transparency_key(category, &mut image);
        }

        Ok(image)
    }

    /// Open every category's library up front.
    ///
    /// The client does this at startup so that a missing or corrupt library
    /// file surfaces immediately instead of mid-session. Already-open
    /// libraries are left alone; the first failed open aborts.
    pub fn open_all(&mut self) -> GfxResult<()> {
        for category in GfxCategory::ALL {
            self.library_for(category)?;
        }
        Ok(())
    }

    /// Release every cached library and refuse further loads.
    ///
    /// Each library handle is released exactly once, on the first call;
    /// calling this again is a no-op. Dropping the loader without calling
    /// `dispose` performs the same release.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        let released = self.libraries.len();
        self.libraries.clear();
        tracing::debug!("Graphics loader disposed, released {} libraries", released);
    }

    /// Whether `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The number of libraries currently open.
    pub fn open_count(&self) -> usize {
        self.libraries.len()
    }

    /// Whether a category's library is currently open.
    pub fn is_open(&self, category: GfxCategory) -> bool {
        self.libraries.contains_key(&category)
    }

    /// Get the cached library for a category, opening it if needed.
    ///
    /// A failed open leaves the cache unchanged.
    fn library_for(&mut self, category: GfxCategory) -> GfxResult<&P::Library> {
        if self.disposed {
            return Err(GfxError::Disposed);
        }

        match self.libraries.entry(category) {
            Entry::Occupied(entry) => {
                tracing::trace!("Reusing open {} library", category);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let library = self.provider.open(category).inspect_err(|err| {
                    tracing::warn!("Failed to open {} library: {}", category, err);
                })?;
                tracing::debug!("Opened {} library", category);
                Ok(entry.insert(library))
            }
        }
    }
}

impl<P: LibraryProvider> Drop for GfxLoader<P> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Key the category's transparency color out of an image.
///
/// The original sprite sheets mark transparent regions with a fill color
/// instead of an alpha channel: pure black everywhere except the hat
/// sheets, which use `0x080000` so that genuinely black pixels survive.
fn apply_transparency_key(category: GfxCategory, image: &mut RgbaImage) {
    let key = match category {
        GfxCategory::MaleHat | GfxCategory::FemaleHat => Rgba([0x08, 0x00, 0x00, 0xFF]),
        _ => Rgba([0x00, 0x00, 0x00, 0xFF]),
    };

    for pixel in image.pixels_mut() {
        if *pixel == key {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
}
