//! In-memory graphics libraries for tests and embedded assets.

use std::collections::HashMap;
use std::sync::Arc;

use image::RgbaImage;

use crate::category::GfxCategory;
use crate::error::{GfxError, GfxResult};
use crate::provider::{GfxLibrary, LibraryProvider};

/// A provider backed by images registered in memory.
///
/// Only categories that have at least one registered image can be opened;
/// everything else fails with `LibraryUnavailable`, which makes this the
/// provider of choice for exercising loader behavior without library files
/// on disk.
#[derive(Default)]
pub struct MemoryLibraryProvider {
    libraries: HashMap<GfxCategory, Arc<HashMap<u32, RgbaImage>>>,
}

impl MemoryLibraryProvider {
    /// Create a provider with no registered libraries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under a category and resource id.
    pub fn insert(&mut self, category: GfxCategory, resource_id: u32, image: RgbaImage) {
        let library = self.libraries.entry(category).or_default();
        Arc::make_mut(library).insert(resource_id, image);
    }

    /// Check whether a category has any registered images.
    pub fn contains(&self, category: GfxCategory) -> bool {
        self.libraries.contains_key(&category)
    }
}

impl LibraryProvider for MemoryLibraryProvider {
    type Library = MemoryLibrary;

    fn open(&self, category: GfxCategory) -> GfxResult<Self::Library> {
        let images = self
            .libraries
            .get(&category)
            .cloned()
            .ok_or_else(|| GfxError::LibraryUnavailable {
                category,
                reason: "no images registered".to_string(),
            })?;

        Ok(MemoryLibrary { category, images })
    }
}

/// An opened in-memory library.
pub struct MemoryLibrary {
    category: GfxCategory,
    images: Arc<HashMap<u32, RgbaImage>>,
}

impl GfxLibrary for MemoryLibrary {
    fn load_bitmap(&self, resource_id: u32) -> GfxResult<RgbaImage> {
        self.images
            .get(&resource_id)
            .cloned()
            .ok_or(GfxError::ResourceNotFound {
                category: self.category,
                resource_id,
            })
    }
}
