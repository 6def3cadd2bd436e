//! Win32 graphics library provider.
//!
//! The client's graphics libraries are native modules with their bitmaps in
//! the module resource table. This provider opens each library file as a
//! data-only module and lets the OS resolve and decode the resources, so no
//! file-layout parsing happens here.
//!
//! Only the module-handle plumbing is Windows-specific; path resolution and
//! the resource-index convention are plain code, usable (and tested) on any
//! platform.

use std::path::{Path, PathBuf};

use gfxres::GfxCategory;

#[cfg(windows)]
mod native;

#[cfg(windows)]
pub use native::Win32Library;

/// Image resources start at this ordinal in every graphics library; the
/// public resource ids used by the game are relative to it.
pub const RESOURCE_ID_OFFSET: u32 = 100;

/// The resource-table ordinal for a public resource id.
pub fn resource_index(resource_id: u32) -> u32 {
    RESOURCE_ID_OFFSET + resource_id
}

/// Opens graphics libraries from a directory of `gfxNNN.egf` files.
pub struct Win32LibraryProvider {
    base_dir: PathBuf,
}

impl Win32LibraryProvider {
    /// Create a provider rooted at the client's gfx directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// The file a category's library is expected at.
    pub fn library_path(&self, category: GfxCategory) -> PathBuf {
        self.base_dir.join(category.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_index_is_offset_by_100() {
        assert_eq!(resource_index(0), 100);
        assert_eq!(resource_index(5), 105);
        assert_eq!(resource_index(269), 369);
    }

    #[test]
    fn test_library_path_uses_category_file_name() {
        let provider = Win32LibraryProvider::new("client/gfx");
        let path = provider.library_path(GfxCategory::MapTiles);
        assert_eq!(path, PathBuf::from("client/gfx").join("gfx003.egf"));
    }
}
