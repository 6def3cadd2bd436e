//! The seam between the loader and whatever actually opens graphics libraries.
//!
//! Library-file layout and bitmap decoding live behind these traits: the
//! Win32 provider delegates both to the operating system, the in-memory
//! provider stores already-materialized images.

use image::RgbaImage;

use crate::category::GfxCategory;
use crate::error::GfxResult;

/// An opened graphics library.
///
/// The handle it wraps is released when the value is dropped; the loader
/// relies on this for its exactly-once release guarantee.
pub trait GfxLibrary: Send {
    /// Load the image resource with the given id.
    ///
    /// Fails with [`GfxError::ResourceNotFound`](crate::GfxError::ResourceNotFound)
    /// when the id has no corresponding image resource.
    fn load_bitmap(&self, resource_id: u32) -> GfxResult<RgbaImage>;
}

/// Trait for opening graphics libraries by category.
pub trait LibraryProvider: Send {
    /// The library type this provider opens.
    type Library: GfxLibrary;

    /// Open the library for a category.
    ///
    /// Fails with [`GfxError::LibraryUnavailable`](crate::GfxError::LibraryUnavailable)
    /// when no library can be located or opened for the category.
    fn open(&self, category: GfxCategory) -> GfxResult<Self::Library>;
}
