//! Error types for graphics resource loading.

use std::fmt;

use crate::category::GfxCategory;

/// Errors that can occur while loading graphics resources.
#[derive(Debug)]
pub enum GfxError {
    /// The library for a category could not be located or opened.
    LibraryUnavailable {
        /// The category whose library was requested.
        category: GfxCategory,
        /// Description of why the open failed.
        reason: String,
    },

    /// An opened library has no image resource with the requested id.
    ResourceNotFound {
        /// The category whose library was searched.
        category: GfxCategory,
        /// The id that has no corresponding resource.
        resource_id: u32,
    },

    /// The loader was disposed before this operation.
    Disposed,
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfxError::LibraryUnavailable { category, reason } => {
                write!(f, "Graphics library for {} unavailable: {}", category, reason)
            }
            GfxError::ResourceNotFound {
                category,
                resource_id,
            } => {
                write!(f, "No image resource {} in {} library", resource_id, category)
            }
            GfxError::Disposed => {
                write!(f, "Graphics loader has been disposed")
            }
        }
    }
}

impl std::error::Error for GfxError {}

/// Result type alias for graphics resource operations.
pub type GfxResult<T> = Result<T, GfxError>;
