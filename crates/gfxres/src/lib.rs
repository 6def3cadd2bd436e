//! Category-indexed graphics library loading for 2D game clients.
//!
//! The client's bitmap assets ship embedded in per-category library files
//! (`gfx001.egf` through `gfx025.egf`). [`GfxLoader`] resolves a
//! `(category, resource id)` pair to a decoded [`RgbaImage`], opening each
//! category's library at most once and releasing every handle exactly once
//! at disposal.
//!
//! How a library is opened and how its resources decode is a
//! [`LibraryProvider`] concern: the `gfxres-win32` crate opens the files as
//! native modules through the OS resource table, while
//! [`MemoryLibraryProvider`] serves registered images for tests and
//! embedded assets.

pub mod category;
pub mod error;
pub mod loader;
pub mod logging;
pub mod memory;
pub mod provider;

pub use category::GfxCategory;
pub use error::{GfxError, GfxResult};
pub use loader::{GfxLoader, LoadOptions};
pub use memory::{MemoryLibrary, MemoryLibraryProvider};
pub use provider::{GfxLibrary, LibraryProvider};

pub use image::RgbaImage;
