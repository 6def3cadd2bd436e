//! Module handles and GDI bitmap extraction.

use std::ffi::c_void;
use std::os::windows::ffi::OsStrExt;

use gfxres::{GfxCategory, GfxError, GfxLibrary, GfxResult, LibraryProvider};
use image::{Rgba, RgbaImage};
use windows::Win32::Foundation::{FreeLibrary, HMODULE};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAP, BITMAPINFO, BITMAPINFOHEADER, CreateCompatibleDC, DIB_RGB_COLORS, DeleteDC,
    DeleteObject, GetDIBits, GetObjectW, HBITMAP,
};
use windows::Win32::System::LibraryLoader::{
    LOAD_LIBRARY_AS_DATAFILE, LOAD_LIBRARY_AS_IMAGE_RESOURCE, LoadLibraryExW,
};
use windows::Win32::UI::WindowsAndMessaging::{IMAGE_BITMAP, LR_CREATEDIBSECTION, LoadImageW};
use windows::core::PCWSTR;

use crate::{Win32LibraryProvider, resource_index};

impl LibraryProvider for Win32LibraryProvider {
    type Library = Win32Library;

    fn open(&self, category: GfxCategory) -> GfxResult<Self::Library> {
        let path = self.library_path(category);
        if !path.is_file() {
            return Err(GfxError::LibraryUnavailable {
                category,
                reason: format!("no library file at '{}'", path.display()),
            });
        }

        let wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        // Data-only load: the module is never executed, only its resource
        // table is read.
        let module = unsafe {
            LoadLibraryExW(
                PCWSTR::from_raw(wide.as_ptr()),
                None,
                LOAD_LIBRARY_AS_DATAFILE | LOAD_LIBRARY_AS_IMAGE_RESOURCE,
            )
        }
        .map_err(|err| GfxError::LibraryUnavailable {
            category,
            reason: format!("'{}': {}", path.display(), err),
        })?;

        Ok(Win32Library { category, module })
    }
}

/// A graphics library opened as a data-only Win32 module.
///
/// Dropping the value frees the module handle.
pub struct Win32Library {
    category: GfxCategory,
    module: HMODULE,
}

// Module handles are process-global and this wrapper owns the single
// FreeLibrary call for its module.
unsafe impl Send for Win32Library {}

impl GfxLibrary for Win32Library {
    fn load_bitmap(&self, resource_id: u32) -> GfxResult<RgbaImage> {
        // MAKEINTRESOURCE: the ordinal rides in the pointer's low word.
        let name = PCWSTR(resource_index(resource_id) as usize as *const u16);

        let handle = unsafe {
            LoadImageW(
                Some(self.module.into()),
                name,
                IMAGE_BITMAP,
                0,
                0,
                LR_CREATEDIBSECTION,
            )
        }
        .map_err(|_| GfxError::ResourceNotFound {
            category: self.category,
            resource_id,
        })?;

        let bitmap = HBITMAP(handle.0);
        let image = unsafe { extract_pixels(bitmap) };
        unsafe {
            let _ = DeleteObject(bitmap.into());
        }

        image.ok_or(GfxError::ResourceNotFound {
            category: self.category,
            resource_id,
        })
    }
}

impl Drop for Win32Library {
    fn drop(&mut self) {
        unsafe {
            let _ = FreeLibrary(self.module);
        }
        tracing::trace!("Freed {} library module", self.category);
    }
}

/// Read a DIB section's pixels into an `RgbaImage`.
///
/// The resources are 8- or 24-bit, so the DIB's alpha byte carries nothing;
/// the output is fully opaque and transparency keying is left to the loader.
unsafe fn extract_pixels(bitmap: HBITMAP) -> Option<RgbaImage> {
    let mut info = BITMAP::default();
    let got = unsafe {
        GetObjectW(
            bitmap.into(),
            std::mem::size_of::<BITMAP>() as i32,
            Some(&mut info as *mut BITMAP as *mut c_void),
        )
    };
    if got == 0 || info.bmWidth <= 0 || info.bmHeight <= 0 {
        return None;
    }

    let width = info.bmWidth;
    let height = info.bmHeight;

    let mut header = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            // Negative height requests top-down scanline order.
            biHeight: -height,
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    // 32bpp rows need no padding.
    let mut pixels = vec![0u8; (width as usize) * (height as usize) * 4];

    let rows = unsafe {
        let hdc = CreateCompatibleDC(None);
        let rows = GetDIBits(
            hdc,
            bitmap,
            0,
            height as u32,
            Some(pixels.as_mut_ptr() as *mut c_void),
            &mut header,
            DIB_RGB_COLORS,
        );
        let _ = DeleteDC(hdc);
        rows
    };
    if rows == 0 {
        return None;
    }

    let mut image = RgbaImage::new(width as u32, height as u32);
    for (pixel, bgra) in image.pixels_mut().zip(pixels.chunks_exact(4)) {
        *pixel = Rgba([bgra[2], bgra[1], bgra[0], 0xFF]);
    }

    Some(image)
}
