// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Raster decoding.

use eikona_core::{math::Extent2D, raster::PixelSurface};
use thiserror::Error;

/// The source bytes could not be turned into a pixel surface.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes were not a decodable raster image.
    #[error("failed to decode image data: {0}")]
    InvalidImage(#[from] image::ImageError),
}

/// A trait for lanes that decode a specific kind of raster data from a
/// byte slice.
///
/// This is the "Data Plane" seam of the load path. Implementors perform
/// the potentially CPU-intensive work of parsing raw file data into an
/// engine-ready [`PixelSurface`]; they never touch the filesystem.
pub trait ImageLoaderLane {
    /// Parses a byte slice into a freshly allocated pixel surface.
    fn load(&self, bytes: &[u8]) -> Result<PixelSurface, DecodeError>;
}

/// A lane dedicated to decoding browser-style raster formats (PNG, GIF,
/// JPEG, …) on the CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterDecodeLane;

impl ImageLoaderLane for RasterDecodeLane {
    fn load(&self, bytes: &[u8]) -> Result<PixelSurface, DecodeError> {
        let decoded = image::load_from_memory(bytes)?;

        // Normalize to RGBA8 (raw pixel copy, no color-space conversion)
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::trace!("decoded {width}x{height} source image");

        Ok(PixelSurface::from_raw(
            Extent2D::new(width, height),
            rgba.into_raw(),
        ))
    }
}
