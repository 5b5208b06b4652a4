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

//! Re-serialization of a pixel surface into a transportable resource.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use eikona_core::{asset::ScaledResource, raster::PixelSurface};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use thiserror::Error;

/// Prefix of every resource URI produced by [`to_data_uri`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// The surface could not be re-serialized.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The PNG encoder rejected the surface.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Serializes the whole surface into a self-contained
/// `data:image/png;base64,…` resource.
///
/// The result can be handed to any PNG consumer without re-decoding
/// against the original source file.
pub fn to_data_uri(surface: &PixelSurface) -> Result<ScaledResource, EncodeError> {
    let extent = surface.extent();

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        surface.data(),
        extent.width,
        extent.height,
        ExtendedColorType::Rgba8,
    )?;

    let mut uri = String::from(PNG_DATA_URI_PREFIX);
    STANDARD.encode_string(&png, &mut uri);
    log::trace!(
        "encoded {}x{} surface into {} byte data URI",
        extent.width,
        extent.height,
        uri.len()
    );

    Ok(ScaledResource { uri, extent })
}
