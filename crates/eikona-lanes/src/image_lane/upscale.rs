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

//! Nearest-neighbor integer magnification.

use eikona_core::raster::PixelSurface;
use std::num::NonZeroU32;

/// Magnifies `source` by the integer `factor` using strict nearest-neighbor
/// replication.
///
/// Every source pixel `(x, y)` is copied, bit-identical, into the whole
/// `factor × factor` destination block whose top-left corner is
/// `(x · factor, y · factor)`. No destination channel is computed from more
/// than one source pixel, so pixel-art edges stay hard. A factor of 1 is
/// the identity and still returns a freshly allocated surface.
pub fn scale_nearest(source: &PixelSurface, factor: NonZeroU32) -> PixelSurface {
    let factor = factor.get() as usize;
    let extent = source.extent();
    let scaled_extent = extent.scaled_by(factor as u32);

    let row_bytes = scaled_extent.width as usize * PixelSurface::BYTES_PER_PIXEL;
    let mut data = Vec::with_capacity(row_bytes * scaled_extent.height as usize);

    let mut scaled_row = Vec::with_capacity(row_bytes);
    for row in source.rows() {
        scaled_row.clear();
        for pixel in row {
            for _ in 0..factor {
                scaled_row.extend_from_slice(pixel);
            }
        }
        for _ in 0..factor {
            data.extend_from_slice(&scaled_row);
        }
    }

    PixelSurface::from_raw(scaled_extent, data)
}
