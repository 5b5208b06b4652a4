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

//! Fixed-size frame grids over a scaled resource.

use eikona_core::{
    asset::{AssetHandle, ScaledResource},
    math::{Extent2D, Origin2D},
};
use std::fmt;

/// The sheet and frame dimensions do not yield at least one frame.
#[derive(Debug)]
pub struct EmptySheet {
    /// Dimensions of the backing resource.
    pub sheet: Extent2D,
    /// Requested frame dimensions.
    pub frame: Extent2D,
}

impl fmt::Display for EmptySheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A {}x{} sheet holds no complete {}x{} frames",
            self.sheet.width, self.sheet.height, self.frame.width, self.frame.height
        )
    }
}

impl std::error::Error for EmptySheet {}

/// A grid of equally sized frames sliced out of one scaled resource.
///
/// Frames are indexed row-major, left to right then top to bottom, the way
/// a sprite-sheet loader numbers them. Trailing pixels that do not fill a
/// whole frame are ignored.
pub struct SpriteSheet {
    resource: AssetHandle<ScaledResource>,
    frame: Extent2D,
    columns: u32,
    rows: u32,
}

impl SpriteSheet {
    /// Lays a `frame`-sized grid over `resource`.
    pub fn new(
        resource: AssetHandle<ScaledResource>,
        frame: Extent2D,
    ) -> Result<Self, EmptySheet> {
        let sheet = resource.extent;
        let columns = if frame.width == 0 { 0 } else { sheet.width / frame.width };
        let rows = if frame.height == 0 { 0 } else { sheet.height / frame.height };
        if columns == 0 || rows == 0 {
            return Err(EmptySheet { sheet, frame });
        }
        Ok(Self {
            resource,
            frame,
            columns,
            rows,
        })
    }

    /// The resource backing this sheet.
    pub fn resource(&self) -> &ScaledResource {
        &self.resource
    }

    /// Dimensions of a single frame.
    pub fn frame_extent(&self) -> Extent2D {
        self.frame
    }

    /// Total number of complete frames in the sheet.
    pub fn frame_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// The pixel region of frame `index`, or `None` past the last frame.
    pub fn frame_rect(&self, index: u32) -> Option<(Origin2D, Extent2D)> {
        if index >= self.frame_count() {
            return None;
        }
        let origin = Origin2D {
            x: (index % self.columns) * self.frame.width,
            y: (index / self.columns) * self.frame.height,
        };
        Some((origin, self.frame))
    }
}
