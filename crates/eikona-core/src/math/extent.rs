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

//! Provides structs for representing extents (sizes) and origins (offsets)
//! in 2D pixel space.
//!
//! These types use integer (`u32`) components, making them suitable for
//! representing pixel-based coordinates and sizes of images, windows, or
//! regions within them.

use serde::{Deserialize, Serialize};

/// A two-dimensional extent, typically representing width and height.
///
/// This is commonly used for image dimensions or window sizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates an extent from a width and a height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The number of pixels covered by this extent.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns this extent with both components multiplied by `factor`.
    pub fn scaled_by(&self, factor: u32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// A two-dimensional origin, typically representing an (x, y) offset.
///
/// This is often used to specify the top-left corner of a rectangular
/// region, such as a single frame inside a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Origin2D {
    /// The x-coordinate of the origin.
    pub x: u32,
    /// The y-coordinate of the origin.
    pub y: u32,
}
