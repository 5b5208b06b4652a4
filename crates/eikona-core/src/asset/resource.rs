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

use super::Asset;
use crate::math::Extent2D;

/// A self-contained, renderer-ready encoding of one scaled image.
///
/// The URI carries the complete PNG payload, so a consumer can decode and
/// display the image without ever touching the original source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledResource {
    /// `data:image/png;base64,…` URI holding the encoded scaled image.
    pub uri: String,
    /// Pixel dimensions of the encoded (already scaled) image.
    pub extent: Extent2D,
}

impl Asset for ScaledResource {}
