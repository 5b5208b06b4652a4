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

use super::AssetKey;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One entry of the asset manifest: where to find a source image and the
/// key its scaled resource will be registered under.
///
/// Descriptors are owned by the caller. The pipeline never mutates them;
/// results are delivered separately, keyed by [`AssetKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Unique (per batch) name for the asset.
    pub key: AssetKey,
    /// Location of the source image.
    pub source: PathBuf,
}

impl AssetDescriptor {
    /// Creates a descriptor from a key and a source path.
    pub fn new(key: impl Into<AssetKey>, source: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            source: source.into(),
        }
    }
}
