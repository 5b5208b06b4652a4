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

use super::{AssetFetcher, FsFetcher};
use eikona_core::{asset::ScaledResource, LoadError};
use eikona_lanes::image_lane::{scale_nearest, to_data_uri, ImageLoaderLane, RasterDecodeLane};
use std::{num::NonZeroU32, path::Path, sync::Arc};

/// Loads one image source end to end: fetch, decode, upscale, re-encode.
///
/// Each invocation allocates its own surfaces, so any number of loads can
/// run concurrently without coordination.
#[derive(Clone)]
pub struct ScaledImageLoader {
    fetcher: Arc<dyn AssetFetcher>,
    decode: RasterDecodeLane,
    scale: NonZeroU32,
}

impl ScaledImageLoader {
    /// Creates a loader reading from the local filesystem.
    pub fn new(scale: NonZeroU32) -> Self {
        Self {
            fetcher: Arc::new(FsFetcher),
            decode: RasterDecodeLane,
            scale,
        }
    }

    /// Replaces the byte source, e.g. with an in-memory fetcher in tests.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn AssetFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// The magnification factor applied to every loaded image.
    pub fn scale(&self) -> NonZeroU32 {
        self.scale
    }

    /// Produces the scaled, re-encoded resource for the image at `source`.
    pub async fn load_scaled(&self, source: &Path) -> Result<ScaledResource, LoadError> {
        let bytes = self
            .fetcher
            .fetch(source)
            .await
            .map_err(|err| LoadError::Io {
                path: source.to_owned(),
                source: err,
            })?;

        let surface = self
            .decode
            .load(&bytes)
            .map_err(|err| LoadError::Decode {
                path: source.to_owned(),
                details: err.to_string(),
            })?;

        let scaled = scale_nearest(&surface, self.scale);
        let resource = to_data_uri(&scaled).map_err(|err| LoadError::Encode {
            details: err.to_string(),
        })?;

        log::debug!(
            "loaded '{}': {}x{} -> {}x{}",
            source.display(),
            surface.extent().width,
            surface.extent().height,
            resource.extent.width,
            resource.extent.height
        );
        Ok(resource)
    }
}
