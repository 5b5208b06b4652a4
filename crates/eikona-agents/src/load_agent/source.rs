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

use async_trait::async_trait;
use std::path::Path;

/// Supplies the raw bytes of an asset source.
///
/// This is the I/O half of a load, kept behind its own seam so the
/// decode/scale/encode lanes stay pure and so tests can inject latency or
/// failures without touching a filesystem.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Reads the complete byte content of `source`.
    async fn fetch(&self, source: &Path) -> std::io::Result<Vec<u8>>;
}

/// Fetches asset bytes from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFetcher;

#[async_trait]
impl AssetFetcher for FsFetcher {
    async fn fetch(&self, source: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(source).await
    }
}
