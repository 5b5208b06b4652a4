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

//! Provides the foundational traits and primitive types of the asset system.
//!
//! This module defines the "common language" for asset-related operations:
//! the [`Asset`] marker trait, stable keys used to reference assets, the
//! descriptors a caller hands to the batch loader, and the shared handle
//! type through which loaded resources travel to the game layer. It has no
//! knowledge of how assets are fetched, decoded, or scaled.

mod descriptor;
mod key;
mod resource;

pub use descriptor::*;
pub use key::*;
pub use resource::*;

use std::{collections::HashMap, ops::Deref, sync::Arc};

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits enforce the guarantees background loading relies on:
/// `Send + Sync` so assets can cross task boundaries, and `'static` so
/// they can be stored for the lifetime of the application.
pub trait Asset: Send + Sync + 'static {}

/// The fully loaded output of one batch: every ready resource, by key.
pub type AssetMap = HashMap<AssetKey, AssetHandle<ScaledResource>>;

/// A thread-safe, reference-counted handle to a loaded asset.
///
/// Cloning a handle only bumps the reference count; the underlying asset
/// data is shared and freed when the last handle is dropped.
#[derive(Debug)]
pub struct AssetHandle<T: Asset>(Arc<T>);

impl<T: Asset> AssetHandle<T> {
    /// Wraps a freshly loaded asset in a shared handle.
    pub fn new(asset: T) -> Self {
        Self(Arc::new(asset))
    }
}

impl<T: Asset> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Asset> Deref for AssetHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
